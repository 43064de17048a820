//! Pre-configured menu tables for Smart Flow Systems applications.
//!
//! Each table is built once on first access and never mutated. Hosts pick one
//! wholesale, clone and extend it, or build their own from
//! [`MenuIcon::REGISTRY`](crate::domain::models::MenuIcon::REGISTRY).

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

use crate::domain::models::{MenuIcon, MenuItem, MenuSection};
use crate::shared::errors::MenuError;

pub const MAIN_NAVIGATION: &str = "Main Navigation";
pub const USER_PROFILE_SETTINGS: &str = "User Profile & Settings";
pub const ADMIN_SYSTEM_TOOLS: &str = "Admin & System Tools";
pub const HELP_RESOURCES: &str = "Help & Resources";

fn item(id: &str, label: &str, href: &str, icon: MenuIcon) -> MenuItem {
    MenuItem::new(id, label, href, icon)
}

/// The three help entries shared by most archetypes
fn help_section() -> MenuSection {
    MenuSection::new(
        HELP_RESOURCES,
        vec![
            item("help", "Help Center", "/help", MenuIcon::HelpCircle),
            item("docs", "Documentation", "/docs", MenuIcon::FileText),
            item("support", "Contact Support", "/support", MenuIcon::MessageCircle),
        ],
    )
}

/// CRM application
pub static CRM_MENU_SECTIONS: Lazy<Vec<MenuSection>> = Lazy::new(|| {
    vec![
        MenuSection::new(
            MAIN_NAVIGATION,
            vec![
                item("dashboard", "Dashboard", "/dashboard", MenuIcon::LayoutDashboard),
                item("pipeline", "Pipeline", "/pipeline", MenuIcon::GitBranch),
                item("leads", "Leads", "/leads", MenuIcon::Users),
                item("tasks", "My Tasks", "/tasks", MenuIcon::CheckSquare),
            ],
        ),
        MenuSection::new(
            USER_PROFILE_SETTINGS,
            vec![
                item("profile", "My Profile", "/profile", MenuIcon::User),
                item("settings", "Settings", "/settings", MenuIcon::Settings),
                item("notifications", "Notifications", "/notifications", MenuIcon::Bell),
            ],
        ),
        MenuSection::new(
            ADMIN_SYSTEM_TOOLS,
            vec![
                item("admin", "Admin Panel", "/admin", MenuIcon::Shield),
                item("analytics", "Analytics", "/analytics", MenuIcon::BarChart3),
                item("users", "User Management", "/admin/users", MenuIcon::Users),
                item("system", "System Settings", "/admin/system", MenuIcon::Server),
            ],
        ),
        // CRM is the only archetype with a contact page
        MenuSection::new(
            HELP_RESOURCES,
            vec![
                item("help", "Help Center", "/help", MenuIcon::HelpCircle),
                item("docs", "Documentation", "/docs", MenuIcon::FileText),
                item("support", "Contact Support", "/support", MenuIcon::MessageCircle),
                item("contact", "Contact Us", "/contact", MenuIcon::Phone),
            ],
        ),
    ]
});

/// E-commerce / store application
pub static STORE_MENU_SECTIONS: Lazy<Vec<MenuSection>> = Lazy::new(|| {
    vec![
        MenuSection::new(
            MAIN_NAVIGATION,
            vec![
                item("home", "Home", "/", MenuIcon::Home),
                item("dashboard", "Dashboard", "/dashboard", MenuIcon::LayoutDashboard),
                item("products", "Products", "/products", MenuIcon::Package),
                item("orders", "Orders", "/orders", MenuIcon::ShoppingCart),
                item("sales", "Sales", "/sales", MenuIcon::DollarSign),
            ],
        ),
        MenuSection::new(
            USER_PROFILE_SETTINGS,
            vec![
                item("profile", "My Profile", "/profile", MenuIcon::User),
                item("settings", "Settings", "/settings", MenuIcon::Settings),
                item("favorites", "Favorites", "/favorites", MenuIcon::Heart),
                item("orders-history", "Order History", "/my-orders", MenuIcon::Archive),
            ],
        ),
        MenuSection::new(
            ADMIN_SYSTEM_TOOLS,
            vec![
                item("admin", "Admin Panel", "/admin", MenuIcon::Shield),
                item("analytics", "Analytics", "/analytics", MenuIcon::BarChart3),
                item("inventory", "Inventory", "/admin/inventory", MenuIcon::Database),
                item("customers", "Customers", "/admin/customers", MenuIcon::Users),
            ],
        ),
        help_section(),
    ]
});

/// Marketing and social media application
pub static MARKETING_MENU_SECTIONS: Lazy<Vec<MenuSection>> = Lazy::new(|| {
    vec![
        MenuSection::new(
            MAIN_NAVIGATION,
            vec![
                item("dashboard", "Dashboard", "/dashboard", MenuIcon::LayoutDashboard),
                item("campaigns", "Campaigns", "/campaigns", MenuIcon::Zap),
                item("content", "Content", "/content", MenuIcon::FileText),
                item("analytics", "Analytics", "/analytics", MenuIcon::TrendingUp),
                item("calendar", "Calendar", "/calendar", MenuIcon::Calendar),
            ],
        ),
        MenuSection::new(
            "Social Media",
            vec![
                item("posts", "Posts", "/posts", MenuIcon::Share2),
                item("schedule", "Schedule", "/schedule", MenuIcon::Clock),
                item("engagement", "Engagement", "/engagement", MenuIcon::Activity),
            ],
        ),
        MenuSection::new(
            USER_PROFILE_SETTINGS,
            vec![
                item("profile", "My Profile", "/profile", MenuIcon::User),
                item("settings", "Settings", "/settings", MenuIcon::Settings),
            ],
        ),
        MenuSection::new(
            ADMIN_SYSTEM_TOOLS,
            vec![
                item("admin", "Admin Panel", "/admin", MenuIcon::Shield),
                item("team", "Team Management", "/admin/team", MenuIcon::Users),
                item("integrations", "Integrations", "/admin/integrations", MenuIcon::Globe),
            ],
        ),
        help_section(),
    ]
});

/// Data query / analytics application
pub static DATA_QUERY_MENU_SECTIONS: Lazy<Vec<MenuSection>> = Lazy::new(|| {
    vec![
        MenuSection::new(
            MAIN_NAVIGATION,
            vec![
                item("dashboard", "Dashboard", "/dashboard", MenuIcon::LayoutDashboard),
                item("queries", "Queries", "/queries", MenuIcon::Search),
                item("data-sources", "Data Sources", "/data-sources", MenuIcon::Database),
                item("reports", "Reports", "/reports", MenuIcon::BarChart3),
                item("visualizations", "Visualizations", "/visualizations", MenuIcon::Activity),
            ],
        ),
        MenuSection::new(
            "Tools",
            vec![
                item("query-builder", "Query Builder", "/query-builder", MenuIcon::Code),
                item("filters", "Filters", "/filters", MenuIcon::Filter),
                item("export", "Export Data", "/export", MenuIcon::Download),
                item("import", "Import Data", "/import", MenuIcon::Upload),
            ],
        ),
        MenuSection::new(
            USER_PROFILE_SETTINGS,
            vec![
                item("profile", "My Profile", "/profile", MenuIcon::User),
                item("settings", "Settings", "/settings", MenuIcon::Settings),
                item("saved", "Saved Queries", "/saved", MenuIcon::Bookmark),
            ],
        ),
        MenuSection::new(
            ADMIN_SYSTEM_TOOLS,
            vec![
                item("admin", "Admin Panel", "/admin", MenuIcon::Shield),
                item("api", "API Management", "/admin/api", MenuIcon::Terminal),
                item("users", "User Management", "/admin/users", MenuIcon::Users),
            ],
        ),
        help_section(),
    ]
});

/// General purpose application
pub static GENERAL_MENU_SECTIONS: Lazy<Vec<MenuSection>> = Lazy::new(|| {
    vec![
        MenuSection::new(
            MAIN_NAVIGATION,
            vec![
                item("home", "Home", "/", MenuIcon::Home),
                item("dashboard", "Dashboard", "/dashboard", MenuIcon::LayoutDashboard),
            ],
        ),
        MenuSection::new(
            USER_PROFILE_SETTINGS,
            vec![
                item("profile", "My Profile", "/profile", MenuIcon::User),
                item("settings", "Settings", "/settings", MenuIcon::Settings),
            ],
        ),
        MenuSection::new(
            ADMIN_SYSTEM_TOOLS,
            vec![
                item("admin", "Admin Panel", "/admin", MenuIcon::Shield),
                item("analytics", "Analytics", "/analytics", MenuIcon::BarChart3),
            ],
        ),
        help_section(),
    ]
});

pub fn crm_menu_sections() -> &'static [MenuSection] {
    &CRM_MENU_SECTIONS
}

pub fn store_menu_sections() -> &'static [MenuSection] {
    &STORE_MENU_SECTIONS
}

pub fn marketing_menu_sections() -> &'static [MenuSection] {
    &MARKETING_MENU_SECTIONS
}

pub fn data_query_menu_sections() -> &'static [MenuSection] {
    &DATA_QUERY_MENU_SECTIONS
}

pub fn general_menu_sections() -> &'static [MenuSection] {
    &GENERAL_MENU_SECTIONS
}

/// Application families with a predefined menu table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuArchetype {
    Crm,
    Store,
    Marketing,
    DataQuery,
    #[default]
    General,
}

impl MenuArchetype {
    pub const ALL: [MenuArchetype; 5] = [
        MenuArchetype::Crm,
        MenuArchetype::Store,
        MenuArchetype::Marketing,
        MenuArchetype::DataQuery,
        MenuArchetype::General,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            MenuArchetype::Crm => "crm",
            MenuArchetype::Store => "store",
            MenuArchetype::Marketing => "marketing",
            MenuArchetype::DataQuery => "data-query",
            MenuArchetype::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MenuArchetype::Crm => "CRM",
            MenuArchetype::Store => "Store",
            MenuArchetype::Marketing => "Marketing & Social",
            MenuArchetype::DataQuery => "Data Query",
            MenuArchetype::General => "General",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|archetype| archetype.slug() == slug)
    }

    /// The predefined table for this archetype
    pub fn sections(&self) -> &'static [MenuSection] {
        match self {
            MenuArchetype::Crm => crm_menu_sections(),
            MenuArchetype::Store => store_menu_sections(),
            MenuArchetype::Marketing => marketing_menu_sections(),
            MenuArchetype::DataQuery => data_query_menu_sections(),
            MenuArchetype::General => general_menu_sections(),
        }
    }
}

impl fmt::Display for MenuArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for MenuArchetype {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(&s.to_lowercase()).ok_or_else(|| MenuError::UnknownArchetype(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::menu_items;
    use crate::shared::utils::validate_menu;

    #[test]
    fn test_all_tables_are_valid() {
        for archetype in MenuArchetype::ALL {
            let sections = archetype.sections();
            assert!(!sections.is_empty(), "{archetype} table is empty");
            validate_menu(sections).unwrap_or_else(|e| panic!("{archetype}: {e}"));
            assert!(menu_items(sections).all(|item| !item.href.is_empty()));
        }
    }

    #[test]
    fn test_all_tables_use_registry_icons() {
        for archetype in MenuArchetype::ALL {
            for section in archetype.sections() {
                for item in &section.items {
                    assert!(
                        MenuIcon::REGISTRY.contains(&item.icon),
                        "{archetype}/{} uses chrome icon {}",
                        item.id,
                        item.icon
                    );
                }
            }
        }
    }

    #[test]
    fn test_section_titles_in_order() {
        let titles: Vec<_> = marketing_menu_sections()
            .iter()
            .map(|section| section.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                MAIN_NAVIGATION,
                "Social Media",
                USER_PROFILE_SETTINGS,
                ADMIN_SYSTEM_TOOLS,
                HELP_RESOURCES,
            ]
        );
    }

    #[test]
    fn test_crm_table_contents() {
        let crm = crm_menu_sections();
        assert_eq!(crm.len(), 4);
        let main: Vec<_> = crm[0].items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(main, vec!["dashboard", "pipeline", "leads", "tasks"]);
        let href_of = |section: &MenuSection, id: &str| {
            section.items.iter().find(|item| item.id == id).map(|item| item.href.clone())
        };
        assert_eq!(href_of(&crm[3], "contact").as_deref(), Some("/contact"));
        assert_eq!(href_of(&crm[2], "users").as_deref(), Some("/admin/users"));
    }

    #[test]
    fn test_store_and_general_start_with_home() {
        for sections in [store_menu_sections(), general_menu_sections()] {
            let first = &sections[0].items[0];
            assert_eq!(first.id, "home");
            assert_eq!(first.href, "/");
            assert_eq!(first.icon, MenuIcon::Home);
        }
    }

    #[test]
    fn test_item_counts() {
        let count = |sections: &[MenuSection]| sections.iter().map(|s| s.items.len()).sum::<usize>();
        assert_eq!(count(crm_menu_sections()), 15);
        assert_eq!(count(store_menu_sections()), 16);
        assert_eq!(count(marketing_menu_sections()), 16);
        assert_eq!(count(data_query_menu_sections()), 18);
        assert_eq!(count(general_menu_sections()), 9);
    }

    #[test]
    fn test_archetype_slugs() {
        for archetype in MenuArchetype::ALL {
            assert_eq!(MenuArchetype::from_slug(archetype.slug()), Some(archetype));
            assert_eq!(archetype.to_string().parse::<MenuArchetype>().unwrap(), archetype);
        }
        assert_eq!("CRM".parse::<MenuArchetype>().unwrap(), MenuArchetype::Crm);
        assert!("erp".parse::<MenuArchetype>().is_err());
        assert_eq!(MenuArchetype::default(), MenuArchetype::General);
    }
}
