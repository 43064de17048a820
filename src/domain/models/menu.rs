use serde::{Deserialize, Serialize};

use super::icon::MenuIcon;

/// A single navigation entry in the sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique within its section, used as the render key
    pub id: String,
    pub label: String,
    pub href: String,
    pub icon: MenuIcon,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        href: impl Into<String>,
        icon: MenuIcon,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: href.into(),
            icon,
        }
    }
}

/// Titled group of entries, rendered in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// All entries of a table in render order
pub fn menu_items(sections: &[MenuSection]) -> impl Iterator<Item = &MenuItem> {
    sections.iter().flat_map(|section| section.items.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_new() {
        let item = MenuItem::new("leads", "Leads", "/leads", MenuIcon::Users);
        assert_eq!(item.id, "leads");
        assert_eq!(item.label, "Leads");
        assert_eq!(item.href, "/leads");
        assert_eq!(item.icon, MenuIcon::Users);
    }

    #[test]
    fn test_section_deserializes_from_host_json() {
        let json = r#"{
            "title": "Reports",
            "items": [
                { "id": "weekly", "label": "Weekly", "href": "/reports/weekly", "icon": "BarChart3" }
            ]
        }"#;
        let section: MenuSection = serde_json::from_str(json).unwrap();
        assert_eq!(section.title, "Reports");
        assert_eq!(section.items.len(), 1);
        assert_eq!(section.items[0].id, "weekly");
        assert_eq!(section.items[0].icon, MenuIcon::BarChart3);
    }

    #[test]
    fn test_menu_items_in_order() {
        let sections = vec![
            MenuSection::new("A", vec![MenuItem::new("a", "A", "/a", MenuIcon::Home)]),
            MenuSection::new(
                "B",
                vec![
                    MenuItem::new("b", "B", "/b", MenuIcon::Star),
                    MenuItem::new("c", "C", "/c", MenuIcon::Eye),
                ],
            ),
        ];
        let hrefs: Vec<_> = menu_items(&sections).map(|item| item.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/a", "/b", "/c"]);
    }
}
