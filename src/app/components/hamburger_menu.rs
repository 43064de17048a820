//! Hamburger Menu Component
//!
//! Slide-in sidebar navigation for Smart Flow Systems applications. Renders a
//! trigger button, a dismiss overlay and a panel listing the menu sections,
//! with optional user info, sign out button and footer.
//!
//! ```ignore
//! HamburgerMenu {
//!     menu_sections: crm_menu_sections().to_vec(),
//!     user: current_user(),
//!     on_logout: move |_| sign_out(),
//!     current_path: route.to_string(),
//! }
//! ```

use chrono::{Datelike, Local};
use dioxus::prelude::*;

use super::icon::Icon;
use super::nav_link::{render_nav_link, LinkRenderer, NavLinkProps};
use crate::config::DEFAULT_APP_NAME;
use crate::domain::models::{MenuIcon, MenuItem, MenuSection, SfsUser};
use crate::shared::hooks::{dispatch_menu_event, use_menu_state, MenuEvent, MenuState};
use crate::shared::logging::{log_key_collision, log_logout, log_navigation};
use crate::shared::utils::{find_key_collisions, is_active};

const ACTIVE_ROW: &str = "bg-gold-600/20 text-gold-100 border-l-2 border-gold-500";
const INACTIVE_ROW: &str = "text-gold-300 hover:bg-gold-600/10 hover:text-gold-100";

/// Which optional blocks of the panel are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuDisplay {
    pub show_user_info: bool,
    pub show_logout_button: bool,
    pub show_footer: bool,
}

impl Default for MenuDisplay {
    fn default() -> Self {
        Self {
            show_user_info: true,
            show_logout_button: true,
            show_footer: true,
        }
    }
}

impl MenuDisplay {
    /// User block needs both the flag and a user
    pub fn user_info<'a>(&self, user: Option<&'a SfsUser>) -> Option<&'a SfsUser> {
        user.filter(|_| self.show_user_info)
    }

    /// Logout button needs both the flag and a handler
    pub fn logout_button(&self, has_handler: bool) -> bool {
        self.show_logout_button && has_handler
    }
}

#[component]
pub fn HamburgerMenu(
    /// Sections in render order
    menu_sections: Vec<MenuSection>,
    /// Path of the current route, used for highlighting
    current_path: String,
    #[props(default)] user: Option<SfsUser>,
    #[props(default)] on_logout: Option<EventHandler<()>>,
    #[props(default = DEFAULT_APP_NAME.to_string())] app_name: String,
    #[props(default)] app_subtitle: Option<String>,
    /// Host link primitive, bare anchor when absent
    #[props(default)] link: Option<LinkRenderer>,
    #[props(default = true)] show_user_info: bool,
    #[props(default = true)] show_logout_button: bool,
    #[props(default = true)] show_footer: bool,
) -> Element {
    let state = use_menu_state();
    let is_open = state().is_open();
    let is_hidden = !is_open;

    let display = MenuDisplay {
        show_user_info,
        show_logout_button,
        show_footer,
    };

    for (section, item_id) in find_key_collisions(&menu_sections) {
        log_key_collision(&section, &item_id);
    }

    let handle_logout = move |_| {
        log_logout();
        if let Some(handler) = &on_logout {
            handler.call(());
        }
        dispatch_menu_event(state, MenuEvent::Logout);
    };

    let trigger_icon = if is_open { MenuIcon::X } else { MenuIcon::Menu };
    let panel_class = state().panel_class();
    let year = Local::now().year();

    rsx! {
        // Hamburger button
        button {
            class: "p-2 text-gold-300 hover:text-gold-100 transition-colors focus:outline-none focus:ring-2 focus:ring-gold-500 rounded-md",
            aria_label: "Toggle menu",
            aria_expanded: "{is_open}",
            "data-menu-trigger": "true",
            onclick: move |_| dispatch_menu_event(state, MenuEvent::Trigger),
            Icon { icon: trigger_icon, class: "h-6 w-6" }
        }

        // Overlay
        if is_open {
            div {
                class: "fixed inset-0 bg-black/50 z-40 transition-opacity",
                "data-menu-overlay": "true",
                onclick: move |_| dispatch_menu_event(state, MenuEvent::Overlay),
            }
        }

        // Slide-in sidebar
        aside {
            class: "fixed top-0 left-0 h-full w-80 bg-brown-900 border-r border-gold-800/30 z-50 transform transition-transform duration-300 ease-in-out overflow-y-auto {panel_class}",
            aria_hidden: "{is_hidden}",

            // Header
            div { class: "flex items-center justify-between p-4 border-b border-gold-800/30",
                div { class: "flex flex-col",
                    div { class: "text-gold-shine text-lg font-extrabold", "{app_name}" }
                    if let Some(subtitle) = app_subtitle.as_ref().filter(|s| !s.is_empty()) {
                        span { class: "text-gold-300 text-xs", "{subtitle}" }
                    }
                }
                button {
                    class: "p-2 text-gold-300 hover:text-gold-100 transition-colors rounded-md",
                    aria_label: "Close menu",
                    onclick: move |_| dispatch_menu_event(state, MenuEvent::CloseButton),
                    Icon { icon: MenuIcon::X, class: "h-5 w-5" }
                }
            }

            // User info
            if let Some(user) = display.user_info(user.as_ref()) {
                div { class: "p-4 border-b border-gold-800/30", "data-menu-user": "true",
                    div { class: "flex items-center space-x-3",
                        div { class: "w-10 h-10 rounded-full bg-gold-600/20 border border-gold-500/30 flex items-center justify-center",
                            Icon { icon: MenuIcon::User, class: "h-5 w-5 text-gold-400" }
                        }
                        div {
                            div { class: "text-gold-100 font-semibold text-sm", "{user.display_name()}" }
                            if let Some(email) = user.email() {
                                div { class: "text-gold-400 text-xs", "{email}" }
                            }
                        }
                    }
                }
            }

            // Menu sections
            nav { class: "py-4",
                for (index, section) in menu_sections.iter().enumerate() {
                    div {
                        key: "{index}-{section.title}",
                        class: if index > 0 { "mt-6" } else { "" },
                        div { class: "px-4 mb-2",
                            h3 { class: "text-gold-400 text-xs font-bold uppercase tracking-wider",
                                "{section.title}"
                            }
                        }
                        div { class: "space-y-1 px-2",
                            for (position, item) in section.items.iter().enumerate() {
                                MenuEntry {
                                    key: "{position}-{item.id}",
                                    item: item.clone(),
                                    active: is_active(&current_path, &item.href),
                                    link,
                                }
                            }
                        }
                    }
                }
            }

            // Logout button
            if display.logout_button(on_logout.is_some()) {
                div { class: "p-4 border-t border-gold-800/30 mt-4",
                    button {
                        class: "w-full flex items-center justify-center space-x-2 px-4 py-2.5 bg-gold-600/10 hover:bg-gold-600/20 text-gold-300 hover:text-gold-100 rounded-md transition-colors border border-gold-800/30",
                        "data-menu-logout": "true",
                        onclick: handle_logout,
                        Icon { icon: MenuIcon::LogOut, class: "h-4 w-4" }
                        span { class: "font-medium text-sm", "Sign Out" }
                    }
                }
            }

            // Footer
            if display.show_footer {
                div { class: "p-4 text-center",
                    p { class: "text-gold-500 text-xs", "© {year} {DEFAULT_APP_NAME}" }
                }
            }
        }
    }
}

/// One navigation row wrapped in the link primitive
#[component]
fn MenuEntry(
    item: MenuItem,
    active: bool,
    link: Option<LinkRenderer>,
) -> Element {
    let state = use_context::<Signal<MenuState>>();
    let row_class = if active { ACTIVE_ROW } else { INACTIVE_ROW };
    let icon_class = if active { "h-5 w-5 text-gold-400" } else { "h-5 w-5" };

    let item_id = item.id.clone();
    let target = item.href.clone();
    let onclick = EventHandler::new(move |_: ()| {
        log_navigation(&item_id, &target);
        dispatch_menu_event(state, MenuEvent::Navigate);
    });

    let children = rsx! {
        div {
            class: "flex items-center space-x-3 px-3 py-2.5 rounded-md transition-colors cursor-pointer {row_class}",
            "data-active": "{active}",
            Icon { icon: item.icon, class: icon_class }
            span { class: "font-medium text-sm", "{item.label}" }
        }
    };

    render_nav_link(
        link,
        NavLinkProps {
            href: item.href,
            onclick,
            children,
        },
    )
}
