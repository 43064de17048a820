// Public API exports (shared by every renderer)
pub mod config;
pub mod domain;
pub mod shared;

// Sidebar components and the demo app
pub mod app;

pub use app::components::{DefaultLink, HamburgerMenu, Icon, LinkRenderer, NavLinkProps};
pub use config::{
    crm_menu_sections, data_query_menu_sections, general_menu_sections,
    marketing_menu_sections, store_menu_sections, MenuArchetype,
};
pub use domain::models::{MenuIcon, MenuItem, MenuSection, SfsUser};
pub use shared::utils::is_active;
