// Navigation data model shared by the menu tables and the sidebar component
pub mod icon;
pub mod menu;
pub mod user;

pub use icon::{IconShape, MenuIcon};
pub use menu::{menu_items, MenuItem, MenuSection};
pub use user::{SfsUser, FALLBACK_USER_NAME};
