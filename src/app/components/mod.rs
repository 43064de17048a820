pub mod archetype_selector;
pub mod hamburger_menu;
pub mod icon;
pub mod nav_link;

pub use archetype_selector::ArchetypeSelector;
pub use hamburger_menu::{HamburgerMenu, MenuDisplay};
pub use icon::Icon;
pub use nav_link::{render_nav_link, DefaultLink, LinkRenderer, NavLinkProps};
