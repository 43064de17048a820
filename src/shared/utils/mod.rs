pub mod route_match;
pub mod validation;

pub use route_match::is_active;
pub use validation::{find_key_collisions, parse_menu_json, validate_menu};
