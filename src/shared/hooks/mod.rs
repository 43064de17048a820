// Custom Dioxus hooks
pub mod use_menu_state;

pub use use_menu_state::{dispatch_menu_event, use_menu_state, MenuEvent, MenuState};
