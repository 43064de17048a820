// Static configuration: menu tables, design tokens, Tailwind preset
pub mod menus;
pub mod tailwind;
pub mod tokens;

pub use menus::{
    crm_menu_sections, data_query_menu_sections, general_menu_sections,
    marketing_menu_sections, store_menu_sections, MenuArchetype,
};
pub use tailwind::{tailwind_config, tailwind_theme_extension};
pub use tokens::{tokens_json, CSS_IMPORTS, INSTALL_INSTRUCTIONS, SFS_COLORS, SFS_GRADIENTS};

/// Brand shown in the sidebar header and footer
pub const DEFAULT_APP_NAME: &str = "Smart Flow Systems";
