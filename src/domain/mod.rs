// Domain models (menu data, icons, users)
// Pure Rust, no framework dependencies
pub mod models;
