pub mod errors;
pub mod logging;
pub mod utils;

// Available on every renderer (web, desktop, server)
pub mod hooks;
