pub mod demo_routes;

pub use demo_routes::{App, Route};
