pub mod components;
pub mod layouts;
pub mod pages;

// Demo app hosting the sidebar
pub use pages::demo_routes::App;
