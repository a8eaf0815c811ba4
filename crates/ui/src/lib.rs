//! UI library for Voyager Dealership
//! Contains Dioxus components with custom CSS (offline)

mod components;
mod routes;
mod styles;

pub use components::App;
pub use routes::Route;
pub use styles::CUSTOM_STYLES;
