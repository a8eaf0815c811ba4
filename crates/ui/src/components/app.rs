//! Main application component with routing

use dioxus::prelude::*;

use crate::routes::Route;
use crate::styles::CUSTOM_STYLES;

/// Main application component
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Layout component wrapping all routes
#[component]
pub fn Layout() -> Element {
    let route: Route = use_route();
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");

    // Determine active page
    let is_home = matches!(route, Route::Home {});
    let is_login = matches!(route, Route::Login {});
    let is_create_account = matches!(route, Route::CreateAccount {});
    let is_dashboard = matches!(route, Route::Dashboard {});
    let is_contact = matches!(route, Route::Contact {});

    rsx! {
        style { {CUSTOM_STYLES} }

        div {
            class: "main-container",

            // Custom title bar
            div { class: "title-bar",
                div {
                    class: "title-bar-drag",
                    onmousedown: move |_| {
                        let window = dioxus::desktop::window();
                        let _ = window.drag_window();
                    },
                    span { class: "title-text", "🏍️ Voyager Dealership v{version}" }
                }
                div { class: "title-bar-buttons",
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.set_minimized(true);
                        },
                        "─"
                    }
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.set_maximized(!window.is_maximized());
                        },
                        "□"
                    }
                    button {
                        class: "title-btn title-btn-close",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.close();
                        },
                        "✕"
                    }
                }
            }

            // Page Navigation
            nav { class: "nav-bar",
                Link {
                    to: Route::Home {},
                    class: if is_home { "nav-item nav-active" } else { "nav-item" },
                    "🏠 Home"
                }
                Link {
                    to: Route::Login {},
                    class: if is_login { "nav-item nav-active" } else { "nav-item" },
                    "🔐 Login"
                }
                Link {
                    to: Route::CreateAccount {},
                    class: if is_create_account { "nav-item nav-active" } else { "nav-item" },
                    "📝 Create Account"
                }
                Link {
                    to: Route::Dashboard {},
                    class: if is_dashboard { "nav-item nav-active" } else { "nav-item" },
                    "📊 Dashboard"
                }
                Link {
                    to: Route::Contact {},
                    class: if is_contact { "nav-item nav-active" } else { "nav-item" },
                    "📞 Contact"
                }
            }

            // Content Area with Router Outlet
            div { class: "content-area",
                Outlet::<Route> {}
            }
        }
    }
}
