//! Login page component

use dioxus::prelude::*;

use crate::routes::Route;

/// Login page component
#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "page page-login",
            div { class: "form-card",
                h2 { class: "form-title", "🔐 Login" }
                p { class: "form-hint", "Sign in to your Voyager account" }

                div { class: "form-field",
                    label { r#for: "login-username", "Username" }
                    input {
                        id: "login-username",
                        r#type: "text",
                        placeholder: "Enter your username",
                    }
                }
                div { class: "form-field",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        placeholder: "Enter your password",
                    }
                }

                button { class: "btn btn-primary btn-block", "Login" }

                p { class: "form-footer",
                    "New to Voyager? "
                    Link { to: Route::CreateAccount {}, "Create an account" }
                }
            }
        }
    }
}
