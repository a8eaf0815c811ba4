//! Account creation page component

use dioxus::prelude::*;

use crate::routes::Route;

/// Create account page component
#[component]
pub fn CreateAccount() -> Element {
    rsx! {
        section { class: "page page-create-account",
            div { class: "form-card",
                h2 { class: "form-title", "📝 Create Account" }
                p { class: "form-hint", "Join Voyager to manage your dealership" }

                div { class: "form-field",
                    label { r#for: "signup-username", "Username" }
                    input {
                        id: "signup-username",
                        r#type: "text",
                        placeholder: "Choose a username",
                    }
                }
                div { class: "form-field",
                    label { r#for: "signup-password", "Password" }
                    input {
                        id: "signup-password",
                        r#type: "password",
                        placeholder: "Choose a password",
                    }
                }
                div { class: "form-field",
                    label { r#for: "signup-confirm", "Confirm Password" }
                    input {
                        id: "signup-confirm",
                        r#type: "password",
                        placeholder: "Repeat your password",
                    }
                }

                button { class: "btn btn-primary btn-block", "Sign Up" }

                p { class: "form-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
