//! Contact page component

use dioxus::prelude::*;

/// Contact channels for the showroom
const CHANNELS: &[(&str, &str, &str)] = &[
    ("📍", "Showroom", "21 Voyager Plaza, Mombasa Road, Nairobi"),
    ("📞", "Phone", "+254 700 123 456"),
    ("✉️", "Email", "hello@voyagerdealership.com"),
    ("🕘", "Opening Hours", "Mon–Sat, 8:00 AM – 6:00 PM"),
];

/// Contact page component
#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page page-contact",
            h2 { class: "page-title", "📞 Contact Us" }
            p { class: "page-intro",
                "Visit the showroom or reach out to the Voyager team directly."
            }

            div { class: "contact-grid",
                for (icon, label, detail) in CHANNELS {
                    div { class: "contact-card",
                        span { class: "contact-icon", "{icon}" }
                        span { class: "contact-label", "{label}" }
                        span { class: "contact-detail", "{detail}" }
                    }
                }
            }
        }
    }
}
