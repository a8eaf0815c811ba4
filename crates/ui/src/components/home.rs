//! Home page component

use dioxus::prelude::*;

use crate::routes::Route;

/// Quick stats shown on the landing page
const QUICK_STATS: &[(&str, &str)] = &[
    ("📦", "128 Motorcycles in Stock"),
    ("💰", "$2,450,000 Total Sales"),
    ("👥", "312 Active Customers"),
];

/// Feature highlights, one box per platform capability
const FEATURES: &[(&str, &[&str])] = &[
    (
        "📊 Sales Analytics",
        &[
            "Real-time sales tracking",
            "Performance metrics",
            "Regional analysis",
        ],
    ),
    (
        "👥 Customer Insights",
        &[
            "Customer segmentation",
            "Lifetime value analysis",
            "Satisfaction tracking",
        ],
    ),
    (
        "🔮 Advanced Forecasting",
        &[
            "Machine learning models",
            "Trend analysis",
            "Seasonal predictions",
        ],
    ),
    (
        "📈 Market Intelligence",
        &[
            "Competitive analysis",
            "Market trends",
            "Price optimization",
        ],
    ),
];

/// Home page component
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { class: "hero-title", "Welcome to Voyager" }
                h2 { class: "hero-subtitle", "Motorcycle Dealership Intelligence Platform" }
                p { class: "hero-tagline",
                    "Transform your dealership with AI-powered insights and advanced analytics"
                }
            }

            div { class: "quick-stats",
                for (icon, text) in QUICK_STATS {
                    div { class: "quick-stat",
                        span { class: "quick-stat-icon", "{icon}" }
                        span { class: "quick-stat-text", "{text}" }
                    }
                }
            }

            h3 { class: "section-heading", "Key Features" }
            div { class: "feature-grid",
                for (title, points) in FEATURES {
                    div { class: "feature-box",
                        h4 { "{title}" }
                        ul {
                            for point in points.iter() {
                                li { "{point}" }
                            }
                        }
                    }
                }
            }

            h3 { class: "section-heading", "Quick Access" }
            div { class: "quick-access",
                Link { to: Route::Dashboard {}, class: "btn btn-primary", "📊 View Dashboard" }
                Link { to: Route::Contact {}, class: "btn btn-secondary", "📞 Contact Us" }
            }
        }
    }
}
