//! Dashboard overview page component

use dioxus::prelude::*;

/// KPI cards shown on the overview, label / value / caption
const METRICS: &[(&str, &str, &str)] = &[
    ("Total Inventory", "128", "Motorcycles currently in stock"),
    ("Average Price", "$19,140.62", "Average price across inventory"),
    ("Total Sales", "$2,450,000.00", "Total revenue from sales"),
    ("Units Sold", "186", "Motorcycles sold to date"),
    ("Total Customers", "312", "Unique customers on record"),
    ("Avg. Customer LTV", "$7,852.56", "Average customer lifetime value"),
];

/// Dashboard page component
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page page-dashboard",
            h2 { class: "page-title", "📊 Dashboard Overview" }

            div { class: "metric-grid",
                for (label, value, caption) in METRICS {
                    div { class: "metric-card",
                        span { class: "metric-label", "{label}" }
                        span { class: "metric-value", "{value}" }
                        span { class: "metric-caption", "{caption}" }
                    }
                }
            }
        }
    }
}
