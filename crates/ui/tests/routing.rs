//! Rendering tests for the route table and navigation container

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use ui::App;

/// Marker class rendered by each page, keyed by its path
const PAGES: [(&str, &str); 5] = [
    ("/", "page-home"),
    ("/login", "page-login"),
    ("/create-account", "page-create-account"),
    ("/dashboard", "page-dashboard"),
    ("/contact", "page-contact"),
];

/// Application root pinned to a fixed location
#[component]
fn Shell(path: String) -> Element {
    use_context_provider(move || {
        Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>
    });
    rsx! {
        App {}
    }
}

fn render_at(path: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        Shell,
        ShellProps::builder().path(path.to_string()).build(),
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Page markers present in the rendered output
fn mounted_pages(html: &str) -> Vec<&'static str> {
    PAGES
        .iter()
        .map(|(_, marker)| *marker)
        .filter(|marker| html.contains(marker))
        .collect()
}

#[test]
fn each_declared_path_mounts_exactly_its_page() {
    for (path, marker) in PAGES {
        let html = render_at(path);
        assert_eq!(
            mounted_pages(&html),
            vec![marker],
            "visiting {path} should mount {marker} and nothing else"
        );
    }
}

#[test]
fn app_root_mounts_one_navigation_container() {
    let html = render_at("/");
    assert_eq!(html.matches("class=\"nav-bar\"").count(), 1);
    for (path, _) in PAGES {
        let link = format!("href=\"{path}\"");
        assert!(html.contains(&link), "navigation should link to {path}");
    }
}

#[test]
fn navigation_in_any_order_mounts_one_page_at_a_time() {
    let mut reversed = PAGES;
    reversed.reverse();
    for (path, _) in PAGES.iter().chain(reversed.iter()) {
        let html = render_at(path);
        assert_eq!(
            html.matches("class=\"page ").count(),
            1,
            "visiting {path} should mount a single page"
        );
    }
}
