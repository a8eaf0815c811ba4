//! Voyager Dealership
//! A desktop application built with Dioxus

use dioxus::desktop::{LogicalSize, WindowBuilder};
use dioxus::logger::tracing::{info, Level};
use ui::App;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    info!("launching Voyager Dealership");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_disable_context_menu(true)
                .with_window(
                    WindowBuilder::new()
                        .with_title("Voyager Dealership")
                        .with_decorations(false)
                        .with_inner_size(LogicalSize::new(1100.0, 700.0))
                        .with_resizable(true),
                ),
        )
        .launch(App);
}
