use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

mod config;
mod visual_editor;

use visual_editor::app::SiteBuilder;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    info!("starting site builder");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        SiteBuilder {}
    }
}
