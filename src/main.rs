use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod db;
mod playback;
mod utils;

use components::PortfolioShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Hayyie | Portfolio" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#263759" }

        document::Stylesheet { href: APP_CSS }

        PortfolioShell {}
    }
}
