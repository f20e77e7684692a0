use dioxus::prelude::*;

mod auth;
mod latency;
mod routes;
mod storage;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    gate::config::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| AuthState::from_config(gate::config::config()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
