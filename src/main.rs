use std::rc::Rc;

use dioxus::prelude::*;

use farmacia_panel::config::AppConfig;
use farmacia_panel::farmacia_client::{FarmaciaApi, FarmaciaClient};
use farmacia_panel::pages::Dashboard;
use farmacia_panel::session::{BrowserSessionStore, SessionProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/dashboard", || Route::Dashboard {})]
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(AppConfig::from_build_env);

    let sessions = use_context_provider(|| {
        Rc::new(BrowserSessionStore::new(config.session_storage_key.clone())) as Rc<dyn SessionProvider>
    });
    use_context_provider(|| {
        Rc::new(FarmaciaClient::new(config.api_base_url.clone()).with_sessions(sessions.clone()))
            as Rc<dyn FarmaciaApi>
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
