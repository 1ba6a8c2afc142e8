use dioxus::prelude::*;

use crate::components::dashboard::{LoadingIndicator, QuickLinks, StatList, WelcomeMessage};
use crate::hooks::{use_dashboard_state, DashboardState, MountAction};

#[component]
pub fn Dashboard() -> Element {
    let dashboard = use_dashboard_state();
    let state = (dashboard.state)();

    // Signed-out visitors get nothing while the redirect is in flight.
    let MountAction::LoadStats(session) = dashboard.action else {
        return rsx! {};
    };

    match state {
        DashboardState::Loading => rsx! { LoadingIndicator {} },
        DashboardState::Loaded(stats) => {
            let username = session.username.clone();
            rsx! {
                div { class: "dashboard-container",
                    h1 { "Panel de Control" }
                    WelcomeMessage { username }
                    StatList { stats }
                    QuickLinks { session }
                }
            }
        }
    }
}
