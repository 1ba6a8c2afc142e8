use std::rc::Rc;

use dioxus::prelude::*;

use crate::farmacia_client::FarmaciaApi;
use crate::navigation::paths;
use crate::session::SessionProvider;
use crate::stats::{load_stats, Stats};
use crate::types::Session;

/// What the dashboard does once mounted.
#[derive(Clone, Debug, PartialEq)]
pub enum MountAction {
    RedirectToLogin,
    LoadStats(Session),
}

pub fn resolve_mount(sessions: &dyn SessionProvider) -> MountAction {
    match sessions.current_session() {
        Some(session) => MountAction::LoadStats(session),
        None => MountAction::RedirectToLogin,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Loading,
    Loaded(Stats),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn stats(&self) -> Option<Stats> {
        match self {
            DashboardState::Loading => None,
            DashboardState::Loaded(stats) => Some(*stats),
        }
    }

    /// `Loaded` is terminal: a second completion keeps the first result.
    pub fn finish(self, stats: Stats) -> Self {
        match self {
            DashboardState::Loading => DashboardState::Loaded(stats),
            loaded => loaded,
        }
    }
}

#[derive(Clone)]
pub struct DashboardHandle {
    pub action: MountAction,
    pub state: Signal<DashboardState>,
}

/// Resolves the session on first render and starts the stats load.
///
/// The load task is spawned in this component's scope, so it is dropped with
/// the component and can never write state after unmount.
pub fn use_dashboard_state() -> DashboardHandle {
    let sessions = use_context::<Rc<dyn SessionProvider>>();
    let api = use_context::<Rc<dyn FarmaciaApi>>();
    let navigator = use_navigator();

    let action = use_hook(|| resolve_mount(sessions.as_ref()));
    let mut state = use_signal(DashboardState::default);

    let effect_action = action.clone();
    use_effect(move || match &effect_action {
        MountAction::RedirectToLogin => {
            tracing::info!("no active session, redirecting to {}", paths::LOGIN);
            if navigator.replace(paths::LOGIN).is_some() {
                tracing::warn!("could not navigate to {}", paths::LOGIN);
            }
        }
        MountAction::LoadStats(_) => {
            let api = api.clone();
            spawn(async move {
                let stats = load_stats(api.as_ref()).await;
                let next = state.peek().finish(stats);
                state.set(next);
            });
        }
    });

    DashboardHandle { action, state }
}
