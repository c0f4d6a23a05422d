//! Signal-level glue: spawn loads and actions against [`HttpApi`] and fold
//! their results into the shared `RwSignal<DashboardState>`.
//!
//! Every function here returns immediately; network work runs on
//! `spawn_local` tasks. Concurrent loads land independently, in whatever
//! order their responses arrive.

use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::actions::{DashboardAction, Settled, perform, proof_chosen, settle};
use super::delegate::Delegated;
use super::loaders::{Landed, fetch_view, land};
use crate::config::{SEARCH_DEBOUNCE_MS, SIGN_IN_PATH, SUCCESS_ALERT_MS};
use crate::net::api::{DashboardApi, HttpApi};
use crate::net::error::ApiError;
use crate::net::types::Attachment;
use crate::state::dashboard::{AlertKind, DashboardState, LoadRequest};
use crate::state::sequence::{LoadTicket, LoaderKind};
use crate::util::auth::{navigate_to, redirect_to_sign_in};

async fn sleep_ms(ms: u64) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}

/// Load the signed-in user, resolve their role, and run the first refresh.
pub fn start_session(state: RwSignal<DashboardState>) {
    state.update(DashboardState::begin_identity);
    spawn_local(async move {
        match HttpApi.current_user().await {
            Ok(user) => {
                leptos::logging::log!("signed in as {} ({})", user.email, user.role.as_str());
                state.update(|s| s.authenticate(user));
                refresh(state);
            }
            Err(err) => {
                leptos::logging::warn!("identity load failed: {err}");
                redirect_to_sign_in();
            }
        }
    });
}

/// Re-run every loader the session's role calls for.
pub fn refresh(state: RwSignal<DashboardState>) {
    let loads = state.try_update(DashboardState::begin_refresh).unwrap_or_default();
    run_loads(state, loads);
}

/// Re-issue a single loader with the current filters and search text.
pub fn reload(state: RwSignal<DashboardState>, kind: LoaderKind) {
    if let Some(load) = state.try_update(|s| s.begin_load(kind)) {
        run_loads(state, vec![load]);
    }
}

fn run_loads(state: RwSignal<DashboardState>, loads: Vec<(LoadTicket, LoadRequest)>) {
    if loads.is_empty() {
        return;
    }
    spawn_local(async move {
        let issued = loads.len();
        let landed = join_all(loads.into_iter().map(|(ticket, request)| async move {
            let result = fetch_view(&HttpApi, &request).await;
            let outcome = state.try_update(|s| land(s, ticket, result)).unwrap_or(Landed::Stale);
            if outcome == Landed::SignIn {
                redirect_to_sign_in();
            }
            outcome
        }))
        .await;
        let applied = landed.iter().filter(|l| **l == Landed::Applied).count();
        leptos::logging::log!("loads settled: {applied}/{issued} applied");
    });
}

/// Perform `action` and apply its alert, form reset, and follow-up loads.
pub fn dispatch(state: RwSignal<DashboardState>, action: DashboardAction) {
    spawn_local(async move {
        let result = perform(&HttpApi, &action).await;
        match state.try_update(|s| settle(s, &action, result)) {
            Some(Settled::SignIn) => redirect_to_sign_in(),
            Some(Settled::Continue { loads, clear_alert }) => {
                if let Some(seq) = clear_alert {
                    schedule_alert_clear(state, seq);
                }
                run_loads(state, loads);
            }
            None => {}
        }
    });
}

/// Clear the alert `seq` after its display time unless a newer one replaced it.
pub fn schedule_alert_clear(state: RwSignal<DashboardState>, seq: u64) {
    spawn_local(async move {
        sleep_ms(SUCCESS_ALERT_MS).await;
        state.update(|s| {
            s.clear_alert(seq);
        });
    });
}

/// Record search text and reload available tasks once typing pauses.
pub fn search_available(state: RwSignal<DashboardState>, query: String) {
    let Some(token) = state.try_update(|s| s.set_search_query(query)) else {
        return;
    };
    spawn_local(async move {
        sleep_ms(SEARCH_DEBOUNCE_MS).await;
        let load = state
            .try_update(|s| s.is_latest_search(token).then(|| s.begin_load(LoaderKind::AvailableTasks)))
            .flatten();
        if let Some(load) = load {
            run_loads(state, vec![load]);
        }
    });
}

/// Reload available tasks now, superseding any pending debounced search.
pub fn search_now(state: RwSignal<DashboardState>) {
    state.update(|s| {
        s.set_search_query(s.available_query.clone());
    });
    reload(state, LoaderKind::AvailableTasks);
}

/// Route a resolved delegated click. `open_picker` shows the proof dialog.
pub fn handle_delegated(state: RwSignal<DashboardState>, delegated: Delegated, open_picker: impl FnOnce()) {
    match delegated {
        Delegated::Action(action) => dispatch(state, action),
        Delegated::PickProof { task_id } => {
            state.update(|s| s.pending_proof_task = Some(task_id));
            open_picker();
        }
        Delegated::RevealReward { index } => state.update(|s| {
            s.reveal_reward(index);
        }),
    }
}

/// The proof dialog closed; upload only if a file was chosen.
pub fn proof_picked(state: RwSignal<DashboardState>, file: Option<Attachment>) {
    let task_id = state.try_update(|s| s.pending_proof_task.take()).flatten();
    if let Some(action) = task_id.and_then(|id| proof_chosen(id, file)) {
        dispatch(state, action);
    }
}

/// Show a validation failure without touching the network.
pub fn reject(state: RwSignal<DashboardState>, message: &str) {
    state.update(|s| super::actions::reject(s, message));
}

/// End the session and return to sign-in.
pub fn logout(state: RwSignal<DashboardState>) {
    spawn_local(async move {
        match HttpApi.logout().await {
            Ok(()) | Err(ApiError::Unauthorized) => navigate_to(SIGN_IN_PATH),
            Err(err) => {
                leptos::logging::warn!("logout failed: {err}");
                state.update(|s| {
                    s.set_alert(AlertKind::Error, err.user_message());
                });
            }
        }
    });
}
