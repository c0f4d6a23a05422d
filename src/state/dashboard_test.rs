use super::*;
use crate::net::types::{Reward, Role};

// =============================================================
// Helpers
// =============================================================

fn user(role: Role) -> User {
    User { id: 1, name: "Asha".to_owned(), email: "asha@example.com".to_owned(), role }
}

fn signed_in(role: Role) -> DashboardState {
    let mut state = DashboardState::default();
    state.begin_identity();
    state.authenticate(user(role));
    state
}

fn reward(tier: u32, code: &str) -> Reward {
    Reward { tier, brand: format!("Brand {tier}"), description: "Discount".to_owned(), code: code.to_owned() }
}

fn snapshot(codes: &[&str]) -> RewardsSnapshot {
    RewardsSnapshot {
        valid_reports: 3,
        rewards: codes.iter().enumerate().map(|(i, c)| reward(u32::try_from(i).unwrap() + 1, c)).collect(),
        next_tier: None,
    }
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = DashboardState::default();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(!state.is_authenticated());
}

#[test]
fn authenticate_resolves_role_and_default_tab() {
    let state = signed_in(Role::Volunteer);
    assert_eq!(state.phase, SessionPhase::RoleResolved);
    assert_eq!(state.active_tab, Tab::Volunteer);
    assert_eq!(state.identity_label().as_deref(), Some("Asha (volunteer)"));
}

#[test]
fn begin_refresh_moves_to_idle_and_issues_capability_loaders() {
    let mut state = signed_in(Role::Citizen);
    let issued = state.begin_refresh();
    assert_eq!(state.phase, SessionPhase::Idle);
    let kinds = issued.iter().map(|(t, _)| t.kind).collect::<Vec<_>>();
    assert_eq!(kinds, vec![LoaderKind::MyReports, LoaderKind::Rewards]);
}

#[test]
fn begin_refresh_before_auth_issues_nothing() {
    let mut state = DashboardState::default();
    assert!(state.begin_refresh().is_empty());
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
}

// =============================================================
// Tab gating
// =============================================================

#[test]
fn every_role_is_gated_by_its_allowed_tabs() {
    for role in Role::ALL {
        for tab in Tab::ALL {
            let mut state = signed_in(role);
            let before = state.active_tab;
            let allowed = crate::state::access::allowed_tabs(role).contains(&tab);
            assert_eq!(state.select_tab(tab), allowed, "{role:?} -> {tab:?}");
            if allowed {
                assert_eq!(state.active_tab, tab);
                assert!(state.alert.is_none());
            } else {
                assert_eq!(state.active_tab, before);
                let alert = state.alert.expect("restriction alert");
                assert_eq!(alert.kind, AlertKind::Error);
                assert_eq!(alert.message, ACCESS_RESTRICTED_MESSAGE);
            }
        }
    }
}

#[test]
fn select_tab_is_ignored_before_authentication() {
    let mut state = DashboardState::default();
    assert!(!state.select_tab(Tab::Citizen));
    assert!(state.alert.is_none());
}

// =============================================================
// Loads and stale responses
// =============================================================

#[test]
fn load_request_captures_filters_and_query() {
    let mut state = signed_in(Role::Admin);
    state.filters = TaskFilters { status: "completed".to_owned(), category: String::new(), q: "lake".to_owned() };
    state.set_search_query("park");
    assert_eq!(state.load_request(LoaderKind::ManageTasks), LoadRequest::ManageTasks { filters: state.filters.clone() });
    assert_eq!(
        state.load_request(LoaderKind::AvailableTasks),
        LoadRequest::AvailableTasks { query: "park".to_owned() }
    );
}

#[test]
fn apply_loaded_stores_current_response() {
    let mut state = signed_in(Role::Citizen);
    let (ticket, request) = state.begin_load(LoaderKind::MyReports);
    assert_eq!(request.kind(), LoaderKind::MyReports);
    assert!(state.apply_loaded(ticket, LoadedData::MyReports(Vec::new())));
    assert_eq!(state.my_reports, Some(Vec::new()));
}

#[test]
fn stale_response_arriving_late_is_dropped() {
    let mut state = signed_in(Role::Admin);
    let (old, _) = state.begin_load(LoaderKind::ManageTasks);
    let (new, _) = state.begin_load(LoaderKind::ManageTasks);

    let fresh = vec![ManagedTask { task_id: 2, category: "litter".to_owned(), ..ManagedTask::default() }];
    let stale = vec![ManagedTask { task_id: 1, category: "sewage".to_owned(), ..ManagedTask::default() }];

    assert!(state.apply_loaded(new, LoadedData::ManageTasks(fresh.clone())));
    assert!(!state.apply_loaded(old, LoadedData::ManageTasks(stale)));
    assert_eq!(state.managed_tasks, Some(fresh));
}

#[test]
fn mismatched_payload_kind_is_dropped() {
    let mut state = signed_in(Role::Admin);
    let (ticket, _) = state.begin_load(LoaderKind::MyTasks);
    assert!(!state.apply_loaded(ticket, LoadedData::AvailableTasks(Vec::new())));
    assert_eq!(state.available_tasks, None);
}

// =============================================================
// Alerts
// =============================================================

#[test]
fn clear_alert_only_removes_matching_alert() {
    let mut state = DashboardState::default();
    let first = state.set_alert(AlertKind::Success, "Task claimed successfully.");
    let second = state.set_alert(AlertKind::Error, "Task already assigned");
    assert!(!state.clear_alert(first));
    assert_eq!(state.alert.as_ref().map(|a| a.message.as_str()), Some("Task already assigned"));
    assert!(state.clear_alert(second));
    assert!(state.alert.is_none());
}

// =============================================================
// Search debounce
// =============================================================

#[test]
fn only_latest_search_token_is_live() {
    let mut state = DashboardState::default();
    let first = state.set_search_query("pa");
    let second = state.set_search_query("park");
    assert!(!state.is_latest_search(first));
    assert!(state.is_latest_search(second));
    assert_eq!(state.available_query, "park");
}

// =============================================================
// Reward reveal
// =============================================================

#[test]
fn reveal_affects_only_its_own_reward() {
    let mut state = signed_in(Role::Citizen);
    let (ticket, _) = state.begin_load(LoaderKind::Rewards);
    state.apply_loaded(ticket, LoadedData::Rewards(snapshot(&["A-1", "B-2", "C-3"])));

    assert!(state.reveal_reward(1));
    let view = state.rewards.as_ref().unwrap();
    assert!(!view.is_revealed(0));
    assert!(view.is_revealed(1));
    assert!(!view.is_revealed(2));
}

#[test]
fn second_reveal_is_a_noop() {
    let mut view = RewardsView::new(snapshot(&["A-1"]));
    assert!(view.reveal(0));
    assert!(!view.reveal(0));
    assert!(view.is_revealed(0));
}

#[test]
fn reveal_out_of_range_is_a_noop() {
    let mut view = RewardsView::new(snapshot(&["A-1"]));
    assert!(!view.reveal(5));
}

#[test]
fn new_snapshot_rearms_reveals() {
    let mut state = signed_in(Role::Citizen);
    let (ticket, _) = state.begin_load(LoaderKind::Rewards);
    state.apply_loaded(ticket, LoadedData::Rewards(snapshot(&["A-1"])));
    state.reveal_reward(0);

    let (ticket, _) = state.begin_load(LoaderKind::Rewards);
    state.apply_loaded(ticket, LoadedData::Rewards(snapshot(&["A-1"])));
    assert!(!state.rewards.as_ref().unwrap().is_revealed(0));
}

#[test]
fn reveal_without_rewards_loaded_is_a_noop() {
    let mut state = DashboardState::default();
    assert!(!state.reveal_reward(0));
}
