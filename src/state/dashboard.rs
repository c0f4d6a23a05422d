//! Dashboard view-state: session, role capabilities, loaded data sets, and
//! transient UI (alerts, filters, debounce tokens, reward reveals).
//!
//! DESIGN
//! ======
//! The whole dashboard is one plain value held in a single `RwSignal`.
//! Renderers receive `&DashboardState` snapshots; handlers mutate it only
//! through the methods below, so every transition is testable without a
//! browser.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::access::{ACCESS_RESTRICTED_MESSAGE, Capabilities, Tab};
use super::sequence::{LoadSequencer, LoadTicket, LoaderKind};
use crate::net::types::{ManagedTask, Report, RewardsSnapshot, Stats, Task, TaskFilters, User, Volunteer};

/// Session lifecycle of the dashboard route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Unauthenticated,
    LoadingIdentity,
    /// Role known; the initial refresh has not been issued yet.
    RoleResolved,
    /// Awaiting user actions.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Message shown in the dashboard alert region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    /// Identifies this alert so a delayed auto-clear never removes a newer one.
    pub seq: u64,
}

/// Rewards snapshot plus one-shot reveal flags for the current render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewardsView {
    pub snapshot: RewardsSnapshot,
    revealed: Vec<bool>,
}

impl RewardsView {
    pub fn new(snapshot: RewardsSnapshot) -> Self {
        let revealed = vec![false; snapshot.rewards.len()];
        Self { snapshot, revealed }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Reveal the code at `index`. Returns `false` when already revealed or
    /// out of range.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

/// A load to issue, carrying the parameters captured at issue time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadRequest {
    MyReports,
    Rewards,
    AvailableTasks { query: String },
    MyTasks,
    PendingReports,
    Volunteers,
    ManageTasks { filters: TaskFilters },
    Analytics,
}

impl LoadRequest {
    pub fn kind(&self) -> LoaderKind {
        match self {
            Self::MyReports => LoaderKind::MyReports,
            Self::Rewards => LoaderKind::Rewards,
            Self::AvailableTasks { .. } => LoaderKind::AvailableTasks,
            Self::MyTasks => LoaderKind::MyTasks,
            Self::PendingReports => LoaderKind::PendingReports,
            Self::Volunteers => LoaderKind::Volunteers,
            Self::ManageTasks { .. } => LoaderKind::ManageTasks,
            Self::Analytics => LoaderKind::Analytics,
        }
    }
}

/// A successfully fetched data set.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadedData {
    MyReports(Vec<Report>),
    Rewards(RewardsSnapshot),
    AvailableTasks(Vec<Task>),
    MyTasks(Vec<Task>),
    PendingReports(Vec<Report>),
    Volunteers(Vec<Volunteer>),
    ManageTasks(Vec<ManagedTask>),
    Analytics(Stats),
}

impl LoadedData {
    pub fn kind(&self) -> LoaderKind {
        match self {
            Self::MyReports(_) => LoaderKind::MyReports,
            Self::Rewards(_) => LoaderKind::Rewards,
            Self::AvailableTasks(_) => LoaderKind::AvailableTasks,
            Self::MyTasks(_) => LoaderKind::MyTasks,
            Self::PendingReports(_) => LoaderKind::PendingReports,
            Self::Volunteers(_) => LoaderKind::Volunteers,
            Self::ManageTasks(_) => LoaderKind::ManageTasks,
            Self::Analytics(_) => LoaderKind::Analytics,
        }
    }
}

/// View-state for the dashboard route.
///
/// Data slots are `None` until their first load lands; views render nothing
/// for `None` and the documented fallback sentence for an empty list.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub phase: SessionPhase,
    pub user: Option<User>,
    pub capabilities: Capabilities,
    pub active_tab: Tab,

    pub my_reports: Option<Vec<Report>>,
    pub rewards: Option<RewardsView>,
    pub available_tasks: Option<Vec<Task>>,
    pub my_tasks: Option<Vec<Task>>,
    pub pending_reports: Option<Vec<Report>>,
    pub volunteers: Vec<Volunteer>,
    pub managed_tasks: Option<Vec<ManagedTask>>,
    pub stats: Option<Stats>,

    pub filters: TaskFilters,
    pub available_query: String,
    /// Bumped on every search keystroke; a debounced load fires only if its
    /// token is still the latest.
    pub search_seq: u64,
    pub sequencer: LoadSequencer,

    pub alert: Option<Alert>,
    alert_seq: u64,
    /// Bumped to remount (reset) the report submission form.
    pub report_form_seq: u64,
    /// Bumped to remount (reset) the assignment form and its selector.
    pub assign_form_seq: u64,
    /// Task awaiting a proof photo from the file picker.
    pub pending_proof_task: Option<i64>,
}

impl DashboardState {
    pub fn begin_identity(&mut self) {
        self.phase = SessionPhase::LoadingIdentity;
    }

    /// Record the signed-in user and resolve their capabilities and landing tab.
    pub fn authenticate(&mut self, user: User) {
        self.capabilities = Capabilities::for_role(user.role);
        self.active_tab = Tab::default_for(user.role);
        self.user = Some(user);
        self.phase = SessionPhase::RoleResolved;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && matches!(self.phase, SessionPhase::RoleResolved | SessionPhase::Idle)
    }

    /// Header identity line, e.g. `"Asha (volunteer)"`.
    pub fn identity_label(&self) -> Option<String> {
        self.user.as_ref().map(|u| format!("{} ({})", u.name, u.role.as_str()))
    }

    /// Switch tabs if the role allows it. A denied request keeps the current
    /// tab and raises the restriction alert.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        if !self.capabilities.allows_tab(tab) {
            self.set_alert(AlertKind::Error, ACCESS_RESTRICTED_MESSAGE);
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Build the request for `kind` from current filters and search text.
    pub fn load_request(&self, kind: LoaderKind) -> LoadRequest {
        match kind {
            LoaderKind::MyReports => LoadRequest::MyReports,
            LoaderKind::Rewards => LoadRequest::Rewards,
            LoaderKind::AvailableTasks => LoadRequest::AvailableTasks { query: self.available_query.clone() },
            LoaderKind::MyTasks => LoadRequest::MyTasks,
            LoaderKind::PendingReports => LoadRequest::PendingReports,
            LoaderKind::Volunteers => LoadRequest::Volunteers,
            LoaderKind::ManageTasks => LoadRequest::ManageTasks { filters: self.filters.clone() },
            LoaderKind::Analytics => LoadRequest::Analytics,
        }
    }

    /// Issue a ticketed load for a single data set.
    pub fn begin_load(&mut self, kind: LoaderKind) -> (LoadTicket, LoadRequest) {
        let ticket = self.sequencer.begin(kind);
        (ticket, self.load_request(kind))
    }

    /// Issue every load the session's capabilities call for.
    pub fn begin_refresh(&mut self) -> Vec<(LoadTicket, LoadRequest)> {
        if !self.is_authenticated() {
            return Vec::new();
        }
        self.phase = SessionPhase::Idle;
        let kinds = self.capabilities.loaders.clone();
        kinds.into_iter().map(|kind| self.begin_load(kind)).collect()
    }

    /// Store a fetched data set if its ticket is still current. Returns
    /// `false` for stale or mismatched responses, which are dropped.
    pub fn apply_loaded(&mut self, ticket: LoadTicket, data: LoadedData) -> bool {
        if ticket.kind != data.kind() || !self.sequencer.is_current(ticket) {
            return false;
        }
        match data {
            LoadedData::MyReports(reports) => self.my_reports = Some(reports),
            LoadedData::Rewards(snapshot) => self.rewards = Some(RewardsView::new(snapshot)),
            LoadedData::AvailableTasks(tasks) => self.available_tasks = Some(tasks),
            LoadedData::MyTasks(tasks) => self.my_tasks = Some(tasks),
            LoadedData::PendingReports(reports) => self.pending_reports = Some(reports),
            LoadedData::Volunteers(volunteers) => self.volunteers = volunteers,
            LoadedData::ManageTasks(tasks) => self.managed_tasks = Some(tasks),
            LoadedData::Analytics(stats) => self.stats = Some(stats),
        }
        true
    }

    pub fn set_alert(&mut self, kind: AlertKind, message: impl Into<String>) -> u64 {
        self.alert_seq += 1;
        self.alert = Some(Alert { kind, message: message.into(), seq: self.alert_seq });
        self.alert_seq
    }

    /// Clear the alert only if it is still the one identified by `seq`.
    pub fn clear_alert(&mut self, seq: u64) -> bool {
        if self.alert.as_ref().is_some_and(|a| a.seq == seq) {
            self.alert = None;
            return true;
        }
        false
    }

    /// Record new search text and return the debounce token for it.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> u64 {
        self.available_query = query.into();
        self.search_seq += 1;
        self.search_seq
    }

    #[must_use]
    pub fn is_latest_search(&self, token: u64) -> bool {
        self.search_seq == token
    }

    pub fn reveal_reward(&mut self, index: usize) -> bool {
        self.rewards.as_mut().is_some_and(|view| view.reveal(index))
    }

    pub fn reset_report_form(&mut self) {
        self.report_form_seq += 1;
    }

    pub fn reset_assign_form(&mut self) {
        self.assign_form_seq += 1;
    }
}
