//! Mutating dashboard actions and how their results feed back into state.
//!
//! DESIGN
//! ======
//! Every control that changes server data resolves to one [`DashboardAction`]
//! variant. [`perform`] matches exhaustively, so adding a variant forces a
//! decision about its endpoint, success message, and follow-up loads.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::config::COMPLETION_NOTE;
use crate::net::api::DashboardApi;
use crate::net::error::ApiError;
use crate::net::types::{AssignRequest, Attachment, ReportSubmission, TaskFilters, ValidateRequest};
use crate::state::dashboard::{AlertKind, DashboardState, LoadRequest};
use crate::state::sequence::{LoadTicket, LoaderKind};
use crate::util::auth::{Failure, classify_failure};

pub const PHOTO_REQUIRED_MESSAGE: &str = "Please attach a photo.";
pub const ASSIGN_INCOMPLETE_MESSAGE: &str = "Please choose both report and volunteer.";

#[derive(Clone, Debug)]
pub enum DashboardAction {
    ClaimTask { task_id: i64 },
    StartTask { task_id: i64 },
    CompleteTask { task_id: i64, proof: Attachment },
    ValidateReport { report_id: i64, is_valid: bool, notes: String },
    AssignVolunteer { report_id: i64, volunteer_id: i64 },
    SubmitReport(ReportSubmission),
    FilterTasks(TaskFilters),
}

/// State changes that follow a successful action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    Refresh,
    ResetReportFormAndRefresh,
    ResetAssignFormAndRefresh,
    ReloadManageTasks,
}

impl DashboardAction {
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Self::ClaimTask { .. } => Some("Task claimed successfully."),
            Self::StartTask { .. } => Some("Task progress updated successfully."),
            Self::CompleteTask { .. } => Some("Task marked as completed!"),
            Self::ValidateReport { is_valid: true, .. } => Some("Report validated."),
            Self::ValidateReport { is_valid: false, .. } => Some("Report marked invalid."),
            Self::AssignVolunteer { .. } => Some("Task assigned successfully."),
            Self::SubmitReport(_) => Some("Report submitted successfully."),
            Self::FilterTasks(_) => None,
        }
    }

    pub fn follow_up(&self) -> FollowUp {
        match self {
            Self::ClaimTask { .. }
            | Self::StartTask { .. }
            | Self::CompleteTask { .. }
            | Self::ValidateReport { .. } => FollowUp::Refresh,
            Self::AssignVolunteer { .. } => FollowUp::ResetAssignFormAndRefresh,
            Self::SubmitReport(_) => FollowUp::ResetReportFormAndRefresh,
            Self::FilterTasks(_) => FollowUp::ReloadManageTasks,
        }
    }

    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClaimTask { .. } => "claim_task",
            Self::StartTask { .. } => "start_task",
            Self::CompleteTask { .. } => "complete_task",
            Self::ValidateReport { .. } => "validate_report",
            Self::AssignVolunteer { .. } => "assign_volunteer",
            Self::SubmitReport(_) => "submit_report",
            Self::FilterTasks(_) => "filter_tasks",
        }
    }
}

/// Completion action for a proof picked from the file dialog. A cancelled
/// dialog yields nothing.
pub fn proof_chosen(task_id: i64, file: Option<Attachment>) -> Option<DashboardAction> {
    file.map(|proof| DashboardAction::CompleteTask { task_id, proof })
}

/// Raw values of the report submission form.
#[derive(Clone, Debug, Default)]
pub struct ReportDraft {
    pub category: String,
    pub description: String,
    pub location_text: String,
    pub severity: String,
    pub latitude: String,
    pub longitude: String,
    pub is_anonymous: bool,
    pub photo: Option<Attachment>,
}

impl ReportDraft {
    pub fn into_action(self) -> Result<DashboardAction, &'static str> {
        let photo = self.photo.ok_or(PHOTO_REQUIRED_MESSAGE)?;
        Ok(DashboardAction::SubmitReport(ReportSubmission {
            category: self.category,
            description: self.description,
            location_text: self.location_text,
            severity: self.severity,
            latitude: self.latitude,
            longitude: self.longitude,
            is_anonymous: self.is_anonymous,
            photo,
        }))
    }
}

/// Raw values of the assignment form.
#[derive(Clone, Debug, Default)]
pub struct AssignDraft {
    pub report_id: String,
    pub volunteer_id: String,
}

impl AssignDraft {
    pub fn into_action(&self) -> Result<DashboardAction, &'static str> {
        let report_id = parse_id(&self.report_id).ok_or(ASSIGN_INCOMPLETE_MESSAGE)?;
        let volunteer_id = parse_id(&self.volunteer_id).ok_or(ASSIGN_INCOMPLETE_MESSAGE)?;
        Ok(DashboardAction::AssignVolunteer { report_id, volunteer_id })
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Issue the network call for `action`. Filter changes need none.
pub async fn perform<A: DashboardApi>(api: &A, action: &DashboardAction) -> Result<(), ApiError> {
    match action {
        DashboardAction::ClaimTask { task_id } => api.claim_task(*task_id).await,
        DashboardAction::StartTask { task_id } => api.start_task(*task_id).await,
        DashboardAction::CompleteTask { task_id, proof } => api.complete_task(*task_id, proof, COMPLETION_NOTE).await,
        DashboardAction::ValidateReport { report_id, is_valid, notes } => {
            let body = ValidateRequest { is_valid: *is_valid, notes: notes.clone() };
            api.validate_report(*report_id, &body).await
        }
        DashboardAction::AssignVolunteer { report_id, volunteer_id } => {
            api.assign_report(*report_id, &AssignRequest { volunteer_id: *volunteer_id }).await
        }
        DashboardAction::SubmitReport(submission) => api.submit_report(submission).await,
        DashboardAction::FilterTasks(_) => Ok(()),
    }
}

/// What the caller does once an action has settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Session rejected; leave for sign-in without touching state.
    SignIn,
    Continue {
        loads: Vec<(LoadTicket, LoadRequest)>,
        /// Seq of a success alert to clear after its display time.
        clear_alert: Option<u64>,
    },
}

/// Fold an action's result into `state` and return the loads to issue.
pub fn settle(state: &mut DashboardState, action: &DashboardAction, result: Result<(), ApiError>) -> Settled {
    if let Err(err) = result {
        return match classify_failure(&err) {
            Failure::SignIn => Settled::SignIn,
            Failure::Show(message) => {
                leptos::logging::warn!("{} failed: {err}", action.name());
                state.set_alert(AlertKind::Error, message);
                Settled::Continue { loads: Vec::new(), clear_alert: None }
            }
        };
    }

    let clear_alert = action.success_message().map(|message| state.set_alert(AlertKind::Success, message));
    let loads = match action.follow_up() {
        FollowUp::Refresh => state.begin_refresh(),
        FollowUp::ResetReportFormAndRefresh => {
            state.reset_report_form();
            state.begin_refresh()
        }
        FollowUp::ResetAssignFormAndRefresh => {
            state.reset_assign_form();
            state.begin_refresh()
        }
        FollowUp::ReloadManageTasks => {
            if let DashboardAction::FilterTasks(filters) = action {
                state.filters = filters.clone();
            }
            vec![state.begin_load(LoaderKind::ManageTasks)]
        }
    };
    Settled::Continue { loads, clear_alert }
}

/// Show a local validation failure. No request is made.
pub fn reject(state: &mut DashboardState, message: &str) {
    state.set_alert(AlertKind::Error, message);
}
