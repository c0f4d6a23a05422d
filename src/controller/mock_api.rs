//! In-memory `DashboardApi` that records every call.

use std::cell::RefCell;

use crate::net::api::DashboardApi;
use crate::net::error::ApiError;
use crate::net::types::{
    AssignRequest, Attachment, ManagedTask, Report, ReportSubmission, RewardsSnapshot, Role, Stats, Task, TaskFilters,
    User, ValidateRequest, Volunteer,
};

#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<String>>,
    /// Returned by every mutating call when set.
    pub action_error: Option<ApiError>,
    /// Returned by every load when set.
    pub load_error: Option<ApiError>,
    pub reports: Vec<Report>,
    pub managed: Vec<ManagedTask>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn act(&self, call: impl Into<String>) -> Result<(), ApiError> {
        self.record(call);
        self.action_error.clone().map_or(Ok(()), Err)
    }

    fn load<T>(&self, call: impl Into<String>, value: T) -> Result<T, ApiError> {
        self.record(call);
        self.load_error.clone().map_or(Ok(value), Err)
    }
}

pub fn user(role: Role) -> User {
    User { id: 1, name: "Asha".to_owned(), email: "asha@example.org".to_owned(), role }
}

pub fn attachment(name: &str) -> Attachment {
    Attachment { name: name.to_owned() }
}

impl DashboardApi for MockApi {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.load("current_user", user(Role::Citizen))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.act("logout")
    }

    async fn my_reports(&self) -> Result<Vec<Report>, ApiError> {
        self.load("my_reports", self.reports.clone())
    }

    async fn rewards(&self) -> Result<RewardsSnapshot, ApiError> {
        self.load("rewards", RewardsSnapshot::default())
    }

    async fn available_tasks(&self, query: &str) -> Result<Vec<Task>, ApiError> {
        self.load(format!("available_tasks q={query}"), Vec::new())
    }

    async fn my_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.load("my_tasks", Vec::new())
    }

    async fn pending_reports(&self) -> Result<Vec<Report>, ApiError> {
        self.load("pending_reports", Vec::new())
    }

    async fn volunteers(&self) -> Result<Vec<Volunteer>, ApiError> {
        self.load("volunteers", Vec::new())
    }

    async fn manage_tasks(&self, filters: &TaskFilters) -> Result<Vec<ManagedTask>, ApiError> {
        let call = format!("manage_tasks status={} category={} q={}", filters.status, filters.category, filters.q);
        self.load(call, self.managed.clone())
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        self.load("stats", Stats::default())
    }

    async fn claim_task(&self, task_id: i64) -> Result<(), ApiError> {
        self.act(format!("claim_task {task_id}"))
    }

    async fn start_task(&self, task_id: i64) -> Result<(), ApiError> {
        self.act(format!("start_task {task_id}"))
    }

    async fn complete_task(&self, task_id: i64, proof: &Attachment, notes: &str) -> Result<(), ApiError> {
        self.act(format!("complete_task {task_id} {} {notes}", proof.name))
    }

    async fn validate_report(&self, report_id: i64, body: &ValidateRequest) -> Result<(), ApiError> {
        self.act(format!("validate_report {report_id} {} {}", body.is_valid, body.notes))
    }

    async fn assign_report(&self, report_id: i64, body: &AssignRequest) -> Result<(), ApiError> {
        self.act(format!("assign_report {report_id} {}", body.volunteer_id))
    }

    async fn submit_report(&self, submission: &ReportSubmission) -> Result<(), ApiError> {
        self.act(format!("submit_report {} {}", submission.category, submission.photo.name))
    }
}
