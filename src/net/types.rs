//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads. Optional columns stay `Option`
//! so renderers can substitute their documented fallbacks instead of failing
//! the whole load on a missing field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role as reported by `/api/me`.
///
/// Unknown role strings degrade to [`Role::Citizen`], the least privileged
/// view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Role {
    #[default]
    Citizen,
    Volunteer,
    Moderator,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Citizen, Role::Volunteer, Role::Moderator, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Volunteer => "volunteer",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }

    /// Strict parse used for user-supplied values such as query parameters.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "citizen" => Some(Self::Citizen),
            "volunteer" => Some(Self::Volunteer),
            "moderator" => Some(Self::Moderator),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Citizen => "Citizen",
            Self::Volunteer => "Volunteer",
            Self::Moderator => "Moderator",
            Self::Admin => "Admin",
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or_default()
    }
}

/// The authenticated account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A submitted report, as returned by `/api/reports/my` and
/// `/api/reports/pending`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub location_text: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub photo_path: Option<String>,
    #[serde(default)]
    pub moderator_notes: Option<String>,
    /// Present on the moderator queue only.
    #[serde(default)]
    pub citizen_name: Option<String>,
    #[serde(default)]
    pub citizen_email: Option<String>,
    #[serde(default)]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub task_status: Option<String>,
}

/// A cleanup task joined with its report, as returned by
/// `/api/tasks/available` and `/api/tasks/my`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: i64,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub location_text: String,
    #[serde(default)]
    pub severity: Option<String>,
    /// Report status (the row is a report joined with its task).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub task_status: Option<String>,
    #[serde(default)]
    pub photo_path: Option<String>,
    #[serde(default)]
    pub proof_photo_path: Option<String>,
    #[serde(default)]
    pub volunteer_name: Option<String>,
}

impl Task {
    /// Task lifecycle status, falling back to the report status.
    pub fn display_status(&self) -> Option<&str> {
        self.task_status.as_deref().or(self.status.as_deref())
    }
}

/// A row of the moderator task table (`/api/tasks/manage`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedTask {
    pub task_id: i64,
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub location_text: String,
    #[serde(default)]
    pub volunteer_name: Option<String>,
}

/// Volunteer directory entry for the assignment selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A location ranked by report frequency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    pub location: String,
    pub count: u64,
}

/// Aggregate analytics from `/api/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_reports: u64,
    pub valid_reports: u64,
    pub completed_tasks: u64,
    pub volunteers_count: u64,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

/// An unlocked partner discount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub tier: u32,
    pub brand: String,
    pub description: String,
    pub code: String,
}

/// The next locked reward tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTier {
    pub tier: u32,
    pub threshold: u64,
    pub brand: String,
}

/// Reward progress from `/api/rewards`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsSnapshot {
    pub valid_reports: u64,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    #[serde(default)]
    pub next_tier: Option<NextTier>,
}

/// Query filters for `/api/tasks/manage`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilters {
    pub status: String,
    pub category: String,
    pub q: String,
}

impl TaskFilters {
    /// Query pairs in the order the backend documents them. Empty values are
    /// sent as-is; the server treats them as "no filter".
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [("status", self.status.as_str()), ("category", self.category.as_str()), ("q", self.q.as_str())]
    }
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of `POST /api/reports/{id}/validate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidateRequest {
    pub is_valid: bool,
    pub notes: String,
}

/// Body of `POST /api/reports/{id}/assign`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssignRequest {
    pub volunteer_id: i64,
}

/// Error body shared by every failing endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// A user-selected file headed for a multipart upload.
///
/// Native builds carry only the file name, which is all the pure validation
/// paths need.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub name: String,
    #[cfg(feature = "csr")]
    pub file: web_sys::File,
}

#[cfg(feature = "csr")]
impl From<web_sys::File> for Attachment {
    fn from(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }
}

/// Multipart fields of `POST /api/reports`.
#[derive(Clone, Debug)]
pub struct ReportSubmission {
    pub category: String,
    pub description: String,
    pub location_text: String,
    pub severity: String,
    pub latitude: String,
    pub longitude: String,
    pub is_anonymous: bool,
    pub photo: Attachment,
}

impl ReportSubmission {
    /// Text fields in form order; the photo is appended separately.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("category", self.category.clone()),
            ("description", self.description.clone()),
            ("location_text", self.location_text.clone()),
            ("severity", self.severity.clone()),
            ("latitude", self.latitude.clone()),
            ("longitude", self.longitude.clone()),
            ("is_anonymous", self.is_anonymous.to_string()),
        ]
    }
}
