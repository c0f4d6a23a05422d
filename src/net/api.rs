//! REST API client for the GreenTrack backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` with cookies attached.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Controllers talk to the backend through the [`DashboardApi`] and
//! [`AuthApi`] traits so their flows can be exercised against an in-memory
//! double. [`HttpApi`] is the only production implementation.
//!
//! ERROR HANDLING
//! ==============
//! Session-scoped calls map 401 to [`ApiError::Unauthorized`]; the auth calls
//! keep 401 as an ordinary "invalid credentials" error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AssignRequest, Attachment, LoginRequest, ManagedTask, RegisterRequest, Report, ReportSubmission, RewardsSnapshot,
    Stats, Task, TaskFilters, User, ValidateRequest, Volunteer,
};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed";

fn task_endpoint(task_id: i64, verb: &str) -> String {
    format!("/api/tasks/{task_id}/{verb}")
}

fn report_endpoint(report_id: i64, verb: &str) -> String {
    format!("/api/reports/{report_id}/{verb}")
}

/// Session-scoped backend operations used by the dashboard.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;

    async fn my_reports(&self) -> Result<Vec<Report>, ApiError>;
    async fn rewards(&self) -> Result<RewardsSnapshot, ApiError>;
    async fn available_tasks(&self, query: &str) -> Result<Vec<Task>, ApiError>;
    async fn my_tasks(&self) -> Result<Vec<Task>, ApiError>;
    async fn pending_reports(&self) -> Result<Vec<Report>, ApiError>;
    async fn volunteers(&self) -> Result<Vec<Volunteer>, ApiError>;
    async fn manage_tasks(&self, filters: &TaskFilters) -> Result<Vec<ManagedTask>, ApiError>;
    async fn stats(&self) -> Result<Stats, ApiError>;

    async fn claim_task(&self, task_id: i64) -> Result<(), ApiError>;
    async fn start_task(&self, task_id: i64) -> Result<(), ApiError>;
    async fn complete_task(&self, task_id: i64, proof: &Attachment, notes: &str) -> Result<(), ApiError>;
    async fn validate_report(&self, report_id: i64, body: &ValidateRequest) -> Result<(), ApiError>;
    async fn assign_report(&self, report_id: i64, body: &AssignRequest) -> Result<(), ApiError>;
    async fn submit_report(&self, submission: &ReportSubmission) -> Result<(), ApiError>;
}

/// Credential endpoints used by the sign-in page.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, body: &LoginRequest) -> Result<User, ApiError>;
    async fn register(&self, body: &RegisterRequest) -> Result<(), ApiError>;
}

/// `gloo-net` implementation of the API traits.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl DashboardApi for HttpApi {
    async fn current_user(&self) -> Result<User, ApiError> {
        transport::get_json("/api/me", &[]).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        transport::post_empty("/api/logout").await
    }

    async fn my_reports(&self) -> Result<Vec<Report>, ApiError> {
        transport::get_json("/api/reports/my", &[]).await
    }

    async fn rewards(&self) -> Result<RewardsSnapshot, ApiError> {
        transport::get_json("/api/rewards", &[]).await
    }

    async fn available_tasks(&self, query: &str) -> Result<Vec<Task>, ApiError> {
        transport::get_json("/api/tasks/available", &[("q", query)]).await
    }

    async fn my_tasks(&self) -> Result<Vec<Task>, ApiError> {
        transport::get_json("/api/tasks/my", &[]).await
    }

    async fn pending_reports(&self) -> Result<Vec<Report>, ApiError> {
        transport::get_json("/api/reports/pending", &[]).await
    }

    async fn volunteers(&self) -> Result<Vec<Volunteer>, ApiError> {
        transport::get_json("/api/users/volunteers", &[]).await
    }

    async fn manage_tasks(&self, filters: &TaskFilters) -> Result<Vec<ManagedTask>, ApiError> {
        transport::get_json("/api/tasks/manage", &filters.query_pairs()).await
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        transport::get_json("/api/stats", &[]).await
    }

    async fn claim_task(&self, task_id: i64) -> Result<(), ApiError> {
        transport::post_empty(&task_endpoint(task_id, "claim")).await
    }

    async fn start_task(&self, task_id: i64) -> Result<(), ApiError> {
        transport::post_empty(&task_endpoint(task_id, "start")).await
    }

    async fn complete_task(&self, task_id: i64, proof: &Attachment, notes: &str) -> Result<(), ApiError> {
        let fields = [("notes", notes.to_owned())];
        transport::post_multipart(&task_endpoint(task_id, "complete"), &fields, ("proof_photo", proof)).await
    }

    async fn validate_report(&self, report_id: i64, body: &ValidateRequest) -> Result<(), ApiError> {
        transport::post_json(&report_endpoint(report_id, "validate"), body).await
    }

    async fn assign_report(&self, report_id: i64, body: &AssignRequest) -> Result<(), ApiError> {
        transport::post_json(&report_endpoint(report_id, "assign"), body).await
    }

    async fn submit_report(&self, submission: &ReportSubmission) -> Result<(), ApiError> {
        transport::post_multipart("/api/reports", &submission.text_fields(), ("photo", &submission.photo)).await
    }
}

impl AuthApi for HttpApi {
    async fn login(&self, body: &LoginRequest) -> Result<User, ApiError> {
        #[derive(serde::Deserialize)]
        struct LoginResponse {
            user: User,
        }
        let resp: LoginResponse = transport::post_credentials("/api/login", body, LOGIN_FAILED_MESSAGE).await?;
        Ok(resp.user)
    }

    async fn register(&self, body: &RegisterRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = transport::post_credentials("/api/register", body, REGISTER_FAILED_MESSAGE).await?;
        Ok(())
    }
}

#[cfg(feature = "csr")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::ApiError;
    use crate::config::api_url;
    use crate::net::types::Attachment;

    fn get(path: &str) -> RequestBuilder {
        Request::get(&api_url(path)).credentials(RequestCredentials::Include)
    }

    fn post(path: &str) -> RequestBuilder {
        Request::post(&api_url(path)).credentials(RequestCredentials::Include)
    }

    fn network(err: impl std::fmt::Display) -> ApiError {
        ApiError::Network(err.to_string())
    }

    async fn read_body(resp: &Response) -> String {
        resp.text().await.unwrap_or_default()
    }

    async fn expect_ok(resp: Response) -> Result<String, ApiError> {
        let status = resp.status();
        let body = read_body(&resp).await;
        if !resp.ok() {
            return Err(ApiError::from_session_status(status, &body));
        }
        Ok(body)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn get_json<T: DeserializeOwned>(path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let resp = get(path)
            .query(query.iter().copied())
            .send()
            .await
            .map_err(network)?;
        decode(&expect_ok(resp).await?)
    }

    pub(super) async fn post_empty(path: &str) -> Result<(), ApiError> {
        let resp = post(path).send().await.map_err(network)?;
        expect_ok(resp).await.map(|_| ())
    }

    pub(super) async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
        let resp = post(path)
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_ok(resp).await.map(|_| ())
    }

    pub(super) async fn post_multipart(
        path: &str,
        fields: &[(&str, String)],
        file: (&str, &Attachment),
    ) -> Result<(), ApiError> {
        let form = web_sys::FormData::new().map_err(|e| network(format!("{e:?}")))?;
        for (name, value) in fields {
            form.append_with_str(name, value)
                .map_err(|e| network(format!("{e:?}")))?;
        }
        let (field, attachment) = file;
        form.append_with_blob_and_filename(field, &attachment.file, &attachment.name)
            .map_err(|e| network(format!("{e:?}")))?;
        let resp = post(path).body(form).map_err(network)?.send().await.map_err(network)?;
        expect_ok(resp).await.map(|_| ())
    }

    pub(super) async fn post_credentials<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let resp = post(path)
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let status = resp.status();
        let text = read_body(&resp).await;
        if !resp.ok() {
            return Err(ApiError::from_status(status, &text, fallback));
        }
        decode(&text)
    }
}

#[cfg(not(feature = "csr"))]
mod transport {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::ApiError;
    use crate::net::types::Attachment;

    pub(super) async fn get_json<T: DeserializeOwned>(path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let _ = (path, query);
        Err(ApiError::Unavailable)
    }

    pub(super) async fn post_empty(path: &str) -> Result<(), ApiError> {
        let _ = path;
        Err(ApiError::Unavailable)
    }

    pub(super) async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }

    pub(super) async fn post_multipart(
        path: &str,
        fields: &[(&str, String)],
        file: (&str, &Attachment),
    ) -> Result<(), ApiError> {
        let _ = (path, fields, file);
        Err(ApiError::Unavailable)
    }

    pub(super) async fn post_credentials<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let _ = (path, body, fallback);
        Err(ApiError::Unavailable)
    }
}
