//! Read-only data loads behind each dashboard panel.

#[cfg(test)]
#[path = "loaders_test.rs"]
mod loaders_test;

use crate::net::api::DashboardApi;
use crate::net::error::ApiError;
use crate::state::dashboard::{DashboardState, LoadRequest, LoadedData};
use crate::state::sequence::LoadTicket;
use crate::util::auth::{Failure, classify_failure};

/// Fetch the data set named by `request`.
pub async fn fetch_view<A: DashboardApi>(api: &A, request: &LoadRequest) -> Result<LoadedData, ApiError> {
    Ok(match request {
        LoadRequest::MyReports => LoadedData::MyReports(api.my_reports().await?),
        LoadRequest::Rewards => LoadedData::Rewards(api.rewards().await?),
        LoadRequest::AvailableTasks { query } => LoadedData::AvailableTasks(api.available_tasks(query).await?),
        LoadRequest::MyTasks => LoadedData::MyTasks(api.my_tasks().await?),
        LoadRequest::PendingReports => LoadedData::PendingReports(api.pending_reports().await?),
        LoadRequest::Volunteers => LoadedData::Volunteers(api.volunteers().await?),
        LoadRequest::ManageTasks { filters } => LoadedData::ManageTasks(api.manage_tasks(filters).await?),
        LoadRequest::Analytics => LoadedData::Analytics(api.stats().await?),
    })
}

/// How a finished load was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landed {
    Applied,
    /// A newer load of the same kind was issued; response dropped.
    Stale,
    /// Failed for a reason other than the session; the panel keeps its data.
    Abandoned,
    SignIn,
}

/// Store a finished load in `state`, honoring stale-response and session rules.
pub fn land(state: &mut DashboardState, ticket: LoadTicket, result: Result<LoadedData, ApiError>) -> Landed {
    match result {
        Ok(data) => {
            if state.apply_loaded(ticket, data) {
                Landed::Applied
            } else {
                leptos::logging::log!("dropping stale {} response (seq {})", ticket.kind.as_str(), ticket.seq);
                Landed::Stale
            }
        }
        Err(err) => match classify_failure(&err) {
            Failure::SignIn => Landed::SignIn,
            Failure::Show(_) => {
                leptos::logging::warn!("{} load failed: {err}", ticket.kind.as_str());
                Landed::Abandoned
            }
        },
    }
}
