//! Report list markup: the citizen's own reports and the moderator queue.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use super::escape::{escape_html, escape_or, status_badge};
use crate::net::types::Report;

pub const NO_REPORTS: &str = "No reports yet. Submit your first issue to get started.";
pub const NO_PENDING_REPORTS: &str = "All caught up! No pending reports.";

/// Absolute URL of an uploaded photo (`uploads/x.jpg` -> `/uploads/x.jpg`).
pub(crate) fn photo_url(path: &str) -> String {
    escape_html(&format!("/{}", path.trim_start_matches('/')))
}

fn report_card(report: &Report) -> String {
    let notes = report
        .moderator_notes
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .map(|n| format!("<p><strong>Moderator Notes:</strong> {}</p>", escape_html(n)))
        .unwrap_or_default();
    let photo = report
        .photo_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!(r#"<img src="{}" class="photo-thumb" alt="Report photo">"#, photo_url(p)))
        .unwrap_or_default();

    format!(
        r#"<div class="report-card card"><div class="report-header"><h4>{category}</h4>{badge}</div><p>{description}</p><p><strong>Location:</strong> {location}</p><p><strong>Severity:</strong> {severity}</p>{notes}{photo}</div>"#,
        category = escape_html(&report.category),
        badge = status_badge(report.status.as_deref()),
        description = escape_html(&report.description),
        location = escape_html(&report.location_text),
        severity = escape_or(report.severity.as_deref(), "n/a"),
    )
}

/// The signed-in user's submitted reports.
pub fn my_reports(reports: &[Report]) -> String {
    if reports.is_empty() {
        return format!("<p>{NO_REPORTS}</p>");
    }
    reports.iter().map(report_card).collect()
}

fn pending_card(report: &Report) -> String {
    let id = report.id;
    let photo = report
        .photo_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!(r#"<img src="{}" class="evidence-photo" alt="Evidence">"#, photo_url(p)))
        .unwrap_or_default();

    format!(
        r#"<div class="card" data-report="{id}"><div class="report-header"><h4>{category}</h4><span class="badge">{severity}</span></div>{photo}<p>{description}</p><p><strong>Location:</strong> {location}</p><p><strong>Citizen:</strong> {citizen} ({email})</p><textarea class="form-control" rows="2" data-notes="{id}" placeholder="Add moderator notes"></textarea><div class="task-actions"><button class="btn btn-primary" data-action="validate" data-valid="true" data-report-id="{id}">Mark Valid</button><button class="btn btn-outline" data-action="validate" data-valid="false" data-report-id="{id}">Mark Invalid</button></div></div>"#,
        category = escape_html(&report.category),
        severity = escape_or(report.severity.as_deref(), "n/a"),
        description = escape_html(&report.description),
        location = escape_html(&report.location_text),
        citizen = escape_or(report.citizen_name.as_deref(), "Anonymous"),
        email = escape_or(report.citizen_email.as_deref(), "n/a"),
    )
}

/// Moderator queue of unvalidated reports with validate controls.
pub fn pending_reports(reports: &[Report]) -> String {
    if reports.is_empty() {
        return format!("<p>{NO_PENDING_REPORTS}</p>");
    }
    reports.iter().map(pending_card).collect()
}
