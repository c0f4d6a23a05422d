//! Task markup: volunteer task cards and the moderator task table.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use super::escape::{escape_html, escape_or, status_badge, status_text};
use super::reports::photo_url;
use crate::net::types::{ManagedTask, Task};

pub const NO_AVAILABLE_TASKS: &str = "No open tasks right now. Check back soon!";
pub const NO_ASSIGNED_TASKS: &str = "No assigned tasks yet.";
pub const NO_MATCHING_TASKS: &str = "No tasks match the current filters.";

/// Which list a task card belongs to; decides its action buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskListKind {
    Available,
    Mine,
}

fn task_actions(task: &Task, kind: TaskListKind) -> String {
    let id = task.task_id;
    match kind {
        TaskListKind::Available => {
            format!(r#"<button class="btn btn-secondary" data-task-id="{id}" data-action="claim">Claim Task</button>"#)
        }
        TaskListKind::Mine => format!(
            r#"<div class="task-actions"><button class="btn btn-primary" data-task-id="{id}" data-action="start">In Progress</button><button class="btn btn-outline" data-task-id="{id}" data-action="complete">Upload Proof</button></div>"#
        ),
    }
}

fn task_card(task: &Task, kind: TaskListKind) -> String {
    let proof = task
        .proof_photo_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!(r#"<img src="{}" class="photo-thumb" alt="Cleanup proof">"#, photo_url(p)))
        .unwrap_or_default();

    format!(
        r#"<div class="task-card card"><div class="report-header"><h4>{category}</h4>{badge}</div><p>{description}</p><p><strong>Location:</strong> {location}</p><p><strong>Severity:</strong> {severity}</p>{proof}{actions}</div>"#,
        category = escape_html(&task.category),
        badge = status_badge(task.display_status()),
        description = escape_html(&task.description),
        location = escape_html(&task.location_text),
        severity = escape_or(task.severity.as_deref(), "n/a"),
        actions = task_actions(task, kind),
    )
}

/// Task cards for the volunteer views.
pub fn task_list(tasks: &[Task], kind: TaskListKind) -> String {
    if tasks.is_empty() {
        let sentence = match kind {
            TaskListKind::Available => NO_AVAILABLE_TASKS,
            TaskListKind::Mine => NO_ASSIGNED_TASKS,
        };
        return format!("<p>{sentence}</p>");
    }
    tasks.iter().map(|t| task_card(t, kind)).collect()
}

/// Table of every task matching the moderator filters.
pub fn managed_tasks(tasks: &[ManagedTask]) -> String {
    if tasks.is_empty() {
        return format!("<p>{NO_MATCHING_TASKS}</p>");
    }
    let rows = tasks
        .iter()
        .map(|task| {
            format!(
                "<tr><td>#{id}</td><td>{category}</td><td>{status}</td><td>{location}</td><td>{volunteer}</td></tr>",
                id = task.task_id,
                category = escape_html(&task.category),
                status = status_text(Some(&task.status)),
                location = escape_html(&task.location_text),
                volunteer = escape_or(task.volunteer_name.as_deref(), "Unassigned"),
            )
        })
        .collect::<String>();

    format!(
        r#"<div class="table-wrapper"><table class="table"><thead><tr><th>ID</th><th>Category</th><th>Status</th><th>Location</th><th>Volunteer</th></tr></thead><tbody>{rows}</tbody></table></div>"#
    )
}
