//! Click delegation for markup panels.
//!
//! Panels are rendered as HTML strings, so their buttons carry `data-*`
//! attributes instead of closures. A single click handler per panel walks up
//! to the nearest `[data-action]` element and resolves it here.

#[cfg(test)]
#[path = "delegate_test.rs"]
mod delegate_test;

use super::actions::DashboardAction;

/// `data-*` attributes read off the clicked control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DelegatedTarget {
    pub action: String,
    pub task_id: Option<String>,
    pub report_id: Option<String>,
    pub valid: Option<String>,
    pub index: Option<String>,
}

/// What a delegated click asks for.
#[derive(Clone, Debug)]
pub enum Delegated {
    Action(DashboardAction),
    /// Open the proof file picker for this task.
    PickProof { task_id: i64 },
    RevealReward { index: usize },
}

fn parse<T: std::str::FromStr>(raw: Option<&String>) -> Option<T> {
    raw.and_then(|v| v.trim().parse().ok())
}

impl DelegatedTarget {
    /// Resolve the click. `notes_for` reads the moderator notes adjacent to a
    /// report. Unknown actions and malformed ids resolve to nothing.
    pub fn resolve(&self, notes_for: impl FnOnce(i64) -> String) -> Option<Delegated> {
        let task_id = || parse::<i64>(self.task_id.as_ref());
        match self.action.as_str() {
            "claim" => Some(Delegated::Action(DashboardAction::ClaimTask { task_id: task_id()? })),
            "start" => Some(Delegated::Action(DashboardAction::StartTask { task_id: task_id()? })),
            "complete" => Some(Delegated::PickProof { task_id: task_id()? }),
            "validate" => {
                let report_id = parse::<i64>(self.report_id.as_ref())?;
                let is_valid = self.valid.as_deref() == Some("true");
                let notes = notes_for(report_id);
                Some(Delegated::Action(DashboardAction::ValidateReport { report_id, is_valid, notes }))
            }
            "reveal" => Some(Delegated::RevealReward { index: parse(self.index.as_ref())? }),
            _ => None,
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::JsCast;

    use super::DelegatedTarget;

    /// Read the nearest `[data-action]` ancestor of the event target.
    pub fn target_from_event(ev: &web_sys::Event) -> Option<DelegatedTarget> {
        let el = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())?
            .closest("[data-action]")
            .ok()
            .flatten()?;
        Some(DelegatedTarget {
            action: el.get_attribute("data-action")?,
            task_id: el.get_attribute("data-task-id"),
            report_id: el.get_attribute("data-report-id"),
            valid: el.get_attribute("data-valid"),
            index: el.get_attribute("data-index"),
        })
    }

    /// Value of the notes textarea for `report_id` inside `container`.
    pub fn notes_in(container: &web_sys::Element, report_id: i64) -> String {
        container
            .query_selector(&format!("[data-notes=\"{report_id}\"]"))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            .map(|area| area.value())
            .unwrap_or_default()
    }
}

#[cfg(feature = "csr")]
pub use browser::{notes_in, target_from_event};
