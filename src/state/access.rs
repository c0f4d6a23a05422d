//! Role-based tab access and per-role capability descriptors.
//!
//! SYSTEM CONTEXT
//! ==============
//! These rules only decide which affordances the UI shows. The backend
//! enforces authorization on every call regardless.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use super::sequence::LoaderKind;
use crate::net::types::Role;

pub const ACCESS_RESTRICTED_MESSAGE: &str = "Access restricted for your role.";

/// Dashboard sections, one per role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Citizen,
    Volunteer,
    Moderator,
    Admin,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Citizen, Tab::Volunteer, Tab::Moderator, Tab::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Self::Citizen => "Citizen",
            Self::Volunteer => "Volunteer",
            Self::Moderator => "Moderator",
            Self::Admin => "Admin",
        }
    }

    /// DOM id of the section this tab shows.
    pub fn section_id(self) -> &'static str {
        match self {
            Self::Citizen => "citizen-section",
            Self::Volunteer => "volunteer-section",
            Self::Moderator => "moderator-section",
            Self::Admin => "admin-section",
        }
    }

    /// The tab a role lands on after sign-in.
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Citizen => Self::Citizen,
            Role::Volunteer => Self::Volunteer,
            Role::Moderator => Self::Moderator,
            Role::Admin => Self::Admin,
        }
    }
}

/// Tabs a role may open.
pub fn allowed_tabs(role: Role) -> &'static [Tab] {
    match role {
        Role::Citizen => &[Tab::Citizen],
        Role::Volunteer => &[Tab::Citizen, Tab::Volunteer],
        Role::Moderator | Role::Admin => &Tab::ALL,
    }
}

/// What a session can see and do, resolved once from its role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub role: Role,
    pub tabs: Vec<Tab>,
    /// Loaders `refresh` runs, in issue order.
    pub loaders: Vec<LoaderKind>,
    pub submit_reports: bool,
    pub view_rewards: bool,
    pub work_tasks: bool,
    pub moderate: bool,
    pub view_analytics: bool,
}

impl Capabilities {
    pub fn for_role(role: Role) -> Self {
        let view_rewards = role == Role::Citizen;
        let work_tasks = matches!(role, Role::Volunteer | Role::Admin);
        let moderate = matches!(role, Role::Moderator | Role::Admin);

        let mut loaders = vec![LoaderKind::MyReports];
        if view_rewards {
            loaders.push(LoaderKind::Rewards);
        }
        if work_tasks {
            loaders.extend([LoaderKind::AvailableTasks, LoaderKind::MyTasks]);
        }
        if moderate {
            loaders.extend([
                LoaderKind::PendingReports,
                LoaderKind::Volunteers,
                LoaderKind::ManageTasks,
                LoaderKind::Analytics,
            ]);
        }

        Self {
            role,
            tabs: allowed_tabs(role).to_vec(),
            loaders,
            submit_reports: true,
            view_rewards,
            work_tasks,
            moderate,
            view_analytics: moderate,
        }
    }

    #[must_use]
    pub fn allows_tab(&self, tab: Tab) -> bool {
        self.tabs.contains(&tab)
    }

    #[must_use]
    pub fn runs(&self, kind: LoaderKind) -> bool {
        self.loaders.contains(&kind)
    }
}
