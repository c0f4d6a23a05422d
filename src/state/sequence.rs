//! Per-loader sequence stamps for dropping stale responses.
//!
//! DESIGN
//! ======
//! Loads are fired without cancellation, so a slow response can arrive after
//! a newer one for the same view. Each issued load gets a ticket; only the
//! ticket matching the latest issue for its kind may write into state.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

/// Every data set the dashboard can load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoaderKind {
    MyReports,
    Rewards,
    AvailableTasks,
    MyTasks,
    PendingReports,
    Volunteers,
    ManageTasks,
    Analytics,
}

impl LoaderKind {
    pub const ALL: [LoaderKind; 8] = [
        LoaderKind::MyReports,
        LoaderKind::Rewards,
        LoaderKind::AvailableTasks,
        LoaderKind::MyTasks,
        LoaderKind::PendingReports,
        LoaderKind::Volunteers,
        LoaderKind::ManageTasks,
        LoaderKind::Analytics,
    ];

    fn index(self) -> usize {
        match self {
            Self::MyReports => 0,
            Self::Rewards => 1,
            Self::AvailableTasks => 2,
            Self::MyTasks => 3,
            Self::PendingReports => 4,
            Self::Volunteers => 5,
            Self::ManageTasks => 6,
            Self::Analytics => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MyReports => "my-reports",
            Self::Rewards => "rewards",
            Self::AvailableTasks => "available-tasks",
            Self::MyTasks => "my-tasks",
            Self::PendingReports => "pending-reports",
            Self::Volunteers => "volunteers",
            Self::ManageTasks => "manage-tasks",
            Self::Analytics => "analytics",
        }
    }
}

/// Proof that a load was issued; compared against the latest issue on arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub kind: LoaderKind,
    pub seq: u64,
}

/// Monotonic issue counters, one per [`LoaderKind`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSequencer {
    issued: [u64; LoaderKind::ALL.len()],
}

impl LoadSequencer {
    /// Issue a new ticket, superseding every earlier ticket of the same kind.
    pub fn begin(&mut self, kind: LoaderKind) -> LoadTicket {
        let slot = &mut self.issued[kind.index()];
        *slot += 1;
        LoadTicket { kind, seq: *slot }
    }

    /// Whether `ticket` is still the newest issue for its kind.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.issued[ticket.kind.index()] == ticket.seq
    }
}
