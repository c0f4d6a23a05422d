use super::*;

#[test]
fn first_ticket_is_current() {
    let mut seq = LoadSequencer::default();
    let ticket = seq.begin(LoaderKind::ManageTasks);
    assert_eq!(ticket.seq, 1);
    assert!(seq.is_current(ticket));
}

#[test]
fn newer_ticket_supersedes_older_of_same_kind() {
    let mut seq = LoadSequencer::default();
    let old = seq.begin(LoaderKind::AvailableTasks);
    let new = seq.begin(LoaderKind::AvailableTasks);
    assert!(!seq.is_current(old));
    assert!(seq.is_current(new));
    assert_eq!(new.seq, 2);
}

#[test]
fn kinds_are_sequenced_independently() {
    let mut seq = LoadSequencer::default();
    let reports = seq.begin(LoaderKind::MyReports);
    let _ = seq.begin(LoaderKind::Analytics);
    let _ = seq.begin(LoaderKind::Analytics);
    assert!(seq.is_current(reports));
    assert_eq!(seq.begin(LoaderKind::Rewards).seq, 1);
}

#[test]
fn loader_kind_names_are_unique() {
    let mut names = LoaderKind::ALL.iter().map(|k| k.as_str()).collect::<Vec<_>>();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), LoaderKind::ALL.len());
}
