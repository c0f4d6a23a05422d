use super::*;

const HOSTILE: &str = r#"<img src=x onerror="boom()">&'"#;

fn task(id: i64) -> Task {
    Task {
        task_id: id,
        category: "garbage_dump".to_owned(),
        description: "Dump behind the market".to_owned(),
        location_text: "Old Market".to_owned(),
        severity: Some("medium".to_owned()),
        status: Some("valid".to_owned()),
        task_status: Some("pending".to_owned()),
        ..Task::default()
    }
}

#[test]
fn empty_lists_render_their_own_fallbacks() {
    assert_eq!(task_list(&[], TaskListKind::Available), format!("<p>{NO_AVAILABLE_TASKS}</p>"));
    assert_eq!(task_list(&[], TaskListKind::Mine), format!("<p>{NO_ASSIGNED_TASKS}</p>"));
    assert_eq!(managed_tasks(&[]), format!("<p>{NO_MATCHING_TASKS}</p>"));
}

#[test]
fn available_cards_offer_claim_only() {
    let html = task_list(&[task(3)], TaskListKind::Available);
    assert!(html.contains(r#"data-task-id="3" data-action="claim""#));
    assert!(!html.contains(r#"data-action="start""#));
    assert!(!html.contains(r#"data-action="complete""#));
}

#[test]
fn my_task_cards_offer_start_and_complete() {
    let html = task_list(&[task(4)], TaskListKind::Mine);
    assert!(html.contains(r#"data-task-id="4" data-action="start""#));
    assert!(html.contains(r#"data-task-id="4" data-action="complete""#));
    assert!(!html.contains(r#"data-action="claim""#));
}

#[test]
fn one_card_per_task() {
    let html = task_list(&[task(1), task(2), task(3)], TaskListKind::Available);
    assert_eq!(html.matches("task-card card").count(), 3);
}

#[test]
fn card_shows_task_status_over_report_status() {
    let html = task_list(&[Task { task_status: Some("in_progress".to_owned()), ..task(1) }], TaskListKind::Mine);
    assert!(html.contains(r#"status-in_progress">in progress<"#));
}

#[test]
fn missing_severity_renders_na() {
    let html = task_list(&[Task { severity: None, ..task(1) }], TaskListKind::Available);
    assert!(html.contains("<strong>Severity:</strong> n/a"));
}

#[test]
fn proof_photo_renders_on_my_tasks() {
    let html = task_list(
        &[Task { proof_photo_path: Some("uploads/proof.png".to_owned()), ..task(1) }],
        TaskListKind::Mine,
    );
    assert!(html.contains(r#"src="/uploads/proof.png""#));
}

#[test]
fn task_cards_escape_user_text() {
    let hostile = Task {
        category: HOSTILE.to_owned(),
        description: HOSTILE.to_owned(),
        location_text: HOSTILE.to_owned(),
        severity: Some(HOSTILE.to_owned()),
        task_status: Some(HOSTILE.to_owned()),
        ..task(9)
    };
    let html = task_list(&[hostile], TaskListKind::Available);
    assert!(!html.contains("<img src=x"));
    assert!(!html.contains("onerror=\""));
    assert!(html.contains("&lt;img src=x onerror=&quot;boom()&quot;&gt;&amp;&#039;"));
}

#[test]
fn managed_table_falls_back_to_unassigned() {
    let rows = vec![
        ManagedTask {
            task_id: 8,
            category: "litter".to_owned(),
            status: "in_progress".to_owned(),
            location_text: "Lake Road".to_owned(),
            volunteer_name: None,
        },
        ManagedTask {
            task_id: 9,
            category: "sewage".to_owned(),
            status: "assigned".to_owned(),
            location_text: "Bus Depot".to_owned(),
            volunteer_name: Some("Ravi".to_owned()),
        },
    ];
    let html = managed_tasks(&rows);
    assert!(html.contains("<td>#8</td>"));
    assert!(html.contains("<td>in progress</td>"));
    assert!(html.contains("<td>Unassigned</td>"));
    assert!(html.contains("<td>Ravi</td>"));
    assert_eq!(html.matches("<tr>").count(), 3);
}

#[test]
fn managed_table_escapes_user_text() {
    let html = managed_tasks(&[ManagedTask {
        task_id: 1,
        category: HOSTILE.to_owned(),
        status: HOSTILE.to_owned(),
        location_text: HOSTILE.to_owned(),
        volunteer_name: Some(HOSTILE.to_owned()),
    }]);
    assert!(!html.contains("<img"));
    assert_eq!(html.matches("&lt;img src=x").count(), 4);
}

#[test]
fn card_without_any_status_reads_pending() {
    let html = task_list(&[Task { task_status: None, status: None, ..task(2) }], TaskListKind::Available);
    assert!(html.contains(r#"<span class="status-badge status-pending">Pending</span>"#));
}

#[test]
fn managed_row_without_status_reads_pending() {
    let html = managed_tasks(&[ManagedTask {
        task_id: 2,
        category: "c".to_owned(),
        status: String::new(),
        location_text: "Ring Road".to_owned(),
        volunteer_name: None,
    }]);
    assert!(html.contains("<td>#2</td><td>c</td><td>Pending</td>"));
}
