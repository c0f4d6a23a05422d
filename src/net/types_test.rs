use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_deserializes_known_values() {
    let role: Role = serde_json::from_str("\"moderator\"").unwrap();
    assert_eq!(role, Role::Moderator);
    let role: Role = serde_json::from_str("\"Admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}

#[test]
fn role_unknown_value_falls_back_to_citizen() {
    let role: Role = serde_json::from_str("\"superuser\"").unwrap();
    assert_eq!(role, Role::Citizen);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Volunteer).unwrap(), "\"volunteer\"");
}

#[test]
fn role_parse_is_strict() {
    assert_eq!(Role::parse(" Volunteer "), Some(Role::Volunteer));
    assert_eq!(Role::parse("root"), None);
}

// =============================================================
// Payload decoding
// =============================================================

#[test]
fn user_decodes_me_payload() {
    let user: User =
        serde_json::from_str(r#"{"id": 7, "name": "Asha", "email": "asha@example.com", "role": "volunteer"}"#).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Volunteer);
}

#[test]
fn report_tolerates_null_optional_columns() {
    let report: Report = serde_json::from_str(
        r#"{
            "id": 3,
            "category": "litter",
            "description": "Bags by the bus stop",
            "location_text": "MG Road",
            "latitude": null,
            "longitude": null,
            "severity": "high",
            "status": "pending",
            "photo_path": "uploads/a.jpg",
            "moderator_notes": null,
            "is_anonymous": 0,
            "created_at": "2024-01-01 10:00:00",
            "task_status": "pending",
            "task_id": 9
        }"#,
    )
    .unwrap();
    assert_eq!(report.id, 3);
    assert_eq!(report.moderator_notes, None);
    assert_eq!(report.task_id, Some(9));
    assert_eq!(report.citizen_name, None);
}

#[test]
fn task_display_status_prefers_task_status() {
    let task = Task {
        task_id: 1,
        status: Some("valid".to_owned()),
        task_status: Some("in_progress".to_owned()),
        ..Task::default()
    };
    assert_eq!(task.display_status(), Some("in_progress"));

    let task = Task { task_id: 2, status: Some("valid".to_owned()), ..Task::default() };
    assert_eq!(task.display_status(), Some("valid"));
}

#[test]
fn rewards_snapshot_decodes_without_next_tier() {
    let snapshot: RewardsSnapshot = serde_json::from_str(
        r#"{"valid_reports": 41, "rewards": [{"tier": 1, "brand": "Swiggy", "code": "SWIGGY-50-OFF",
            "description": "Flat 50 off", "created_at": "2024-01-01"}], "next_tier": null}"#,
    )
    .unwrap();
    assert_eq!(snapshot.rewards.len(), 1);
    assert_eq!(snapshot.next_tier, None);
}

#[test]
fn stats_decode_hotspots() {
    let stats: Stats = serde_json::from_str(
        r#"{"total_reports": 10, "valid_reports": 8, "completed_tasks": 4, "volunteers_count": 3,
            "hotspots": [{"location": "Market", "count": 5}]}"#,
    )
    .unwrap();
    assert_eq!(stats.hotspots[0], Hotspot { location: "Market".to_owned(), count: 5 });
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_request_serializes_role_lowercase() {
    let body = RegisterRequest {
        name: "Ravi".to_owned(),
        email: "ravi@example.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::Volunteer,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"name": "Ravi", "email": "ravi@example.com", "password": "pw", "role": "volunteer"})
    );
}

#[test]
fn task_filters_query_pairs_keep_empty_values() {
    let filters = TaskFilters { status: "pending".to_owned(), ..TaskFilters::default() };
    assert_eq!(filters.query_pairs(), [("status", "pending"), ("category", ""), ("q", "")]);
}

#[test]
fn report_submission_text_fields_encode_anonymity_flag() {
    let submission = ReportSubmission {
        category: "litter".to_owned(),
        description: "Plastic".to_owned(),
        location_text: "Lake".to_owned(),
        severity: "low".to_owned(),
        latitude: String::new(),
        longitude: String::new(),
        is_anonymous: true,
        photo: Attachment { name: "a.png".to_owned() },
    };
    let fields = submission.text_fields();
    assert_eq!(fields.len(), 7);
    assert_eq!(fields[6], ("is_anonymous", "true".to_owned()));
}
