use chrono::NaiveDate;
use study_planner_core::{
    NewSubjectRequest, PlannerConfig, StudyPlanner, Subject, SubjectId, WeekStart,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn calendar_view_uses_configured_week_start() {
    let config = PlannerConfig {
        week_start: WeekStart::Monday,
        ..PlannerConfig::default()
    };
    let mut planner = StudyPlanner::new(config);
    planner
        .add_subject(&NewSubjectRequest::new("Calculus I", "Limits", 45, "2025-08-15"))
        .unwrap();

    let calendar = planner.calendar(ymd(2025, 8, 10));
    assert_eq!(calendar.weekday_labels[0], "Mon");
    assert_eq!(calendar.month_events.len(), 1);
}

#[test]
fn snapshot_serializes_all_views() {
    let mut planner = StudyPlanner::new(PlannerConfig::default());
    planner
        .add_subject(&NewSubjectRequest::new(
            "Calculus I",
            "Master derivatives",
            45,
            "2025-08-15, not-a-date",
        ))
        .unwrap();
    let task_id = planner.daily_tasks()[0].id;
    planner.toggle_task(task_id);

    let snapshot = planner.snapshot(ymd(2025, 8, 1));
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["subjects"][0]["name"], "Calculus I");
    assert_eq!(json["subjects"][0]["daily_study_time"], 45);
    assert_eq!(json["daily_tasks"][0]["id"], task_id.to_string());
    assert_eq!(json["daily_tasks"][0]["completed"], true);
    assert_eq!(json["calendar"]["title"], "August 2025");
    assert_eq!(json["calendar"]["skipped_dates"], 1);
    assert_eq!(json["calendar"]["month_events"][0]["date"], "2025-08-15");
    assert_eq!(json["calendar"]["calendar_days"][0]["kind"], "empty");
    assert_eq!(json["calendar"]["calendar_days"][5]["kind"], "day");
    assert_eq!(json["calendar"]["calendar_days"][5]["date"], "2025-08-01");
    assert_eq!(json["progress"]["total_subjects"], 1);
    assert_eq!(json["progress"]["tasks"]["percent_complete"], 100.0);
}

#[test]
fn subject_wire_shape_round_trips_and_validates() {
    let subject_id = SubjectId::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let value = serde_json::json!({
        "id": subject_id.to_string(),
        "name": "Chemistry",
        "goal": "Balance equations",
        "daily_study_time": 20,
        "exam_dates": ["2025-12-01", "2025-08-15"]
    });

    let subject: Subject = serde_json::from_value(value).unwrap();
    assert_eq!(subject.id, subject_id);
    assert_eq!(subject.exam_dates, vec!["2025-08-15", "2025-12-01"]);

    let blank = serde_json::json!({
        "id": subject_id.to_string(),
        "name": "  ",
        "goal": "x",
        "daily_study_time": 20
    });
    let err = serde_json::from_value::<Subject>(blank).unwrap_err();
    assert!(
        err.to_string().contains("subject name must not be blank"),
        "unexpected error: {err}"
    );
}
