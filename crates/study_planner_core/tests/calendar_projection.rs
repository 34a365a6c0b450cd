use chrono::NaiveDate;
use study_planner_core::{project_month, CalendarSlot, Subject, WeekStart};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn subject(name: &str, dates: &[&str]) -> Subject {
    Subject::try_new(
        name,
        "goal",
        30,
        dates.iter().map(|date| date.to_string()).collect(),
    )
    .unwrap()
}

#[test]
fn single_exam_in_reference_month_is_listed() {
    let subjects = vec![subject("Calculus I", &["2025-08-15"])];
    let projection = project_month(&subjects, ymd(2025, 8, 3), WeekStart::Sunday);

    assert_eq!(projection.month_events.len(), 1);
    assert_eq!(projection.month_events[0].date, ymd(2025, 8, 15));
    assert_eq!(projection.month_events[0].subject_name, "Calculus I");
    assert_eq!(projection.title, "August 2025");
    assert_eq!(projection.skipped_dates, 0);
}

#[test]
fn malformed_date_is_skipped_without_aborting() {
    let subjects = vec![subject("Physics", &["not-a-date", "2025-08-20"])];
    let projection = project_month(&subjects, ymd(2025, 8, 1), WeekStart::Sunday);

    assert_eq!(projection.month_events.len(), 1);
    assert_eq!(projection.month_events[0].date, ymd(2025, 8, 20));
    assert_eq!(projection.skipped_dates, 1);
}

#[test]
fn timestamped_basic_and_month_only_dates_land_on_their_day() {
    let subjects = vec![subject(
        "Chemistry",
        &["2025-08-20 09:00", "20250821", "2025-08-22T09:00Z", "2025-08"],
    )];
    let projection = project_month(&subjects, ymd(2025, 8, 1), WeekStart::Sunday);

    let dates: Vec<NaiveDate> = projection.month_events.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![ymd(2025, 8, 1), ymd(2025, 8, 20), ymd(2025, 8, 21), ymd(2025, 8, 22)]
    );
    assert_eq!(projection.skipped_dates, 0);
}

#[test]
fn grid_pads_to_first_weekday_then_lists_every_day() {
    // 2025-08-01 is a Friday.
    let projection = project_month(&[], ymd(2025, 8, 20), WeekStart::Sunday);
    let leading = projection
        .calendar_days
        .iter()
        .take_while(|slot| matches!(slot, CalendarSlot::Empty))
        .count();
    assert_eq!(leading, 5);
    assert_eq!(projection.calendar_days.len(), 5 + 31);

    let days: Vec<NaiveDate> = projection
        .calendar_days
        .iter()
        .filter_map(|slot| slot.day().map(|day| day.date))
        .collect();
    assert_eq!(days.first(), Some(&ymd(2025, 8, 1)));
    assert_eq!(days.last(), Some(&ymd(2025, 8, 31)));
    assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(projection.weekday_labels[0], "Sun");
    assert_eq!(projection.weeks().count(), 6);
}

#[test]
fn monday_week_start_shifts_padding() {
    let monday = project_month(&[], ymd(2025, 8, 1), WeekStart::Monday);
    let leading = monday
        .calendar_days
        .iter()
        .take_while(|slot| matches!(slot, CalendarSlot::Empty))
        .count();
    assert_eq!(leading, 4);

    // 2026-02-01 is a Sunday.
    let sunday = project_month(&[], ymd(2026, 2, 10), WeekStart::Sunday);
    assert!(matches!(sunday.calendar_days[0], CalendarSlot::Day(_)));
    assert_eq!(sunday.calendar_days.len(), 28);
}

#[test]
fn leap_february_has_twenty_nine_days() {
    let projection = project_month(&[], ymd(2024, 2, 29), WeekStart::Sunday);
    let day_count = projection
        .calendar_days
        .iter()
        .filter(|slot| slot.day().is_some())
        .count();
    assert_eq!(day_count, 29);
}

#[test]
fn events_are_scoped_to_month_and_year_and_sorted_stably() {
    let subjects = vec![
        subject("Biology", &["2025-08-20", "2024-08-10", "2025-09-01"]),
        subject("Chemistry", &["2025-08-05", "2025-08-20"]),
        subject("Drama", &["2025-08-20T09:30"]),
    ];
    let projection = project_month(&subjects, ymd(2025, 8, 1), WeekStart::Sunday);

    let listed: Vec<(NaiveDate, &str)> = projection
        .month_events
        .iter()
        .map(|event| (event.date, event.subject_name.as_str()))
        .collect();
    assert_eq!(
        listed,
        vec![
            (ymd(2025, 8, 5), "Chemistry"),
            (ymd(2025, 8, 20), "Biology"),
            (ymd(2025, 8, 20), "Chemistry"),
            (ymd(2025, 8, 20), "Drama"),
        ]
    );
}

#[test]
fn exam_days_and_reference_day_are_flagged() {
    let subjects = vec![subject("History", &["2025-08-15", "2025-09-15"])];
    let projection = project_month(&subjects, ymd(2025, 8, 3), WeekStart::Sunday);

    let flagged: Vec<NaiveDate> = projection
        .calendar_days
        .iter()
        .filter_map(CalendarSlot::day)
        .filter(|day| day.has_exam)
        .map(|day| day.date)
        .collect();
    assert_eq!(flagged, vec![ymd(2025, 8, 15)]);
    assert!(projection.has_exam_on(ymd(2025, 8, 15)));
    assert!(!projection.has_exam_on(ymd(2025, 9, 15)));

    let reference: Vec<NaiveDate> = projection
        .calendar_days
        .iter()
        .filter_map(CalendarSlot::day)
        .filter(|day| day.is_reference_day)
        .map(|day| day.date)
        .collect();
    assert_eq!(reference, vec![ymd(2025, 8, 3)]);
}

#[test]
fn month_without_exams_has_empty_event_list() {
    let subjects = vec![subject("Geography", &["2025-10-01"])];
    let projection = project_month(&subjects, ymd(2025, 8, 1), WeekStart::Sunday);
    assert!(projection.month_events.is_empty());
    assert!(projection
        .calendar_days
        .iter()
        .filter_map(CalendarSlot::day)
        .all(|day| !day.has_exam));
}
