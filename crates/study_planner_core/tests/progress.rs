use study_planner_core::{aggregate, NewSubjectRequest, PlannerConfig, StudyPlanner};

fn planner_with(count: usize) -> StudyPlanner {
    let mut planner = StudyPlanner::new(PlannerConfig::default());
    for index in 0..count {
        planner
            .add_subject(&NewSubjectRequest::new(
                format!("Subject {index}"),
                "goal",
                30,
                "",
            ))
            .unwrap();
    }
    planner
}

#[test]
fn aggregate_of_nothing_is_zero() {
    let progress = aggregate(&[]);
    assert_eq!(progress.total_tasks, 0);
    assert_eq!(progress.completed_tasks, 0);
    assert_eq!(progress.percent_complete, 0.0);
}

#[test]
fn one_of_three_is_a_third_without_rounding() {
    let mut planner = planner_with(3);
    let first = planner.daily_tasks()[0].id;
    planner.toggle_task(first);

    let overview = planner.progress();
    assert_eq!(overview.total_subjects, 3);
    assert_eq!(overview.tasks.total_tasks, 3);
    assert_eq!(overview.tasks.completed_tasks, 1);
    assert_eq!(overview.tasks.percent_complete, 1.0 / 3.0 * 100.0);
    assert!((overview.tasks.percent_complete - 33.333).abs() < 0.001);
    assert_eq!(overview.tasks.rounded_percent(), 33);
}

#[test]
fn rounded_percent_rounds_halves_up() {
    let mut planner = planner_with(8);
    let ids: Vec<_> = planner.daily_tasks().iter().map(|task| task.id).collect();
    for id in &ids[..5] {
        planner.toggle_task(*id);
    }
    let progress = planner.progress().tasks;
    assert_eq!(progress.percent_complete, 62.5);
    assert_eq!(progress.rounded_percent(), 63);
}

#[test]
fn all_completed_is_one_hundred_percent() {
    let mut planner = planner_with(2);
    let ids: Vec<_> = planner.daily_tasks().iter().map(|task| task.id).collect();
    for id in ids {
        planner.toggle_task(id);
    }
    assert_eq!(planner.progress().tasks.percent_complete, 100.0);
}

#[test]
fn empty_planner_reports_zero_subjects_and_tasks() {
    let planner = planner_with(0);
    let overview = planner.progress();
    assert_eq!(overview.total_subjects, 0);
    assert_eq!(overview.tasks.percent_complete, 0.0);
}
