//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `study_planner_core` linkage without a presentation layer.
//! - Run one add/toggle/project cycle and print the resulting views.
//!
//! Usage: `study_planner_cli [config.json]`. Logs go to
//! `$STUDY_PLANNER_LOG_DIR`, or `study_planner_logs` under the temp dir.

use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use study_planner_core::{
    core_version, init_logging, CalendarSlot, MonthProjection, NewSubjectRequest, PlannerConfig,
    StudyPlanner,
};

const LOG_DIR_ENV: &str = "STUDY_PLANNER_LOG_DIR";

fn main() {
    println!("study_planner_core version={}", core_version());

    let config = match load_config(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("load_config failed: {err}");
            std::process::exit(1);
        }
    };
    let log_dir = resolve_log_dir();
    if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
        eprintln!("init_logging failed: {err}");
        std::process::exit(1);
    }
    println!("logs level={} dir={}", config.log_level, log_dir.display());

    let today = Local::now().date_naive();
    let mut planner: StudyPlanner = StudyPlanner::new(config);
    let request = NewSubjectRequest::new(
        "Sample subject",
        "Smoke-test the planner core",
        planner.config().default_daily_study_minutes.into(),
        today.format("%Y-%m-%d").to_string(),
    );
    if let Err(err) = planner.add_subject(&request) {
        eprintln!("add_subject failed: {err}");
        std::process::exit(1);
    }

    for task in planner.daily_tasks() {
        println!(
            "task subject={} minutes={} completed={}",
            task.subject_name, task.duration, task.completed
        );
    }
    if let Some(task_id) = planner.daily_tasks().first().map(|task| task.id) {
        planner.toggle_task(task_id);
    }

    let progress = planner.progress();
    println!(
        "progress {} of {} tasks completed today ({}%), subjects={}",
        progress.tasks.completed_tasks,
        progress.tasks.total_tasks,
        progress.tasks.rounded_percent(),
        progress.total_subjects
    );

    print_calendar(&planner.calendar(today), today);
}

fn load_config(path: Option<String>) -> Result<PlannerConfig, String> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|err| format!("cannot read `{path}`: {err}"))?;
    PlannerConfig::from_json_str(&raw).map_err(|err| err.to_string())
}

fn resolve_log_dir() -> PathBuf {
    let dir = std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("study_planner_logs"));
    if dir.is_absolute() {
        return dir;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&dir))
        .unwrap_or(dir)
}

fn print_calendar(calendar: &MonthProjection, today: NaiveDate) {
    println!("{}", calendar.title);
    println!("{}", calendar.weekday_labels.join(" "));
    for week in calendar.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|slot| match slot {
                CalendarSlot::Empty => "   ".to_string(),
                CalendarSlot::Day(day) => {
                    let marker = if day.has_exam { '*' } else { ' ' };
                    format!("{:>2}{marker}", day.date.format("%-d").to_string())
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }
    if calendar.month_events.is_empty() {
        println!("No exams scheduled this month.");
    }
    for event in &calendar.month_events {
        let suffix = if event.date == today { " (today)" } else { "" };
        println!("exam {} {}{suffix}", event.short_label(), event.subject_name);
    }
}
