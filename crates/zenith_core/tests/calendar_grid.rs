use chrono::{Datelike, NaiveDate, Weekday};
use zenith_core::{month_grid, Task, TaskKind};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// April 2026 is a 30-day month whose 1st falls on a Wednesday.
#[test]
fn thirty_day_month_starting_wednesday_spans_five_weeks() {
    let reference = day(2026, 4, 15);
    assert_eq!(day(2026, 4, 1).weekday(), Weekday::Wed);

    let grid = month_grid(&[], reference, day(2026, 4, 15));

    assert_eq!(grid.len(), 35);
    assert_eq!(grid[0].date, day(2026, 3, 29));
    assert_eq!(grid[0].date.weekday(), Weekday::Sun);
    assert_eq!(grid.last().unwrap().date, day(2026, 5, 2));
    assert_eq!(grid.last().unwrap().date.weekday(), Weekday::Sat);
}

#[test]
fn leading_and_trailing_days_are_flagged_outside_the_month() {
    let grid = month_grid(&[], day(2026, 4, 15), day(2026, 4, 15));

    let in_month: Vec<_> = grid.iter().filter(|cell| cell.in_month).collect();
    assert_eq!(in_month.len(), 30);
    assert_eq!(in_month[0].date, day(2026, 4, 1));
    assert_eq!(in_month[29].date, day(2026, 4, 30));

    assert!(!grid[0].in_month);
    assert!(!grid.last().unwrap().in_month);
}

// May 2026 starts on a Friday and ends on a Sunday, forcing six rows.
#[test]
fn month_needing_six_weeks_spans_forty_two_days() {
    let grid = month_grid(&[], day(2026, 5, 10), day(2026, 5, 10));
    assert_eq!(grid.len(), 42);
}

#[test]
fn exactly_one_cell_is_flagged_today() {
    let today = day(2026, 4, 15);
    let grid = month_grid(&[], today, today);

    let todays: Vec<_> = grid.iter().filter(|cell| cell.is_today).collect();
    assert_eq!(todays.len(), 1);
    assert_eq!(todays[0].date, today);
}

#[test]
fn today_outside_the_reference_month_flags_nothing() {
    let grid = month_grid(&[], day(2026, 4, 15), day(2026, 7, 1));
    assert!(grid.iter().all(|cell| !cell.is_today));
}

#[test]
fn tasks_land_on_their_creation_day_cell() {
    let created = day(2026, 4, 9).and_hms_opt(14, 0, 0).unwrap().and_utc();
    let tasks = vec![
        Task::new("a".to_string(), "dentist", TaskKind::Monthly, created),
        Task::new("b".to_string(), "groceries", TaskKind::Daily, created),
    ];

    let grid = month_grid(&tasks, day(2026, 4, 15), day(2026, 4, 15));
    let cell = grid.iter().find(|cell| cell.date == day(2026, 4, 9)).unwrap();

    assert_eq!(cell.tasks.len(), 2);
    assert_eq!(cell.tasks[0].id, "a");
    assert_eq!(cell.tasks[1].id, "b");
    assert!(grid
        .iter()
        .filter(|other| other.date != day(2026, 4, 9))
        .all(|other| other.tasks.is_empty()));
}
