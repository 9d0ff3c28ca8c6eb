use chrono::NaiveDate;
use zenith_core::db::open_db_in_memory;
use zenith_core::{
    BoardService, CollectionStore, GoalCategory, Mood, NewGoal, SequenceGenerator,
    SqliteCollectionStore, Task, TaskKind,
};

fn instant(y: i32, m: u32, d: u32) -> chrono::DateTime<chrono::Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(7, 30, 0)
        .unwrap()
        .and_utc()
}

#[test]
fn every_mutation_is_persisted_immediately() {
    let conn = open_db_in_memory().unwrap();

    {
        let store = SqliteCollectionStore::new(&conn);
        let mut board =
            BoardService::open(store, Box::new(SequenceGenerator::new("id"))).unwrap();

        board
            .add_task("morning run", TaskKind::Daily, instant(2026, 4, 6))
            .unwrap();
        board.toggle_task("id-0001").unwrap();
        board.add_habit("stretch").unwrap();
        board
            .toggle_habit_day("id-0002", NaiveDate::from_ymd_opt(2026, 4, 6).unwrap())
            .unwrap();
    }

    // A fresh service over the same medium sees the saved state.
    let store = SqliteCollectionStore::new(&conn);
    let board = BoardService::open(store, Box::new(SequenceGenerator::new("id"))).unwrap();

    assert_eq!(board.tasks().len(), 1);
    assert!(board.tasks()[0].completed);
    assert_eq!(board.habits().len(), 1);
    assert!(board.habits()[0].completed_on(NaiveDate::from_ymd_opt(2026, 4, 6).unwrap()));
}

#[test]
fn saves_reflect_mutations_in_application_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);
    let mut board = BoardService::open(store, Box::new(SequenceGenerator::new("id"))).unwrap();

    board
        .add_task("first", TaskKind::Weekly, instant(2026, 4, 6))
        .unwrap();
    board
        .add_task("second", TaskKind::Weekly, instant(2026, 4, 6))
        .unwrap();
    board.remove_task("id-0001").unwrap();

    let reread = SqliteCollectionStore::new(&conn);
    let persisted: Vec<Task> = reread.load("zenith_tasks").unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].text, "second");
}

#[test]
fn goal_breakdown_flow_updates_and_persists_description() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);
    let mut board = BoardService::open(store, Box::new(SequenceGenerator::new("id"))).unwrap();

    board
        .add_goal(&NewGoal {
            title: "Ship the app".to_string(),
            description: "private beta first".to_string(),
            deadline: None,
            category: GoalCategory::Career,
        })
        .unwrap();
    board.set_goal_progress("id-0001", 250).unwrap();
    board
        .append_goal_breakdown("id-0001", "1. Beta\n2. Fix\n3. Launch")
        .unwrap();

    assert_eq!(board.goals()[0].progress, 100);
    assert!(board.goals()[0].description.contains("AI Suggested Steps:"));
    assert!(board.goals()[0].description.starts_with("private beta first"));
}

#[test]
fn journal_entry_id_is_returned_for_focus() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);
    let mut board = BoardService::open(store, Box::new(SequenceGenerator::new("id"))).unwrap();

    let id = board.add_journal_entry(instant(2026, 4, 6)).unwrap();
    assert_eq!(id, "id-0001");

    board
        .update_journal_entry(&id, "Kickoff", "new notebook", Mood::Happy)
        .unwrap();
    assert_eq!(board.journal()[0].title, "Kickoff");

    board.remove_journal_entry(&id).unwrap();
    assert!(board.journal().is_empty());
}

#[test]
fn rejected_creates_leave_store_and_memory_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);
    let mut board = BoardService::open(store, Box::new(SequenceGenerator::new("id"))).unwrap();

    board
        .add_task("   ", TaskKind::Daily, instant(2026, 4, 6))
        .unwrap();
    board.add_habit("").unwrap();

    assert!(board.tasks().is_empty());
    assert!(board.habits().is_empty());
}
