use chrono::NaiveDate;
use rusqlite::params;
use zenith_core::db::{open_db, open_db_in_memory};
use zenith_core::{
    collection_names, CollectionStore, Goal, GoalCategory, Habit, JournalEntry, Mood,
    SqliteCollectionStore, Task, TaskKind, VisionCategory, VisionItem,
};

fn sample_tasks() -> Vec<Task> {
    let created = NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
        .and_utc();
    let mut done = Task::new("t-2".to_string(), "water plants", TaskKind::Daily, created);
    done.completed = true;
    vec![
        Task::new("t-1".to_string(), "write report", TaskKind::Weekly, created),
        done,
    ]
}

#[test]
fn tasks_roundtrip_identity() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);

    let tasks = sample_tasks();
    store.save("zenith_tasks", &tasks).unwrap();

    let loaded: Vec<Task> = store.load("zenith_tasks").unwrap();
    assert_eq!(loaded, tasks);
}

#[test]
fn habits_roundtrip_preserves_history_markers() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);

    let mut habit = Habit::new("h-1".to_string(), "stretch", "bg-indigo-500");
    habit.history.insert(NaiveDate::from_ymd_opt(2026, 3, 13).unwrap());
    habit.history.insert(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    let habits = vec![habit];

    store.save("zenith_habits", &habits).unwrap();
    let loaded: Vec<Habit> = store.load("zenith_habits").unwrap();
    assert_eq!(loaded, habits);
}

#[test]
fn goals_journal_and_vision_roundtrip_identity() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);

    let goals = vec![Goal::new(
        "g-1".to_string(),
        "Learn Rust",
        "one chapter a week",
        NaiveDate::from_ymd_opt(2026, 12, 31),
        GoalCategory::Career,
    )];
    let created = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(21, 5, 0)
        .unwrap()
        .and_utc();
    let mut entry = JournalEntry::new("j-1".to_string(), created);
    entry.title = "First page".to_string();
    entry.content = "slow morning".to_string();
    entry.mood = Mood::Happy;
    let journal = vec![entry];
    let vision = vec![VisionItem::new(
        "v-1".to_string(),
        "https://example.com/coast.jpg",
        "sea view office",
        VisionCategory::Travel,
    )];

    store.save("zenith_goals", &goals).unwrap();
    store.save("zenith_journal", &journal).unwrap();
    store.save("zenith_vision", &vision).unwrap();

    assert_eq!(store.load::<Goal>("zenith_goals").unwrap(), goals);
    assert_eq!(store.load::<JournalEntry>("zenith_journal").unwrap(), journal);
    assert_eq!(store.load::<VisionItem>("zenith_vision").unwrap(), vision);
}

#[test]
fn load_on_unset_key_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);

    for name in collection_names() {
        let loaded: Vec<Task> = store.load(name).unwrap();
        assert!(loaded.is_empty(), "collection `{name}` should start empty");
    }
}

#[test]
fn load_on_malformed_body_falls_back_to_empty() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO collections (name, body) VALUES (?1, ?2);",
        params!["zenith_tasks", "{not json"],
    )
    .unwrap();

    let store = SqliteCollectionStore::new(&conn);
    let loaded: Vec<Task> = store.load("zenith_tasks").unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn save_overwrites_the_whole_collection() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);

    store.save("zenith_tasks", &sample_tasks()).unwrap();
    store.save("zenith_tasks", &sample_tasks()[..1]).unwrap();

    let loaded: Vec<Task> = store.load("zenith_tasks").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "t-1");
}

#[test]
fn collections_survive_reopening_a_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("board.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let store = SqliteCollectionStore::new(&conn);
        store.save("zenith_tasks", &sample_tasks()).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let store = SqliteCollectionStore::new(&conn);
    let loaded: Vec<Task> = store.load("zenith_tasks").unwrap();
    assert_eq!(loaded, sample_tasks());
}
