//! Core domain logic for the Zenith productivity board.
//! This crate is the single source of truth for collection state,
//! mutation semantics and derived-view computations.

pub mod db;
pub mod genai;
pub mod logging;
pub mod model;
pub mod ops;
pub mod service;
pub mod store;
pub mod view;

pub use genai::{
    generate_or_fallback, GeminiGenerator, GenError, GenerationGate, GenerationTicket, PromptKind,
    TextGenerator,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{Goal, GoalCategory};
pub use model::habit::{Habit, HABIT_COLOR_PALETTE};
pub use model::ids::{IdGenerator, SequenceGenerator, UuidGenerator};
pub use model::journal::{JournalEntry, Mood};
pub use model::task::{Task, TaskKind};
pub use model::vision::{VisionCategory, VisionItem};
pub use model::EntityId;
pub use ops::goal_ops::NewGoal;
pub use ops::vision_ops::NewVisionItem;
pub use service::board_service::BoardService;
pub use store::{
    collection_names, CollectionStore, SqliteCollectionStore, StoreError, StoreResult,
};
pub use view::calendar::{month_grid, tasks_on_day, MonthGridDay};
pub use view::search::{filter_matching, SearchText};
pub use view::streak::streak_length;
pub use view::tasks::{completion_percent, daily_tasks, tasks_of_kind};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
