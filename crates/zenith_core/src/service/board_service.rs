//! Board use-case service owning the five collections.
//!
//! # Responsibility
//! - Hold the canonical in-memory copy of each collection for the process
//!   lifetime and expose its mutation operations.
//!
//! # Invariants
//! - Every mutation is followed by a save of the affected collection, so
//!   persisted and in-memory state never diverge across a restart.
//! - Mutations are applied in call order; a save reflects that mutation
//!   and all prior ones.

use crate::model::goal::Goal;
use crate::model::habit::Habit;
use crate::model::ids::IdGenerator;
use crate::model::journal::{JournalEntry, Mood};
use crate::model::task::{Task, TaskKind};
use crate::model::vision::VisionItem;
use crate::model::EntityId;
use crate::ops::goal_ops::{self, NewGoal};
use crate::ops::vision_ops::{self, NewVisionItem};
use crate::ops::{habit_ops, journal_ops, task_ops};
use crate::store::{
    CollectionStore, StoreResult, COLLECTION_GOALS, COLLECTION_HABITS, COLLECTION_JOURNAL,
    COLLECTION_TASKS, COLLECTION_VISION,
};
use chrono::{DateTime, NaiveDate, Utc};
use log::info;

/// Use-case service wrapping the five board collections.
pub struct BoardService<S: CollectionStore> {
    store: S,
    ids: Box<dyn IdGenerator>,
    tasks: Vec<Task>,
    habits: Vec<Habit>,
    goals: Vec<Goal>,
    journal: Vec<JournalEntry>,
    vision: Vec<VisionItem>,
}

impl<S: CollectionStore> BoardService<S> {
    /// Loads all five collections from the store.
    ///
    /// A missing or corrupt collection loads as empty; only medium
    /// transport failures surface here.
    pub fn open(store: S, ids: Box<dyn IdGenerator>) -> StoreResult<Self> {
        let tasks = store.load(COLLECTION_TASKS)?;
        let habits = store.load(COLLECTION_HABITS)?;
        let goals = store.load(COLLECTION_GOALS)?;
        let journal = store.load(COLLECTION_JOURNAL)?;
        let vision = store.load(COLLECTION_VISION)?;

        info!(
            "event=board_open module=service status=ok tasks={} habits={} goals={} journal={} vision={}",
            tasks.len(),
            habits.len(),
            goals.len(),
            journal.len(),
            vision.len()
        );

        Ok(Self {
            store,
            ids,
            tasks,
            habits,
            goals,
            journal,
            vision,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn vision(&self) -> &[VisionItem] {
        &self.vision
    }

    pub fn add_task(
        &mut self,
        text: &str,
        kind: TaskKind,
        created_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        self.tasks = task_ops::add_task(&self.tasks, self.ids.as_ref(), text, kind, created_at);
        self.store.save(COLLECTION_TASKS, &self.tasks)
    }

    pub fn toggle_task(&mut self, id: &str) -> StoreResult<()> {
        self.tasks = task_ops::toggle_task(&self.tasks, id);
        self.store.save(COLLECTION_TASKS, &self.tasks)
    }

    pub fn remove_task(&mut self, id: &str) -> StoreResult<()> {
        self.tasks = task_ops::remove_task(&self.tasks, id);
        self.store.save(COLLECTION_TASKS, &self.tasks)
    }

    pub fn clear_completed_tasks(&mut self, kind: TaskKind) -> StoreResult<()> {
        self.tasks = task_ops::clear_completed(&self.tasks, kind);
        self.store.save(COLLECTION_TASKS, &self.tasks)
    }

    pub fn add_habit(&mut self, name: &str) -> StoreResult<()> {
        self.habits = habit_ops::add_habit(&self.habits, self.ids.as_ref(), name);
        self.store.save(COLLECTION_HABITS, &self.habits)
    }

    pub fn toggle_habit_day(&mut self, id: &str, day: NaiveDate) -> StoreResult<()> {
        self.habits = habit_ops::toggle_habit_day(&self.habits, id, day);
        self.store.save(COLLECTION_HABITS, &self.habits)
    }

    pub fn remove_habit(&mut self, id: &str) -> StoreResult<()> {
        self.habits = habit_ops::remove_habit(&self.habits, id);
        self.store.save(COLLECTION_HABITS, &self.habits)
    }

    pub fn add_goal(&mut self, input: &NewGoal) -> StoreResult<()> {
        self.goals = goal_ops::add_goal(&self.goals, self.ids.as_ref(), input);
        self.store.save(COLLECTION_GOALS, &self.goals)
    }

    pub fn set_goal_progress(&mut self, id: &str, progress: i64) -> StoreResult<()> {
        self.goals = goal_ops::set_goal_progress(&self.goals, id, progress);
        self.store.save(COLLECTION_GOALS, &self.goals)
    }

    pub fn append_goal_breakdown(&mut self, id: &str, steps: &str) -> StoreResult<()> {
        self.goals = goal_ops::append_breakdown(&self.goals, id, steps);
        self.store.save(COLLECTION_GOALS, &self.goals)
    }

    pub fn remove_goal(&mut self, id: &str) -> StoreResult<()> {
        self.goals = goal_ops::remove_goal(&self.goals, id);
        self.store.save(COLLECTION_GOALS, &self.goals)
    }

    /// Appends a blank journal entry and returns its id so the caller can
    /// focus it for editing.
    pub fn add_journal_entry(&mut self, created_at: DateTime<Utc>) -> StoreResult<EntityId> {
        self.journal = journal_ops::add_entry(&self.journal, self.ids.as_ref(), created_at);
        self.store.save(COLLECTION_JOURNAL, &self.journal)?;

        let id = self
            .journal
            .last()
            .map(|entry| entry.id.clone())
            .unwrap_or_default();
        Ok(id)
    }

    pub fn update_journal_entry(
        &mut self,
        id: &str,
        title: &str,
        content: &str,
        mood: Mood,
    ) -> StoreResult<()> {
        self.journal = journal_ops::update_entry(&self.journal, id, title, content, mood);
        self.store.save(COLLECTION_JOURNAL, &self.journal)
    }

    pub fn remove_journal_entry(&mut self, id: &str) -> StoreResult<()> {
        self.journal = journal_ops::remove_entry(&self.journal, id);
        self.store.save(COLLECTION_JOURNAL, &self.journal)
    }

    pub fn add_vision_item(&mut self, input: &NewVisionItem) -> StoreResult<()> {
        self.vision = vision_ops::add_item(&self.vision, self.ids.as_ref(), input);
        self.store.save(COLLECTION_VISION, &self.vision)
    }

    pub fn remove_vision_item(&mut self, id: &str) -> StoreResult<()> {
        self.vision = vision_ops::remove_item(&self.vision, id);
        self.store.save(COLLECTION_VISION, &self.vision)
    }
}
