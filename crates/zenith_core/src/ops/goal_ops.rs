//! Goal collection operations.

use crate::model::goal::{clamp_progress, Goal, GoalCategory};
use crate::model::ids::IdGenerator;
use chrono::NaiveDate;

/// Marker inserted between the author's description and appended
/// generated steps.
pub const BREAKDOWN_SEPARATOR: &str = "\n\nAI Suggested Steps:\n";

/// Input for creating a goal.
#[derive(Debug, Clone, Default)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub category: GoalCategory,
}

/// Appends a new goal at zero progress.
///
/// Blank titles are rejected and the collection is returned unchanged.
pub fn add_goal(goals: &[Goal], ids: &dyn IdGenerator, input: &NewGoal) -> Vec<Goal> {
    if input.title.trim().is_empty() {
        return goals.to_vec();
    }

    let mut next = goals.to_vec();
    next.push(Goal::new(
        ids.next_id(),
        input.title.clone(),
        input.description.clone(),
        input.deadline,
        input.category,
    ));
    next
}

/// Stores a new progress value for one goal, clamped into `0..=100`.
pub fn set_goal_progress(goals: &[Goal], id: &str, progress: i64) -> Vec<Goal> {
    goals
        .iter()
        .map(|goal| {
            if goal.id == id {
                let mut updated = goal.clone();
                updated.progress = clamp_progress(progress);
                updated
            } else {
                goal.clone()
            }
        })
        .collect()
}

/// Appends generated breakdown steps to one goal's description.
pub fn append_breakdown(goals: &[Goal], id: &str, steps: &str) -> Vec<Goal> {
    goals
        .iter()
        .map(|goal| {
            if goal.id == id {
                let mut updated = goal.clone();
                updated.description = format!("{}{BREAKDOWN_SEPARATOR}{steps}", goal.description);
                updated
            } else {
                goal.clone()
            }
        })
        .collect()
}

/// Removes the goal with the given id, if present.
pub fn remove_goal(goals: &[Goal], id: &str) -> Vec<Goal> {
    goals.iter().filter(|goal| goal.id != id).cloned().collect()
}
