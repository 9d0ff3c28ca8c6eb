//! Prompt kinds, their templates and fallback strings.

/// Selects which prompt template, context shape and fallback string apply
/// to a text-generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Free-form journal prompt; takes no context.
    JournalPrompt,
    /// Actionable breakdown of one goal; context is the goal title.
    GoalBreakdown,
    /// Daily affirmation; context is the concatenated vision captions.
    VisionAffirmation,
}

impl PromptKind {
    /// Stable identifier used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JournalPrompt => "journal_prompt",
            Self::GoalBreakdown => "goal_breakdown",
            Self::VisionAffirmation => "vision_affirmation",
        }
    }

    /// Builds the full prompt text sent to the generator.
    pub fn build_prompt(self, context: &str) -> String {
        match self {
            Self::JournalPrompt => {
                "Generate 1 unique, thought-provoking daily journal prompt for \
                 self-reflection. Keep it to one sentence."
                    .to_string()
            }
            Self::GoalBreakdown => format!(
                "Break down this goal into 3-5 actionable steps: \"{context}\". \
                 Provide as a clean list."
            ),
            Self::VisionAffirmation => format!(
                "Based on a vision board focused on: \"{context}\", generate a \
                 powerful daily affirmation."
            ),
        }
    }

    /// Fixed text displayed when generation fails for any reason.
    pub fn fallback_text(self) -> &'static str {
        match self {
            Self::JournalPrompt => "What's one thing you're grateful for today?",
            Self::GoalBreakdown => "Error getting goal suggestions.",
            Self::VisionAffirmation => "I am capable of achieving all my dreams.",
        }
    }
}
