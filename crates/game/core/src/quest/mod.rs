//! Quests and the ledger that tracks them.
//!
//! A quest counts events of one kind (`slay` an enemy template, `gather` an
//! item) towards a required total. Progress never decreases and never exceeds
//! the requirement; completion is flagged exactly once.

mod ledger;

pub use ledger::QuestLedger;

use crate::error::{ErrorKind, GameError};

/// Kind of event a quest counts.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuestGoal {
    /// Defeat enemies of a template.
    Slay,
    /// Harvest resource nodes yielding an item.
    Gather,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("Quest already active.")]
    AlreadyActive { quest_id: String },

    #[error("Unknown quest '{quest_id}'.")]
    UnknownQuest { quest_id: String },

    #[error("Unknown quest goal '{0}'.")]
    UnknownGoal(String),

    #[error("Quest '{quest_id}' requires at least one event.")]
    NothingRequired { quest_id: String },
}

impl GameError for QuestError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyActive { .. } | Self::NothingRequired { .. } => {
                ErrorKind::PreconditionNotMet
            }
            Self::UnknownQuest { .. } | Self::UnknownGoal(_) => ErrorKind::UnknownIdentifier,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyActive { .. } => "QUEST_ALREADY_ACTIVE",
            Self::UnknownQuest { .. } => "QUEST_UNKNOWN",
            Self::UnknownGoal(_) => "QUEST_UNKNOWN_GOAL",
            Self::NothingRequired { .. } => "QUEST_NOTHING_REQUIRED",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quest {
    id: String,
    name: String,
    description: String,
    goal: QuestGoal,
    target: String,
    required: u32,
    progress: u32,
    completed: bool,
    reward_experience: i32,
    reward_items: Vec<String>,
}

impl Quest {
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> QuestBuilder {
        QuestBuilder::new(id, name)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn goal(&self) -> QuestGoal {
        self.goal
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn reward_experience(&self) -> i32 {
        self.reward_experience
    }

    pub fn reward_items(&self) -> &[String] {
        &self.reward_items
    }

    /// Counts one event. Returns true only on the call that completes the quest.
    pub fn record_progress(&mut self, goal: QuestGoal, target: &str) -> bool {
        if self.completed || goal != self.goal || target != self.target {
            return false;
        }
        self.progress = (self.progress + 1).min(self.required);
        if self.progress >= self.required {
            self.completed = true;
        }
        self.completed
    }
}

/// Builder for [`Quest`]; every quest starts with zero progress.
#[derive(Clone, Debug)]
pub struct QuestBuilder {
    id: String,
    name: String,
    description: String,
    goal: QuestGoal,
    target: String,
    required: u32,
    reward_experience: i32,
    reward_items: Vec<String>,
}

impl QuestBuilder {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            goal: QuestGoal::Slay,
            target: String::new(),
            required: 1,
            reward_experience: 0,
            reward_items: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn goal(mut self, goal: QuestGoal, target: impl Into<String>, required: u32) -> Self {
        self.goal = goal;
        self.target = target.into();
        self.required = required;
        self
    }

    pub fn reward_experience(mut self, experience: i32) -> Self {
        self.reward_experience = experience;
        self
    }

    pub fn reward_item(mut self, item_id: impl Into<String>) -> Self {
        self.reward_items.push(item_id.into());
        self
    }

    pub fn reward_items(mut self, item_ids: impl IntoIterator<Item = String>) -> Self {
        self.reward_items.extend(item_ids);
        self
    }

    pub fn build(self) -> Result<Quest, QuestError> {
        if self.required == 0 {
            return Err(QuestError::NothingRequired { quest_id: self.id });
        }
        Ok(Quest {
            id: self.id,
            name: self.name,
            description: self.description,
            goal: self.goal,
            target: self.target,
            required: self.required,
            progress: 0,
            completed: false,
            reward_experience: self.reward_experience,
            reward_items: self.reward_items,
        })
    }

    /// Builds a quest with saved progress, clamped to the requirement.
    pub(crate) fn build_with_progress(
        self,
        progress: u32,
        completed: bool,
    ) -> Result<Quest, QuestError> {
        let mut quest = self.build()?;
        quest.progress = progress.min(quest.required);
        quest.completed = completed || quest.progress >= quest.required;
        Ok(quest)
    }
}
