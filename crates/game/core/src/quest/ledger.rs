use std::str::FromStr;

use super::{Quest, QuestError, QuestGoal};
use crate::save::{QuestLedgerRecord, QuestRecord};

/// Active quests in acceptance order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestLedger {
    quests: Vec<Quest>,
}

impl QuestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a quest. A quest id can only be tracked once.
    pub fn add(&mut self, quest: Quest) -> Result<String, QuestError> {
        if self.get(quest.id()).is_some() {
            return Err(QuestError::AlreadyActive {
                quest_id: quest.id().to_string(),
            });
        }
        let message = format!("Quest accepted: {}.", quest.name());
        tracing::debug!("Quest '{}' accepted", quest.id());
        self.quests.push(quest);
        Ok(message)
    }

    /// Feeds one game event to every active quest.
    ///
    /// Returns the quests this event completed; quests that were already
    /// complete are never returned again.
    pub fn record_event(&mut self, goal: QuestGoal, target: &str) -> Vec<Quest> {
        let completed: Vec<Quest> = self
            .quests
            .iter_mut()
            .filter_map(|quest| quest.record_progress(goal, target).then(|| quest.clone()))
            .collect();
        for quest in &completed {
            tracing::info!("Quest '{}' completed", quest.id());
        }
        completed
    }

    /// Removes and returns every completed quest, in acceptance order.
    pub fn remove_completed(&mut self) -> Vec<Quest> {
        let (finished, active): (Vec<_>, Vec<_>) = std::mem::take(&mut self.quests)
            .into_iter()
            .partition(Quest::is_completed);
        self.quests = active;
        finished
    }

    pub fn list_active(&self) -> &[Quest] {
        &self.quests
    }

    pub fn get(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|quest| quest.id() == quest_id)
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    pub fn to_record(&self) -> QuestLedgerRecord {
        QuestLedgerRecord {
            quests: self
                .quests
                .iter()
                .map(|quest| QuestRecord {
                    quest_id: quest.id().to_string(),
                    name: quest.name().to_string(),
                    description: quest.description().to_string(),
                    goal_type: quest.goal().to_string(),
                    target: quest.target().to_string(),
                    required: quest.required(),
                    progress: quest.progress(),
                    completed: quest.is_completed(),
                    reward_experience: quest.reward_experience(),
                    reward_items: quest.reward_items().to_vec(),
                })
                .collect(),
        }
    }

    /// Rebuilds a ledger from a save record.
    ///
    /// Entries with an unknown goal type or a zero requirement are skipped;
    /// their quest ids are returned.
    pub fn from_record(record: &QuestLedgerRecord) -> (Self, Vec<String>) {
        let mut ledger = Self::new();
        let mut skipped = Vec::new();
        for entry in &record.quests {
            match Self::quest_from_record(entry) {
                Ok(quest) if ledger.get(quest.id()).is_none() => ledger.quests.push(quest),
                Ok(quest) => {
                    tracing::warn!("Skipping duplicate saved quest '{}'", quest.id());
                    skipped.push(entry.quest_id.clone());
                }
                Err(err) => {
                    tracing::warn!("Skipping saved quest '{}': {}", entry.quest_id, err);
                    skipped.push(entry.quest_id.clone());
                }
            }
        }
        (ledger, skipped)
    }

    fn quest_from_record(entry: &QuestRecord) -> Result<Quest, QuestError> {
        let goal = QuestGoal::from_str(&entry.goal_type)
            .map_err(|_| QuestError::UnknownGoal(entry.goal_type.clone()))?;
        Quest::builder(entry.quest_id.clone(), entry.name.clone())
            .description(entry.description.clone())
            .goal(goal, entry.target.clone(), entry.required)
            .reward_experience(entry.reward_experience)
            .reward_items(entry.reward_items.iter().cloned())
            .build_with_progress(entry.progress, entry.completed)
    }
}
