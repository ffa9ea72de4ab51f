//! [`frontier_core::QuestOracle`] handing out fresh copies of quest definitions.
use std::collections::HashMap;

use frontier_core::{Quest, QuestOracle};

#[derive(Default)]
pub struct QuestOracleImpl {
    quests: HashMap<String, Quest>,
}

impl QuestOracleImpl {
    pub fn new(quests: impl IntoIterator<Item = Quest>) -> Self {
        Self {
            quests: quests
                .into_iter()
                .map(|quest| (quest.id().to_string(), quest))
                .collect(),
        }
    }
}

impl QuestOracle for QuestOracleImpl {
    fn quest(&self, quest_id: &str) -> Option<Quest> {
        self.quests.get(quest_id).cloned()
    }
}
