use crate::dialogue::DialogueTree;
use crate::geometry::{Position, Rect};

/// Non-player character the player can talk to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Npc {
    name: String,
    position: Position,
    dialogue: DialogueTree,
    quest_id: Option<String>,
    has_given_quest: bool,
}

impl Npc {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        dialogue: DialogueTree,
        quest_id: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            dialogue,
            quest_id,
            has_given_quest: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rect(&self) -> Rect {
        Rect::tile(self.position)
    }

    pub fn dialogue(&self) -> &DialogueTree {
        &self.dialogue
    }

    pub fn dialogue_mut(&mut self) -> &mut DialogueTree {
        &mut self.dialogue
    }

    pub fn quest_id(&self) -> Option<&str> {
        self.quest_id.as_deref()
    }

    pub fn has_given_quest(&self) -> bool {
        self.has_given_quest
    }

    pub fn mark_quest_given(&mut self) {
        self.has_given_quest = true;
    }

    /// Rewinds the conversation to its first node.
    pub fn start_dialogue(&mut self) {
        self.dialogue.reset();
    }
}
