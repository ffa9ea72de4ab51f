//! Branching NPC dialogue.
//!
//! A tree is an arena of nodes addressed by index. Options point at their
//! successor node by index (or end the conversation) and may carry an action
//! the controller performs when the option is taken.

use crate::error::{ErrorKind, GameError};

/// Side effect attached to a dialogue option.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialogueAction {
    /// Adds the quest with this id to the ledger.
    AcceptQuest(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueOption {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub next: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub action: Option<DialogueAction>,
}

impl DialogueOption {
    pub fn new(text: impl Into<String>, next: Option<usize>) -> Self {
        Self {
            text: text.into(),
            next,
            action: None,
        }
    }

    pub fn with_action(mut self, action: DialogueAction) -> Self {
        self.action = Some(action);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueNode {
    pub text: String,
    pub options: Vec<DialogueOption>,
}

impl DialogueNode {
    pub fn new(text: impl Into<String>, options: Vec<DialogueOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}

/// Result of taking an option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueChoice {
    pub action: Option<DialogueAction>,
    /// False when the option ended the conversation.
    pub has_next: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DialogueError {
    #[error("dialogue has no nodes")]
    EmptyTree,

    #[error("dialogue node {node} has no options")]
    NoOptions { node: usize },

    #[error("option {option} of node {node} points at missing node {next}")]
    DanglingSuccessor {
        node: usize,
        option: usize,
        next: usize,
    },

    #[error("No option {index}.")]
    OptionOutOfRange { index: usize, len: usize },
}

impl GameError for DialogueError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::OptionOutOfRange { .. } => ErrorKind::InvalidSelection,
            Self::EmptyTree | Self::NoOptions { .. } | Self::DanglingSuccessor { .. } => {
                ErrorKind::UnknownIdentifier
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTree => "DIALOGUE_EMPTY_TREE",
            Self::NoOptions { .. } => "DIALOGUE_NO_OPTIONS",
            Self::DanglingSuccessor { .. } => "DIALOGUE_DANGLING_SUCCESSOR",
            Self::OptionOutOfRange { .. } => "DIALOGUE_OPTION_OUT_OF_RANGE",
        }
    }
}

/// Validated dialogue graph with a cursor on the current node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueTree {
    nodes: Vec<DialogueNode>,
    current: usize,
}

impl DialogueTree {
    /// Builds a tree rooted at node 0, rejecting dangling successors.
    pub fn new(nodes: Vec<DialogueNode>) -> Result<Self, DialogueError> {
        if nodes.is_empty() {
            return Err(DialogueError::EmptyTree);
        }
        for (node_index, node) in nodes.iter().enumerate() {
            if node.options.is_empty() {
                return Err(DialogueError::NoOptions { node: node_index });
            }
            for (option_index, option) in node.options.iter().enumerate() {
                if let Some(next) = option.next
                    && next >= nodes.len()
                {
                    return Err(DialogueError::DanglingSuccessor {
                        node: node_index,
                        option: option_index,
                        next,
                    });
                }
            }
        }
        Ok(Self { nodes, current: 0 })
    }

    /// Moves the cursor back to the root.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn current(&self) -> &DialogueNode {
        // `new` guarantees at least one node and every successor is in range.
        &self.nodes[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Takes option `index` of the current node and follows its successor.
    pub fn choose(&mut self, index: usize) -> Result<DialogueChoice, DialogueError> {
        let options = &self.nodes[self.current].options;
        let option = options.get(index).ok_or(DialogueError::OptionOutOfRange {
            index,
            len: options.len(),
        })?;

        let choice = DialogueChoice {
            action: option.action.clone(),
            has_next: option.next.is_some(),
        };
        if let Some(next) = option.next {
            self.current = next;
        }
        Ok(choice)
    }

    pub fn nodes(&self) -> &[DialogueNode] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elder() -> DialogueTree {
        DialogueTree::new(vec![
            DialogueNode::new(
                "Greetings, traveler!",
                vec![
                    DialogueOption::new("I will help.", Some(1))
                        .with_action(DialogueAction::AcceptQuest("slime_cull".into())),
                    DialogueOption::new("I cannot right now.", Some(2)),
                ],
            ),
            DialogueNode::new("Thank you!", vec![DialogueOption::new("I will return soon.", None)]),
            DialogueNode::new("Stay safe on the road.", vec![DialogueOption::new("Farewell.", None)]),
        ])
        .unwrap()
    }

    #[test]
    fn accepting_walks_to_successor_and_reports_action() {
        let mut tree = elder();
        let choice = tree.choose(0).unwrap();
        assert_eq!(
            choice.action,
            Some(DialogueAction::AcceptQuest("slime_cull".into()))
        );
        assert!(choice.has_next);
        assert_eq!(tree.current().text, "Thank you!");

        let choice = tree.choose(0).unwrap();
        assert!(!choice.has_next);
        assert_eq!(choice.action, None);
    }

    #[test]
    fn out_of_range_option_leaves_cursor() {
        let mut tree = elder();
        let err = tree.choose(5).unwrap_err();
        assert_eq!(err, DialogueError::OptionOutOfRange { index: 5, len: 2 });
        assert_eq!(tree.current_index(), 0);
    }

    #[test]
    fn reset_returns_to_root() {
        let mut tree = elder();
        tree.choose(1).unwrap();
        assert_eq!(tree.current_index(), 2);
        tree.reset();
        assert_eq!(tree.current_index(), 0);
    }

    #[test]
    fn dangling_successor_is_rejected() {
        let err = DialogueTree::new(vec![DialogueNode::new(
            "Hello",
            vec![DialogueOption::new("Go on", Some(3))],
        )])
        .unwrap_err();
        assert_eq!(
            err,
            DialogueError::DanglingSuccessor {
                node: 0,
                option: 0,
                next: 3
            }
        );
        assert_eq!(DialogueTree::new(Vec::new()).unwrap_err(), DialogueError::EmptyTree);
    }
}
