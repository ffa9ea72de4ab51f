//! Persisted records.
//!
//! Each subsystem converts itself to and from one of these records; the
//! runtime's persistence gateway only moves them to and from disk. Combat
//! sessions have no record: saving is only possible while exploring.
//!
//! Optional fields fall back to the values a fresh game would use, so
//! payloads written by older builds keep loading.

use std::collections::BTreeMap;

use crate::geometry::Position;

/// Top-level save document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavePayload {
    pub player: PlayerRecord,
    pub world: WorldRecord,
    pub quests: QuestLedgerRecord,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    pub position: Position,

    /// Stat name to value; merged over the defaults on load.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: BTreeMap<String, i32>,

    #[cfg_attr(feature = "serde", serde(default = "default_experience_to_next"))]
    pub experience_to_next: i32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<ItemRecord>,
}

/// Inventory entry. Only the id is used to rebuild the item; the name is kept
/// for readability of the file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldRecord {
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies: Vec<EnemyRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: Vec<ResourceRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyRecord {
    /// Enemy template id.
    pub id: String,
    pub position: Position,
    /// Current health; absent means full health.
    #[cfg_attr(feature = "serde", serde(default))]
    pub health: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceRecord {
    pub position: Position,
    /// Item id yielded when harvested.
    pub item: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestLedgerRecord {
    #[cfg_attr(feature = "serde", serde(default))]
    pub quests: Vec<QuestRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestRecord {
    pub quest_id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// `slay` or `gather`.
    pub goal_type: String,
    pub target: String,
    pub required: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub progress: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reward_experience: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reward_items: Vec<String>,
}

#[cfg(feature = "serde")]
fn default_experience_to_next() -> i32 {
    crate::config::GameConfig::DEFAULT_EXPERIENCE_TO_NEXT
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_fall_back_to_fresh_game_values() {
        let json = r#"{
            "player": { "position": [3, 4] },
            "world": { "enemies": [ { "id": "slime", "position": [1, 2] } ] },
            "quests": {
                "quests": [ {
                    "quest_id": "slime_cull",
                    "name": "Forest Cleaning",
                    "goal_type": "slay",
                    "target": "slime",
                    "required": 3
                } ]
            }
        }"#;

        let payload: SavePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.player.position, Position::new(3, 4));
        assert_eq!(payload.player.experience_to_next, 100);
        assert!(payload.player.inventory.is_empty());
        assert_eq!(payload.world.enemies[0].health, None);
        assert!(payload.world.resources.is_empty());

        let quest = &payload.quests.quests[0];
        assert_eq!(quest.progress, 0);
        assert!(!quest.completed);
        assert!(quest.reward_items.is_empty());
    }

    #[test]
    fn missing_section_is_rejected() {
        let json = r#"{ "player": { "position": [0, 0] }, "world": {} }"#;
        assert!(serde_json::from_str::<SavePayload>(json).is_err());
    }

    #[test]
    fn position_is_written_as_pair() {
        let record = ResourceRecord {
            position: Position::new(5, 6),
            item: "herb".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["position"], serde_json::json!([5, 6]));
    }
}
