//! Skills: a closed set of effect variants with mana cost and cooldown.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorKind, GameError};
use crate::stats::StatKind;

/// Effect applied when a skill fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    /// Magic damage against the target: `magic * multiplier - resistance`.
    Fireball { magic_multiplier: i32 },

    /// Heals the caster for `base + magic / divisor`.
    HealingLight { base: i32, magic_divisor: i32 },

    /// Temporary stat bonus for the caster.
    ArcaneShield {
        stat: StatKind,
        amount: i32,
        duration: u32,
    },
}

/// Errors raised when selecting or firing a skill.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("No skill in slot {index}.")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Not enough mana for {name}.")]
    InsufficientMana {
        name: &'static str,
        required: i32,
        available: i32,
    },

    #[error("{name} is on cooldown for {remaining} more turn(s).")]
    OnCooldown { name: &'static str, remaining: u32 },
}

impl GameError for SkillError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } => ErrorKind::InvalidSelection,
            Self::InsufficientMana { .. } | Self::OnCooldown { .. } => {
                ErrorKind::PreconditionNotMet
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "SKILL_INDEX_OUT_OF_RANGE",
            Self::InsufficientMana { .. } => "SKILL_INSUFFICIENT_MANA",
            Self::OnCooldown { .. } => "SKILL_ON_COOLDOWN",
        }
    }
}

/// One skill slot with its cooldown state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    name: &'static str,
    kind: SkillKind,
    mana_cost: i32,
    cooldown: u32,
    current_cooldown: u32,
}

impl Skill {
    pub const fn new(name: &'static str, kind: SkillKind, mana_cost: i32, cooldown: u32) -> Self {
        Self {
            name,
            kind,
            mana_cost,
            cooldown,
            current_cooldown: 0,
        }
    }

    pub const fn fireball() -> Self {
        Self::new(
            "Fireball",
            SkillKind::Fireball {
                magic_multiplier: 2,
            },
            15,
            3,
        )
    }

    pub const fn healing_light() -> Self {
        Self::new(
            "Healing Light",
            SkillKind::HealingLight {
                base: 20,
                magic_divisor: 2,
            },
            12,
            4,
        )
    }

    pub const fn arcane_shield() -> Self {
        Self::new(
            "Arcane Shield",
            SkillKind::ArcaneShield {
                stat: StatKind::Defense,
                amount: 5,
                duration: 3,
            },
            10,
            5,
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> SkillKind {
        self.kind
    }

    pub fn mana_cost(&self) -> i32 {
        self.mana_cost
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn current_cooldown(&self) -> u32 {
        self.current_cooldown
    }

    /// Usable iff the caster can pay and the cooldown has elapsed.
    pub fn check_usable(&self, mana: i32) -> Result<(), SkillError> {
        if self.current_cooldown > 0 {
            return Err(SkillError::OnCooldown {
                name: self.name,
                remaining: self.current_cooldown,
            });
        }
        if mana < self.mana_cost {
            return Err(SkillError::InsufficientMana {
                name: self.name,
                required: self.mana_cost,
                available: mana,
            });
        }
        Ok(())
    }

    pub(crate) fn trigger(&mut self) {
        self.current_cooldown = self.cooldown;
    }

    pub(crate) fn tick(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}

/// The caster's ordered skill slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillBook {
    skills: ArrayVec<Skill, { GameConfig::MAX_SKILLS }>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fireball, Healing Light and Arcane Shield, in that order.
    pub fn default_loadout() -> Self {
        let mut book = Self::new();
        book.skills.push(Skill::fireball());
        book.skills.push(Skill::healing_light());
        book.skills.push(Skill::arcane_shield());
        book
    }

    /// Appends a skill; returns false when every slot is taken.
    pub fn learn(&mut self, skill: Skill) -> bool {
        self.skills.try_push(skill).is_ok()
    }

    pub fn get(&self, index: usize) -> Result<&Skill, SkillError> {
        self.skills.get(index).ok_or(SkillError::IndexOutOfRange {
            index,
            len: self.skills.len(),
        })
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Skill, SkillError> {
        let len = self.skills.len();
        self.skills
            .get_mut(index)
            .ok_or(SkillError::IndexOutOfRange { index, len })
    }

    /// Advances every cooldown by one round.
    pub(crate) fn tick_all(&mut self) {
        for skill in &mut self.skills {
            skill.tick();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_requires_mana_and_elapsed_cooldown() {
        let mut skill = Skill::fireball();
        assert_eq!(
            skill.check_usable(10),
            Err(SkillError::InsufficientMana {
                name: "Fireball",
                required: 15,
                available: 10,
            })
        );
        assert!(skill.check_usable(15).is_ok());

        skill.trigger();
        assert!(matches!(
            skill.check_usable(50),
            Err(SkillError::OnCooldown { remaining: 3, .. })
        ));
    }

    #[test]
    fn cooldown_drops_by_one_per_tick_and_stops_at_zero() {
        let mut skill = Skill::arcane_shield();
        skill.trigger();
        for expected in [4, 3, 2, 1, 0, 0] {
            skill.tick();
            assert_eq!(skill.current_cooldown(), expected);
        }
    }

    #[test]
    fn out_of_range_slot_is_invalid_selection() {
        let book = SkillBook::default_loadout();
        let err = book.get(7).unwrap_err();
        assert_eq!(err, SkillError::IndexOutOfRange { index: 7, len: 3 });
        assert_eq!(err.kind(), ErrorKind::InvalidSelection);
    }

    #[test]
    fn book_is_bounded() {
        let mut book = SkillBook::new();
        for _ in 0..GameConfig::MAX_SKILLS {
            assert!(book.learn(Skill::fireball()));
        }
        assert!(!book.learn(Skill::fireball()));
    }
}
