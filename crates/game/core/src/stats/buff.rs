//! Temporary stat modifiers granted by skills.

use super::{EntityStats, StatKind};

/// A stat delta that lasts a number of combat rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemporaryBuff {
    pub stat: StatKind,
    pub delta: i32,
    pub remaining: u32,
}

impl TemporaryBuff {
    pub const fn new(stat: StatKind, delta: i32, duration: u32) -> Self {
        Self {
            stat,
            delta,
            remaining: duration,
        }
    }
}

/// Active buffs of one entity.
///
/// A buff's delta is added to the stats when it is granted and subtracted
/// when it expires; the set is the only place either happens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuffSet {
    active: Vec<TemporaryBuff>,
}

impl BuffSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the buff's delta and starts tracking it.
    ///
    /// A zero-duration buff would never be ticked before expiring, so it is
    /// rejected without touching the stats.
    pub fn grant(&mut self, stats: &mut EntityStats, buff: TemporaryBuff) -> bool {
        if buff.remaining == 0 {
            return false;
        }
        stats.adjust(buff.stat, buff.delta);
        self.active.push(buff);
        true
    }

    /// Counts every buff down by one round and reverts the ones that ran out.
    ///
    /// Returns the expired buffs.
    pub fn tick(&mut self, stats: &mut EntityStats) -> Vec<TemporaryBuff> {
        let mut expired = Vec::new();
        self.active.retain_mut(|buff| {
            buff.remaining = buff.remaining.saturating_sub(1);
            if buff.remaining == 0 {
                stats.adjust(buff.stat, -buff.delta);
                expired.push(*buff);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Reverts and drops every active buff.
    pub fn expire_all(&mut self, stats: &mut EntityStats) -> Vec<TemporaryBuff> {
        for buff in &self.active {
            stats.adjust(buff.stat, -buff.delta);
        }
        std::mem::take(&mut self.active)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemporaryBuff> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_applied_once_and_reverted_once() {
        let mut stats = EntityStats::player_defaults();
        let mut buffs = BuffSet::new();

        assert!(buffs.grant(&mut stats, TemporaryBuff::new(StatKind::Defense, 5, 2)));
        assert_eq!(stats.defense(), 10);

        assert!(buffs.tick(&mut stats).is_empty());
        assert_eq!(stats.defense(), 10);

        let expired = buffs.tick(&mut stats);
        assert_eq!(expired.len(), 1);
        assert_eq!(stats.defense(), 5);
        assert!(buffs.is_empty());

        // Nothing left to revert.
        buffs.tick(&mut stats);
        assert_eq!(stats.defense(), 5);
    }

    #[test]
    fn expire_all_reverts_every_buff() {
        let mut stats = EntityStats::player_defaults();
        let mut buffs = BuffSet::new();
        buffs.grant(&mut stats, TemporaryBuff::new(StatKind::Defense, 5, 3));
        buffs.grant(&mut stats, TemporaryBuff::new(StatKind::Attack, 2, 1));

        let expired = buffs.expire_all(&mut stats);
        assert_eq!(expired.len(), 2);
        assert_eq!(stats.defense(), 5);
        assert_eq!(stats.attack(), 12);
        assert!(buffs.is_empty());
    }

    #[test]
    fn zero_duration_buff_is_rejected() {
        let mut stats = EntityStats::player_defaults();
        let mut buffs = BuffSet::new();
        assert!(!buffs.grant(&mut stats, TemporaryBuff::new(StatKind::Magic, 4, 0)));
        assert_eq!(stats.magic(), 14);
    }
}
