//! Damage formulas.

use crate::config::GameConfig;
use crate::stats::EntityStats;

// ============================================================================
// Physical
// ============================================================================

/// Calculate physical damage.
///
/// # Formula
///
/// ```text
/// final_damage = max(attack - defense, floor)
/// ```
pub fn physical_damage(attacker: &EntityStats, defender: &EntityStats, floor: i32) -> i32 {
    attacker
        .attack()
        .saturating_sub(defender.defense())
        .max(floor)
}

/// Player basic attack; never below [`GameConfig::PLAYER_DAMAGE_FLOOR`].
pub fn player_attack_damage(player: &EntityStats, enemy: &EntityStats) -> i32 {
    physical_damage(player, enemy, GameConfig::PLAYER_DAMAGE_FLOOR)
}

/// Enemy attack; never below [`GameConfig::ENEMY_DAMAGE_FLOOR`].
pub fn enemy_attack_damage(enemy: &EntityStats, player: &EntityStats) -> i32 {
    physical_damage(enemy, player, GameConfig::ENEMY_DAMAGE_FLOOR)
}

// ============================================================================
// Magic
// ============================================================================

/// Calculate spell damage.
///
/// ```text
/// final_damage = max(magic * multiplier - resistance, SKILL_DAMAGE_FLOOR)
/// ```
pub fn spell_damage(caster: &EntityStats, target: &EntityStats, multiplier: i32) -> i32 {
    caster
        .magic()
        .saturating_mul(multiplier)
        .saturating_sub(target.resistance())
        .max(GameConfig::SKILL_DAMAGE_FLOOR)
}

/// Healing of a restorative spell before the max-health cap.
pub fn spell_healing(caster: &EntityStats, base: i32, magic_divisor: i32) -> i32 {
    base.saturating_add(caster.magic() / magic_divisor.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatKind;

    fn stats(attack: i32, defense: i32) -> EntityStats {
        EntityStats::from_values([
            (StatKind::MaxHealth, 50),
            (StatKind::Health, 50),
            (StatKind::Attack, attack),
            (StatKind::Defense, defense),
            (StatKind::Resistance, 2),
        ])
    }

    #[test]
    fn attack_minus_defense() {
        assert_eq!(player_attack_damage(&stats(12, 0), &stats(0, 3)), 9);
    }

    #[test]
    fn floors_apply() {
        assert_eq!(player_attack_damage(&stats(1, 0), &stats(0, 40)), 2);
        assert_eq!(enemy_attack_damage(&stats(1, 0), &stats(0, 40)), 1);
    }

    #[test]
    fn spells_scale_with_magic() {
        let caster = EntityStats::player_defaults();
        assert_eq!(spell_damage(&caster, &stats(0, 0), 2), 26);
        assert_eq!(spell_healing(&caster, 20, 2), 27);
    }
}
