//! Damage calculation

use crate::types::{Creature, Skill, effectiveness};

/// Result of a damage calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    /// Final damage after effectiveness and truncation
    pub amount: u32,

    /// Effectiveness multiplier that was applied (0.5, 1.0 or 2.0)
    pub multiplier: f32,
}

impl DamageRoll {
    pub fn is_super_effective(&self) -> bool {
        self.multiplier > 1.0
    }

    pub fn is_resisted(&self) -> bool {
        self.multiplier < 1.0
    }
}

/// Damage before the effectiveness multiplier.
///
/// Physical: `attack + power - defense` (may be negative).
/// Special: `sp_attack / sp_defense * power` in real arithmetic; a zero
/// sp_defense counts as 1.
pub fn raw_damage(attacker: &Creature, defender: &Creature, skill: &Skill) -> f64 {
    if skill.physical {
        let raw = i64::from(attacker.stats.attack) + i64::from(skill.power)
            - i64::from(defender.stats.defense);
        raw as f64
    } else {
        let ratio = f64::from(attacker.stats.sp_attack) / f64::from(defender.stats.sp_defense.max(1));
        ratio * f64::from(skill.power)
    }
}

/// Compute damage without touching HP.
///
/// Truncates toward zero; non-positive results deal no damage. There is no
/// minimum of 1.
pub fn preview(attacker: &Creature, defender: &Creature, skill: &Skill) -> DamageRoll {
    let multiplier = effectiveness(skill.element, defender.element);
    let scaled = (raw_damage(attacker, defender, skill) * f64::from(multiplier)).trunc();

    let amount = if scaled <= 0.0 {
        0
    } else if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    };

    DamageRoll { amount, multiplier }
}

/// Final damage of `skill` used by `attacker` against `defender`
pub fn damage(attacker: &Creature, defender: &Creature, skill: &Skill) -> u32 {
    preview(attacker, defender, skill).amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Element, Stats};

    fn creature(element: Element, stats: Stats) -> Creature {
        Creature::new("Test", element, stats)
    }

    #[test]
    fn test_physical_super_effective() {
        let attacker = creature(
            Element::Fire,
            Stats {
                attack: 10,
                speed: 20,
                max_hp: 30,
                ..Stats::default()
            },
        );
        let mut defender = creature(
            Element::Leaf,
            Stats {
                defense: 5,
                max_hp: 20,
                ..Stats::default()
            },
        );
        let skill = Skill::physical("Flame Fang", Element::Fire, 8);

        // raw = 10 + 8 - 5 = 13, x2.0 = 26
        let roll = preview(&attacker, &defender, &skill);
        assert_eq!(roll.amount, 26);
        assert!(roll.is_super_effective());

        defender.take_damage(roll.amount);
        assert_eq!(defender.hp(), 0);
        assert!(defender.is_fainted());
    }

    #[test]
    fn test_special_uses_ratio_and_truncates() {
        let attacker = creature(
            Element::Water,
            Stats {
                sp_attack: 10,
                max_hp: 10,
                ..Stats::default()
            },
        );
        let defender = creature(
            Element::Leaf,
            Stats {
                sp_defense: 3,
                max_hp: 10,
                ..Stats::default()
            },
        );
        let skill = Skill::special("Bubble", Element::Water, 5);

        // (10 / 3) * 5 = 16.67, x0.5 = 8.33 -> 8 (not rounded)
        assert!((raw_damage(&attacker, &defender, &skill) - 50.0 / 3.0).abs() < 1e-9);
        let roll = preview(&attacker, &defender, &skill);
        assert_eq!(roll.amount, 8);
        assert!(roll.is_resisted());
    }

    #[test]
    fn test_truncation_not_rounding() {
        let attacker = creature(
            Element::Normal,
            Stats {
                sp_attack: 7,
                max_hp: 10,
                ..Stats::default()
            },
        );
        let defender = creature(
            Element::Normal,
            Stats {
                sp_defense: 4,
                max_hp: 10,
                ..Stats::default()
            },
        );
        // 7 / 4 * 2 = 3.5 -> 3
        let skill = Skill::special("Pulse", Element::Normal, 2);
        assert_eq!(damage(&attacker, &defender, &skill), 3);
    }

    #[test]
    fn test_no_minimum_damage() {
        let attacker = creature(
            Element::Normal,
            Stats {
                attack: 2,
                max_hp: 10,
                ..Stats::default()
            },
        );
        let defender = creature(
            Element::Normal,
            Stats {
                defense: 50,
                max_hp: 10,
                ..Stats::default()
            },
        );
        let skill = Skill::physical("Tap", Element::Normal, 3);
        assert_eq!(raw_damage(&attacker, &defender, &skill), -45.0);
        assert_eq!(damage(&attacker, &defender, &skill), 0);
    }

    #[test]
    fn test_zero_sp_defense_counts_as_one() {
        let attacker = creature(
            Element::Normal,
            Stats {
                sp_attack: 3,
                max_hp: 10,
                ..Stats::default()
            },
        );
        let defender = creature(
            Element::Normal,
            Stats {
                max_hp: 10,
                ..Stats::default()
            },
        );
        let skill = Skill::special("Zap", Element::Normal, 4);
        assert_eq!(damage(&attacker, &defender, &skill), 12);
    }

    #[test]
    fn test_damage_is_pure() {
        let attacker = creature(
            Element::Leaf,
            Stats {
                attack: 9,
                sp_attack: 11,
                max_hp: 10,
                ..Stats::default()
            },
        );
        let defender = creature(
            Element::Water,
            Stats {
                defense: 4,
                sp_defense: 6,
                max_hp: 40,
                ..Stats::default()
            },
        );
        for skill in [
            Skill::physical("Razor Leaf", Element::Leaf, 7),
            Skill::special("Solar Ray", Element::Leaf, 9),
        ] {
            let first = preview(&attacker, &defender, &skill);
            for _ in 0..10 {
                assert_eq!(preview(&attacker, &defender, &skill), first);
            }
        }
    }
}
