//! Element matchup helpers for decision making

use crate::damage;
use crate::types::{Creature, Element};

/// Check if defender takes double damage from the attacking element
pub fn is_weak_to(defender: Element, attacking: Element) -> bool {
    attacking.effectiveness(defender) > 1.0
}

/// Check if defender takes half damage from the attacking element
pub fn resists(defender: Element, attacking: Element) -> bool {
    attacking.effectiveness(defender) < 1.0
}

/// Get all elements that are super effective against the defender
pub fn weaknesses(defender: Element) -> Vec<Element> {
    Element::all()
        .iter()
        .copied()
        .filter(|e| is_weak_to(defender, *e))
        .collect()
}

/// Get all elements the defender resists
pub fn resistances(defender: Element) -> Vec<Element> {
    Element::all()
        .iter()
        .copied()
        .filter(|e| resists(defender, *e))
        .collect()
}

/// Indices of the attacker's skills that are super effective against the defender
pub fn super_effective_skills(attacker: &Creature, defender: &Creature) -> Vec<usize> {
    attacker
        .skills
        .iter()
        .enumerate()
        .filter(|(_, skill)| is_weak_to(defender.element, skill.element))
        .map(|(idx, _)| idx)
        .collect()
}

/// Index of the attacker's skill dealing the most damage to the defender.
/// Ties go to the earlier skill.
pub fn best_skill(attacker: &Creature, defender: &Creature) -> Option<usize> {
    attacker
        .skills
        .iter()
        .enumerate()
        .map(|(idx, skill)| (idx, damage::damage(attacker, defender, skill)))
        .fold(None, |best: Option<(usize, u32)>, (idx, amount)| match best {
            Some((_, top)) if top >= amount => best,
            _ => Some((idx, amount)),
        })
        .map(|(idx, _)| idx)
}
