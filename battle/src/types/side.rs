//! Side (participant) state

use duel_protocol::SideId;

use super::creature::Creature;
use crate::error::BattleError;

/// One participant's side of the battle
#[derive(Debug, Clone)]
pub struct SideState {
    /// Which side this is
    pub id: SideId,

    /// Creatures on this side (fixed roster order)
    roster: Vec<Creature>,

    /// Roster index of the active creature.
    /// `None` only between a faint and the forced swap, or after the battle ended.
    active_index: Option<usize>,
}

impl SideState {
    /// Create a side ready to battle: every creature at max HP, roster[0] active
    pub fn new(id: SideId, roster: Vec<Creature>) -> Result<Self, BattleError> {
        if roster.is_empty() {
            return Err(BattleError::EmptyRoster(id));
        }
        if let Some((index, creature)) = roster.iter().enumerate().find(|(_, c)| c.max_hp() == 0) {
            return Err(BattleError::InvalidCreature {
                side: id,
                index,
                name: creature.name.clone(),
            });
        }

        let mut side = Self {
            id,
            roster,
            active_index: None,
        };
        side.prepare();
        Ok(side)
    }

    /// Restore every creature and send out the lead
    pub fn prepare(&mut self) {
        self.restore_all();
        self.active_index = Some(0);
    }

    /// Restore every creature to max HP and clear the active slot
    pub fn restore_all(&mut self) {
        for creature in &mut self.roster {
            creature.restore();
        }
        self.active_index = None;
    }

    pub fn roster(&self) -> &[Creature] {
        &self.roster
    }

    /// Give the roster back, consuming the side
    pub fn into_roster(self) -> Vec<Creature> {
        self.roster
    }

    /// Get a creature by roster index
    pub fn creature(&self, index: usize) -> Option<&Creature> {
        self.roster.get(index)
    }

    pub(crate) fn creature_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.roster.get_mut(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Get the active creature
    pub fn active(&self) -> Option<&Creature> {
        self.active_index.and_then(|idx| self.roster.get(idx))
    }

    /// Get the active creature mutably
    pub(crate) fn active_mut(&mut self) -> Option<&mut Creature> {
        match self.active_index {
            Some(idx) => self.roster.get_mut(idx),
            None => None,
        }
    }

    /// Iterate over bench creatures (not active, not fainted)
    pub fn bench(&self) -> impl Iterator<Item = (usize, &Creature)> {
        let active = self.active_index;
        self.roster
            .iter()
            .enumerate()
            .filter(move |(idx, creature)| Some(*idx) != active && creature.is_alive())
    }

    /// Check if a voluntary or forced swap has any target
    pub fn can_switch(&self) -> bool {
        self.bench().next().is_some()
    }

    /// Count non-fainted creatures
    pub fn alive_count(&self) -> usize {
        self.roster.iter().filter(|c| c.is_alive()).count()
    }

    /// Count fainted creatures
    pub fn fainted_count(&self) -> usize {
        self.roster.iter().filter(|c| c.is_fainted()).count()
    }

    /// Check if every creature has fainted
    pub fn all_fainted(&self) -> bool {
        self.roster.iter().all(|c| c.is_fainted())
    }

    /// Make a bench creature the active one
    pub fn switch_to(&mut self, index: usize) -> Result<(), BattleError> {
        let creature = self.roster.get(index).ok_or(BattleError::UnknownCreature {
            side: self.id,
            index,
        })?;

        if creature.is_fainted() || self.active_index == Some(index) {
            return Err(BattleError::SwapToUnavailable {
                side: self.id,
                index,
                name: creature.name.clone(),
            });
        }

        self.active_index = Some(index);
        Ok(())
    }

    /// Leave the active slot empty (after a faint)
    pub fn clear_active(&mut self) {
        self.active_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Element, Stats};

    fn creature(name: &str) -> Creature {
        Creature::new(
            name,
            Element::Normal,
            Stats {
                max_hp: 10,
                ..Stats::default()
            },
        )
    }

    fn create_test_side() -> SideState {
        SideState::new(
            SideId::Player,
            vec![creature("Pyrrat"), creature("Sproutle"), creature("Drizzlet")],
        )
        .unwrap()
    }

    #[test]
    fn test_new_side() {
        let side = create_test_side();
        assert_eq!(side.id, SideId::Player);
        assert_eq!(side.roster().len(), 3);
        assert_eq!(side.active_index(), Some(0));
        assert_eq!(side.active().unwrap().name, "Pyrrat");
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = SideState::new(SideId::Opponent, Vec::new()).unwrap_err();
        assert_eq!(err, BattleError::EmptyRoster(SideId::Opponent));
    }

    #[test]
    fn test_zero_hp_creature_rejected() {
        let broken = Creature::new("Ghostly", Element::Normal, Stats::default());
        let err = SideState::new(SideId::Player, vec![creature("Pyrrat"), broken]).unwrap_err();
        assert!(matches!(err, BattleError::InvalidCreature { index: 1, .. }));
    }

    #[test]
    fn test_get_bench() {
        let mut side = create_test_side();
        side.creature_mut(2).unwrap().take_damage(10);

        let bench: Vec<_> = side.bench().collect();
        // Only Sproutle: Pyrrat is active, Drizzlet fainted
        assert_eq!(bench.len(), 1);
        assert_eq!(bench[0].0, 1);
        assert_eq!(bench[0].1.name, "Sproutle");
        assert!(side.can_switch());
    }

    #[test]
    fn test_alive_count() {
        let mut side = create_test_side();
        side.creature_mut(0).unwrap().take_damage(10);
        assert_eq!(side.alive_count(), 2);
        assert_eq!(side.fainted_count(), 1);
        assert!(!side.all_fainted());
    }

    #[test]
    fn test_all_fainted() {
        let mut side = create_test_side();
        for idx in 0..3 {
            side.creature_mut(idx).unwrap().take_damage(10);
        }
        assert!(side.all_fainted());
        assert!(!side.can_switch());
    }

    #[test]
    fn test_switch_to() {
        let mut side = create_test_side();
        side.switch_to(1).unwrap();
        assert_eq!(side.active().unwrap().name, "Sproutle");

        // Already active
        assert!(matches!(
            side.switch_to(1),
            Err(BattleError::SwapToUnavailable { index: 1, .. })
        ));

        // Out of range
        assert!(matches!(
            side.switch_to(9),
            Err(BattleError::UnknownCreature { index: 9, .. })
        ));

        // Fainted
        side.creature_mut(2).unwrap().take_damage(10);
        assert!(side.switch_to(2).is_err());
    }

    #[test]
    fn test_clear_active_and_forced_refill() {
        let mut side = create_test_side();
        side.active_mut().unwrap().take_damage(10);
        side.clear_active();
        assert!(side.active().is_none());

        let bench: Vec<usize> = side.bench().map(|(idx, _)| idx).collect();
        assert_eq!(bench, vec![1, 2]);

        side.switch_to(2).unwrap();
        assert_eq!(side.active_index(), Some(2));
    }

    #[test]
    fn test_restore_all() {
        let mut side = create_test_side();
        side.active_mut().unwrap().take_damage(4);
        side.restore_all();
        assert!(side.active().is_none());
        assert!(side.roster().iter().all(|c| c.hp() == c.max_hp()));

        side.prepare();
        assert_eq!(side.active_index(), Some(0));
    }
}
