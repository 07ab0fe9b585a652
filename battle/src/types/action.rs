//! Per-round actions

/// Index of a skill within the acting side's active creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkillId(pub usize);

/// Index of a creature within the acting side's roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreatureId(pub usize);

/// One side's chosen move for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Attack(SkillId),
    Swap(CreatureId),
}

impl Action {
    pub fn is_swap(&self) -> bool {
        matches!(self, Action::Swap(_))
    }
}
