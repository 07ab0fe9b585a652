//! Turn resolution: swap phase, attack ordering, damage and fainting

use std::cmp::Ordering;

use duel_protocol::{Narration, SideId};
use tracing::{debug, info};

use super::battle::{Battle, Outcome, narrate};
use crate::damage;
use crate::error::BattleError;
use crate::handler::Handler;
use crate::types::{Action, CreatureId, SkillId};

/// An attack waiting in the round queue, bound to the creature that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QueuedAttack {
    pub side: SideId,

    /// Roster index of the attacker when the action was chosen
    pub creature: usize,

    pub skill: SkillId,
}

impl Battle {
    /// Resolve one round from both sides' actions (indexed by [`SideId::index`]).
    ///
    /// Returns `Some(outcome)` if a side ran out of creatures mid-round; any
    /// attacks still queued are dropped.
    pub(crate) fn resolve_round<H: Handler>(
        &mut self,
        actions: [Action; 2],
        handler: &mut H,
    ) -> Result<Option<Outcome>, BattleError> {
        let mut queue = Vec::with_capacity(2);

        // Swaps go first, unconditionally, in fixed side order
        for side in SideId::ALL {
            match actions[side.index()] {
                Action::Swap(target) => self.apply_swap(side, target, handler)?,
                Action::Attack(skill) => queue.push(self.queue_attack(side, skill)?),
            }
        }

        for attack in self.order_attacks(queue) {
            if !self.can_act(&attack) {
                debug!(turn = self.turn, side = %attack.side, "Attacker left the field, attack skipped");
                continue;
            }
            if let Some(outcome) = self.execute_attack(attack, handler)? {
                return Ok(Some(outcome));
            }
        }

        Ok(None)
    }

    /// Bind an attack to the side's current active creature
    fn queue_attack(&self, side: SideId, skill: SkillId) -> Result<QueuedAttack, BattleError> {
        let state = self.side(side);
        let creature = state
            .active_index()
            .ok_or(BattleError::NoActiveCreature(side))?;

        let known = state
            .creature(creature)
            .is_some_and(|c| c.skill(skill.0).is_some());
        if !known {
            return Err(BattleError::UnknownSkill {
                side,
                index: skill.0,
            });
        }

        Ok(QueuedAttack {
            side,
            creature,
            skill,
        })
    }

    /// Faster attacker first; exact speed ties are a fair coin flip
    pub(crate) fn order_attacks(&mut self, mut queue: Vec<QueuedAttack>) -> Vec<QueuedAttack> {
        if queue.len() == 2 {
            let first = self.attack_speed(&queue[0]);
            let second = self.attack_speed(&queue[1]);

            let reorder = match first.cmp(&second) {
                Ordering::Greater => false,
                Ordering::Less => true,
                Ordering::Equal => self.rng.coin_flip(),
            };
            if reorder {
                queue.swap(0, 1);
            }

            debug!(
                turn = self.turn,
                first = %queue[0].side,
                speed_tie = first == second,
                "Attack order decided"
            );
        }
        queue
    }

    fn attack_speed(&self, attack: &QueuedAttack) -> u32 {
        self.side(attack.side)
            .creature(attack.creature)
            .map_or(0, |c| c.speed())
    }

    /// The creature that chose the attack must still be out and conscious
    fn can_act(&self, attack: &QueuedAttack) -> bool {
        let state = self.side(attack.side);
        state.active_index() == Some(attack.creature)
            && state.creature(attack.creature).is_some_and(|c| c.is_alive())
    }

    fn execute_attack<H: Handler>(
        &mut self,
        attack: QueuedAttack,
        handler: &mut H,
    ) -> Result<Option<Outcome>, BattleError> {
        let defender_side = attack.side.opponent();

        let attacker = self
            .side(attack.side)
            .creature(attack.creature)
            .ok_or(BattleError::UnknownCreature {
                side: attack.side,
                index: attack.creature,
            })?;
        let skill = attacker.skill(attack.skill.0).ok_or(BattleError::UnknownSkill {
            side: attack.side,
            index: attack.skill.0,
        })?;
        let defender = self
            .side(defender_side)
            .active()
            .ok_or(BattleError::NoActiveCreature(defender_side))?;

        let roll = damage::preview(attacker, defender, skill);
        let used = Narration::UseSkill {
            side: attack.side,
            creature: attacker.name.clone(),
            skill: skill.name.clone(),
        };
        narrate(handler, &used);

        let defender = self
            .side_mut(defender_side)
            .active_mut()
            .ok_or(BattleError::NoActiveCreature(defender_side))?;
        defender.take_damage(roll.amount);

        let name = defender.name.clone();
        let (hp, max_hp) = (defender.hp(), defender.max_hp());
        let fainted = defender.is_fainted();

        debug!(
            turn = self.turn,
            attacker = %attack.side,
            damage = roll.amount,
            multiplier = roll.multiplier,
            hp,
            "Attack resolved"
        );

        if roll.multiplier != 1.0 {
            narrate(
                handler,
                &Narration::Effectiveness {
                    side: defender_side,
                    multiplier: roll.multiplier,
                },
            );
        }
        narrate(
            handler,
            &Narration::Damage {
                side: defender_side,
                creature: name.clone(),
                amount: roll.amount,
                hp,
                max_hp,
            },
        );

        if !fainted {
            return Ok(None);
        }
        self.handle_faint(defender_side, name, handler)
    }

    /// Forced swap if the side has anyone left, otherwise end the battle
    fn handle_faint<H: Handler>(
        &mut self,
        side: SideId,
        creature: String,
        handler: &mut H,
    ) -> Result<Option<Outcome>, BattleError> {
        info!(turn = self.turn, side = %side, creature = %creature, "Creature fainted");
        narrate(handler, &Narration::Faint { side, creature });

        self.side_mut(side).clear_active();

        if !self.side(side).can_switch() {
            narrate(handler, &Narration::NoSwitchTarget { side });
            let outcome = self
                .evaluate_outcome()
                .unwrap_or(Outcome::Winner(side.opponent()));
            return Ok(Some(outcome));
        }

        let target = self.request_forced_swap(side, handler)?;
        self.apply_swap(side, target, handler)?;
        Ok(None)
    }

    fn apply_swap<H: Handler>(
        &mut self,
        side: SideId,
        target: CreatureId,
        handler: &mut H,
    ) -> Result<(), BattleError> {
        self.side_mut(side).switch_to(target.0)?;

        let creature = self
            .side(side)
            .creature(target.0)
            .map(|c| c.name.clone())
            .ok_or(BattleError::UnknownCreature {
                side,
                index: target.0,
            })?;

        info!(turn = self.turn, side = %side, creature = %creature, "Swapped in");
        narrate(handler, &Narration::SwitchIn { side, creature });
        Ok(())
    }
}
