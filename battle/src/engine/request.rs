//! Collecting one action per side through the handler's menus

use duel_protocol::{ActionRequest, Choice, Narration, RequestKind, SideId};
use tracing::{debug, warn};

use super::battle::{Battle, narrate};
use crate::error::BattleError;
use crate::handler::Handler;
use crate::types::{Action, CreatureId, SkillId};

impl Battle {
    /// Walk a side through the menus until it commits to an action.
    ///
    /// Top level offers Fight and Switch. Fight opens the skill menu and
    /// Switch the bench; both sub-menus can go Back. Choosing Switch with
    /// nobody on the bench drops Switch from the top level for the rest of
    /// this request.
    pub(crate) fn request_action<H: Handler>(
        &self,
        side: SideId,
        handler: &mut H,
    ) -> Result<Action, BattleError> {
        let limit = self.config.max_choice_attempts;
        let mut switch_excluded = false;

        for attempt in 1..=limit {
            let menu = self.command_menu(side, switch_excluded)?;
            if menu.is_empty() {
                warn!(side = %side, "No legal action available");
                return Err(BattleError::NoLegalAction(side));
            }

            match self.ask(handler, &menu)? {
                Choice::Fight => {
                    let skills = self.skill_menu(side)?;
                    match self.ask(handler, &skills)? {
                        Choice::Skill(index) => return Ok(Action::Attack(SkillId(index))),
                        Choice::Back => {
                            debug!(side = %side, attempt, "Backed out of skill menu");
                        }
                        other => return Err(illegal(&skills, other)),
                    }
                }
                Choice::Switch => {
                    let mut bench = self.switch_menu(side, RequestKind::Switch);
                    if bench.is_empty() {
                        debug!(side = %side, "Switch chosen with an empty bench");
                        narrate(handler, &Narration::NoSwitchTarget { side });
                        switch_excluded = true;
                        continue;
                    }

                    bench.push(Choice::Back, "Back");
                    match self.ask(handler, &bench)? {
                        Choice::Creature(index) => return Ok(Action::Swap(CreatureId(index))),
                        Choice::Back => {
                            debug!(side = %side, attempt, "Backed out of switch menu");
                        }
                        other => return Err(illegal(&bench, other)),
                    }
                }
                other => return Err(illegal(&menu, other)),
            }
        }

        warn!(side = %side, attempts = limit, "Choice loop exceeded");
        Err(BattleError::ChoiceLoopExceeded {
            side,
            attempts: limit,
        })
    }

    /// Ask a side to replace its fainted creature. Back is not offered.
    pub(crate) fn request_forced_swap<H: Handler>(
        &self,
        side: SideId,
        handler: &mut H,
    ) -> Result<CreatureId, BattleError> {
        let menu = self.switch_menu(side, RequestKind::ForcedSwitch);
        if menu.is_empty() {
            return Err(BattleError::NoLegalAction(side));
        }

        match self.ask(handler, &menu)? {
            Choice::Creature(index) => Ok(CreatureId(index)),
            other => Err(illegal(&menu, other)),
        }
    }

    fn command_menu(&self, side: SideId, switch_excluded: bool) -> Result<ActionRequest, BattleError> {
        let active = self
            .side(side)
            .active()
            .ok_or(BattleError::NoActiveCreature(side))?;

        let mut menu = ActionRequest::new(side, self.turn, RequestKind::Command);
        if !active.skills.is_empty() {
            menu.push(Choice::Fight, "Fight");
        }
        if !switch_excluded {
            menu.push(Choice::Switch, "Switch");
        }
        Ok(menu)
    }

    fn skill_menu(&self, side: SideId) -> Result<ActionRequest, BattleError> {
        let active = self
            .side(side)
            .active()
            .ok_or(BattleError::NoActiveCreature(side))?;

        let mut menu = ActionRequest::new(side, self.turn, RequestKind::Skill);
        for (index, skill) in active.skills.iter().enumerate() {
            menu.push(
                Choice::Skill(index),
                format!("{} ({}, {})", skill.name, skill.element, skill.power),
            );
        }
        menu.push(Choice::Back, "Back");
        Ok(menu)
    }

    /// Bench creatures only: never fainted, never the active one
    fn switch_menu(&self, side: SideId, kind: RequestKind) -> ActionRequest {
        let mut menu = ActionRequest::new(side, self.turn, kind);
        for (index, creature) in self.side(side).bench() {
            menu.push(
                Choice::Creature(index),
                format!("{} ({}/{} HP)", creature.name, creature.hp(), creature.max_hp()),
            );
        }
        menu
    }

    /// Present a menu and reject anything it does not offer
    fn ask<H: Handler>(&self, handler: &mut H, request: &ActionRequest) -> Result<Choice, BattleError> {
        let choice = handler.request_action(request);
        if !request.allows(&choice) {
            warn!(side = %request.side, kind = ?request.kind, %choice, "Illegal choice");
            return Err(illegal(request, choice));
        }
        debug!(side = %request.side, kind = ?request.kind, %choice, "Choice accepted");
        Ok(choice)
    }
}

fn illegal(request: &ActionRequest, choice: Choice) -> BattleError {
    BattleError::IllegalChoice {
        side: request.side,
        kind: request.kind,
        choice,
    }
}
