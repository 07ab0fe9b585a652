//! Battle - owns both sides and drives the round loop

use duel_protocol::{Narration, SideId};
use tracing::{debug, info, warn};

use crate::config::BattleConfig;
use crate::error::BattleError;
use crate::handler::Handler;
use crate::rng::BattleRng;
use crate::types::{Action, Creature, SideState};

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(SideId),
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<SideId> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Draw => None,
        }
    }
}

/// A two-sided battle.
///
/// Created in the setup state (both leads active, everyone at max HP),
/// advanced one round at a time by [`Battle::play_round`] or to completion
/// by [`Battle::run`]. Once ended, every creature is restored and the
/// active slots are empty.
#[derive(Debug, Clone)]
pub struct Battle {
    /// Indexed by [`SideId::index`]
    pub(crate) sides: [SideState; 2],

    pub(crate) rng: BattleRng,

    pub(crate) config: BattleConfig,

    /// Rounds started so far (0 = not started)
    pub(crate) turn: u32,

    /// Whether the leads have been announced
    started: bool,

    outcome: Option<Outcome>,
}

impl Battle {
    /// Create a battle with default configuration
    pub fn new(player: Vec<Creature>, opponent: Vec<Creature>) -> Result<Self, BattleError> {
        Self::with_config(player, opponent, BattleConfig::default())
    }

    pub fn with_config(
        player: Vec<Creature>,
        opponent: Vec<Creature>,
        config: BattleConfig,
    ) -> Result<Self, BattleError> {
        let sides = [
            SideState::new(SideId::Player, player)?,
            SideState::new(SideId::Opponent, opponent)?,
        ];

        Ok(Self {
            sides,
            rng: BattleRng::new(config.seed),
            config,
            turn: 0,
            started: false,
            outcome: None,
        })
    }

    /// Get a side by id
    pub fn side(&self, id: SideId) -> &SideState {
        &self.sides[id.index()]
    }

    pub(crate) fn side_mut(&mut self, id: SideId) -> &mut SideState {
        &mut self.sides[id.index()]
    }

    /// Current turn number (0 = not started)
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Final result, once the battle has ended
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Give the rosters back (player first), consuming the battle
    pub fn into_rosters(self) -> [Vec<Creature>; 2] {
        let [player, opponent] = self.sides;
        [player.into_roster(), opponent.into_roster()]
    }

    /// Play rounds until one side wins or the battle is drawn.
    ///
    /// On error the battle is aborted and its creatures restored as well.
    pub fn run<H: Handler>(&mut self, handler: &mut H) -> Result<Outcome, BattleError> {
        loop {
            match self.play_round(handler) {
                Ok(Some(outcome)) => return Ok(outcome),
                Ok(None) => {}
                Err(e) => {
                    warn!(turn = self.turn, error = %e, "Battle aborted");
                    self.abort();
                    return Err(e);
                }
            }
        }
    }

    /// Play a single round: collect one action per side, resolve them and
    /// check for the end of the battle.
    ///
    /// Returns `Some(outcome)` once the battle has ended.
    pub fn play_round<H: Handler>(&mut self, handler: &mut H) -> Result<Option<Outcome>, BattleError> {
        if let Some(outcome) = self.outcome {
            return Ok(Some(outcome));
        }

        if !self.started {
            self.started = true;
            for side in SideId::ALL {
                if let Some(lead) = self.side(side).active() {
                    let narration = Narration::SwitchIn {
                        side,
                        creature: lead.name.clone(),
                    };
                    narrate(handler, &narration);
                }
            }
        }

        if let Some(limit) = self.config.max_turns
            && self.turn >= limit
        {
            info!(turn = self.turn, "Turn limit reached");
            return Ok(Some(self.finish(Outcome::Draw, handler)));
        }

        self.turn += 1;
        narrate(handler, &Narration::TurnStart { turn: self.turn });

        // Sides are always asked in a fixed order, player first
        let player_action = self.request_action(SideId::Player, handler)?;
        let opponent_action = self.request_action(SideId::Opponent, handler)?;
        let actions: [Action; 2] = [player_action, opponent_action];

        debug!(turn = self.turn, ?actions, "Resolving round");

        if let Some(outcome) = self.resolve_round(actions, handler)? {
            return Ok(Some(self.finish(outcome, handler)));
        }

        match self.evaluate_outcome() {
            Some(outcome) => Ok(Some(self.finish(outcome, handler))),
            None => Ok(None),
        }
    }

    /// Check the end conditions: a side with no creature left loses,
    /// both sides exhausted at once is a draw.
    pub(crate) fn evaluate_outcome(&self) -> Option<Outcome> {
        let player_out = self.side(SideId::Player).all_fainted();
        let opponent_out = self.side(SideId::Opponent).all_fainted();

        match (player_out, opponent_out) {
            (true, true) => Some(Outcome::Draw),
            (true, false) => Some(Outcome::Winner(SideId::Opponent)),
            (false, true) => Some(Outcome::Winner(SideId::Player)),
            (false, false) => None,
        }
    }

    /// Announce the result and restore both sides
    fn finish<H: Handler>(&mut self, outcome: Outcome, handler: &mut H) -> Outcome {
        info!(turn = self.turn, ?outcome, "Battle ended");

        let narration = match outcome {
            Outcome::Winner(side) => Narration::Win { side },
            Outcome::Draw => Narration::Draw,
        };
        narrate(handler, &narration);

        for side in &mut self.sides {
            side.restore_all();
        }
        self.outcome = Some(outcome);
        outcome
    }

    fn abort(&mut self) {
        for side in &mut self.sides {
            side.restore_all();
        }
    }
}

/// Send a narration event to both sides
pub(crate) fn narrate<H: Handler>(handler: &mut H, narration: &Narration) {
    for audience in SideId::ALL {
        handler.notify(audience, narration);
    }
}

/// Run a battle to completion with default configuration.
///
/// The rosters are consumed; they are handed back restored through
/// [`Battle::into_rosters`] when driving a [`Battle`] directly.
pub fn run_battle<H: Handler>(
    player: Vec<Creature>,
    opponent: Vec<Creature>,
    handler: &mut H,
) -> Result<Outcome, BattleError> {
    run_battle_with_config(player, opponent, BattleConfig::default(), handler)
}

pub fn run_battle_with_config<H: Handler>(
    player: Vec<Creature>,
    opponent: Vec<Creature>,
    config: BattleConfig,
    handler: &mut H,
) -> Result<Outcome, BattleError> {
    let mut battle = Battle::with_config(player, opponent, config)?;
    battle.run(handler)
}
