//! Computer-controlled side

use duel_battle::query::{best_skill, super_effective_skills};
use duel_battle::{ActionRequest, Choice, Creature, Handler, Narration, RequestKind, SideId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Picks uniformly among the legal options, never backing out of a menu.
///
/// With [`RandomHandler::prefer_effective`] it also goes for a
/// super-effective hit whenever the active creature has one.
#[derive(Debug, Clone)]
pub struct RandomHandler {
    rng: StdRng,
    insight: Option<Insight>,
}

/// What the handler knows about the field
#[derive(Debug, Clone)]
struct Insight {
    /// Indexed by [`SideId::index`]
    rosters: [Vec<Creature>; 2],

    /// Name of each side's creature on the field
    active: [Option<String>; 2],
}

impl Insight {
    fn active(&self, side: SideId) -> Option<&Creature> {
        let name = self.active[side.index()].as_ref()?;
        self.rosters[side.index()].iter().find(|c| &c.name == name)
    }

    fn observe(&mut self, narration: &Narration) {
        match narration {
            Narration::SwitchIn { side, creature } => {
                self.active[side.index()] = Some(creature.clone());
            }
            Narration::Faint { side, .. } => {
                self.active[side.index()] = None;
            }
            Narration::Win { .. } | Narration::Draw => {
                self.active = [None, None];
            }
            _ => {}
        }
    }

    /// Best skill for `side` if it is super effective against the other side
    fn effective_skill(&self, side: SideId) -> Option<usize> {
        let attacker = self.active(side)?;
        let defender = self.active(side.opponent())?;

        if super_effective_skills(attacker, defender).is_empty() {
            return None;
        }
        best_skill(attacker, defender)
    }
}

impl RandomHandler {
    /// Seeded for reproducible play, or from entropy with `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, insight: None }
    }

    /// Give the handler both rosters so it can aim for weaknesses
    pub fn prefer_effective(mut self, player: &[Creature], opponent: &[Creature]) -> Self {
        self.insight = Some(Insight {
            rosters: [player.to_vec(), opponent.to_vec()],
            active: [None, None],
        });
        self
    }

    fn planned(&self, request: &ActionRequest) -> Option<Choice> {
        let skill = self.insight.as_ref()?.effective_skill(request.side)?;

        let choice = match request.kind {
            RequestKind::Command => Choice::Fight,
            RequestKind::Skill => Choice::Skill(skill),
            RequestKind::Switch | RequestKind::ForcedSwitch => return None,
        };
        request.allows(&choice).then_some(choice)
    }
}

impl Handler for RandomHandler {
    fn request_action(&mut self, request: &ActionRequest) -> Choice {
        if let Some(choice) = self.planned(request) {
            debug!(side = %request.side, %choice, "Going for a weakness");
            return choice;
        }

        let candidates: Vec<Choice> = request.choices().filter(|c| *c != Choice::Back).collect();
        let choice = candidates.choose(&mut self.rng).copied().unwrap_or(Choice::Back);
        debug!(side = %request.side, kind = ?request.kind, %choice, "Random choice");
        choice
    }

    fn notify(&mut self, _audience: SideId, narration: &Narration) {
        if let Some(insight) = &mut self.insight {
            insight.observe(narration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_battle::{Element, Skill, Stats};

    fn creature(name: &str, element: Element) -> Creature {
        let stats = Stats {
            attack: 8,
            sp_attack: 8,
            defense: 4,
            sp_defense: 4,
            speed: 10,
            max_hp: 40,
        };
        Creature::new(name, element, stats)
            .with_skill(Skill::physical("Tackle", Element::Normal, 6))
            .with_skill(Skill::physical("Ember", Element::Fire, 4))
    }

    fn skill_menu(side: SideId) -> ActionRequest {
        let mut request = ActionRequest::new(side, 1, RequestKind::Skill);
        request.push(Choice::Skill(0), "Tackle");
        request.push(Choice::Skill(1), "Ember");
        request.push(Choice::Back, "Back");
        request
    }

    fn switch_in(side: SideId, name: &str) -> Narration {
        Narration::SwitchIn {
            side,
            creature: name.to_string(),
        }
    }

    #[test]
    fn test_never_backs_out() {
        let mut handler = RandomHandler::new(Some(5));
        let request = skill_menu(SideId::Opponent);

        for _ in 0..100 {
            let choice = handler.request_action(&request);
            assert_ne!(choice, Choice::Back);
            assert!(request.allows(&choice));
        }
    }

    #[test]
    fn test_uses_every_option() {
        let mut handler = RandomHandler::new(Some(11));
        let request = skill_menu(SideId::Opponent);

        let picks: Vec<Choice> = (0..100).map(|_| handler.request_action(&request)).collect();
        assert!(picks.contains(&Choice::Skill(0)));
        assert!(picks.contains(&Choice::Skill(1)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let request = skill_menu(SideId::Opponent);
        let run = |seed| {
            let mut handler = RandomHandler::new(Some(seed));
            (0..20).map(|_| handler.request_action(&request)).collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_prefers_super_effective_skill() {
        let player = vec![creature("Sproutle", Element::Leaf)];
        let opponent = vec![creature("Pyrrat", Element::Fire)];
        let mut handler = RandomHandler::new(Some(1)).prefer_effective(&player, &opponent);

        handler.notify(SideId::Opponent, &switch_in(SideId::Player, "Sproutle"));
        handler.notify(SideId::Opponent, &switch_in(SideId::Opponent, "Pyrrat"));

        let mut command = ActionRequest::new(SideId::Opponent, 1, RequestKind::Command);
        command.push(Choice::Fight, "Fight");
        command.push(Choice::Switch, "Switch");

        for _ in 0..20 {
            assert_eq!(handler.request_action(&command), Choice::Fight);
            assert_eq!(handler.request_action(&skill_menu(SideId::Opponent)), Choice::Skill(1));
        }
    }

    #[test]
    fn test_no_weakness_falls_back_to_random() {
        let player = vec![creature("Drizzlet", Element::Water)];
        let opponent = vec![creature("Pyrrat", Element::Fire)];
        let mut handler = RandomHandler::new(Some(3)).prefer_effective(&player, &opponent);

        handler.notify(SideId::Player, &switch_in(SideId::Player, "Drizzlet"));
        handler.notify(SideId::Player, &switch_in(SideId::Opponent, "Pyrrat"));

        let picks: Vec<Choice> = (0..100)
            .map(|_| handler.request_action(&skill_menu(SideId::Opponent)))
            .collect();
        assert!(picks.contains(&Choice::Skill(0)));
    }

    #[test]
    fn test_forgets_fainted_creature() {
        let player = vec![creature("Sproutle", Element::Leaf)];
        let opponent = vec![creature("Pyrrat", Element::Fire)];
        let mut handler = RandomHandler::new(Some(9)).prefer_effective(&player, &opponent);

        handler.notify(SideId::Opponent, &switch_in(SideId::Player, "Sproutle"));
        handler.notify(SideId::Opponent, &switch_in(SideId::Opponent, "Pyrrat"));
        handler.notify(
            SideId::Opponent,
            &Narration::Faint {
                side: SideId::Player,
                creature: "Sproutle".to_string(),
            },
        );

        let insight = handler.insight.as_ref().unwrap();
        assert!(insight.active(SideId::Player).is_none());
        assert_eq!(insight.effective_skill(SideId::Opponent), None);
    }
}
