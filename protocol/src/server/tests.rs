#[cfg(test)]
mod tests {
    use crate::{ActionRequest, Choice, Narration, RequestKind, SideId};

    fn forced_switch() -> ActionRequest {
        let mut request = ActionRequest::new(SideId::Opponent, 3, RequestKind::ForcedSwitch);
        request.push(Choice::Creature(1), "Sproutle");
        request.push(Choice::Creature(2), "Pyrrat");
        request
    }

    #[test]
    fn test_side_parse_and_opponent() {
        assert_eq!(SideId::parse("p1"), Some(SideId::Player));
        assert_eq!(SideId::parse("p2"), Some(SideId::Opponent));
        assert_eq!(SideId::parse("p3"), None);
        assert_eq!(SideId::Player.opponent(), SideId::Opponent);
        assert_eq!(SideId::Opponent.opponent().index(), 0);
        assert_eq!(SideId::ALL[0], SideId::Player);
    }

    #[test]
    fn test_request_allows() {
        let request = forced_switch();
        assert!(request.is_forced_switch());
        assert!(request.allows(&Choice::Creature(2)));
        assert!(!request.allows(&Choice::Creature(0)));
        assert!(!request.can_go_back());
        assert_eq!(
            request.choices().collect::<Vec<_>>(),
            vec![Choice::Creature(1), Choice::Creature(2)]
        );
    }

    #[test]
    fn test_request_json() {
        let request = forced_switch();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["side"], "opponent");
        assert_eq!(json["kind"], "forcedSwitch");
        assert_eq!(json["options"][0]["label"], "Sproutle");

        let parsed: ActionRequest = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_narration_protocol_lines() {
        let damage = Narration::Damage {
            side: SideId::Opponent,
            creature: "Sproutle".to_string(),
            amount: 26,
            hp: 0,
            max_hp: 20,
        };
        assert_eq!(damage.to_protocol_string(), "|-damage|p2|Sproutle|0/20");

        let effective = Narration::Effectiveness {
            side: SideId::Opponent,
            multiplier: 2.0,
        };
        assert_eq!(effective.to_protocol_string(), "|-supereffective|p2");

        let resisted = Narration::Effectiveness {
            side: SideId::Player,
            multiplier: 0.5,
        };
        assert_eq!(resisted.to_protocol_string(), "|-resisted|p1");

        assert_eq!(Narration::Draw.to_protocol_string(), "|tie");
        assert_eq!(
            Narration::Win { side: SideId::Player }.to_protocol_string(),
            "|win|p1"
        );
    }

    #[test]
    fn test_narration_display() {
        let used = Narration::UseSkill {
            side: SideId::Player,
            creature: "Pyrrat".to_string(),
            skill: "Ember".to_string(),
        };
        assert_eq!(used.to_string(), "Pyrrat used Ember!");
        assert_eq!(
            Narration::Win { side: SideId::Opponent }.to_string(),
            "Opponent wins the battle!"
        );
        assert!(Narration::Draw.is_terminal());
        assert!(!used.is_terminal());
    }
}
