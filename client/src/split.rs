use duel_battle::{ActionRequest, Choice, Handler, Narration, SideId};

/// One handler per side.
///
/// Requests go to the handler of the side being asked, narration to the
/// handler of the side it is addressed to.
#[derive(Debug, Clone)]
pub struct SplitHandler<P, O> {
    player: P,
    opponent: O,
}

impl<P: Handler, O: Handler> SplitHandler<P, O> {
    pub fn new(player: P, opponent: O) -> Self {
        Self { player, opponent }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    pub fn into_parts(self) -> (P, O) {
        (self.player, self.opponent)
    }
}

impl<P: Handler, O: Handler> Handler for SplitHandler<P, O> {
    fn request_action(&mut self, request: &ActionRequest) -> Choice {
        match request.side {
            SideId::Player => self.player.request_action(request),
            SideId::Opponent => self.opponent.request_action(request),
        }
    }

    fn notify(&mut self, audience: SideId, narration: &Narration) {
        match audience {
            SideId::Player => self.player.notify(audience, narration),
            SideId::Opponent => self.opponent.notify(audience, narration),
        }
    }
}
