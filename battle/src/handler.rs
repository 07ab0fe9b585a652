use duel_protocol::{ActionRequest, Choice, Narration, SideId};

/// Source of decisions for both sides of a battle.
///
/// The engine calls [`Handler::request_action`] whenever a side must pick
/// from a menu, and blocks until a choice comes back. The returned choice
/// must be one of `request.options`; anything else aborts the battle with
/// [`BattleError::IllegalChoice`](crate::BattleError::IllegalChoice).
/// Re-prompting on malformed input is the handler's job.
///
/// # Example
///
/// ```ignore
/// struct FirstOption;
///
/// impl Handler for FirstOption {
///     fn request_action(&mut self, request: &ActionRequest) -> Choice {
///         request.options[0].choice
///     }
/// }
/// ```
pub trait Handler {
    /// Pick one of the offered options for `request.side`.
    fn request_action(&mut self, request: &ActionRequest) -> Choice;

    /// Called once per audience side for every narration event.
    fn notify(&mut self, audience: SideId, narration: &Narration) {
        let _ = (audience, narration);
    }
}

impl<H: Handler + ?Sized> Handler for &mut H {
    fn request_action(&mut self, request: &ActionRequest) -> Choice {
        (**self).request_action(request)
    }

    fn notify(&mut self, audience: SideId, narration: &Narration) {
        (**self).notify(audience, narration)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn request_action(&mut self, request: &ActionRequest) -> Choice {
        (**self).request_action(request)
    }

    fn notify(&mut self, audience: SideId, narration: &Narration) {
        (**self).notify(audience, narration)
    }
}
