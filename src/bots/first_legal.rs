use crate::action::Action;
use crate::bot::Bot;
use crate::state::HandView;

/// Deterministic bot: always takes the first legal action and every reaction.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalBot;

impl Bot for FirstLegalBot {
    fn select_action(&mut self, _view: &HandView, legal_actions: &[Action]) -> Action {
        legal_actions.first().copied().unwrap_or(Action::Pass)
    }

    fn react(&mut self, _view: &HandView, options: &[Action]) -> Option<Action> {
        options.first().copied()
    }
}
