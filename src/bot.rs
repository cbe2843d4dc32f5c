use crate::action::Action;
use crate::state::HandView;

/// Decision provider for one seat at the table.
pub trait Bot {
    /// Picks the turn action from the non-empty list of legal actions.
    fn select_action(&mut self, view: &HandView, legal_actions: &[Action]) -> Action;

    /// Optionally responds out of turn (calling UNO, catching an opponent).
    fn react(&mut self, _view: &HandView, _options: &[Action]) -> Option<Action> {
        None
    }
}
