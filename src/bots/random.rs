use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Action;
use crate::bot::Bot;
use crate::state::HandView;

/// Baseline bot that samples uniformly from the legal action set.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_action(&mut self, _view: &HandView, legal_actions: &[Action]) -> Action {
        legal_actions
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::Pass)
    }

    /// Reacts half of the time, with a uniformly chosen option.
    fn react(&mut self, _view: &HandView, options: &[Action]) -> Option<Action> {
        if options.is_empty() || !self.rng.gen_bool(0.5) {
            return None;
        }
        options.choose(&mut self.rng).copied()
    }
}
