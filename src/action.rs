use serde::{Deserialize, Serialize};

use crate::card::Color;

/// Zero-based index of a player within the hand.
pub type PlayerId = usize;

/// Action a player can take in a hand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play a card from the hand of the player in turn. Wild cards need a color.
    Play {
        card_index: usize,
        chosen_color: Option<Color>,
    },
    /// Take the top card of the draw pile. Does not end the turn.
    Draw,
    /// End the turn without playing, allowed after drawing.
    Pass,
    /// Announce holding a single card. Allowed out of turn.
    SayUno { player: PlayerId },
    /// Accuse a player of holding one card without having called UNO.
    CatchUnoFailure { accuser: PlayerId, accused: PlayerId },
}

impl Action {
    /// Actions reserved for the player in turn.
    pub fn is_turn_action(&self) -> bool {
        matches!(self, Action::Play { .. } | Action::Draw | Action::Pass)
    }

    /// Returns the hand index if the action is a play.
    pub fn card_index(&self) -> Option<usize> {
        match self {
            Action::Play { card_index, .. } => Some(*card_index),
            _ => None,
        }
    }
}
