use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, Color};
use crate::hand::Direction;

/// Snapshot of a hand as seen from one seat, tailored for bots.
///
/// Opponents' cards are reduced to counts; only the observer's own cards are listed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandView {
    pub self_player: PlayerId,
    pub player_in_turn: Option<PlayerId>,
    pub hand: Vec<Card>,
    pub hand_sizes: Vec<usize>,
    pub uno_called: Vec<bool>,
    pub top_card: Card,
    pub current_color: Option<Color>,
    pub direction: Direction,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub drawn_this_turn: bool,
}

impl HandView {
    pub fn num_players(&self) -> usize {
        self.hand_sizes.len()
    }

    pub fn is_my_turn(&self) -> bool {
        self.player_in_turn == Some(self.self_player)
    }

    /// Color held most often in the observer's hand, ignoring wilds.
    pub fn dominant_color(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .map(|color| {
                let count = self
                    .hand
                    .iter()
                    .filter(|card| card.color() == Some(color))
                    .count();
                (count, color)
            })
            .filter(|(count, _)| *count > 0)
            .max_by_key(|(count, _)| *count)
            .map(|(_, color)| color)
    }
}
