use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four suit colors. Wild cards carry no color of their own.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card type without its color or number payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Numbered,
    Skip,
    Reverse,
    Draw,
    Wild,
    WildDraw,
}

/// Representation of an UNO card. Cards are plain values; a deck holds duplicates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Numbered card between 0 and 9.
    Numbered { color: Color, number: u8 },
    Skip(Color),
    Reverse(Color),
    /// Colored "draw two" card.
    Draw(Color),
    Wild,
    /// Wild "draw four" card.
    WildDraw,
}

pub const MAX_CARD_NUMBER: u8 = 9;
pub const COPIES_PER_ACTION: usize = 2;
pub const WILD_COUNT: usize = 4;
pub const DECK_SIZE: usize = 108;
pub const DEFAULT_CARDS_PER_PLAYER: usize = 7;
pub const DEFAULT_TARGET_SCORE: u32 = 500;
pub const UNO_PENALTY: usize = 4;
pub const DRAW_PENALTY: usize = 2;
pub const WILD_DRAW_PENALTY: usize = 4;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

impl Card {
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Numbered { .. } => CardKind::Numbered,
            Card::Skip(_) => CardKind::Skip,
            Card::Reverse(_) => CardKind::Reverse,
            Card::Draw(_) => CardKind::Draw,
            Card::Wild => CardKind::Wild,
            Card::WildDraw => CardKind::WildDraw,
        }
    }

    /// Returns the printed color, `None` for wild cards.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Numbered { color, .. }
            | Card::Skip(color)
            | Card::Reverse(color)
            | Card::Draw(color) => Some(*color),
            Card::Wild | Card::WildDraw => None,
        }
    }

    /// Returns the printed number for numbered cards.
    #[inline]
    pub fn number(&self) -> Option<u8> {
        match self {
            Card::Numbered { number, .. } => Some(*number),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDraw)
    }

    /// Penalty value of the card when it is left in a hand at the end of a round.
    pub fn points(&self) -> u32 {
        match self {
            Card::Numbered { number, .. } => u32::from(*number),
            Card::Skip(_) | Card::Reverse(_) | Card::Draw(_) => 20,
            Card::Wild | Card::WildDraw => 50,
        }
    }

    /// Number of cards the next player is forced to draw after this card is played.
    pub fn forced_draw(&self) -> usize {
        match self {
            Card::Draw(_) => DRAW_PENALTY,
            Card::WildDraw => WILD_DRAW_PENALTY,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Numbered { color, number } => write!(f, "{color} {number}"),
            Card::Skip(color) => write!(f, "{color} Skip"),
            Card::Reverse(color) => write!(f, "{color} Reverse"),
            Card::Draw(color) => write!(f, "{color} Draw Two"),
            Card::Wild => f.write_str("Wild"),
            Card::WildDraw => f.write_str("Wild Draw Four"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_follow_card_type() {
        let numbered = Card::Numbered {
            color: Color::Red,
            number: 5,
        };
        assert_eq!(numbered.points(), 5);
        assert_eq!(Card::Skip(Color::Blue).points(), 20);
        assert_eq!(Card::Reverse(Color::Green).points(), 20);
        assert_eq!(Card::Draw(Color::Yellow).points(), 20);
        assert_eq!(Card::Wild.points(), 50);
        assert_eq!(Card::WildDraw.points(), 50);
    }

    #[test]
    fn wild_cards_have_no_color_or_number() {
        assert_eq!(Card::Wild.color(), None);
        assert_eq!(Card::WildDraw.number(), None);
        assert!(Card::WildDraw.is_wild());
        assert_eq!(Card::Skip(Color::Red).color(), Some(Color::Red));
        assert_eq!(Card::Skip(Color::Red).number(), None);
    }

    #[test]
    fn display_is_human_readable() {
        let card = Card::Numbered {
            color: Color::Green,
            number: 7,
        };
        assert_eq!(card.to_string(), "Green 7");
        assert_eq!(Card::Draw(Color::Blue).to_string(), "Blue Draw Two");
    }
}
