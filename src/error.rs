use thiserror::Error;

use crate::action::PlayerId;
use crate::card::Card;

/// Errors that can occur when manipulating a hand or a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("no player is in turn")]
    InvalidTurn,
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("shuffler did not return a permutation: {0}")]
    InvalidShuffle(&'static str),
    #[error("discard pile is empty")]
    EmptyDiscardPile,
    #[error("no current hand to play")]
    NoCurrentHand,
    #[error("hand ended without a winner")]
    EndedWithoutWinner,
    #[error("hand did not finish within {0} steps")]
    StalledHand(usize),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(&'static str),
}

/// Rule violations caused by the acting player.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("hand index {0} is out of range")]
    CardIndex(usize),
    #[error("{card} cannot be played now")]
    IllegalPlay { card: Card },
    #[error("a color must be chosen when playing a wild card")]
    MissingColor,
    #[error("player {0} already called UNO")]
    UnoAlreadyCalled(PlayerId),
    #[error("player {accused} did not fail to call UNO")]
    NoUnoFailure { accused: PlayerId },
    #[error("a player cannot accuse themselves")]
    SelfAccusation,
    #[error("draw pile is empty")]
    DrawPileEmpty,
    #[error("{needed} cards needed but only {available} left in the draw pile")]
    NotEnoughCards { needed: usize, available: usize },
    #[error("player must draw before passing")]
    CannotPass,
    #[error("discard pile holds no cards to reshuffle")]
    NothingToReshuffle,
}
