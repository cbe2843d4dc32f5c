//! UNO rules engine: deck construction, dealing, turn progression, play legality,
//! scoring and match sequencing, with pluggable shuffling and bot decision providers.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod shuffler;
pub mod snapshot;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, PlayerId};
pub use crate::bot::Bot;
pub use crate::bots::{
    FirstLegalBot, HeuristicBot, HumanBot, RandomBot, create_bot_from_spec, label_for_spec,
};
pub use crate::card::{Card, CardKind, Color};
pub use crate::deck::{Deck, create_initial_deck, draw_card, shuffle};
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{DEFAULT_MAX_STEPS, Game, GameBuilder, GameConfig, GameSettings};
pub use crate::hand::{Direction, Hand, HandBuilder, HandConfig};
pub use crate::shuffler::{IdentityShuffler, Shuffler, StandardShuffler, standard_shuffler};
pub use crate::state::HandView;
pub use crate::visualize::{VisualOptions, describe_action, render_view};
