//! Binary checkpoints of match and hand values.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::GameError;
use crate::game::Game;
use crate::hand::Hand;

/// Engine value that can be restored from a checkpoint.
///
/// Decoded bytes are untrusted, so every restored value is validated before use.
pub trait Snapshot: Serialize + DeserializeOwned {
    fn validate(&self) -> Result<(), GameError>;
}

impl Snapshot for Hand {
    fn validate(&self) -> Result<(), GameError> {
        Hand::validate(self)
    }
}

impl Snapshot for Game {
    fn validate(&self) -> Result<(), GameError> {
        Game::validate(self)
    }
}

pub fn encode<T: Snapshot>(value: &T) -> Result<Vec<u8>, GameError> {
    Ok(bincode::serde::encode_to_vec(
        value,
        bincode::config::standard(),
    )?)
}

pub fn decode<T: Snapshot>(bytes: &[u8]) -> Result<T, GameError> {
    let (value, _read): (T, usize) =
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    Snapshot::validate(&value)?;
    Ok(value)
}
