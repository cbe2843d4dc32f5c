use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Bot;
use crate::bots::{FirstLegalBot, HeuristicBot, HumanBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - random[:seed]
/// - heuristic
/// - first
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    match label_for_spec(spec).as_str() {
        "human" => {
            let name = spec
                .split_once(':')
                .map(|(_, name)| name.trim().to_string())
                .unwrap_or_else(|| format!("Human {index}"));
            Ok(Box::new(HumanBot::new(name)))
        }
        "random" => {
            let custom_seed = spec
                .split_once(':')
                .and_then(|(_, value)| value.parse::<u64>().ok())
                .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
            Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed))))
        }
        "heuristic" => Ok(Box::new(HeuristicBot::new())),
        "first" => Ok(Box::new(FirstLegalBot)),
        _ => Err(format!("unrecognized bot spec: {spec}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_ignore_arguments_and_case() {
        assert_eq!(label_for_spec("Random:42"), "random");
        assert_eq!(label_for_spec(" heuristic "), "heuristic");
    }

    #[test]
    fn rejects_unknown_specs() {
        assert!(create_bot_from_spec("oracle", 0, 1).is_err());
        assert!(create_bot_from_spec("random:7", 0, 1).is_ok());
    }
}
