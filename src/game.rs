use std::collections::HashSet;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::action::PlayerId;
use crate::bot::Bot;
use crate::card::{
    DEFAULT_CARDS_PER_PLAYER, DEFAULT_TARGET_SCORE, MAX_PLAYERS, MIN_PLAYERS, UNO_PENALTY,
};
use crate::deck::{self, Deck, create_initial_deck};
use crate::error::GameError;
use crate::hand::{Hand, HandConfig};
use crate::shuffler::Shuffler;

/// Default cap on the number of turn steps a single hand may take.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Global constants for a running match.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub target_score: u32,
    pub cards_per_player: usize,
}

/// Configuration required to bootstrap a match.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub players: Vec<String>,
    pub target_score: u32,
    pub dealer: PlayerId,
    pub cards_per_player: usize,
}

impl GameConfig {
    pub fn new<I, S>(players: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = Self {
            players: players.into_iter().map(Into::into).collect(),
            target_score: DEFAULT_TARGET_SCORE,
            dealer: 0,
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let count = self.players.len();
        if count < MIN_PLAYERS {
            return Err(GameError::InvalidConfiguration(
                "UNO requires at least 2 players",
            ));
        }
        if count > MAX_PLAYERS {
            return Err(GameError::InvalidConfiguration(
                "UNO allows at most 10 players",
            ));
        }
        if self.players.iter().any(|name| name.trim().is_empty()) {
            return Err(GameError::InvalidConfiguration("player names must not be empty"));
        }
        let unique: HashSet<&str> = self.players.iter().map(String::as_str).collect();
        if unique.len() != count {
            return Err(GameError::InvalidConfiguration("player names must be unique"));
        }
        self.hand_config(self.dealer).validate()
    }

    fn hand_config(&self, dealer: PlayerId) -> HandConfig {
        HandConfig {
            num_players: self.players.len(),
            dealer,
            cards_per_player: self.cards_per_player,
        }
    }
}

/// Builder for a [`Game`] with optional overrides of the standard rules.
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config: GameConfig {
                players: players.into_iter().map(Into::into).collect(),
                target_score: DEFAULT_TARGET_SCORE,
                dealer: 0,
                cards_per_player: DEFAULT_CARDS_PER_PLAYER,
            },
        }
    }

    pub fn target_score(mut self, target_score: u32) -> Self {
        self.config.target_score = target_score;
        self
    }

    pub fn dealer(mut self, dealer: PlayerId) -> Self {
        self.config.dealer = dealer;
        self
    }

    /// Override the seven-card deal, e.g. to shorten simulated hands.
    pub fn cards_per_player(mut self, cards_per_player: usize) -> Self {
        self.config.cards_per_player = cards_per_player;
        self
    }

    pub fn build(self, shuffler: &mut dyn Shuffler) -> Result<Game, GameError> {
        Game::new(self.config, shuffler)
    }
}

/// A match: a sequence of hands played until someone reaches the target score.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    players: Vec<String>,
    settings: GameSettings,
    hands: Vector<Hand>,
    current_hand: Option<Hand>,
    scores: Vec<u32>,
    dealer: PlayerId,
    deck: Deck,
}

impl Game {
    pub fn builder<I, S>(players: I) -> GameBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GameBuilder::new(players)
    }

    pub fn new(config: GameConfig, shuffler: &mut dyn Shuffler) -> Result<Self, GameError> {
        config.validate()?;
        // Reference deck; every hand shuffles a deck of its own.
        let deck = deck::shuffle(&create_initial_deck(), shuffler)?;
        let hand = Hand::deal(config.hand_config(config.dealer), shuffler)?;
        let settings = GameSettings {
            num_players: config.players.len(),
            target_score: config.target_score,
            cards_per_player: config.cards_per_player,
        };
        info!(
            players = settings.num_players,
            target_score = settings.target_score,
            "starting game"
        );
        Ok(Self {
            scores: vec![0; config.players.len()],
            players: config.players,
            settings,
            hands: Vector::unit(hand.clone()),
            current_hand: Some(hand),
            dealer: config.dealer,
            deck,
        })
    }

    /// Checks that scores, settings and every recorded hand agree on the table size.
    pub fn validate(&self) -> Result<(), GameError> {
        let seats = self.players.len();
        if self.scores.len() != seats {
            return Err(GameError::CorruptSnapshot(
                "scores do not match the number of players",
            ));
        }
        if self.settings.num_players != seats {
            return Err(GameError::CorruptSnapshot(
                "settings do not match the number of players",
            ));
        }
        if self.dealer >= seats {
            return Err(GameError::CorruptSnapshot("dealer is out of range"));
        }
        if self.hands.is_empty() {
            return Err(GameError::CorruptSnapshot("game has no hands"));
        }
        for hand in self.hands.iter().chain(self.current_hand.iter()) {
            hand.validate()?;
            if hand.num_players() != seats {
                return Err(GameError::CorruptSnapshot(
                    "hand does not match the number of players",
                ));
            }
        }
        Ok(())
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn target_score(&self) -> u32 {
        self.settings.target_score
    }

    /// Every hand of the match in order. The last entry tracks the hand in progress.
    pub fn hands(&self) -> &Vector<Hand> {
        &self.hands
    }

    pub fn current_hand(&self) -> Option<&Hand> {
        self.current_hand.as_ref()
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    /// Shuffled deck drawn up at creation, kept for reference.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cumulative scores in player order.
    pub fn scores(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.players
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    pub fn score_of(&self, player: &str) -> Option<u32> {
        self.scores()
            .find(|(name, _)| *name == player)
            .map(|(_, score)| score)
    }

    pub fn is_game_over(&self) -> bool {
        self.current_hand.is_none()
    }

    /// First player, in seat order, at or above the target score once the match is over.
    pub fn winner(&self) -> Option<&str> {
        if !self.is_game_over() {
            return None;
        }
        self.scores()
            .find(|(_, score)| *score >= self.settings.target_score)
            .map(|(name, _)| name)
    }

    /// Advances the match by one step.
    ///
    /// A finished hand is scored and either ends the match or is followed by a
    /// new deal with the hand's winner as dealer. Otherwise the player in turn
    /// picks an action, after which every seat may react.
    pub fn play_hand(
        &self,
        bots: &mut [Box<dyn Bot>],
        shuffler: &mut dyn Shuffler,
    ) -> Result<Self, GameError> {
        let hand = self.current_hand.as_ref().ok_or(GameError::NoCurrentHand)?;
        if bots.len() != self.players.len() {
            return Err(GameError::InvalidConfiguration(
                "one bot per player is required",
            ));
        }
        if hand.has_ended() {
            return self.settle(hand, shuffler);
        }
        let hand = Self::take_turn(hand, bots, shuffler)?;
        let mut next = self.clone();
        let last = next.hands.len() - 1;
        next.hands.set(last, hand.clone());
        next.current_hand = Some(hand);
        Ok(next)
    }

    /// Plays the current hand until it is scored.
    pub fn play_out_hand(
        &self,
        bots: &mut [Box<dyn Bot>],
        shuffler: &mut dyn Shuffler,
        max_steps: usize,
    ) -> Result<Self, GameError> {
        let hands_before = self.hands.len();
        let mut game = self.play_hand(bots, shuffler)?;
        for _ in 0..max_steps {
            if game.is_game_over() || game.hands.len() > hands_before {
                return Ok(game);
            }
            game = game.play_hand(bots, shuffler)?;
        }
        Err(GameError::StalledHand(max_steps))
    }

    /// Plays hands until the match is over.
    pub fn play_to_end(
        &self,
        bots: &mut [Box<dyn Bot>],
        shuffler: &mut dyn Shuffler,
        max_steps_per_hand: usize,
    ) -> Result<Self, GameError> {
        let mut game = self.clone();
        while !game.is_game_over() {
            game = game.play_out_hand(bots, shuffler, max_steps_per_hand)?;
        }
        Ok(game)
    }

    fn take_turn(
        hand: &Hand,
        bots: &mut [Box<dyn Bot>],
        shuffler: &mut dyn Shuffler,
    ) -> Result<Hand, GameError> {
        let mut hand = hand.clone();
        if hand.draw_pile().len() < UNO_PENALTY && hand.discard_pile().len() > 1 {
            hand = hand.reshuffle(shuffler)?;
        }
        let player = hand.player_in_turn().ok_or(GameError::InvalidTurn)?;
        let legal = hand.legal_actions(player)?;
        let view = hand.view(player)?;
        let action = bots[player].select_action(&view, &legal);
        debug!(player, ?action, "turn action");
        hand = hand.apply(player, action)?;

        let seats = hand.num_players();
        for offset in 0..seats {
            if hand.has_ended() {
                break;
            }
            let seat = (player + offset) % seats;
            let options = hand.legal_reactions(seat)?;
            if options.is_empty() {
                continue;
            }
            let view = hand.view(seat)?;
            if let Some(reaction) = bots[seat].react(&view, &options) {
                debug!(player = seat, ?reaction, "reaction");
                hand = hand.apply(seat, reaction)?;
            }
        }
        Ok(hand)
    }

    fn settle(&self, hand: &Hand, shuffler: &mut dyn Shuffler) -> Result<Self, GameError> {
        let winner = hand.winner().ok_or(GameError::EndedWithoutWinner)?;
        let points = hand.score();
        let mut next = self.clone();
        next.scores[winner] = next.scores[winner].saturating_add(points);
        info!(
            hand = next.hands.len(),
            winner = %next.players[winner],
            points,
            total = next.scores[winner],
            "hand settled"
        );
        if next.scores[winner] >= next.settings.target_score {
            next.current_hand = None;
            info!(winner = %next.players[winner], "game over");
            return Ok(next);
        }
        let config = HandConfig {
            num_players: next.settings.num_players,
            dealer: winner,
            cards_per_player: next.settings.cards_per_player,
        };
        let hand = Hand::deal(config, shuffler)?;
        next.hands.push_back(hand.clone());
        next.current_hand = Some(hand);
        next.dealer = winner;
        Ok(next)
    }
}
