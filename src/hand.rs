use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::action::{Action, PlayerId};
use crate::card::{Card, Color, DECK_SIZE, DEFAULT_CARDS_PER_PLAYER, UNO_PENALTY};
use crate::deck::{self, Deck, create_initial_deck};
use crate::error::{GameError, InvalidAction};
use crate::shuffler::Shuffler;
use crate::state::HandView;

/// Direction in which the turn travels around the table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Parameters required to deal a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandConfig {
    pub num_players: usize,
    pub dealer: PlayerId,
    pub cards_per_player: usize,
}

impl HandConfig {
    pub fn new(num_players: usize, dealer: PlayerId) -> Result<Self, GameError> {
        let config = Self {
            num_players,
            dealer,
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_players == 0 {
            return Err(GameError::InvalidConfiguration(
                "a hand needs at least one player",
            ));
        }
        if self.cards_per_player == 0 {
            return Err(GameError::InvalidConfiguration(
                "cards per player must be positive",
            ));
        }
        if self.dealer >= self.num_players {
            return Err(GameError::InvalidConfiguration("dealer index is out of range"));
        }
        let dealt = self
            .num_players
            .checked_mul(self.cards_per_player)
            .and_then(|cards| cards.checked_add(1));
        match dealt {
            Some(needed) if needed <= DECK_SIZE => Ok(()),
            _ => Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal every player and the discard",
            )),
        }
    }
}

/// Builder for a freshly dealt [`Hand`].
pub struct HandBuilder {
    config: HandConfig,
}

impl HandBuilder {
    pub fn new(num_players: usize) -> Self {
        Self {
            config: HandConfig {
                num_players,
                dealer: 0,
                cards_per_player: DEFAULT_CARDS_PER_PLAYER,
            },
        }
    }

    pub fn dealer(mut self, dealer: PlayerId) -> Self {
        self.config.dealer = dealer;
        self
    }

    pub fn cards_per_player(mut self, cards_per_player: usize) -> Self {
        self.config.cards_per_player = cards_per_player;
        self
    }

    pub fn build(self, shuffler: &mut dyn Shuffler) -> Result<Hand, GameError> {
        Hand::deal(self.config, shuffler)
    }
}

/// One round of UNO.
///
/// Every transition borrows the current value and returns a new one; the
/// persistent vectors make those copies cheap.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    hands: Vector<Vector<Card>>,
    draw_pile: Deck,
    discard_pile: Deck,
    current_color: Option<Color>,
    player_in_turn: Option<PlayerId>,
    direction: Direction,
    uno_called: Vector<bool>,
    drawn_this_turn: bool,
}

impl Hand {
    pub fn builder(num_players: usize) -> HandBuilder {
        HandBuilder::new(num_players)
    }

    /// Shuffles a fresh deck and deals it.
    ///
    /// Player `i` receives cards `[i * n, (i + 1) * n)` of the shuffled deck,
    /// the next card starts the discard pile and the rest form the draw pile.
    pub fn deal(config: HandConfig, shuffler: &mut dyn Shuffler) -> Result<Self, GameError> {
        config.validate()?;
        let shuffled = deck::shuffle(&create_initial_deck(), shuffler)?;
        let HandConfig {
            num_players,
            dealer,
            cards_per_player,
        } = config;
        let dealt = num_players * cards_per_player;

        let hands: Vector<Vector<Card>> = (0..num_players)
            .map(|seat| {
                shuffled
                    .skip(seat * cards_per_player)
                    .take(cards_per_player)
            })
            .collect();
        let top = *shuffled.get(dealt).ok_or(GameError::InvalidConfiguration(
            "deck exhausted while dealing",
        ))?;
        let hand = Hand {
            hands,
            draw_pile: shuffled.skip(dealt + 1),
            discard_pile: Vector::unit(top),
            current_color: top.color(),
            player_in_turn: Some((dealer + 1) % num_players),
            direction: Direction::Clockwise,
            uno_called: std::iter::repeat(false).take(num_players).collect(),
            drawn_this_turn: false,
        };
        debug!(
            players = num_players,
            dealer,
            cards_per_player,
            %top,
            "dealt hand"
        );
        Ok(hand)
    }

    pub fn num_players(&self) -> usize {
        self.hands.len()
    }

    pub fn hands(&self) -> &Vector<Vector<Card>> {
        &self.hands
    }

    pub fn player_hand(&self, player: PlayerId) -> Result<&Vector<Card>, GameError> {
        self.hands
            .get(player)
            .ok_or(GameError::InvalidPlayer(player))
    }

    pub fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &Deck {
        &self.discard_pile
    }

    /// Color the next play must match. `None` only while an initial wild is on top.
    pub fn current_color(&self) -> Option<Color> {
        self.current_color
    }

    pub fn player_in_turn(&self) -> Option<PlayerId> {
        self.player_in_turn
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn drawn_this_turn(&self) -> bool {
        self.drawn_this_turn
    }

    pub fn has_called_uno(&self, player: PlayerId) -> bool {
        self.uno_called.get(player).copied().unwrap_or(false)
    }

    /// Cards across all player hands, the draw pile and the discard pile.
    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(Vector::len).sum::<usize>()
            + self.draw_pile.len()
            + self.discard_pile.len()
    }

    /// Checks the structural invariants every transition relies on.
    /// Freshly dealt hands always pass; restored snapshots may not.
    pub fn validate(&self) -> Result<(), GameError> {
        let seats = self.hands.len();
        if seats == 0 {
            return Err(GameError::CorruptSnapshot("hand has no players"));
        }
        if self.uno_called.len() != seats {
            return Err(GameError::CorruptSnapshot(
                "UNO flags do not match the number of players",
            ));
        }
        if self.player_in_turn.is_some_and(|player| player >= seats) {
            return Err(GameError::CorruptSnapshot("player in turn is out of range"));
        }
        if self.discard_pile.is_empty() {
            return Err(GameError::CorruptSnapshot("discard pile is empty"));
        }
        Ok(())
    }

    pub fn top_of_discard(&self) -> Result<Card, GameError> {
        self.discard_pile
            .back()
            .copied()
            .ok_or(GameError::EmptyDiscardPile)
    }

    /// Whether the card at `card_index` of the player in turn may be played.
    pub fn can_play(&self, card_index: usize) -> bool {
        let Some(current) = self.player_in_turn else {
            return false;
        };
        let Some(card) = self.hands[current].get(card_index) else {
            return false;
        };
        match self.top_of_discard() {
            Ok(top) => self.matches(*card, top),
            Err(_) => false,
        }
    }

    pub fn can_play_any(&self) -> bool {
        self.player_in_turn
            .map(|current| (0..self.hands[current].len()).any(|idx| self.can_play(idx)))
            .unwrap_or(false)
    }

    fn matches(&self, card: Card, top: Card) -> bool {
        card.is_wild()
            || self.current_color.is_none()
            || card.color() == self.current_color
            || (card.number().is_some() && card.number() == top.number())
    }

    /// Plays a card of the player in turn, applies its effect and passes the turn.
    pub fn play(&self, card_index: usize, chosen_color: Option<Color>) -> Result<Self, GameError> {
        let current = self.player_in_turn.ok_or(GameError::InvalidTurn)?;
        let card = *self.hands[current]
            .get(card_index)
            .ok_or(InvalidAction::CardIndex(card_index))?;
        if !self.matches(card, self.top_of_discard()?) {
            return Err(InvalidAction::IllegalPlay { card }.into());
        }
        let color = if card.is_wild() {
            Some(chosen_color.ok_or(InvalidAction::MissingColor)?)
        } else {
            card.color()
        };

        let mut next = self.clone();
        next.hands[current].remove(card_index);
        next.discard_pile.push_back(card);
        next.current_color = color;
        next.uno_called.set(current, false);
        next.drawn_this_turn = false;
        debug!(player = current, %card, "played card");

        let mut skip = false;
        match card {
            Card::Skip(_) => skip = true,
            Card::Reverse(_) => {
                next.direction = next.direction.reversed();
                // Head-to-head, a reverse hands the turn straight back.
                skip = next.num_players() == 2;
            }
            Card::Draw(_) | Card::WildDraw => {
                let victim = next.next_seat(current);
                next.deal_to(victim, card.forced_draw())?;
                trace!(player = victim, cards = card.forced_draw(), "forced draw");
                skip = true;
            }
            Card::Numbered { .. } | Card::Wild => {}
        }

        if next.hands[current].is_empty() {
            next.player_in_turn = None;
            debug!(winner = current, "hand ended");
        } else {
            let mut seat = next.next_seat(current);
            if skip {
                seat = next.next_seat(seat);
            }
            next.player_in_turn = Some(seat);
        }
        Ok(next)
    }

    /// Moves the top of the draw pile into the hand of the player in turn.
    /// The turn stays with that player.
    pub fn draw(&self) -> Result<Self, GameError> {
        let current = self.player_in_turn.ok_or(GameError::InvalidTurn)?;
        if self.draw_pile.is_empty() {
            return Err(InvalidAction::DrawPileEmpty.into());
        }
        let mut next = self.clone();
        next.deal_to(current, 1)?;
        next.drawn_this_turn = true;
        trace!(player = current, "drew card");
        Ok(next)
    }

    /// Ends the turn without playing. Only allowed after drawing, or when
    /// there is nothing left to draw.
    pub fn pass(&self) -> Result<Self, GameError> {
        let current = self.player_in_turn.ok_or(GameError::InvalidTurn)?;
        if !self.drawn_this_turn && !self.draw_pile.is_empty() {
            return Err(InvalidAction::CannotPass.into());
        }
        let mut next = self.clone();
        next.player_in_turn = Some(self.next_seat(current));
        next.drawn_this_turn = false;
        trace!(player = current, "passed");
        Ok(next)
    }

    pub fn say_uno(&self, player: PlayerId) -> Result<Self, GameError> {
        let called = self
            .uno_called
            .get(player)
            .ok_or(GameError::InvalidPlayer(player))?;
        if *called {
            return Err(InvalidAction::UnoAlreadyCalled(player).into());
        }
        let mut next = self.clone();
        next.uno_called.set(player, true);
        debug!(player, "called UNO");
        Ok(next)
    }

    /// True iff `accused` holds exactly one card and has not called UNO.
    pub fn check_uno_failure(&self, _accuser: PlayerId, accused: PlayerId) -> bool {
        self.hands.get(accused).is_some_and(|cards| cards.len() == 1)
            && !self.has_called_uno(accused)
    }

    /// Penalizes `accused` with four cards from the draw pile.
    pub fn catch_uno_failure(
        &self,
        accuser: PlayerId,
        accused: PlayerId,
    ) -> Result<Self, GameError> {
        for player in [accuser, accused] {
            if player >= self.num_players() {
                return Err(GameError::InvalidPlayer(player));
            }
        }
        if accuser == accused {
            return Err(InvalidAction::SelfAccusation.into());
        }
        if !self.check_uno_failure(accuser, accused) {
            return Err(InvalidAction::NoUnoFailure { accused }.into());
        }
        let mut next = self.clone();
        next.deal_to(accused, UNO_PENALTY)?;
        debug!(accuser, accused, "caught UNO failure");
        Ok(next)
    }

    /// Moves the discard pile, except its top card, under the draw pile in shuffled order.
    pub fn reshuffle(&self, shuffler: &mut dyn Shuffler) -> Result<Self, GameError> {
        if self.discard_pile.len() <= 1 {
            return Err(InvalidAction::NothingToReshuffle.into());
        }
        let top = self.top_of_discard()?;
        let recycled = self.discard_pile.take(self.discard_pile.len() - 1);
        let mut next = self.clone();
        next.draw_pile.append(deck::shuffle(&recycled, shuffler)?);
        next.discard_pile = Vector::unit(top);
        debug!(cards = recycled.len(), "reshuffled discard pile");
        Ok(next)
    }

    pub fn has_ended(&self) -> bool {
        self.hands.iter().any(Vector::is_empty)
    }

    /// First player, in seat order, with an empty hand.
    pub fn winner(&self) -> Option<PlayerId> {
        self.hands.iter().position(Vector::is_empty)
    }

    /// Sum of the points of every card still held by any player.
    pub fn score(&self) -> u32 {
        self.hands.iter().flatten().map(Card::points).sum()
    }

    /// Dispatches an [`Action`] on behalf of `player`.
    pub fn apply(&self, player: PlayerId, action: Action) -> Result<Self, GameError> {
        if player >= self.num_players() {
            return Err(GameError::InvalidPlayer(player));
        }
        if action.is_turn_action() {
            match self.player_in_turn {
                None => return Err(GameError::InvalidTurn),
                Some(current) if current != player => return Err(GameError::NotPlayersTurn),
                Some(_) => {}
            }
        }
        match action {
            Action::Play {
                card_index,
                chosen_color,
            } => self.play(card_index, chosen_color),
            Action::Draw => self.draw(),
            Action::Pass => self.pass(),
            Action::SayUno { player: caller } => {
                if caller != player {
                    return Err(GameError::InvalidPlayer(caller));
                }
                self.say_uno(caller)
            }
            Action::CatchUnoFailure { accuser, accused } => {
                if accuser != player {
                    return Err(GameError::InvalidPlayer(accuser));
                }
                self.catch_uno_failure(accuser, accused)
            }
        }
    }

    /// Turn actions available to `player`: every play that would succeed,
    /// one draw per turn and a pass when allowed.
    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<Action>, GameError> {
        if player >= self.num_players() {
            return Err(GameError::InvalidPlayer(player));
        }
        let Some(current) = self.player_in_turn else {
            return Ok(Vec::new());
        };
        if current != player {
            return Err(GameError::NotPlayersTurn);
        }
        let mut actions = Vec::new();
        for (card_index, card) in self.hands[current].iter().enumerate() {
            if !self.can_play(card_index) {
                continue;
            }
            let colors: Vec<Option<Color>> = if card.is_wild() {
                Color::ALL.into_iter().map(Some).collect()
            } else {
                vec![None]
            };
            for chosen_color in colors {
                let action = Action::Play {
                    card_index,
                    chosen_color,
                };
                // Draw effects may still fail on a short draw pile.
                if card.forced_draw() <= self.draw_pile.len() {
                    actions.push(action);
                }
            }
        }
        if !self.drawn_this_turn && !self.draw_pile.is_empty() {
            actions.push(Action::Draw);
        }
        if self.pass().is_ok() {
            actions.push(Action::Pass);
        }
        Ok(actions)
    }

    /// Out-of-turn actions available to `player`.
    pub fn legal_reactions(&self, player: PlayerId) -> Result<Vec<Action>, GameError> {
        let cards = self.player_hand(player)?;
        let mut reactions = Vec::new();
        if cards.len() == 1 && !self.has_called_uno(player) {
            reactions.push(Action::SayUno { player });
        }
        if self.draw_pile.len() >= UNO_PENALTY {
            for accused in (0..self.num_players()).filter(|&other| other != player) {
                if self.check_uno_failure(player, accused) {
                    reactions.push(Action::CatchUnoFailure {
                        accuser: player,
                        accused,
                    });
                }
            }
        }
        Ok(reactions)
    }

    /// Observation of the hand from one player's seat.
    pub fn view(&self, perspective: PlayerId) -> Result<HandView, GameError> {
        let cards = self.player_hand(perspective)?;
        Ok(HandView {
            self_player: perspective,
            player_in_turn: self.player_in_turn,
            hand: cards.iter().copied().collect(),
            hand_sizes: self.hands.iter().map(Vector::len).collect(),
            uno_called: self.uno_called.iter().copied().collect(),
            top_card: self.top_of_discard()?,
            current_color: self.current_color,
            direction: self.direction,
            draw_pile_count: self.draw_pile.len(),
            discard_pile_count: self.discard_pile.len(),
            drawn_this_turn: self.drawn_this_turn,
        })
    }

    fn next_seat(&self, from: PlayerId) -> PlayerId {
        let seats = self.num_players() as isize;
        (from as isize + self.direction.step()).rem_euclid(seats) as PlayerId
    }

    fn deal_to(&mut self, player: PlayerId, count: usize) -> Result<(), GameError> {
        let available = self.draw_pile.len();
        if available < count {
            return Err(InvalidAction::NotEnoughCards {
                needed: count,
                available,
            }
            .into());
        }
        let rest = self.draw_pile.split_off(count);
        let drawn = std::mem::replace(&mut self.draw_pile, rest);
        self.hands[player].append(drawn);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffler::IdentityShuffler;

    fn red(number: u8) -> Card {
        Card::Numbered {
            color: Color::Red,
            number,
        }
    }

    fn blue(number: u8) -> Card {
        Card::Numbered {
            color: Color::Blue,
            number,
        }
    }

    /// Three-player hand with hand-picked cards.
    fn fixture(hands: Vec<Vec<Card>>, top: Card, draw_pile: Vec<Card>) -> Hand {
        let num_players = hands.len();
        Hand {
            hands: hands.into_iter().map(Vector::from).collect(),
            draw_pile: Vector::from(draw_pile),
            discard_pile: Vector::unit(top),
            current_color: top.color(),
            player_in_turn: Some(0),
            direction: Direction::Clockwise,
            uno_called: std::iter::repeat(false).take(num_players).collect(),
            drawn_this_turn: false,
        }
    }

    #[test]
    fn config_rejects_oversized_deal() {
        assert!(matches!(
            HandBuilder::new(16)
                .cards_per_player(7)
                .build(&mut IdentityShuffler),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            HandBuilder::new(0).build(&mut IdentityShuffler),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            HandBuilder::new(2).dealer(2).build(&mut IdentityShuffler),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn skip_passes_over_next_player() -> Result<(), GameError> {
        let hand = fixture(
            vec![vec![Card::Skip(Color::Red), red(1)], vec![red(2)], vec![red(3)]],
            red(9),
            vec![blue(1); 8],
        );
        let next = hand.play(0, None)?;
        assert_eq!(next.player_in_turn(), Some(2));
        Ok(())
    }

    #[test]
    fn reverse_flips_direction() -> Result<(), GameError> {
        let hand = fixture(
            vec![vec![Card::Reverse(Color::Red), red(1)], vec![red(2)], vec![red(3)]],
            red(9),
            vec![blue(1); 8],
        );
        let next = hand.play(0, None)?;
        assert_eq!(next.direction(), Direction::CounterClockwise);
        assert_eq!(next.player_in_turn(), Some(2));
        Ok(())
    }

    #[test]
    fn reverse_acts_as_skip_head_to_head() -> Result<(), GameError> {
        let hand = fixture(
            vec![vec![Card::Reverse(Color::Red), red(1)], vec![red(2)]],
            red(9),
            vec![blue(1); 8],
        );
        let next = hand.play(0, None)?;
        assert_eq!(next.player_in_turn(), Some(0));
        Ok(())
    }

    #[test]
    fn draw_two_forces_next_player_to_draw_and_skips_them() -> Result<(), GameError> {
        let hand = fixture(
            vec![vec![Card::Draw(Color::Red), red(1)], vec![red(2)], vec![red(3)]],
            red(9),
            vec![blue(1), blue(2), blue(3)],
        );
        let next = hand.play(0, None)?;
        assert_eq!(next.player_hand(1)?.len(), 3);
        assert_eq!(next.draw_pile().len(), 1);
        assert_eq!(next.player_in_turn(), Some(2));
        assert_eq!(next.total_cards(), hand.total_cards());
        Ok(())
    }

    #[test]
    fn wild_draw_needs_enough_cards() {
        let hand = fixture(
            vec![vec![Card::WildDraw, red(1)], vec![red(2)]],
            red(9),
            vec![blue(1), blue(2)],
        );
        let err = hand.play(0, Some(Color::Green)).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidAction(InvalidAction::NotEnoughCards {
                needed: 4,
                available: 2
            })
        ));
        let legal = hand.legal_actions(0).unwrap();
        assert!(legal.iter().all(|action| action.card_index() != Some(0)));
    }

    #[test]
    fn wild_requires_a_color() -> Result<(), GameError> {
        let hand = fixture(vec![vec![Card::Wild, red(1)], vec![red(2)]], blue(9), vec![]);
        assert!(matches!(
            hand.play(0, None),
            Err(GameError::InvalidAction(InvalidAction::MissingColor))
        ));
        let next = hand.play(0, Some(Color::Yellow))?;
        assert_eq!(next.current_color(), Some(Color::Yellow));
        Ok(())
    }

    #[test]
    fn initial_wild_accepts_any_card() {
        let mut hand = fixture(vec![vec![blue(4)], vec![red(2)]], Card::Wild, vec![]);
        hand.current_color = None;
        assert!(hand.can_play(0));
    }

    #[test]
    fn pass_requires_a_draw_first() -> Result<(), GameError> {
        let hand = fixture(vec![vec![blue(4)], vec![red(2)]], red(9), vec![blue(1)]);
        assert!(matches!(
            hand.pass(),
            Err(GameError::InvalidAction(InvalidAction::CannotPass))
        ));
        assert_eq!(hand.legal_actions(0)?, vec![Action::Draw]);
        let drawn = hand.draw()?;
        assert_eq!(drawn.player_in_turn(), Some(0));
        assert_eq!(drawn.legal_actions(0)?, vec![Action::Pass]);
        let passed = drawn.pass()?;
        assert_eq!(passed.player_in_turn(), Some(1));
        assert!(!passed.drawn_this_turn());
        Ok(())
    }

    #[test]
    fn reshuffle_keeps_top_card() -> Result<(), GameError> {
        let mut hand = fixture(vec![vec![blue(4)], vec![red(2)]], red(9), vec![]);
        hand.discard_pile = Vector::from(vec![red(1), red(2), red(3)]);
        let next = hand.reshuffle(&mut IdentityShuffler)?;
        assert_eq!(next.discard_pile().len(), 1);
        assert_eq!(next.top_of_discard()?, red(3));
        assert_eq!(next.draw_pile(), &Vector::from(vec![red(1), red(2)]));
        assert!(matches!(
            next.reshuffle(&mut IdentityShuffler),
            Err(GameError::InvalidAction(InvalidAction::NothingToReshuffle))
        ));
        Ok(())
    }

    #[test]
    fn apply_rejects_out_of_turn_plays() {
        let hand = fixture(vec![vec![red(4)], vec![red(2)]], red(9), vec![]);
        assert!(matches!(
            hand.apply(1, Action::Draw),
            Err(GameError::NotPlayersTurn)
        ));
        assert!(matches!(
            hand.apply(1, Action::SayUno { player: 0 }),
            Err(GameError::InvalidPlayer(0))
        ));
    }

    #[test]
    fn final_play_ends_the_hand() -> Result<(), GameError> {
        let hand = fixture(vec![vec![red(4)], vec![red(2), blue(3)]], red(9), vec![]);
        let next = hand.play(0, None)?;
        assert!(next.has_ended());
        assert_eq!(next.winner(), Some(0));
        assert_eq!(next.player_in_turn(), None);
        assert_eq!(next.score(), 5);
        assert!(matches!(next.draw(), Err(GameError::InvalidTurn)));
        assert!(next.legal_actions(0)?.is_empty());
        Ok(())
    }

    #[test]
    fn uno_penalty_needs_four_cards() -> Result<(), GameError> {
        let hand = fixture(
            vec![vec![red(4), red(5)], vec![red(2)]],
            red(9),
            vec![blue(1), blue(2), blue(3)],
        );
        assert!(hand.check_uno_failure(0, 1));
        let before = hand.clone();
        assert!(matches!(
            hand.catch_uno_failure(0, 1),
            Err(GameError::InvalidAction(InvalidAction::NotEnoughCards {
                needed: 4,
                available: 3
            }))
        ));
        assert_eq!(hand, before);
        assert_eq!(hand.player_hand(1)?.len(), 1);
        assert_eq!(hand.draw_pile().len(), 3);
        assert!(hand.legal_reactions(0)?.is_empty());
        Ok(())
    }

    #[test]
    fn restored_hand_with_bad_turn_is_rejected() -> Result<(), GameError> {
        let mut hand = fixture(vec![vec![red(4)], vec![red(2)]], red(9), vec![blue(1)]);
        assert!(hand.validate().is_ok());
        hand.player_in_turn = Some(5);
        let bytes = crate::snapshot::encode(&hand)?;
        assert!(matches!(
            crate::snapshot::decode::<Hand>(&bytes),
            Err(GameError::CorruptSnapshot(_))
        ));

        let mut flags = fixture(vec![vec![red(4)], vec![red(2)]], red(9), vec![]);
        flags.uno_called = Vector::unit(false);
        assert!(matches!(flags.validate(), Err(GameError::CorruptSnapshot(_))));

        let mut empty = fixture(vec![vec![red(4)], vec![red(2)]], red(9), vec![]);
        empty.discard_pile = Vector::new();
        let bytes = crate::snapshot::encode(&empty)?;
        assert!(matches!(
            crate::snapshot::decode::<Hand>(&bytes),
            Err(GameError::CorruptSnapshot(_))
        ));
        Ok(())
    }
}
