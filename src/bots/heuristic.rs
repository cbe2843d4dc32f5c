use crate::action::Action;
use crate::bot::Bot;
use crate::card::{Card, Color};
use crate::state::HandView;

/// Rule-based bot that plays "sensible" moves without search or learning.
///
/// In plain English:
/// - Play whenever possible; draw only when nothing fits, and pass after drawing.
/// - Shed expensive colored cards first (action cards before high numbers before low numbers),
///   since leftover cards are scored against you.
/// - Keep wild cards for when nothing else fits or the hand is nearly empty. When playing one,
///   pick the color held most often.
/// - Attack with skips and draws when the next player is close to going out.
/// - Always call UNO and always catch an opponent who forgot.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }

    fn next_player_threat(view: &HandView) -> bool {
        let seats = view.num_players() as isize;
        if seats < 2 {
            return false;
        }
        let next = (view.self_player as isize + view.direction.step()).rem_euclid(seats) as usize;
        view.hand_sizes.get(next).is_some_and(|&size| size <= 2)
    }

    /// Larger scores are better.
    fn score_play(view: &HandView, card: Card, threatened: bool) -> i32 {
        let base = card.points() as i32;
        match card {
            Card::Wild | Card::WildDraw if view.hand.len() > 2 && !threatened => base - 200,
            Card::WildDraw | Card::Skip(_) | Card::Draw(_) if threatened => base + 100,
            Card::Reverse(_) if threatened && view.num_players() == 2 => base + 100,
            _ => base,
        }
    }

    fn wild_color(view: &HandView) -> Color {
        view.dominant_color().unwrap_or(Color::Red)
    }
}

impl Bot for HeuristicBot {
    fn select_action(&mut self, view: &HandView, legal_actions: &[Action]) -> Action {
        let threatened = Self::next_player_threat(view);
        let wild_color = Self::wild_color(view);
        let best_play = legal_actions
            .iter()
            .filter_map(|action| match action {
                Action::Play {
                    card_index,
                    chosen_color,
                } => {
                    let card = *view.hand.get(*card_index)?;
                    if card.is_wild() && *chosen_color != Some(wild_color) {
                        return None;
                    }
                    Some((Self::score_play(view, card, threatened), *action))
                }
                _ => None,
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, action)| action);
        if let Some(action) = best_play {
            return action;
        }
        for fallback in [Action::Draw, Action::Pass] {
            if legal_actions.contains(&fallback) {
                return fallback;
            }
        }
        legal_actions.first().copied().unwrap_or(Action::Pass)
    }

    fn react(&mut self, _view: &HandView, options: &[Action]) -> Option<Action> {
        options
            .iter()
            .find(|action| matches!(action, Action::SayUno { .. }))
            .or_else(|| options.first())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Direction;

    fn view(hand: Vec<Card>, hand_sizes: Vec<usize>) -> HandView {
        HandView {
            self_player: 0,
            player_in_turn: Some(0),
            uno_called: vec![false; hand_sizes.len()],
            hand,
            hand_sizes,
            top_card: Card::Numbered {
                color: Color::Blue,
                number: 3,
            },
            current_color: Some(Color::Blue),
            direction: Direction::Clockwise,
            draw_pile_count: 40,
            discard_pile_count: 10,
            drawn_this_turn: false,
        }
    }

    #[test]
    fn keeps_wild_while_colored_play_exists() {
        let hand = vec![
            Card::Wild,
            Card::Numbered {
                color: Color::Blue,
                number: 1,
            },
            Card::Numbered {
                color: Color::Green,
                number: 8,
            },
        ];
        let view = view(hand, vec![3, 7]);
        let mut legal = vec![Action::Play {
            card_index: 1,
            chosen_color: None,
        }];
        legal.extend(Color::ALL.into_iter().map(|color| Action::Play {
            card_index: 0,
            chosen_color: Some(color),
        }));
        legal.push(Action::Draw);
        let action = HeuristicBot.select_action(&view, &legal);
        assert_eq!(
            action,
            Action::Play {
                card_index: 1,
                chosen_color: None
            }
        );
    }

    #[test]
    fn draws_when_nothing_fits() {
        let view = view(vec![Card::Skip(Color::Red)], vec![1, 7]);
        let action = HeuristicBot.select_action(&view, &[Action::Draw]);
        assert_eq!(action, Action::Draw);
    }

    #[test]
    fn calls_uno_before_accusing() {
        let view = view(vec![Card::Skip(Color::Red)], vec![1, 1]);
        let options = [
            Action::CatchUnoFailure {
                accuser: 0,
                accused: 1,
            },
            Action::SayUno { player: 0 },
        ];
        assert_eq!(
            HeuristicBot.react(&view, &options),
            Some(Action::SayUno { player: 0 })
        );
    }
}
