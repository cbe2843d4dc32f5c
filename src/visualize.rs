use std::fmt::Write;

use crate::action::Action;
use crate::hand::Direction;
use crate::state::HandView;

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_opponent_counts: bool,
    pub show_pile_sizes: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_opponent_counts: true,
            show_pile_sizes: true,
        }
    }
}

pub fn render_view(view: &HandView) -> String {
    render_view_with_options(view, VisualOptions::default())
}

pub fn render_view_with_options(view: &HandView, options: VisualOptions) -> String {
    let mut out = String::new();
    let turn = match view.player_in_turn {
        Some(player) if player == view.self_player => format!("Player {player} (You)"),
        Some(player) => format!("Player {player}"),
        None => String::from("hand over"),
    };
    let _ = writeln!(out, "In turn: {turn}");
    let color = view
        .current_color
        .map(|color| color.to_string())
        .unwrap_or_else(|| String::from("any"));
    let _ = writeln!(out, "Top card: {}  |  Color: {color}", view.top_card);
    let direction = match view.direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    };
    let _ = writeln!(out, "Direction: {direction}");
    if options.show_pile_sizes {
        let _ = writeln!(
            out,
            "Draw pile: {}  |  Discard pile: {}",
            view.draw_pile_count, view.discard_pile_count
        );
    }
    if options.show_opponent_counts {
        let _ = writeln!(out, "Players:");
        for (player, size) in view.hand_sizes.iter().enumerate() {
            let label_you = if player == view.self_player { " (You)" } else { "" };
            let uno = if view.uno_called.get(player).copied().unwrap_or(false) {
                "  UNO!"
            } else {
                ""
            };
            let _ = writeln!(out, "  Player {player}{label_you} - {size} cards{uno}");
        }
    }
    if view.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = view
            .hand
            .iter()
            .enumerate()
            .map(|(idx, card)| format!("{idx}:{card}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Hand: {entries}");
    }
    out
}

/// Human readable description of an action from the observer's seat.
pub fn describe_action(view: &HandView, action: &Action) -> String {
    match action {
        Action::Play {
            card_index,
            chosen_color,
        } => {
            let card = view
                .hand
                .get(*card_index)
                .map(|card| card.to_string())
                .unwrap_or_else(|| format!("card #{card_index}"));
            match chosen_color {
                Some(color) => format!("Play {card} and choose {color}"),
                None => format!("Play {card}"),
            }
        }
        Action::Draw => String::from("Draw a card"),
        Action::Pass => String::from("Pass"),
        Action::SayUno { .. } => String::from("Call UNO"),
        Action::CatchUnoFailure { accused, .. } => {
            format!("Catch player {accused} for not calling UNO")
        }
    }
}
