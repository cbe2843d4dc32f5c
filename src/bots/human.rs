use std::io::{self, Write};

use crate::action::Action;
use crate::bot::Bot;
use crate::state::HandView;
use crate::visualize::{describe_action, render_view};

/// Interactive bot that queries a human via standard input.
pub struct HumanBot {
    name: String,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn prompt(&self, view: &HandView, options: &[Action], allow_skip: bool) -> Option<Action> {
        loop {
            println!("\n=== {} (player {}) ===", self.name, view.self_player);
            println!("{}", render_view(view));
            println!("Available actions:");
            for (index, action) in options.iter().enumerate() {
                println!("  [{index}] {}", describe_action(view, action));
            }
            if allow_skip {
                println!("Press enter to do nothing.");
            }
            println!("Type the action index, 'help' or 'q' to quit.");
            print!("Selection: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("Enter the numeric index listed next to the action you wish to perform.");
                println!("Wild cards are listed once per color you may choose.");
                continue;
            }
            if allow_skip && trimmed.is_empty() {
                return None;
            }
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            if let Some(action) = options.get(choice) {
                println!("You selected: {}", describe_action(view, action));
                return Some(*action);
            }
            println!("Index out of range. Please choose a valid option.");
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Bot for HumanBot {
    fn select_action(&mut self, view: &HandView, legal_actions: &[Action]) -> Action {
        self.prompt(view, legal_actions, false)
            .unwrap_or(Action::Pass)
    }

    fn react(&mut self, view: &HandView, options: &[Action]) -> Option<Action> {
        if options.is_empty() {
            return None;
        }
        self.prompt(view, options, true)
    }
}
