//! Collaborators the engine talks to: where decisions and bets come from, and
//! where the table is shown.

use alloc::string::String;

use crate::card::Card;
use crate::game::Action;

/// Answers the player's decisions.
pub trait InputSource {
    /// Blocks until the player picks one of `legal`.
    ///
    /// Returning an action outside `legal` breaks the contract; the engine
    /// rejects it and aborts the round.
    fn request_decision(&mut self, prompt: &str, legal: &[Action]) -> Action;
}

/// Receives everything the player should see.
pub trait Display {
    /// Appends one line to the game log.
    fn append(&mut self, line: &str);

    /// Shows a hand, optionally with its first card face down.
    fn render_hand(&mut self, title: &str, cards: &[Card], hide_first: bool);

    /// Shows the current chip balance.
    fn show_chip_balance(&mut self, chips: i64);
}

/// Supplies the bet for each round.
pub trait BetSource {
    /// Returns the raw bet text, or `None` when the player is done.
    fn bet_amount(&mut self) -> Option<String>;
}

/// A display that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn append(&mut self, _line: &str) {}

    fn render_hand(&mut self, _title: &str, _cards: &[Card], _hide_first: bool) {}

    fn show_chip_balance(&mut self, _chips: i64) {}
}
