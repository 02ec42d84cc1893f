//! Round result types for settlement.

use alloc::string::String;
use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Natural 21, paid 3:2 before the dealer plays.
    Blackjack,
    /// Player went over 21.
    Bust,
    /// Dealer busted or the player finished higher.
    Win,
    /// Dealer finished higher.
    Lose,
    /// Tie; the bet comes back.
    Push,
}

impl HandOutcome {
    /// Short label used in result lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blackjack => "BLACKJACK",
            Self::Bust => "BUST",
            Self::Win => "WIN",
            Self::Lose => "LOSE",
            Self::Push => "PUSH",
        }
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// `Player`, or `Hand 1` / `Hand 2` after a split.
    pub title: String,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The final bet on the hand, including any double.
    pub bet: i64,
    /// Signed chip change for this hand.
    pub payout: i64,
    /// The player's hand value.
    pub player_value: u8,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand in play order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Sum of all hand payouts.
    pub net: i64,
    /// Chip balance after the net was applied.
    pub balance: i64,
}
