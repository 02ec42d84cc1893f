//! Error types for game operations.

use thiserror::Error;

use crate::game::Action;

/// Reasons a bet is refused. Every variant leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bet source produced something that is not a whole number.
    #[error("bet is not a number")]
    NotANumber,
    /// Bet amount is zero or negative.
    #[error("bet must be positive")]
    NotPositive,
    /// Bet exceeds the chip balance.
    #[error("bet of {bet} exceeds balance of {balance}")]
    InsufficientFunds {
        /// The requested bet.
        bet: i64,
        /// The balance at the time of the bet.
        balance: i64,
    },
    /// Bet is above the table limit.
    #[error("bet of {bet} exceeds the table limit of {limit}")]
    AboveTableLimit {
        /// The requested bet.
        bet: i64,
        /// The largest accepted bet.
        limit: i64,
    },
    /// The session has run out of chips.
    #[error("no chips left to bet")]
    SessionOver,
}

/// Errors raised while a hand is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The input source answered with an option it was not offered.
    #[error("{action} is not a legal action here")]
    IllegalAction {
        /// The rejected action.
        action: Action,
    },
}

/// Errors that stop a round before settlement.
///
/// Chips only change at settlement, so an aborted round never moves the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round could not start because of its bet.
    #[error("invalid bet: {0}")]
    Bet(#[from] BetError),
    /// A collaborator broke the decision contract mid-round.
    #[error(transparent)]
    Action(#[from] ActionError),
}
