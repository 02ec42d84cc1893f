//! Session configuration options.

/// Chips a new session starts with.
pub const STARTING_CHIPS: i64 = 10_000;

/// Configuration options for a blackjack session.
///
/// Table rules are fixed (six decks, dealer stands on 17, blackjack pays 3:2);
/// only the bankroll and the shuffle seed can be chosen.
///
/// ```
/// use asciijack::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_chips(500)
///     .with_seed(7);
/// assert_eq!(options.starting_chips, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Chip balance at the start of the session.
    pub starting_chips: i64,
    /// Seed for the shoe's shuffles.
    pub seed: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            seed: 0,
        }
    }
}

impl SessionOptions {
    /// Sets the starting chip balance.
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: i64) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the shuffle seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
