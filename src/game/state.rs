//! Hand state types.

/// Where a single player hand is in its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandState {
    /// Cards are on the table but the hand has not been checked yet.
    Dealt,
    /// Waiting for the player's decisions.
    Deciding,
    /// Over 21; the bet is lost.
    Busted,
    /// Player stood, or hit to exactly 21.
    Stood,
    /// Player doubled and took their single card.
    Doubled,
    /// Natural 21 on the first two cards.
    Blackjack,
}

impl HandState {
    /// Returns whether the hand is finished and takes no more decisions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Busted | Self::Stood | Self::Doubled | Self::Blackjack
        )
    }
}
