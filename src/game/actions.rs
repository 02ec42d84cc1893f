//! Player actions and the rules for when each one is allowed.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::hand::Hand;

/// A decision the player can make on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the hand as it is.
    Stand,
    /// Double the bet, take exactly one card, then stop.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// The key that selects this action.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Hit => 'h',
            Self::Stand => 's',
            Self::Double => 'd',
            Self::Split => 'p',
        }
    }

    /// Maps a key press back to an action.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'h' => Some(Self::Hit),
            's' => Some(Self::Stand),
            'd' => Some(Self::Double),
            'p' => Some(Self::Split),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
        };
        f.write_str(name)
    }
}

/// The set of actions offered for one decision, in prompt order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalActions(Vec<Action>);

impl LegalActions {
    /// Works out which actions are open on `hand` given the round-start `balance`.
    ///
    /// Hit and stand are always open. Double needs exactly two cards and enough
    /// chips to cover the bet again. Split needs a dealt pair and the same funds.
    /// Hands that came from a split only ever get hit and stand.
    #[must_use]
    pub fn for_hand(hand: &Hand, balance: i64) -> Self {
        let mut actions = alloc::vec![Action::Hit, Action::Stand];
        if hand.is_from_split() {
            return Self(actions);
        }

        let covers_bet = balance >= hand.bet();
        if hand.len() == 2 && covers_bet {
            actions.push(Action::Double);
        }
        if hand.is_pair() && covers_bet {
            actions.push(Action::Split);
        }
        Self(actions)
    }

    /// Returns whether `action` is in the set.
    #[must_use]
    pub fn contains(&self, action: Action) -> bool {
        self.0.contains(&action)
    }

    /// Returns the actions as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Action] {
        &self.0
    }

    /// Builds the prompt shown for this decision.
    ///
    /// `Player: Hit or stand? ` when only those two are legal, otherwise the
    /// keys are listed, e.g. `Player: Hit or stand (h/s/d)? `.
    #[must_use]
    pub fn prompt(&self, title: &str) -> String {
        if self.0.len() <= 2 {
            return alloc::format!("{title}: Hit or stand? ");
        }
        let keys: Vec<String> = self.0.iter().map(|a| a.key().into()).collect();
        alloc::format!("{title}: Hit or stand ({})? ", keys.join("/"))
    }
}
