//! The multi-deck shoe cards are drawn from.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, push_deck};

/// Number of decks in the shoe.
pub const DECKS: usize = 6;

/// Number of cards in a freshly shuffled shoe.
pub const SHOE_SIZE: usize = DECKS * DECK_SIZE;

/// The shoe is rebuilt before a draw once fewer than this many cards remain.
pub const RESHUFFLE_THRESHOLD: usize = 20;

/// A card taken from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The drawn card.
    pub card: Card,
    /// Whether the shoe was rebuilt and shuffled right before this draw.
    pub reshuffled: bool,
}

/// A six-deck shoe.
///
/// The shoe starts empty, so the very first draw shuffles it. Cards are taken
/// from the end of the internal vector, which is the top of the shoe.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates an empty shoe whose shuffles are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the contents with six full decks in random order.
    pub fn shuffle(&mut self) {
        self.cards.clear();
        self.cards.reserve(SHOE_SIZE);
        for _ in 0..DECKS {
            push_deck(&mut self.cards);
        }
        self.cards.shuffle(&mut self.rng);
        log::info!("shuffled a new shoe of {} cards", self.cards.len());
    }

    /// Draws the top card, rebuilding the shoe first if it is running low.
    pub fn draw(&mut self) -> Draw {
        let reshuffled = self.cards.len() < RESHUFFLE_THRESHOLD;
        if reshuffled {
            self.shuffle();
        }

        let card = self
            .cards
            .pop()
            .expect("a reshuffled shoe holds SHOE_SIZE cards");
        log::debug!("drew {card} ({} left)", self.cards.len());

        Draw { card, reshuffled }
    }

    /// Preloads the shoe so that `draws` come out in the given order.
    ///
    /// Any cards already in the shoe stay underneath the stacked ones.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards.extend(draws.iter().rev());
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the cards left in the shoe, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
