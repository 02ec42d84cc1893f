//! A single-player blackjack engine played against an automated dealer.
//!
//! A [`Session`] owns the chip balance and the six-deck [`Shoe`] and plays one
//! round at a time. Decisions come from an [`InputSource`], bets from a
//! [`BetSource`], and everything the player should see goes to a [`Display`].
//!
//! # Example
//!
//! ```
//! use asciijack::{Action, InputSource, NullDisplay, Session, SessionOptions};
//!
//! struct AlwaysStand;
//!
//! impl InputSource for AlwaysStand {
//!     fn request_decision(&mut self, _prompt: &str, _legal: &[Action]) -> Action {
//!         Action::Stand
//!     }
//! }
//!
//! let mut session = Session::new(SessionOptions::default().with_seed(42));
//! let result = session.play_round(100, &mut AlwaysStand, &mut NullDisplay).unwrap();
//! assert_eq!(session.chips(), 10_000 + result.net);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, RoundError};
pub use game::{
    Action, DEALER_STANDS_ON, HandState, LegalActions, MAX_BET, PlayedHand, Resolution, Session,
    TurnOutcome, parse_bet, validate_bet,
};
pub use hand::{BLACKJACK, DealerHand, Hand, evaluate};
pub use options::{STARTING_CHIPS, SessionOptions};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::{DECKS, Draw, RESHUFFLE_THRESHOLD, SHOE_SIZE, Shoe};
pub use table::{BetSource, Display, InputSource, NullDisplay};
