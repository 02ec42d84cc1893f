//! Session state and round flow.

use alloc::vec::Vec;

use crate::error::{ActionError, BetError, RoundError};
use crate::hand::{DealerHand, Hand};
use crate::options::SessionOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::table::{BetSource, Display, InputSource};

mod actions;
mod bet;
mod dealer;
pub mod state;
mod turn;

pub use actions::{Action, LegalActions};
pub use bet::{MAX_BET, parse_bet, validate_bet};
pub use dealer::DEALER_STANDS_ON;
pub use state::HandState;
pub use turn::{PlayedHand, Resolution, TurnOutcome};

/// A blackjack session: the chip balance and the shoe, kept between rounds.
///
/// Rounds run one at a time through [`Session::play_round`]. The balance only
/// changes when a round settles, so a round that fails part way leaves it as
/// it was.
#[derive(Debug, Clone)]
pub struct Session {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Current chip balance.
    chips: i64,
    /// Number of settled rounds.
    rounds: u64,
}

impl Session {
    /// Creates a new session with an empty shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use asciijack::{Session, SessionOptions};
    ///
    /// let session = Session::new(SessionOptions::default().with_seed(42));
    /// assert_eq!(session.chips(), 10_000);
    /// assert_eq!(session.shoe().remaining(), 0);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self {
            shoe: Shoe::new(options.seed),
            chips: options.starting_chips,
            rounds: 0,
        }
    }

    /// Returns the current chip balance.
    #[must_use]
    pub const fn chips(&self) -> i64 {
        self.chips
    }

    /// Returns the number of rounds settled so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u64 {
        self.rounds
    }

    /// Returns whether the session is out of chips. No more rounds can start.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.chips <= 0
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to stack known cards.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Plays one full round with the given bet.
    ///
    /// Deals two cards to the player and two to the dealer (player, player,
    /// dealer, dealer), runs each player hand to completion, plays the dealer,
    /// settles every hand and applies the net to the balance.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Bet`] without touching anything if the bet is not
    /// positive, exceeds the balance or [`MAX_BET`], or the session is over. Returns
    /// [`RoundError::Action`] if the input source breaks its contract; the
    /// round is abandoned and the balance is left unchanged.
    pub fn play_round<I, D>(
        &mut self,
        bet: i64,
        input: &mut I,
        display: &mut D,
    ) -> Result<RoundResult, RoundError>
    where
        I: InputSource + ?Sized,
        D: Display + ?Sized,
    {
        if self.is_over() {
            return Err(BetError::SessionOver.into());
        }
        let bet = validate_bet(bet, self.chips).inspect_err(|err| {
            log::warn!("round refused: {err}");
        })?;
        log::debug!("round {} starts with bet {bet}", self.rounds + 1);

        let mut hand = Hand::new(bet);
        let mut dealer = DealerHand::new();
        hand.add_card(self.draw(display));
        hand.add_card(self.draw(display));
        dealer.add_card(self.draw(display));
        dealer.add_card(self.draw(display));
        display.render_hand("Dealer", dealer.cards(), !dealer.is_hole_revealed());

        let mut played = Vec::with_capacity(2);
        match self.play_hand(hand, "Player", input, display)? {
            TurnOutcome::Finished(hand) => played.push(hand),
            TurnOutcome::Split { first, second, bet } => {
                let mut hands = [Hand::from_split(first, bet), Hand::from_split(second, bet)];
                for hand in &mut hands {
                    hand.add_card(self.draw(display));
                }
                for (index, hand) in hands.into_iter().enumerate() {
                    let title = alloc::format!("Hand {}", index + 1);
                    match self.play_hand(hand, &title, input, display)? {
                        TurnOutcome::Finished(hand) => played.push(hand),
                        TurnOutcome::Split { .. } => {
                            return Err(ActionError::IllegalAction {
                                action: Action::Split,
                            }
                            .into());
                        }
                    }
                }
            }
        }

        self.dealer_play(&mut dealer, display);
        let hands = dealer::settle(played, &dealer);

        let net: i64 = hands.iter().map(|h| h.payout).sum();
        self.chips = self.chips.saturating_add(net);
        self.rounds += 1;

        for hand in &hands {
            display.append(&alloc::format!(
                "{}: {} ({:+})",
                hand.title,
                hand.outcome.label(),
                hand.payout
            ));
        }
        display.append(&alloc::format!("Net {net:+}, chips {}", self.chips));
        display.show_chip_balance(self.chips);
        log::info!(
            "round {} settled: net {net:+}, balance {}",
            self.rounds,
            self.chips
        );

        Ok(RoundResult {
            hands,
            dealer_value: dealer.value(),
            dealer_bust: dealer.is_bust(),
            net,
            balance: self.chips,
        })
    }

    /// Plays rounds until the chips run out or the bet source closes.
    ///
    /// An invalid bet is reported to the display and the bet source is asked
    /// again. Returns the results of every settled round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Action`] if the input source breaks its contract.
    pub fn run<B, I, D>(
        &mut self,
        bets: &mut B,
        input: &mut I,
        display: &mut D,
    ) -> Result<Vec<RoundResult>, RoundError>
    where
        B: BetSource + ?Sized,
        I: InputSource + ?Sized,
        D: Display + ?Sized,
    {
        let mut results = Vec::new();
        display.show_chip_balance(self.chips);

        while !self.is_over() {
            let Some(raw) = bets.bet_amount() else {
                break;
            };
            let bet = match parse_bet(&raw, self.chips) {
                Ok(bet) => bet,
                Err(err) => {
                    log::warn!("bet {raw:?} refused: {err}");
                    display.append(&alloc::format!("Invalid bet: {err}"));
                    continue;
                }
            };

            results.push(self.play_round(bet, input, display)?);
        }

        if self.is_over() {
            display.append("Out of chips. Game over.");
        }
        Ok(results)
    }
}
