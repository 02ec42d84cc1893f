use alloc::string::String;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{BLACKJACK, Hand};
use crate::result::HandOutcome;
use crate::table::{Display, InputSource};

use super::{Action, HandState, LegalActions, Session};

/// How a finished hand gets paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Paid during the turn (natural or bust); the dealer cannot change it.
    Paid {
        /// The fixed outcome.
        outcome: HandOutcome,
        /// Signed chip change.
        payout: i64,
    },
    /// Stood or doubled; compared with the dealer at settlement.
    AgainstDealer,
}

/// A hand that reached a terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedHand {
    /// `Player`, or `Hand 1` / `Hand 2` after a split.
    pub title: String,
    /// The final cards and bet.
    pub hand: Hand,
    /// The terminal state the hand stopped in.
    pub state: HandState,
    /// Whether the payout is already fixed.
    pub resolution: Resolution,
}

/// What the turn engine hands back for one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The hand is done.
    Finished(PlayedHand),
    /// The player split the pair; each card starts a new hand with `bet`.
    Split {
        /// Card for the first new hand.
        first: Card,
        /// Card for the second new hand.
        second: Card,
        /// Bet copied onto each new hand.
        bet: i64,
    },
}

impl Session {
    /// Draws one card, telling the display when the shoe had to be rebuilt.
    pub(super) fn draw<D: Display + ?Sized>(&mut self, display: &mut D) -> Card {
        let draw = self.shoe.draw();
        if draw.reshuffled {
            display.append("Shuffling new shoe…");
        }
        draw.card
    }

    /// Runs one hand from its dealt cards to a terminal state.
    ///
    /// A natural pays 3:2 straight away. Otherwise the input source is asked for
    /// a decision until the hand stands, doubles, busts or reaches 21, or the
    /// player splits the pair.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IllegalAction`] if the input source picks an
    /// action that was not offered.
    pub(super) fn play_hand<I, D>(
        &mut self,
        mut hand: Hand,
        title: &str,
        input: &mut I,
        display: &mut D,
    ) -> Result<TurnOutcome, ActionError>
    where
        I: InputSource + ?Sized,
        D: Display + ?Sized,
    {
        display.render_hand(title, hand.cards(), false);

        let mut state = HandState::Dealt;
        if hand.is_natural() {
            display.append(&alloc::format!("{title}: BLACKJACK!"));
            // 3:2, rounded down
            let payout = hand.bet() + hand.bet() / 2;
            return Ok(finished(title, hand, HandState::Blackjack, Resolution::Paid {
                outcome: HandOutcome::Blackjack,
                payout,
            }));
        }

        while !state.is_terminal() {
            state = HandState::Deciding;

            let legal = LegalActions::for_hand(&hand, self.chips);
            let action = input.request_decision(&legal.prompt(title), legal.as_slice());
            if !legal.contains(action) {
                log::error!("{title}: input source chose {action}, offered {legal:?}");
                return Err(ActionError::IllegalAction { action });
            }
            log::debug!("{title}: {action} on {}", hand.value());

            match action {
                Action::Hit => {
                    hand.add_card(self.draw(display));
                    display.render_hand(title, hand.cards(), false);
                    if hand.is_bust() {
                        state = HandState::Busted;
                    } else if hand.value() == BLACKJACK {
                        state = HandState::Stood;
                    }
                }
                Action::Stand => state = HandState::Stood,
                Action::Double => {
                    hand.double_bet();
                    hand.add_card(self.draw(display));
                    display.render_hand(title, hand.cards(), false);
                    display.append(&alloc::format!(
                        "{title}: doubled → {} (value {})",
                        cards_text(hand.cards()),
                        hand.value()
                    ));
                    state = if hand.is_bust() {
                        HandState::Busted
                    } else {
                        HandState::Doubled
                    };
                }
                Action::Split => {
                    let &[first, second] = hand.cards() else {
                        return Err(ActionError::IllegalAction { action });
                    };
                    return Ok(TurnOutcome::Split {
                        first,
                        second,
                        bet: hand.bet(),
                    });
                }
            }
        }

        if state == HandState::Busted {
            display.append(&alloc::format!("{title}: BUST"));
            let payout = -hand.bet();
            return Ok(finished(title, hand, state, Resolution::Paid {
                outcome: HandOutcome::Bust,
                payout,
            }));
        }
        Ok(finished(title, hand, state, Resolution::AgainstDealer))
    }
}

fn finished(title: &str, hand: Hand, state: HandState, resolution: Resolution) -> TurnOutcome {
    TurnOutcome::Finished(PlayedHand {
        title: title.into(),
        hand,
        state,
        resolution,
    })
}

/// Space-separated card labels, e.g. `10H 8S`.
pub(crate) fn cards_text(cards: &[Card]) -> String {
    let mut text = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(&alloc::format!("{card}"));
    }
    text
}
