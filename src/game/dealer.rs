use alloc::vec::Vec;

use crate::hand::DealerHand;
use crate::result::{HandOutcome, HandResult};
use crate::table::Display;

use super::Session;
use super::turn::{PlayedHand, Resolution, cards_text};

/// The dealer draws below this total and stands at or above it, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl Session {
    /// Dealer plays their hand.
    ///
    /// The hole card is revealed and the dealer draws until the total is 17 or
    /// more. There is no soft-17 exception. The dealer plays even when every
    /// player hand is already settled.
    pub(super) fn dealer_play<D: Display + ?Sized>(
        &mut self,
        dealer: &mut DealerHand,
        display: &mut D,
    ) {
        dealer.reveal_hole();
        display.render_hand("Dealer", dealer.cards(), !dealer.is_hole_revealed());

        while dealer.value() < DEALER_STANDS_ON {
            let card = self.draw(display);
            dealer.add_card(card);
            log::debug!("dealer draws {card}, now {}", dealer.value());
            display.render_hand("Dealer", dealer.cards(), !dealer.is_hole_revealed());
        }

        display.append(&alloc::format!(
            "Dealer: {} (value {})",
            cards_text(dealer.cards()),
            dealer.value()
        ));
    }
}

/// Settles every played hand against the dealer's final hand.
///
/// Naturals and busts keep the payout fixed during the turn. Other hands win
/// their bet if the dealer busted or they finished higher, lose it if they
/// finished lower, and push on a tie.
pub(super) fn settle(played: Vec<PlayedHand>, dealer: &DealerHand) -> Vec<HandResult> {
    let dealer_value = dealer.value();
    let dealer_bust = dealer.is_bust();

    played
        .into_iter()
        .map(|hand| {
            let bet = hand.hand.bet();
            let player_value = hand.hand.value();

            let (outcome, payout) = match hand.resolution {
                Resolution::Paid { outcome, payout } => (outcome, payout),
                Resolution::AgainstDealer => {
                    if dealer_bust || player_value > dealer_value {
                        (HandOutcome::Win, bet)
                    } else if player_value < dealer_value {
                        (HandOutcome::Lose, -bet)
                    } else {
                        (HandOutcome::Push, 0)
                    }
                }
            };

            HandResult {
                title: hand.title,
                outcome,
                bet,
                payout,
                player_value,
            }
        })
        .collect()
}
