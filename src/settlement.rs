//! Settling player hands against the dealer.

use alloc::vec::Vec;

use crate::game::RoundOutcome;
use crate::hand::{DealerHand, Hand};
use crate::result::{HandOutcome, HandResult, RoundResult};

/// Compares one hand against the dealer.
///
/// Returns the outcome and the amount returned: twice the stake for a win,
/// the stake for a push, nothing for a loss.
#[must_use]
pub fn settle_hand(hand: &Hand, dealer: &DealerHand) -> (HandOutcome, u64) {
    if hand.is_bust() {
        return (HandOutcome::Lose, 0);
    }

    let player_value = hand.value().max();
    let dealer_value = dealer.value().max();
    let bet = hand.bet();

    if player_value == dealer_value {
        (HandOutcome::Push, bet)
    } else if dealer.is_bust() || player_value > dealer_value {
        (HandOutcome::Win, bet * 2)
    } else {
        (HandOutcome::Lose, 0)
    }
}

/// Settles every hand of a round.
///
/// A surrendered round returns nothing beyond the refund already paid.
/// `net` is everything returned (including `refund`) minus every stake.
#[must_use]
pub fn settle(
    hands: &[Hand],
    dealer: &DealerHand,
    round: RoundOutcome,
    refund: u64,
) -> RoundResult {
    let dealer_value = dealer.value().max();
    let mut results = Vec::with_capacity(hands.len());
    let mut profit: u64 = 0;
    let mut stakes: u64 = 0;

    for (hand_index, hand) in hands.iter().enumerate() {
        let bet = hand.bet();
        stakes += bet;

        let (outcome, payout) = if round.forfeited {
            (HandOutcome::Surrendered, 0)
        } else {
            settle_hand(hand, dealer)
        };
        profit += payout;

        results.push(HandResult {
            hand_index,
            outcome,
            bet,
            payout,
            player_value: hand.value().max(),
            dealer_value,
        });
    }

    #[expect(clippy::cast_possible_wrap, reason = "cent amounts fit in i64")]
    let net = (profit + refund) as i64 - stakes as i64;

    RoundResult {
        hands: results,
        profit,
        refund,
        stakes,
        net,
        dealer_value,
        dealer_bust: dealer.is_bust(),
    }
}
