//! Text labels handed to the presentation layer.

use alloc::format;
use alloc::string::String;

use crate::hand::{DealerHand, Hand, HandState, HandValue};

/// Formats an amount of cents as dollars with two decimal places.
///
/// ```
/// use adjustable_blackjack::format_currency;
///
/// assert_eq!(format_currency(1_500), "$15.00");
/// assert_eq!(format_currency(1_001), "$10.01");
/// ```
#[must_use]
pub fn format_currency(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Formats a signed amount of cents, e.g. `-$5.00`.
#[must_use]
pub fn format_signed_currency(cents: i64) -> String {
    let amount = format_currency(cents.unsigned_abs());
    if cents < 0 {
        format!("-{amount}")
    } else {
        amount
    }
}

fn value_label(value: HandValue) -> String {
    match value.soft() {
        Some(soft) => format!("{} / {soft}", value.hard()),
        None => format!("{}", value.hard()),
    }
}

fn state_label(state: HandState, value: HandValue, bet: u64) -> String {
    let mut label = match state {
        HandState::Blackjack => String::from("BLACKJACK"),
        HandState::Bust => format!("{} (BUST)", value.hard()),
        HandState::Safe => value_label(value),
    };

    if bet > 0 {
        label.push_str(" - ");
        label.push_str(&format_currency(bet));
    }
    label
}

/// Describes a player hand: its state or totals, then the stake.
///
/// For example `BLACKJACK - $15.00`, `6 / 16 - $10.00` or `25 (BUST) - $10.00`.
#[must_use]
pub fn hand_label(hand: &Hand) -> String {
    state_label(hand.state(), hand.value(), hand.bet())
}

/// Describes the dealer hand using only its visible cards.
#[must_use]
pub fn dealer_label(dealer: &DealerHand) -> String {
    let value = dealer.value();
    let state = if dealer.is_blackjack() {
        HandState::Blackjack
    } else if dealer.is_bust() {
        HandState::Bust
    } else {
        HandState::Safe
    };
    state_label(state, value, 0)
}

/// Tells how a hand currently stands against the dealer.
///
/// Returns `" (WIN)"`, `" (LOSS)"` or `" (PUSH)"`, or an empty string once
/// the hand has busted.
#[must_use]
pub fn comparison_label(hand: &Hand, dealer: &DealerHand) -> &'static str {
    if hand.is_bust() {
        return "";
    }

    let player = hand.value().max();
    let dealer_value = dealer.value().max();

    if player == dealer_value {
        " (PUSH)"
    } else if dealer_value > 21 || player > dealer_value {
        " (WIN)"
    } else {
        " (LOSS)"
    }
}
