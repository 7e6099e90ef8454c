use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::HandValue;
use crate::result::RoundResult;
use crate::settlement::settle;

use super::{Game, GameState};

/// Returns whether a dealer holding `value` must draw another card.
///
/// With `soft_17_hit` the dealer hits while the hard total is under 17 and
/// the best total is under 18, so a soft 17 draws but a hard 17 stands.
/// Without it the dealer stands on any 17.
///
/// ```
/// use adjustable_blackjack::{Card, DealerHand, Suit, dealer_must_hit};
///
/// let soft_17 = DealerHand::from_cards(&[Card::new(Suit::Spades, 6), Card::new(Suit::Hearts, 1)]);
/// assert!(dealer_must_hit(soft_17.value(), true));
/// assert!(!dealer_must_hit(soft_17.value(), false));
///
/// let hard_17 = DealerHand::from_cards(&[Card::new(Suit::Spades, 10), Card::new(Suit::Hearts, 7)]);
/// assert!(!dealer_must_hit(hard_17.value(), true));
/// ```
#[must_use]
pub const fn dealer_must_hit(value: HandValue, soft_17_hit: bool) -> bool {
    if soft_17_hit {
        value.min() < 17 && value.max() < 18
    } else {
        value.max() < 17
    }
}

impl Game {
    /// Returns whether the player finished on an unsplit natural.
    fn player_natural(&self) -> bool {
        matches!(self.hands.as_slice(), [hand] if !hand.is_split() && hand.is_blackjack())
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The hole card is always revealed. The dealer only draws when the
    /// player neither busted nor surrendered and is not sitting on a natural,
    /// and then keeps drawing while [`dealer_must_hit`] holds.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_hand.reveal_hole();
        let mut drawn_cards = Vec::new();

        if self.outcome.needs_dealer() && !self.player_natural() {
            let soft_17_hit = self.settings.soft_17_hit();
            while dealer_must_hit(self.dealer_hand.value(), soft_17_hit) {
                let card = self.draw(false);
                self.dealer_hand.add_card(card);
                debug!(%card, value = self.dealer_hand.value().max(), "dealer draws");
                drawn_cards.push(card);
            }
        }

        self.state = GameState::RoundOver;
        Ok(drawn_cards)
    }

    /// Settles the round and credits the returns to the balance.
    ///
    /// Stakes were debited when betting and doubling, so only the returns
    /// are credited here. The game goes back to betting; the hands stay
    /// visible until the next bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let result = settle(&self.hands, &self.dealer_hand, self.outcome, self.refund);
        self.balance += result.profit;
        self.state = GameState::Betting;

        info!(
            profit = result.profit,
            net = result.net,
            balance = self.balance,
            "round settled"
        );

        Ok(result)
    }
}
