use tracing::debug;

use crate::error::BetError;
use crate::hand::Hand;

use super::{Game, GameState};

impl Game {
    /// Places a bet in cents and deals the opening cards.
    ///
    /// The player and dealer each get two cards, alternating, with the
    /// dealer's second card face down. A natural blackjack ends the player
    /// turn straight away.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the balance is
    /// exhausted, the bet is zero, or the bet exceeds the balance. Nothing is
    /// debited in that case.
    pub fn bet(&mut self, amount: u64) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if self.balance == 0 {
            return Err(BetError::Bankrupt);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.clear_round();
        self.balance -= amount;
        self.round_bet = amount;
        debug!(amount, balance = self.balance, "bet placed");

        self.deal(amount);
        Ok(())
    }

    fn deal(&mut self, amount: u64) {
        let mut hand = Hand::new(amount);

        hand.add_card(self.draw(false));
        let up = self.draw(false);
        self.dealer_hand.add_card(up);
        hand.add_card(self.draw(false));
        let hole = self.draw(true);
        self.dealer_hand.add_card(hole);

        let natural = hand.is_blackjack();
        self.hands.push(hand);

        if natural {
            debug!("player natural");
            self.state = GameState::DealerTurn;
        } else {
            self.state = GameState::PlayerTurn;
        }
    }
}
