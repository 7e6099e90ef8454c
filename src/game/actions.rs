use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::ActionError;

use super::{Action, Game, GameState};

impl Game {
    /// Returns the actions the player may take right now.
    ///
    /// On the first turn of a fresh hand the set is hit and stand, plus
    /// split (splitting enabled and a same-rank pair), double (doubling
    /// enabled and the balance covers the bet) and forfeit (surrendering
    /// enabled). Later turns only allow hit and stand. A split offer only
    /// allows split and stand. Outside the player turn the set is empty.
    pub fn legal_actions(&self) -> Vec<Action> {
        let Some(hand) = self.current_hand() else {
            return Vec::new();
        };

        if self.state == GameState::SplitOffer {
            return alloc::vec![Action::Split, Action::Stand];
        }

        let mut actions = alloc::vec![Action::Hit, Action::Stand];
        if self.turn.turn == 1 {
            if self.settings.splitting() && hand.is_pair() {
                actions.push(Action::Split);
            }
            if self.settings.doubling() && self.balance >= hand.bet() {
                actions.push(Action::Double);
            }
            if self.settings.surrendering() {
                actions.push(Action::Forfeit);
            }
        }
        actions
    }

    /// Performs any legal action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not legal right now; the game is
    /// left untouched in that case.
    pub fn act(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Hit => self.hit().map(|_| ()),
            Action::Stand => self.stand(),
            Action::Double => self.double_down().map(|_| ()),
            Action::Split => self.split(),
            Action::Forfeit => self.surrender().map(|_| ()),
        }
    }

    fn ensure_legal(&self, action: Action) -> Result<(), ActionError> {
        if !matches!(self.state, GameState::PlayerTurn | GameState::SplitOffer) {
            return Err(ActionError::InvalidState);
        }

        if self.legal_actions().contains(&action) {
            return Ok(());
        }

        warn!(?action, state = ?self.state, "illegal action rejected");
        let error = match (self.state, action) {
            (GameState::PlayerTurn, Action::Double) => {
                let short = self
                    .current_hand()
                    .is_some_and(|hand| self.balance < hand.bet());
                if self.settings.doubling() && self.turn.turn == 1 && short {
                    ActionError::InsufficientFunds
                } else {
                    ActionError::CannotDouble
                }
            }
            (GameState::PlayerTurn, Action::Split) => ActionError::CannotSplit,
            (GameState::PlayerTurn, Action::Forfeit) => ActionError::CannotSurrender,
            _ => ActionError::IllegalAction(action),
        };
        Err(error)
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if hitting is not legal right now.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_legal(Action::Hit)?;

        let card = self.draw(false);
        let index = self.turn.hand_index;
        let hand = &mut self.hands[index];
        hand.add_card(card);
        debug!(%card, hand = index, value = hand.value().min(), "hit");

        if hand.is_bust() {
            self.outcome.busted = true;
            self.finish_player_turn();
        } else {
            self.turn.turn += 1;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Also declines a split offer.
    ///
    /// # Errors
    ///
    /// Returns an error if standing is not legal right now.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_legal(Action::Stand)?;

        debug!(hand = self.turn.hand_index, "stand");
        self.advance();
        Ok(())
    }

    /// Player action: Double down (double bet, receive exactly one card).
    ///
    /// Returns the card dealt to the doubled hand.
    ///
    /// # Errors
    ///
    /// Returns an error if doubling is disabled, it is not the first turn,
    /// or the balance does not cover the bet.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_legal(Action::Double)?;

        let index = self.turn.hand_index;
        let hand = &mut self.hands[index];
        self.balance -= hand.bet();
        hand.double_down();
        self.outcome.doubled = true;
        debug!(hand = index, bet = hand.bet(), balance = self.balance, "double down");

        self.resolve_current();

        Ok(self.hands[index].cards()[0])
    }

    /// Player action: Split a pair into two hands.
    ///
    /// Also accepts a split offer on a split hand that drew another pair.
    /// The stake is divided between the two hands, nothing more is debited.
    ///
    /// # Errors
    ///
    /// Returns an error if splitting is disabled or the hand is not a pair.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_legal(Action::Split)?;

        let index = self.turn.hand_index;
        let new_hand = self.hands[index]
            .split()
            .ok_or(ActionError::CannotSplit)?;
        debug!(
            hand = index,
            kept = self.hands[index].bet(),
            moved = new_hand.bet(),
            "split"
        );
        self.hands.push(new_hand);

        self.resolve_current();
        Ok(())
    }

    /// Player action: Surrender (forfeit the round for half the bet).
    ///
    /// Returns the refund credited to the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if surrendering is disabled or it is not the first turn.
    pub fn surrender(&mut self) -> Result<u64, ActionError> {
        self.ensure_legal(Action::Forfeit)?;

        let refund = self.round_bet / 2;
        self.balance += refund;
        self.refund = refund;
        self.outcome.forfeited = true;
        debug!(refund, balance = self.balance, "surrender");

        self.finish_player_turn();
        Ok(refund)
    }

    /// Completes the current hand and moves to the next one.
    fn advance(&mut self) {
        self.turn.hand_index += 1;
        self.turn.turn = 1;
        self.resolve_current();
    }

    /// Deals the forced card to split and doubled hands until a hand needs
    /// a decision or no hands are left.
    ///
    /// A split or doubled hand receives exactly one more card and is then
    /// complete, unless a split hand drew another pair and re-splitting is
    /// allowed, in which case the player is offered split or stand.
    fn resolve_current(&mut self) {
        loop {
            if !self.outcome.needs_dealer() {
                self.finish_player_turn();
                return;
            }

            let index = self.turn.hand_index;
            let Some(hand) = self.hands.get(index) else {
                self.finish_player_turn();
                return;
            };

            if !hand.is_split() && !hand.is_doubled() {
                self.state = GameState::PlayerTurn;
                return;
            }

            let card = self.draw(false);
            let hand = &mut self.hands[index];
            hand.add_card(card);
            debug!(%card, hand = index, "forced card");

            if hand.is_bust() {
                self.outcome.busted = true;
                continue;
            }

            if hand.is_split()
                && hand.is_pair()
                && self.settings.splitting()
                && self.settings.resplitting()
            {
                self.state = GameState::SplitOffer;
                return;
            }

            self.turn.hand_index += 1;
            self.turn.turn = 1;
        }
    }

    fn finish_player_turn(&mut self) {
        self.state = GameState::DealerTurn;
    }
}
