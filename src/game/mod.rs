//! Game engine and session state.

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::SettingsError;
use crate::hand::{DealerHand, Hand};
use crate::settings::{RuleKey, SettingValue, Settings};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod round;
pub mod state;

pub use dealer::dealer_must_hit;
pub use round::Player;
pub use state::{Action, GameState, RoundOutcome, TurnPosition};

/// Balance a new session starts with, in cents ($1000.00).
pub const DEFAULT_BALANCE: u64 = 100_000;

/// A single-player blackjack session.
///
/// The game owns the shoe, the house rules, the player's balance and the
/// hands of the round in progress. Every operation takes `&mut self`; there
/// is exactly one actor.
#[derive(Debug, Clone)]
pub struct Game {
    /// House rules.
    settings: Settings,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Player balance in cents.
    balance: u64,
    /// Balance restored by [`Game::restart`].
    starting_balance: u64,
    /// Current game state.
    state: GameState,
    /// Current turn position.
    turn: TurnPosition,
    /// Player hands (more than one after a split).
    hands: Vec<Hand>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Stake placed at the start of the round.
    round_bet: u64,
    /// Amount returned by a surrender this round.
    refund: u64,
    /// How the player's turn ended.
    outcome: RoundOutcome,
}

impl Game {
    /// Creates a new game with the given seed and the default balance.
    ///
    /// # Example
    ///
    /// ```
    /// use adjustable_blackjack::{Game, GameState, Settings};
    ///
    /// let game = Game::new(Settings::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.balance(), 100_000);
    /// ```
    #[must_use]
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self::with_balance(settings, seed, DEFAULT_BALANCE)
    }

    /// Creates a new game with a custom starting balance in cents.
    #[must_use]
    pub fn with_balance(settings: Settings, seed: u64, balance: u64) -> Self {
        let shoe = Shoe::new(settings.deck_count(), settings.true_random(), seed);

        Self {
            settings,
            shoe,
            balance,
            starting_balance: balance,
            state: GameState::Betting,
            turn: TurnPosition::START,
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            round_bet: 0,
            refund: 0,
            outcome: RoundOutcome::default(),
        }
    }

    /// Returns the house rules.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Changes a house rule between rounds.
    ///
    /// Changing the deck count or the true-random rule reshuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the value is rejected
    /// by the rule.
    pub fn change_setting(&mut self, key: RuleKey, value: SettingValue) -> Result<(), SettingsError> {
        if self.state != GameState::Betting {
            return Err(SettingsError::RoundInProgress);
        }

        self.settings.change(key, value)?;
        debug!(rule = key.id(), %value, "setting changed");
        self.sync_shoe();
        Ok(())
    }

    /// Restores every house rule to its default between rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reset_settings(&mut self) -> Result<(), SettingsError> {
        if self.state != GameState::Betting {
            return Err(SettingsError::RoundInProgress);
        }

        self.settings.reset_all();
        self.sync_shoe();
        Ok(())
    }

    fn sync_shoe(&mut self) {
        if self.shoe.decks() != self.settings.deck_count() {
            self.shoe.set_decks(self.settings.deck_count());
        }
        if self.shoe.is_true_random() != self.settings.true_random() {
            self.shoe.set_true_random(self.settings.true_random());
        }
    }

    /// Returns the shoe.
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Places known cards on top of the shoe, dealt in the given order.
    pub fn stack_cards(&mut self, cards: &[Card]) {
        self.shoe.stack(cards);
    }

    /// Returns the player's balance in cents.
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the balance the session started with.
    pub const fn starting_balance(&self) -> u64 {
        self.starting_balance
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current turn position.
    pub const fn current_turn(&self) -> TurnPosition {
        self.turn
    }

    /// Returns the player's hands for the current (or last) round.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand being played, if any.
    pub fn current_hand(&self) -> Option<&Hand> {
        match self.state {
            GameState::PlayerTurn | GameState::SplitOffer => self.hands.get(self.turn.hand_index),
            _ => None,
        }
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the stake placed at the start of the round.
    pub const fn round_bet(&self) -> u64 {
        self.round_bet
    }

    /// Returns how the player's turn ended so far.
    pub const fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Clears all hands of the last round and returns to betting.
    pub(crate) fn clear_round(&mut self) {
        self.hands.clear();
        self.dealer_hand.clear();
        self.turn = TurnPosition::START;
        self.round_bet = 0;
        self.refund = 0;
        self.outcome = RoundOutcome::default();
        self.state = GameState::Betting;
    }

    /// Starts over: restores the starting balance, discards the round in
    /// progress and reshuffles the shoe.
    pub fn restart(&mut self) {
        self.clear_round();
        self.balance = self.starting_balance;
        self.shoe.shuffle();
        debug!(balance = self.balance, "game restarted");
    }

    /// Draws a card from the shoe.
    fn draw(&mut self, hidden: bool) -> Card {
        self.shoe.draw(hidden)
    }
}
