//! A single-player blackjack round engine with adjustable house rules.
//!
//! The crate provides a [`Game`] type that owns the shoe, the house rules
//! and the player's balance, and runs each round through betting, the
//! player turn (hit, stand, double, split, surrender), the dealer turn and
//! settlement. Rendering and input handling are left to the caller.
//!
//! # Example
//!
//! ```
//! use adjustable_blackjack::{Action, Game, Settings};
//!
//! let mut game = Game::new(Settings::default(), 42);
//! let result = game
//!     .play_round(1_000, &mut |_: &Game, _: &[Action]| Action::Stand)
//!     .unwrap();
//! assert_eq!(result.hands.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod label;
pub mod result;
pub mod settings;
pub mod settlement;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, ParseCardError, RoundError, SettingsError, ShowdownError};
pub use game::{
    Action, DEFAULT_BALANCE, Game, GameState, Player, RoundOutcome, TurnPosition, dealer_must_hit,
};
pub use hand::{DealerHand, Hand, HandState, HandValue};
pub use label::{comparison_label, dealer_label, format_currency, format_signed_currency, hand_label};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use settings::{MenuEntry, Rule, RuleKey, SettingKind, SettingValue, Settings};
pub use shoe::Shoe;
