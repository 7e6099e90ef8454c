//! Error types for game operations.

use thiserror::Error;

use crate::game::Action;
use crate::settings::RuleKey;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Balance is exhausted; the game must be restarted.
    #[error("balance is exhausted, restart the game")]
    Bankrupt,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The action is not in the legal set for the current turn.
    #[error("{0:?} is not legal at this point")]
    IllegalAction(Action),
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Cannot surrender at this point.
    #[error("cannot surrender at this point")]
    CannotSurrender,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during the dealer turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that can occur when changing a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The value does not match the setting's kind.
    #[error("{0:?} expects a different kind of value")]
    TypeMismatch(RuleKey),
    /// The value lies outside the setting's range.
    #[error("{value} is outside {min}..={max}")]
    OutOfRange {
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
        /// The rejected value.
        value: u32,
    },
    /// Settings cannot change while a round is in progress.
    #[error("settings cannot change during a round")]
    RoundInProgress,
}

/// Errors that can occur when parsing an encoded card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is empty.
    #[error("empty card token")]
    Empty,
    /// The rank is not a number in 1..=13.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit code is not one of `s`, `h`, `d`, `c`.
    #[error("invalid card suit")]
    InvalidSuit,
    /// The visibility flag is not `0` or `1`.
    #[error("invalid card visibility flag")]
    InvalidVisibility,
}

/// Errors that can end a driven round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The bet was refused.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// A player action was refused.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer turn or showdown was refused.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
