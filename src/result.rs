//! Round result types for showdown.

extern crate alloc;

use core::fmt;

use alloc::vec::Vec;

/// Result of a single hand after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Player surrendered.
    Surrendered,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "WIN",
            Self::Lose => "LOSS",
            Self::Push => "PUSH",
            Self::Surrendered => "SURRENDER",
        })
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake on this hand, doubled if the hand was doubled.
    pub bet: u64,
    /// The amount returned to the player for this hand.
    pub payout: u64,
    /// The player's best hand value.
    pub player_value: u8,
    /// The dealer's best hand value.
    pub dealer_value: u8,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Total returned across all hands.
    pub profit: u64,
    /// Half-stake returned by a surrender.
    pub refund: u64,
    /// Total staked across all hands.
    pub stakes: u64,
    /// Net result (positive = profit, negative = loss).
    pub net: i64,
    /// The dealer's final best hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
