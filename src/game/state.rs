//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next bet.
    Betting,
    /// Waiting for a player action on the current hand.
    PlayerTurn,
    /// A split hand drew another pair; waiting for split or stand.
    SplitOffer,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results can be settled.
    RoundOver,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Index into the player's hands (grows with splits).
    pub hand_index: usize,
    /// Turn number on the current hand, starting at 1.
    pub turn: u32,
}

impl TurnPosition {
    pub(crate) const START: Self = Self {
        hand_index: 0,
        turn: 1,
    };
}

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take one more card.
    Hit,
    /// Keep the hand as it is.
    Stand,
    /// Double the stake for exactly one more card.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Give up the round for half the stake back.
    Forfeit,
}

/// How the player's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundOutcome {
    /// The player surrendered.
    pub forfeited: bool,
    /// The player's hand went over 21.
    pub busted: bool,
    /// The player doubled down.
    pub doubled: bool,
}

impl RoundOutcome {
    /// Whether the dealer still has to play the round out.
    #[must_use]
    pub const fn needs_dealer(&self) -> bool {
        !self.forfeited && !self.busted
    }
}
