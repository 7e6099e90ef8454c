//! Card types and the compact card encoding used by fixtures.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in shoe order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the single-letter code used by the card encoding.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Spades => 's',
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
        }
    }

    /// Returns the suit for a single-letter code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            's' => Some(Self::Spades),
            'h' => Some(Self::Hearts),
            'd' => Some(Self::Diamonds),
            'c' => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the printable suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Spades => 0,
            Self::Hearts => 1,
            Self::Diamonds => 2,
            Self::Clubs => 3,
        }
    }
}

/// A playing card.
///
/// Rank and suit never change once drawn; only the visibility flag flips,
/// and only when a face-down dealer card is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    visible: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            visible: true,
        }
    }

    /// Creates a new face-down card.
    #[must_use]
    pub const fn hidden(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            visible: false,
        }
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Turns the card face up.
    pub const fn reveal(&mut self) {
        self.visible = true;
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns the card's blackjack value with aces counted as 1.
    #[must_use]
    pub const fn hard_value(&self) -> u8 {
        match self.rank {
            1..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns the printable rank symbol (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub fn rank_symbol(&self) -> RankSymbol {
        RankSymbol(self.rank)
    }
}

/// Display adapter for a card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankSymbol(u8);

impl fmt::Display for RankSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("A"),
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            rank => write!(f, "{rank}"),
        }
    }
}

/// Formats as `"{rank}{suit}{visibility}"`, e.g. `1h0` for a face-up ace of hearts.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.rank,
            self.suit.code(),
            if self.visible { '0' } else { '1' }
        )
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let visibility = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = chars.next_back().ok_or(ParseCardError::InvalidSuit)?;
        let rank: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| ParseCardError::InvalidRank)?;

        if !(1..=13).contains(&rank) {
            return Err(ParseCardError::InvalidRank);
        }
        let suit = Suit::from_code(suit).ok_or(ParseCardError::InvalidSuit)?;

        match visibility {
            '0' => Ok(Self::new(suit, rank)),
            '1' => Ok(Self::hidden(suit, rank)),
            _ => Err(ParseCardError::InvalidVisibility),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS: usize = 13;
