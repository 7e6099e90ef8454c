//! The card shoe.
//!
//! In weighted mode the shoe tracks how many cards of each rank and of each
//! (rank, suit) pair are left, and draws without replacement: a rank is
//! picked with probability proportional to its remaining count, then a suit
//! with probability proportional to what is left of that rank. Composition
//! therefore drifts as the shoe empties, and a card counter can in principle
//! exploit it. True-random mode models an infinite shoe instead: every draw
//! is an independent uniform pick of rank and suit.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};

/// A multi-deck shoe with reshuffle-on-empty.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Number of decks in a full shoe.
    decks: u8,
    /// Draw independent cards instead of from the counts.
    true_random: bool,
    /// Cards left per rank (index 0 = Ace).
    rank_counts: [u16; RANKS],
    /// Cards left per rank and suit.
    suit_counts: [[u16; 4]; RANKS],
    /// Known cards to deal before any random pick, next card last.
    stacked: Vec<Card>,
    /// Number of reshuffles since creation.
    reshuffles: u64,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a full, shuffled shoe.
    #[must_use]
    pub fn new(decks: u8, true_random: bool, seed: u64) -> Self {
        let mut shoe = Self {
            decks,
            true_random,
            rank_counts: [0; RANKS],
            suit_counts: [[0; 4]; RANKS],
            stacked: Vec::new(),
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.shuffle();
        shoe
    }

    /// Returns every card to the shoe.
    pub fn shuffle(&mut self) {
        let per_suit = u16::from(self.decks);
        self.rank_counts = [per_suit * 4; RANKS];
        self.suit_counts = [[per_suit; 4]; RANKS];
        debug!(
            decks = self.decks,
            true_random = self.true_random,
            "shoe shuffled"
        );
    }

    /// Changes the number of decks and reshuffles.
    pub fn set_decks(&mut self, decks: u8) {
        self.decks = decks;
        self.shuffle();
    }

    /// Switches between weighted and true-random drawing and reshuffles.
    pub fn set_true_random(&mut self, true_random: bool) {
        self.true_random = true_random;
        self.shuffle();
    }

    /// Returns the number of decks in a full shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns whether the shoe draws independent cards.
    #[must_use]
    pub const fn is_true_random(&self) -> bool {
        self.true_random
    }

    /// Returns the size of a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rank_counts.iter().map(|&c| usize::from(c)).sum()
    }

    /// Returns the number of cards of `rank` left.
    #[must_use]
    pub fn remaining_rank(&self, rank: u8) -> u16 {
        rank_index(rank).map_or(0, |i| self.rank_counts[i])
    }

    /// Returns the number of cards of `rank` and `suit` left.
    #[must_use]
    pub fn remaining_card(&self, rank: u8, suit: Suit) -> u16 {
        rank_index(rank).map_or(0, |i| self.suit_counts[i][suit.index()])
    }

    /// Returns how many times the shoe has been reshuffled after running out.
    #[must_use]
    pub const fn reshuffles(&self) -> u64 {
        self.reshuffles
    }

    /// Places known cards on top of the shoe, dealt in the given order.
    ///
    /// Stacked cards are still removed from the remaining counts when dealt.
    /// A stacked card whose copies are all gone is dealt anyway and leaves
    /// the counts unchanged.
    pub fn stack(&mut self, cards: &[Card]) {
        self.stacked.extend(cards.iter().rev().copied());
    }

    /// Draws a card, face down if `hidden`.
    pub fn draw(&mut self, hidden: bool) -> Card {
        let (suit, rank) = if let Some(card) = self.stacked.pop() {
            if !self.true_random {
                self.refill_if_empty();
                self.take(card.rank, card.suit);
            }
            (card.suit, card.rank)
        } else if self.true_random {
            self.draw_uniform()
        } else {
            self.refill_if_empty();
            self.draw_weighted()
        };

        if hidden {
            Card::hidden(suit, rank)
        } else {
            Card::new(suit, rank)
        }
    }

    fn refill_if_empty(&mut self) {
        if self.remaining() == 0 {
            self.reshuffles += 1;
            debug!(reshuffles = self.reshuffles, "shoe exhausted");
            self.shuffle();
        }
    }

    fn draw_uniform(&mut self) -> (Suit, u8) {
        let rank = self.rng.random_range(1..=RANKS as u8);
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        (suit, rank)
    }

    fn draw_weighted(&mut self) -> (Suit, u8) {
        let rank = pick_weighted(&mut self.rng, &self.rank_counts);
        let suit = pick_weighted(&mut self.rng, &self.suit_counts[rank]);
        self.rank_counts[rank] -= 1;
        self.suit_counts[rank][suit] -= 1;
        (Suit::ALL[suit], rank as u8 + 1)
    }

    fn take(&mut self, rank: u8, suit: Suit) {
        if let Some(i) = rank_index(rank) {
            let left = &mut self.suit_counts[i][suit.index()];
            if *left > 0 {
                *left -= 1;
                self.rank_counts[i] -= 1;
            }
        }
    }
}

fn rank_index(rank: u8) -> Option<usize> {
    (1..=RANKS as u8)
        .contains(&rank)
        .then(|| usize::from(rank) - 1)
}

/// Picks an index with probability proportional to its weight.
///
/// Callers guarantee the weights do not sum to zero.
fn pick_weighted<R: Rng>(rng: &mut R, weights: &[u16]) -> usize {
    let total: u32 = weights.iter().map(|&w| u32::from(w)).sum();
    let mut target = rng.random_range(0..total);

    for (i, &weight) in weights.iter().enumerate() {
        let weight = u32::from(weight);
        if target < weight {
            return i;
        }
        target -= weight;
    }

    weights.len() - 1
}
