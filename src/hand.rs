//! Player and dealer hand representations and the hand-value evaluator.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The possible totals of a hand.
///
/// There is always a hard total (every ace counted as 1). The soft total
/// counts exactly one ace as 11 and is only present when it does not exceed 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    hard: u8,
    soft: Option<u8>,
}

impl HandValue {
    /// Returns the total with every ace counted as 1.
    #[must_use]
    pub const fn hard(&self) -> u8 {
        self.hard
    }

    /// Returns the total counting one ace as 11, if that total is at most 21.
    #[must_use]
    pub const fn soft(&self) -> Option<u8> {
        self.soft
    }

    /// Returns the smallest total.
    #[must_use]
    pub const fn min(&self) -> u8 {
        self.hard
    }

    /// Returns the largest total.
    #[must_use]
    pub const fn max(&self) -> u8 {
        match self.soft {
            Some(soft) => soft,
            None => self.hard,
        }
    }

    /// Returns whether the hand has a soft interpretation.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft.is_some()
    }

    /// Returns the totals in ascending order (one or two entries).
    #[must_use]
    pub fn totals(&self) -> Vec<u8> {
        let mut totals = alloc::vec![self.hard];
        totals.extend(self.soft);
        totals
    }
}

/// Terminal classification of a hand's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandState {
    /// Exactly two cards totalling 21.
    Blackjack,
    /// Even the smallest total exceeds 21.
    Bust,
    /// Anything else, including a 21 made of three or more cards.
    Safe,
}

/// Evaluates the visible cards. Face-down cards contribute nothing.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut hard: u8 = 0;
    let mut has_ace = false;

    for card in cards.iter().filter(|c| c.is_visible()) {
        if card.is_ace() {
            has_ace = true;
        }
        hard = hard.saturating_add(card.hard_value());
    }

    let soft = hard
        .checked_add(10)
        .filter(|soft| has_ace && *soft <= 21);

    HandValue { hard, soft }
}

/// Classifies a set of cards as blackjack, bust or safe.
#[must_use]
pub fn classify(cards: &[Card]) -> HandState {
    let value = evaluate(cards);

    if cards.len() == 2 && value.max() == 21 {
        HandState::Blackjack
    } else if value.min() > 21 {
        HandState::Bust
    } else {
        HandState::Safe
    }
}

/// A player's hand.
///
/// Cards are kept most recent first, matching the order they are shown in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, most recent first.
    cards: Vec<Card>,
    /// Stake riding on this hand, in cents.
    bet: u64,
    /// Whether this hand came out of a split.
    is_split: bool,
    /// Whether this hand was doubled down.
    is_doubled: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: u64) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            is_split: false,
            is_doubled: false,
        }
    }

    /// Creates the second half of a split: a single card and its share of the stake.
    #[must_use]
    pub fn from_split(card: Card, bet: u64) -> Self {
        Self {
            cards: alloc::vec![card],
            bet,
            is_split: true,
            is_doubled: false,
        }
    }

    /// Creates a hand from cards given most recent first.
    #[must_use]
    pub fn from_cards(cards: &[Card], bet: u64) -> Self {
        Self {
            cards: cards.to_vec(),
            bet,
            is_split: false,
            is_doubled: false,
        }
    }

    /// Adds a card on top of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Returns the cards in the hand, most recent first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns whether this hand came out of a split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.is_split
    }

    /// Returns whether this hand was doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.is_doubled
    }

    /// Doubles the stake and marks the hand as doubled.
    pub const fn double_down(&mut self) {
        self.bet *= 2;
        self.is_doubled = true;
    }

    /// Computes the value of the visible cards.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Classifies the hand as blackjack, bust or safe.
    #[must_use]
    pub fn state(&self) -> HandState {
        classify(&self.cards)
    }

    /// Returns whether the smallest total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value().min() > 21
    }

    /// Returns whether the hand is a natural two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.state() == HandState::Blackjack
    }

    /// Returns whether the hand is exactly two cards of the same rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Splits a pair, returning the new hand.
    ///
    /// The second card dealt moves to the new hand. The kept hand takes half the
    /// stake rounded down and the new hand takes the remainder, so an odd
    /// cent is never lost. Both hands are marked as split.
    pub fn split(&mut self) -> Option<Self> {
        if !self.is_pair() {
            return None;
        }

        let card = self.cards.remove(0);
        let kept = self.bet / 2;
        let moved = self.bet - kept;
        self.bet = kept;
        self.is_split = true;

        Some(Self::from_split(card, moved))
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand, most recent first.
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a dealer hand from cards given most recent first.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card on top of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Returns all cards in the hand, most recent first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether every card is face up.
    #[must_use]
    pub fn is_hole_revealed(&self) -> bool {
        self.cards.iter().all(Card::is_visible)
    }

    /// Turns the face-down card up.
    pub fn reveal_hole(&mut self) {
        for card in &mut self.cards {
            card.reveal();
        }
    }

    /// Computes the value of the visible cards.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is a natural two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        classify(&self.cards) == HandState::Blackjack
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value().min() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::Suit;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn no_ace_has_a_single_total() {
        let value = evaluate(&cards(&["5d0", "13h0", "7c0"]));
        assert_eq!(value.totals(), vec![22]);
        assert!(!value.is_soft());
    }

    #[test]
    fn single_ace_is_one_or_eleven() {
        assert_eq!(evaluate(&cards(&["1s0"])).totals(), vec![1, 11]);
    }

    #[test]
    fn two_aces_are_two_or_twelve() {
        assert_eq!(evaluate(&cards(&["1s0", "1h0"])).totals(), vec![2, 12]);
    }

    #[test]
    fn soft_total_dropped_when_over_21() {
        assert_eq!(evaluate(&cards(&["1c0", "6s0", "9d0"])).totals(), vec![16]);
        assert_eq!(evaluate(&cards(&["1c0", "2s0"])).totals(), vec![3, 13]);
    }

    #[test]
    fn hidden_cards_are_ignored() {
        assert_eq!(evaluate(&cards(&["5d0", "7h1"])).totals(), vec![5]);
    }

    #[test]
    fn classification() {
        assert_eq!(classify(&cards(&["1s0", "10d0"])), HandState::Blackjack);
        assert_eq!(classify(&cards(&["7s0", "8d0", "10s0"])), HandState::Bust);
        assert_eq!(classify(&cards(&["5c0", "3s0"])), HandState::Safe);
        // A three-card 21 is not a natural.
        assert_eq!(classify(&cards(&["7s0", "4d0", "10s0"])), HandState::Safe);
    }

    #[test]
    fn split_moves_second_card_and_keeps_odd_cent() {
        let mut hand = Hand::from_cards(&cards(&["8h0", "8d0"]), 1001);
        let new_hand = hand.split().unwrap();

        assert_eq!(hand.bet(), 500);
        assert_eq!(new_hand.bet(), 501);
        assert_eq!(hand.cards(), &cards(&["8d0"])[..]);
        assert_eq!(new_hand.cards(), &cards(&["8h0"])[..]);
        assert!(hand.is_split());
        assert!(new_hand.is_split());
    }

    #[test]
    fn split_requires_a_pair() {
        let mut hand = Hand::from_cards(&cards(&["8h0", "9d0"]), 1000);
        assert!(hand.split().is_none());
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.bet(), 1000);
    }

    #[test]
    fn dealer_reveal_updates_value() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, 1));
        dealer.add_card(Card::hidden(Suit::Clubs, 6));

        assert!(!dealer.is_hole_revealed());
        assert_eq!(dealer.value().totals(), vec![1, 11]);

        dealer.reveal_hole();
        assert!(dealer.is_hole_revealed());
        assert_eq!(dealer.value().totals(), vec![7, 17]);
    }
}
