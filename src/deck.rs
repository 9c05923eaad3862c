//! The 52-card deck: construction, shuffling and dealing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A full deck holding every rank and suit combination exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck.
    ///
    /// Cards are ordered by suit (Hearts, Diamonds, Clubs, Spades), then by
    /// rank from Two to Ace within each suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck and shuffles it with `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use warsim::Deck;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Builds a deck from a caller-chosen order.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` does not hold exactly 52 cards or if any
    /// card appears twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize {
                expected: DECK_SIZE,
                actual: cards.len(),
            });
        }

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let slot = &mut seen[Self::index_of(card)];
            if *slot {
                return Err(DeckError::DuplicateCard(*card));
            }
            *slot = true;
        }

        Ok(Self { cards })
    }

    /// Position of `card` in the unshuffled order.
    const fn index_of(card: &Card) -> usize {
        let suit = match card.suit {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        };
        suit * Rank::ALL.len() + (card.rank.ordinal() - Rank::Two.ordinal()) as usize
    }

    /// Shuffles the deck in place.
    ///
    /// Uses a backward Fisher-Yates pass, so every permutation is equally
    /// likely for a uniform `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Splits the deck into its first and second halves.
    ///
    /// The deck itself is left untouched; each half keeps the deck's order.
    #[must_use]
    pub fn deal(&self) -> (Vec<Card>, Vec<Card>) {
        let (first, second) = self.cards.split_at(HAND_SIZE);
        (first.to_vec(), second.to_vec())
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck contains `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
