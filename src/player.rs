//! Player state: a name, a hand played from the front, and a score.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::card::Card;

/// A War player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    name: String,
    /// Remaining cards; the front card is played next.
    hand: VecDeque<Card>,
    /// Rounds won so far.
    score: usize,
}

impl Player {
    /// Creates a player with an empty hand and a score of zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
            score: 0,
        }
    }

    /// Creates a player holding `cards`, first card on top.
    #[must_use]
    pub fn with_hand(name: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            name: name.into(),
            hand: cards.into_iter().collect(),
            score: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the remaining hand, next card first.
    #[must_use]
    pub const fn hand(&self) -> &VecDeque<Card> {
        &self.hand
    }

    /// Returns the number of cards left in the hand.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the player still has a card to play.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Removes and returns the top card of the hand.
    ///
    /// Returns `None` once the hand is exhausted.
    pub fn play_card(&mut self) -> Option<Card> {
        self.hand.pop_front()
    }

    /// Awards the player one point.
    pub const fn add_point(&mut self) {
        self.score += 1;
    }
}
