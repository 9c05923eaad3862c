//! Error types for deck and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck from a caller-supplied order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not hold exactly one card per rank and suit.
    #[error("deck must hold {expected} cards, got {actual}")]
    WrongSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        actual: usize,
    },
    /// The same card appears more than once.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur while playing rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has finished; no cards remain to be played.
    #[error("the game is over")]
    GameOver,
    /// A player had no card to play.
    ///
    /// Hands dealt from a full deck shrink in lockstep, so this only happens
    /// if that invariant has been broken.
    #[error("player {player} has no card to play")]
    EmptyHand {
        /// The seat (1 or 2) of the player whose hand was empty.
        player: u8,
    },
}
