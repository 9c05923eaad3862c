//! A two-player War card game simulation with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that shuffles a 52-card [`Deck`], deals
//! it into two hands and plays rounds until the hands run out, reporting each
//! round and the final score.
//!
//! # Example
//!
//! ```
//! use warsim::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42);
//! let result = game.play_game();
//! assert!(game.is_finished());
//! assert_eq!(result.rounds_played, 26);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, PlayError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::Player;
pub use result::{GameOutcome, GameResult, PlayerScore, RoundOutcome, RoundResult};
