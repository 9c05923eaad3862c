//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::HAND_SIZE;
use crate::deck::Deck;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{GameResult, PlayerScore, RoundOutcome, RoundResult};

mod round;
mod showdown;
pub mod state;

pub use state::GameState;

/// A two-player game of War.
///
/// The game deals a shuffled deck into two hands of 26 cards, then plays
/// rounds until the hands run out. Every round compares the top card of each
/// hand and awards a point to the higher rank; equal ranks score nothing.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// First player.
    player1: Player,
    /// Second player.
    player2: Player,
    /// Rounds played so far, oldest first.
    rounds: Vec<RoundResult>,
}

impl Game {
    /// Creates a new game, shuffling the deck with the given seed.
    ///
    /// The same seed always produces the same deal.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let result = game.play_game();
    /// assert_eq!(result.rounds_played, 26);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        tracing::debug!(seed, "shuffled deck");
        Self::from_deck(options, deck)
    }

    /// Creates a new game from an already ordered deck, without shuffling.
    ///
    /// The first half of the deck goes to the first player and the second
    /// half to the second player.
    #[must_use]
    pub fn from_deck(options: GameOptions, deck: Deck) -> Self {
        let (hand1, hand2) = deck.deal();
        let player1 = Player::with_hand(options.player1_name.clone(), hand1);
        let player2 = Player::with_hand(options.player2_name.clone(), hand2);
        tracing::debug!(
            player1 = player1.name(),
            player2 = player2.name(),
            hand_size = HAND_SIZE,
            "dealt hands"
        );

        Self {
            options,
            state: GameState::Dealt,
            player1,
            player2,
            rounds: Vec::with_capacity(HAND_SIZE),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == GameState::Finished
    }

    /// Returns the first player.
    #[must_use]
    pub const fn player1(&self) -> &Player {
        &self.player1
    }

    /// Returns the second player.
    #[must_use]
    pub const fn player2(&self) -> &Player {
        &self.player2
    }

    /// Returns every round played so far, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    /// Returns the number of tied rounds.
    #[must_use]
    pub fn ties(&self) -> usize {
        self.rounds
            .iter()
            .filter(|round| round.outcome == RoundOutcome::Tie)
            .count()
    }

    /// Returns the number of cards already played by both players.
    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.rounds.len() * 2
    }

    /// Returns the scores so far and who is ahead.
    ///
    /// Once the game is finished this is the final result.
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::new(
            PlayerScore {
                name: self.player1.name().into(),
                score: self.player1.score(),
            },
            PlayerScore {
                name: self.player2.name().into(),
                score: self.player2.score(),
            },
            self.ties(),
            self.rounds_played(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::error::PlayError;

    #[test]
    fn new_game_is_dealt() {
        let game = Game::new(GameOptions::default(), 9);
        assert_eq!(game.state(), GameState::Dealt);
        assert_eq!(game.player1().cards_remaining(), HAND_SIZE);
        assert_eq!(game.player2().cards_remaining(), HAND_SIZE);
        assert_eq!(game.player1().name(), "Player 1");
        assert_eq!(game.player2().name(), "Player 2");
        assert_eq!(game.rounds_played(), 0);
    }

    /// A game whose second hand has run out before the first.
    fn uneven_game() -> Game {
        Game {
            options: GameOptions::default(),
            state: GameState::Playing,
            player1: Player::with_hand("A", [Card::new(Rank::Two, Suit::Hearts)]),
            player2: Player::new("B"),
            rounds: Vec::new(),
        }
    }

    #[test]
    fn uneven_hands_report_the_empty_one() {
        let mut game = uneven_game();

        assert_eq!(
            game.play_round().unwrap_err(),
            PlayError::EmptyHand { player: 2 }
        );
        assert!(game.is_finished());
        assert_eq!(game.player1().cards_remaining(), 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn uneven_hands_are_logged_as_errors() {
        use alloc::sync::Arc;
        use std::io;
        use std::sync::Mutex;

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut game = uneven_game();
        let result = tracing::subscriber::with_default(subscriber, || game.play_game());

        assert_eq!(result.rounds_played, 0);
        assert!(game.is_finished());

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("player 2 has no card to play"));
    }
}
