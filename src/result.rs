//! Round and game result types.
//!
//! The `Display` impls render the human-readable transcript printed by the
//! `war` binary.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::card::Card;

/// Which side took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The first player's card ranked higher.
    Player1,
    /// The second player's card ranked higher.
    Player2,
    /// Both cards had the same rank; nobody scores.
    Tie,
}

impl RoundOutcome {
    /// Maps a [`Card::compare`] result to an outcome.
    #[must_use]
    pub const fn from_comparison(comparison: i8) -> Self {
        if comparison > 0 {
            Self::Player1
        } else if comparison < 0 {
            Self::Player2
        } else {
            Self::Tie
        }
    }
}

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: usize,
    /// First player's name.
    pub player1_name: String,
    /// Second player's name.
    pub player2_name: String,
    /// Card played by the first player.
    pub card1: Card,
    /// Card played by the second player.
    pub card2: Card,
    /// Who won the round.
    pub outcome: RoundOutcome,
}

impl RoundResult {
    /// Returns the name of the round's winner, or `None` on a tie.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome {
            RoundOutcome::Player1 => Some(self.player1_name.as_str()),
            RoundOutcome::Player2 => Some(self.player2_name.as_str()),
            RoundOutcome::Tie => None,
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} plays {}", self.player1_name, self.card1)?;
        writeln!(f, "{} plays {}", self.player2_name, self.card2)?;
        match self.winner_name() {
            Some(name) => write!(f, "{name} wins the round"),
            None => f.write_str("It's a tie!"),
        }
    }
}

/// Final standing of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    /// The player's name.
    pub name: String,
    /// Rounds won.
    pub score: usize,
}

/// Overall result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The first player won more rounds.
    Player1,
    /// The second player won more rounds.
    Player2,
    /// Both players won the same number of rounds.
    Tie,
}

/// Result of the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// The first player's score.
    pub player1: PlayerScore,
    /// The second player's score.
    pub player2: PlayerScore,
    /// Rounds that ended in a tie.
    pub ties: usize,
    /// Rounds played in total.
    pub rounds_played: usize,
    /// Who won the game.
    pub outcome: GameOutcome,
}

impl GameResult {
    /// Builds a result from both players' scores, deciding the outcome.
    #[must_use]
    pub fn new(
        player1: PlayerScore,
        player2: PlayerScore,
        ties: usize,
        rounds_played: usize,
    ) -> Self {
        let outcome = if player1.score > player2.score {
            GameOutcome::Player1
        } else if player1.score < player2.score {
            GameOutcome::Player2
        } else {
            GameOutcome::Tie
        };

        Self {
            player1,
            player2,
            ties,
            rounds_played,
            outcome,
        }
    }

    /// Returns the name of the game's winner, or `None` on a tie.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome {
            GameOutcome::Player1 => Some(self.player1.name.as_str()),
            GameOutcome::Player2 => Some(self.player2.name.as_str()),
            GameOutcome::Tie => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Score:")?;
        writeln!(f, "{}: {}", self.player1.name, self.player1.score)?;
        writeln!(f, "{}: {}", self.player2.name, self.player2.score)?;
        match self.winner_name() {
            Some(name) => write!(f, "{name} wins the game!"),
            None => f.write_str("The game is a tie!"),
        }
    }
}
