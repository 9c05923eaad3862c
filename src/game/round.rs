use crate::error::PlayError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Plays one round.
    ///
    /// Each player plays the top card of their hand. The higher rank earns
    /// its player a point; equal ranks are a tie and nobody scores. The game
    /// finishes once the hands are exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::GameOver`] if the game is already finished, or
    /// [`PlayError::EmptyHand`] if only one player is out of cards.
    pub fn play_round(&mut self) -> Result<RoundResult, PlayError> {
        if self.state == GameState::Finished {
            tracing::warn!("round requested after the game finished");
            return Err(PlayError::GameOver);
        }

        match (self.player1.has_cards(), self.player2.has_cards()) {
            (true, true) => {}
            (false, false) => {
                self.state = GameState::Finished;
                return Err(PlayError::GameOver);
            }
            (false, true) => {
                self.state = GameState::Finished;
                return Err(PlayError::EmptyHand { player: 1 });
            }
            (true, false) => {
                self.state = GameState::Finished;
                return Err(PlayError::EmptyHand { player: 2 });
            }
        }

        let card1 = self
            .player1
            .play_card()
            .ok_or(PlayError::EmptyHand { player: 1 })?;
        let card2 = self
            .player2
            .play_card()
            .ok_or(PlayError::EmptyHand { player: 2 })?;

        let outcome = RoundOutcome::from_comparison(card1.compare(&card2));
        match outcome {
            RoundOutcome::Player1 => self.player1.add_point(),
            RoundOutcome::Player2 => self.player2.add_point(),
            RoundOutcome::Tie => {}
        }

        let result = RoundResult {
            round: self.rounds.len() + 1,
            player1_name: self.player1.name().into(),
            player2_name: self.player2.name().into(),
            card1,
            card2,
            outcome,
        };
        tracing::trace!(round = result.round, %card1, %card2, ?outcome, "round played");

        self.rounds.push(result.clone());
        self.state = if self.player1.has_cards() && self.player2.has_cards() {
            GameState::Playing
        } else {
            GameState::Finished
        };

        Ok(result)
    }
}
