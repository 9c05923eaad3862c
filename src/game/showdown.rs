use crate::error::PlayError;
use crate::result::{GameResult, RoundResult};

use super::Game;

impl Game {
    /// Plays rounds until a hand is exhausted and returns the final result.
    ///
    /// A finished game plays no further rounds and returns its result again.
    pub fn play_game(&mut self) -> GameResult {
        self.play_game_with(|_| {})
    }

    /// Like [`Game::play_game`], calling `on_round` after every round.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 1);
    /// let mut transcript = Vec::new();
    /// let result = game.play_game_with(|round| transcript.push(round.to_string()));
    ///
    /// assert_eq!(transcript.len(), 26);
    /// assert_eq!(result.player1.score + result.player2.score + result.ties, 26);
    /// ```
    pub fn play_game_with<F>(&mut self, mut on_round: F) -> GameResult
    where
        F: FnMut(&RoundResult),
    {
        while !self.is_finished() {
            match self.play_round() {
                Ok(round) => on_round(&round),
                Err(PlayError::GameOver) => {
                    tracing::debug!("stopped playing rounds");
                    break;
                }
                Err(err @ PlayError::EmptyHand { .. }) => {
                    tracing::error!(%err, "hands fell out of step");
                    break;
                }
            }
        }

        let result = self.result();
        tracing::info!(
            player1_score = result.player1.score,
            player2_score = result.player2.score,
            ties = result.ties,
            rounds = result.rounds_played,
            outcome = ?result.outcome,
            "game finished"
        );
        result
    }
}
