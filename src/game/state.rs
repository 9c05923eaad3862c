//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Hands have been dealt; no round has been played yet.
    #[default]
    Dealt,
    /// Rounds are being played.
    Playing,
    /// A hand is exhausted and the game is over.
    Finished,
}
