//! Game configuration options.

extern crate alloc;

use alloc::string::String;

/// Configuration options for a game of War.
///
/// Use the builder methods to customize options:
///
/// ```
/// use warsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player1_name("Alice")
///     .with_player2_name("Bob");
/// assert_eq!(options.player1_name, "Alice");
/// assert_eq!(options.player2_name, "Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Display name of the first player.
    pub player1_name: String,
    /// Display name of the second player.
    pub player2_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player1_name: String::from("Player 1"),
            player2_name: String::from("Player 2"),
        }
    }
}

impl GameOptions {
    /// Sets the first player's name.
    #[must_use]
    pub fn with_player1_name(mut self, name: impl Into<String>) -> Self {
        self.player1_name = name.into();
        self
    }

    /// Sets the second player's name.
    #[must_use]
    pub fn with_player2_name(mut self, name: impl Into<String>) -> Self {
        self.player2_name = name.into();
        self
    }

    /// Sets both players' names.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_names("North", "South");
    /// assert_eq!(options.player1_name, "North");
    /// assert_eq!(options.player2_name, "South");
    /// ```
    #[must_use]
    pub fn with_player_names(self, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        self.with_player1_name(player1).with_player2_name(player2)
    }
}
