//! Registry configuration.

use gambit_core::{Color, STANDARD_BOARD_STATE};

/// Settings applied to every game a [`GameRegistry`](crate::GameRegistry) creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Rank strings for new games, row 1 first.
    pub starting_state: Vec<String>,
    /// Team to move first in new games.
    pub starting_color: Color,
    /// Maximum number of games held at once.
    pub max_games: usize,
}

impl RegistryConfig {
    pub fn with_starting_state<S: AsRef<str>>(mut self, rows: &[S]) -> Self {
        self.starting_state = rows.iter().map(|row| row.as_ref().to_string()).collect();
        self
    }

    pub fn with_starting_color(mut self, color: Color) -> Self {
        self.starting_color = color;
        self
    }

    pub fn with_max_games(mut self, max_games: usize) -> Self {
        self.max_games = max_games;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            starting_state: STANDARD_BOARD_STATE.iter().map(|row| row.to_string()).collect(),
            starting_color: Color::White,
            max_games: 1024,
        }
    }
}
