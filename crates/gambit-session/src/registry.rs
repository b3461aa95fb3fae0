//! The game registry.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use tracing::{debug, info, warn};

use gambit_core::{AppliedMove, Board, Color, Game, GameStatus, Move, Position};

use crate::config::RegistryConfig;
use crate::error::SessionError;

/// Identifier of a registered game. Ids are never reused by one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One line of a game listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
    pub active_color: Color,
}

/// Renderable state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Rank strings, row 1 first.
    pub board: Vec<String>,
    pub active_color: Color,
    pub status: GameStatus,
}

#[derive(Debug)]
struct Entry {
    name: String,
    game: Game,
}

/// Owns every live game; all mutation goes through `&mut self`.
#[derive(Debug)]
pub struct GameRegistry {
    config: RegistryConfig,
    /// Validated once so game creation cannot fail on the board.
    starting_board: Board,
    games: BTreeMap<GameId, Entry>,
    next_id: u64,
}

impl GameRegistry {
    /// Create an empty registry, validating the configured starting state.
    pub fn new(config: RegistryConfig) -> Result<GameRegistry, SessionError> {
        let starting_board = Board::from_rank_strings(&config.starting_state)?;
        Ok(GameRegistry {
            config,
            starting_board,
            games: BTreeMap::new(),
            next_id: 1,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of live games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Register a new game in the configured starting state.
    pub fn create_game(&mut self, name: &str) -> Result<GameId, SessionError> {
        if self.games.len() >= self.config.max_games {
            warn!(limit = self.config.max_games, "game limit reached");
            return Err(SessionError::TooManyGames {
                limit: self.config.max_games,
            });
        }

        let id = GameId(self.next_id);
        self.next_id += 1;
        let game = Game::from_board(self.starting_board.clone(), self.config.starting_color);
        self.games.insert(
            id,
            Entry {
                name: name.to_string(),
                game,
            },
        );
        info!(%id, name, "game created");
        Ok(id)
    }

    /// Every live game, in creation order.
    pub fn list_games(&self) -> Vec<GameSummary> {
        self.games
            .iter()
            .map(|(&id, entry)| GameSummary {
                id,
                name: entry.name.clone(),
                active_color: entry.game.team_turn(),
            })
            .collect()
    }

    fn game_mut(&mut self, id: GameId) -> Result<&mut Game, SessionError> {
        self.games
            .get_mut(&id)
            .map(|entry| &mut entry.game)
            .ok_or(SessionError::UnknownGame { id })
    }

    /// Read-only access to a registered game.
    pub fn game(&self, id: GameId) -> Result<&Game, SessionError> {
        self.games
            .get(&id)
            .map(|entry| &entry.game)
            .ok_or(SessionError::UnknownGame { id })
    }

    /// Legal moves of the piece on `position` in game `id`.
    pub fn legal_moves(&mut self, id: GameId, position: Position) -> Result<HashSet<Move>, SessionError> {
        Ok(self.game_mut(id)?.legal_moves(position))
    }

    /// Apply `mv` for the team on move in game `id`.
    pub fn apply_move(&mut self, id: GameId, mv: Move) -> Result<AppliedMove, SessionError> {
        let game = self.game_mut(id)?;
        match game.apply_move(mv) {
            Ok(applied) => {
                debug!(%id, %mv, "move applied");
                Ok(applied)
            }
            Err(err) => {
                warn!(%id, %mv, %err, "move rejected");
                Err(err.into())
            }
        }
    }

    /// Parse coordinate text such as `e2e4` or `e7e8q` and apply it.
    pub fn apply_move_text(&mut self, id: GameId, text: &str) -> Result<AppliedMove, SessionError> {
        let mv: Move = text.trim().parse().map_err(|_| SessionError::InvalidMoveText {
            text: text.to_string(),
        })?;
        self.apply_move(id, mv)
    }

    /// Board, turn and status of game `id`.
    pub fn snapshot(&mut self, id: GameId) -> Result<GameSnapshot, SessionError> {
        let game = self.game_mut(id)?;
        let status = game.status();
        if status.is_over() {
            info!(%id, %status, "game over");
        }
        Ok(GameSnapshot {
            board: game.rank_strings(),
            active_color: game.team_turn(),
            status,
        })
    }

    /// Drop game `id`.
    pub fn remove_game(&mut self, id: GameId) -> Result<(), SessionError> {
        self.games.remove(&id).ok_or(SessionError::UnknownGame { id })?;
        info!(%id, "game removed");
        Ok(())
    }

    /// Drop every game. Ids already handed out stay retired.
    pub fn clear(&mut self) {
        let count = self.games.len();
        self.games.clear();
        info!(count, "registry cleared");
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        GameRegistry {
            config: RegistryConfig::default(),
            starting_board: Board::standard(),
            games: BTreeMap::new(),
            next_id: 1,
        }
    }
}
