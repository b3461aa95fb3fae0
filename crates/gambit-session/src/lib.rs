//! In-memory registry of identified games, the boundary a server or CLI talks to.

mod config;
mod error;
mod registry;

pub use config::RegistryConfig;
pub use error::SessionError;
pub use registry::{GameId, GameRegistry, GameSnapshot, GameSummary};
