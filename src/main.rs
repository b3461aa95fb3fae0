use anyhow::Result;
use tracing::info;

use gambit_core::Position;
use gambit_session::{GameRegistry, RegistryConfig};

/// Opening played by the demo session.
const DEMO_LINE: [&str; 4] = ["e2e4", "e7e5", "g1f3", "b8c6"];

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("gambit starting");

    let mut registry = GameRegistry::new(RegistryConfig::default())?;
    let id = registry.create_game("demo")?;

    for text in DEMO_LINE {
        let applied = registry.apply_move_text(id, text)?;
        info!(move_text = text, kind = %applied.kind, "played");
    }

    let snapshot = registry.snapshot(id)?;
    let board = registry.game(id)?.board().pretty().to_string();
    info!(status = %snapshot.status, turn = %snapshot.active_color, "position after demo line\n{board}");

    let bishop = Position::new(1, 6);
    let moves = registry.legal_moves(id, bishop)?;
    info!(square = %bishop, count = moves.len(), "legal moves for the light-squared bishop");

    Ok(())
}
