use anyhow::Result;

use crate::models::Statement;

/// Observer hooks for the hosting page. Purely informational: an error
/// returned here is logged and never touches session state.
pub trait TrackerListener: Send + Sync {
    /// Player finished initializing and is interactive.
    fn on_player_ready(&self, _message: &str) -> Result<()> {
        Ok(())
    }

    /// A statement was produced and handed to the sender.
    fn on_state_change(&self, _statement: &Statement) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl TrackerListener for NoopListener {}
