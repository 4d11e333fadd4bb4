use serde::{Deserialize, Serialize};

/// Player state codes as reported on each state transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlayerState {
    /// Maps a raw state code; unknown codes yield `None` and are ignored.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(PlayerState::Unstarted),
            0 => Some(PlayerState::Ended),
            1 => Some(PlayerState::Playing),
            2 => Some(PlayerState::Paused),
            3 => Some(PlayerState::Buffering),
            5 => Some(PlayerState::Cued),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerState::Unstarted => "unstarted",
            PlayerState::Ended => "ended",
            PlayerState::Playing => "playing",
            PlayerState::Paused => "paused",
            PlayerState::Buffering => "buffering",
            PlayerState::Cued => "cued",
        }
    }
}

/// Read access to the embedded player.
pub trait VideoPlayer: Send + Sync {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
}

impl<F> VideoPlayer for F
where
    F: Fn() -> f64 + Send + Sync,
{
    fn current_time(&self) -> f64 {
        self()
    }
}
