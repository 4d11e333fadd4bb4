use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    models::{Activity, Actor},
    vocabulary::Vocabulary,
};

/// Environment switch that forces verbose statement logging.
pub const DEBUG_ENV_VAR: &str = "VIDEO_TRACKER_DEBUG";

const DEFAULT_SEEK_THRESHOLD_MS: u64 = 300;
const DEFAULT_PAUSE_DEBOUNCE_MS: u64 = 100;

/// Everything a tracker needs before the first player event arrives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    pub actor: Actor,
    #[serde(alias = "videoActivity")]
    pub activity: Activity,
    /// A play arriving within this long after a pause is treated as a seek.
    pub seek_threshold_ms: u64,
    /// How long a pause waits before it is reported.
    pub pause_debounce_ms: u64,
    pub debug: bool,
    pub vocabulary: Vocabulary,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            actor: Actor::default(),
            activity: Activity::default(),
            seek_threshold_ms: DEFAULT_SEEK_THRESHOLD_MS,
            pause_debounce_ms: DEFAULT_PAUSE_DEBOUNCE_MS,
            debug: false,
            vocabulary: Vocabulary::default(),
        }
    }
}

impl TrackerConfig {
    pub fn new(actor: Actor, activity: Activity) -> Self {
        Self {
            actor,
            activity,
            ..Self::default()
        }
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Failed to parse tracker config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tracker config from {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Invalid tracker config in {}", path.display()))
    }

    /// Applies `VIDEO_TRACKER_DEBUG=1|true` on top of the loaded values.
    pub fn with_env_overrides(mut self) -> Self {
        let debug_env = std::env::var(DEBUG_ENV_VAR)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        self.debug |= debug_env;
        self
    }

    pub fn seek_threshold(&self) -> Duration {
        Duration::from_millis(self.seek_threshold_ms)
    }

    pub fn pause_debounce(&self) -> Duration {
        Duration::from_millis(self.pause_debounce_ms)
    }
}
