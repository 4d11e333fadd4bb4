//! Video experience tracker.
//!
//! Watches the state transitions of an embedded video player and turns them
//! into xAPI-style experience statements (`initialized`, `played`, `paused`,
//! `seeked`, `completed`, `terminated`, `abandoned`) handed to a
//! [`StatementSender`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use video_tracker_lib::{StatementLog, TrackerConfig, VideoTracker};
//!
//! # async fn demo() {
//! let log = StatementLog::new();
//! let tracker = VideoTracker::new(TrackerConfig::default(), Arc::new(|| 0.0_f64), Arc::new(log.clone()));
//!
//! tracker.on_player_ready().await;
//! tracker.on_state_change(-1).await; // unstarted
//! tracker.on_state_change(1).await; // playing
//! tracker.close().await; // page is going away
//! # }
//! ```

pub mod config;
pub mod delivery;
pub mod models;
pub mod player;
pub mod session;
mod utils;
pub mod vocabulary;

pub use config::TrackerConfig;
pub use delivery::{LogSender, StatementLog, StatementSender};
pub use models::{Activity, Actor, IsoDuration, Statement, StatementResult, Verb};
pub use player::{PlayerState, VideoPlayer};
pub use session::{SessionState, TrackerListener, VideoTracker};
pub use vocabulary::Vocabulary;

/// Installs `env_logger` (reads `RUST_LOG`, defaults to info). Safe to call
/// more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
