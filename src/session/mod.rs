pub mod classifier;
pub mod controller;
pub mod listener;
pub mod state;

pub use classifier::{Classified, StatementBuilder};
pub use controller::{VideoTracker, READY_MESSAGE};
pub use listener::{NoopListener, TrackerListener};
pub use state::SessionState;
