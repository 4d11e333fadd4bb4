use std::time::Duration;

use tokio::time::Instant;

/// Facts needed to tell real pauses and plays apart from seek artifacts.
///
/// One instance lives as long as the video view it tracks. Only the
/// statement builder mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Set by the first `played` statement; never reset.
    pub started: bool,
    /// Set when a play lands inside the seek window; cleared by the deferred pause check.
    pub seeking: bool,
    /// Wall-clock instant of the most recent pause. `None` means no pause yet.
    pub last_pause_at: Option<Instant>,
    /// Set by the completion statement; never reset.
    pub completed: bool,
    /// Set once the exit summary has been produced.
    pub exited: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the last pause, or `None` if the player has never paused.
    pub fn elapsed_since_pause(&self, now: Instant) -> Option<Duration> {
        self.last_pause_at
            .map(|paused_at| now.saturating_duration_since(paused_at))
    }

    /// Whether a play at `now` should be read as a seek rather than a resume.
    pub fn within_seek_window(&self, now: Instant, threshold: Duration) -> bool {
        match self.elapsed_since_pause(now) {
            Some(elapsed) => elapsed <= threshold,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_no_history() {
        let state = SessionState::new();

        assert!(!state.started);
        assert!(!state.seeking);
        assert!(!state.completed);
        assert!(!state.exited);
        assert_eq!(state.last_pause_at, None);
        assert_eq!(state.elapsed_since_pause(Instant::now()), None);
    }

    #[test]
    fn seek_window_requires_a_recent_pause() {
        let threshold = Duration::from_millis(300);
        let paused_at = Instant::now();
        let mut state = SessionState::new();

        assert!(!state.within_seek_window(paused_at, threshold));

        state.last_pause_at = Some(paused_at);
        assert!(state.within_seek_window(paused_at + Duration::from_millis(100), threshold));
        assert!(state.within_seek_window(paused_at + threshold, threshold));
        assert!(!state.within_seek_window(paused_at + Duration::from_millis(301), threshold));
    }

    #[test]
    fn clock_going_backwards_counts_as_zero_elapsed() {
        let now = Instant::now();
        let state = SessionState {
            last_pause_at: Some(now + Duration::from_secs(1)),
            ..SessionState::default()
        };
        assert_eq!(state.elapsed_since_pause(now), Some(Duration::ZERO));
    }
}
