use std::time::Duration;

use tokio::time::Instant;

use crate::{
    config::TrackerConfig,
    models::{Activity, Actor, IsoDuration, Statement, StatementResult, Verb},
    player::PlayerState,
    vocabulary::Vocabulary,
};

use super::state::SessionState;

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// What a single player notification turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// Statement for the caller to deliver now.
    Emit(Statement),
    /// A pause was recorded; run [`StatementBuilder::pause_check`] with this
    /// time once the debounce window has passed.
    DeferPause(IsoDuration),
    /// Nothing to report.
    Ignored,
}

impl Classified {
    pub fn into_statement(self) -> Option<Statement> {
        match self {
            Classified::Emit(statement) => Some(statement),
            _ => None,
        }
    }
}

/// Turns player notifications into statements, reading and updating the
/// session state it is handed.
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    actor: Actor,
    activity: Activity,
    vocabulary: Vocabulary,
    seek_threshold: Duration,
}

impl StatementBuilder {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            actor: config.actor.clone(),
            activity: config.activity.clone(),
            vocabulary: config.vocabulary.clone(),
            seek_threshold: config.seek_threshold(),
        }
    }

    /// Replaces identity and activity for statements built from now on.
    pub fn change_config(&mut self, actor: Actor, activity: Activity) {
        self.actor = actor;
        self.activity = activity;
    }

    /// Dispatches one notification. `now` is the wall-clock instant it arrived.
    pub fn classify(
        &self,
        state: &mut SessionState,
        event: PlayerState,
        time: IsoDuration,
        now: Instant,
    ) -> Classified {
        let statement = match event {
            PlayerState::Unstarted => {
                log_info!("yt: unstarted");
                Some(self.initialize())
            }
            PlayerState::Ended => {
                log_info!("yt: ended");
                self.complete(state, time)
            }
            PlayerState::Playing => Some(self.play(state, time, now)),
            PlayerState::Paused => {
                self.mark_paused(state, now);
                return Classified::DeferPause(time);
            }
            PlayerState::Buffering | PlayerState::Cued => {
                log_info!("yt: {}", event.as_str());
                None
            }
        };

        statement.map_or(Classified::Ignored, Classified::Emit)
    }

    pub fn initialize(&self) -> Statement {
        self.build(Verb::Initialized, None)
    }

    /// Play-vs-seek decision. A play within the seek threshold of the last
    /// pause on a started session is a seek and arms seek suppression.
    pub fn play(&self, state: &mut SessionState, time: IsoDuration, now: Instant) -> Statement {
        if !state.started || !state.within_seek_window(now, self.seek_threshold) {
            log_info!("yt: playing");
            state.started = true;
            return self.timed(Verb::Played, time);
        }

        log_info!("yt: seeking");
        state.seeking = true;
        self.seek(time)
    }

    pub fn mark_paused(&self, state: &mut SessionState, now: Instant) {
        log_debug!("yt: pause reported, deferring check");
        state.last_pause_at = Some(now);
    }

    /// Deferred half of a pause. Consumes seek suppression if a seek claimed
    /// this pause, otherwise reports it. Nothing once the session has exited.
    pub fn pause_check(&self, state: &mut SessionState, time: IsoDuration) -> Option<Statement> {
        if state.exited {
            log_debug!("yt: pause dropped, session already exited");
            return None;
        }

        if state.seeking {
            log_debug!("yt: pause superseded by seek");
            state.seeking = false;
            return None;
        }

        log_info!("yt: paused");
        Some(self.timed(Verb::Paused, time))
    }

    pub fn seek(&self, time: IsoDuration) -> Statement {
        self.timed(Verb::Seeked, time)
    }

    /// Completion fires once per session.
    pub fn complete(&self, state: &mut SessionState, time: IsoDuration) -> Option<Statement> {
        if state.completed {
            return None;
        }

        state.completed = true;
        Some(self.build(Verb::Completed, Some(StatementResult::completion(time))))
    }

    /// Session summary: `terminated` after completion, `abandoned` otherwise.
    /// Nothing if playback never started or the summary was already produced.
    pub fn exit(&self, state: &mut SessionState) -> Option<Statement> {
        if !state.started || state.exited {
            return None;
        }

        state.exited = true;
        let verb = if state.completed {
            Verb::Terminated
        } else {
            Verb::Abandoned
        };
        log_info!("yt: {}", verb.as_str());
        Some(self.build(verb, None))
    }

    fn timed(&self, verb: Verb, time: IsoDuration) -> Statement {
        let result = self
            .vocabulary
            .extension_key(verb)
            .map(|key| StatementResult::extension(key, time));
        self.build(verb, result)
    }

    fn build(&self, verb: Verb, result: Option<StatementResult>) -> Statement {
        Statement::new(
            self.actor.clone(),
            self.vocabulary.descriptor(verb),
            self.activity.clone(),
            result,
        )
    }
}
