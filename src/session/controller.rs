use std::{sync::Arc, time::Duration};

use log::{debug, error, info, warn};
use tokio::{sync::Mutex, task::JoinHandle, time::Instant};
use tokio_util::sync::CancellationToken;

use crate::{
    config::TrackerConfig,
    delivery::StatementSender,
    models::{Activity, Actor, IsoDuration, Statement},
    player::{PlayerState, VideoPlayer},
};

use super::{
    classifier::{Classified, StatementBuilder},
    listener::{NoopListener, TrackerListener},
    state::SessionState,
};

pub const READY_MESSAGE: &str = "yt: player ready";

struct Session {
    state: SessionState,
    builder: StatementBuilder,
}

/// Where finished statements go: the sender first, then the listener.
#[derive(Clone)]
struct Outlet {
    sender: Arc<dyn StatementSender>,
    listener: Arc<dyn TrackerListener>,
    debug_mode: bool,
}

impl Outlet {
    fn deliver(&self, statement: &Statement) {
        if self.debug_mode {
            match serde_json::to_string(statement) {
                Ok(payload) => info!("sending statement {payload}"),
                Err(err) => warn!("could not render statement {}: {err}", statement.id),
            }
        }

        if let Err(err) = self.sender.send_statement(statement) {
            error!("Failed to send statement {}: {err:?}", statement.id);
        }

        if let Err(err) = self.listener.on_state_change(statement) {
            error!("state-change callback failed: {err:?}");
        }
    }
}

/// Tracks one video view from player-ready to exit.
///
/// Clones share the same session. Player notifications go through
/// [`VideoTracker::on_state_change`]; pauses are reported after the debounce
/// window by a spawned task, and the exit summary is sent when the unload
/// token is cancelled.
#[derive(Clone)]
pub struct VideoTracker {
    session: Arc<Mutex<Session>>,
    player: Arc<dyn VideoPlayer>,
    outlet: Outlet,
    pause_debounce: Duration,
    pending_checks: Arc<Mutex<Vec<JoinHandle<()>>>>,
    exit_hook: Arc<Mutex<Option<JoinHandle<()>>>>,
    unload: CancellationToken,
}

impl VideoTracker {
    pub fn new(
        config: TrackerConfig,
        player: Arc<dyn VideoPlayer>,
        sender: Arc<dyn StatementSender>,
    ) -> Self {
        let config = config.with_env_overrides();

        Self {
            session: Arc::new(Mutex::new(Session {
                state: SessionState::new(),
                builder: StatementBuilder::new(&config),
            })),
            player,
            outlet: Outlet {
                sender,
                listener: Arc::new(NoopListener),
                debug_mode: config.debug,
            },
            pause_debounce: config.pause_debounce(),
            pending_checks: Arc::new(Mutex::new(Vec::new())),
            exit_hook: Arc::new(Mutex::new(None)),
            unload: CancellationToken::new(),
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn TrackerListener>) -> Self {
        self.outlet.listener = listener;
        self
    }

    /// Uses a host-owned token as the page/player closing signal.
    pub fn with_unload_token(mut self, unload: CancellationToken) -> Self {
        self.unload = unload;
        self
    }

    /// Cancelling this token fires the exit summary (once the player is ready).
    pub fn unload_token(&self) -> CancellationToken {
        self.unload.clone()
    }

    pub async fn change_config(&self, actor: Actor, activity: Activity) {
        self.session.lock().await.builder.change_config(actor, activity);
    }

    pub async fn session_state(&self) -> SessionState {
        self.session.lock().await.state.clone()
    }

    /// Player is interactive: notify the listener and arm the exit hook.
    pub async fn on_player_ready(&self) {
        info!("{READY_MESSAGE}");
        if let Err(err) = self.outlet.listener.on_player_ready(READY_MESSAGE) {
            error!("player-ready callback failed: {err:?}");
        }

        let mut hook = self.exit_hook.lock().await;
        if hook.is_some() {
            debug!("exit hook already installed");
            return;
        }

        // The task keeps the tracker alive until the unload token fires.
        let tracker = self.clone();
        let unload = self.unload.clone();
        *hook = Some(tokio::spawn(async move {
            unload.cancelled().await;
            tracker.exit_video().await;
        }));
    }

    /// Handles a raw player state code. Returns the statement that was sent,
    /// if any. Pauses never return one here; they are sent by the deferred check.
    pub async fn on_state_change(&self, code: i32) -> Option<Statement> {
        let Some(event) = PlayerState::from_code(code) else {
            debug!("ignoring unknown player state code {code}");
            return None;
        };

        let position = IsoDuration::from_secs(self.player.current_time());
        let now = Instant::now();

        let outcome = {
            let mut guard = self.session.lock().await;
            let Session { state, builder } = &mut *guard;
            builder.classify(state, event, position, now)
        };

        match outcome {
            Classified::Emit(statement) => {
                self.outlet.deliver(&statement);
                Some(statement)
            }
            Classified::DeferPause(position) => {
                self.schedule_pause_check(position).await;
                None
            }
            Classified::Ignored => None,
        }
    }

    /// Sends the exit summary if the session started and has not exited yet.
    pub async fn exit_video(&self) -> Option<Statement> {
        let statement = {
            let mut guard = self.session.lock().await;
            let Session { state, builder } = &mut *guard;
            builder.exit(state)
        }?;

        self.outlet.deliver(&statement);
        Some(statement)
    }

    /// Signals unload and waits for the exit hook to finish.
    pub async fn close(&self) {
        self.unload.cancel();

        let hook = self.exit_hook.lock().await.take();
        if let Some(handle) = hook {
            if let Err(err) = handle.await {
                error!("exit hook task failed to join: {err}");
            }
        }
    }

    /// Waits for every outstanding pause check to run.
    pub async fn flush(&self) {
        let handles: Vec<_> = self.pending_checks.lock().await.drain(..).collect();
        for handle in handles {
            if let Err(err) = handle.await {
                error!("pause check task failed to join: {err}");
            }
        }
    }

    async fn schedule_pause_check(&self, position: IsoDuration) {
        let session = self.session.clone();
        let outlet = self.outlet.clone();
        let delay = self.pause_debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            // Runs against whatever state exists now; a play that arrived in
            // the meantime may have claimed this pause as part of a seek.
            let statement = {
                let mut guard = session.lock().await;
                let Session { state, builder } = &mut *guard;
                builder.pause_check(state, position)
            };

            if let Some(statement) = statement {
                outlet.deliver(&statement);
            }
        });

        let mut pending = self.pending_checks.lock().await;
        pending.retain(|handle| !handle.is_finished());
        pending.push(handle);
    }
}
