use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::info;

use crate::{
    config::Config,
    navigation::Navigator,
    services::{
        catalog::Catalog,
        player::{
            PlayerAction, PlayerState, PlayerStore, ProgressTicker, QueueAdvancer, SharedResolver,
        },
        session::SessionGate,
    },
};

/// Container for everything one app session owns
///
/// Built once at startup and shared by the command layer through an `Arc`.
/// Each field has exactly one owner here; there is no global state.
pub struct Services {
    /// Player state container
    pub player: Arc<PlayerStore>,
    /// Queue-advance collaborator for next/previous
    pub resolver: SharedResolver,
    /// Authentication stand-in
    pub session: Arc<SessionGate>,
    /// Screen flow
    pub navigator: Mutex<Navigator>,
    /// Sample content
    pub catalog: Catalog,
    /// Effective configuration
    pub config: Config,
}

impl Services {
    /// Create all session services from configuration
    ///
    /// The player starts with the first catalog track loaded, the rest
    /// queued, paused, with the configured volume and mini-player hint.
    pub fn new(config: Config) -> Self {
        let catalog = Catalog::mock();

        let mut initial = PlayerState::from_tracks(catalog.tracks().to_vec());
        initial.apply(PlayerAction::SetVolume(config.player.initial_volume));
        initial.is_minimized = config.player.start_minimized;

        let resolver: SharedResolver = Arc::new(Mutex::new(QueueAdvancer::new(
            config.player.restart_threshold_secs,
        )));
        let session = Arc::new(SessionGate::new(Duration::from_millis(
            config.session.auth_check_delay_ms,
        )));

        info!(
            track = ?initial.current_track.as_ref().map(|t| t.title.as_str()),
            queued = initial.queue.len(),
            "Session services ready"
        );

        Self {
            player: Arc::new(PlayerStore::new(initial)),
            resolver,
            session,
            navigator: Mutex::new(Navigator::new()),
            catalog,
            config,
        }
    }

    /// Brings the navigator in line with the session gate.
    pub async fn sync_navigation(&self) {
        let state = self.session.state();
        self.navigator.lock().await.sync_session(state);
    }

    /// Runs the startup session check, then syncs navigation.
    pub async fn check_session(&self) {
        self.session.check().await;
        self.sync_navigation().await;
    }

    /// Starts simulated playback for the lifetime of the returned handle.
    pub fn start_ticker(&self) -> JoinHandle<()> {
        let ticker = ProgressTicker::new(self.player.clone(), self.resolver.clone());
        ticker.spawn(Duration::from_millis(
            self.config.player.tick_interval_ms.max(1),
        ))
    }
}
