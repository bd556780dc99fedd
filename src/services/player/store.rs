use futures::Stream;
use tracing::{debug, instrument, warn};

use super::{PlayerAction, PlayerState};
use crate::services::common::Property;

/// Single owner of the session's [`PlayerState`].
///
/// All mutation goes through [`PlayerStore::dispatch`] or, for
/// read-then-write steps, [`PlayerStore::update`]; readers take snapshots or
/// watch for settled changes. Share it behind an `Arc`.
#[derive(Debug)]
pub struct PlayerStore {
    state: Property<PlayerState>,
}

impl PlayerStore {
    /// Creates a store holding `initial`.
    pub fn new(initial: PlayerState) -> Self {
        Self {
            state: Property::new(initial),
        }
    }

    /// Applies `action` to the held state.
    ///
    /// Watchers are notified only if the state changed. Returns whether it did.
    #[instrument(skip(self, action), fields(action = action.name()))]
    pub fn dispatch(&self, action: PlayerAction) -> bool {
        match &action {
            PlayerAction::SetVolume(volume) if !(0.0..=1.0).contains(volume) => {
                warn!(volume, "Volume outside [0.0, 1.0] accepted as given");
            }
            PlayerAction::UpdateProgress(secs) => {
                let duration = self.state.get().duration_secs;
                if *secs > duration {
                    warn!(secs, duration, "Progress beyond track duration accepted as given");
                }
            }
            _ => {}
        }

        let changed = self.state.update(|state| state.apply(action));
        self.log_change(changed);
        changed
    }

    /// Runs `step` against the held state as one transition.
    ///
    /// No other dispatch or update can land between what `step` reads and
    /// what it writes. `step` must not touch the store itself.
    pub fn update(&self, step: impl FnOnce(&mut PlayerState)) -> bool {
        let changed = self.state.update(step);
        self.log_change(changed);
        changed
    }

    fn log_change(&self, changed: bool) {
        if changed {
            let state = self.state.get();
            debug!(status = %state.status, progress = state.progress_secs, "Player state changed");
        }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> PlayerState {
        self.state.get()
    }

    /// Stream of states: the current one first, then every change.
    pub fn watch(&self) -> impl Stream<Item = PlayerState> + Send + use<> {
        self.state.watch()
    }
}
