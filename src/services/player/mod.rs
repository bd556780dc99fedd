//! Player state container and its collaborators.
//!
//! [`PlayerState`] holds the session's playback state and applies
//! [`PlayerAction`]s as total, synchronous transitions. [`PlayerStore`] owns
//! one state per session and notifies watchers. Advancing through the queue
//! is not the container's job: it only signals `Loading`, and a
//! [`QueueResolver`] settles the request through [`skip`].

mod action;
mod resolver;
mod state;
mod store;
mod ticker;
mod types;

#[cfg(test)]
mod tests;

pub use action::PlayerAction;
pub use resolver::{QueueAdvancer, QueueResolver, Resolution, SkipOutcome, skip};
pub use state::PlayerState;
pub use store::PlayerStore;
pub use ticker::{ProgressTicker, SharedResolver, TickOutcome};
pub use types::{PlaybackStatus, RepeatMode, SkipDirection, Track, TrackId};
