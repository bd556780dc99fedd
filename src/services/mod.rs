/// Shared reactive building blocks
pub mod common;
/// Static sample catalog
pub mod catalog;
/// Player state container, queue resolution and simulated playback
pub mod player;
/// Authentication stand-in
pub mod session;

pub use catalog::Catalog;
pub use player::{PlayerAction, PlayerState, PlayerStore};
pub use session::{SessionError, SessionGate, SessionState};
