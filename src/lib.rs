//! Encore - client-side state for a music streaming app.
//!
//! The pieces a streaming client keeps in memory while the user listens:
//!
//! - Player state container with total, synchronous transitions
//! - Queue resolution for next/previous with shuffle and repeat
//! - Typed screen navigation gated by a session stand-in
//! - A static sample catalog for the home, search and library screens
//! - CLI and interactive shell standing in for the view layer
//!
//! # Quick Start
//!
//! ```rust
//! use encore::services::player::{PlaybackStatus, PlayerAction, PlayerState, PlayerStore};
//!
//! let store = PlayerStore::new(PlayerState::default());
//! store.dispatch(PlayerAction::Play);
//!
//! assert_eq!(store.get().status, PlaybackStatus::Playing);
//! ```

/// Configuration schema, loading and paths.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface standing in for the screens.
pub mod cli;

/// Typed routes and the navigator.
pub mod navigation;

/// Player, session and catalog services.
pub mod services;

/// Per-session service container.
pub mod service_manager;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{EncoreError, Result};
