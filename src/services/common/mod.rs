//! Common building blocks shared by services

/// Watchable single-writer values
pub mod property;

pub use property::Property;
