//! Session state across rounds.
//!
//! A `Session` holds the random source, the current `RoundState` and the
//! running `SessionSummary`. Front ends hold exactly one.

pub mod play;
pub mod summary;

pub use play::Session;
pub use summary::SessionSummary;
