//! Observability for the client registry
//!
//! Structured JSON log lines, one per event. Event names are
//! SCREAMING_SNAKE_CASE constants collected in [`events`].

pub mod events;
mod logger;

pub use logger::{Logger, Severity};
