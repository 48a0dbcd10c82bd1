//! Encoding sinks.
//!
//! Sinks consume rendered frames in request order and are driven by
//! [`crate::render_into`].

/// Animated GIF sink.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
