//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Local actions (adding a reaction)
/// - Remote call lifecycle events (pending, fulfilled, rejected)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
