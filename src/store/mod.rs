//! The application state container.
//!
//! One [`Store`] owns both slices. Every change goes through
//! [`Store::dispatch`], which runs the slice reducer under a single write
//! lock; remote calls are awaited outside the lock and their outcome is
//! dispatched as an intent.

mod app;
mod container;

pub use app::{AppIntent, AppReducer, AppState};
pub use container::{BootstrapOutcome, Store};
