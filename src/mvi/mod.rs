//! Model-View-Intent (MVI) primitives for the entity stores.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Selectors ──→ View
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: a slice of the application state (posts, users)
//! - **Intent**: a local action or the outcome of a remote call
//! - **Reducer**: pure function that produces the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
