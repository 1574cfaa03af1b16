//! Client-side store for a blog backed by a JSON placeholder REST API.
//!
//! Posts and users are fetched from the remote collections, normalized into
//! entity collections and held in one explicit [`Store`]. Every state change
//! is a pure reducer step over an intent; selectors derive the views.

pub mod api;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod posts;
pub mod status;
pub mod store;
pub mod users;
pub mod view;

pub use error::{ErrorKind, StoreError};
pub use status::RequestStatus;
pub use store::Store;
