use crate::model::User;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    FetchPending,
    /// Replaces the whole directory.
    FetchFulfilled { users: Vec<User> },
    FetchRejected { message: String },
}

impl Intent for UsersIntent {}
