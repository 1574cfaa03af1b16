use crate::model::{Post, User};
use crate::status::RequestStatus;
use crate::users::state::UsersState;

/// Byline shown when a post's author is not in the directory.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// All users, ascending id.
pub fn select_all_users(state: &UsersState) -> Vec<&User> {
    state.entities.all()
}

pub fn select_user_by_id(state: &UsersState, id: u64) -> Option<&User> {
    state.entities.get(id)
}

/// Name of the author of `post`, or [`UNKNOWN_AUTHOR`].
pub fn author_name<'a>(state: &'a UsersState, post: &Post) -> &'a str {
    select_user_by_id(state, post.user_id)
        .map(|u| u.name.as_str())
        .unwrap_or(UNKNOWN_AUTHOR)
}

pub fn users_status(state: &UsersState) -> RequestStatus {
    state.status
}

pub fn users_error(state: &UsersState) -> Option<&str> {
    state.error.as_deref()
}
