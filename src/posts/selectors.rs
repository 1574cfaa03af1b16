//! Derived reads over [`PostsState`].

use crate::model::Post;
use crate::posts::state::PostsState;
use crate::status::RequestStatus;

/// All posts, newest first.
pub fn select_all_posts(state: &PostsState) -> Vec<&Post> {
    state.entities.all()
}

/// Post ids in the same order as [`select_all_posts`].
pub fn select_post_ids(state: &PostsState) -> Vec<u64> {
    state.entities.ids()
}

pub fn select_post_by_id(state: &PostsState, id: u64) -> Option<&Post> {
    state.entities.get(id)
}

/// Posts written by `user_id`, newest first.
pub fn select_posts_by_user(state: &PostsState, user_id: u64) -> Vec<&Post> {
    state
        .entities
        .all()
        .into_iter()
        .filter(|post| post.user_id == user_id)
        .collect()
}

pub fn posts_status(state: &PostsState) -> RequestStatus {
    state.status
}

pub fn posts_error(state: &PostsState) -> Option<&str> {
    state.error.as_deref()
}
