//! Posts slice: ordered posts, fetch status and the last fetch error.

mod intent;
mod normalize;
mod reducer;
mod selectors;
mod state;

pub use intent::PostsIntent;
pub use normalize::{created_post, fetched_posts, updated_post};
pub use reducer::PostsReducer;
pub use selectors::{
    posts_error, posts_status, select_all_posts, select_post_by_id, select_post_ids,
    select_posts_by_user,
};
pub use state::PostsState;
