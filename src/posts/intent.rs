use crate::model::{Post, ReactionKind};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// `GET /posts` was sent.
    FetchPending,
    /// `GET /posts` answered; records are already dated (see [`fetched_posts`]).
    ///
    /// [`fetched_posts`]: crate::posts::fetched_posts
    FetchFulfilled { posts: Vec<Post> },
    /// `GET /posts` failed.
    FetchRejected { message: String },
    /// A created post came back from the remote.
    Created { post: Post },
    /// An updated post came back from the remote.
    Updated { post: Post },
    /// The remote confirmed a delete.
    Deleted { id: u64 },
    /// Local-only: bump one reaction counter.
    ReactionAdded { post_id: u64, reaction: ReactionKind },
}

impl Intent for PostsIntent {}
