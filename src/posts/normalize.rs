//! Turning remote echoes into store records.

use chrono::{DateTime, Duration, Utc};

use crate::model::{NewPost, Post, Reactions, RemotePost};

/// Records of a `GET /posts` answer, ready for the store.
///
/// The remote has no timestamps, so the record at index `i` is dated
/// `i + 1` minutes before `now`: response order becomes recency order.
/// Every record starts with zeroed reactions. Records without an id or a
/// `userId` are dropped.
pub fn fetched_posts(remote: Vec<RemotePost>, now: DateTime<Utc>) -> Vec<Post> {
    remote
        .into_iter()
        .enumerate()
        .filter_map(|(i, post)| {
            let date = now - Duration::minutes(i as i64 + 1);
            Post::from_remote(post, date, Reactions::zeroed())
        })
        .collect()
}

/// Record for the echo of `POST /posts`, stamped `now` with zero reactions.
///
/// The echoed `userId` is already coerced to an integer; fields the echo
/// leaves out fall back to the submitted input. `None` when the echo
/// carries no id.
pub fn created_post(input: &NewPost, echo: RemotePost, now: DateTime<Utc>) -> Option<Post> {
    Some(Post {
        id: echo.id?,
        title: if echo.title.is_empty() { input.title.clone() } else { echo.title },
        body: if echo.body.is_empty() { input.body.clone() } else { echo.body },
        user_id: echo.user_id.unwrap_or(input.user_id),
        date: now,
        reactions: Reactions::zeroed(),
    })
}

/// Record for the echo of `PUT /posts/{id}`.
///
/// Fields present in the echo win over the sent record; reactions always
/// come from the sent record. `None` when the echo carries no id.
pub fn updated_post(sent: &Post, echo: RemotePost, now: DateTime<Utc>) -> Option<Post> {
    let id = echo.id?;
    Some(Post {
        id,
        title: if echo.title.is_empty() { sent.title.clone() } else { echo.title },
        body: if echo.body.is_empty() { sent.body.clone() } else { echo.body },
        user_id: echo.user_id.unwrap_or(sent.user_id),
        date: now,
        reactions: sent.reactions,
    })
}
