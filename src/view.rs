//! Plain-text rendering of the list, post and user pages.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::model::{Post, Reactions};
use crate::posts::{posts_error, posts_status, select_all_posts, select_post_by_id, select_posts_by_user};
use crate::status::RequestStatus;
use crate::store::AppState;
use crate::users::{author_name, select_all_users, select_user_by_id};

/// Length of the body excerpt on the list page, in characters.
pub const EXCERPT_LEN: usize = 100;

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// Rounded distance between `date` and `now`, e.g. "about 2 hours".
pub fn distance(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds().abs();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 1 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / MINUTES_IN_HOUR as f64).round() as i64;
        format!("about {}", plural(hours, "hour"))
    } else if minutes < 2520 {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        plural(days, "day")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        format!("about {}", plural(months, "month"))
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        if months < 12 {
            return plural(months, "month");
        }
        let years = months / 12;
        match months % 12 {
            0..=2 => format!("about {}", plural(years, "year")),
            3..=8 => format!("over {}", plural(years, "year")),
            _ => format!("almost {}", plural(years + 1, "year")),
        }
    }
}

/// "3 minutes ago" style timestamp.
pub fn time_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{} ago", distance(date, now))
}

/// The first `max_chars` characters of `body`.
pub fn excerpt(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

/// Reaction buttons as one line: `👍 0  😮 2 ...`.
pub fn render_reactions(reactions: &Reactions) -> String {
    reactions
        .iter()
        .map(|(kind, count)| format!("{} {}", kind.emoji(), count))
        .collect::<Vec<_>>()
        .join("  ")
}

fn write_post_card(out: &mut String, state: &AppState, post: &Post, now: DateTime<Utc>) {
    let _ = writeln!(out, "#{} {}", post.id, post.title);
    let _ = writeln!(out, "{}", excerpt(&post.body, EXCERPT_LEN));
    let _ = writeln!(
        out,
        "by {} | {}",
        author_name(&state.users, post),
        time_ago(post.date, now)
    );
    let _ = writeln!(out, "{}", render_reactions(&post.reactions));
}

/// The home page: every post, newest first, or the fetch status.
pub fn render_post_list(state: &AppState, now: DateTime<Utc>) -> String {
    match posts_status(&state.posts) {
        RequestStatus::Idle | RequestStatus::Loading => "Loading...\n".to_string(),
        RequestStatus::Failed => {
            format!("{}\n", posts_error(&state.posts).unwrap_or("Failed to load posts"))
        }
        RequestStatus::Succeeded => {
            let mut out = String::new();
            for (i, post) in select_all_posts(&state.posts).into_iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_post_card(&mut out, state, post, now);
            }
            out
        }
    }
}

/// A single post with its full body.
pub fn render_post(state: &AppState, id: u64, now: DateTime<Utc>) -> String {
    let Some(post) = select_post_by_id(&state.posts, id) else {
        return "Post Not Found\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", post.body);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "by {} | {}",
        author_name(&state.users, post),
        time_ago(post.date, now)
    );
    let _ = writeln!(out, "{}", render_reactions(&post.reactions));
    out
}

/// The user directory.
pub fn render_user_directory(state: &AppState) -> String {
    let mut out = String::new();
    for user in select_all_users(&state.users) {
        let _ = writeln!(out, "{:>3}  {}", user.id, user.name);
    }
    out
}

/// One user and the titles of their posts.
pub fn render_user_page(state: &AppState, id: u64) -> String {
    let Some(user) = select_user_by_id(&state.users, id) else {
        return "User Not Found\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", user.name);
    for (i, post) in select_posts_by_user(&state.posts, id).into_iter().enumerate() {
        let _ = writeln!(out, "{}. {} (#{})", i + 1, post.title, post.id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReactionKind, User};
    use crate::mvi::Reducer;
    use crate::posts::PostsIntent;
    use crate::store::{AppIntent, AppReducer};
    use crate::users::UsersIntent;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(minutes: i64) -> String {
        time_ago(now() - Duration::minutes(minutes), now())
    }

    #[test]
    fn time_ago_phrases() {
        assert_eq!(time_ago(now(), now()), "less than a minute ago");
        assert_eq!(ago(1), "1 minute ago");
        assert_eq!(ago(44), "44 minutes ago");
        assert_eq!(ago(60), "about 1 hour ago");
        assert_eq!(ago(5 * 60), "about 5 hours ago");
        assert_eq!(ago(MINUTES_IN_DAY), "1 day ago");
        assert_eq!(ago(3 * MINUTES_IN_DAY), "3 days ago");
        assert_eq!(ago(MINUTES_IN_MONTH), "about 1 month ago");
        assert_eq!(ago(5 * MINUTES_IN_MONTH), "5 months ago");
        assert_eq!(ago(13 * MINUTES_IN_MONTH), "about 1 year ago");
        assert_eq!(ago(30 * MINUTES_IN_MONTH), "over 2 years ago");
        assert_eq!(ago(35 * MINUTES_IN_MONTH), "almost 3 years ago");
    }

    #[test]
    fn excerpt_counts_characters() {
        assert_eq!(excerpt("héllo", 2), "hé");
        assert_eq!(excerpt("short", 100), "short");
    }

    fn loaded_state() -> AppState {
        let post = Post {
            id: 1,
            title: "Hello".into(),
            body: "x".repeat(150),
            user_id: 2,
            date: now() - Duration::minutes(3),
            reactions: Reactions::zeroed(),
        };
        let state = AppReducer::reduce(
            AppState::default(),
            AppIntent::Posts(PostsIntent::FetchFulfilled { posts: vec![post] }),
        );
        let state = AppReducer::reduce(
            state,
            AppIntent::Posts(PostsIntent::ReactionAdded {
                post_id: 1,
                reaction: ReactionKind::Rocket,
            }),
        );
        AppReducer::reduce(
            state,
            AppIntent::Users(UsersIntent::FetchFulfilled {
                users: vec![User::new(2, "Ervin Howell")],
            }),
        )
    }

    #[test]
    fn list_shows_loading_until_settled() {
        assert_eq!(render_post_list(&AppState::default(), now()), "Loading...\n");
    }

    #[test]
    fn list_shows_error_when_failed() {
        let state = AppReducer::reduce(
            AppState::default(),
            AppIntent::Posts(PostsIntent::FetchRejected {
                message: "Network Error".into(),
            }),
        );
        assert_eq!(render_post_list(&state, now()), "Network Error\n");
    }

    #[test]
    fn list_renders_cards() {
        let out = render_post_list(&loaded_state(), now());
        assert!(out.contains("#1 Hello"));
        assert!(out.contains(&format!("{}\n", "x".repeat(100))));
        assert!(!out.contains(&"x".repeat(101)));
        assert!(out.contains("by Ervin Howell | 3 minutes ago"));
        assert!(out.contains("🚀 1"));
    }

    #[test]
    fn post_page_not_found() {
        assert_eq!(render_post(&loaded_state(), 99, now()), "Post Not Found\n");
    }

    #[test]
    fn user_page_lists_titles() {
        let out = render_user_page(&loaded_state(), 2);
        assert_eq!(out, "Ervin Howell\n1. Hello (#1)\n");
        assert_eq!(render_user_page(&loaded_state(), 5), "User Not Found\n");
    }
}
