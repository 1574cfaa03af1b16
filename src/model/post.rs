use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::model::reaction::Reactions;
use crate::model::serde_util::{iso_date, lenient_id};

/// A blog post as held by the posts store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
    /// ISO-8601 on the wire, millisecond precision.
    #[serde(with = "iso_date")]
    pub date: DateTime<Utc>,
    pub reactions: Reactions,
}

impl Entity for Post {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Post {
    /// Build a store record from a fetched remote record.
    ///
    /// Returns `None` when the remote record carries no id or no author.
    pub fn from_remote(remote: RemotePost, date: DateTime<Utc>, reactions: Reactions) -> Option<Self> {
        Some(Self {
            id: remote.id?,
            title: remote.title,
            body: remote.body,
            user_id: remote.user_id?,
            date,
            reactions,
        })
    }
}

/// A post as the remote API sends it.
///
/// The placeholder API has no dates or reactions, echoes whatever `userId`
/// it was given (number or string) and may omit `id` on failed writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<u64>,
}

/// Input of the create form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: u64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }

    /// Name of the first empty required field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("title")
        } else if self.body.trim().is_empty() {
            Some("body")
        } else {
            None
        }
    }
}
