//! Records held by the stores and their wire representations.

mod post;
mod reaction;
mod user;

pub use post::{NewPost, Post, RemotePost};
pub use reaction::{ReactionKind, Reactions, UnknownReaction};
pub use user::User;

/// Serde helpers shared by the wire types.
pub(crate) mod serde_util {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Format a timestamp the way browsers print `Date#toISOString`.
    pub fn iso_millis(date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub mod iso_date {
        use super::*;

        pub fn serialize<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&iso_millis(date))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
            let raw = String::deserialize(d)?;
            DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(serde::de::Error::custom)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LenientId {
        Number(u64),
        Text(String),
    }

    /// Accept an id sent either as a JSON number or as a numeric string.
    pub fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        match Option::<LenientId>::deserialize(d)? {
            None => Ok(None),
            Some(LenientId::Number(n)) => Ok(Some(n)),
            Some(LenientId::Text(s)) => s
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("'{}' is not a numeric id", s))),
        }
    }
}
