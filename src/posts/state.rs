use std::cmp::Ordering;

use crate::entity::EntityCollection;
use crate::model::Post;
use crate::mvi::SliceState;
use crate::status::RequestStatus;

/// Newest first; equal dates fall back to ascending id.
pub(crate) fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostsState {
    pub entities: EntityCollection<Post>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

impl Default for PostsState {
    fn default() -> Self {
        Self {
            entities: EntityCollection::new(newest_first),
            status: RequestStatus::Idle,
            error: None,
        }
    }
}

impl SliceState for PostsState {}
