use std::cmp::Ordering;

use crate::entity::EntityCollection;
use crate::model::User;
use crate::mvi::SliceState;
use crate::status::RequestStatus;

fn by_id(a: &User, b: &User) -> Ordering {
    a.id.cmp(&b.id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsersState {
    pub entities: EntityCollection<User>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            entities: EntityCollection::new(by_id),
            status: RequestStatus::Idle,
            error: None,
        }
    }
}

impl SliceState for UsersState {}
