use crate::mvi::Reducer;
use crate::status::RequestStatus;
use crate::users::intent::UsersIntent;
use crate::users::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::FetchPending => {
                state.status = RequestStatus::Loading;
            }
            UsersIntent::FetchFulfilled { users } => {
                state.status = RequestStatus::Succeeded;
                state.error = None;
                state.entities.set_all(users);
            }
            UsersIntent::FetchRejected { message } => {
                state.status = RequestStatus::Failed;
                state.error = Some(message);
            }
        }
        state
    }
}
