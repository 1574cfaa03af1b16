use crate::mvi::{Intent, Reducer, SliceState};
use crate::posts::{PostsIntent, PostsReducer, PostsState};
use crate::users::{UsersIntent, UsersReducer, UsersState};

/// Root state: one field per slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub posts: PostsState,
    pub users: UsersState,
}

impl SliceState for AppState {}

#[derive(Debug, Clone)]
pub enum AppIntent {
    Posts(PostsIntent),
    Users(UsersIntent),
}

impl Intent for AppIntent {}

impl From<PostsIntent> for AppIntent {
    fn from(intent: PostsIntent) -> Self {
        AppIntent::Posts(intent)
    }
}

impl From<UsersIntent> for AppIntent {
    fn from(intent: UsersIntent) -> Self {
        AppIntent::Users(intent)
    }
}

/// Routes each intent to the reducer of its slice.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AppState { posts, users } = state;
        match intent {
            AppIntent::Posts(intent) => AppState {
                posts: PostsReducer::reduce(posts, intent),
                users,
            },
            AppIntent::Users(intent) => AppState {
                posts,
                users: UsersReducer::reduce(users, intent),
            },
        }
    }
}
