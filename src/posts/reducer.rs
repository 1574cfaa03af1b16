use crate::mvi::Reducer;
use crate::posts::intent::PostsIntent;
use crate::posts::state::PostsState;
use crate::status::RequestStatus;

pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::FetchPending => {
                state.status = RequestStatus::Loading;
            }
            PostsIntent::FetchFulfilled { posts } => {
                state.status = RequestStatus::Succeeded;
                state.error = None;
                state.entities.upsert_many(posts);
            }
            PostsIntent::FetchRejected { message } => {
                // Keep whatever was loaded before.
                state.status = RequestStatus::Failed;
                state.error = Some(message);
            }
            PostsIntent::Created { post } | PostsIntent::Updated { post } => {
                state.entities.upsert_one(post);
            }
            PostsIntent::Deleted { id } => {
                state.entities.remove_one(id);
            }
            PostsIntent::ReactionAdded { post_id, reaction } => {
                if let Some(post) = state.entities.get_mut(post_id) {
                    post.reactions.increment(reaction);
                }
            }
        }
        state
    }
}
