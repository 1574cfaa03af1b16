use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::StoreError;
use crate::model::{NewPost, Post, ReactionKind, User};
use crate::mvi::Reducer;
use crate::posts::{
    created_post, fetched_posts, select_post_by_id, updated_post, PostsIntent,
};
use crate::status::RequestStatus;
use crate::store::app::{AppIntent, AppReducer, AppState};
use crate::users::{select_user_by_id, UsersIntent};

type Subscriber = Box<dyn Fn(&AppState) + Send + Sync>;

/// Result of [`Store::bootstrap`]; each fetch reports on its own.
#[derive(Debug)]
pub struct BootstrapOutcome {
    pub posts: Result<Vec<Post>, StoreError>,
    pub users: Result<Vec<User>, StoreError>,
}

/// Explicit state container for posts and users.
///
/// Cloning is cheap and every clone shares the same state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<AppState>,
    subscribers: RwLock<Vec<Subscriber>>,
    api: ApiClient,
}

impl Store {
    pub fn new(api: ApiClient) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(AppState::default()),
                subscribers: RwLock::new(Vec::new()),
                api,
            }),
        }
    }

    /// Build a store talking to the API described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let api = ApiClient::new(&config.api)?;
        Ok(Self::new(api))
    }

    /// A snapshot of the whole state.
    pub fn state(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Read state without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.inner.state.read();
        f(&*state)
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs after every dispatched intent, with the new state.
    /// It must not call `subscribe` itself.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        self.inner.subscribers.write().push(Box::new(callback));
    }

    /// Apply one intent and notify subscribers.
    pub fn dispatch(&self, intent: impl Into<AppIntent>) {
        let snapshot = {
            let mut state = self.inner.state.write();
            reduce_in_place(&mut state, intent.into());
            self.snapshot_for_subscribers(&state)
        };
        self.notify(snapshot);
    }

    /// Copy of `state` taken under the write lock, so every notification
    /// carries the state its own intent produced. `None` without subscribers.
    fn snapshot_for_subscribers(&self, state: &AppState) -> Option<AppState> {
        if self.inner.subscribers.read().is_empty() {
            None
        } else {
            Some(state.clone())
        }
    }

    fn notify(&self, snapshot: Option<AppState>) {
        let Some(snapshot) = snapshot else {
            return;
        };
        for subscriber in self.inner.subscribers.read().iter() {
            subscriber(&snapshot);
        }
    }

    // -- Posts ----------------------------------------------------------------

    /// Load every post from the remote and merge it into the store.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.dispatch(PostsIntent::FetchPending);
        self.complete_posts_fetch().await
    }

    /// Fetch posts only if no fetch ever started.
    ///
    /// Returns `Ok(None)` when the posts slice is not `Idle`.
    pub async fn load_posts_if_idle(&self) -> Result<Option<Vec<Post>>, StoreError> {
        let snapshot = {
            let mut state = self.inner.state.write();
            if state.posts.status != RequestStatus::Idle {
                return Ok(None);
            }
            reduce_in_place(&mut state, PostsIntent::FetchPending.into());
            self.snapshot_for_subscribers(&state)
        };
        self.notify(snapshot);
        self.complete_posts_fetch().await.map(Some)
    }

    async fn complete_posts_fetch(&self) -> Result<Vec<Post>, StoreError> {
        match self.inner.api.list_posts().await {
            Ok(remote) => {
                let posts = fetched_posts(remote, Utc::now());
                tracing::info!(count = posts.len(), "Posts loaded");
                self.dispatch(PostsIntent::FetchFulfilled {
                    posts: posts.clone(),
                });
                Ok(posts)
            }
            Err(e) => {
                let err = StoreError::from(e);
                tracing::warn!(error = %err, "Fetching posts failed");
                self.dispatch(PostsIntent::FetchRejected {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Create a post remotely and insert the echo.
    pub async fn create_post(&self, input: NewPost) -> Result<Post, StoreError> {
        if let Some(field) = input.missing_field() {
            return Err(StoreError::InvalidInput { field });
        }

        let echo = self.inner.api.create_post(&input).await.map_err(|e| {
            let err = StoreError::from(e);
            tracing::warn!(error = %err, "Creating post failed");
            err
        })?;

        let post = created_post(&input, echo, Utc::now()).ok_or_else(|| {
            StoreError::MalformedResponse {
                message: "create response has no id".to_string(),
            }
        })?;

        tracing::info!(id = post.id, "Post created");
        self.dispatch(PostsIntent::Created { post: post.clone() });
        Ok(post)
    }

    /// Send the full record to the remote and store the echo.
    ///
    /// An echo without an id leaves the store unchanged.
    pub async fn update_post(&self, post: Post) -> Result<Post, StoreError> {
        let echo = self.inner.api.update_post(&post).await.map_err(|e| {
            let err = StoreError::from(e);
            tracing::warn!(id = post.id, error = %err, "Updating post failed");
            err
        })?;

        let Some(updated) = updated_post(&post, echo, Utc::now()) else {
            tracing::warn!(id = post.id, "Update could not complete: response has no id");
            return Err(StoreError::MalformedResponse {
                message: format!("update response for post {} has no id", post.id),
            });
        };

        tracing::info!(id = updated.id, "Post updated");
        self.dispatch(PostsIntent::Updated {
            post: updated.clone(),
        });
        Ok(updated)
    }

    /// Delete a post remotely; only a 200 answer removes it locally.
    pub async fn delete_post(&self, post: Post) -> Result<Post, StoreError> {
        let outcome = self.inner.api.delete_post(post.id).await.map_err(|e| {
            let err = StoreError::from(e);
            tracing::warn!(id = post.id, error = %err, "Deleting post failed");
            err
        })?;

        if !outcome.is_ok() {
            tracing::warn!(
                id = post.id,
                status = outcome.status,
                "Delete could not complete"
            );
            return Err(StoreError::UnexpectedStatus {
                status: outcome.status,
                reason: outcome.reason,
            });
        }

        tracing::info!(id = post.id, "Post deleted");
        self.dispatch(PostsIntent::Deleted { id: post.id });
        Ok(post)
    }

    /// Add one `reaction` to post `post_id`. Local only.
    pub fn increment_reaction(
        &self,
        post_id: u64,
        reaction: ReactionKind,
    ) -> Result<Post, StoreError> {
        let (updated, snapshot) = {
            let mut state = self.inner.state.write();
            if select_post_by_id(&state.posts, post_id).is_none() {
                return Err(StoreError::NotFound {
                    entity: "post",
                    id: post_id,
                });
            }
            reduce_in_place(
                &mut state,
                PostsIntent::ReactionAdded { post_id, reaction }.into(),
            );
            (
                select_post_by_id(&state.posts, post_id).cloned(),
                self.snapshot_for_subscribers(&state),
            )
        };
        self.notify(snapshot);
        updated.ok_or(StoreError::NotFound {
            entity: "post",
            id: post_id,
        })
    }

    /// The post with `id`, if the store has it.
    pub fn post(&self, id: u64) -> Result<Post, StoreError> {
        self.read(|state| select_post_by_id(&state.posts, id).cloned())
            .ok_or(StoreError::NotFound { entity: "post", id })
    }

    // -- Users ----------------------------------------------------------------

    /// Load the user directory, replacing what the store held.
    pub async fn fetch_users(&self) -> Result<Vec<User>, StoreError> {
        self.dispatch(UsersIntent::FetchPending);
        match self.inner.api.list_users().await {
            Ok(users) => {
                tracing::info!(count = users.len(), "Users loaded");
                self.dispatch(UsersIntent::FetchFulfilled {
                    users: users.clone(),
                });
                Ok(users)
            }
            Err(e) => {
                let err = StoreError::from(e);
                tracing::warn!(error = %err, "Fetching users failed");
                self.dispatch(UsersIntent::FetchRejected {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// The user with `id`, if the store has it.
    pub fn user(&self, id: u64) -> Result<User, StoreError> {
        self.read(|state| select_user_by_id(&state.users, id).cloned())
            .ok_or(StoreError::NotFound { entity: "user", id })
    }

    // -- Startup --------------------------------------------------------------

    /// Fetch posts and users concurrently.
    pub async fn bootstrap(&self) -> BootstrapOutcome {
        let (posts, users) = tokio::join!(self.fetch_posts(), self.fetch_users());
        BootstrapOutcome { posts, users }
    }
}

fn reduce_in_place(state: &mut AppState, intent: AppIntent) {
    let current = std::mem::take(state);
    *state = AppReducer::reduce(current, intent);
}
