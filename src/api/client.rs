use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::timeout;

use crate::api::error::ApiError;
use crate::api::timeout::TimeoutConfig;
use crate::config::ApiConfig;
use crate::model::{NewPost, Post, RemotePost, User};

/// Status line of a delete call. The body carries nothing useful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub status: u16,
    pub reason: String,
}

impl DeleteOutcome {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

/// Client for the `/posts` and `/users` collections.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    posts_url: String,
    users_url: String,
    timeouts: TimeoutConfig,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let timeouts = TimeoutConfig::from(config);
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| ApiError::Client { source: e })?;

        let base = config.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            posts_url: format!("{}{}", base, config.posts_path),
            users_url: format!("{}{}", base, config.users_path),
            timeouts,
        })
    }

    pub fn posts_url(&self) -> &str {
        &self.posts_url
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    fn post_url(&self, id: u64) -> String {
        format!("{}/{}", self.posts_url, id)
    }

    /// `GET /posts`
    pub async fn list_posts(&self) -> Result<Vec<RemotePost>, ApiError> {
        let url = self.posts_url.clone();
        self.fetch_json(self.client.get(&url), &url).await
    }

    /// `POST /posts`, returns the echoed record.
    pub async fn create_post(&self, post: &NewPost) -> Result<RemotePost, ApiError> {
        let url = self.posts_url.clone();
        self.fetch_json(self.client.post(&url).json(post), &url).await
    }

    /// `PUT /posts/{id}` with the full record, returns the echo.
    pub async fn update_post(&self, post: &Post) -> Result<RemotePost, ApiError> {
        let url = self.post_url(post.id);
        self.fetch_json(self.client.put(&url).json(post), &url).await
    }

    /// `DELETE /posts/{id}`.
    ///
    /// Any HTTP answer is an outcome; only transport failures are errors.
    pub async fn delete_post(&self, id: u64) -> Result<DeleteOutcome, ApiError> {
        let url = self.post_url(id);
        let response = self.send(self.client.delete(&url), &url).await?;
        let status = response.status();
        Ok(DeleteOutcome {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    }

    /// `GET /users`
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.users_url.clone();
        self.fetch_json(self.client.get(&url), &url).await
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(url = %url, "Sending request");

        let result = timeout(self.timeouts.request, request.send()).await;
        let response = match result {
            Ok(response) => response.map_err(|e| ApiError::Transport {
                url: url.to_string(),
                source: e,
            })?,
            Err(_) => {
                return Err(ApiError::Timeout {
                    duration: self.timeouts.request.as_secs(),
                })
            }
        };

        tracing::debug!(url = %url, status = response.status().as_u16(), "Response received");
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(request, url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = timeout(self.timeouts.request, response.bytes())
            .await
            .map_err(|_| ApiError::Timeout {
                duration: self.timeouts.request.as_secs(),
            })?
            .map_err(|e| ApiError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}
