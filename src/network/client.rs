//! HTTP client for the exercise tracker API - one async fn per remote operation

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;

use crate::config::Config;
use crate::constants::{ADD_EXERCISE_PATH, NEW_USER_PATH, USERS_PATH};
use crate::error::ApiError;
use crate::models::{ExerciseInput, User, UserInput};

/// Thin typed wrapper over `reqwest::Client` bound to one API base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(ApiClient {
            client,
            config: config.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_url
    }

    /// `POST /api/exercise/new-user`
    pub async fn create_user(&self, input: &UserInput) -> Result<User, ApiError> {
        let resp = self
            .client
            .post(self.config.endpoint(NEW_USER_PATH))
            .json(input)
            .send()
            .await?;

        if resp.status() == StatusCode::CONFLICT {
            return Err(ApiError::Conflict);
        }
        let body = read_success_body(resp).await?;
        tracing::debug!(%body, "create-user payload");
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /api/exercise/users`
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let resp = self
            .client
            .get(self.config.endpoint(USERS_PATH))
            .send()
            .await?;

        let body = read_success_body(resp).await?;
        tracing::debug!(%body, "list-users payload");
        // An empty table comes back as `null`
        let users: Option<Vec<User>> = serde_json::from_str(&body)?;
        Ok(users.unwrap_or_default())
    }

    /// `POST /api/exercise/add`
    ///
    /// The success payload is not interpreted; only the status decides the outcome.
    pub async fn create_exercise(&self, input: &ExerciseInput) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.config.endpoint(ADD_EXERCISE_PATH))
            .json(input)
            .send()
            .await?;

        let body = read_success_body(resp).await?;
        tracing::debug!(%body, "create-exercise payload");
        Ok(())
    }
}

async fn read_success_body(resp: reqwest::Response) -> Result<String, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(resp.text().await?)
}
