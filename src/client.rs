//! HTTP client for the file-management API
//!
//! Thin typed wrappers over the four endpoints the benchmark touches:
//! account registration, login, directory creation, and the breadcrumb
//! lookup. Every call is fatal on an unexpected status; there is no retry.

use crate::{
    error::{AppError, Result},
    models::Credentials,
};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Registration request body
#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    nickname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Login request body
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Login response; the token is opaque to this tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
}

/// Directory creation request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDirectoryRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_uuid: Option<&'a str>,
}

/// Directory creation response
#[derive(Debug, Deserialize)]
struct CreateDirectoryResponse {
    uuid: String,
}

/// Client for the file-management API under a fixed base URL
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the given request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("breadcrumb-bench/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Register a throwaway user account
    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        let body = RegisterRequest {
            username: &credentials.username,
            password: &credentials.password,
            email: &credentials.email,
            nickname: credentials.nickname.as_deref(),
            description: credentials.description.as_deref(),
        };

        let response = self
            .http
            .post(format!("{}/auth/register", self.base_url))
            .json(&body)
            .send()
            .await?;

        expect_created("register", response).await?;
        Ok(())
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let body = expect_created("login", response).await?;
        let parsed: LoginResponse = serde_json::from_slice(&body)
            .map_err(|_| AppError::parse("invalid login response: missing accessToken"))?;
        Ok(parsed.access_token)
    }

    /// Create a directory, optionally under a parent, returning its UUID
    pub async fn create_directory(
        &self,
        token: &str,
        name: &str,
        parent_uuid: Option<&str>,
    ) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/files/directory", self.base_url))
            .bearer_auth(token)
            .json(&CreateDirectoryRequest { name, parent_uuid })
            .send()
            .await?;

        let body = expect_created("create directory", response).await?;
        let parsed: CreateDirectoryResponse = serde_json::from_slice(&body)
            .map_err(|_| AppError::parse("invalid directory response: missing uuid"))?;
        Ok(parsed.uuid)
    }

    /// Fetch the breadcrumb for a directory, timing the call
    ///
    /// The clock starts immediately before the request is issued and stops
    /// once the full response body has arrived, before the status check and
    /// the JSON parse. Requires HTTP 200.
    pub async fn breadcrumb_timed(&self, token: &str, uuid: &str) -> Result<(Duration, Value)> {
        let url = format!("{}/files/uuid/{}/breadcrumb", self.base_url, uuid);

        let start = Instant::now();
        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let elapsed = start.elapsed();

        if status != StatusCode::OK {
            return Err(AppError::unexpected_status(
                "breadcrumb",
                status.as_u16(),
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        let parsed: Value = serde_json::from_slice(&body)?;
        Ok((elapsed, parsed))
    }
}

/// Require a 200 or 201 response, returning its body bytes
async fn expect_created(operation: &'static str, response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    let body = response.bytes().await?;

    if status == StatusCode::OK || status == StatusCode::CREATED {
        Ok(body.to_vec())
    } else {
        Err(AppError::unexpected_status(
            operation,
            status.as_u16(),
            String::from_utf8_lossy(&body).into_owned(),
        ))
    }
}
