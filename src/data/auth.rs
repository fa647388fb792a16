//! Client for the companion account service. The session rides on an HTTP
//! cookie, so the reqwest cookie store does the bookkeeping; callers only
//! see `SessionInfo` and typed errors.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const AUTH_URL: &str = "http://127.0.0.1:8787";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email must contain '@' and password at least 6 characters")]
    InvalidInput,
    #[error("invalid email or password")]
    BadCredentials,
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("account service error (status {0})")]
    Server(StatusCode),
    #[error("account service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// What the account service knows about the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthClient {
    pub fn new() -> Self {
        Self::with_base_url(AUTH_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .cookie_store(true)
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// Never errors on a reachable service: an expired or absent session is
    /// a normal unauthenticated answer, not a failure.
    pub async fn me(&self) -> Result<SessionInfo, AuthError> {
        let response = self
            .client
            .get(format!("{}/api/auth/me", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Server(response.status()));
        }

        let payload: MePayload = response.json().await?;
        Ok(SessionInfo {
            authenticated: payload.authenticated,
            email: payload.email,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionInfo, AuthError> {
        validate_credentials(email, password)?;
        let response = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&CredentialsPayload { email, password })
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => Ok(SessionInfo {
                authenticated: true,
                email: Some(email.to_string()),
            }),
            StatusCode::BAD_REQUEST => Err(AuthError::InvalidInput),
            StatusCode::UNAUTHORIZED => Err(AuthError::BadCredentials),
            s => Err(AuthError::Server(s)),
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<SessionInfo, AuthError> {
        validate_credentials(email, password)?;
        let response = self
            .client
            .post(format!("{}/api/auth/register", self.base_url))
            .json(&CredentialsPayload { email, password })
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => Ok(SessionInfo {
                authenticated: true,
                email: Some(email.to_string()),
            }),
            StatusCode::BAD_REQUEST => Err(AuthError::InvalidInput),
            StatusCode::CONFLICT => Err(AuthError::EmailTaken),
            s => Err(AuthError::Server(s)),
        }
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/api/auth/logout", self.base_url))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Server(response.status()))
        }
    }
}

/// Mirrors the service's own checks so obviously bad input never leaves the
/// process.
fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.contains('@') && password.len() >= 6 {
        Ok(())
    } else {
        Err(AuthError::InvalidInput)
    }
}

#[derive(Debug, Serialize)]
struct CredentialsPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct MePayload {
    authenticated: bool,
    email: Option<String>,
}
