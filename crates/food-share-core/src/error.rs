//! Error Types
//!
//! Failures are never retried; every variant knows how to describe itself
//! to the user so call sites can turn it straight into a notification.

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;
pub type ApiResult<T> = Result<T, ApiError>;

/// Identity provider failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Rejected by the provider with an error code such as `EMAIL_EXISTS`
    #[error("identity provider error: {code}")]
    Provider { code: String },
    /// Account exists but display name / photo could not be set
    #[error("profile update failed: {code}")]
    ProfileUpdate { code: String },
    #[error("not signed in")]
    NotSignedIn,
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("session storage error: {0}")]
    Storage(String),
}

impl AuthError {
    pub fn provider(code: impl Into<String>) -> Self {
        AuthError::Provider { code: code.into() }
    }

    /// Provider code, if the provider produced one
    pub fn code(&self) -> Option<&str> {
        match self {
            AuthError::Provider { code } | AuthError::ProfileUpdate { code } => Some(code),
            _ => None,
        }
    }

    /// Whether the stored session can no longer be refreshed
    pub fn is_session_dead(&self) -> bool {
        matches!(
            self.code(),
            Some("TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_DISABLED" | "USER_NOT_FOUND")
        )
    }

    /// Message shown to the user
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Provider { code } => match code.as_str() {
                "EMAIL_EXISTS" => "This email is already registered. Please use a different email.",
                "INVALID_EMAIL" => "Invalid email address.",
                "WEAK_PASSWORD" => "Password is too weak. Please use a stronger password.",
                "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" => {
                    "Invalid email or password"
                }
                "USER_DISABLED" => "This account has been disabled.",
                "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Please try again later.",
                "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" => {
                    "Your session has expired. Please log in again."
                }
                _ => "Authentication failed. Please try again.",
            }
            .to_string(),
            AuthError::ProfileUpdate { .. } => {
                "Registration successful, but profile update failed. Please try logging in again."
                    .to_string()
            }
            AuthError::NotSignedIn => "Please log in first.".to_string(),
            AuthError::Transport(_) => "Network error. Please check your connection.".to_string(),
            AuthError::Decode(_) | AuthError::Storage(_) => {
                "Authentication failed. Please try again.".to_string()
            }
        }
    }
}

/// Remote API failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success status; `message` is the body's `message` field if any
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    /// The call failed because the signed-in session is gone for good
    pub fn is_session_dead(&self) -> bool {
        matches!(self, ApiError::Auth(err) if err.is_session_dead())
    }

    /// Server-supplied message, or `fallback`
    pub fn user_message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } if !message.is_empty() => message.clone(),
            ApiError::Auth(err) => err.user_message(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Client-side form rejections (the message is the user-facing text)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Please fill in {0}.")]
    MissingField(&'static str),
    #[error("Please select an approximate expiry date/time.")]
    MissingExpiry,
    #[error("Invalid expiry date/time. Please enter a valid date.")]
    InvalidExpiry,
    #[error("Quantity must be a whole number.")]
    InvalidQuantity,
    #[error("Please log in to request this food.")]
    NotSignedIn,
    #[error("You cannot request your own donated food.")]
    OwnListing,
}

impl FormError {
    /// The display text doubles as the message shown next to the form
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
