//! Firebase Authentication over REST
//!
//! Talks to the identity toolkit (`accounts:*`) and secure token endpoints
//! directly, keeping the resulting session in a [`SessionStore`].

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{IdentityProvider, IdpCredential, SessionStore};
use crate::config::Config;
use crate::domain::{Session, UserProfile, DEFAULT_TOKEN_LIFETIME_SECS};
use crate::error::{AuthError, AuthResult};

/// Tokens expiring within this window are refreshed before use
const REFRESH_LEEWAY_SECS: i64 = 60;

/// REST client for the identity provider
pub struct FirebaseIdentity<S: SessionStore> {
    http: reqwest::Client,
    api_key: String,
    identity_url: String,
    secure_token_url: String,
    store: S,
}

// ========================
// Wire Types
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordArgs<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpArgs {
    post_body: String,
    request_uri: &'static str,
    return_idp_credential: bool,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateArgs<'a> {
    id_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<&'a str>,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupArgs<'a> {
    id_token: &'a str,
}

/// Shared shape of the `accounts:*` responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountPayload {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupPayload {
    #[serde(default)]
    users: Vec<AccountPayload>,
}

#[derive(Debug, Deserialize)]
struct RefreshPayload {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl AccountPayload {
    fn profile(&self) -> UserProfile {
        UserProfile {
            uid: self.local_id.clone(),
            email: self.email.clone().unwrap_or_default(),
            display_name: self.display_name.clone().filter(|s| !s.is_empty()),
            photo_url: self.photo_url.clone().filter(|s| !s.is_empty()),
        }
    }

    fn into_session(self) -> AuthResult<Session> {
        let profile = self.profile();
        let id_token = self.id_token.ok_or_else(|| AuthError::Decode("missing idToken".into()))?;
        let refresh_token = self
            .refresh_token
            .ok_or_else(|| AuthError::Decode("missing refreshToken".into()))?;
        Ok(Session::new(
            profile,
            id_token,
            refresh_token,
            parse_expires_in(self.expires_in.as_deref()),
            Utc::now(),
        ))
    }
}

fn parse_expires_in(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)
}

/// Error code from a provider error body.
/// Messages look like `WEAK_PASSWORD : Password should be at least 6 characters`.
fn parse_error_code(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| {
            envelope
                .error
                .message
                .split(" : ")
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        })
        .unwrap_or_else(|_| "UNKNOWN".to_string())
}

// ========================
// Client
// ========================

impl<S: SessionStore> FirebaseIdentity<S> {
    pub fn new(config: &Config, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.firebase_api_key.clone(),
            identity_url: config.identity_url.clone(),
            secure_token_url: config.secure_token_url.clone(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn accounts<B, T>(&self, endpoint: &str, body: &B) -> AuthResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/v1/accounts:{}?key={}", self.identity_url, endpoint, self.api_key);
        log::debug!("[identity] accounts:{}", endpoint);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AuthResult<T> {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(|e| AuthError::Decode(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            let code = parse_error_code(&body);
            log::warn!("[identity] rejected with {} ({})", code, status);
            Err(AuthError::Provider { code })
        }
    }

    /// Fill in profile fields the password sign-in response leaves out
    async fn lookup(&self, id_token: &str) -> AuthResult<Option<UserProfile>> {
        let payload: LookupPayload = self.accounts("lookup", &LookupArgs { id_token }).await?;
        Ok(payload.users.first().map(AccountPayload::profile))
    }

    async fn refresh(&self, session: Session) -> AuthResult<Session> {
        let url = format!("{}/v1/token?key={}", self.secure_token_url, self.api_key);
        log::debug!("[identity] refreshing id token");
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", session.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let payload: RefreshPayload = match Self::decode(response).await {
            Ok(payload) => payload,
            Err(err) => {
                if err.is_session_dead() {
                    log::warn!("[identity] session can no longer be refreshed, signing out");
                    self.store.expire()?;
                }
                return Err(err);
            }
        };

        let refreshed = Session::new(
            session.profile,
            payload.id_token,
            payload.refresh_token,
            parse_expires_in(Some(&payload.expires_in)),
            Utc::now(),
        );
        self.store.save(&refreshed)?;
        Ok(refreshed)
    }
}

#[async_trait(?Send)]
impl<S: SessionStore> IdentityProvider for FirebaseIdentity<S> {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
        photo_url: Option<&str>,
    ) -> AuthResult<Session> {
        let args = PasswordArgs { email, password, return_secure_token: true };
        let payload: AccountPayload = self.accounts("signUp", &args).await?;
        let session = payload.into_session()?;
        self.store.save(&session)?;
        log::info!("[identity] account created for {}", session.profile.uid);

        // The account exists from here on; a failed profile write is reported
        // separately so the caller can still treat the user as signed in.
        self.update_profile(Some(display_name), photo_url)
            .await
            .map_err(|err| AuthError::ProfileUpdate {
                code: err.code().unwrap_or("UNKNOWN").to_string(),
            })
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session> {
        let args = PasswordArgs { email, password, return_secure_token: true };
        let payload: AccountPayload = self.accounts("signInWithPassword", &args).await?;
        let mut session = payload.into_session()?;

        match self.lookup(&session.id_token).await {
            Ok(Some(profile)) => session.profile = profile,
            Ok(None) => {}
            Err(err) => log::warn!("[identity] profile lookup failed: {}", err),
        }

        self.store.save(&session)?;
        log::info!("[identity] signed in {}", session.profile.uid);
        Ok(session)
    }

    async fn sign_in_with_idp(&self, credential: &IdpCredential) -> AuthResult<Session> {
        let args = IdpArgs {
            post_body: format!(
                "id_token={}&providerId={}",
                credential.id_token, credential.provider_id
            ),
            request_uri: "http://localhost",
            return_idp_credential: true,
            return_secure_token: true,
        };
        let payload: AccountPayload = self.accounts("signInWithIdp", &args).await?;
        let session = payload.into_session()?;
        self.store.save(&session)?;
        log::info!("[identity] signed in {} via {}", session.profile.uid, credential.provider_id);
        Ok(session)
    }

    async fn update_profile(
        &self,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> AuthResult<Session> {
        let id_token = self.fresh_token(false).await?.ok_or(AuthError::NotSignedIn)?;
        let mut session = self.store.load().ok_or(AuthError::NotSignedIn)?;

        let args = UpdateArgs { id_token: &id_token, display_name, photo_url, return_secure_token: true };
        let payload: AccountPayload = self.accounts("update", &args).await?;

        session.profile.display_name = payload.display_name.clone().or(session.profile.display_name);
        session.profile.photo_url = payload.photo_url.clone().or(session.profile.photo_url);
        if let (Some(id_token), Some(refresh_token)) = (payload.id_token, payload.refresh_token) {
            session = Session::new(
                session.profile,
                id_token,
                refresh_token,
                parse_expires_in(payload.expires_in.as_deref()),
                Utc::now(),
            );
        }
        self.store.save(&session)?;
        Ok(session)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        log::info!("[identity] signing out");
        self.store.clear()
    }

    fn current_session(&self) -> Option<Session> {
        self.store.load()
    }

    async fn fresh_token(&self, force_refresh: bool) -> AuthResult<Option<String>> {
        let Some(session) = self.store.load() else {
            return Ok(None);
        };
        if !force_refresh && session.is_fresh(Utc::now(), Duration::seconds(REFRESH_LEEWAY_SECS)) {
            return Ok(Some(session.id_token));
        }
        let refreshed = self.refresh(session).await?;
        Ok(Some(refreshed.id_token))
    }
}
