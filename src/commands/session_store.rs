//! Browser Session Store
//!
//! Keeps the identity provider's session in `localStorage`.

use food_share_core::{AuthError, AuthResult, Session, SessionStore};

const SESSION_KEY: &str = "food-share.session";

/// Window event fired when the provider drops a dead session mid-request
pub const SESSION_EXPIRED_EVENT: &str = "food-share:session-expired";

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = storage()?.get_item(SESSION_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("[session] discarding unreadable session: {}", e);
                None
            }
        }
    }

    fn save(&self, session: &Session) -> AuthResult<()> {
        let raw = serde_json::to_string(session).map_err(|e| AuthError::Storage(e.to_string()))?;
        storage()
            .ok_or_else(|| AuthError::Storage("localStorage unavailable".to_string()))?
            .set_item(SESSION_KEY, &raw)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> AuthResult<()> {
        if let Some(storage) = storage() {
            storage
                .remove_item(SESSION_KEY)
                .map_err(|e| AuthError::Storage(format!("{:?}", e)))?;
        }
        Ok(())
    }

    fn expire(&self) -> AuthResult<()> {
        self.clear()?;
        let window = web_sys::window().ok_or_else(|| AuthError::Storage("no window".to_string()))?;
        let event = web_sys::Event::new(SESSION_EXPIRED_EVENT)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))?;
        window
            .dispatch_event(&event)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))?;
        Ok(())
    }
}
