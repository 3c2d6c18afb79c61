//! Session Cache
//!
//! Where the identity provider keeps its session between calls.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::Session;
use crate::error::AuthResult;

/// Persistence for the provider session
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> AuthResult<()>;
    fn clear(&self) -> AuthResult<()>;

    /// The provider rejected the session mid-use (revoked or expired
    /// refresh token). Stores that back a UI override this to tell it.
    fn expire(&self) -> AuthResult<()> {
        self.clear()
    }
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.borrow().clone()
    }

    fn save(&self, session: &Session) -> AuthResult<()> {
        *self.slot.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> AuthResult<()> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}
