//! Single-writer demo session cell.
//!
//! # Responsibility
//! - Own the current `SessionState` and its durable entry.
//! - Expose the two mutations (`sign_in`, `sign_out`) and pure reads.
//!
//! # Invariants
//! - `sign_in` always changes the in-memory state, even if persisting fails.
//! - `sign_out` on an anonymous store is a no-op apart from clearing storage.
//! - A malformed persisted entry is equivalent to an absent one.

use crate::model::identity::{DemoUser, Role};
use crate::session::storage::SessionStorage;
use log::{debug, info, warn};

/// Storage key holding the serialized demo identity.
pub const SESSION_STORAGE_KEY: &str = "pitchflow_demo_user";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(DemoUser),
}

impl SessionState {
    pub fn user(&self) -> Option<&DemoUser> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }
}

/// Session store injected into every consumer at startup.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    state: SessionState,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Reads the persisted entry once and builds the initial state.
    pub fn rehydrate(storage: S) -> Self {
        let state = match storage.read(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<DemoUser>(&raw) {
                Ok(user) => {
                    info!(
                        "event=session_rehydrate module=session status=ok role={}",
                        user.role.as_str()
                    );
                    SessionState::Authenticated(user)
                }
                Err(err) => {
                    warn!(
                        "event=session_rehydrate module=session status=error error_code=entry_malformed line={} column={}",
                        err.line(),
                        err.column()
                    );
                    SessionState::Anonymous
                }
            },
            Ok(None) => {
                debug!("event=session_rehydrate module=session status=ok state=anonymous");
                SessionState::Anonymous
            }
            Err(err) => {
                warn!(
                    "event=session_rehydrate module=session status=error error_code=storage_read_failed error={}",
                    err
                );
                SessionState::Anonymous
            }
        };

        Self { storage, state }
    }

    /// Signs in as the fixed demo identity for `role`, replacing any session.
    ///
    /// Returns a copy of the new identity.
    pub fn sign_in(&mut self, role: Role) -> DemoUser {
        let user = DemoUser::for_role(role);
        self.persist(&user);
        info!(
            "event=session_sign_in module=session status=ok role={}",
            role.as_str()
        );
        self.state = SessionState::Authenticated(user.clone());
        user
    }

    /// Clears the session. Idempotent.
    pub fn sign_out(&mut self) {
        let was_authenticated = matches!(self.state, SessionState::Authenticated(_));
        self.state = SessionState::Anonymous;
        if let Err(err) = self.storage.remove(SESSION_STORAGE_KEY) {
            warn!(
                "event=session_sign_out module=session status=error error_code=storage_remove_failed error={}",
                err
            );
            return;
        }
        if was_authenticated {
            info!("event=session_sign_out module=session status=ok");
        }
    }

    pub fn current(&self) -> Option<&DemoUser> {
        self.state.user()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Always true: identities are local demo claims.
    pub fn is_demo_mode(&self) -> bool {
        true
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&self, user: &DemoUser) {
        let encoded = match serde_json::to_string(user) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(
                    "event=session_persist module=session status=error error_code=encode_failed error={}",
                    err
                );
                return;
            }
        };
        if let Err(err) = self.storage.write(SESSION_STORAGE_KEY, &encoded) {
            warn!(
                "event=session_persist module=session status=error error_code=storage_write_failed error={}",
                err
            );
        }
    }
}
