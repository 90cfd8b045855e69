//! The session store: a single injectable object provided via context at
//! the app root. Screens read through it and never touch browser storage
//! directly; `login`/`logout` are the only writers.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use gloo_storage::{LocalStorage, Storage};

use crate::model::auth::{Role, Session};

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const EMAIL_KEY: &str = "email";

/// Read-many/write-rarely holder for the current [`Session`].
///
/// Copyable handle around a signal, so subscribers re-render whenever
/// login or logout changes the session.
#[derive(Clone, Copy)]
pub struct SessionStore {
    current: Signal<Option<Session>>,
}

impl SessionStore {
    /// Creates the store, restoring any session persisted by a previous
    /// page load.
    pub fn new() -> Self {
        Self {
            current: Signal::new(restore_session()),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }

    /// The viewer's role; `None` is a guest.
    pub fn role(&self) -> Option<Role> {
        self.current.read().as_ref().map(|session| session.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Stores the session and persists it across page reloads.
    pub fn login(&self, session: Session) {
        persist_session(&session);

        let mut current = self.current;
        current.set(Some(session));
    }

    /// Destroys the session; subsequent renders treat the viewer as a
    /// guest.
    pub fn logout(&self) {
        clear_session();

        let mut current = self.current;
        current.set(None);
    }
}

/// Fetches the session store from context.
pub fn use_session() -> SessionStore {
    use_context()
}

fn restore_session() -> Option<Session> {
    let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
    let role_raw: String = LocalStorage::get(ROLE_KEY).ok()?;
    let email: String = LocalStorage::get(EMAIL_KEY).ok()?;

    let role = match role_raw.parse::<Role>() {
        Ok(role) => role,
        Err(err) => {
            // A role we no longer recognize cannot gate anything; start
            // unauthenticated instead of guessing.
            tracing::warn!("clearing persisted session: {err}");
            clear_session();
            return None;
        }
    };

    Some(Session { token, role, email })
}

fn persist_session(session: &Session) {
    let entries = [
        (TOKEN_KEY, session.token.as_str()),
        (ROLE_KEY, session.role.as_wire()),
        (EMAIL_KEY, session.email.as_str()),
    ];

    for (key, value) in entries {
        if let Err(err) = LocalStorage::set(key, value) {
            tracing::error!("failed to persist session key {key}: {err}");
        }
    }
}

fn clear_session() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(ROLE_KEY);
    LocalStorage::delete(EMAIL_KEY);
}
