use std::fmt;
use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};

/// Opaque authenticated session.
///
/// The only thing the shell ever does with a session is check for its
/// presence; the credential is exposed to the HTTP client alone.
#[derive(Clone)]
pub struct Session {
    token: SecretString,
}

impl Session {
    /// Wrap a bearer credential.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }

    pub(crate) fn bearer(&self) -> &str {
        self.token.expose_secret()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"[redacted]").finish()
    }
}

/// Origin of the authenticated session for the whole shell.
pub trait SessionProvider: Send + Sync {
    /// Return the current session, if any.
    fn current(&self) -> Option<Session>;

    /// Drop the current session (sign out).
    fn end(&self);

    /// Return whether a session is present.
    fn is_present(&self) -> bool {
        self.current().is_some()
    }
}

/// Session provider backed by a credential known at startup.
#[derive(Debug, Default)]
pub struct StaticSessionProvider {
    session: RwLock<Option<Session>>,
}

impl StaticSessionProvider {
    /// Create a provider holding a session for the given token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            session: RwLock::new(Some(Session::new(token))),
        }
    }

    /// Create a provider without a session.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the current session (sign in).
    pub fn begin(&self, session: Session) {
        match self.session.write() {
            Ok(mut guard) => *guard = Some(session),
            Err(poisoned) => *poisoned.into_inner() = Some(session),
        }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn current(&self) -> Option<Session> {
        match self.session.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn end(&self) {
        match self.session.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}
