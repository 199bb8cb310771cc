use super::storage::{SessionStorage, StorageError};
use super::Role;
use tracing::{debug, warn};

/// Persisted entry names, kept identical to the browser front-end's
/// localStorage keys so a state file is self-describing.
const AUTH_KEY: &str = "isAuthenticated";
const ROLE_KEY: &str = "userRole";

/// Who is logged in, and as what. `role` is `Some` only when
/// `is_authenticated` is true; both fields change together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub is_authenticated: bool,
    pub role: Option<Role>,
}

/// Whether the store has read its persisted state yet. The auth gate
/// refuses to decide anything while `Pending`, so an authenticated user
/// is never bounced to login by a race with the initial read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    Pending,
    Ready,
}

/// Single owner of the session. Everything else reads `state()` and
/// mutates only through `login` / `logout`.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    session: Session,
    status: InitStatus,
}

impl SessionStore {
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            storage,
            session: Session::default(),
            status: InitStatus::Pending,
        }
    }

    /// Read the persisted flag and role. Anything short of a readable
    /// `"true"` flag plus a recognized role means unauthenticated.
    pub fn initialize(&mut self) {
        let authenticated = self
            .storage
            .get(AUTH_KEY)
            .map(|v| v == "true")
            .unwrap_or(false);

        let role = if authenticated {
            match self.storage.get(ROLE_KEY).map(|v| v.parse::<Role>()) {
                Some(Ok(role)) => Some(role),
                Some(Err(e)) => {
                    warn!("Persisted session has an unusable role, discarding: {}", e);
                    None
                }
                None => None,
            }
        } else {
            None
        };

        self.session = match role {
            Some(role) => Session {
                is_authenticated: true,
                role: Some(role),
            },
            None => Session::default(),
        };
        self.status = InitStatus::Ready;
        debug!("Session store ready: {:?}", self.session);
    }

    /// Record a successful authentication. Credential verification is the
    /// login view's job; this only flips and persists the session.
    pub fn login(&mut self, role: Role) -> Result<(), StorageError> {
        self.session = Session {
            is_authenticated: true,
            role: Some(role),
        };
        self.storage.set(AUTH_KEY, "true")?;
        self.storage.set(ROLE_KEY, role.as_str())?;
        debug!("Logged in as {}", role);
        Ok(())
    }

    /// Clear both fields, in memory and on disk. Safe to call repeatedly.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.session = Session::default();
        self.storage.remove(AUTH_KEY)?;
        self.storage.remove(ROLE_KEY)?;
        debug!("Logged out");
        Ok(())
    }

    pub fn state(&self) -> Session {
        self.session
    }

    pub fn status(&self) -> InitStatus {
        self.status
    }
}
