mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
pub use store::{InitStatus, Session, SessionStore};

#[cfg(test)]
pub use storage::MockSessionStorage;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Staff role attached to an authenticated session. Closed set: every
/// usage site matches exhaustively, an unknown persisted value never
/// reaches the rest of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hospital,
    Insurance,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hospital => "hospital",
            Role::Insurance => "insurance",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hospital" => Ok(Role::Hospital),
            "insurance" => Ok(Role::Insurance),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);
