use super::prompt;
use crate::auth::verify_credentials;
use crate::session::{Role, SessionStore, StorageError};
use anyhow::Result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Check the submitted credentials and, on a match, flip the session.
/// On a mismatch the session is left untouched.
pub fn attempt_login(
    store: &mut SessionStore,
    username: &str,
    password: &str,
) -> Result<Role, LoginError> {
    let role = verify_credentials(username, password).ok_or(LoginError::InvalidCredentials)?;
    store.login(role)?;
    Ok(role)
}

/// Interactive login screen. Returns `Some("/")` after a successful
/// login; `None` keeps the shell on the login view with the inline
/// error shown.
pub(super) fn render(store: &mut SessionStore) -> Result<Option<String>> {
    println!("=== Healthcare & Insurance System ===");
    println!("Demo credentials: hospital/hospital123  insurance/insurance123");

    let username = prompt("Username")?;
    let password = prompt("Password")?;

    match attempt_login(store, &username, &password) {
        Ok(role) => {
            println!("Logged in as {role} staff.");
            Ok(Some("/".to_string()))
        }
        Err(LoginError::InvalidCredentials) => {
            println!("Invalid username or password");
            Ok(None)
        }
        Err(LoginError::Storage(e)) => Err(e.into()),
    }
}
