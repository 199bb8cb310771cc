use crate::session::Role;

/// Demo credential pairs. A real deployment would replace this with a
/// call to an authentication service; everything downstream only needs
/// the returned `Role`, so this is the single swap point.
const DEMO_ACCOUNTS: [(&str, &str, Role); 2] = [
    ("hospital", "hospital123", Role::Hospital),
    ("insurance", "insurance123", Role::Insurance),
];

/// `Some(role)` on an exact username/password match, `None` otherwise.
/// No lockout or rate limiting.
pub fn verify_credentials(username: &str, password: &str) -> Option<Role> {
    DEMO_ACCOUNTS
        .iter()
        .find(|(user, pass, _)| *user == username && *pass == password)
        .map(|(_, _, role)| *role)
}
