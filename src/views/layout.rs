use crate::session::{Role, Session};

/// Navigation chrome printed above every authenticated screen: the
/// portal name plus the paths reachable for the current role.
pub(super) fn render_nav(session: &Session) {
    let Some(role) = session.role else {
        return;
    };

    let (portal, links) = match role {
        Role::Hospital => ("Hospital Portal", "/  /patients  /patients/new"),
        Role::Insurance => (
            "Insurance Portal",
            "/  /policies  /policies/new  /claims  /claims/new",
        ),
    };

    println!("── Healthcare & Insurance ── {portal}");
    println!("   {links}   (logout, quit)");
    println!();
}
