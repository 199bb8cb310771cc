use crate::session::{InitStatus, Role, Session};

/// Role requirement attached to a protected route. An empty list means
/// any authenticated role may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    required_roles: &'static [Role],
}

impl RouteGuard {
    pub const fn any_authenticated() -> Self {
        Self { required_roles: &[] }
    }

    pub const fn roles(required_roles: &'static [Role]) -> Self {
        Self { required_roles }
    }
}

/// Outcome of gating one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session store has not read persisted state yet; render a neutral
    /// loading state, decide nothing.
    Pending,
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// Pure decision function over (init status, session, guard). The
/// requested path is not carried through a login redirect; there is no
/// post-login return-to.
pub fn evaluate(status: InitStatus, session: &Session, guard: &RouteGuard) -> GateDecision {
    if status == InitStatus::Pending {
        return GateDecision::Pending;
    }
    if !session.is_authenticated {
        return GateDecision::RedirectToLogin;
    }
    if guard.required_roles.is_empty() {
        return GateDecision::Allow;
    }
    match session.role {
        Some(role) if guard.required_roles.contains(&role) => GateDecision::Allow,
        _ => GateDecision::RedirectToUnauthorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_GUARDS: [RouteGuard; 4] = [
        RouteGuard::any_authenticated(),
        RouteGuard::roles(&[Role::Hospital]),
        RouteGuard::roles(&[Role::Insurance]),
        RouteGuard::roles(&[Role::Hospital, Role::Insurance]),
    ];

    fn authed(role: Role) -> Session {
        Session {
            is_authenticated: true,
            role: Some(role),
        }
    }

    #[test]
    fn pending_store_never_decides() {
        for guard in &ALL_GUARDS {
            assert_eq!(
                evaluate(InitStatus::Pending, &authed(Role::Hospital), guard),
                GateDecision::Pending
            );
            assert_eq!(
                evaluate(InitStatus::Pending, &Session::default(), guard),
                GateDecision::Pending
            );
        }
    }

    #[test]
    fn unauthenticated_always_goes_to_login() {
        for guard in &ALL_GUARDS {
            assert_eq!(
                evaluate(InitStatus::Ready, &Session::default(), guard),
                GateDecision::RedirectToLogin
            );
        }
    }

    #[test]
    fn empty_guard_admits_any_authenticated_role() {
        for role in [Role::Hospital, Role::Insurance] {
            assert_eq!(
                evaluate(
                    InitStatus::Ready,
                    &authed(role),
                    &RouteGuard::any_authenticated()
                ),
                GateDecision::Allow
            );
        }
    }

    #[test]
    fn matching_role_is_allowed() {
        assert_eq!(
            evaluate(
                InitStatus::Ready,
                &authed(Role::Hospital),
                &RouteGuard::roles(&[Role::Hospital])
            ),
            GateDecision::Allow
        );
        assert_eq!(
            evaluate(
                InitStatus::Ready,
                &authed(Role::Insurance),
                &RouteGuard::roles(&[Role::Hospital, Role::Insurance])
            ),
            GateDecision::Allow
        );
    }

    #[test]
    fn wrong_role_is_sent_to_unauthorized() {
        assert_eq!(
            evaluate(
                InitStatus::Ready,
                &authed(Role::Hospital),
                &RouteGuard::roles(&[Role::Insurance])
            ),
            GateDecision::RedirectToUnauthorized
        );
        assert_eq!(
            evaluate(
                InitStatus::Ready,
                &authed(Role::Insurance),
                &RouteGuard::roles(&[Role::Hospital])
            ),
            GateDecision::RedirectToUnauthorized
        );
    }

    #[test]
    fn decision_is_deterministic() {
        for status in [InitStatus::Pending, InitStatus::Ready] {
            for session in [
                Session::default(),
                authed(Role::Hospital),
                authed(Role::Insurance),
            ] {
                for guard in &ALL_GUARDS {
                    let first = evaluate(status, &session, guard);
                    for _ in 0..3 {
                        assert_eq!(evaluate(status, &session, guard), first);
                    }
                }
            }
        }
    }
}
