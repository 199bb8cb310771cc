use crate::auth::{evaluate, GateDecision, RouteGuard};
use crate::session::{Role, SessionStore};

const HOSPITAL_ONLY: RouteGuard = RouteGuard::roles(&[Role::Hospital]);
const INSURANCE_ONLY: RouteGuard = RouteGuard::roles(&[Role::Insurance]);

/// Screens the router can mount. Form views carry the record id for the
/// edit variant, `None` for create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Unauthorized,
    Dashboard,
    PatientsList,
    PatientForm(Option<String>),
    PoliciesList,
    PolicyForm(Option<String>),
    ClaimsList,
    ClaimForm(Option<String>),
}

/// Result of resolving a raw path against the static route table,
/// before any authorization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolution {
    Public(View),
    Protected(View, RouteGuard),
    Redirect(&'static str),
}

/// What the shell should do with a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(View),
    Redirect(String),
    /// Session store still initializing; show a neutral loading state.
    Loading,
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Static route table. Unknown paths fall through to a `/` redirect.
fn resolve(path: &str) -> Resolution {
    let segments: Vec<&str> = normalize(path)
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        [] => Resolution::Protected(View::Dashboard, RouteGuard::any_authenticated()),
        ["login"] => Resolution::Public(View::Login),
        ["unauthorized"] => Resolution::Public(View::Unauthorized),
        ["patients"] => Resolution::Protected(View::PatientsList, HOSPITAL_ONLY),
        ["patients", "new"] => Resolution::Protected(View::PatientForm(None), HOSPITAL_ONLY),
        ["patients", id] => {
            Resolution::Protected(View::PatientForm(Some(id.to_string())), HOSPITAL_ONLY)
        }
        ["policies"] => Resolution::Protected(View::PoliciesList, INSURANCE_ONLY),
        ["policies", "new"] => Resolution::Protected(View::PolicyForm(None), INSURANCE_ONLY),
        ["policies", id] => {
            Resolution::Protected(View::PolicyForm(Some(id.to_string())), INSURANCE_ONLY)
        }
        ["claims"] => Resolution::Protected(View::ClaimsList, INSURANCE_ONLY),
        ["claims", "new"] => Resolution::Protected(View::ClaimForm(None), INSURANCE_ONLY),
        ["claims", id] => {
            Resolution::Protected(View::ClaimForm(Some(id.to_string())), INSURANCE_ONLY)
        }
        _ => Resolution::Redirect("/"),
    }
}

/// Resolve a path and run the auth gate over it. `/login` flips to a
/// `/` redirect for an already-authenticated session; `/unauthorized`
/// is always reachable.
pub fn navigate(store: &SessionStore, path: &str) -> Navigation {
    match resolve(path) {
        Resolution::Redirect(target) => Navigation::Redirect(target.to_string()),
        Resolution::Public(View::Login) => {
            if store.state().is_authenticated {
                Navigation::Redirect("/".to_string())
            } else {
                Navigation::Render(View::Login)
            }
        }
        Resolution::Public(view) => Navigation::Render(view),
        Resolution::Protected(view, guard) => {
            match evaluate(store.status(), &store.state(), &guard) {
                GateDecision::Pending => Navigation::Loading,
                GateDecision::Allow => Navigation::Render(view),
                GateDecision::RedirectToLogin => Navigation::Redirect("/login".to_string()),
                GateDecision::RedirectToUnauthorized => {
                    Navigation::Redirect("/unauthorized".to_string())
                }
            }
        }
    }
}
