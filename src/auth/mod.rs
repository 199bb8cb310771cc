mod credentials;
mod gate;

pub use credentials::verify_credentials;
pub use gate::{evaluate, GateDecision, RouteGuard};
