//! Toast analog: one line per outcome, no queue, no retry.

use tracing::warn;

pub fn success(message: &str) {
    println!("✅ {message}");
}

pub fn error(message: &str) {
    warn!("{}", message);
    println!("❌ {message}");
}
