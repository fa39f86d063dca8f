//! Unique test data generators.
//!
//! Lobby and user ids are plain `i64` in the backend. Tests that share a
//! database (or a store) draw ids from here so parallel tests never seat
//! players in each other's lobbies.

use std::sync::atomic::{AtomicI64, Ordering};

use ulid::Ulid;

static NEXT_ID: AtomicI64 = AtomicI64::new(1_000);

/// Generate a unique string with the given prefix, formatted `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("lobby");
/// let b = unique_str("lobby");
/// assert_ne!(a, b);
/// assert!(a.starts_with("lobby-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Next process-unique positive id, usable as a user id.
///
/// ```
/// use backend_test_support::unique_helpers::unique_id;
///
/// assert_ne!(unique_id(), unique_id());
/// ```
pub fn unique_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
