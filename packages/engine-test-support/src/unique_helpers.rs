//! Test helpers for generating unique test data
//!
//! This module provides utilities to help generate unique test data using ULIDs
//! to ensure test isolation and avoid conflicts between test runs.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Arguments
/// * `prefix` - The prefix to use for the unique string
///
/// # Returns
/// A unique string in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use engine_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("table");
/// let id2 = unique_str("table");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("table-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique player identifier with the given display prefix
///
/// Player ids are opaque strings owned by the adapter layer; tests use this
/// helper so that two tests touching the same store path never collide.
///
/// # Examples
/// ```
/// use engine_test_support::unique_helpers::unique_player_id;
///
/// let p1 = unique_player_id("alice");
/// let p2 = unique_player_id("alice");
/// assert_ne!(p1, p2);
/// ```
pub fn unique_player_id(prefix: &str) -> String {
    unique_str(prefix)
}
