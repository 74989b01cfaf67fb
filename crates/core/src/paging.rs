//! List-limit clamping shared by every list endpoint.

/// Default number of records returned by a list endpoint when the client
/// does not supply `limit`.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Hard ceiling on list results. A client-requested limit above this is
/// clamped, never honored.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp a user-provided limit into `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}
