//! Bump counter entity - how many times a user has bumped the server listing

use crate::value_objects::Snowflake;

/// Per-user bump total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpCount {
    pub user_id: Snowflake,
    pub bump_count: i32,
}

impl BumpCount {
    /// Create a new BumpCount
    pub fn new(user_id: Snowflake, bump_count: i32) -> Self {
        Self {
            user_id,
            bump_count,
        }
    }
}
