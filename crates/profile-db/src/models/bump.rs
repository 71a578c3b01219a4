//! Bump counter database model

use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct BumpModel {
    pub user_id: i64,
    pub bump_count: i32,
}
