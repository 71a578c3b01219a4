//! Database connection pool management

mod postgres;

pub use postgres::{DatabaseConfig, PoolManager};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
