//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into
//! profile-core domain objects. Ids are stored as signed `BIGINT` and wrap
//! back into [`Snowflake`](profile_core::Snowflake) unchanged.

mod bump;
mod cooldown;
mod guild_settings;
mod introduction;
mod reminder;
mod report;
mod setting;

pub use report::stats_from_counts;
