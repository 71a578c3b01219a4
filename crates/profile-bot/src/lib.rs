//! # profile-bot
//!
//! Chat bot that remembers each member's self-introduction post and links
//! it when they join a monitored voice channel.
//!
//! - [`handlers`]: gateway events (ready backfill, new posts, voice joins)
//! - [`liveness`]: `/` and `/health` for the hosting platform
//! - [`server`]: process wiring

pub mod handlers;
pub mod liveness;
pub mod notice;
pub mod server;
pub mod state;

pub use server::run;
