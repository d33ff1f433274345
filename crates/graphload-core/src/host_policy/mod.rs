//! Host allowlist validation.
//!
//! Every host a graph may reach is checked here:
//! - `is_allowed` answers whether a host is permitted for a given scheme
//! - `resolve_host` applies the rename table and picks `https` or `http`
//!
//! The allowlist is compiled from [`GraphLoadConfig`](crate::config::GraphLoadConfig)
//! once at startup and never changes afterwards.

mod allowlist;
mod matcher;

pub use allowlist::{HostAllowlist, ResolvedHost};
pub use matcher::{DomainMatcher, MatchPolicy};
