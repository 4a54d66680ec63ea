//! In-memory response cache
//!
//! This module provides a concurrency-safe store of raw response bodies keyed
//! by request URL, plus a background [`Reaper`] that evicts entries once they
//! are older than the configured expiry interval. Nothing is persisted; the
//! cache lives only as long as the process.

mod reaper;
mod store;

pub use reaper::Reaper;
pub use store::Cache;
