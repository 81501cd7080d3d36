//! In-memory TTL cache for API responses
//!
//! This module provides a thread-safe response cache keyed by the literal
//! request URL, so different query parameters produce distinct entries.
//! Entries are never proactively evicted; they simply stop being returned
//! once their age reaches the configured time-to-live.

mod store;

pub use store::ResponseCache;
