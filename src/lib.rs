//! Typed async client for the DropInBlog rendered-content API
//!
//! Wraps the `/v2/blog/{blog_id}/rendered/...` endpoints behind a single
//! [`Client`] with an in-memory, TTL-bounded response cache keyed by request
//! URL.

pub mod cache;
pub mod cli;
pub mod client;
pub mod content;
pub mod error;

pub use client::Client;
pub use content::{ApiEnvelope, ContentPayload, HeadData};
pub use error::Error;
