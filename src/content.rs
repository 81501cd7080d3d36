//! Response models for the rendered-content API
//!
//! Every endpoint answers with the same JSON envelope; only the shape of its
//! `data` object varies. [`ContentPayload`] is an all-optional typed view of
//! that object: a post or listing response populates `body_html` and
//! `head_data`, the sitemap endpoint populates `sitemap`, and the feed
//! endpoints populate `feed`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level envelope returned by the service for both success and failure
/// HTTP statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// Whether the service considers the request successful
    #[serde(default)]
    pub success: bool,
    /// Status code echoed in the body
    #[serde(default)]
    pub code: Option<i64>,
    /// Locale the content was rendered for
    #[serde(default)]
    pub locale: Option<String>,
    /// Human-readable status message, set on failures
    #[serde(default)]
    pub message: Option<String>,
    /// Endpoint-specific payload, kept opaque here
    #[serde(default)]
    pub data: Option<Value>,
}

/// Rendered `data` payload
///
/// Which fields are present depends on the endpoint that was called; absent
/// fields are skipped when serializing so round-tripped payloads stay small.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPayload {
    /// Rendered HTML body (listing, post, category and author pages)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Head metadata for the rendered page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_data: Option<HeadData>,
    /// Content type discriminator reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Slug of the rendered resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// XML sitemap body (sitemap endpoint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<String>,
    /// RSS feed body (feed endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<String>,
}

/// Head metadata block for a rendered page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadData {
    /// Page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meta description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fully rendered `<head>` markup, ready to inject as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_html: Option<String>,
    /// Individual head tags as structured items, for callers that build
    /// their own markup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_items: Option<Vec<Value>>,
}
