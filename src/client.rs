//! DropInBlog rendered-content API client
//!
//! A [`Client`] scopes every request to one blog via its token and blog id,
//! and funnels all endpoint methods through a single fetch pipeline: cache
//! lookup, credential precondition, authenticated GET, JSON extraction, and
//! cache fill. Endpoint methods differ only in the URL they build.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use crate::cache::ResponseCache;
use crate::content::{ApiEnvelope, ContentPayload};
use crate::error::Error;

/// Base URL for the DropInBlog rendered API
const DEFAULT_BASE_URL: &str = "https://api.dropinblog.com/v2";

/// Fixed, URL-encoded field selector sent with listing and post requests
const FIELDS_QUERY: &str = "fields=head_data%2Cbody_html";

/// Default cache time-to-live: five minutes
const DEFAULT_CACHE_TTL: Duration = Duration::from_millis(300_000);

/// Fallback API error message when the response body carries none
const GENERIC_API_ERROR: &str = "API request failed";

/// Client for the rendered-content API of a single blog
///
/// Credentials are immutable after construction and deliberately not
/// validated up front; an empty token or blog id surfaces as
/// [`Error::Configuration`] on the first fetch, before any network access.
/// The response cache lives inside the client, so share one instance (behind
/// an `Arc` if needed) to benefit from it.
#[derive(Debug)]
pub struct Client {
    /// Bearer token authenticating every request
    token: String,
    /// Blog id scoping every request
    blog_id: String,
    /// API base URL, overridable for tests
    base_url: String,
    /// Maximum age for which a cached response is served
    cache_ttl: Duration,
    /// Underlying HTTP client
    http: reqwest::Client,
    /// Responses keyed by full request URL
    cache: ResponseCache,
}

impl Client {
    /// Creates a client with the default base URL and a five-minute cache TTL
    pub fn new(token: impl Into<String>, blog_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            blog_id: blog_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            http: reqwest::Client::new(),
            cache: ResponseCache::new(),
        }
    }

    /// Overrides the cache time-to-live
    ///
    /// `Duration::ZERO` effectively disables the cache: every entry is
    /// already stale by the time it is read back.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Overrides the API base URL (for testing against a local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the stored bearer token unchanged
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the stored blog id unchanged
    pub fn blog_id(&self) -> &str {
        &self.blog_id
    }

    /// Number of cached responses, fresh and stale alike
    pub fn cached_responses(&self) -> usize {
        self.cache.len()
    }

    /// Drops every cached response
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Fetches the rendered main post list
    ///
    /// `page` is an opaque pagination token passed through to the API
    /// without validation.
    pub async fn fetch_main_list(&self, page: Option<&str>) -> Result<ContentPayload, Error> {
        let url = self.listing_url("list", page);
        self.fetch_payload("list", &url).await
    }

    /// Fetches a single rendered post by slug
    pub async fn fetch_post(&self, slug: &str) -> Result<ContentPayload, Error> {
        let url = self.listing_url(&format!("post/{slug}"), None);
        self.fetch_payload("post", &url).await
    }

    /// Fetches the rendered listing for one category
    pub async fn fetch_categories(
        &self,
        slug: &str,
        page: Option<&str>,
    ) -> Result<ContentPayload, Error> {
        let url = self.listing_url(&format!("list/category/{slug}"), page);
        self.fetch_payload("category", &url).await
    }

    /// Fetches the rendered listing for one author
    pub async fn fetch_author(
        &self,
        slug: &str,
        page: Option<&str>,
    ) -> Result<ContentPayload, Error> {
        let url = self.listing_url(&format!("list/author/{slug}"), page);
        self.fetch_payload("author", &url).await
    }

    /// Fetches the blog's XML sitemap
    pub async fn fetch_sitemap(&self) -> Result<ContentPayload, Error> {
        let url = self.rendered_url("sitemap");
        self.fetch_payload("sitemap", &url).await
    }

    /// Fetches the blog-wide RSS feed
    pub async fn fetch_blog_feed(&self) -> Result<ContentPayload, Error> {
        let url = self.rendered_url("feed");
        self.fetch_payload("feed", &url).await
    }

    /// Fetches the RSS feed for one category
    pub async fn fetch_category_feed(&self, slug: &str) -> Result<ContentPayload, Error> {
        let url = self.rendered_url(&format!("feed/category/{slug}"));
        self.fetch_payload("category feed", &url).await
    }

    /// Fetches the RSS feed for one author
    pub async fn fetch_author_feed(&self, slug: &str) -> Result<ContentPayload, Error> {
        let url = self.rendered_url(&format!("feed/author/{slug}"));
        self.fetch_payload("author feed", &url).await
    }

    /// Builds a rendered-API URL without a query string
    fn rendered_url(&self, resource: &str) -> String {
        format!("{}/blog/{}/rendered/{}", self.base_url, self.blog_id, resource)
    }

    /// Builds a rendered-API URL carrying the fixed fields selector, with
    /// the pagination token (when given) inserted before it as a literal
    /// `page=` parameter
    fn listing_url(&self, resource: &str, page: Option<&str>) -> String {
        let mut url = self.rendered_url(resource);
        url.push('?');
        if let Some(page) = page {
            url.push_str("page=");
            url.push_str(page);
            url.push('&');
        }
        url.push_str(FIELDS_QUERY);
        url
    }

    /// Runs the shared pipeline for `url` and deserializes its `data` value
    /// into a typed payload
    ///
    /// Any failure is logged with the resource name, then returned unchanged
    /// so callers keep a single error-handling point at the call site.
    async fn fetch_payload(&self, resource: &str, url: &str) -> Result<ContentPayload, Error> {
        let result = self.fetch_and_process(url, false).await.and_then(|data| {
            if data.is_null() {
                Ok(ContentPayload::default())
            } else {
                serde_json::from_value(data).map_err(Error::from)
            }
        });
        if let Err(ref err) = result {
            error!(resource, error = %err, "rendered API request failed");
        }
        result
    }

    /// Shared fetch pipeline
    ///
    /// Serves a fresh cache entry when one exists for this exact URL, then
    /// checks credentials, performs the authenticated GET, and extracts
    /// either the full response envelope (`envelope = true`) or just its
    /// `data` field. Successful payloads are cached under the request URL.
    ///
    /// Concurrent calls for the same URL are not deduplicated: both miss the
    /// cache, both hit the network, and the last writer wins.
    async fn fetch_and_process(&self, url: &str, envelope: bool) -> Result<Value, Error> {
        if let Some(cached) = self.cache.get(url, self.cache_ttl) {
            debug!(%url, "serving cached response");
            return Ok(cached);
        }

        if self.token.is_empty() {
            return Err(Error::Configuration("API token is not set".to_string()));
        }
        if self.blog_id.is_empty() {
            return Err(Error::Configuration("blog id is not set".to_string()));
        }

        debug!(%url, "cache miss, fetching");
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(&self.token)
            .send()
            .await?;

        // The service answers with a JSON body for failures too
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let message = serde_json::from_value::<ApiEnvelope>(body)
                .ok()
                .and_then(|envelope| envelope.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| GENERIC_API_ERROR.to_string());
            return Err(Error::Api(message));
        }

        let payload = if envelope {
            body
        } else {
            body.get("data").cloned().unwrap_or(Value::Null)
        };
        self.cache.put(url, payload.clone());
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn demo_client() -> Client {
        Client::new("secret-token", "demo")
    }

    #[test]
    fn test_accessors_return_credentials_unchanged() {
        let client = demo_client();

        assert_eq!(client.token(), "secret-token");
        assert_eq!(client.blog_id(), "demo");
    }

    #[test]
    fn test_post_url_includes_encoded_fields_selector() {
        let client = demo_client();

        let url = client.listing_url("post/hello-world", None);

        assert_eq!(
            url,
            "https://api.dropinblog.com/v2/blog/demo/rendered/post/hello-world?fields=head_data%2Cbody_html"
        );
    }

    #[test]
    fn test_pagination_token_precedes_fields_selector() {
        let client = demo_client();

        let url = client.listing_url("list", Some("2"));

        assert_eq!(
            url,
            "https://api.dropinblog.com/v2/blog/demo/rendered/list?page=2&fields=head_data%2Cbody_html"
        );
    }

    #[test]
    fn test_category_and_author_listing_urls() {
        let client = demo_client();

        assert_eq!(
            client.listing_url("list/category/news", Some("3")),
            "https://api.dropinblog.com/v2/blog/demo/rendered/list/category/news?page=3&fields=head_data%2Cbody_html"
        );
        assert_eq!(
            client.listing_url("list/author/jane", None),
            "https://api.dropinblog.com/v2/blog/demo/rendered/list/author/jane?fields=head_data%2Cbody_html"
        );
    }

    #[test]
    fn test_sitemap_and_feed_urls_have_no_query() {
        let client = demo_client();

        assert_eq!(
            client.rendered_url("sitemap"),
            "https://api.dropinblog.com/v2/blog/demo/rendered/sitemap"
        );
        assert_eq!(
            client.rendered_url("feed/author/jane"),
            "https://api.dropinblog.com/v2/blog/demo/rendered/feed/author/jane"
        );
    }

    #[tokio::test]
    async fn test_envelope_mode_returns_and_caches_the_full_body() {
        let server = MockServer::start().await;
        let body = json!({
            "success": true,
            "code": 200,
            "locale": "en",
            "message": "",
            "data": {"sitemap": "<urlset></urlset>"}
        });
        Mock::given(method("GET"))
            .and(path("/blog/demo/rendered/sitemap"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = demo_client().with_base_url(server.uri());
        let url = client.rendered_url("sitemap");

        let first = client
            .fetch_and_process(&url, true)
            .await
            .expect("fetch should succeed");
        assert_eq!(first, body, "envelope mode should return the whole body");

        // Second call is served from cache; the mock allows one hit only
        let second = client
            .fetch_and_process(&url, true)
            .await
            .expect("cached fetch should succeed");
        assert_eq!(second, body);
        assert_eq!(client.cached_responses(), 1);
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_any_request() {
        let client = Client::new("", "demo");
        let err = client
            .fetch_and_process("http://127.0.0.1:9/unreachable", false)
            .await
            .expect_err("empty token should fail");
        assert!(matches!(err, Error::Configuration(_)));

        let client = Client::new("secret-token", "");
        let err = client
            .fetch_and_process("http://127.0.0.1:9/unreachable", false)
            .await
            .expect_err("empty blog id should fail");
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[tokio::test]
    async fn test_clear_cache_forces_a_refetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blog/demo/rendered/sitemap"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"sitemap": "<urlset></urlset>"}
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = demo_client().with_base_url(server.uri());
        client.fetch_sitemap().await.expect("first fetch should succeed");
        assert_eq!(client.cached_responses(), 1);

        client.clear_cache();
        assert_eq!(client.cached_responses(), 0);

        client.fetch_sitemap().await.expect("refetch should succeed");
    }
}
