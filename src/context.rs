//! Request context
//!
//! The scheme, host and headers of the request being handled. Hosts build
//! one per request and pass it to the URL builders and classifiers.

use hyper::header::{HeaderMap, HeaderName, HeaderValue, HOST};
use hyper::Request;

/// Scheme used when the request carries none
pub const DEFAULT_SCHEME: &str = "http";

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    scheme: Option<String>,
    host: String,
    headers: HeaderMap,
}

impl RequestContext {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            scheme: None,
            host: host.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Build the context of a hyper request
    ///
    /// The scheme comes from the request URI (absent for origin-form
    /// requests). The host comes from the `Host` header, falling back to the
    /// URI authority, and is empty when neither is present.
    pub fn from_request<B>(req: &Request<B>) -> Self {
        let host = req
            .headers()
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
            .or_else(|| req.uri().authority().map(|a| a.as_str().to_string()))
            .unwrap_or_default();

        Self {
            scheme: req.uri().scheme_str().map(ToString::to_string),
            host,
            headers: req.headers().clone(),
        }
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Add a header, keeping earlier values of the same name
    ///
    /// Names or values that are not valid HTTP are skipped.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Request scheme, or [`DEFAULT_SCHEME`]
    pub fn scheme(&self) -> &str {
        self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// All values of header `name` joined with `", "`, if present
    pub fn header(&self, name: &str) -> Option<String> {
        let mut values = self.headers.get_all(name).iter().peekable();
        values.peek()?;
        let joined = values
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        Some(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_defaults_to_http() {
        let ctx = RequestContext::new("example.com");
        assert_eq!(ctx.scheme(), "http");
        assert_eq!(ctx.with_scheme("https").scheme(), "https");
    }

    #[test]
    fn test_from_request_uses_host_header() {
        let req = Request::builder()
            .uri("/dashboard")
            .header("Host", "app.test:8080")
            .header("Accept", "text/html")
            .body(())
            .unwrap();
        let ctx = RequestContext::from_request(&req);
        assert_eq!(ctx.host(), "app.test:8080");
        assert_eq!(ctx.scheme(), "http");
        assert_eq!(ctx.header("accept").as_deref(), Some("text/html"));
    }

    #[test]
    fn test_from_request_absolute_uri() {
        let req = Request::builder()
            .uri("https://cdn.test/x")
            .body(())
            .unwrap();
        let ctx = RequestContext::from_request(&req);
        assert_eq!(ctx.host(), "cdn.test");
        assert_eq!(ctx.scheme(), "https");
    }

    #[test]
    fn test_from_request_without_host() {
        let req = Request::builder().uri("/").body(()).unwrap();
        assert_eq!(RequestContext::from_request(&req).host(), "");
    }

    #[test]
    fn test_header_joins_repeated_values() {
        let ctx = RequestContext::new("h")
            .with_header("Accept", "text/html")
            .with_header("Accept", "application/json");
        assert_eq!(
            ctx.header("Accept").as_deref(),
            Some("text/html, application/json")
        );
        assert_eq!(ctx.header("X-Missing"), None);
    }

    #[test]
    fn test_invalid_header_is_skipped() {
        let ctx = RequestContext::new("h").with_header("bad name", "v");
        assert!(ctx.headers().is_empty());
    }
}
