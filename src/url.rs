//! Absolute URLs for public assets and stored files

use crate::context::RequestContext;

/// Prefix of files served out of the storage directory
const STORAGE_PREFIX: &str = "/storage/";

/// `scheme://host` of the current request
pub fn base_url(ctx: &RequestContext) -> String {
    format!("{}://{}", ctx.scheme(), ctx.host())
}

/// URL of a public asset
///
/// Leading slashes of `path` are dropped so the result has exactly one
/// slash after the host.
///
/// ```
/// use webhelpers::{asset, RequestContext};
///
/// let ctx = RequestContext::new("example.com").with_scheme("https");
/// assert_eq!(asset(&ctx, "/css/app.css"), "https://example.com/css/app.css");
/// ```
pub fn asset(ctx: &RequestContext, path: &str) -> String {
    format!("{}/{}", base_url(ctx), path.trim_start_matches('/'))
}

/// URL of a file under the public storage prefix
///
/// `path` is appended unchanged.
pub fn url(ctx: &RequestContext, path: &str) -> String {
    format!("{}{STORAGE_PREFIX}{path}", base_url(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_strips_leading_slashes() {
        let ctx = RequestContext::new("h.test").with_scheme("https");
        assert_eq!(asset(&ctx, "/x/y"), "https://h.test/x/y");
        assert_eq!(asset(&ctx, "///x/y"), "https://h.test/x/y");
        assert_eq!(asset(&ctx, "x/y"), "https://h.test/x/y");
        assert_eq!(asset(&ctx, ""), "https://h.test/");
    }

    #[test]
    fn test_url_uses_storage_prefix() {
        let ctx = RequestContext::new("h.test");
        assert_eq!(url(&ctx, "f.png"), "http://h.test/storage/f.png");
        assert_eq!(url(&ctx, "/f.png"), "http://h.test/storage//f.png");
        assert_eq!(url(&ctx, ""), "http://h.test/storage/");
    }

    #[test]
    fn test_empty_host_is_propagated() {
        let ctx = RequestContext::new("");
        assert_eq!(asset(&ctx, "a.js"), "http:///a.js");
        assert_eq!(base_url(&ctx), "http://");
    }
}
