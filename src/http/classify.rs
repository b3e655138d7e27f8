//! Request classification by header

use crate::context::RequestContext;

/// Whether the client accepts JSON
///
/// Any occurrence of `application/json` in `Accept` counts, whatever its
/// quality value.
pub fn is_json_request(ctx: &RequestContext) -> bool {
    ctx.header("accept")
        .is_some_and(|accept| accept.contains("application/json"))
}

/// Whether the request was sent by a script (`X-Requested-With: XMLHttpRequest`)
pub fn is_ajax_request(ctx: &RequestContext) -> bool {
    ctx.header("x-requested-with")
        .is_some_and(|value| value.eq_ignore_ascii_case("xmlhttprequest"))
}
