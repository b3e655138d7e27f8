//! Demo endpoints
//!
//! - `GET /`: a form page, or a JSON summary for JSON clients
//! - `GET /go?to=<target>`: redirect to the percent-decoded `target`. Only
//!   same-site paths are followed; anything else (absolute URLs,
//!   protocol-relative `//host`) redirects to `/`
//! - anything else: 404

use std::net::SocketAddr;
use std::time::Duration;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::borrow::Cow;

use webhelpers::config::HelperConfig;
use webhelpers::http::{
    build_404_response, build_405_response, build_html_response, build_json_response,
    DEFAULT_REDIRECT_STATUS,
};
use webhelpers::logger::{self, AccessLogEntry};
use webhelpers::{
    asset, is_ajax_request, is_json_request, method, redirect, url, ErrorReporter,
    JsonErrorReporter, Layout, PlainErrorReporter, RequestContext,
};

/// Settings shared by every connection
pub struct DemoState {
    pub layout: Layout,
    pub access_log: bool,
    pub keep_alive: bool,
    pub request_timeout: Duration,
}

impl DemoState {
    pub fn new(cfg: &HelperConfig) -> Self {
        Self {
            layout: cfg.layout(),
            access_log: cfg.logging.access_log,
            keep_alive: cfg.performance.keep_alive,
            request_timeout: Duration::from_secs(cfg.performance.request_timeout),
        }
    }
}

#[derive(Serialize)]
struct HomeSummary {
    asset: String,
    storage: String,
    ajax: bool,
    views: String,
}

pub fn handle_request<B>(
    req: &Request<B>,
    state: &DemoState,
    peer_addr: SocketAddr,
) -> Response<Full<Bytes>> {
    let ctx = RequestContext::from_request(req);
    let json = is_json_request(&ctx);
    let ajax = is_ajax_request(&ctx);

    let resp = route(req, &ctx, state, json, ajax);

    if state.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.status = resp.status().as_u16();
        entry.json = json;
        entry.ajax = ajax;
        logger::log_access(&entry);
    }

    resp
}

fn route<B>(
    req: &Request<B>,
    ctx: &RequestContext,
    state: &DemoState,
    json: bool,
    ajax: bool,
) -> Response<Full<Bytes>> {
    let is_head = match *req.method() {
        Method::GET => false,
        Method::HEAD => true,
        _ => return build_405_response(),
    };

    match req.uri().path() {
        "/" if json => build_json_response(
            StatusCode::OK,
            &HomeSummary {
                asset: asset(ctx, "/css/app.css"),
                storage: url(ctx, "avatar.png"),
                ajax,
                views: state.layout.view_path(),
            },
        ),
        "/" => build_html_response(home_page(ctx), is_head),
        "/go" => {
            let target = redirect_target(req.uri().query());
            let reporter: &dyn ErrorReporter = if json {
                &JsonErrorReporter
            } else {
                &PlainErrorReporter
            };
            redirect(
                &target,
                DEFAULT_REDIRECT_STATUS,
                &[("X-Redirected-By", "webhelpers")],
                reporter,
            )
        }
        _ => build_404_response(),
    }
}

fn home_page(ctx: &RequestContext) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>webhelpers</title>
    <link rel="stylesheet" href="{css}">
</head>
<body>
    <img src="{avatar}" alt="avatar">
    <form action="/" method="post">
        {marker}
        <button type="submit">Update</button>
    </form>
</body>
</html>"#,
        css = asset(ctx, "/css/app.css"),
        avatar = url(ctx, "avatar.png"),
        marker = method("patch"),
    )
}

/// Decoded `to` parameter if it is a same-site path, `/` otherwise
fn redirect_target(query: Option<&str>) -> Cow<'_, str> {
    let target = query_param(query, "to").map_or(Cow::Borrowed("/"), |raw| {
        percent_decode_str(raw).decode_utf8_lossy()
    });

    if target.starts_with('/') && !target.starts_with("//") && !target.starts_with("/\\") {
        target
    } else {
        Cow::Borrowed("/")
    }
}

/// First value of `key` in a query string, undecoded
fn query_param<'a>(query: Option<&'a str>, key: &str) -> Option<&'a str> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}
