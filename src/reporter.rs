//! Error rendering
//!
//! Helpers that can fail hand the failure to an [`ErrorReporter`] supplied by
//! the host, which turns it into the response sent to the client.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::http::response::{build_json_response, build_text_response};

/// Renders an error page for a status, its title and a detail message
pub trait ErrorReporter: Send + Sync {
    fn render(&self, status: StatusCode, title: &str, detail: &str) -> Response<Full<Bytes>>;
}

/// `text/plain` error pages: `"{status} {title}"`, a blank line, the detail
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainErrorReporter;

impl ErrorReporter for PlainErrorReporter {
    fn render(&self, status: StatusCode, title: &str, detail: &str) -> Response<Full<Bytes>> {
        build_text_response(status, format!("{} {title}\n\n{detail}", status.as_u16()))
    }
}

/// JSON error bodies for API clients
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonErrorReporter;

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    title: &'a str,
    detail: &'a str,
}

impl ErrorReporter for JsonErrorReporter {
    fn render(&self, status: StatusCode, title: &str, detail: &str) -> Response<Full<Bytes>> {
        build_json_response(
            status,
            &ErrorBody {
                status: status.as_u16(),
                title,
                detail,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_plain_reporter_body() {
        let resp = PlainErrorReporter.render(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "boom",
        );
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(resp).await, "500 Internal Server Error\n\nboom");
    }

    #[tokio::test]
    async fn test_json_reporter_body() {
        let resp = JsonErrorReporter.render(StatusCode::BAD_GATEWAY, "Bad Gateway", "upstream");
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        let value: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(value["status"], 502);
        assert_eq!(value["title"], "Bad Gateway");
        assert_eq!(value["detail"], "upstream");
    }
}
