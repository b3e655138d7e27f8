//! Redirect responses

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue, LOCATION};
use hyper::{Response, StatusCode};

use crate::error::{HelperError, Result};
use crate::logger;
use crate::reporter::ErrorReporter;

/// Status used by callers that have no preference
pub const DEFAULT_REDIRECT_STATUS: u16 = 302;

/// Build a redirect to `url`
///
/// `headers` are applied in order; a repeated name replaces the earlier
/// value. `Location` is set last and wins over a `Location` in `headers`.
/// The status is used as given, without checking that it is a 3xx code.
pub fn try_redirect(
    url: &str,
    status: u16,
    headers: &[(&str, &str)],
) -> Result<Response<Full<Bytes>>> {
    let mut resp = Response::new(Full::new(Bytes::new()));

    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| HelperError::InvalidHeaderName((*name).to_string()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| HelperError::InvalidHeaderValue {
                name: (*name).to_string(),
            })?;
        resp.headers_mut().insert(header_name, header_value);
    }

    *resp.status_mut() =
        StatusCode::from_u16(status).map_err(|_| HelperError::InvalidStatus(status))?;

    let location = HeaderValue::from_str(url).map_err(|_| HelperError::InvalidHeaderValue {
        name: LOCATION.as_str().to_string(),
    })?;
    resp.headers_mut().insert(LOCATION, location);

    Ok(resp)
}

/// Build a redirect to `url`, handing any fault to `reporter`
///
/// On failure the reporter renders a 500 Internal Server Error carrying the
/// fault's message, and that page is returned instead of the redirect.
pub fn redirect(
    url: &str,
    status: u16,
    headers: &[(&str, &str)],
    reporter: &dyn ErrorReporter,
) -> Response<Full<Bytes>> {
    match try_redirect(url, status, headers) {
        Ok(resp) => resp,
        Err(e) => {
            logger::log_error(&format!("Redirect to {url:?} failed: {e}"));
            reporter.render(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                &e.to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every render call
    #[derive(Default)]
    struct RecordingReporter {
        calls: Mutex<Vec<(u16, String, String)>>,
    }

    impl ErrorReporter for RecordingReporter {
        fn render(&self, status: StatusCode, title: &str, detail: &str) -> Response<Full<Bytes>> {
            self.calls
                .lock()
                .unwrap()
                .push((status.as_u16(), title.to_string(), detail.to_string()));
            Response::builder()
                .status(status)
                .body(Full::new(Bytes::new()))
                .unwrap()
        }
    }

    #[test]
    fn test_redirect_sets_headers_status_and_location() {
        let reporter = RecordingReporter::default();
        let resp = redirect("/home", 301, &[("X-Foo", "bar")], &reporter);

        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers()["X-Foo"], "bar");
        assert_eq!(resp.headers()[LOCATION], "/home");
        assert!(reporter.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_redirect_default_status() {
        let resp = try_redirect("https://example.com/", DEFAULT_REDIRECT_STATUS, &[]).unwrap();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().len(), 1);
    }

    #[test]
    fn test_location_overrides_supplied_header() {
        let resp = try_redirect(
            "/new",
            302,
            &[("Location", "/old"), ("X-A", "1"), ("x-a", "2")],
        )
        .unwrap();
        let locations: Vec<_> = resp.headers().get_all(LOCATION).iter().collect();
        assert_eq!(locations, vec!["/new"]);
        assert_eq!(resp.headers()["X-A"], "2");
    }

    #[test]
    fn test_status_is_not_restricted_to_3xx() {
        let resp = try_redirect("/created/1", 201, &[]).unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_invalid_header_reports_500() {
        let reporter = RecordingReporter::default();
        let resp = redirect("/home", 302, &[("Bad Header", "x")], &reporter);

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let calls = reporter.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, 500);
        assert_eq!(calls[0].1, "Internal Server Error");
        assert!(calls[0].2.contains("Bad Header"), "{}", calls[0].2);
    }

    #[test]
    fn test_invalid_status_and_location() {
        assert!(matches!(
            try_redirect("/home", 42, &[]),
            Err(HelperError::InvalidStatus(42))
        ));
        assert!(matches!(
            try_redirect("/home\n", 302, &[]),
            Err(HelperError::InvalidHeaderValue { name }) if name == "location"
        ));

        let reporter = RecordingReporter::default();
        let resp = redirect("/home", 1000, &[], &reporter);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reporter.calls.lock().unwrap()[0].2, "invalid HTTP status code: 1000");
    }
}
