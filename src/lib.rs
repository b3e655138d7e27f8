//! Helpers for web applications hosted on hyper.
//!
//! - [`paths`]: filesystem paths of the application's directory layout
//! - [`url`]: asset and storage URLs built from the request context
//! - [`http`]: redirects, request classification and small response builders
//! - [`html`]: form method spoofing marker
//!
//! Every helper takes its inputs explicitly. Request data travels in a
//! [`RequestContext`], the directory layout in a [`Layout`].

pub mod config;
pub mod context;
pub mod error;
pub mod html;
pub mod http;
pub mod logger;
pub mod paths;
pub mod reporter;
pub mod url;

pub use context::RequestContext;
pub use error::{HelperError, Result};
pub use html::method;
pub use http::{is_ajax_request, is_json_request, redirect, try_redirect};
pub use paths::{AppDir, Layout};
pub use reporter::{ErrorReporter, JsonErrorReporter, PlainErrorReporter};
pub use url::{asset, base_url, url};
