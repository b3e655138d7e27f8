//! HTTP layer
//!
//! Redirects, request classification and the response builders they share.

pub mod classify;
pub mod redirect;
pub mod response;

pub use classify::{is_ajax_request, is_json_request};
pub use redirect::{redirect, try_redirect, DEFAULT_REDIRECT_STATUS};
pub use response::{
    build_404_response, build_405_response, build_html_response, build_json_response,
    build_text_response,
};
