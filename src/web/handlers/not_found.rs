//! Rendered 404 page for unknown short codes.

use askama::Template;
use askama_web::WebTemplate;

/// Template for the 404 page.
///
/// Served with a 404 status by the redirect handler and the analytics
/// page when a code does not exist.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
