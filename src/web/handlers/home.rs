//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the home page with the shorten form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
