use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AnalyticsService, LinkService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub analytics_service: Arc<AnalyticsService<PgClickRepository>>,
    pub click_tx: mpsc::Sender<ClickEvent>,
    /// Public base URL prepended to short codes in responses.
    pub base_url: String,
    /// Trust X-Forwarded-For / X-Real-IP when extracting client IPs.
    pub behind_proxy: bool,
}
