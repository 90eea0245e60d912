//! Click event model for asynchronous click tracking.

/// An in-memory representation of a click for async processing.
///
/// Created in the redirect handler with raw request metadata and sent to a
/// bounded channel. The background worker derives geolocation and device
/// context before persisting, so the handler never waits on enrichment.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event.
    pub fn new(
        code: String,
        ip: Option<String>,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Self {
        Self {
            code,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
        }
    }
}
