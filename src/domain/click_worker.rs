//! Background worker that enriches and persists click events.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::ClickRepository;
use crate::infrastructure::geoip::GeoIpClient;
use crate::utils::user_agent::parse_user_agent;

/// Drains the click channel until all senders are dropped.
///
/// For each event: best-effort geolocation lookup (bounded by the client's
/// timeout, degrading to "Unknown"), user-agent classification, then one
/// append to the event log. Insert failures are logged and swallowed; the
/// redirect that produced the event has long since been answered.
pub async fn run_click_worker<C: ClickRepository>(
    mut rx: mpsc::Receiver<ClickEvent>,
    clicks: Arc<C>,
    geoip: Arc<GeoIpClient>,
) {
    while let Some(event) = rx.recv().await {
        let location = geoip.lookup(event.ip.as_deref()).await;
        let info = parse_user_agent(event.user_agent.as_deref());

        let new_click = NewClick {
            link_code: event.code,
            ip: event.ip,
            country: Some(location.country),
            city: Some(location.city),
            device: Some(info.device),
            browser: Some(info.browser),
            os: Some(info.os),
            referer: event.referer,
            user_agent: event.user_agent,
        };

        match clicks.insert(new_click).await {
            Ok(()) => {
                metrics::counter!("clicks_recorded_total").increment(1);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to record click event");
                metrics::counter!("clicks_dropped_total").increment(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_worker_persists_enriched_event() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_insert()
            .withf(|click| {
                click.link_code == "abc123"
                    && click.country.as_deref() == Some("Unknown")
                    && click.browser.as_deref() == Some("Firefox")
            })
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(8);
        let geoip = Arc::new(GeoIpClient::disabled());

        tx.send(ClickEvent::new(
            "abc123".to_string(),
            Some("203.0.113.7".to_string()),
            Some("Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0"),
            None,
        ))
        .await
        .unwrap();
        drop(tx);

        run_click_worker(rx, Arc::new(mock_repo), geoip).await;
    }

    #[tokio::test]
    async fn test_worker_swallows_insert_failure() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo.expect_insert().times(2).returning(|_| {
            Err(crate::error::AppError::internal(
                "Database error",
                json!({}),
            ))
        });

        let (tx, rx) = mpsc::channel(8);
        let geoip = Arc::new(GeoIpClient::disabled());

        for code in ["one", "two"] {
            tx.send(ClickEvent::new(code.to_string(), None, None, None))
                .await
                .unwrap();
        }
        drop(tx);

        // Must not panic; both events are attempted despite the first failing.
        run_click_worker(rx, Arc::new(mock_repo), geoip).await;
    }
}
