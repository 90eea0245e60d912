//! Click analytics aggregation service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::Click;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Number of raw events shown on the analytics page.
const RECENT_EVENTS_LIMIT: usize = 20;

/// One dimension value with its occurrence count, sorted descending.
pub type FrequencyTable = Vec<(String, i64)>;

/// Aggregated analytics for a single short code.
///
/// Recomputed from the full event log on every page view; there is no
/// incremental aggregate maintenance.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsReport {
    pub total_events: i64,
    pub distinct_ips: i64,
    pub countries: FrequencyTable,
    pub cities: FrequencyTable,
    pub devices: FrequencyTable,
    pub browsers: FrequencyTable,
    pub operating_systems: FrequencyTable,
    pub referrers: FrequencyTable,
    pub recent: Vec<Click>,
}

/// Service for reading and purging click analytics.
pub struct AnalyticsService<C: ClickRepository> {
    repository: Arc<C>,
}

impl<C: ClickRepository> AnalyticsService<C> {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Builds the full analytics breakdown for a code.
    ///
    /// Scans every event for the code and folds frequency tables keyed by
    /// country, city, device, browser, OS, and referrer, plus the most
    /// recent raw events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. An unknown code
    /// yields an empty report; existence is the caller's concern.
    pub async fn report(&self, code: &str) -> Result<AnalyticsReport, AppError> {
        let events = self.repository.list_by_code(code).await?;
        let distinct_ips = self.repository.count_distinct_ips(code).await?;

        let mut countries = HashMap::new();
        let mut cities = HashMap::new();
        let mut devices = HashMap::new();
        let mut browsers = HashMap::new();
        let mut operating_systems = HashMap::new();
        let mut referrers = HashMap::new();

        for event in &events {
            bump(&mut countries, event.country.as_deref(), "Unknown");
            bump(&mut cities, event.city.as_deref(), "Unknown");
            bump(&mut devices, event.device.as_deref(), "Unknown");
            bump(&mut browsers, event.browser.as_deref(), "Unknown");
            bump(&mut operating_systems, event.os.as_deref(), "Unknown");
            bump(&mut referrers, event.referer.as_deref(), "Direct");
        }

        let total_events = events.len() as i64;
        let recent = events.into_iter().take(RECENT_EVENTS_LIMIT).collect();

        Ok(AnalyticsReport {
            total_events,
            distinct_ips,
            countries: sorted(countries),
            cities: sorted(cities),
            devices: sorted(devices),
            browsers: sorted(browsers),
            operating_systems: sorted(operating_systems),
            referrers: sorted(referrers),
            recent,
        })
    }

    /// Counts distinct client IPs for a code.
    pub async fn distinct_visitors(&self, code: &str) -> Result<i64, AppError> {
        self.repository.count_distinct_ips(code).await
    }

    /// Bulk-deletes all events for a code, returning the number removed.
    ///
    /// Best-effort companion to link deletion; callers log and swallow
    /// failures rather than failing the delete response.
    pub async fn purge(&self, code: &str) -> Result<u64, AppError> {
        self.repository.delete_by_code(code).await
    }
}

fn bump(table: &mut HashMap<String, i64>, value: Option<&str>, fallback: &str) {
    let key = match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    };
    *table.entry(key.to_string()).or_insert(0) += 1;
}

fn sorted(table: HashMap<String, i64>) -> FrequencyTable {
    let mut entries: Vec<_> = table.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use chrono::Utc;

    fn click(country: &str, browser: &str, referer: Option<&str>) -> Click {
        Click {
            id: 0,
            link_code: "abc123".to_string(),
            clicked_at: Utc::now(),
            ip: Some("203.0.113.7".to_string()),
            country: Some(country.to_string()),
            city: Some("Unknown".to_string()),
            device: Some("Desktop".to_string()),
            browser: Some(browser.to_string()),
            os: Some("Linux".to_string()),
            referer: referer.map(|s| s.to_string()),
            user_agent: None,
        }
    }

    #[tokio::test]
    async fn test_report_folds_frequency_tables() {
        let events = vec![
            click("Germany", "Firefox", Some("https://news.ycombinator.com")),
            click("Germany", "Chrome", None),
            click("France", "Firefox", None),
        ];

        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_list_by_code()
            .times(1)
            .returning(move |_| Ok(events.clone()));
        mock_repo
            .expect_count_distinct_ips()
            .times(1)
            .returning(|_| Ok(1));

        let service = AnalyticsService::new(Arc::new(mock_repo));
        let report = service.report("abc123").await.unwrap();

        assert_eq!(report.total_events, 3);
        assert_eq!(report.distinct_ips, 1);
        assert_eq!(report.countries[0], ("Germany".to_string(), 2));
        assert_eq!(report.countries[1], ("France".to_string(), 1));
        assert_eq!(report.browsers[0], ("Firefox".to_string(), 2));
        // Missing referrers are counted as direct traffic.
        assert_eq!(report.referrers[0], ("Direct".to_string(), 2));
    }

    #[tokio::test]
    async fn test_report_caps_recent_events() {
        let events: Vec<Click> = (0..50).map(|_| click("Germany", "Chrome", None)).collect();

        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_list_by_code()
            .times(1)
            .returning(move |_| Ok(events.clone()));
        mock_repo
            .expect_count_distinct_ips()
            .times(1)
            .returning(|_| Ok(1));

        let service = AnalyticsService::new(Arc::new(mock_repo));
        let report = service.report("abc123").await.unwrap();

        assert_eq!(report.total_events, 50);
        assert_eq!(report.recent.len(), RECENT_EVENTS_LIMIT);
    }

    #[tokio::test]
    async fn test_report_empty_log() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_list_by_code()
            .times(1)
            .returning(|_| Ok(vec![]));
        mock_repo
            .expect_count_distinct_ips()
            .times(1)
            .returning(|_| Ok(0));

        let service = AnalyticsService::new(Arc::new(mock_repo));
        let report = service.report("ghost").await.unwrap();

        assert_eq!(report.total_events, 0);
        assert!(report.countries.is_empty());
        assert!(report.recent.is_empty());
    }

    #[tokio::test]
    async fn test_purge_delegates_to_repository() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_delete_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(7));

        let service = AnalyticsService::new(Arc::new(mock_repo));
        assert_eq!(service.purge("abc123").await.unwrap(), 7);
    }
}
