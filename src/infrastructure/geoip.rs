//! Best-effort IP geolocation via an external HTTP lookup service.
//!
//! The lookup is bounded by a short timeout and never fails the caller:
//! any error, timeout, or unparseable response degrades to "Unknown"
//! fields. Analytics quality is allowed to suffer; redirects are not.

use std::time::Duration;

use serde::Deserialize;

/// Default lookup endpoint (ip-api.com free tier format).
pub const DEFAULT_GEOIP_URL: &str = "http://ip-api.com/json";

/// Default lookup timeout.
pub const DEFAULT_GEOIP_TIMEOUT: Duration = Duration::from_secs(2);

/// Country/city pair derived for a client IP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLocation {
    pub country: String,
    pub city: String,
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self {
            country: "Unknown".to_string(),
            city: "Unknown".to_string(),
        }
    }
}

/// Response shape of the lookup service.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

/// HTTP client for the external geolocation service.
pub struct GeoIpClient {
    client: Option<reqwest::Client>,
    base_url: String,
}

impl GeoIpClient {
    /// Creates a client against the given endpoint with the given timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client: Some(client),
            base_url: base_url.into(),
        })
    }

    /// Creates a client that never performs lookups and always returns
    /// the "Unknown" default. Used when geolocation is turned off and in
    /// tests.
    pub fn disabled() -> Self {
        Self {
            client: None,
            base_url: String::new(),
        }
    }

    /// Resolves an IP to a location, degrading to the default on any failure.
    pub async fn lookup(&self, ip: Option<&str>) -> GeoLocation {
        let (Some(client), Some(ip)) = (&self.client, ip) else {
            return GeoLocation::default();
        };

        match self.try_lookup(client, ip).await {
            Ok(location) => location,
            Err(e) => {
                tracing::debug!(error = %e, ip, "geolocation lookup failed");
                GeoLocation::default()
            }
        }
    }

    async fn try_lookup(&self, client: &reqwest::Client, ip: &str) -> anyhow::Result<GeoLocation> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), ip);
        let response: LookupResponse = client.get(&url).send().await?.json().await?;

        if response.status.as_deref() == Some("fail") {
            anyhow::bail!("lookup service reported failure");
        }

        let mut location = GeoLocation::default();
        if let Some(country) = response.country.filter(|c| !c.is_empty()) {
            location.country = country;
        }
        if let Some(city) = response.city.filter(|c| !c.is_empty()) {
            location.city = city;
        }

        Ok(location)
    }
}
