//! Coarse user-agent classification for click analytics.
//!
//! Substring matching covers the handful of buckets the analytics page
//! aggregates on (device type, browser family, OS family). Anything
//! unrecognized lands in "Unknown" rather than failing the click record.

/// Parsed device/browser/OS fields derived from a User-Agent header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device: String,
    pub browser: String,
    pub os: String,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            device: "Unknown".to_string(),
            browser: "Unknown".to_string(),
            os: "Unknown".to_string(),
        }
    }
}

/// Classifies a raw User-Agent string into device, browser, and OS buckets.
///
/// A missing header yields the all-"Unknown" default.
pub fn parse_user_agent(user_agent: Option<&str>) -> DeviceInfo {
    let Some(ua) = user_agent else {
        return DeviceInfo::default();
    };

    let lower = ua.to_ascii_lowercase();

    let device = if lower.contains("bot")
        || lower.contains("crawler")
        || lower.contains("spider")
        || lower.contains("curl")
        || lower.contains("wget")
    {
        "Bot"
    } else if lower.contains("ipad") || lower.contains("tablet") {
        "Tablet"
    } else if lower.contains("mobi")
        || lower.contains("iphone")
        || (lower.contains("android") && !lower.contains("tablet"))
    {
        "Mobile"
    } else if lower.contains("mozilla") {
        "Desktop"
    } else {
        "Unknown"
    };

    // Order matters: Edge and Opera embed "chrome", Chrome embeds "safari".
    let browser = if lower.contains("edg/") || lower.contains("edge") {
        "Edge"
    } else if lower.contains("opr/") || lower.contains("opera") {
        "Opera"
    } else if lower.contains("firefox") {
        "Firefox"
    } else if lower.contains("chrome") || lower.contains("crios") {
        "Chrome"
    } else if lower.contains("safari") {
        "Safari"
    } else {
        "Unknown"
    };

    let os = if lower.contains("windows") {
        "Windows"
    } else if lower.contains("android") {
        "Android"
    } else if lower.contains("iphone") || lower.contains("ipad") || lower.contains("ios") {
        "iOS"
    } else if lower.contains("mac os") || lower.contains("macintosh") {
        "macOS"
    } else if lower.contains("linux") {
        "Linux"
    } else {
        "Unknown"
    };

    DeviceInfo {
        device: device.to_string(),
        browser: browser.to_string(),
        os: os.to_string(),
    }
}
