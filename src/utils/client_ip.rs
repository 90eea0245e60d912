//! Client IP extraction from forwarded headers.
//!
//! Analytics prefer the original client address when the service sits behind
//! a reverse proxy: `X-Forwarded-For` first (left-most hop), then
//! `X-Real-IP`, then the peer socket address.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolves the client IP for a request.
pub fn extract_client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(value) = forwarded.to_str()
        && let Some(first) = value.split(',').next()
    {
        let first = first.trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip")
        && let Ok(value) = real_ip.to_str()
    {
        let value = value.trim();
        if !value.is_empty() {
            return value.to_string();
        }
    }

    peer.ip().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        "10.0.0.1:54321".parse().unwrap()
    }

    #[test]
    fn test_falls_back_to_peer_address() {
        let headers = HeaderMap::new();
        assert_eq!(extract_client_ip(&headers, peer()), "10.0.0.1");
    }

    #[test]
    fn test_prefers_x_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.2"),
        );
        assert_eq!(extract_client_ip(&headers, peer()), "203.0.113.7");
    }

    #[test]
    fn test_uses_x_real_ip_when_no_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));
        assert_eq!(extract_client_ip(&headers, peer()), "198.51.100.4");
    }

    #[test]
    fn test_empty_forwarded_for_falls_through() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));
        assert_eq!(extract_client_ip(&headers, peer()), "198.51.100.4");
    }
}
