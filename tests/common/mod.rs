#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;
use urlclip::application::services::{AnalyticsService, LinkService};
use urlclip::domain::click_event::ClickEvent;
use urlclip::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use urlclip::state::AppState;

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, original_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_click(pool: &PgPool, code: &str, ip: &str, country: &str) {
    sqlx::query(
        "INSERT INTO link_clicks (link_code, ip, country, city, device, browser, os)
         VALUES ($1, $2, $3, 'Unknown', 'Desktop', 'Firefox', 'Linux')",
    )
    .bind(code)
    .bind(ip)
    .bind(country)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn link_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_click_events(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks WHERE link_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let link_repo = Arc::new(PgLinkRepository::new(pool.clone()));
    let click_repo = Arc::new(PgClickRepository::new(pool.clone()));

    let state = AppState {
        link_service: Arc::new(LinkService::new(link_repo)),
        analytics_service: Arc::new(AnalyticsService::new(click_repo)),
        click_tx: tx,
        base_url: "http://localhost:3000".to_string(),
        behind_proxy: false,
    };

    (state, rx)
}
