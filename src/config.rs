use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::{env, path::PathBuf, time::Duration};
use tracing::warn;

use crate::poller::POLL_INTERVAL;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/notifications.json";

/// Everything the app reads from the environment, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_url: String,
    pub snapshot_path: PathBuf,
    pub poll_interval: Duration,
    pub session: Option<SessionConfig>,
}

/// Timer inputs for an active workout session. `target_minutes` selects
/// countdown mode; without it the timer counts elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub started_at: DateTime<Local>,
    pub target_minutes: Option<i64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server_url =
            env::var("BUDDY_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let snapshot_path = env::var("BUDDY_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH));
        let poll_interval = env::var("BUDDY_POLL_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(POLL_INTERVAL);

        Self {
            server_url,
            snapshot_path,
            poll_interval,
            session: session_from_env(),
        }
    }
}

fn session_from_env() -> Option<SessionConfig> {
    let raw = env::var("WORKOUT_STARTED_AT").ok()?;
    let Some(started_at) = parse_start_time(&raw) else {
        warn!("ignoring unparseable WORKOUT_STARTED_AT: {raw}");
        return None;
    };
    let target_minutes = env::var("WORKOUT_TARGET_MINUTES")
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|minutes| *minutes > 0);
    Some(SessionConfig {
        started_at,
        target_minutes,
    })
}

/// Accepts RFC 3339 or the naive `YYYY-MM-DDTHH:MM:SS` form the server
/// injects into its pages, interpreted in local time.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).single())
}
