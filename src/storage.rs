use crate::models::NotificationItem;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Load the page snapshot. A missing file is a normal empty page; a broken
/// one is logged and treated the same.
pub async fn load_snapshot(path: &Path) -> Vec<NotificationItem> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(err) => {
                error!("failed to parse notification snapshot: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read notification snapshot: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("buddy_console_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_snapshot_is_an_empty_page() {
        let items = load_snapshot(Path::new("/nonexistent/notifications.json")).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn snapshot_items_load() {
        let path = scratch_path("load");
        let raw = r#"[
            {"id":"n-1","kind":"workout","message":"Bob finished a workout","unread":true,
             "action":{"viewWorkout":{"workoutId":"w-3"}}},
            {"id":"n-2","kind":"buddy-request","message":"Alice sent a buddy request","unread":true,
             "action":{"respondToBuddy":{"requesterId":"u-7"}}}
        ]"#;
        fs::write(&path, raw).await.unwrap();
        let items = load_snapshot(&path).await;
        let _ = fs::remove_file(&path).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "n-1");
        assert!(items[1].unread);
    }

    #[tokio::test]
    async fn corrupt_snapshot_degrades_to_empty() {
        let path = scratch_path("corrupt");
        fs::write(&path, b"not json at all").await.unwrap();
        let items = load_snapshot(&path).await;
        let _ = fs::remove_file(&path).await;
        assert!(items.is_empty());
    }
}
