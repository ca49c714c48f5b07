use crate::app::AppEvent;
use crate::client::ApiClient;
use crate::tasks::TaskGuard;
use std::{sync::Arc, time::Duration};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::MissedTickBehavior;
use tracing::error;

/// Cadence of the check-new poll.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// One poll cycle: fire-and-forget. A failed or malformed response is logged
/// and the cycle ends; the next tick starts from scratch. Nothing is emitted
/// unless the server reports new notifications.
pub async fn poll_once(client: &ApiClient, events: &UnboundedSender<AppEvent>) {
    match client.check_new().await {
        Ok(result) if result.has_new_notifications => {
            let _ = events.send(AppEvent::NewNotifications(result.count));
        }
        Ok(_) => {}
        Err(err) => error!("failed to check for new notifications: {err}"),
    }
}

/// Start the poll loop: one immediate poll, then one per interval. The
/// returned guard cancels the loop on drop.
pub fn spawn(
    client: Arc<ApiClient>,
    every: Duration,
    events: UnboundedSender<AppEvent>,
) -> TaskGuard {
    TaskGuard::new(tokio::spawn(async move {
        let mut ticks = tokio::time::interval(every);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticks.tick().await;
            if events.is_closed() {
                break;
            }
            poll_once(&client, &events).await;
        }
    }))
}
