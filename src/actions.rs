use crate::client::ApiClient;
use crate::models::BuddyDecision;
use tracing::error;

pub const GENERIC_ERROR: &str = "Something went wrong";

/// Outcome of one user-triggered mutation, applied to the page by the event
/// loop. The page is only ever touched through a success variant, so a failed
/// request leaves the corresponding item exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    MarkedRead { id: String },
    AllMarkedRead,
    BuddyResolved { requester_id: String, decision: BuddyDecision },
    Failed { message: String },
    Ignored,
}

fn failure_message(message: Option<String>) -> String {
    message.unwrap_or_else(|| GENERIC_ERROR.to_string())
}

pub async fn mark_as_read(client: &ApiClient, notification_id: &str) -> ActionEffect {
    match client.mark_read(notification_id).await {
        Ok(ack) if ack.success => ActionEffect::MarkedRead {
            id: notification_id.to_string(),
        },
        Ok(ack) => ActionEffect::Failed {
            message: failure_message(ack.message),
        },
        Err(err) => {
            error!("failed to mark notification {notification_id} as read: {err}");
            ActionEffect::Ignored
        }
    }
}

pub async fn mark_all_as_read(client: &ApiClient) -> ActionEffect {
    match client.mark_all_read().await {
        Ok(ack) if ack.success => ActionEffect::AllMarkedRead,
        Ok(ack) => ActionEffect::Failed {
            message: failure_message(ack.message),
        },
        Err(err) => {
            error!("failed to mark all notifications as read: {err}");
            ActionEffect::Ignored
        }
    }
}

pub async fn accept_buddy_request(client: &ApiClient, requester_id: &str) -> ActionEffect {
    match client.accept_buddy(requester_id).await {
        Ok(ack) if ack.success => ActionEffect::BuddyResolved {
            requester_id: requester_id.to_string(),
            decision: BuddyDecision::Accepted,
        },
        Ok(ack) => ActionEffect::Failed {
            message: failure_message(ack.message),
        },
        Err(err) => {
            error!("failed to accept buddy request from {requester_id}: {err}");
            ActionEffect::Failed {
                message: GENERIC_ERROR.to_string(),
            }
        }
    }
}

/// The confirmation gate lives in the command layer; by the time this runs
/// the user has already agreed to decline.
pub async fn reject_buddy_request(client: &ApiClient, requester_id: &str) -> ActionEffect {
    match client.reject_buddy(requester_id).await {
        Ok(ack) if ack.success => ActionEffect::BuddyResolved {
            requester_id: requester_id.to_string(),
            decision: BuddyDecision::Rejected,
        },
        Ok(ack) => ActionEffect::Failed {
            message: failure_message(ack.message),
        },
        Err(err) => {
            error!("failed to reject buddy request from {requester_id}: {err}");
            ActionEffect::Failed {
                message: GENERIC_ERROR.to_string(),
            }
        }
    }
}
