use serde::{Deserialize, Serialize};

/// One row of the notification page. Never created locally; mutated only
/// after the server has confirmed the matching request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    #[serde(default)]
    pub kind: NotificationKind,
    pub message: String,
    pub unread: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ItemAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Workout,
    BuddyRequest,
    #[serde(other)]
    #[default]
    Other,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Workout => "workout",
            NotificationKind::BuddyRequest => "buddy-request",
            NotificationKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ItemAction {
    ViewWorkout { workout_id: String },
    RespondToBuddy { requester_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuddyDecision {
    Accepted,
    Rejected,
}

/// Response of GET /notifications/check-new. The server omits `count` when
/// there is no signed-in session, so it defaults to zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResult {
    pub has_new_notifications: bool,
    #[serde(default)]
    pub count: u32,
}

/// Ack shape shared by all four mutating endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
