use crate::models::{BuddyDecision, ItemAction, NotificationItem};
use std::time::Duration;

/// How long a notification popup stays up before its one-shot timer clears it.
pub const POPUP_VISIBLE: Duration = Duration::from_secs(5);
/// How long a transient status message stays up.
pub const STATUS_VISIBLE: Duration = Duration::from_secs(3);

/// Identifies one popup or status instance. A dismissal timer holds the token
/// of the instance it was armed for; if that instance has since been replaced
/// the dismissal is a no-op, so a stale timer can never clear its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Popup {
    pub title: String,
    pub body: String,
    token: DismissToken,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
    token: DismissToken,
}

/// Local mirror of the notification page. All mutation goes through the
/// methods below; the popup and status slots each hold at most one instance.
#[derive(Debug)]
pub struct NotificationPage {
    items: Vec<NotificationItem>,
    popup: Option<Popup>,
    status: Option<StatusMessage>,
    mark_all_enabled: bool,
    next_token: u64,
}

impl NotificationPage {
    pub fn new(items: Vec<NotificationItem>) -> Self {
        Self {
            items,
            popup: None,
            status: None,
            mark_all_enabled: true,
            next_token: 0,
        }
    }

    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn mark_all_enabled(&self) -> bool {
        self.mark_all_enabled
    }

    fn token(&mut self) -> DismissToken {
        self.next_token += 1;
        DismissToken(self.next_token)
    }

    /// Replace any visible popup with a fresh-notification popup.
    pub fn show_popup(&mut self, count: u32) -> DismissToken {
        let token = self.token();
        let body = if count == 1 {
            "You have 1 new notification".to_string()
        } else {
            format!("You have {count} new notifications")
        };
        self.popup = Some(Popup {
            title: "New notifications".to_string(),
            body,
            token,
        });
        token
    }

    /// Clear the popup, but only if `token` still names the visible one.
    pub fn dismiss_popup(&mut self, token: DismissToken) -> bool {
        if self.popup.as_ref().is_some_and(|popup| popup.token == token) {
            self.popup = None;
            true
        } else {
            false
        }
    }

    /// Replace any visible status message.
    pub fn show_status(&mut self, text: String, tone: Tone) -> DismissToken {
        let token = self.token();
        self.status = Some(StatusMessage { text, tone, token });
        token
    }

    pub fn dismiss_status(&mut self, token: DismissToken) -> bool {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.token == token)
        {
            self.status = None;
            true
        } else {
            false
        }
    }

    /// Clear the unread flag on one item. Returns whether anything changed.
    pub fn mark_read(&mut self, notification_id: &str) -> bool {
        match self
            .items
            .iter_mut()
            .find(|item| item.id == notification_id)
        {
            Some(item) if item.unread => {
                item.unread = false;
                true
            }
            _ => false,
        }
    }

    /// Clear every unread flag and disable the mark-all control. Safe to call
    /// again after it has already succeeded.
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.unread = false;
        }
        self.mark_all_enabled = false;
    }

    /// Rewrite every item carrying a respond-action for `requester_id`: the
    /// action controls are stripped, the message replaced with the outcome,
    /// and the item marked read.
    pub fn resolve_buddy_request(&mut self, requester_id: &str, decision: BuddyDecision) {
        let outcome = match decision {
            BuddyDecision::Accepted => "Buddy request accepted",
            BuddyDecision::Rejected => "Buddy request declined",
        };
        for item in &mut self.items {
            let matches = matches!(
                &item.action,
                Some(ItemAction::RespondToBuddy { requester_id: rid }) if rid == requester_id
            );
            if matches {
                item.action = None;
                item.message = outcome.to_string();
                item.unread = false;
            }
        }
    }
}
