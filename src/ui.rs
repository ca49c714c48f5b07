use crate::commands::BINDINGS;
use crate::models::{ItemAction, NotificationItem};
use crate::page::{Popup, StatusMessage, Tone};
use crate::timer::{ColorBand, TimerDisplay};
use std::io::Write;

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";

fn band_color(band: ColorBand) -> &'static str {
    match band {
        ColorBand::Normal => "",
        ColorBand::Warning => YELLOW,
        ColorBand::Critical => RED,
    }
}

pub fn render_timer_line(display: &TimerDisplay) -> String {
    let color = band_color(display.band);
    let reset = if color.is_empty() { "" } else { RESET };
    format!("  session {color}{}{reset}", display.text)
}

pub fn render_popup(popup: &Popup) -> String {
    format!("{BOLD}[{}]{RESET} {}", popup.title, popup.body)
}

pub fn render_status(status: &StatusMessage) -> String {
    let color = match status.tone {
        Tone::Success => GREEN,
        Tone::Error => RED,
    };
    format!("{color}{}{RESET}", status.text)
}

pub fn render_items(items: &[NotificationItem]) -> String {
    if items.is_empty() {
        return "  (no notifications)".to_string();
    }
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let marker = if item.unread { "*" } else { " " };
        let hint = match &item.action {
            Some(ItemAction::RespondToBuddy { requester_id }) => {
                format!("  (accept {requester_id} / reject {requester_id})")
            }
            Some(ItemAction::ViewWorkout { workout_id }) => format!("  (workout {workout_id})"),
            None => String::new(),
        };
        lines.push(format!(
            "  [{marker}] {:<6} {:<14} {}{hint}",
            item.id,
            item.kind.label(),
            item.message
        ));
    }
    lines.join("\n")
}

pub fn render_help() -> String {
    let mut lines = vec!["commands:".to_string()];
    for (_, usage, help) in BINDINGS {
        lines.push(format!("  {usage:<24} {help}"));
    }
    lines.join("\n")
}

/// Keeps block output (lists, popups, statuses) from landing mid-way through
/// the timer line, which is redrawn in place once per second.
#[derive(Default)]
pub struct Screen {
    timer_line_open: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&mut self, text: &str) {
        if self.timer_line_open {
            println!();
            self.timer_line_open = false;
        }
        println!("{text}");
    }

    pub fn timer_line(&mut self, line: &str) {
        print!("\r\x1b[2K{line}");
        let _ = std::io::stdout().flush();
        self.timer_line_open = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;

    #[test]
    fn timer_line_colors_follow_the_band() {
        let warning = TimerDisplay {
            text: "04:59".to_string(),
            band: ColorBand::Warning,
        };
        let normal = TimerDisplay {
            text: "10:00".to_string(),
            band: ColorBand::Normal,
        };
        assert!(render_timer_line(&warning).contains(YELLOW));
        assert!(!render_timer_line(&normal).contains('\x1b'));
        assert!(render_timer_line(&normal).contains("10:00"));
    }

    #[test]
    fn unread_items_carry_a_marker_and_buddy_hints() {
        let items = vec![NotificationItem {
            id: "n-1".to_string(),
            kind: NotificationKind::BuddyRequest,
            message: "Alice sent a buddy request".to_string(),
            unread: true,
            action: Some(ItemAction::RespondToBuddy {
                requester_id: "u-7".to_string(),
            }),
        }];
        let rendered = render_items(&items);
        assert!(rendered.contains("[*]"));
        assert!(rendered.contains("accept u-7"));
        assert!(rendered.contains("reject u-7"));
    }

    #[test]
    fn help_lists_every_binding() {
        let help = render_help();
        for (verb, _, _) in BINDINGS {
            assert!(help.contains(verb));
        }
    }
}
