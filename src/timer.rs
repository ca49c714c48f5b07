use crate::app::AppEvent;
use crate::config::SessionConfig;
use crate::tasks::TaskGuard;
use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Remaining-time thresholds for the countdown display, boundary-inclusive.
pub const WARNING_THRESHOLD_SECS: i64 = 300;
pub const CRITICAL_THRESHOLD_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    Normal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerDisplay {
    pub text: String,
    pub band: ColorBand,
}

/// Session timer inputs. The display is recomputed from scratch on every
/// tick; nothing is accumulated, so a late or missed tick cannot drift.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    started_at: DateTime<Local>,
    target_seconds: Option<i64>,
}

impl SessionClock {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            started_at: config.started_at,
            target_seconds: config.target_minutes.map(|minutes| minutes * 60),
        }
    }

    pub fn display_at(&self, now: DateTime<Local>) -> TimerDisplay {
        let elapsed = (now - self.started_at).num_seconds().max(0);
        match self.target_seconds {
            None => TimerDisplay {
                text: format_clock(elapsed),
                band: ColorBand::Normal,
            },
            Some(target) => {
                let remaining = (target - elapsed).max(0);
                let band = if remaining <= CRITICAL_THRESHOLD_SECS {
                    ColorBand::Critical
                } else if remaining <= WARNING_THRESHOLD_SECS {
                    ColorBand::Warning
                } else {
                    ColorBand::Normal
                };
                TimerDisplay {
                    text: format_clock(remaining),
                    band,
                }
            }
        }
    }
}

fn format_clock(total_seconds: i64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Start the once-per-second tick loop, or not at all when there is no
/// session to time. The returned guard cancels the loop on drop.
pub fn spawn(session: Option<SessionConfig>, events: UnboundedSender<AppEvent>) -> Option<TaskGuard> {
    let clock = SessionClock::new(session?);
    Some(TaskGuard::new(tokio::spawn(async move {
        let mut ticks = tokio::time::interval(TICK_INTERVAL);
        loop {
            ticks.tick().await;
            if events
                .send(AppEvent::TimerTick(clock.display_at(Local::now())))
                .is_err()
            {
                break;
            }
        }
    })))
}
