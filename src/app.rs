use crate::actions::{self, ActionEffect};
use crate::client::ApiClient;
use crate::commands::{Command, ConsolePrompt, run_command_loop};
use crate::config::AppConfig;
use crate::models::BuddyDecision;
use crate::page::{DismissToken, NotificationPage, POPUP_VISIBLE, STATUS_VISIBLE, Tone};
use crate::{poller, storage, timer, ui};
use std::{future::Future, sync::Arc, time::Duration};
use tokio::signal;
use tokio::sync::mpsc::{self, UnboundedSender};

/// Everything that may mutate the page funnels through this enum into the
/// single event loop below; the loop is the only owner of the page, which is
/// what serializes all state changes without locks.
#[derive(Debug)]
pub enum AppEvent {
    NewNotifications(u32),
    Command(Command),
    ActionDone(ActionEffect),
    TimerTick(timer::TimerDisplay),
    DismissPopup(DismissToken),
    DismissStatus(DismissToken),
}

fn schedule(events: &UnboundedSender<AppEvent>, delay: Duration, event: AppEvent) {
    let events = events.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = events.send(event);
    });
}

/// Run one mutating action off the loop; its effect comes back as an event.
/// Actions are independent of each other, so several may be in flight.
fn run_action<F>(events: &UnboundedSender<AppEvent>, action: F)
where
    F: Future<Output = ActionEffect> + Send + 'static,
{
    let events = events.clone();
    tokio::spawn(async move {
        let _ = events.send(AppEvent::ActionDone(action.await));
    });
}

fn show_status(
    page: &mut NotificationPage,
    events: &UnboundedSender<AppEvent>,
    screen: &mut ui::Screen,
    text: String,
    tone: Tone,
) {
    let token = page.show_status(text, tone);
    if let Some(status) = page.status() {
        screen.block(&ui::render_status(status));
    }
    schedule(events, STATUS_VISIBLE, AppEvent::DismissStatus(token));
}

pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = Arc::new(ApiClient::new(&config.server_url)?);
    let items = storage::load_snapshot(&config.snapshot_path).await;
    let mut page = NotificationPage::new(items);

    let (events, mut inbox) = mpsc::unbounded_channel();
    let _poller = poller::spawn(Arc::clone(&client), config.poll_interval, events.clone());
    let _timer = timer::spawn(config.session, events.clone());
    {
        let events = events.clone();
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            run_command_loop(stdin.lock(), &mut ConsolePrompt, &events);
        });
    }

    let mut screen = ui::Screen::new();
    screen.block(&ui::render_items(page.items()));
    screen.block("type 'help' for commands");

    loop {
        let event = tokio::select! {
            received = inbox.recv() => match received {
                Some(event) => event,
                None => break,
            },
            _ = signal::ctrl_c() => break,
        };

        match event {
            AppEvent::NewNotifications(count) => {
                let token = page.show_popup(count);
                if let Some(popup) = page.popup() {
                    screen.block(&ui::render_popup(popup));
                }
                schedule(&events, POPUP_VISIBLE, AppEvent::DismissPopup(token));
            }
            AppEvent::Command(command) => match command {
                Command::List => screen.block(&ui::render_items(page.items())),
                Command::Help => screen.block(&ui::render_help()),
                Command::Quit => break,
                Command::MarkRead { id } => {
                    let client = Arc::clone(&client);
                    run_action(&events, async move { actions::mark_as_read(&client, &id).await });
                }
                Command::MarkAllRead => {
                    if !page.mark_all_enabled() {
                        continue;
                    }
                    let client = Arc::clone(&client);
                    run_action(&events, async move { actions::mark_all_as_read(&client).await });
                }
                Command::AcceptBuddy { requester_id } => {
                    let client = Arc::clone(&client);
                    run_action(&events, async move {
                        actions::accept_buddy_request(&client, &requester_id).await
                    });
                }
                Command::RejectBuddy { requester_id } => {
                    let client = Arc::clone(&client);
                    run_action(&events, async move {
                        actions::reject_buddy_request(&client, &requester_id).await
                    });
                }
            },
            AppEvent::ActionDone(effect) => match effect {
                ActionEffect::MarkedRead { id } => {
                    if page.mark_read(&id) {
                        screen.block(&ui::render_items(page.items()));
                    }
                }
                ActionEffect::AllMarkedRead => {
                    page.mark_all_read();
                    show_status(
                        &mut page,
                        &events,
                        &mut screen,
                        "All notifications marked as read".to_string(),
                        Tone::Success,
                    );
                    screen.block(&ui::render_items(page.items()));
                }
                ActionEffect::BuddyResolved {
                    requester_id,
                    decision,
                } => {
                    page.resolve_buddy_request(&requester_id, decision);
                    let text = match decision {
                        BuddyDecision::Accepted => "Buddy request accepted",
                        BuddyDecision::Rejected => "Buddy request declined",
                    };
                    show_status(&mut page, &events, &mut screen, text.to_string(), Tone::Success);
                    screen.block(&ui::render_items(page.items()));
                }
                ActionEffect::Failed { message } => {
                    show_status(&mut page, &events, &mut screen, message, Tone::Error);
                }
                ActionEffect::Ignored => {}
            },
            AppEvent::TimerTick(display) => {
                screen.timer_line(&ui::render_timer_line(&display));
            }
            AppEvent::DismissPopup(token) => {
                page.dismiss_popup(token);
            }
            AppEvent::DismissStatus(token) => {
                page.dismiss_status(token);
            }
        }
    }

    // Dropping the poller and timer guards cancels their loops here.
    Ok(())
}
