use crate::app::AppEvent;
use std::io::{BufRead, Write};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MarkRead { id: String },
    MarkAllRead,
    AcceptBuddy { requester_id: String },
    RejectBuddy { requester_id: String },
    List,
    Help,
    Quit,
}

/// The binding table: verb, usage line, and help text. Parsing and the help
/// screen are both driven from here so the two can never drift apart.
pub const BINDINGS: &[(&str, &str, &str)] = &[
    ("read", "read <notification-id>", "mark one notification as read"),
    ("read-all", "read-all", "mark every notification as read"),
    ("accept", "accept <requester-id>", "accept a buddy request"),
    ("reject", "reject <requester-id>", "decline a buddy request"),
    ("list", "list", "show the notification list"),
    ("help", "help", "show this help"),
    ("quit", "quit", "exit"),
];

fn usage(verb: &str) -> String {
    let line = BINDINGS
        .iter()
        .find(|(name, _, _)| *name == verb)
        .map(|(_, usage, _)| *usage)
        .unwrap_or(verb);
    format!("usage: {line}")
}

/// Parse one input line. `Ok(None)` for a blank line, `Err` with a printable
/// message for anything the table does not cover.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(usage(verb));
    }

    let command = match (verb, arg) {
        ("read", Some(id)) => Command::MarkRead { id: id.to_string() },
        ("read-all", None) => Command::MarkAllRead,
        ("accept", Some(id)) => Command::AcceptBuddy {
            requester_id: id.to_string(),
        },
        ("reject", Some(id)) => Command::RejectBuddy {
            requester_id: id.to_string(),
        },
        ("list", None) => Command::List,
        ("help", None) => Command::Help,
        ("quit", None) => Command::Quit,
        ("read" | "read-all" | "accept" | "reject" | "list" | "help" | "quit", _) => {
            return Err(usage(verb));
        }
        _ => return Err(format!("unknown command: {verb} (try 'help')")),
    };
    Ok(Some(command))
}

/// Answers yes/no prompts. Declining a reject prompt must keep the request
/// entirely local, so the gate runs before any event leaves this module.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Interactive prompt on the controlling terminal.
pub struct ConsolePrompt;

impl Confirm for ConsolePrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = std::io::stdout().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Blocking command loop over an input stream; runs on its own thread.
/// Returns when the input ends, the app side hangs up, or the user quits.
pub fn run_command_loop(
    input: impl BufRead,
    confirm: &mut impl Confirm,
    events: &UnboundedSender<AppEvent>,
) {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        match parse_line(&line) {
            Ok(Some(command)) => {
                if matches!(command, Command::RejectBuddy { .. })
                    && !confirm.confirm("Decline this buddy request?")
                {
                    continue;
                }
                let quit = matches!(command, Command::Quit);
                if events.send(AppEvent::Command(command)).is_err() || quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(message) => println!("{message}"),
        }
    }
}
