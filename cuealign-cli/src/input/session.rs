//! Recorded session files
//!
//! A session is a JSON Lines file, one host event per line:
//!
//! ```text
//! {"at_ms": 120, "transcript": "Hello world"}
//! {"at_ms": 300, "nav": "advance"}
//! {"at_ms": 320, "nav": "seek", "index": 4}
//! {"at_ms": 900, "active": false}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. `at_ms` must not
//! decrease from one event to the next.

use crate::error::CliError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Navigation command names accepted in session files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NavCommand {
    Advance,
    Retreat,
    Seek,
}

/// One line as it appears in the file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLine {
    at_ms: u64,
    #[serde(default)]
    transcript: Option<String>,
    #[serde(default)]
    nav: Option<NavCommand>,
    #[serde(default)]
    index: Option<usize>,
    #[serde(default)]
    active: Option<bool>,
}

/// Something the host does to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum HostAction {
    /// Recogniser delivered the full transcript so far
    Transcript(String),
    /// User scrolled forward
    Advance,
    /// User scrolled back
    Retreat,
    /// User picked a segment
    Seek(usize),
    /// Feature switched on or off
    SetActive(bool),
}

impl HostAction {
    /// Short label for text output
    pub fn label(&self) -> &'static str {
        match self {
            HostAction::Transcript(_) => "transcript",
            HostAction::Advance => "advance",
            HostAction::Retreat => "retreat",
            HostAction::Seek(_) => "seek",
            HostAction::SetActive(true) => "activate",
            HostAction::SetActive(false) => "deactivate",
        }
    }
}

/// A host action at a point in session time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    /// Offset from session start
    pub at: Duration,
    /// What happened
    pub action: HostAction,
}

/// Parse a whole session file
pub fn parse_session(content: &str) -> Result<Vec<SessionEvent>> {
    let mut events: Vec<SessionEvent> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event = parse_line(trimmed).map_err(|message| CliError::SessionError {
            line: line_no,
            message,
        })?;

        if let Some(prev) = events.last() {
            if event.at < prev.at {
                return Err(CliError::SessionError {
                    line: line_no,
                    message: format!(
                        "at_ms went backwards ({} < {})",
                        event.at.as_millis(),
                        prev.at.as_millis()
                    ),
                }
                .into());
            }
        }

        events.push(event);
    }

    log::info!("Parsed {} session events", events.len());
    Ok(events)
}

fn parse_line(line: &str) -> std::result::Result<SessionEvent, String> {
    let raw: RawLine = serde_json::from_str(line).map_err(|e| e.to_string())?;

    let action = match (raw.transcript, raw.nav, raw.active) {
        (Some(text), None, None) => HostAction::Transcript(text),
        (None, Some(nav), None) => match (nav, raw.index) {
            (NavCommand::Advance, None) => HostAction::Advance,
            (NavCommand::Retreat, None) => HostAction::Retreat,
            (NavCommand::Seek, Some(index)) => HostAction::Seek(index),
            (NavCommand::Seek, None) => return Err("seek requires an index".to_string()),
            (_, Some(_)) => return Err("index is only valid with seek".to_string()),
        },
        (None, None, Some(active)) => HostAction::SetActive(active),
        _ => {
            return Err(
                "expected exactly one of \"transcript\", \"nav\" or \"active\"".to_string(),
            )
        }
    };

    Ok(SessionEvent {
        at: Duration::from_millis(raw.at_ms),
        action,
    })
}
