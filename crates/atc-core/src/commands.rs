//! Signals sent from the display layer to the driving loop.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiSignal {
    /// The user asked for a new aircraft.
    SpawnRequested,
    /// The user closed the display.
    Quit,
}

impl UiSignal {
    /// Parse a line of console input (`spawn`, `quit`, case-insensitive).
    pub fn parse_line(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "spawn" | "s" => Some(UiSignal::SpawnRequested),
            "quit" | "q" | "exit" => Some(UiSignal::Quit),
            _ => None,
        }
    }
}
