//! Scoreboard Rendering
//!
//! Text and JSON output for the console.

use std::fmt::Write as _;

use crate::board::matches::Match;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Numbered lines: `1. Spain 10 - Brazil 2`.
    #[default]
    Text,
    /// JSON array of match objects.
    Json,
}

impl OutputFormat {
    /// Parse a format name (`text` / `json`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// One match as `Home h - Guest g`.
pub fn match_line(m: &Match) -> String {
    format!(
        "{} {} - {} {}",
        m.home(),
        m.score().home,
        m.guest(),
        m.score().guest
    )
}

/// Render the whole scoreboard.
pub fn render_board(board: &[Match], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(board),
        OutputFormat::Text if board.is_empty() => Ok("(no live matches)".to_string()),
        OutputFormat::Text => {
            let mut out = String::new();
            for (place, m) in board.iter().enumerate() {
                if place > 0 {
                    out.push('\n');
                }
                let _ = write!(out, "{}. {}", place + 1, match_line(m));
            }
            Ok(out)
        }
    }
}

/// Render a single match.
pub fn render_match(m: &Match, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(m),
        OutputFormat::Text => Ok(match_line(m)),
    }
}
