//! Command Console
//!
//! Line-oriented front end over a [`MatchRegistry`]. Reads commands from any
//! `BufRead`, writes replies to any `Write`. Rejected commands are reported
//! to the user and logged; they never stop the console.

pub mod command;
pub mod render;

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use crate::board::registry::MatchRegistry;

pub use command::{Command, CommandError, HELP};
pub use render::{render_board, render_match, OutputFormat};

/// Console configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Reply format.
    pub format: OutputFormat,
}

impl ConsoleConfig {
    /// Create config from environment variables (`SCOREBOARD_OUTPUT`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            format: lookup("SCOREBOARD_OUTPUT")
                .and_then(|v| OutputFormat::parse(&v))
                .unwrap_or_default(),
        }
    }
}

/// What the console should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and read the next line.
    Print(String),
    /// Stop reading.
    Quit,
}

/// The console.
pub struct Console {
    registry: Arc<MatchRegistry>,
    config: ConsoleConfig,
}

impl Console {
    /// Create a console over a shared registry.
    pub fn new(registry: Arc<MatchRegistry>, config: ConsoleConfig) -> Self {
        Self { registry, config }
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> anyhow::Result<()> {
        info!(
            pair_policy = ?self.registry.config().pair_policy,
            format = ?self.config.format,
            "console ready"
        );

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            match self.handle_line(&line) {
                Reply::Print(text) if text.is_empty() => {}
                Reply::Print(text) => {
                    writeln!(output, "{text}").context("failed to write reply")?;
                }
                Reply::Quit => break,
            }
            output.flush().context("failed to flush output")?;
        }

        info!(live_matches = self.registry.len(), "console closed");
        Ok(())
    }

    /// Parse and execute one line.
    pub fn handle_line(&self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Reply::Print(String::new()),
            Err(e) => {
                warn!(line, error = %e, "rejected command");
                Reply::Print(format!("error: {e}"))
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&self, command: Command) -> Reply {
        let format = self.config.format;
        let result = match command {
            Command::Start { home, guest } => self
                .registry
                .create_match(&home, &guest)
                .map(|m| self.encode(render_match(&m, format))),
            Command::Score { home, guest, score } => self
                .registry
                .update_match(&home, &guest, score)
                .map(|m| self.encode(render_match(&m, format))),
            Command::Finish { home, guest } => self
                .registry
                .finish_match(&home, &guest)
                .map(|m| match format {
                    OutputFormat::Text => format!("final: {}", render::match_line(&m)),
                    OutputFormat::Json => self.encode(render_match(&m, format)),
                }),
            Command::Board => Ok(self.encode(render_board(&self.registry.scoreboard(), format))),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => return Reply::Quit,
        };

        match result {
            Ok(text) => Reply::Print(text),
            Err(e) => {
                warn!(error = %e, "command failed");
                Reply::Print(format!("error: {e}"))
            }
        }
    }

    fn encode(&self, rendered: Result<String, serde_json::Error>) -> String {
        rendered.unwrap_or_else(|e| format!("error: failed to encode reply: {e}"))
    }
}
