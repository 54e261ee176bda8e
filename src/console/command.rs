//! Console Commands
//!
//! Line format understood by the console. One command per line, tokens
//! separated by whitespace; names containing spaces go in double quotes.
//!
//! ```text
//! start <home> <guest>
//! score <home> <guest> <home-score> <guest-score>
//! finish <home> <guest>
//! board
//! help
//! quit | exit
//! ```

use thiserror::Error;

use crate::board::score::Score;
use crate::core::error::RegistryError;

/// Usage summary printed by `help`.
pub const HELP: &str = "\
commands:
  start <home> <guest>                  start a match at 0 - 0
  score <home> <guest> <home> <guest>   set the score of a live match
  finish <home> <guest>                 finish a live match
  board                                 show the scoreboard
  help                                  show this help
  quit                                  leave
names with spaces go in double quotes: start \"Costa Rica\" Japan";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a match.
    Start {
        /// Home participant.
        home: String,
        /// Guest participant.
        guest: String,
    },

    /// Replace a match score.
    Score {
        /// Home participant.
        home: String,
        /// Guest participant.
        guest: String,
        /// New score in (home, guest) order.
        score: Score,
    },

    /// Finish a match.
    Finish {
        /// Home participant.
        home: String,
        /// Guest participant.
        guest: String,
    },

    /// Print the scoreboard.
    Board,

    /// Print usage.
    Help,

    /// Stop the console.
    Quit,
}

/// Command parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// First token is not a known command.
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    /// Wrong number of arguments.
    #[error("{command} takes {expected} arguments, got {found}")]
    Arity {
        /// Command name.
        command: &'static str,
        /// Expected argument count.
        expected: usize,
        /// Supplied argument count.
        found: usize,
    },

    /// Score token is not an integer.
    #[error("not a score: {0}")]
    NotANumber(String),

    /// A quoted name was never closed.
    #[error("unterminated quote")]
    UnterminatedQuote,

    /// Score rejected by the board (negative or too large).
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let tokens = tokenize(line)?;
        let Some((verb, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "start" => {
                let [home, guest] = expect_args::<2>("start", args)?;
                Self::Start { home, guest }
            }
            "score" => {
                let [home, guest, h, g] = expect_args::<4>("score", args)?;
                let score = Score::try_from((parse_tally(&h)?, parse_tally(&g)?))?;
                Self::Score { home, guest, score }
            }
            "finish" => {
                let [home, guest] = expect_args::<2>("finish", args)?;
                Self::Finish { home, guest }
            }
            "board" => {
                expect_args::<0>("board", args)?;
                Self::Board
            }
            "help" => {
                expect_args::<0>("help", args)?;
                Self::Help
            }
            "quit" => {
                expect_args::<0>("quit", args)?;
                Self::Quit
            }
            "exit" => {
                expect_args::<0>("exit", args)?;
                Self::Quit
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn expect_args<const N: usize>(
    command: &'static str,
    args: &[String],
) -> Result<[String; N], CommandError> {
    <[String; N]>::try_from(args.to_vec()).map_err(|_| CommandError::Arity {
        command,
        expected: N,
        found: args.len(),
    })
}

fn parse_tally(token: &str) -> Result<i64, CommandError> {
    token
        .parse::<i64>()
        .map_err(|_| CommandError::NotANumber(token.to_string()))
}

/// Split on whitespace, keeping double-quoted runs together.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}
