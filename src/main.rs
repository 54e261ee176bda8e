//! Live Scoreboard Console
//!
//! Reads scoreboard commands from stdin and prints replies to stdout.
//! Logs go to stderr; set `RUST_LOG` to change the level.

use std::io;
use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use live_scoreboard::{
    Console, ConsoleConfig, MatchRegistry, OutputFormat, RegistryConfig, VERSION,
};

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Launch {
    /// Run the console with this config.
    Run(ConsoleConfig),
    /// Print usage and exit.
    Help,
}

/// Apply command-line flags on top of `config`.
///
/// Later format flags win. `-h`/`--help` stops parsing.
fn parse_args(
    args: impl IntoIterator<Item = String>,
    mut config: ConsoleConfig,
) -> Result<Launch> {
    for arg in args {
        match arg.as_str() {
            "--json" => config.format = OutputFormat::Json,
            "--text" => config.format = OutputFormat::Text,
            "-h" | "--help" => return Ok(Launch::Help),
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(Launch::Run(config))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let console_config = match parse_args(std::env::args().skip(1), ConsoleConfig::from_env())? {
        Launch::Run(config) => config,
        Launch::Help => {
            println!("live-scoreboard {VERSION}\n\nusage: live-scoreboard [--json | --text]\n");
            println!("{}", live_scoreboard::console::HELP);
            return Ok(());
        }
    };

    let registry_config = RegistryConfig::from_env();
    info!("Live Scoreboard v{}", VERSION);
    info!("Pair policy: {:?}", registry_config.pair_policy);

    let registry = Arc::new(MatchRegistry::new(registry_config));
    let console = Console::new(registry, console_config);

    console.run(io::stdin().lock(), io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn json() -> ConsoleConfig {
        ConsoleConfig {
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_no_arguments_keep_config() {
        assert_eq!(parse_args(args(&[]), json()).unwrap(), Launch::Run(json()));
        assert_eq!(
            parse_args(args(&[]), ConsoleConfig::default()).unwrap(),
            Launch::Run(ConsoleConfig::default())
        );
    }

    #[test]
    fn test_format_flags() {
        assert_eq!(
            parse_args(args(&["--json"]), ConsoleConfig::default()).unwrap(),
            Launch::Run(json())
        );
        assert_eq!(
            parse_args(args(&["--text"]), json()).unwrap(),
            Launch::Run(ConsoleConfig {
                format: OutputFormat::Text,
            })
        );
        assert_eq!(
            parse_args(args(&["--text", "--json"]), ConsoleConfig::default()).unwrap(),
            Launch::Run(json())
        );
    }

    #[test]
    fn test_help_flag() {
        assert_eq!(parse_args(args(&["-h"]), json()).unwrap(), Launch::Help);
        assert_eq!(
            parse_args(args(&["--json", "--help"]), ConsoleConfig::default()).unwrap(),
            Launch::Help
        );
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_args(args(&["--xml"]), ConsoleConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --xml");
    }
}
