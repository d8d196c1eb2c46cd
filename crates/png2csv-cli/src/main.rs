//! `png2csv` - print an image's RGBA8 bytes as CSV on stdout.
//!
//! The image locator is read from `ENV_I_PNG_FILENAME` unless `--input` is
//! given. Logs go to stderr so stdout carries nothing but CSV.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use png2csv_core::{Config, EnvLookup, Pipeline, DEFAULT_LOCATOR_KEY};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "png2csv", version, about)]
struct Cli {
    /// Image path or file:// URI. Takes precedence over the environment.
    #[arg(long)]
    input: Option<String>,

    /// Environment variable holding the image locator.
    #[arg(long, default_value = DEFAULT_LOCATOR_KEY)]
    env_key: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config {
        locator_key: cli.env_key,
        locator: cli.input,
        ..Config::default()
    };
    let pipeline = Pipeline::new(config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    pipeline.run(&EnvLookup, &mut out)?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["png2csv"]);
        assert_eq!(cli.input, None);
        assert_eq!(cli.env_key, "ENV_I_PNG_FILENAME");
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["png2csv", "--input", "a.png", "--env-key", "IMG", "-vv"]);
        assert_eq!(cli.input.as_deref(), Some("a.png"));
        assert_eq!(cli.env_key, "IMG");
        assert_eq!(cli.verbose, 2);
    }
}
