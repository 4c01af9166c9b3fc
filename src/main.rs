use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::bail;
use clap::Parser;
use perftdiff::{compare, Record, Source};

/// Compares two perft divide outputs (`<move>: <count>` lines) and prints the
/// moves with different node counts.
#[derive(Parser, Debug)]
#[command(version, long_version = perftdiff::build::CLAP_LONG_VERSION, about)]
struct Config {
    /// Perft output of the tested move generator ("-" for standard input).
    first: Source,
    /// Reference perft output ("-" for standard input).
    second: Source,
    /// Only print the total node counts.
    #[arg(short, long)]
    quiet: bool,
    /// Exit with status 1 if any move has different node counts.
    #[arg(long)]
    fail_on_difference: bool,
}

fn run(config: &Config) -> anyhow::Result<bool> {
    if config.first.is_stdin() && config.second.is_stdin() {
        bail!("only one of the inputs can be read from standard input");
    }
    let first = Record::parse(&config.first.read()?)?;
    let second = Record::parse(&config.second.read()?)?;
    let comparison = compare(&first, &second)?;

    let mut stdout = io::stdout().lock();
    if config.quiet {
        writeln!(stdout, "{}", comparison.summary())?;
    } else {
        write!(stdout, "{comparison}")?;
    }
    stdout.flush()?;
    Ok(comparison.is_match())
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
    perftdiff::log_build_info();

    let config = Config::parse();
    log::debug!("{config:?}");
    let matched = run(&config)?;
    if config.fail_on_difference && !matched {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
