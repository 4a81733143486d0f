/*!
# moodlog - A Personal Mood Journal

moodlog records how you feel, one short entry at a time, and turns the
history into statistics, a daily chart series and weekly/monthly reports.

## Usage

```
moodlog [OPTIONS] <COMMAND>

Commands:
  add     Record a new mood entry
  edit    Change fields of an existing entry
  delete  Delete an entry
  list    List entries, newest first
  day     Show the entries of a single day, newest first
  stats   Show overall statistics
  chart   Show the daily mood series
  week    Weekly report for the week containing a date
  month   Monthly report for the month containing a date
  export  Write all entries to an export file
  import  Replace all entries with those from an export file
  clear   Delete every entry

Options:
      --file <FILE>  Path to the entry store (overrides MOODLOG_FILE)
      --json         Print machine-readable JSON instead of text
  -v, --verbose      Print verbose output
```

## Configuration

- `MOODLOG_FILE`: The entry store (defaults to `~/.local/share/moodlog/entries.json`)
- `MOODLOG_CHART_DAYS`: Default chart window, 1 to 3650 (defaults to 30)
- `MOODLOG_LOG_FORMAT`: `text` or `json` diagnostics on stderr
- `RUST_LOG`: Log filter (defaults to `info`, or `debug` with `--verbose`)
*/

use clap::Parser;
use moodlog::cli::CliArgs;
use moodlog::clock::SystemClock;
use moodlog::commands::{self, OutputMode};
use moodlog::config::{Config, LogFormat};
use moodlog::constants::{DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME};
use moodlog::errors::AppResult;
use moodlog::store::EntryStore;
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_format, args.verbose);

    let correlation_id = Uuid::new_v4().to_string();
    let root_span = info_span!(TRACING_ROOT_SPAN_NAME, correlation_id = %correlation_id);
    let _guard = root_span.enter();

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logged once here; lower layers only propagate.
            error!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Environment configuration with `--file` applied on top.
fn load_config(args: &CliArgs) -> AppResult<Config> {
    let mut config = Config::load()?;
    if let Some(file) = &args.file {
        config.store_path = file.clone();
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing(format: LogFormat, verbose: bool) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Text => builder.with_target(false).init(),
    }
}

fn run(args: &CliArgs, config: &Config) -> AppResult<()> {
    info!("Starting moodlog");
    debug!("CLI arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let store = EntryStore::new(config.store_path.clone(), Box::new(SystemClock));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(&args.command, &store, config, &SystemClock, mode, &mut out)
}
