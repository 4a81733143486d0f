//! Execution of CLI subcommands.
//!
//! Each command loads the full entry list from the store, hands it to the
//! pure analytics/filter/report functions and renders the result either as
//! plain text or as pretty-printed JSON.

mod render;

use crate::analytics::compute_analytics;
use crate::chart::generate_chart_data;
use crate::cli::{parse_date_arg, Command};
use crate::clock::Clock;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::filter::filter_entries;
use crate::reports::{generate_monthly_report, generate_weekly_report};
use crate::store::EntryStore;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tracing::{debug, info};

/// Output style chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Runs `command` against `store`, writing results to `out`.
///
/// # Errors
///
/// Propagates store, lock and I/O errors, and returns `AppError::InvalidInput`
/// for unparseable dates or an unconfirmed `clear`.
pub fn execute<W: Write>(
    command: &Command,
    store: &EntryStore,
    config: &Config,
    clock: &dyn Clock,
    mode: OutputMode,
    out: &mut W,
) -> AppResult<()> {
    debug!("Executing {:?}", command);

    match command {
        Command::Add(add) => {
            let entry = store.add(add.to_new_entry()?)?;
            emit(out, mode, &entry, |out| render::entry_added(out, &entry))?;
        }
        Command::Edit(edit) => {
            let update = edit.to_entry_update()?;
            if update.is_empty() {
                return Err(AppError::InvalidInput(
                    "Nothing to change. Pass at least one of --mood, --note, --date, --intensity, --tag"
                        .to_string(),
                ));
            }
            let entry = store.update(&edit.id, update)?;
            emit(out, mode, &entry, |out| render::entry_updated(out, &entry))?;
        }
        Command::Delete { id } => {
            let entry = store.delete(id)?;
            emit(out, mode, &entry, |out| render::entry_deleted(out, &entry))?;
        }
        Command::List(list) => {
            let filter = list.to_mood_filter()?;
            let entries = filter_entries(&store.load()?, &filter);
            emit(out, mode, &entries, |out| render::entry_list(out, &entries))?;
        }
        Command::Day { date } => {
            let day = parse_date_arg(date.as_deref())?.unwrap_or_else(|| clock.today());
            let entries = store.entries_on(day)?;
            emit(out, mode, &entries, |out| render::entry_list(out, &entries))?;
        }
        Command::Stats => {
            let analytics = compute_analytics(&store.load()?);
            emit(out, mode, &analytics, |out| render::analytics(out, &analytics))?;
        }
        Command::Chart { days } => {
            let days = days.unwrap_or(config.chart_days);
            let points = generate_chart_data(&store.load()?, days, clock);
            emit(out, mode, &points, |out| render::chart(out, &points))?;
        }
        Command::Week { date } => {
            let anchor = parse_date_arg(date.as_deref())?.unwrap_or_else(|| clock.today());
            let report = generate_weekly_report(&store.load()?, anchor);
            emit(out, mode, &report, |out| render::weekly_report(out, &report))?;
        }
        Command::Month { date } => {
            let anchor = parse_date_arg(date.as_deref())?.unwrap_or_else(|| clock.today());
            let report = generate_monthly_report(&store.load()?, anchor);
            emit(out, mode, &report, |out| render::monthly_report(out, &report))?;
        }
        Command::Export { path } => {
            let count = store.export_to(path)?;
            let summary = json!({ "exported": count, "path": path });
            emit(out, mode, &summary, |out| {
                writeln!(out, "Exported {} entries to {}", count, path.display())
            })?;
        }
        Command::Import { path } => {
            let count = store.import_from(path)?;
            let summary = json!({ "imported": count });
            emit(out, mode, &summary, |out| {
                writeln!(out, "Imported {} entries", count)
            })?;
        }
        Command::Clear { yes } => {
            if !yes {
                return Err(AppError::InvalidInput(
                    "Refusing to delete every entry without --yes".to_string(),
                ));
            }
            let count = store.clear()?;
            let summary = json!({ "deleted": count });
            emit(out, mode, &summary, |out| writeln!(out, "Deleted {} entries", count))?;
        }
    }

    info!("Command completed");
    Ok(())
}

/// Writes `value` as JSON or hands `out` to the text renderer.
fn emit<W, T, F>(out: &mut W, mode: OutputMode, value: &T, text: F) -> AppResult<()>
where
    W: Write,
    T: Serialize + ?Sized,
    F: FnOnce(&mut W) -> std::io::Result<()>,
{
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text(out)?,
    }
    Ok(())
}
