//! Command-line interface definition.

use crate::constants::{APP_DESCRIPTION, APP_NAME, MAX_CHART_DAYS, MAX_INTENSITY, MIN_INTENSITY};
use crate::dates::{format_date, parse_date_string};
use crate::errors::{AppError, AppResult};
use crate::filter::MoodFilter;
use crate::mood::Mood;
use crate::store::{EntryUpdate, NewEntry};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A personal mood journal with analytics and reports
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Path to the entry store (overrides MOODLOG_FILE)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, one per journal operation.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Record a new mood entry
    Add(AddArgs),

    /// Change fields of an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete {
        /// Entry identifier
        id: String,
    },

    /// List entries, newest first
    List(ListArgs),

    /// Show the entries of a single day, newest first
    Day {
        /// The day to show (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show overall statistics
    Stats,

    /// Show the daily mood series
    Chart {
        /// Number of days ending today, 1 to 3650 (defaults to MOODLOG_CHART_DAYS or 30)
        #[arg(short, long, value_parser = parse_chart_days)]
        days: Option<usize>,
    },

    /// Weekly report for the week containing a date
    Week {
        /// Any day of the week (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Monthly report for the month containing a date
    Month {
        /// Any day of the month (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Write all entries to an export file
    Export {
        path: PathBuf,
    },

    /// Replace all entries with those from an export file
    Import {
        path: PathBuf,
    },

    /// Delete every entry
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, PartialEq)]
pub struct AddArgs {
    /// One of: happy, sad, anxious, excited, calm, angry, neutral
    #[arg(value_parser = parse_mood)]
    pub mood: Mood,

    /// What happened
    pub note: String,

    /// Day the entry belongs to (YYYY-MM-DD or YYYYMMDD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Intensity from 1 to 10
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(i64::from(MIN_INTENSITY)..=i64::from(MAX_INTENSITY)))]
    pub intensity: Option<u8>,

    /// Tag to attach (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Args, Debug, PartialEq)]
pub struct EditArgs {
    /// Entry identifier
    pub id: String,

    #[arg(long, value_parser = parse_mood)]
    pub mood: Option<Mood>,

    #[arg(long)]
    pub note: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(i64::from(MIN_INTENSITY)..=i64::from(MAX_INTENSITY)))]
    pub intensity: Option<u8>,

    /// Replace the tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Args, Debug, PartialEq)]
pub struct ListArgs {
    /// Earliest date to include
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date to include
    #[arg(long)]
    pub to: Option<String>,

    /// Only these moods (repeatable)
    #[arg(short, long, value_parser = parse_mood)]
    pub mood: Vec<Mood>,

    /// Text to look for in notes and mood names
    #[arg(short, long)]
    pub search: Option<String>,
}

fn parse_mood(raw: &str) -> Result<Mood, String> {
    raw.parse::<Mood>().map_err(|e| e.to_string())
}

fn parse_chart_days(raw: &str) -> Result<usize, String> {
    let days: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of days", raw))?;
    if (1..=MAX_CHART_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(format!("must be between 1 and {} days", MAX_CHART_DAYS))
    }
}

/// Parses an optional date argument in YYYY-MM-DD or YYYYMMDD format.
pub fn parse_date_arg(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    raw.map(|value| {
        parse_date_string(value)
            .map_err(|e| AppError::InvalidInput(format!("Invalid date '{}': {}", value, e)))
    })
    .transpose()
}

impl AddArgs {
    /// Builds the store request for `add`.
    pub fn to_new_entry(&self) -> AppResult<NewEntry> {
        Ok(NewEntry {
            mood: self.mood,
            note: self.note.clone(),
            date: parse_date_arg(self.date.as_deref())?,
            intensity: self.intensity,
            tags: self.tags.clone(),
        })
    }
}

impl EditArgs {
    /// Builds the store request for `edit`.
    pub fn to_entry_update(&self) -> AppResult<EntryUpdate> {
        Ok(EntryUpdate {
            mood: self.mood,
            note: self.note.clone(),
            date: parse_date_arg(self.date.as_deref())?,
            intensity: self.intensity,
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
        })
    }
}

impl ListArgs {
    /// Builds the filter for `list`. Dates are normalized to YYYY-MM-DD.
    pub fn to_mood_filter(&self) -> AppResult<MoodFilter> {
        Ok(MoodFilter {
            start_date: parse_date_arg(self.from.as_deref())?.map(format_date),
            end_date: parse_date_arg(self.to.as_deref())?.map(format_date),
            mood_types: (!self.mood.is_empty()).then(|| self.mood.clone()),
            search_term: self.search.clone(),
        })
    }
}
