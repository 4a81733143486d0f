//! Plain-text rendering of command results.

use crate::analytics::MoodAnalytics;
use crate::chart::ChartDataPoint;
use crate::constants::MOOD_BAR_WIDTH;
use crate::mood::{MoodDistribution, MoodEntry};
use crate::reports::{MonthlyReport, WeeklyReport};
use std::io::{self, Write};

pub(super) fn entry_added<W: Write>(out: &mut W, entry: &MoodEntry) -> io::Result<()> {
    writeln!(out, "Added entry {}", entry.id)?;
    entry_line(out, entry)
}

pub(super) fn entry_updated<W: Write>(out: &mut W, entry: &MoodEntry) -> io::Result<()> {
    writeln!(out, "Updated entry {}", entry.id)?;
    entry_line(out, entry)
}

pub(super) fn entry_deleted<W: Write>(out: &mut W, entry: &MoodEntry) -> io::Result<()> {
    writeln!(out, "Deleted entry {}", entry.id)?;
    entry_line(out, entry)
}

pub(super) fn entry_list<W: Write>(out: &mut W, entries: &[MoodEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No entries found.");
    }
    for entry in entries {
        entry_line(out, entry)?;
    }
    writeln!(out, "{} entries", entries.len())
}

fn entry_line<W: Write>(out: &mut W, entry: &MoodEntry) -> io::Result<()> {
    write!(out, "{}  {:<8} {}", entry.date, entry.mood.label(), entry.note)?;
    if let Some(intensity) = entry.intensity {
        write!(out, " [{}/10]", intensity)?;
    }
    if let Some(tags) = entry.tags.as_ref().filter(|tags| !tags.is_empty()) {
        write!(out, " #{}", tags.join(" #"))?;
    }
    writeln!(out, "  ({})", entry.id)
}

pub(super) fn analytics<W: Write>(out: &mut W, analytics: &MoodAnalytics) -> io::Result<()> {
    writeln!(out, "Total entries:     {}", analytics.total_entries)?;
    writeln!(out, "Average mood:      {:.2}", analytics.average_mood)?;
    writeln!(out, "Most frequent:     {}", analytics.most_frequent_mood)?;
    writeln!(out, "Trend:             {}", analytics.mood_trend)?;
    writeln!(out, "Current streak:    {} days", analytics.streak_days)?;
    if !analytics.last_entry_date.is_empty() {
        writeln!(out, "Last entry:        {}", analytics.last_entry_date)?;
    }
    distribution(out, &analytics.mood_distribution)
}

fn distribution<W: Write>(out: &mut W, distribution: &MoodDistribution) -> io::Result<()> {
    let total = distribution.total();
    if total == 0 {
        return Ok(());
    }
    writeln!(out, "Distribution:")?;
    for (mood, count) in distribution.iter().filter(|(_, count)| *count > 0) {
        let width = count * MOOD_BAR_WIDTH / total;
        writeln!(out, "  {:<8} {:>4} {}", mood.as_str(), count, "#".repeat(width.max(1)))?;
    }
    Ok(())
}

pub(super) fn chart<W: Write>(out: &mut W, points: &[ChartDataPoint]) -> io::Result<()> {
    for point in points {
        if point.is_empty_day() {
            writeln!(out, "{}  {:>5}  -", point.date, "")?;
        } else {
            let bar = "#".repeat(point.value.round() as usize);
            writeln!(out, "{}  {:>5.2}  {:<10} {}", point.date, point.value, bar, point.mood)?;
        }
    }
    Ok(())
}

pub(super) fn weekly_report<W: Write>(out: &mut W, report: &WeeklyReport) -> io::Result<()> {
    writeln!(out, "Week {} to {}", report.week_start, report.week_end)?;
    writeln!(out, "Entries:       {}", report.entries.len())?;
    if report.entries.is_empty() {
        return Ok(());
    }
    writeln!(out, "Average mood:  {:.2}", report.average_mood)?;
    writeln!(out, "Dominant mood: {}", report.dominant_mood)?;
    writeln!(out, "Mood swings:   {}", report.mood_swings)
}

pub(super) fn monthly_report<W: Write>(out: &mut W, report: &MonthlyReport) -> io::Result<()> {
    writeln!(out, "Month {}", report.month)?;
    writeln!(out, "Entries:       {}", report.entries.len())?;
    if !report.entries.is_empty() {
        writeln!(out, "Average mood:  {:.2}", report.average_mood)?;
        distribution(out, &report.mood_distribution)?;
    }
    if !report.top_triggers.is_empty() {
        writeln!(out, "Top triggers:  {}", report.top_triggers.join(", "))?;
    }
    if !report.recommendations.is_empty() {
        writeln!(out, "Recommendations:")?;
        for recommendation in &report.recommendations {
            writeln!(out, "  - {}", recommendation)?;
        }
    }
    Ok(())
}
