//! Output formatting utilities

use crate::application::StatsReport;
use crate::domain::{LocalZone, MoodEntry, TrendPoint};

/// Format one entry as a single line plus an optional quoted notes line
pub fn format_entry(entry: &MoodEntry, zone: LocalZone) -> String {
    let mut output = format!(
        "{}  {} ({}/5)\n",
        zone.format(entry.date, "%d-%m-%Y %H:%M"),
        entry.mood,
        entry.intensity
    );
    if !entry.notes.is_empty() {
        output.push_str(&format!("    \"{}\"\n", entry.notes));
    }
    output
}

/// Format entries for the history listing
pub fn format_history(entries: &[&MoodEntry], zone: LocalZone) -> String {
    if entries.is_empty() {
        return "No entries yet".to_string();
    }

    entries
        .iter()
        .map(|entry| format_entry(entry, zone))
        .collect()
}

/// Format the trend as one bar per entry, oldest first
pub fn format_trend(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return "Start tracking your mood to see trends!".to_string();
    }

    let mut output = String::new();
    for point in points {
        let bar = "#".repeat(usize::from(point.value));
        output.push_str(&format!("{}  {:<5} {}\n", point.day, bar, point.value));
    }
    output
}

pub fn format_stats(report: &StatsReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total Entries:  {}\n", report.total_entries));
    output.push_str(&format!("Average Mood:   {:.1}/5\n", report.average_mood));
    output.push_str(&format!("Current Streak: {} days\n", report.current_streak));
    output.push_str(&format!("This Week:      {} entries\n", report.this_week));
    output.push_str(&format!("This Month:     {} entries\n", report.this_month));
    output.push_str("Achievements:\n");
    for achievement in &report.achievements {
        let mark = if achievement.earned { "x" } else { " " };
        output.push_str(&format!(
            "  [{}] {} - {}\n",
            mark, achievement.title, achievement.description
        ));
    }
    output
}
