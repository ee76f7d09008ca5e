use chrono::SecondsFormat;
use moodring_types::models::MoodSubmission;

/// Column order for the CSV export.
pub const EXPORT_HEADER: &str = "ID,Mood,Name,Email,Timestamp,Consent";

/// Render a snapshot as CSV, one row per submission in snapshot order.
///
/// Text columns are always double-quoted with embedded quotes doubled;
/// absent name/email render as `""`. Timestamps use RFC 3339 UTC with
/// millisecond precision so rows sort chronologically as plain strings.
pub fn format_export(submissions: &[MoodSubmission]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');

    let rows: Vec<String> = submissions
        .iter()
        .map(|s| {
            format!(
                "{},{},{},{},{},{}",
                s.id,
                quoted(s.mood.as_str()),
                quoted(s.name.as_deref().unwrap_or("")),
                quoted(s.email.as_deref().unwrap_or("")),
                quoted(&s.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
                s.consent,
            )
        })
        .collect();
    out.push_str(&rows.join("\n"));
    out
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
