use chrono::{DateTime, Utc};
use moodring_db::models::SubmissionRow;
use moodring_types::models::{Mood, MoodSubmission};
use tracing::warn;
use uuid::Uuid;

/// Decode a stored row into the wire model.
///
/// Rows are written by the typed submission path, so every field should
/// parse; a row that does not is logged and dropped rather than poisoning
/// the whole listing.
pub fn parse_row(row: SubmissionRow) -> Option<MoodSubmission> {
    let id = match row.id.parse::<Uuid>() {
        Ok(id) => id,
        Err(e) => {
            warn!("Corrupt submission id '{}': {}", row.id, e);
            return None;
        }
    };

    let mood = match row.mood.parse::<Mood>() {
        Ok(mood) => mood,
        Err(e) => {
            warn!("Corrupt mood on submission '{}': {}", row.id, e);
            return None;
        }
    };

    let timestamp = match row.timestamp.parse::<DateTime<Utc>>() {
        Ok(ts) => ts,
        Err(e) => {
            warn!("Corrupt timestamp '{}' on submission '{}': {}", row.timestamp, row.id, e);
            return None;
        }
    };

    Some(MoodSubmission {
        id,
        mood,
        name: row.name,
        email: row.email,
        timestamp,
        consent: row.consent,
    })
}

pub fn parse_rows(rows: Vec<SubmissionRow>) -> Vec<MoodSubmission> {
    rows.into_iter().filter_map(parse_row).collect()
}
