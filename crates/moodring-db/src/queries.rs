use crate::Database;
use crate::models::SubmissionRow;
use anyhow::Result;
use rusqlite::Connection;

impl Database {
    pub fn insert_submission(
        &self,
        id: &str,
        mood: &str,
        name: Option<&str>,
        email: Option<&str>,
        timestamp: &str,
        consent: bool,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO mood_submissions (id, mood, name, email, timestamp, consent)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![id, mood, name, email, timestamp, consent],
            )?;
            Ok(())
        })
    }

    /// Bounded listing for the dashboard feed, most recent first.
    pub fn list_recent(&self, limit: u32) -> Result<Vec<SubmissionRow>> {
        self.with_conn(|conn| query_recent(conn, limit))
    }

    /// Full snapshot in insertion order, for whole-log aggregation.
    pub fn list_all(&self) -> Result<Vec<SubmissionRow>> {
        self.with_conn(query_all)
    }
}

fn query_recent(conn: &Connection, limit: u32) -> Result<Vec<SubmissionRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, mood, name, email, timestamp, consent
         FROM mood_submissions
         ORDER BY timestamp DESC
         LIMIT ?1",
    )?;

    let rows = stmt
        .query_map([limit], read_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_all(conn: &Connection) -> Result<Vec<SubmissionRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, mood, name, email, timestamp, consent
         FROM mood_submissions
         ORDER BY timestamp ASC",
    )?;

    let rows = stmt
        .query_map([], read_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SubmissionRow> {
    Ok(SubmissionRow {
        id: row.get(0)?,
        mood: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        timestamp: row.get(4)?,
        consent: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{SecondsFormat, TimeZone, Utc};
    use std::path::Path;
    use uuid::Uuid;

    fn open_test_db() -> Database {
        Database::open(Path::new(":memory:")).unwrap()
    }

    fn ts(minute: u32) -> String {
        Utc.with_ymd_and_hms(2025, 8, 25, 10, minute, 0)
            .unwrap()
            .to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    #[test]
    fn insert_is_visible_to_reads() {
        let db = open_test_db();
        let id = Uuid::new_v4().to_string();
        db.insert_submission(&id, "happy", Some("Ada"), None, &ts(0), true)
            .unwrap();

        let rows = db.list_recent(10).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].mood, "happy");
        assert_eq!(rows[0].name.as_deref(), Some("Ada"));
        assert_eq!(rows[0].email, None);
        assert_eq!(rows[0].timestamp, ts(0));
        assert!(rows[0].consent);
    }

    #[test]
    fn list_recent_orders_newest_first_and_honors_limit() {
        let db = open_test_db();
        for minute in 0..5 {
            let id = Uuid::new_v4().to_string();
            db.insert_submission(&id, "neutral", None, None, &ts(minute), true)
                .unwrap();
        }

        let rows = db.list_recent(3).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].timestamp, ts(4));
        assert_eq!(rows[2].timestamp, ts(2));
    }

    #[test]
    fn list_all_orders_oldest_first() {
        let db = open_test_db();
        for minute in [3, 1, 2] {
            let id = Uuid::new_v4().to_string();
            db.insert_submission(&id, "sad", None, None, &ts(minute), false)
                .unwrap();
        }

        let rows = db.list_all().unwrap();
        let stamps: Vec<&str> = rows.iter().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(stamps, vec![ts(1), ts(2), ts(3)]);
    }

    #[test]
    fn optional_fields_round_trip_as_null() {
        let db = open_test_db();
        let id = Uuid::new_v4().to_string();
        db.insert_submission(&id, "anxious", None, Some("a@b.c"), &ts(0), false)
            .unwrap();

        let rows = db.list_all().unwrap();
        assert_eq!(rows[0].name, None);
        assert_eq!(rows[0].email.as_deref(), Some("a@b.c"));
        assert!(!rows[0].consent);
    }
}
