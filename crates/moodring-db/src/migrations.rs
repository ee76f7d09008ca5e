use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS mood_submissions (
            id          TEXT PRIMARY KEY,
            mood        TEXT NOT NULL,
            name        TEXT,
            email       TEXT,
            timestamp   TEXT NOT NULL,
            consent     INTEGER NOT NULL DEFAULT 1
        );

        CREATE INDEX IF NOT EXISTS idx_mood_submissions_timestamp
            ON mood_submissions(timestamp);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
