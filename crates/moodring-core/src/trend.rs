use chrono::{DateTime, Duration, Utc};
use moodring_types::api::{MoodCounts, TrendBucket, TrendSeries};
use moodring_types::models::MoodSubmission;

/// Canonical bucket width for the dashboard trend chart.
pub const DEFAULT_BUCKET_MINUTES: i64 = 15;

/// Canonical bucket count: 8 x 15 minutes covers the trailing two hours.
pub const DEFAULT_BUCKET_COUNT: usize = 8;

/// Partition a snapshot into `bucket_count` windows of `width` ending at
/// `now`, oldest bucket first.
///
/// A submission with `elapsed = now - timestamp` lands in the window
/// `floor(elapsed / width)` counted back from the newest bucket, so a
/// submission exactly on a boundary belongs to the older window.
/// Anything outside the horizon is dropped, including timestamps in the
/// future (negative elapsed floors below zero). `width` must be positive.
pub fn compute_trend(
    submissions: &[MoodSubmission],
    now: DateTime<Utc>,
    width: Duration,
    bucket_count: usize,
) -> TrendSeries {
    let width_ms = width.num_milliseconds();
    assert!(width_ms > 0, "bucket width must be positive");

    let mut buckets: Vec<TrendBucket> = (0..bucket_count)
        .map(|k| {
            let boundary = now - width * (bucket_count - 1 - k) as i32;
            TrendBucket {
                label: boundary.format("%H:%M").to_string(),
                counts: MoodCounts::default(),
            }
        })
        .collect();

    for submission in submissions {
        let elapsed_ms = (now - submission.timestamp).num_milliseconds();
        let index = elapsed_ms.div_euclid(width_ms);
        if index >= 0 && (index as usize) < bucket_count {
            buckets[bucket_count - 1 - index as usize]
                .counts
                .record(submission.mood);
        }
    }

    TrendSeries { buckets }
}
