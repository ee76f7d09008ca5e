use serde::{Deserialize, Serialize};

use crate::models::Mood;

// -- Submissions --

/// Submission payload. Unknown keys are ignored, matching the form's
/// tolerant parsing; an unknown mood value fails deserialization.
#[derive(Debug, Deserialize)]
pub struct SubmitMoodRequest {
    pub mood: Mood,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default = "default_consent")]
    pub consent: bool,
}

fn default_consent() -> bool {
    true
}

// -- Stats --

/// Per-category counters, serialized with the dashboard's camelCase keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodCounts {
    pub super_happy: u64,
    pub happy: u64,
    pub neutral: u64,
    pub anxious: u64,
    pub sad: u64,
}

impl MoodCounts {
    /// Count one submission against its category.
    pub fn record(&mut self, mood: Mood) {
        match mood {
            Mood::SuperHappy => self.super_happy += 1,
            Mood::Happy => self.happy += 1,
            Mood::Neutral => self.neutral += 1,
            Mood::Anxious => self.anxious += 1,
            Mood::Sad => self.sad += 1,
        }
    }

    /// Sum over all five categories.
    pub fn sum(&self) -> u64 {
        self.super_happy + self.happy + self.neutral + self.anxious + self.sad
    }
}

/// Aggregated counts over one snapshot of the submission log.
///
/// Derived on every read, never cached. `total` counts every stored row
/// in the snapshot, so it can exceed the category sum if the store holds
/// a category this build no longer recognizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoodStats {
    #[serde(flatten)]
    pub counts: MoodCounts,
    pub total: u64,
}

// -- Trend --

/// One fixed-width window of the trend series. `label` is the window's
/// boundary instant formatted HH:MM (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendBucket {
    pub label: String,
    #[serde(flatten)]
    pub counts: MoodCounts,
}

/// Fixed-width windows over the trailing horizon, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    pub buckets: Vec<TrendBucket>,
}

// -- Errors --

/// Error body shape shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_json_matches_dashboard_shape() {
        let mut stats = MoodStats::default();
        stats.counts.record(Mood::Happy);
        stats.counts.record(Mood::Happy);
        stats.counts.record(Mood::Sad);
        stats.total = 3;

        assert_eq!(
            serde_json::to_string(&stats).unwrap(),
            "{\"superHappy\":0,\"happy\":2,\"neutral\":0,\"anxious\":0,\"sad\":1,\"total\":3}"
        );
    }

    #[test]
    fn counts_sum_covers_all_categories() {
        let mut counts = MoodCounts::default();
        for mood in Mood::ALL {
            counts.record(mood);
        }
        assert_eq!(counts.sum(), 5);
    }

    #[test]
    fn submit_request_consent_defaults_true() {
        let req: SubmitMoodRequest = serde_json::from_str("{\"mood\":\"happy\"}").unwrap();
        assert_eq!(req.mood, Mood::Happy);
        assert!(req.consent);
        assert!(req.name.is_none());
        assert!(req.email.is_none());

        let req: SubmitMoodRequest =
            serde_json::from_str("{\"mood\":\"sad\",\"consent\":false}").unwrap();
        assert!(!req.consent);
    }

    #[test]
    fn submit_request_rejects_unknown_mood() {
        assert!(serde_json::from_str::<SubmitMoodRequest>("{\"mood\":\"meh\"}").is_err());
        assert!(serde_json::from_str::<SubmitMoodRequest>("{}").is_err());
    }

    #[test]
    fn submit_request_ignores_unknown_keys() {
        let req: SubmitMoodRequest =
            serde_json::from_str("{\"mood\":\"neutral\",\"source\":\"kiosk\"}").unwrap();
        assert_eq!(req.mood, Mood::Neutral);
    }

    #[test]
    fn trend_bucket_flattens_counts() {
        let bucket = TrendBucket {
            label: "10:15".to_string(),
            counts: MoodCounts::default(),
        };
        assert_eq!(
            serde_json::to_string(&bucket).unwrap(),
            "{\"label\":\"10:15\",\"superHappy\":0,\"happy\":0,\"neutral\":0,\"anxious\":0,\"sad\":0}"
        );
    }
}
