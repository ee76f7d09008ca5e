use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The five feelings an attendee can record.
///
/// The set is closed: anything else is rejected once at the submission
/// boundary, so aggregation code downstream can assume every in-memory
/// mood is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    SuperHappy,
    Happy,
    Neutral,
    Anxious,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::SuperHappy,
        Mood::Happy,
        Mood::Neutral,
        Mood::Anxious,
        Mood::Sad,
    ];

    /// Wire name, as stored and exported.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::SuperHappy => "super-happy",
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super-happy" => Ok(Mood::SuperHappy),
            "happy" => Ok(Mood::Happy),
            "neutral" => Ok(Mood::Neutral),
            "anxious" => Ok(Mood::Anxious),
            "sad" => Ok(Mood::Sad),
            other => Err(UnknownMood(other.to_string())),
        }
    }
}

/// A mood string outside the closed category set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood category '{0}'")]
pub struct UnknownMood(pub String);

/// A single recorded submission. Created once at ingestion, never mutated
/// or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodSubmission {
    pub id: Uuid,
    pub mood: Mood,
    pub name: Option<String>,
    pub email: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub consent: bool,
}
