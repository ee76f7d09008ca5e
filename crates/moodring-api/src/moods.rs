use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use chrono::{Duration, SecondsFormat, Utc};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use moodring_core::{
    DEFAULT_BUCKET_COUNT, DEFAULT_BUCKET_MINUTES, compute_stats, compute_trend, format_export,
};
use moodring_types::api::SubmitMoodRequest;
use moodring_types::models::{Mood, MoodSubmission};

use crate::AppState;
use crate::error::ApiError;
use crate::views;

/// Bound on the recent-submission snapshot consumed by the feed, the
/// trend chart, and the CSV export.
const RECENT_SNAPSHOT_LIMIT: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    RECENT_SNAPSHOT_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    #[serde(default = "default_buckets")]
    pub buckets: usize,
    #[serde(default = "default_minutes")]
    pub minutes: i64,
}

fn default_buckets() -> usize {
    DEFAULT_BUCKET_COUNT
}

fn default_minutes() -> i64 {
    DEFAULT_BUCKET_MINUTES
}

pub async fn submit_mood(
    State(state): State<AppState>,
    payload: Result<Json<SubmitMoodRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::Validation("Invalid submission data"))?;

    let submission = MoodSubmission {
        id: Uuid::new_v4(),
        mood: req.mood,
        name: req.name,
        email: req.email,
        timestamp: Utc::now(),
        consent: req.consent,
    };

    // Run the blocking DB insert off the async runtime
    let db = state.db.clone();
    let stored = submission.clone();
    tokio::task::spawn_blocking(move || {
        db.insert_submission(
            &stored.id.to_string(),
            stored.mood.as_str(),
            stored.name.as_deref(),
            stored.email.as_deref(),
            &stored.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            stored.consent,
        )
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ApiError::Store("Failed to submit mood")
    })?
    .map_err(|e| {
        error!("Submission insert failed: {}", e);
        ApiError::Store("Failed to submit mood")
    })?;

    Ok((StatusCode::CREATED, Json(submission)))
}

pub async fn get_moods(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db.clone();
    let limit = query.limit.min(500);

    let rows = tokio::task::spawn_blocking(move || db.list_recent(limit))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Store("Failed to fetch mood submissions")
        })?
        .map_err(|e| {
            error!("Listing submissions failed: {}", e);
            ApiError::Store("Failed to fetch mood submissions")
        })?;

    Ok(Json(views::parse_rows(rows)))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let db = state.db.clone();

    // Stats run over the whole log, not the bounded recent snapshot.
    let rows = tokio::task::spawn_blocking(move || db.list_all())
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Store("Failed to fetch mood statistics")
        })?
        .map_err(|e| {
            error!("Reading stats snapshot failed: {}", e);
            ApiError::Store("Failed to fetch mood statistics")
        })?;

    // Raw rows on purpose: an unrecognized stored category still counts
    // toward `total`, just never toward a per-category counter.
    let stats = compute_stats(rows.iter().map(|row| row.mood.parse::<Mood>().ok()));
    Ok(Json(stats))
}

pub async fn get_trend(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db.clone();
    let bucket_count = query.buckets.min(96);
    let width = Duration::minutes(query.minutes.clamp(1, 240));

    let rows = tokio::task::spawn_blocking(move || db.list_recent(RECENT_SNAPSHOT_LIMIT))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Store("Failed to compute mood trend")
        })?
        .map_err(|e| {
            error!("Reading trend snapshot failed: {}", e);
            ApiError::Store("Failed to compute mood trend")
        })?;

    let series = compute_trend(&views::parse_rows(rows), Utc::now(), width, bucket_count);
    Ok(Json(series))
}

pub async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let db = state.db.clone();

    let rows = tokio::task::spawn_blocking(move || db.list_recent(RECENT_SNAPSHOT_LIMIT))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Store("Failed to export mood data")
        })?
        .map_err(|e| {
            error!("Reading export snapshot failed: {}", e);
            ApiError::Store("Failed to export mood data")
        })?;

    let csv = format_export(&views::parse_rows(rows));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"mood-submissions.csv\"",
            ),
        ],
        csv,
    ))
}
