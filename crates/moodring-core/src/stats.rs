use moodring_types::api::MoodStats;
use moodring_types::models::Mood;

/// Reduce one snapshot of the submission log to per-category counts.
///
/// The iterator yields one item per stored submission: `Some(mood)` when
/// the stored category parsed, `None` when it did not. Every item counts
/// toward `total`, but only recognized categories touch a counter, so
/// `total` tracks the raw snapshot length even if the store holds a
/// category this build no longer knows.
pub fn compute_stats<I>(moods: I) -> MoodStats
where
    I: IntoIterator<Item = Option<Mood>>,
{
    let mut stats = MoodStats::default();
    for mood in moods {
        stats.total += 1;
        if let Some(mood) = mood {
            stats.counts.record(mood);
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_category() {
        let stats = compute_stats([Mood::Happy, Mood::Sad, Mood::Happy].map(Some));

        assert_eq!(stats.counts.happy, 2);
        assert_eq!(stats.counts.sad, 1);
        assert_eq!(stats.counts.super_happy, 0);
        assert_eq!(stats.counts.neutral, 0);
        assert_eq!(stats.counts.anxious, 0);
        assert_eq!(stats.total, 3);
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        let stats = compute_stats(Vec::<Option<Mood>>::new());
        assert_eq!(stats, MoodStats::default());
        assert_eq!(stats.counts.sum(), 0);
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn unrecognized_category_counts_toward_total_only() {
        let stats = compute_stats(vec![Some(Mood::Happy), None, Some(Mood::Anxious)]);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.counts.sum(), 2);
        assert!(stats.counts.sum() <= stats.total);
    }

    #[test]
    fn category_sum_equals_total_when_all_recognized() {
        let snapshot: Vec<Option<Mood>> = Mood::ALL.iter().copied().map(Some).collect();
        let stats = compute_stats(snapshot);

        assert_eq!(stats.counts.sum(), stats.total);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.counts.super_happy, 1);
        assert_eq!(stats.counts.happy, 1);
        assert_eq!(stats.counts.neutral, 1);
        assert_eq!(stats.counts.anxious, 1);
        assert_eq!(stats.counts.sad, 1);
    }

    #[test]
    fn recomputing_the_same_snapshot_is_identical() {
        let snapshot = vec![Some(Mood::Neutral), Some(Mood::Happy), None];

        let first = compute_stats(snapshot.iter().cloned());
        let second = compute_stats(snapshot.iter().cloned());
        assert_eq!(first, second);
    }
}
