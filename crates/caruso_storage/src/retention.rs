//! Fixed-capacity retention planning.
//!
//! The policy keeps the `capacity` most recent records by `generated_at` and
//! evicts the rest. Planning is a pure function over the record list so it
//! can be tested without touching the filesystem; applying a plan (deleting
//! evicted audio files, persisting the survivors) is the store's job.

use caruso_core::ArtifactRecord;

/// The outcome of a retention pass: survivors and evictees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPlan {
    /// Records to persist, most recent first
    pub keep: Vec<ArtifactRecord>,
    /// Records whose files should be deleted
    pub evict: Vec<ArtifactRecord>,
}

impl RetentionPlan {
    /// True when nothing is evicted.
    pub fn is_noop(&self) -> bool {
        self.evict.is_empty()
    }
}

/// Split `records` into the `capacity` most recent and the rest.
///
/// When the list fits within `capacity` the plan keeps everything in its
/// original order. Otherwise records are stable-sorted by `generated_at`
/// descending — equal timestamps keep their ledger order — and split at
/// `capacity`.
///
/// # Examples
///
/// ```
/// use caruso_core::ArtifactRecord;
/// use caruso_storage::retention;
/// use chrono::{TimeZone, Utc};
///
/// let old = ArtifactRecord::new("old.mp3", Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(), "https://a");
/// let new = ArtifactRecord::new("new.mp3", Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(), "https://b");
///
/// let plan = retention::plan(vec![old.clone(), new.clone()], 1);
/// assert_eq!(plan.keep, vec![new]);
/// assert_eq!(plan.evict, vec![old]);
/// ```
pub fn plan(mut records: Vec<ArtifactRecord>, capacity: usize) -> RetentionPlan {
    if records.len() <= capacity {
        return RetentionPlan {
            keep: records,
            evict: Vec::new(),
        };
    }

    // sort_by is stable, so equal timestamps keep their ledger order
    records.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
    let evict = records.split_off(capacity);

    RetentionPlan {
        keep: records,
        evict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(filename: &str, minute: u32) -> ArtifactRecord {
        ArtifactRecord::new(
            filename,
            Utc.with_ymd_and_hms(2026, 8, 7, 12, minute, 0).unwrap(),
            "https://example.com/post",
        )
    }

    #[test]
    fn under_capacity_is_noop() {
        let records = vec![record("a.mp3", 2), record("b.mp3", 1)];
        let plan = plan(records.clone(), 5);

        assert!(plan.is_noop());
        // Order untouched when nothing is evicted.
        assert_eq!(plan.keep, records);
    }

    #[test]
    fn at_capacity_is_noop() {
        let records = vec![record("a.mp3", 1), record("b.mp3", 2)];
        assert!(plan(records, 2).is_noop());
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let records = vec![
            record("oldest.mp3", 0),
            record("newest.mp3", 3),
            record("middle.mp3", 1),
        ];
        let plan = plan(records, 2);

        assert_eq!(
            plan.keep.iter().map(|r| r.filename.as_str()).collect::<Vec<_>>(),
            vec!["newest.mp3", "middle.mp3"]
        );
        assert_eq!(
            plan.evict.iter().map(|r| r.filename.as_str()).collect::<Vec<_>>(),
            vec!["oldest.mp3"]
        );
    }

    #[test]
    fn every_kept_record_is_newer_than_every_evicted_record() {
        let records: Vec<_> = (0..10).map(|i| record(&format!("{i}.mp3"), i)).collect();
        let plan = plan(records, 4);

        let oldest_kept = plan.keep.iter().map(|r| r.generated_at).min().unwrap();
        let newest_evicted = plan.evict.iter().map(|r| r.generated_at).max().unwrap();
        assert!(oldest_kept > newest_evicted);
    }

    #[test]
    fn equal_timestamps_keep_ledger_order() {
        let records = vec![record("first.mp3", 5), record("second.mp3", 5), record("third.mp3", 5)];
        let plan = plan(records, 2);

        assert_eq!(
            plan.keep.iter().map(|r| r.filename.as_str()).collect::<Vec<_>>(),
            vec!["first.mp3", "second.mp3"]
        );
        assert_eq!(plan.evict[0].filename, "third.mp3");
    }

    #[test]
    fn planning_twice_is_idempotent() {
        let records: Vec<_> = (0..8).map(|i| record(&format!("{i}.mp3"), i)).collect();

        let first = plan(records, 3);
        let second = plan(first.keep.clone(), 3);

        assert!(second.is_noop());
        assert_eq!(second.keep, first.keep);
    }
}
