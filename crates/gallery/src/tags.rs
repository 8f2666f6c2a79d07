//! Tag index derived from the history collection.
//!
//! Nothing is persisted: frequencies are recomputed from the records on
//! every call, which is cheap while history is capped at a few dozen entries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::HistoryRecord;

/// A tag and how many times it is used across history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Count tag usage, most used first.
///
/// Every occurrence counts, including repeats within one record. Ties keep
/// first-encounter order (newest record first, then the record's own tag order).
pub fn tag_frequencies(records: &[HistoryRecord]) -> Vec<TagCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for tag in records.iter().flat_map(|record| record.tags.iter()) {
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }

    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(name, count)| TagCount {
            name: name.to_string(),
            count,
        })
        .collect();
    // sort_by is stable
    tags.sort_by(|a, b| b.count.cmp(&a.count));
    tags
}

/// Records carrying at least one of `filter` (OR). An empty filter keeps everything.
pub fn filter_by_tags(records: Vec<HistoryRecord>, filter: &[String]) -> Vec<HistoryRecord> {
    if filter.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| record.tags.iter().any(|tag| filter.contains(tag)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, tags: &[&str]) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            prompt: format!("prompt {}", id),
            filename: format!("{}.png", id),
            timestamp: "2025-01-01T00:00:00+00:00".to_string(),
            image_url: format!("/images/{}.png", id),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn names(tags: &[TagCount]) -> Vec<(&str, usize)> {
        tags.iter().map(|t| (t.name.as_str(), t.count)).collect()
    }

    #[test]
    fn test_tag_frequencies() {
        let records = vec![record("1", &["a", "b"]), record("2", &["a"])];
        assert_eq!(names(&tag_frequencies(&records)), vec![("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_tag_frequency_ties_keep_encounter_order() {
        let records = vec![
            record("1", &["sunset", "beach"]),
            record("2", &["portrait"]),
            record("3", &["beach", "portrait", "sunset"]),
            record("4", &["city"]),
        ];

        assert_eq!(
            names(&tag_frequencies(&records)),
            vec![("sunset", 2), ("beach", 2), ("portrait", 2), ("city", 1)]
        );
    }

    #[test]
    fn test_duplicate_tags_count_twice() {
        let records = vec![record("1", &["x", "x"]), record("2", &["y"])];
        assert_eq!(names(&tag_frequencies(&records)), vec![("x", 2), ("y", 1)]);
    }

    #[test]
    fn test_no_tags() {
        assert!(tag_frequencies(&[record("1", &[])]).is_empty());
    }

    #[test]
    fn test_filter_empty_returns_everything() {
        let records = vec![record("1", &["a"]), record("2", &[])];
        assert_eq!(filter_by_tags(records.clone(), &[]), records);
    }

    #[test]
    fn test_filter_is_or() {
        let records = vec![
            record("1", &["a"]),
            record("2", &["b"]),
            record("3", &["c"]),
            record("4", &["a", "b"]),
        ];

        let filtered = filter_by_tags(records, &["x".to_string(), "b".to_string(), "a".to_string()]);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_filter_single_tag() {
        let records = vec![record("1", &["x", "y"]), record("2", &["y"]), record("3", &[])];
        let filtered = filter_by_tags(records, &["x".to_string()]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }
}
