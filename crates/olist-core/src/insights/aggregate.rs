//! Grouping helpers shared by the recipes

use std::collections::HashMap;

use super::types::RankedEntry;

/// How many entries the "top" rankings keep
pub const TOP_N: usize = 10;

/// Treat empty keys as missing
pub fn present(key: &str) -> Option<&str> {
    (!key.is_empty()).then_some(key)
}

/// Count occurrences of each present key.
///
/// Sorted by count, largest first. Equal counts keep the order in which
/// their keys were first seen. Missing keys are skipped.
pub fn value_counts<'a, I>(keys: I) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u64)> = Vec::new();

    for key in keys.into_iter().flatten() {
        match positions.get(key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(label, count)| RankedEntry {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Keep at most `n` entries
pub fn top_n(mut entries: Vec<RankedEntry>, n: usize) -> Vec<RankedEntry> {
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[RankedEntry]) -> Vec<(&str, u64)> {
        entries.iter().map(|e| (e.label.as_str(), e.count)).collect()
    }

    #[test]
    fn test_value_counts_orders_by_count() {
        let keys = ["b", "a", "b", "c", "b", "a"];
        let counts = value_counts(keys.iter().map(|k| Some(*k)));
        assert_eq!(pairs(&counts), vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_value_counts_ties_keep_first_seen_order() {
        let keys = ["x", "y", "z", "z", "y", "x"];
        let counts = value_counts(keys.iter().map(|k| Some(*k)));
        assert_eq!(pairs(&counts), vec![("x", 2), ("y", 2), ("z", 2)]);
    }

    #[test]
    fn test_value_counts_skips_missing() {
        let keys = vec![Some("SP"), None, Some("SP"), None, Some("RJ")];
        let counts = value_counts(keys);
        assert_eq!(pairs(&counts), vec![("SP", 2), ("RJ", 1)]);
    }

    #[test]
    fn test_value_counts_empty() {
        let counts = value_counts(std::iter::empty());
        assert!(counts.is_empty());
    }

    #[test]
    fn test_present() {
        assert_eq!(present("o1"), Some("o1"));
        assert_eq!(present(""), None);
    }

    #[test]
    fn test_top_n() {
        let keys: Vec<String> = (0..15).map(|i| format!("k{}", i)).collect();
        let counts = value_counts(keys.iter().map(|k| Some(k.as_str())));
        assert_eq!(top_n(counts.clone(), TOP_N).len(), 10);
        assert_eq!(top_n(counts, 20).len(), 15);
    }
}
