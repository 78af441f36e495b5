use std::collections::HashSet;

use log::{trace, warn};

use super::Block;

/// Configuration for the exhaustive block search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Abandon a branch once its running sum passes the target. Denominations
    /// are positive, so this never changes which subsets are found.
    pub prune: bool,
    /// Blocks longer than this log a warning before the `2^n` search runs.
    pub warn_block_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prune: true,
            warn_block_len: 24,
        }
    }
}

/// One pending include/exclude decision.
struct Frame {
    index: usize,
    chosen: Vec<u64>,
    sum: u64,
}

/// Enumerates every distinct subsequence of `block` summing to `target`.
///
/// Elements are decided in order, "include" before "exclude", so results come
/// out in the order a recursive include/exclude search would find them.
/// Identical sequences (from repeated denominations) are reported once, at
/// their first occurrence. The empty subsequence matches a target of 0.
///
/// # Examples
///
/// ```
/// use subset_blocks::cs::combinatorial::subset::{matching_subsets, SearchConfig};
///
/// let found = matching_subsets(&[1, 1, 5, 10], 11, &SearchConfig::default());
/// assert_eq!(found, vec![vec![1, 10]]);
/// ```
pub fn matching_subsets(block: &[u64], target: u64, config: &SearchConfig) -> Vec<Block> {
    if block.len() > config.warn_block_len {
        warn!(
            "exhaustive subset search over {} elements (2^{} branches)",
            block.len(),
            block.len()
        );
    }

    let mut results: Vec<Block> = Vec::new();
    let mut seen: HashSet<Block> = HashSet::new();
    let mut stack = vec![Frame {
        index: 0,
        chosen: Vec::with_capacity(block.len()),
        sum: 0,
    }];

    while let Some(Frame { index, chosen, sum }) = stack.pop() {
        if index == block.len() {
            if sum == target && seen.insert(chosen.clone()) {
                results.push(chosen);
            }
            continue;
        }

        let value = block[index];

        // Pushed first so it is popped after the whole include subtree.
        stack.push(Frame {
            index: index + 1,
            chosen: chosen.clone(),
            sum,
        });

        let included = sum.saturating_add(value);
        if config.prune && included > target {
            continue;
        }

        let mut with_value = chosen;
        with_value.push(value);
        stack.push(Frame {
            index: index + 1,
            chosen: with_value,
            sum: included,
        });
    }

    trace!(
        "block of {} elements: {} subsets sum to {}",
        block.len(),
        results.len(),
        target
    );
    results
}

/// Picks the subset with the most elements; the earliest one wins ties.
pub fn largest_subset(subsets: &[Block]) -> Option<&Block> {
    subsets
        .iter()
        .enumerate()
        .max_by(|(i, a), (j, b)| a.len().cmp(&b.len()).then(j.cmp(i)))
        .map(|(_, subset)| subset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_prune() -> SearchConfig {
        SearchConfig {
            prune: false,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_discovery_order() {
        let found = matching_subsets(&[1, 2, 3, 4], 5, &SearchConfig::default());
        assert_eq!(found, vec![vec![1, 4], vec![2, 3]]);
    }

    #[test]
    fn test_duplicates_suppressed() {
        let found = matching_subsets(&[1, 1, 1, 1, 5, 10], 16, &SearchConfig::default());
        assert_eq!(found, vec![vec![1, 5, 10]]);
    }

    #[test]
    fn test_prune_does_not_change_results() {
        let block = [1, 1, 2, 3, 5, 5, 8, 13];
        for target in 0..=40 {
            assert_eq!(
                matching_subsets(&block, target, &SearchConfig::default()),
                matching_subsets(&block, target, &no_prune()),
                "target {}",
                target
            );
        }
    }

    #[test]
    fn test_zero_target_matches_empty_subset() {
        let found = matching_subsets(&[3, 4], 0, &SearchConfig::default());
        assert_eq!(found, vec![Vec::<u64>::new()]);
    }

    #[test]
    fn test_no_match() {
        assert!(matching_subsets(&[2, 4, 6], 5, &SearchConfig::default()).is_empty());
        assert!(matching_subsets(&[], 5, &SearchConfig::default()).is_empty());
    }

    #[test]
    fn test_largest_subset_prefers_length_then_order() {
        let subsets = vec![vec![5], vec![1, 4], vec![2, 3], vec![1, 1, 3]];
        assert_eq!(largest_subset(&subsets), Some(&vec![1, 1, 3]));

        let tied = vec![vec![1, 4], vec![2, 3]];
        assert_eq!(largest_subset(&tied), Some(&vec![1, 4]));

        assert_eq!(largest_subset(&[]), None);
    }
}
