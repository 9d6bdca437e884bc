//! Ordering a team's occupants by repeated precedence contests.
//!
//! A [`TeamRanker`] turns an unordered roster into a most-favored-first
//! order using only a pairwise `prefers(a, b)` function. The placement
//! engine keeps the first `headcount` entries and releases the rest.
//!
//! - [`SelectionRanker`]: O(n²) selection; each pass extracts the
//!   occupant that beats the best-so-far. This is the default and
//!   determines exactly which contests (and therefore which tiebreaks)
//!   occur.
//! - [`MergeRanker`]: O(n log n) merge sort over the same function.

use crate::error::PlacementError;

/// Orders occupants most-favored first using a pairwise precedence.
///
/// `prefers(a, b)` returns `true` when `a` takes precedence over `b`.
/// The function is not assumed to be transitive: random tiebreaks may
/// make it inconsistent across calls.
pub trait TeamRanker: Send + Sync {
    /// Returns the name of this ranker.
    fn name(&self) -> &str;

    /// Orders `occupants`. Errors from `prefers` abort the ranking.
    fn rank<T, F>(&self, occupants: Vec<T>, prefers: F) -> Result<Vec<T>, PlacementError>
    where
        T: Copy,
        F: FnMut(T, T) -> Result<bool, PlacementError>;
}

/// Selection-based ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionRanker;

impl TeamRanker for SelectionRanker {
    fn name(&self) -> &str {
        "Selection"
    }

    fn rank<T, F>(&self, occupants: Vec<T>, mut prefers: F) -> Result<Vec<T>, PlacementError>
    where
        T: Copy,
        F: FnMut(T, T) -> Result<bool, PlacementError>,
    {
        let mut remaining = occupants;
        let mut sorted = Vec::with_capacity(remaining.len());
        while !remaining.is_empty() {
            let mut top = 0;
            for i in 1..remaining.len() {
                if prefers(remaining[i], remaining[top])? {
                    top = i;
                }
            }
            sorted.push(remaining.remove(top));
        }
        Ok(sorted)
    }
}

/// Merge-sort ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeRanker;

impl TeamRanker for MergeRanker {
    fn name(&self) -> &str {
        "Merge"
    }

    fn rank<T, F>(&self, occupants: Vec<T>, mut prefers: F) -> Result<Vec<T>, PlacementError>
    where
        T: Copy,
        F: FnMut(T, T) -> Result<bool, PlacementError>,
    {
        merge_sort(occupants, &mut prefers)
    }
}

fn merge_sort<T, F>(mut items: Vec<T>, prefers: &mut F) -> Result<Vec<T>, PlacementError>
where
    T: Copy,
    F: FnMut(T, T) -> Result<bool, PlacementError>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, prefers)?;
    let right = merge_sort(right, prefers)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if prefers(right[j], left[i])? {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower_wins(a: u32, b: u32) -> Result<bool, PlacementError> {
        Ok(a < b)
    }

    #[test]
    fn test_selection_orders_by_precedence() {
        let ranked = SelectionRanker.rank(vec![5, 3, 9, 1, 4], lower_wins).unwrap();
        assert_eq!(ranked, vec![1, 3, 4, 5, 9]);
    }

    #[test]
    fn test_merge_matches_selection_for_strict_order() {
        let items: Vec<u32> = vec![17, 2, 11, 5, 8, 13, 1, 20, 3];
        let by_selection = SelectionRanker.rank(items.clone(), lower_wins).unwrap();
        let by_merge = MergeRanker.rank(items, lower_wins).unwrap();
        assert_eq!(by_selection, by_merge);
    }

    #[test]
    fn test_selection_contest_order() {
        // Challenger first, best-so-far second, as the tiebreak audit expects.
        let mut calls = Vec::new();
        SelectionRanker
            .rank(vec![1, 2, 3], |a, b| {
                calls.push((a, b));
                Ok(a < b)
            })
            .unwrap();
        assert_eq!(calls, vec![(2, 1), (3, 1), (3, 2)]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(SelectionRanker.rank(Vec::<u32>::new(), lower_wins).unwrap().is_empty());
        assert_eq!(MergeRanker.rank(vec![7], lower_wins).unwrap(), vec![7]);
    }

    #[test]
    fn test_error_aborts_ranking() {
        let result = SelectionRanker.rank(vec![1, 2], |_, _| {
            Err(PlacementError::MissingRatings { team: "T".into() })
        });
        assert!(result.is_err());
        let result = MergeRanker.rank(vec![1, 2], |_, _| {
            Err(PlacementError::MissingRatings { team: "T".into() })
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_rankers_keep_every_occupant_under_inconsistent_precedence() {
        let mut flip = false;
        let mut coin = |_: u32, _: u32| -> Result<bool, PlacementError> {
            flip = !flip;
            Ok(flip)
        };
        let mut ranked = SelectionRanker.rank(vec![4, 1, 3, 2], &mut coin).unwrap();
        ranked.sort_unstable();
        assert_eq!(ranked, vec![1, 2, 3, 4]);

        let mut ranked = MergeRanker.rank(vec![4, 1, 3, 2, 5], &mut coin).unwrap();
        ranked.sort_unstable();
        assert_eq!(ranked, vec![1, 2, 3, 4, 5]);
    }
}
