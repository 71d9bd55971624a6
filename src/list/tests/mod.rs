//! Various collections of unit tests
//!
//! Most of the confidence in the rebalancing logic comes from fuzzing and the property tests, but
//! the layouts that matter (splits, merges, single-element moves) are also pinned down by hand.

/// Manually-written test cases
mod manual;

use super::QuickList;

/// Returns the number of elements in each node, from first to last
fn layout<T>(list: &QuickList<T>) -> Vec<usize> {
    list.nodes().map(|n| n.len()).collect()
}
