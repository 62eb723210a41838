//! Property-based tests for pagination arithmetic.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Bounded windows follow the ceil/floor formulas exactly
//! - The all-results mode always collapses to a single page
//! - Non-positive limits clamp to one
//! - The function is total and deterministic over its whole domain

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use searchfan::compute_page_info;

proptest! {
    /// Property: bounded mode reports exactly `ceil(total / limit)` pages.
    #[test]
    fn prop_bounded_page_count_is_ceil(
        total in 0usize..10_000,
        start in 0usize..10_000,
        limit in 1i64..1_000,
    ) {
        let info = compute_page_info(total, start, limit);
        let limit_usize = usize::try_from(limit).unwrap();
        prop_assert_eq!(info.page_count, total.div_ceil(limit_usize));
        prop_assert_eq!(info.page_size, limit_usize);
    }

    /// Property: bounded mode puts `start` on page `floor(start / limit) + 1`.
    #[test]
    fn prop_bounded_page_is_floor_plus_one(
        total in 0usize..10_000,
        start in 0usize..10_000,
        limit in 1i64..1_000,
    ) {
        let info = compute_page_info(total, start, limit);
        let limit_usize = usize::try_from(limit).unwrap();
        prop_assert_eq!(info.page, start / limit_usize + 1);
        prop_assert!(info.page >= 1);
    }

    /// Property: `total` passes through untouched in every mode.
    #[test]
    fn prop_total_preserved(
        total in 0usize..10_000,
        start in 0usize..10_000,
        limit in -1_000i64..1_000,
    ) {
        let info = compute_page_info(total, start, limit);
        prop_assert_eq!(info.total, total);
    }

    /// Property: the all-results mode is always a single page holding
    /// everything from `start` to the end.
    #[test]
    fn prop_all_results_collapses_to_one_page(
        total in 0usize..10_000,
        start in 0usize..20_000,
    ) {
        let info = compute_page_info(total, start, -1);
        prop_assert_eq!(info.page, 1);
        prop_assert_eq!(info.page_count, 1);
        prop_assert_eq!(info.page_size, total.saturating_sub(start));
    }

    /// Property: zero and negative limits other than `-1` behave as one.
    #[test]
    fn prop_non_positive_limit_clamps_to_one(
        total in 0usize..10_000,
        start in 0usize..10_000,
        limit in -1_000i64..=0,
    ) {
        prop_assume!(limit != -1);
        let info = compute_page_info(total, start, limit);
        let clamped = compute_page_info(total, start, 1);
        prop_assert_eq!(info, clamped);
    }

    /// Property: identical inputs always produce identical output.
    #[test]
    fn prop_deterministic(
        total in 0usize..10_000,
        start in 0usize..10_000,
        limit in -1_000i64..1_000,
    ) {
        let first = compute_page_info(total, start, limit);
        let second = compute_page_info(total, start, limit);
        prop_assert_eq!(first, second);
    }

    /// Property: a bounded empty result set has zero pages but still a
    /// well-defined current page.
    #[test]
    fn prop_empty_total_has_zero_pages(
        start in 0usize..10_000,
        limit in 1i64..1_000,
    ) {
        let info = compute_page_info(0, start, limit);
        prop_assert_eq!(info.page_count, 0);
        prop_assert!(info.page >= 1);
    }
}
