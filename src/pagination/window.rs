//! Page arithmetic
//!
//! Pure functions behind every recomputation: page count, clamping, the
//! item range of a page and the window of page links around it. All page
//! numbers are 1-indexed.

use std::ops::{Range, RangeInclusive};

/// Number of pages needed for `total_items`, never less than one
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    debug_assert!(page_size >= 1);
    match total_items {
        0 => 1,
        n => (n - 1) / page_size + 1,
    }
}

/// Clamp a requested page into `1..=total_pages`
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(total_pages, |page| page.min(total_pages))
}

/// 0-indexed half-open item range of `page`
pub fn item_range(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    let first = (page - 1).saturating_mul(page_size).min(total_items);
    let last = first.saturating_add(page_size).min(total_items);
    first..last
}

/// Page numbers linked around `page`
///
/// Uses floor division for the lower half and pushes the odd remainder to
/// the upper half, so an even window sits one page right of center
/// (window 4 on page 5 gives 3..=6). Near either end the window is anchored
/// to that end instead of shrinking. Never yields more than `total_pages`
/// numbers, and never a page outside `1..=total_pages`.
pub fn link_window(page: usize, window: usize, total_pages: usize) -> RangeInclusive<usize> {
    let half = window / 2;
    let high = page + half + window % 2;

    let (start, end) = if page <= half {
        // low would fall below page 1
        (1, window)
    } else if high > total_pages {
        ((total_pages + 1).saturating_sub(window).max(1), total_pages)
    } else {
        (page - half, high - 1)
    };

    start..=end.min(total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, 10, 1; "empty collection")]
    #[test_case(1, 10, 1; "single item")]
    #[test_case(10, 10, 1; "exactly one page")]
    #[test_case(11, 10, 2; "one over")]
    #[test_case(95, 10, 10; "ninety five by ten")]
    #[test_case(95, 2, 48; "ninety five by two")]
    #[test_case(95, 100, 1; "page larger than collection")]
    fn test_total_pages(total_items: usize, page_size: usize, expected: usize) {
        assert_eq!(total_pages(total_items, page_size), expected);
    }

    #[test]
    fn test_total_pages_matches_ceiling() {
        for page_size in 1..=12 {
            for total_items in 0..=100_usize {
                let ceil = total_items.div_ceil(page_size).max(1);
                assert_eq!(total_pages(total_items, page_size), ceil);
            }
        }
    }

    #[test_case(-1, 10, 1; "negative")]
    #[test_case(0, 10, 1; "zero")]
    #[test_case(5, 10, 5; "in range")]
    #[test_case(100, 48, 48; "past the end")]
    #[test_case(i64::MAX, 3, 3; "huge")]
    fn test_clamp_page(requested: i64, pages: usize, expected: usize) {
        assert_eq!(clamp_page(requested, pages), expected);
    }

    #[test]
    fn test_item_range() {
        assert_eq!(item_range(1, 10, 95), 0..10);
        assert_eq!(item_range(2, 10, 95), 10..20);
        assert_eq!(item_range(10, 10, 95), 90..95);
        assert_eq!(item_range(48, 2, 95), 94..95);
        assert_eq!(item_range(1, 10, 0), 0..0);
    }

    #[test_case(1, 3, 10, 1..=3; "beginning")]
    #[test_case(5, 3, 10, 4..=6; "middle")]
    #[test_case(10, 3, 10, 8..=10; "end")]
    #[test_case(1, 4, 10, 1..=4; "larger window")]
    #[test_case(5, 4, 10, 3..=6; "even middle")]
    #[test_case(1, 4, 1, 1..=1; "fewer pages than window")]
    #[test_case(3, 5, 4, 1..=4; "right anchor wider than pages")]
    #[test_case(2, 5, 2, 1..=2; "left anchor wider than pages")]
    #[test_case(9, 3, 10, 8..=10; "one before the end")]
    #[test_case(4, 1, 10, 4..=4; "single link")]
    fn test_link_window(
        page: usize,
        window: usize,
        pages: usize,
        expected: RangeInclusive<usize>,
    ) {
        assert_eq!(link_window(page, window, pages), expected);
    }

    #[test]
    fn test_link_window_zero_is_empty() {
        assert!(link_window(1, 0, 10).is_empty());
        assert!(link_window(5, 0, 10).is_empty());
        assert!(link_window(10, 0, 10).is_empty());
    }

    #[test]
    fn test_link_window_bounds() {
        for total in 1..=15 {
            for window in 0..=8 {
                for page in 1..=total {
                    let links = link_window(page, window, total);
                    let count = links.clone().count();
                    assert!(count <= total);
                    assert_eq!(count, window.min(total), "page {page} window {window} total {total}");
                    assert!(links.clone().all(|p| (1..=total).contains(&p)));
                    if window > 0 {
                        assert!(links.contains(&page));
                    }
                }
            }
        }
    }
}
