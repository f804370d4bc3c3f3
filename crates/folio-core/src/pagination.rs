//! Page chunking helpers shared by the carousel and the CLI.
//!
//! Everything here is pure: the carousel rebuilds its pages from these
//! functions every time the item list or the page size changes.

use std::ops::Range;

/// Direction of a single-step page move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Splits `items` into contiguous pages of `size` elements.
///
/// The last page may be shorter. Returns no pages when `items` is empty or
/// `size` is zero.
pub fn chunk<T>(items: &[T], size: usize) -> Vec<&[T]> {
    if size == 0 || items.is_empty() {
        return Vec::new();
    }
    items.chunks(size).collect()
}

/// Index ranges of every page for a list of `total` items.
///
/// Same shape as [`chunk`], but without borrowing the list, so owners of a
/// shared item list can store pages next to it.
pub fn page_ranges(total: usize, size: usize) -> Vec<Range<usize>> {
    if size == 0 || total == 0 {
        return Vec::new();
    }
    (0..total)
        .step_by(size)
        .map(|start| start..(start + size).min(total))
        .collect()
}

/// Number of pages needed for `total` items.
pub fn page_count(total: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size)
}

/// Page indicator indices: `0..page_count(total, size)`.
pub fn page_marks(total: usize, size: usize) -> Vec<usize> {
    (0..page_count(total, size)).collect()
}

/// Moves one page in `direction`, never leaving `[0, max_index]`.
pub fn clamp_page_delta(current: usize, direction: Direction, max_index: usize) -> usize {
    match direction {
        Direction::Forward => current.saturating_add(1).min(max_index),
        Direction::Backward => current.saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_concatenation_restores_list() {
        let items: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let pages = chunk(&items, size);
            let joined: Vec<u32> = pages.iter().flat_map(|p| p.iter().copied()).collect();
            assert_eq!(joined, items, "size {size}");

            let (last, full) = pages.split_last().unwrap();
            assert!(full.iter().all(|p| p.len() == size));
            assert!(!last.is_empty() && last.len() <= size);
        }
    }

    #[test]
    fn test_chunk_empty_or_zero_size() {
        let empty: [u8; 0] = [];
        assert!(chunk(&empty, 3).is_empty());
        assert!(chunk(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_page_ranges_match_chunk() {
        let items = ["a", "b", "c", "d", "e"];
        let ranges = page_ranges(items.len(), 2);
        assert_eq!(ranges, vec![0..2, 2..4, 4..5]);

        let pages = chunk(&items, 2);
        for (range, page) in ranges.iter().zip(pages) {
            assert_eq!(&items[range.clone()], page);
        }
    }

    #[test]
    fn test_page_marks_have_no_gaps() {
        assert_eq!(page_marks(0, 3), Vec::<usize>::new());
        assert_eq!(page_marks(1, 3), vec![0]);
        assert_eq!(page_marks(6, 3), vec![0, 1]);
        assert_eq!(page_marks(7, 3), vec![0, 1, 2]);
        assert_eq!(page_marks(7, 0), Vec::<usize>::new());

        for total in 0..40 {
            for size in 1..8 {
                let marks = page_marks(total, size);
                assert_eq!(marks.len(), total.div_ceil(size));
                assert!(marks.iter().enumerate().all(|(i, m)| i == *m));
            }
        }
    }

    #[test]
    fn test_clamp_page_delta_bounds() {
        assert_eq!(clamp_page_delta(0, Direction::Forward, 2), 1);
        assert_eq!(clamp_page_delta(2, Direction::Forward, 2), 2);
        assert_eq!(clamp_page_delta(1, Direction::Backward, 2), 0);
        assert_eq!(clamp_page_delta(0, Direction::Backward, 2), 0);
        assert_eq!(clamp_page_delta(0, Direction::Forward, 0), 0);
    }
}
