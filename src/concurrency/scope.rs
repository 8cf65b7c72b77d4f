//! Fork-join helpers over `std::thread::scope` (std-only, minimal overhead).
//!
//! The parallel strategies all follow the same shape: partition an index
//! range into balanced contiguous chunks, run one scoped worker per chunk,
//! and join before returning. The scope join is the happens-before barrier
//! the level driver relies on — every write made by a worker is visible to
//! the caller once the fork-join call returns.

use core::ops::Range;

/// Splits `0..len` into at most `parts` balanced contiguous ranges.
///
/// The first `len % parts` ranges are one element longer; empty ranges are
/// skipped, so fewer than `parts` ranges come back when `len < parts`.
///
/// # Panics
///
/// Panics if `parts` is zero.
pub fn split_ranges(len: usize, parts: usize) -> impl Iterator<Item = Range<usize>> {
    assert!(parts != 0, "parts must be > 0");
    let base = len / parts;
    let extra = len % parts;
    let mut start = 0usize;
    (0..parts).filter_map(move |i| {
        let size = base + usize::from(i < extra);
        if size == 0 {
            return None;
        }
        let range = start..start + size;
        start += size;
        Some(range)
    })
}

/// Runs `work` over the balanced chunks of `0..len` on scoped threads and
/// returns the per-chunk results in chunk order.
///
/// With `threads == 1` (or a trivially small `len`) no thread is spawned and
/// `work` runs on the caller's stack.
///
/// # Panics
///
/// Panics if `threads` is zero, or propagates a worker panic at the join.
pub fn fork_join_map<T, F>(len: usize, threads: usize, work: F) -> Vec<T>
where
    T: Send,
    F: Fn(Range<usize>) -> T + Sync,
{
    assert!(threads != 0, "threads must be > 0");

    if threads == 1 || len <= 1 {
        return split_ranges(len, 1).map(work).collect();
    }

    std::thread::scope(|scope| {
        let work = &work;
        let handles: Vec<_> = split_ranges(len, threads)
            .map(|range| scope.spawn(move || work(range)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_cover_the_input_exactly_once() {
        for len in [0usize, 1, 2, 7, 8, 100] {
            for parts in [1usize, 2, 3, 8, 200] {
                let ranges: Vec<_> = split_ranges(len, parts).collect();
                let mut covered = 0;
                for (i, r) in ranges.iter().enumerate() {
                    assert_eq!(r.start, covered, "gap before range {i}");
                    assert!(!r.is_empty());
                    covered = r.end;
                }
                assert_eq!(covered, len);
                assert!(ranges.len() <= parts);
            }
        }
    }

    #[test]
    fn balanced_split_differs_by_at_most_one() {
        let sizes: Vec<_> = split_ranges(10, 4).map(|r| r.len()).collect();
        assert_eq!(sizes, vec![3, 3, 2, 2]);
    }

    #[test]
    fn fork_join_collects_in_chunk_order() {
        let chunks = fork_join_map(100, 7, |range| (range.start, range.len()));
        let mut expected_start = 0;
        let mut total = 0;
        for (start, len) in chunks {
            assert_eq!(start, expected_start);
            expected_start += len;
            total += len;
        }
        assert_eq!(total, 100);
    }
}
