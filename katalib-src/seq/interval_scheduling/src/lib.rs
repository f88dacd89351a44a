/// Minimum number of half-open intervals to remove so that the remaining
/// ones are pairwise non-overlapping; intervals that merely touch do not
/// overlap.
///
/// Greedy over intervals ordered by right endpoint: keeping the earliest
/// finisher among the conflicting ones is always optimal. The ordering is
/// taken through an index vector, leaving the input as given.
pub trait MinIntervalRemovals {
    fn min_interval_removals(&self) -> usize;
}

impl<T: Ord + Copy> MinIntervalRemovals for [(T, T)] {
    fn min_interval_removals(&self) -> usize {
        let ord = {
            let mut ord: Vec<_> = (0..self.len()).collect();
            ord.sort_unstable_by_key(|&i| self[i].1);
            ord
        };

        let mut removed = 0;
        let mut current: Option<T> = None;
        for (start, end) in ord.iter().map(|&i| self[i]) {
            match current {
                Some(cur) if start < cur => removed += 1,
                _ => current = Some(end),
            }
        }
        removed
    }
}

#[test]
fn sanity_check() {
    assert_eq!([(1, 2), (2, 3), (3, 4), (1, 3)].min_interval_removals(), 1);
    assert_eq!([(1, 2), (1, 2), (1, 2)].min_interval_removals(), 2);
    assert_eq!([(1, 2), (2, 3)].min_interval_removals(), 0);
    assert_eq!([(1, 10), (2, 3), (4, 5), (6, 7)].min_interval_removals(), 1);

    let empty: [(i32, i32); 0] = [];
    assert_eq!(empty.min_interval_removals(), 0);
    assert_eq!([(-5, 5)].min_interval_removals(), 0);
}

#[test]
fn check_input_untouched() {
    let intervals = [(3, 4), (1, 2), (2, 9), (2, 3)];
    assert_eq!(intervals.min_interval_removals(), 1);
    assert_eq!(intervals, [(3, 4), (1, 2), (2, 9), (2, 3)]);
}

#[test]
fn check_naive() {
    // all interval sets over endpoints in 0..4, three intervals
    let all: Vec<(i32, i32)> = (0..4)
        .flat_map(|s| (s + 1..4).map(move |e| (s, e)))
        .collect();
    for &x in &all {
        for &y in &all {
            for &z in &all {
                let set = [x, y, z];
                let naive = if !overlaps(x, y)
                    && !overlaps(y, z)
                    && !overlaps(x, z)
                {
                    0
                } else if (0..3).any(|omit| {
                    let rest: Vec<_> = (0..3)
                        .filter(|&i| i != omit)
                        .map(|i| set[i])
                        .collect();
                    !overlaps(rest[0], rest[1])
                }) {
                    1
                } else {
                    2
                };
                assert_eq!(set.min_interval_removals(), naive);
            }
        }
    }
}

#[cfg(test)]
fn overlaps((s0, e0): (i32, i32), (s1, e1): (i32, i32)) -> bool {
    s0 < e1 && s1 < e0
}
