use std::{collections::HashSet, hash::Hash};

/// Length of the longest contiguous run of pairwise-distinct elements,
/// by a two-pointer window over a set of the elements currently inside.
/// The `str` impl works on bytes.
pub trait LongestUniqueRun {
    fn longest_unique_run(&self) -> usize;
}

impl<T: Eq + Hash> LongestUniqueRun for [T] {
    fn longest_unique_run(&self) -> usize {
        let mut seen = HashSet::new();
        let mut left = 0;
        let mut best = 0;
        for right in 0..self.len() {
            while !seen.insert(&self[right]) {
                seen.remove(&self[left]);
                left += 1;
            }
            best = best.max(right + 1 - left);
        }
        best
    }
}

impl LongestUniqueRun for str {
    fn longest_unique_run(&self) -> usize {
        self.as_bytes().longest_unique_run()
    }
}

#[test]
fn sanity_check() {
    assert_eq!("abcabcbb".longest_unique_run(), 3);
    assert_eq!("bbbbb".longest_unique_run(), 1);
    assert_eq!("pwwkew".longest_unique_run(), 3);
    assert_eq!("dvdf".longest_unique_run(), 3);
    assert_eq!("".longest_unique_run(), 0);
    assert_eq!(" ".longest_unique_run(), 1);

    assert_eq!([1, 2, 2, 3, 4, 5, 2].longest_unique_run(), 4);
}

#[test]
fn check_naive() {
    fn naive(s: &[u32]) -> usize {
        (0..s.len())
            .flat_map(|i| (i..s.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| {
                let w = &s[i..=j];
                (0..w.len()).all(|k| !w[k + 1..].contains(&w[k]))
            })
            .map(|(i, j)| j + 1 - i)
            .max()
            .unwrap_or(0)
    }

    for x in 0..4_u32.pow(6) {
        let s: Vec<u32> =
            (0..6).map(|k| x / 4_u32.pow(k) % 4).collect();
        assert_eq!(s.longest_unique_run(), naive(&s));
    }
}
