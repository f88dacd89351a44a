/// Smallest integer rate at which every pile can be finished within
/// `hours`, eating from at most one pile per hour.
///
/// Binary search on the answer over `1..=max(self)`: the hours needed,
/// `sum(ceil(pile / rate))`, is nonincreasing in the rate. Assumes
/// `hours >= self.len()`; below that no rate suffices and the maximum
/// pile size is returned.
pub trait MinEatingSpeed {
    fn min_eating_speed(&self, hours: u64) -> u64;
}

impl MinEatingSpeed for [u64] {
    fn min_eating_speed(&self, hours: u64) -> u64 {
        let mut lo = 1;
        let mut hi = self.iter().copied().max().unwrap_or(1);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let needed: u64 = self.iter().map(|&pile| pile.div_ceil(mid)).sum();
            if needed <= hours {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}

#[test]
fn sanity_check() {
    assert_eq!([3, 6, 7, 11].min_eating_speed(8), 4);
    assert_eq!([30, 11, 23, 4, 20].min_eating_speed(5), 30);
    assert_eq!([30, 11, 23, 4, 20].min_eating_speed(6), 23);

    assert_eq!([10].min_eating_speed(1), 10);
    assert_eq!([10].min_eating_speed(3), 4);
    assert_eq!([10].min_eating_speed(100), 1);
    assert_eq!([1, 1, 1].min_eating_speed(3), 1);
}

#[test]
fn check_naive() {
    let hours_at = |piles: &[u64], rate: u64| -> u64 {
        piles.iter().map(|&pile| pile.div_ceil(rate)).sum()
    };
    for x in 1..6_u64.pow(3) {
        let piles = [x / 36 % 6 + 1, x / 6 % 6 + 1, x % 6 + 1];
        for hours in 3..=18 {
            let naive = (1..)
                .find(|&rate| hours_at(&piles, rate) <= hours)
                .unwrap();
            assert_eq!(piles.min_eating_speed(hours), naive);
        }
    }
}
