/// Values of `1..=n` absent from a slice of length `n` whose elements all
/// lie in `1..=n`, in increasing order.
///
/// Marks occurrence in place by negating the element at index `x - 1` for
/// each value `x`; indices still positive afterwards are the missing
/// values. The collection pass flips the marks back, so the slice reads
/// the same before and after the call.
pub trait MissingNumbers {
    fn missing_numbers(&mut self) -> Vec<i32>;
}

impl MissingNumbers for [i32] {
    fn missing_numbers(&mut self) -> Vec<i32> {
        for i in 0..self.len() {
            let idx = (self[i].abs() - 1) as usize;
            self[idx] = -self[idx].abs();
        }
        let mut res = vec![];
        for i in 0..self.len() {
            if self[i] > 0 {
                res.push(i as i32 + 1);
            } else {
                self[i] = -self[i];
            }
        }
        res
    }
}

#[test]
fn sanity_check() {
    assert_eq!([4, 3, 2, 7, 8, 2, 3, 1].missing_numbers(), [5, 6]);
    assert_eq!([1, 1].missing_numbers(), [2]);
    assert_eq!([2, 2].missing_numbers(), [1]);
    assert_eq!([1, 2, 3].missing_numbers(), []);

    let mut empty: [i32; 0] = [];
    assert_eq!(empty.missing_numbers(), []);
}

#[test]
fn check_restores_input() {
    let mut nums = [4, 3, 2, 7, 8, 2, 3, 1];
    let orig = nums;
    assert_eq!(nums.missing_numbers(), [5, 6]);
    assert_eq!(nums, orig);
    assert_eq!(nums.missing_numbers(), [5, 6]);
}

#[test]
fn check_exhaustive() {
    for x in 0..4_u32.pow(4) {
        let mut nums: Vec<i32> = (0..4)
            .map(|k| (x / 4_u32.pow(k) % 4) as i32 + 1)
            .collect();
        let expected: Vec<i32> =
            (1..=4).filter(|v| !nums.contains(v)).collect();
        assert_eq!(nums.missing_numbers(), expected);
    }
}
