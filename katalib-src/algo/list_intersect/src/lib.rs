//! First node shared by two singly linked lists, by identity.
//!
//! Three strategies for the same answer:
//!
//! - [`intersection_by_marking`]: hash every node of the first list, scan
//!   the second. Linear time, linear extra space.
//! - [`intersection_by_length`]: equalize the remaining lengths, then walk
//!   in lockstep. Linear time, constant space, reads only.
//! - [`intersection`]: splice the first list's tail onto the second head,
//!   reducing the problem to tortoise-and-hare cycle detection. Linear
//!   time, constant space. The splice is undone on every exit path, so the
//!   caller's structure is unchanged once the call returns.

use std::{collections::HashSet, ptr::NonNull};

use slist::{Head, ListNode};

unsafe fn next<T>(node: NonNull<ListNode<T>>) -> Head<T> {
    (*node.as_ptr()).next()
}

/// Rewires `tail_of(head).next` to `target`, undoing it on drop.
struct Splice<T> {
    tail: NonNull<ListNode<T>>,
}

impl<T> Splice<T> {
    unsafe fn new(head: NonNull<ListNode<T>>, target: Head<T>) -> Self {
        let mut tail = head;
        while let Some(node) = next(tail) {
            tail = node;
        }
        (*tail.as_ptr()).set_next(target);
        Self { tail }
    }
}

impl<T> Drop for Splice<T> {
    fn drop(&mut self) {
        unsafe { (*self.tail.as_ptr()).set_next(None) };
    }
}

/// Returns the first node reachable from both heads, or `None` if the lists
/// are disjoint. Temporarily splices the tail of `head_a` onto `head_b`; a
/// cycle then exists iff the lists intersect, and its entry point (found by
/// the tortoise-and-hare meeting argument) is the first shared node. The
/// splice is restored before returning, whichever path exits.
///
/// # Safety
///
/// Every node reachable from either head must be valid for reads and
/// writes, the list under `head_a` must be acyclic, and no other access to
/// either list may overlap the call (the structure is briefly rewired).
pub unsafe fn intersection<T>(head_a: Head<T>, head_b: Head<T>) -> Head<T> {
    let head = head_a?;
    let _splice = Splice::new(head, head_b);

    let mut slow = head;
    let mut fast = head;
    let meet = loop {
        fast = match next(fast) {
            Some(node) => match next(node) {
                Some(node) => node,
                None => break None,
            },
            None => break None,
        };
        slow = match next(slow) {
            Some(node) => node,
            None => break None,
        };
        if slow == fast {
            break Some(fast);
        }
    };
    let mut fast = meet?;

    // head and the meeting point are equidistant from the cycle entry,
    // modulo the cycle length
    let mut slow = head;
    while slow != fast {
        slow = match next(slow) {
            Some(node) => node,
            None => break,
        };
        fast = match next(fast) {
            Some(node) => node,
            None => break,
        };
    }
    Some(slow)
}

/// Hash-set variant: records every node of `head_a` by address, then
/// returns the first node of `head_b` already seen.
///
/// # Safety
///
/// Every node reachable from either head must be valid for reads, and both
/// lists must be acyclic.
pub unsafe fn intersection_by_marking<T>(
    head_a: Head<T>,
    head_b: Head<T>,
) -> Head<T> {
    let mut seen = HashSet::new();
    let mut cur = head_a;
    while let Some(node) = cur {
        seen.insert(node);
        cur = next(node);
    }

    let mut cur = head_b;
    while let Some(node) = cur {
        if seen.contains(&node) {
            return Some(node);
        }
        cur = next(node);
    }
    None
}

/// Length-equalization variant: skips the longer list's extra prefix, then
/// advances both heads in lockstep until they coincide. Aligned lists have
/// equal remaining length, so disjoint inputs run off both ends together.
///
/// # Safety
///
/// Every node reachable from either head must be valid for reads, and both
/// lists must be acyclic.
pub unsafe fn intersection_by_length<T>(
    head_a: Head<T>,
    head_b: Head<T>,
) -> Head<T> {
    let (len_a, len_b) = (len(head_a), len(head_b));
    let mut a = skip(head_a, len_a.saturating_sub(len_b));
    let mut b = skip(head_b, len_b.saturating_sub(len_a));
    while a != b {
        a = match a {
            Some(node) => next(node),
            None => None,
        };
        b = match b {
            Some(node) => next(node),
            None => None,
        };
    }
    a
}

unsafe fn len<T>(head: Head<T>) -> usize {
    let mut n = 0;
    let mut cur = head;
    while let Some(node) = cur {
        n += 1;
        cur = next(node);
    }
    n
}

unsafe fn skip<T>(head: Head<T>, by: usize) -> Head<T> {
    let mut cur = head;
    for _ in 0..by {
        cur = match cur {
            Some(node) => next(node),
            None => None,
        };
    }
    cur
}

#[cfg(test)]
unsafe fn tail<T>(head: Head<T>) -> Head<T> {
    let mut cur = head?;
    while let Some(node) = next(cur) {
        cur = node;
    }
    Some(cur)
}

#[test]
fn sanity_check() {
    let mut pool = slist::Pool::new();
    let shared = pool.chain([8, 4, 5], None);
    let a = pool.chain([4, 1], shared);
    let b = pool.chain([5, 6, 1], shared);

    unsafe {
        assert_eq!(intersection(a, b), shared);
        assert_eq!(intersection(a, b), shared);
        assert_eq!(intersection(b, a), shared);
    }

    // the splice left no trace
    assert!(pool.values(a).copied().eq([4, 1, 8, 4, 5]));
    assert!(pool.values(b).copied().eq([5, 6, 1, 8, 4, 5]));
    unsafe {
        assert_eq!(tail(a), tail(b));
        assert_eq!(next(tail(a).unwrap()), None);
    }
}

#[test]
fn check_disjoint() {
    let mut pool = slist::Pool::new();
    let a = pool.chain([2, 6, 4], None);
    let b = pool.chain([1, 5], None);

    unsafe {
        assert_eq!(intersection(a, b), None);
        assert_eq!(intersection(b, a), None);
    }
    assert!(pool.values(a).copied().eq([2, 6, 4]));
    assert!(pool.values(b).copied().eq([1, 5]));
}

#[test]
fn check_empty() {
    let mut pool = slist::Pool::new();
    let a = pool.chain([1], None);

    unsafe {
        assert_eq!(intersection::<i32>(None, None), None);
        assert_eq!(intersection(None, a), None);
        assert_eq!(intersection(a, None), None);
    }
    assert!(pool.values(a).copied().eq([1]));
}

#[test]
fn check_same_head() {
    let mut pool = slist::Pool::new();
    let a = pool.chain([1, 2, 3], None);
    unsafe { assert_eq!(intersection(a, a), a) };
    assert!(pool.values(a).copied().eq([1, 2, 3]));
}

#[test]
fn check_meet_at_tail() {
    let mut pool = slist::Pool::new();
    let shared = pool.chain([5], None);
    let a = pool.chain([4, 1], shared);

    // b's head is a's tail
    unsafe {
        assert_eq!(intersection(a, shared), shared);
        assert_eq!(intersection(shared, a), shared);
    }
    assert!(pool.values(a).copied().eq([4, 1, 5]));
}

#[test]
fn check_exhaustive() {
    for shared_len in 0..5 {
        for prefix_a in 0..5 {
            for prefix_b in 0..5 {
                let mut pool = slist::Pool::new();
                let shared = pool.chain(0..shared_len, None);
                let a = pool.chain(0..prefix_a, shared);
                let b = pool.chain(0..prefix_b, shared);

                unsafe {
                    assert_eq!(intersection(a, b), shared);
                    assert_eq!(intersection_by_marking(a, b), shared);
                    assert_eq!(intersection_by_length(a, b), shared);

                    if let Some(node) = tail(a) {
                        assert_eq!(next(node), None);
                    }
                }
                assert_eq!(pool.values(a).count() as i32, prefix_a + shared_len);
                assert_eq!(pool.values(b).count() as i32, prefix_b + shared_len);
            }
        }
    }
}

#[test]
fn check_random() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::seed_from_u64(315);
    for _ in 0..100 {
        let shared_len = rng.gen_range(0..200);
        let prefix_a = rng.gen_range(0..200);
        let prefix_b = rng.gen_range(0..200);

        let mut pool = slist::Pool::new();
        let shared = pool.chain(0..shared_len, None);
        let a = pool.chain(0..prefix_a, shared);
        let b = pool.chain(0..prefix_b, shared);

        unsafe {
            let expected = intersection_by_marking(a, b);
            assert_eq!(expected, shared);
            assert_eq!(intersection(a, b), expected);
            assert_eq!(intersection_by_length(a, b), expected);
        }
        assert_eq!(pool.values(a).count() as i32, prefix_a + shared_len);
        assert_eq!(pool.values(b).count() as i32, prefix_b + shared_len);
    }
}
