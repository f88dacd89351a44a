//! Singly linked nodes owned by an external pool.
//!
//! Lists are plain `next` chains of [`ListNode`]s; a [`Pool`] owns every
//! node it allocates and frees each exactly once, so several heads may
//! share a common suffix without any question of double ownership.
//! Algorithms traverse and rewrite `next` through non-owning pointers.

use std::ptr::NonNull;

pub type Head<T> = Option<NonNull<ListNode<T>>>;

pub struct ListNode<T> {
    val: T,
    next: Head<T>,
}

impl<T> ListNode<T> {
    pub fn val(&self) -> &T { &self.val }
    pub fn next(&self) -> Head<T> { self.next }
    pub fn set_next(&mut self, next: Head<T>) { self.next = next; }
}

pub struct Pool<T> {
    nodes: Vec<NonNull<ListNode<T>>>,
}

impl<T> Pool<T> {
    pub fn new() -> Self { Self { nodes: vec![] } }

    /// Allocates a chain holding `vals` in order, whose last node points at
    /// `tail`. Returns the new head, or `tail` itself if `vals` is empty.
    pub fn chain<I>(&mut self, vals: I, tail: Head<T>) -> Head<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut head = tail;
        for val in vals.into_iter().rev() {
            let node =
                NonNull::from(Box::leak(Box::new(ListNode { val, next: head })));
            self.nodes.push(node);
            head = Some(node);
        }
        head
    }

    pub fn values(&self, head: Head<T>) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(head, |node| unsafe { (*node.as_ptr()).next })
            .map(|node| unsafe { &(*node.as_ptr()).val })
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Drop for Pool<T> {
    fn drop(&mut self) {
        for node in self.nodes.drain(..) {
            unsafe { drop(Box::from_raw(node.as_ptr())) };
        }
    }
}

#[test]
fn sanity_check() {
    let mut pool = Pool::new();
    assert!(pool.values(None).next().is_none());

    let head = pool.chain([1, 2, 3], None);
    assert!(pool.values(head).copied().eq([1, 2, 3]));

    let longer = pool.chain([0], head);
    assert!(pool.values(longer).copied().eq([0, 1, 2, 3]));
    assert!(pool.values(head).copied().eq([1, 2, 3]));
}

#[test]
fn check_shared_suffix() {
    let mut pool = Pool::new();
    let shared = pool.chain([8, 4, 5], None);
    let a = pool.chain([4, 1], shared);
    let b = pool.chain([5, 6, 1], shared);

    assert!(pool.values(a).copied().eq([4, 1, 8, 4, 5]));
    assert!(pool.values(b).copied().eq([5, 6, 1, 8, 4, 5]));

    let third_of_a = std::iter::successors(a, |node| unsafe {
        node.as_ref().next()
    })
    .nth(2);
    assert_eq!(third_of_a, shared);
}

#[test]
fn check_empty_chain() {
    let mut pool = Pool::new();
    let head = pool.chain([7], None);
    assert_eq!(pool.chain(std::iter::empty(), head), head);
    assert_eq!(pool.chain(std::iter::empty(), None), None);
}
