// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Singly-linked chains that may share a tail, and the search for where they meet.
//!
//! Two chains "intersect" when they physically share a node, not when they happen
//! to hold equal values. Shared tails are expressed with `Rc`: both chains hold a
//! pointer to the same allocation, and [`Rc::ptr_eq`] is the identity test.
//!
//! ```text
//! a:       4 ─▶ 1 ─┐
//!                  ├─▶ 8 ─▶ 4 ─▶ 5
//! b:  5 ─▶ 6 ─▶ 1 ─┘
//! ```
//!
//! `ListNode` has no `PartialEq`: two nodes with equal values are still two nodes.

use std::rc::Rc;

use crate::verify::contracts::check_intersection;

/// One node of a singly-linked chain.
#[derive(Debug)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Rc<ListNode>>,
}

impl ListNode {
    /// A lone node with no successor.
    pub fn new(val: i32) -> Self {
        ListNode { val, next: None }
    }

    /// Build a chain holding `values` in order, ending in `tail`.
    ///
    /// Passing another chain's node as `tail` makes the two chains share it.
    ///
    /// # Example
    ///
    /// ```
    /// use drillbook::{get_intersection_node, ListNode};
    ///
    /// let shared = ListNode::chain(&[8, 4, 5], None);
    /// let a = ListNode::chain(&[4, 1], shared.clone());
    /// let b = ListNode::chain(&[5, 6, 1], shared.clone());
    ///
    /// let meet = get_intersection_node(a.as_ref(), b.as_ref()).unwrap();
    /// assert_eq!(meet.val, 8);
    /// ```
    pub fn chain(values: &[i32], tail: Option<Rc<ListNode>>) -> Option<Rc<ListNode>> {
        values
            .iter()
            .rev()
            .fold(tail, |next, &val| Some(Rc::new(ListNode { val, next })))
    }
}

impl Drop for ListNode {
    // Iterative teardown; the derived recursive drop overflows the stack on long chains.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => next = owned.next.take(),
                // Someone else still holds the rest of the chain.
                Err(_) => break,
            }
        }
    }
}

/// Borrowing iterator over the nodes of a chain.
pub struct Iter<'a> {
    next: Option<&'a Rc<ListNode>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Rc<ListNode>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_ref();
        Some(node)
    }
}

/// Walk the chain starting at `head`.
pub fn iter(head: Option<&Rc<ListNode>>) -> Iter<'_> {
    Iter { next: head }
}

/// Number of nodes reachable from `head`.
pub fn list_len(head: Option<&Rc<ListNode>>) -> usize {
    iter(head).count()
}

/// Values along the chain, head first.
pub fn values(head: Option<&Rc<ListNode>>) -> Vec<i32> {
    iter(head).map(|node| node.val).collect()
}

/// Find the first node shared by both chains.
///
/// Measures both chains, skips the longer one ahead by the difference so both
/// cursors sit the same distance from the end, then steps them together until
/// they land on the same node. O(n + m) time, O(1) extra space.
///
/// Returns `None` when either head is `None` or the chains share nothing.
pub fn get_intersection_node(
    a: Option<&Rc<ListNode>>,
    b: Option<&Rc<ListNode>>,
) -> Option<Rc<ListNode>> {
    let len_a = list_len(a);
    let len_b = list_len(b);

    let meet = iter(a)
        .skip(len_a.saturating_sub(len_b))
        .zip(iter(b).skip(len_b.saturating_sub(len_a)))
        .find(|(x, y)| Rc::ptr_eq(x, y))
        .map(|(node, _)| Rc::clone(node));

    check_intersection(a, b, meet.as_ref());
    meet
}
