//! Fixture builders for unit tests, integration tests and benches.
//!
//! Compiled into every build so `tests/` and `benches/` can reach it, but kept
//! out of the docs.

#![doc(hidden)]

use std::rc::Rc;

use crate::intervals::Interval;
use crate::list::ListNode;
use crate::suite::{Case, Exercise};

/// Two chains with private prefixes `a` and `b` that both continue into `shared`.
///
/// Returns `(head_a, head_b, shared_head)`. When `shared` is empty the chains are
/// disjoint and `shared_head` is `None`.
pub fn make_shared_chains(
    a: &[i32],
    b: &[i32],
    shared: &[i32],
) -> (Option<Rc<ListNode>>, Option<Rc<ListNode>>, Option<Rc<ListNode>>) {
    let tail = ListNode::chain(shared, None);
    let head_a = ListNode::chain(a, tail.clone());
    let head_b = ListNode::chain(b, tail.clone());
    (head_a, head_b, tail)
}

/// Intervals from `(start, end)` pairs.
pub fn make_intervals(pairs: &[(i64, i64)]) -> Vec<Interval> {
    pairs.iter().copied().map(Interval::from).collect()
}

/// A named suite case.
pub fn make_case(name: &str, exercise: Exercise) -> Case {
    Case {
        name: name.to_string(),
        exercise,
    }
}
