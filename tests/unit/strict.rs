//! Validated wrappers: out-of-contract input is rejected with a precise error.

use super::common::make_intervals;
use drillbook::{BoundedSequence, Interval, IntervalSet, InvariantError, Piles};

#[test]
fn test_bounded_sequence_rejects_first_bad_value() {
    let err = BoundedSequence::new(vec![1, 0, 9]).unwrap_err();
    assert_eq!(
        err,
        InvariantError::ValueOutOfRange {
            position: 1,
            value: 0,
            n: 3
        }
    );
    assert_eq!(err.to_string(), "value 0 at position 1 is outside 1..=3");
}

#[test]
fn test_bounded_sequence_variants_agree_and_restore() {
    let mut seq = BoundedSequence::new(vec![4, 3, 2, 7, 8, 2, 3, 1]).unwrap();
    assert_eq!(seq.missing(), vec![5, 6]);
    assert_eq!(seq.missing_in_place(), vec![5, 6]);
    assert_eq!(seq.as_slice(), &[4, 3, 2, 7, 8, 2, 3, 1]);
    assert_eq!(seq.len(), 8);
}

#[test]
fn test_bounded_sequence_empty_is_valid() {
    let seq = BoundedSequence::new(Vec::new()).unwrap();
    assert!(seq.is_empty());
    assert!(seq.missing().is_empty());
}

#[test]
fn test_piles_rejections() {
    assert_eq!(Piles::new(vec![], 3), Err(InvariantError::NoPiles));
    assert_eq!(
        Piles::new(vec![3, 0, 1], 5),
        Err(InvariantError::EmptyPile { position: 1 })
    );
    assert_eq!(
        Piles::new(vec![3, 6, 7, 11], 3),
        Err(InvariantError::BudgetTooSmall { hours: 3, piles: 4 })
    );
}

#[test]
fn test_piles_min_rate() {
    let piles = Piles::new(vec![30, 11, 23, 4, 20], 6).unwrap();
    assert_eq!(piles.min_rate(), 23);
    assert_eq!(piles.hours(), 6);
    assert_eq!(piles.piles().len(), 5);
}

#[test]
fn test_piles_budget_equal_to_count() {
    // One hour per pile forces the largest pile's rate.
    let piles = Piles::new(vec![3, 6, 7, 11], 4).unwrap();
    assert_eq!(piles.min_rate(), 11);
}

#[test]
fn test_interval_set_rejects_reversed() {
    let err = IntervalSet::new(make_intervals(&[(1, 2), (5, 3)])).unwrap_err();
    assert_eq!(
        err,
        InvariantError::ReversedInterval {
            position: 1,
            start: 5,
            end: 3
        }
    );
    assert_eq!(err.to_string(), "interval [5, 3] at position 1 ends before it starts");
}

#[test]
fn test_interval_set_sorts_and_answers() {
    let set = IntervalSet::new(make_intervals(&[(3, 4), (1, 3), (2, 3), (1, 2)])).unwrap();
    assert_eq!(set.as_slice()[0], Interval::new(1, 2));
    assert_eq!(set.removals(), 1);
    assert_eq!(set.kept(), make_intervals(&[(1, 2), (2, 3), (3, 4)]));
    // Queries don't disturb the set.
    assert_eq!(set.len(), 4);
}

#[test]
fn test_invariant_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(InvariantError::NoPiles);
    assert_eq!(err.to_string(), "no piles given");
}
