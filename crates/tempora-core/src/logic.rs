//! Temporal predicates over sequences of timestamps

use crate::time::Timestamp;

/// True if `predicate` holds at every timestamp (vacuously true when empty)
pub fn always<I, P>(times: I, predicate: P) -> bool
where
    I: IntoIterator<Item = Timestamp>,
    P: FnMut(Timestamp) -> bool,
{
    times.into_iter().all(predicate)
}

/// True if `predicate` holds at one or more timestamps
pub fn eventually<I, P>(times: I, predicate: P) -> bool
where
    I: IntoIterator<Item = Timestamp>,
    P: FnMut(Timestamp) -> bool,
{
    times.into_iter().any(predicate)
}
