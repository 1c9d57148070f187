//! Property tests that run random sequences of set operations against
//! [`BstSet`][bst_set::BstSet] and the standard library's `BTreeSet`.

mod set;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a set in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T to the set (or check it's refused if already there)
    Add(T),
    /// Remove the T from the set (or check it's refused if missing)
    Remove(T),
    /// Remove whichever element the set chooses
    RemoveAny,
    /// Empty the set
    Clear,
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Adds are
    /// weighted up so the sets actually grow, clears down so they stay grown.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3, 4, 4]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::RemoveAny,
            3 => Op::Clear,
            4 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
