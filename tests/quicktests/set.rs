use bst_set::{BstSet, Error};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a `BstSet` and a `BTreeSet`.
/// This way we can ensure that after a random smattering of adds
/// and removes both hold the same elements. Returns `false` as soon
/// as they disagree about anything.
fn do_ops<T>(ops: &[Op<T>], set: &mut BstSet<T>, oracle: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Add(x) => {
                if oracle.insert(x.clone()) {
                    set.add(x.clone());
                    true
                } else {
                    set.try_add(x.clone()) == Err(Error::AlreadyPresent)
                }
            }
            Op::Remove(x) => match oracle.take(x) {
                Some(expected) => set.remove(x) == expected,
                None => set.try_remove(x) == Err(Error::NotPresent),
            },
            Op::RemoveAny => match oracle.pop_first() {
                Some(smallest) => set.remove_any() == smallest,
                None => set.try_remove_any() == Err(Error::Empty),
            },
            Op::Clear => {
                set.clear();
                oracle.clear();
                true
            }
            Op::Iter => set.iter().eq(oracle.iter()),
        };

        if !agrees || set.size() != oracle.len() {
            return false;
        }
    }

    true
}

fn build(xs: &[i8]) -> BstSet<i8> {
    let mut set = BstSet::new();
    for x in xs {
        // Random input repeats itself; only the first copy goes in.
        let _ = set.try_add(*x);
    }

    set
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BstSet::new();
    let mut oracle = BTreeSet::new();

    do_ops(&ops, &mut set, &mut oracle) && oracle.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
    let mut set = BstSet::new();
    let mut oracle = BTreeSet::new();

    do_ops(&ops, &mut set, &mut oracle) && set.iter().eq(oracle.iter())
}

#[quickcheck]
fn iteration_is_strictly_increasing(xs: Vec<i8>) -> bool {
    let set = build(&xs);
    let labels: Vec<_> = set.iter().collect();
    let distinct: HashSet<_> = xs.iter().collect();

    labels.windows(2).all(|pair| pair[0] < pair[1])
        && labels.len() == set.size()
        && set.size() == distinct.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let set = build(&xs);

    xs.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let set = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !set.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut set = build(&xs);
    for delete in &deletes {
        let _ = set.try_remove(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !set.contains(x)) && still_present.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn remove_any_drains_in_sorted_order(xs: Vec<i8>) -> bool {
    let mut set = build(&xs);
    let mut drained = Vec::with_capacity(set.size());
    while !set.is_empty() {
        drained.push(set.remove_any());
    }

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    drained == expected
}

#[quickcheck]
fn transfer_moves_everything(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut receiver = build(&xs);
    let mut source = build(&ys);
    let expected = build(&ys);
    receiver.transfer_from(&mut source);

    source.is_empty() && receiver == expected
}

#[quickcheck]
fn equality_ignores_insertion_order(xs: Vec<i8>) -> bool {
    let forwards = build(&xs);
    let reversed: Vec<_> = xs.iter().rev().copied().collect();
    let backwards = build(&reversed);

    forwards == backwards
}
