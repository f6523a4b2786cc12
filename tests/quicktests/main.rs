use quickcheck::{Arbitrary, Gen};

use wooden::TraverseOrder;

mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the tree
    Insert(T),
    /// Delete the T from the tree
    Delete(T),
    /// Walk the tree in the order at this index of `TraverseOrder::ALL`
    Iter(usize),
}

/// Picks a traversal order from an arbitrary index.
pub(crate) fn order_at(index: usize) -> TraverseOrder {
    TraverseOrder::ALL[index % TraverseOrder::ALL.len()]
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Iter(usize::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Routes the tree's `tracing` events to the test output. Set `RUST_LOG=trace`
/// to see them.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
