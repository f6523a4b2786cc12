use wooden::{render::Dot, BinaryTree, TraverseOrder};

use std::collections::{BTreeSet, HashSet};

use crate::{init_tracing, order_at, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinaryTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                bst.delete(x);
                set.remove(x);
            }
            Op::Iter(i) => {
                assert_eq!(bst.traverse(order_at(*i)).len(), set.len());
            }
        }
    }
}

fn values(tree: &BinaryTree<i8>, order: TraverseOrder) -> Vec<i8> {
    tree.traverse(order).map(|n| *n.value()).collect()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        init_tracing();
        let mut tree = BinaryTree::with_order(TraverseOrder::LevelOrder);
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        set.iter().all(|x| tree.contains(x))
            && values(&tree, TraverseOrder::InOrder) == set.into_iter().collect::<Vec<_>>()
    }

    fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
        let tree = BinaryTree::new(xs, TraverseOrder::InOrder);
        let sorted = values(&tree, TraverseOrder::InOrder);

        sorted.windows(2).all(|w| w[0] < w[1])
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree = BinaryTree::new(xs.iter().copied(), TraverseOrder::PreOrder);

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = BinaryTree::new(xs.iter().copied(), TraverseOrder::PostOrder);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = BinaryTree::new(xs.iter().copied(), TraverseOrder::InOrder);
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }
        let distinct: HashSet<_> = still_present.iter().collect();

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == distinct.len()
    }

    fn duplicate_insert_is_idempotent(xs: Vec<i8>) -> bool {
        let mut tree = BinaryTree::new(xs.iter().copied(), TraverseOrder::InOrder);
        let before = values(&tree, TraverseOrder::PreOrder);
        tree.extend(xs);

        values(&tree, TraverseOrder::PreOrder) == before
    }

    fn root_is_first_and_last(xs: Vec<i8>) -> bool {
        let tree = BinaryTree::new(xs.iter().copied(), TraverseOrder::PreOrder);
        let root = xs.first();

        tree.traverse(TraverseOrder::PreOrder).next().map(|n| n.value()) == root
            && tree.traverse(TraverseOrder::PostOrder).last().map(|n| n.value()) == root
    }

    fn every_order_yields_every_node(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = BinaryTree::new(xs, TraverseOrder::PreOrder);
        for delete in &deletes {
            tree.delete(delete);
        }
        let expected = values(&tree, TraverseOrder::InOrder);

        TraverseOrder::ALL.iter().all(|&order| {
            let mut seen = values(&tree, order);
            seen.sort_unstable();
            seen == expected
        })
    }

    fn edges_link_every_non_root(xs: Vec<i8>) -> bool {
        let tree = BinaryTree::new(xs, TraverseOrder::LevelOrder);
        let mut edges = Vec::new();
        let count = tree.emit_edges(&mut edges).unwrap();

        count == tree.len().saturating_sub(1)
            && edges.iter().all(|(p, c): &(i8, i8)| p != c)
    }
}

#[test]
fn sample_tree() {
    init_tracing();
    let sample = [
        22, 19, 9, 11, 17, 20, 21, 10, 4, 12, 7, 14, 24, 23, 16, 6, 13, 3, 5, 8, 2, 0, 1, 15, 18,
    ];
    let mut tree = BinaryTree::new(sample.iter().copied(), TraverseOrder::PreOrder);

    assert_eq!(
        tree.traverse(TraverseOrder::InOrder)
            .map(|n| *n.value())
            .collect::<Vec<_>>(),
        (0..25).collect::<Vec<_>>()
    );
    assert_eq!(tree.iter().next().map(|n| *n.value()), Some(22));

    tree.delete(&22);
    assert!(!tree.contains(&22));
    assert!(tree.contains(&19));
}

#[test]
fn renders_sample_tree() {
    let tree = BinaryTree::new(vec![5, 3, 8, 4], TraverseOrder::PreOrder);
    let out = Dot::render(&tree, Vec::new()).unwrap();
    let dot = String::from_utf8(out).unwrap();

    assert!(dot.starts_with("digraph {\n"));
    assert!(dot.contains("\"5\" -> \"3\";"));
    assert!(dot.contains("\"3\" -> \"4\";"));
    assert!(dot.contains("\"5\" -> \"8\";"));
    assert!(dot.ends_with("}\n"));
}
