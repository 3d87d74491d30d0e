use std::cmp::Ordering;

use binary_forest::{BinarySearchTree, BinaryTree, TreeError};

fn bst_of<E: PartialOrd>(values: impl IntoIterator<Item = E>) -> BinarySearchTree<E> {
    let mut tree = BinarySearchTree::new();
    for v in values {
        tree.add(v).unwrap();
    }
    tree
}

fn bfs<E: Clone, T: BinaryTree<E>>(tree: &T) -> Vec<E> {
    tree.iter().cloned().collect()
}

#[test]
fn bst_add_shapes_matrix() {
    let tree = bst_of([6, 5, 9, 3, 8, 10]);
    assert_eq!(bfs(&tree), vec![6, 5, 9, 3, 8, 10]);
    assert_eq!(tree.size(), 6);

    let tree = bst_of([6, 5, 9, 9, 3, 4, 8, 10]);
    assert_eq!(bfs(&tree), vec![6, 5, 9, 3, 8, 10, 4]);
    assert_eq!(tree.size(), 7);
}

#[test]
fn bst_add_duplicate_returns_existing_node_matrix() {
    let mut tree = bst_of([6, 5, 9]);
    let nine = tree.tree_search(tree.root(), &9).unwrap().unwrap();
    assert_eq!(tree.add(9).unwrap(), nine);
    assert_eq!(tree.size(), 3);
}

#[test]
fn bst_in_order_is_sorted_matrix() {
    let tree = bst_of([50, 20, 70, 10, 30, 60, 80, 25, 65]);
    let sorted: Vec<i32> = tree
        .in_order()
        .into_iter()
        .map(|n| *tree.element(n).unwrap())
        .collect();
    assert_eq!(sorted, vec![10, 20, 25, 30, 50, 60, 65, 70, 80]);
}

#[test]
fn bst_search_names_matrix() {
    let names = [
        "Max", "Daniel", "Andrew", "Gregory", "Egor", "Peter", "Nick", "Tom", "Quentin", "Yuri",
    ];
    let tree = bst_of(names);
    assert_eq!(
        bfs(&tree),
        vec![
            "Max", "Daniel", "Peter", "Andrew", "Gregory", "Nick", "Tom", "Egor", "Quentin", "Yuri",
        ]
    );
    for name in names {
        assert_eq!(tree.search(&name), Ok(Some(&name)));
        assert_eq!(tree.contains(&name), Ok(true));
    }
    assert_eq!(tree.search(&"Jack"), Ok(None));
    assert_eq!(tree.contains(&"Jack"), Ok(false));

    let peter = tree.tree_search(tree.root(), &"Peter").unwrap().unwrap();
    assert!(tree.tree_search(Some(peter), &"Quentin").unwrap().is_some());
    // Daniel lives in the other subtree
    assert_eq!(tree.tree_search(Some(peter), &"Daniel"), Ok(None));
    // an absent start is an empty subtree
    assert_eq!(tree.tree_search(None, &"Max"), Ok(None));
}

#[test]
fn bst_remove_matrix() {
    let mut tree = bst_of([6, 4, 5, 2, 9, 3, 8, 7, 11, 10]);

    assert_eq!(tree.remove(&4), Ok(Some(4)));
    assert_eq!(bfs(&tree), vec![6, 5, 9, 2, 8, 11, 3, 7, 10]);

    assert_eq!(tree.remove(&9), Ok(Some(9)));
    assert_eq!(bfs(&tree), vec![6, 5, 10, 2, 8, 11, 3, 7]);
    assert_eq!(tree.size(), 8);

    assert_eq!(tree.remove(&42), Ok(None));
    assert_eq!(tree.size(), 8);
}

#[test]
fn bst_remove_root_with_two_children_keeps_handles_matrix() {
    let mut tree = bst_of([6, 4, 9, 8, 11]);
    let eight = tree.tree_search(tree.root(), &8).unwrap().unwrap();
    let six = tree.root().unwrap();

    assert_eq!(tree.remove_node(six), Ok(6));
    assert_eq!(tree.root(), Some(eight));
    assert_eq!(tree.parent(eight), Ok(None));
    assert_eq!(bfs(&tree), vec![8, 4, 9, 11]);
    assert_eq!(
        tree.element(six),
        Err(TreeError::InvalidArgument("node was removed"))
    );
}

#[test]
fn bst_remove_until_empty_matrix() {
    let values = [5, 3, 8, 1, 4, 7, 9, 2, 6];
    let mut tree = bst_of(values);
    for (i, v) in values.iter().enumerate() {
        assert_eq!(tree.remove(v), Ok(Some(*v)));
        assert_eq!(tree.size(), values.len() - i - 1);
        let rest: Vec<i32> = tree
            .in_order()
            .into_iter()
            .map(|n| *tree.element(n).unwrap())
            .collect();
        let mut expected: Vec<i32> = values[i + 1..].to_vec();
        expected.sort();
        assert_eq!(rest, expected);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
}

#[test]
fn bst_incomparable_elements_matrix() {
    let mut tree = bst_of([1.0, 2.0]);
    assert_eq!(
        tree.add(f64::NAN),
        Err(TreeError::InvalidState("cannot compare"))
    );
    assert_eq!(tree.size(), 2);
    assert_eq!(
        tree.search(&f64::NAN),
        Err(TreeError::InvalidState("cannot compare"))
    );
    assert_eq!(
        tree.compare(&f64::NAN, &1.0),
        Err(TreeError::InvalidState("cannot compare"))
    );
}

#[test]
fn bst_custom_comparator_matrix() {
    let mut tree = BinarySearchTree::with_comparator(|a: &i32, b: &i32| Some(b.cmp(a)));
    for v in [5, 1, 9, 3] {
        tree.add(v).unwrap();
    }
    assert_eq!(tree.compare(&1, &2), Ok(Ordering::Greater));
    let desc: Vec<i32> = tree
        .in_order()
        .into_iter()
        .map(|n| *tree.element(n).unwrap())
        .collect();
    assert_eq!(desc, vec![9, 5, 3, 1]);
}

#[test]
fn bst_clear_matrix() {
    let mut tree = bst_of([3, 1, 2]);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.search(&1), Ok(None));
    tree.add(4).unwrap();
    assert_eq!(bfs(&tree), vec![4]);
}
