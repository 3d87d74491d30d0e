use binary_forest::{BalanceAbleTree, BinarySearchTree, BinaryTree, NodeRef, TreeError};

type Tree = BinarySearchTree<&'static str>;

fn bfs(tree: &Tree) -> Vec<&'static str> {
    tree.iter().copied().collect()
}

fn leaves(tree: &mut Tree, parent: NodeRef, left: &'static str, right: &'static str) {
    tree.add_left(parent, left).unwrap();
    tree.add_right(parent, right).unwrap();
}

#[test]
fn reduce_zig_zag_at_root_from_left_matrix() {
    // 5 (3 (B, 4 (C, D)), A)
    let mut tree = Tree::new();
    let n5 = tree.add_root("5").unwrap();
    let n3 = tree.add_left(n5, "3").unwrap();
    tree.add_right(n5, "A").unwrap();
    tree.add_left(n3, "B").unwrap();
    let n4 = tree.add_right(n3, "4").unwrap();
    leaves(&mut tree, n4, "C", "D");

    assert_eq!(tree.reduce_subtree_height(n4), Ok(n4));
    assert_eq!(bfs(&tree), vec!["4", "3", "5", "B", "C", "D", "A"]);
    assert_eq!(tree.root(), Some(n4));
    assert_eq!(tree.parent(n4), Ok(None));
    assert_eq!(tree.size(), 7);
}

#[test]
fn reduce_zig_zag_below_root_matrix() {
    // 1 (-, 3 (A, 5 (4 (D, C), B)))
    let mut tree = Tree::new();
    let n1 = tree.add_root("1").unwrap();
    let n3 = tree.add_right(n1, "3").unwrap();
    tree.add_left(n3, "A").unwrap();
    let n5 = tree.add_right(n3, "5").unwrap();
    let n4 = tree.add_left(n5, "4").unwrap();
    tree.add_right(n5, "B").unwrap();
    leaves(&mut tree, n4, "D", "C");

    assert_eq!(tree.reduce_subtree_height(n4), Ok(n4));
    assert_eq!(bfs(&tree), vec!["1", "4", "3", "5", "A", "D", "C", "B"]);
    assert_eq!(tree.parent(n4), Ok(Some(n1)));
    assert_eq!(tree.right(n1), Ok(Some(n4)));
}

#[test]
fn reduce_zig_zag_at_root_from_right_matrix() {
    // 3 (A, 5 (4 (D, C), B))
    let mut tree = Tree::new();
    let n3 = tree.add_root("3").unwrap();
    tree.add_left(n3, "A").unwrap();
    let n5 = tree.add_right(n3, "5").unwrap();
    let n4 = tree.add_left(n5, "4").unwrap();
    tree.add_right(n5, "B").unwrap();
    leaves(&mut tree, n4, "D", "C");

    assert_eq!(
        tree.reduce_subtree_height(n5),
        Err(TreeError::InvalidArgument("node's parent can't be null"))
    );
    assert_eq!(
        tree.reduce_subtree_height(n3),
        Err(TreeError::InvalidArgument("node's parent can't be null"))
    );
    assert_eq!(bfs(&tree), vec!["3", "A", "5", "4", "B", "D", "C"]);

    assert_eq!(tree.reduce_subtree_height(n4), Ok(n4));
    assert_eq!(bfs(&tree), vec!["4", "3", "5", "A", "D", "C", "B"]);
}

#[test]
fn reduce_zig_zig_matrix() {
    // 7 (5 (3 (A, B), C), D)
    let mut tree = Tree::new();
    let n7 = tree.add_root("7").unwrap();
    let n5 = tree.add_left(n7, "5").unwrap();
    tree.add_right(n7, "D").unwrap();
    let n3 = tree.add_left(n5, "3").unwrap();
    tree.add_right(n5, "C").unwrap();
    leaves(&mut tree, n3, "A", "B");

    assert_eq!(tree.reduce_subtree_height(n3), Ok(n5));
    assert_eq!(bfs(&tree), vec!["5", "3", "7", "A", "B", "C", "D"]);
}

#[test]
fn rotate_left_child_up_matrix() {
    // 5 (3 (2 (D, C), B), A)
    let mut tree = Tree::new();
    let n5 = tree.add_root("5").unwrap();
    let n3 = tree.add_left(n5, "3").unwrap();
    tree.add_right(n5, "A").unwrap();
    let n2 = tree.add_left(n3, "2").unwrap();
    tree.add_right(n3, "B").unwrap();
    leaves(&mut tree, n2, "D", "C");

    tree.rotate(n3).unwrap();
    assert_eq!(bfs(&tree), vec!["3", "2", "5", "D", "C", "B", "A"]);
    assert_eq!(tree.root(), Some(n3));
}

#[test]
fn rotate_right_child_up_matrix() {
    // 3 (A, 5 (B, 7 (C, D)))
    let mut tree = Tree::new();
    let n3 = tree.add_root("3").unwrap();
    tree.add_left(n3, "A").unwrap();
    let n5 = tree.add_right(n3, "5").unwrap();
    tree.add_left(n5, "B").unwrap();
    let n7 = tree.add_right(n5, "7").unwrap();
    leaves(&mut tree, n7, "C", "D");

    tree.rotate(n5).unwrap();
    assert_eq!(bfs(&tree), vec!["5", "3", "7", "A", "B", "C", "D"]);

    assert_eq!(
        tree.rotate(n5),
        Err(TreeError::InvalidArgument("node's parent can't be null"))
    );
}

#[test]
fn rotations_keep_in_order_matrix() {
    let mut tree = BinarySearchTree::new();
    for v in [40, 20, 60, 10, 30, 50, 70, 25, 35] {
        tree.add(v).unwrap();
    }
    let in_order = |t: &BinarySearchTree<i32>| -> Vec<i32> {
        t.in_order().into_iter().map(|n| *t.element(n).unwrap()).collect()
    };
    let before = in_order(&tree);

    let n30 = tree.tree_search(tree.root(), &30).unwrap().unwrap();
    let n25 = tree.tree_search(tree.root(), &25).unwrap().unwrap();
    tree.rotate(n30).unwrap();
    assert_eq!(in_order(&tree), before);
    tree.reduce_subtree_height(n25).unwrap();
    assert_eq!(in_order(&tree), before);
    assert_eq!(tree.size(), before.len());
}
