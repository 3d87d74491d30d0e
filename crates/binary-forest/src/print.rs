use std::fmt::Debug;

use crate::linked_binary_tree::LinkedBinaryTree;
use crate::tree::BinaryTree;
use crate::types::Color;

/// Debug dump of a tree, one node per line.
///
/// Red-black nodes show their color; absent children print as `∅`.
pub fn print<E, T>(tree: &T) -> String
where
    E: Debug,
    T: BinaryTree<E> + ?Sized,
{
    let tree = tree.as_tree();
    print_node(tree, tree.root, "")
}

fn print_node<E: Debug>(tree: &LinkedBinaryTree<E>, node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let color = match tree.color_of(i) {
                Some(Color::Black) => " black",
                Some(Color::Red) => " red",
                None => "",
            };
            let child_tab = format!("{tab}  ");
            let left = print_node(tree, tree.left_of(i), &child_tab);
            let right = print_node(tree, tree.right_of(i), &child_tab);
            format!(
                "Node[{i}]{color} {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                tree.element_of(i)
            )
        }
    }
}
