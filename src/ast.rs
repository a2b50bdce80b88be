use std::fmt::{Display, Formatter};

pub type TreeNode = Box<Node>;

/// A node of a built expression tree.
///
/// Operator nodes always own both of their operands and atoms never have children, so a tree
/// that exists is always complete.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub enum Node {
    And(TreeNode, TreeNode),
    Or(TreeNode, TreeNode),
    Atom(String),
}

#[derive(Debug, Hash, Clone, Copy, Eq, PartialEq)]
pub enum Operator {
    And,
    Or,
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

impl Node {
    #[inline]
    pub(crate) fn binary(operator: Operator, left: Node, right: Node) -> Self {
        match operator {
            Operator::And => Self::And(Box::new(left), Box::new(right)),
            Operator::Or => Self::Or(Box::new(left), Box::new(right)),
        }
    }

    /// The operator of the node, `None` for an atom.
    #[inline]
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::And(_, _) => Some(Operator::And),
            Self::Or(_, _) => Some(Operator::Or),
            Self::Atom(_) => None,
        }
    }

    /// The atom text, `None` for an operator.
    #[inline]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Atom(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn left(&self) -> Option<&Node> {
        match self {
            Self::And(left, _) | Self::Or(left, _) => Some(left),
            Self::Atom(_) => None,
        }
    }

    #[inline]
    pub fn right(&self) -> Option<&Node> {
        match self {
            Self::And(_, right) | Self::Or(_, right) => Some(right),
            Self::Atom(_) => None,
        }
    }

    /// The atoms of the tree from left to right.
    pub fn atoms(&self) -> Vec<&str> {
        let mut atoms = Vec::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms<'a>(&'a self, atoms: &mut Vec<&'a str>) {
        match self {
            Self::And(left, right) | Self::Or(left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
            Self::Atom(text) => atoms.push(text),
        }
    }

    /// The number of levels of the tree; a single atom has a depth of 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::And(left, right) | Self::Or(left, right) => {
                1 + std::cmp::max(left.depth(), right.depth())
            }
            Self::Atom(_) => 1,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And(left, right) => write!(f, "({left} AND {right})"),
            Self::Or(left, right) => write!(f, "({left} OR {right})"),
            Self::Atom(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ast::{and, atom, or};

    #[test]
    fn can_get_the_operator_of_a_node() {
        assert_eq!(Some(Operator::And), and!(atom!("a"), atom!("b")).operator());
        assert_eq!(Some(Operator::Or), or!(atom!("a"), atom!("b")).operator());
        assert_eq!(None, atom!("a").operator());
    }

    #[test]
    fn can_get_the_content_of_an_atom() {
        assert_eq!(Some("urgent"), atom!("urgent").content());
        assert_eq!(None, and!(atom!("a"), atom!("b")).content());
    }

    #[test]
    fn atoms_have_no_children() {
        let node = atom!("a");

        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn can_get_the_children_of_an_operator() {
        let node = or!(atom!("a"), and!(atom!("b"), atom!("c")));

        assert_eq!(Some(&atom!("a")), node.left());
        assert_eq!(Some(&and!(atom!("b"), atom!("c"))), node.right());
    }

    #[test]
    fn can_list_the_atoms_from_left_to_right() {
        let node = and!(or!(atom!("a"), atom!("b")), and!(atom!("c"), atom!("!d")));

        assert_eq!(vec!["a", "b", "c", "!d"], node.atoms());
    }

    #[test]
    fn can_compute_the_depth() {
        assert_eq!(1, atom!("a").depth());
        assert_eq!(
            3,
            and!(atom!("a"), or!(atom!("b"), atom!("c"))).depth()
        );
    }

    #[test]
    fn can_display_a_fully_parenthesized_expression() {
        let node = and!(or!(atom!("a"), atom!("b")), atom!("!c"));

        assert_eq!("((a OR b) AND !c)", node.to_string());
    }

    #[test]
    fn can_build_a_binary_node_from_an_operator() {
        assert_eq!(
            and!(atom!("a"), atom!("b")),
            Node::binary(Operator::And, atom!("a"), atom!("b"))
        );
        assert_eq!(
            or!(atom!("a"), atom!("b")),
            Node::binary(Operator::Or, atom!("a"), atom!("b"))
        );
    }
}
