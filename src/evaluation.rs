use crate::{ast::Node, sets};

impl Node {
    /// Evaluate the tree against `filter`, which returns the items matching a single atom.
    ///
    /// `AND` keeps the items returned by both operands and `OR` the items returned by either of
    /// them. Items are compared by identity and appear at most once in the result. Atoms are
    /// handed to the filter verbatim, including a leading `!`.
    pub fn evaluate<'a, T, F>(&self, filter: &F) -> Vec<&'a T>
    where
        F: Fn(&str) -> Vec<&'a T>,
    {
        match self {
            Self::And(left, right) => {
                sets::intersection(left.evaluate(filter), right.evaluate(filter))
            }
            Self::Or(left, right) => sets::union(left.evaluate(filter), right.evaluate(filter)),
            Self::Atom(text) => sets::dedup(filter(text)),
        }
    }
}

/// The items selected by a query.
///
/// The order of the items is not significant. Items are compared by identity, so a selection has
/// no value equality; compare its items with [`Selection::contains`].
#[derive(Debug, Clone)]
pub struct Selection<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> Selection<'a, T> {
    pub(crate) const fn new(items: Vec<&'a T>) -> Self {
        Self { items }
    }

    /// Get the selected items
    #[inline]
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this exact item (not an equal one) was selected.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|selected| std::ptr::eq(*selected, item))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<&'a T> {
        self.items
    }
}

impl<'a, T> IntoIterator for Selection<'a, T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parser::parse,
        tags::TagMatcher,
        test_utils::{
            ast::{and, atom, or},
            items::{texts, xyz, Todo},
        },
    };
    use std::cell::RefCell;

    fn evaluate<'a>(query: &str, todos: &'a [Todo]) -> Vec<&'a str> {
        let matcher = TagMatcher::default();
        let filter = matcher.filter(todos);
        texts(parse(query).unwrap().evaluate(&filter))
    }

    #[test]
    fn can_evaluate_an_or_without_duplicates() {
        let todos = xyz();

        assert_eq!(vec!["X", "Z"], evaluate("a OR c", &todos));
        assert_eq!(vec!["X", "Y", "Z"], evaluate("b OR c", &todos));
    }

    #[test]
    fn can_evaluate_an_and() {
        let todos = xyz();

        assert_eq!(vec!["Y"], evaluate("b AND c", &todos));
        assert!(evaluate("a AND c", &todos).is_empty());
    }

    #[test]
    fn can_evaluate_a_negated_atom() {
        let todos = xyz();

        assert_eq!(vec!["X"], evaluate("!c", &todos));
    }

    #[test]
    fn can_evaluate_nested_groups() {
        let todos = xyz();

        assert_eq!(vec!["X", "Y"], evaluate("(a OR c) AND b", &todos));
        assert_eq!(vec!["X", "Z"], evaluate("a OR (c AND !b)", &todos));
    }

    #[test]
    fn can_evaluate_a_single_atom() {
        let todos = xyz();

        assert_eq!(vec!["X", "Y"], evaluate("b", &todos));
    }

    #[test]
    fn evaluating_twice_gives_the_same_items() {
        let todos = xyz();
        let matcher = TagMatcher::default();
        let filter = matcher.filter(&todos);
        let node = parse("(a OR c) AND !b").unwrap();

        assert_eq!(texts(node.evaluate(&filter)), texts(node.evaluate(&filter)));
    }

    #[test]
    fn chained_and_gives_the_same_items_whatever_the_grouping() {
        let todos = vec![
            Todo::new("1", &["a", "b", "c"]),
            Todo::new("2", &["a", "b"]),
            Todo::new("3", &["b", "c"]),
            Todo::new("4", &["a", "c"]),
        ];

        let expected = vec!["1"];
        assert_eq!(expected, evaluate("a AND b AND c", &todos));
        assert_eq!(expected, evaluate("a AND (b AND c)", &todos));
        assert_eq!(expected, evaluate("(c AND a) AND b", &todos));
    }

    #[test]
    fn passes_every_atom_verbatim_to_the_filter() {
        let seen = RefCell::new(Vec::new());
        let filter = |atom: &str| -> Vec<&'static u32> {
            seen.borrow_mut().push(atom.to_string());
            vec![]
        };

        and!(atom!("#urgent"), or!(atom!("!done"), atom!("a-b"))).evaluate(&filter);

        assert_eq!(vec!["#urgent", "!done", "a-b"], *seen.borrow());
    }

    #[test]
    fn leaf_results_are_deduplicated() {
        static ITEM: u32 = 7;
        let filter = |_: &str| vec![&ITEM, &ITEM];

        assert_eq!(vec![&7], atom!("a").evaluate(&filter));
    }

    #[test]
    fn can_evaluate_the_same_tree_against_different_filters() {
        let first = xyz();
        let second = vec![Todo::new("W", &["a"])];
        let matcher = TagMatcher::default();
        let node = parse("a").unwrap();

        assert_eq!(vec!["X"], texts(node.evaluate(&matcher.filter(&first))));
        assert_eq!(vec!["W"], texts(node.evaluate(&matcher.filter(&second))));
    }

    #[test]
    fn selection_contains_compares_identity() {
        let todos = xyz();
        let copy = todos[0].clone();
        let selection = Selection::new(vec![&todos[0]]);

        assert!(selection.contains(&todos[0]));
        assert!(!selection.contains(&copy));
    }

    #[test]
    fn can_iterate_over_a_selection() {
        let todos = xyz();
        let selection = Selection::new(vec![&todos[2], &todos[0]]);

        assert_eq!(2, selection.len());
        assert!(!selection.is_empty());
        assert_eq!(vec!["X", "Z"], texts(selection.iter()));
        assert_eq!(vec!["X", "Z"], texts(selection));
    }
}
