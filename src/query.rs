use crate::{
    ast::Node,
    error::QueryError,
    evaluation::Selection,
    lexer::{tokenize, Token},
    parser,
    tags::{TagMatcher, Tagged},
};
use itertools::Itertools;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use tracing::debug;

/// A parsed tag query.
///
/// A [`Query`] only exists once its tree has been completely built, so it can always be
/// evaluated. It holds no reference to its source nor to any item and can be evaluated any number
/// of times, from several threads at once.
///
/// # Examples
///
/// ```rust
/// use tag_query::{Query, Tagged};
///
/// struct Todo {
///     text: &'static str,
///     tags: Vec<String>,
/// }
///
/// impl Tagged for Todo {
///     fn tags(&self) -> &[String] {
///         &self.tags
///     }
/// }
///
/// let todos = [
///     Todo { text: "call the bank", tags: vec!["#urgent".into()] },
///     Todo { text: "fix the sink", tags: vec!["#blocked".into(), "#done".into()] },
///     Todo { text: "water the plants", tags: vec!["#later".into()] },
/// ];
///
/// let query = Query::parse("(#urgent OR #blocked) AND !#done").unwrap();
/// let selection = query.select(&todos);
///
/// assert_eq!(1, selection.len());
/// assert!(selection.contains(&todos[0]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Query {
    root: Node,
}

impl Query {
    /// Parse a query.
    ///
    /// ```rust
    /// use tag_query::Query;
    ///
    /// assert!(Query::parse("a AND (b OR !c)").is_ok());
    /// assert!(Query::parse("a b").is_err());
    /// assert!(Query::parse("(a AND b").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        Self::from_tokens(&tokenize(input))
    }

    /// Build a query from already tokenized input.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, QueryError> {
        debug!(tokens = %tokens.iter().join(" "), "building query tree");
        match parser::build(tokens) {
            Ok(root) => {
                debug!(tree = %root, "built query tree");
                Ok(Self { root })
            }
            Err(error) => {
                debug!(%error, "rejected query");
                Err(error)
            }
        }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[inline]
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Evaluate the query with a custom `filter` returning the items matching an atom.
    pub fn evaluate<'a, T, F>(&self, filter: F) -> Selection<'a, T>
    where
        F: Fn(&str) -> Vec<&'a T>,
    {
        Selection::new(self.root.evaluate(&filter))
    }

    /// Select the `items` whose tags satisfy the query, using the default [`TagMatcher`].
    #[inline]
    pub fn select<'a, T: Tagged>(&self, items: &'a [T]) -> Selection<'a, T> {
        self.select_with(&TagMatcher::default(), items)
    }

    /// Select the `items` whose tags satisfy the query according to `matcher`.
    pub fn select_with<'a, T: Tagged>(
        &self,
        matcher: &TagMatcher,
        items: &'a [T],
    ) -> Selection<'a, T> {
        let selection = self.evaluate(matcher.filter(items));
        debug!(
            query = %self.root,
            candidates = items.len(),
            selected = selection.len(),
            "selected items"
        );
        selection
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl From<Node> for Query {
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)
    }
}
