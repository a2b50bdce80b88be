use itertools::Itertools;

/// An item that carries tags, such as a checklist entry.
pub trait Tagged {
    fn tags(&self) -> &[String];
}

impl<T: Tagged + ?Sized> Tagged for &T {
    #[inline]
    fn tags(&self) -> &[String] {
        (**self).tags()
    }
}

/// The standard way to match an atom against the tags of an item.
///
/// The tags of the item are joined with the separator and the atom must be a substring of the
/// result. An atom starting with the negation prefix matches the items that the rest of the atom
/// does not match.
///
/// # Examples
///
/// ```rust
/// use tag_query::TagMatcher;
///
/// let matcher = TagMatcher::default();
/// let tags = vec!["#work".to_string(), "#urgent".to_string()];
///
/// assert!(matcher.matches_tags(&tags, "#urgent"));
/// assert!(matcher.matches_tags(&tags, "#urg"));
/// assert!(!matcher.matches_tags(&tags, "!#work"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagMatcher {
    separator: String,
    negation: String,
}

impl Default for TagMatcher {
    fn default() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR.to_string(),
            negation: Self::DEFAULT_NEGATION.to_string(),
        }
    }
}

impl TagMatcher {
    pub const DEFAULT_SEPARATOR: &'static str = ",";
    pub const DEFAULT_NEGATION: &'static str = "!";

    /// Use another separator when joining the tags of an item.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Use another prefix to negate an atom.
    ///
    /// An empty prefix disables negation.
    pub fn with_negation(mut self, negation: impl Into<String>) -> Self {
        self.negation = negation.into();
        self
    }

    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[inline]
    pub fn negation(&self) -> &str {
        &self.negation
    }

    pub fn matches_tags(&self, tags: &[String], atom: &str) -> bool {
        let (compare, negated) = match atom.strip_prefix(self.negation.as_str()) {
            Some(rest) if !self.negation.is_empty() => (rest, true),
            _ => (atom, false),
        };
        let contains = tags.join(self.separator.as_str()).contains(compare);
        contains != negated
    }

    #[inline]
    pub fn matches<T: Tagged + ?Sized>(&self, item: &T, atom: &str) -> bool {
        self.matches_tags(item.tags(), atom)
    }

    /// Create the filter callback selecting the `items` that match an atom.
    pub fn filter<'a, T: Tagged>(&self, items: &'a [T]) -> impl Fn(&str) -> Vec<&'a T> + 'a {
        let matcher = self.clone();
        move |atom: &str| {
            items
                .iter()
                .filter(|item| matcher.matches(*item, atom))
                .collect()
        }
    }
}

/// Every distinct tag of the `items`, sorted.
pub fn all_tags<T: Tagged>(items: &[T]) -> Vec<&str> {
    items
        .iter()
        .flat_map(|item| item.tags())
        .map(String::as_str)
        .sorted_unstable()
        .dedup()
        .collect()
}
