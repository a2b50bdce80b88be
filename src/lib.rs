//! A small boolean query language to filter tagged checklist items.
//!
//! # Examples
//!
//! Selecting the items matching a query:
//!
//! ```
//! use tag_query::{Query, Tagged};
//!
//! #[derive(Debug)]
//! struct Todo {
//!     text: String,
//!     tags: Vec<String>,
//! }
//!
//! impl Tagged for Todo {
//!     fn tags(&self) -> &[String] {
//!         &self.tags
//!     }
//! }
//!
//! let todo = |text: &str, tags: &[&str]| Todo {
//!     text: text.to_string(),
//!     tags: tags.iter().map(ToString::to_string).collect(),
//! };
//! let todos = vec![
//!     todo("renew the passport", &["#urgent", "#admin"]),
//!     todo("reply to the landlord", &["#blocked"]),
//!     todo("book the flights", &["#urgent", "#done"]),
//! ];
//!
//! // Parse the query once
//! let query = Query::parse("(#urgent OR #blocked) AND !#done").unwrap();
//!
//! // Evaluate it against the items
//! let selection = query.select(&todos);
//! selection.iter().for_each(|todo| {
//!     println!("Found: {}", todo.text);
//! });
//! assert_eq!(2, selection.len());
//! ```
//!
//! Any callback mapping an atom to the items it matches can be used instead of the tag matching:
//!
//! ```
//! use tag_query::Query;
//!
//! let numbers = [1, 2, 3, 4, 5, 6];
//! let query = Query::parse("even OR one").unwrap();
//! let selection = query.evaluate(|atom| match atom {
//!     "even" => numbers.iter().filter(|n| *n % 2 == 0).collect(),
//!     "one" => vec![&numbers[0]],
//!     _ => vec![],
//! });
//! assert_eq!(4, selection.len());
//! ```
//!
//! # Query language
//!
//! * Atoms are runs of characters separated by spaces or parentheses. With the standard tag
//!   matching, an atom matches the items whose comma-joined tags contain it;
//! * An atom starting with `!` matches the items that the rest of the atom does not match;
//! * `AND` keeps the items matched by both sides and `OR` the items matched by either side. The
//!   keywords are case-sensitive;
//! * `AND` and `OR` have the same precedence and are evaluated from left to right, so
//!   `a OR b AND c` is `(a OR b) AND c`;
//! * Parentheses group sub-expressions.
//!
//! As an example, the following would all be valid queries:
//!
//! ```text
//! #urgent
//! !#done
//! #work AND (#urgent OR #blocked) AND !#done
//! ((#home OR #garden) AND #weekend) OR #errand
//! ```
//!
//! Results are sets: an item appears at most once, whatever the number of atoms it matches.
//! Items are compared by identity, so two equal items at different places are both kept.
mod ast;
mod error;
mod evaluation;
mod lexer;
mod parser;
mod query;
pub mod sets;
mod tags;
#[cfg(test)]
mod test_utils;

pub use crate::{
    ast::{Node, Operator, TreeNode},
    error::{InvalidQuery, QueryError},
    evaluation::Selection,
    lexer::{tokenize, Lexer, Token},
    parser::{build, parse, MAX_DEPTH},
    query::Query,
    tags::{all_tags, TagMatcher, Tagged},
};
