use logos::{Logos, SpannedIter};
use std::fmt::{Display, Formatter};

/// A token of a tag query.
///
/// Only the parentheses and the space separate tokens, so anything else (including `!`, `#` or
/// a tab) ends up inside an [`Token::Atom`].
#[derive(Clone, Copy, Debug, Logos, PartialEq, Eq)]
#[logos(skip r" +")]
pub enum Token<'source> {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("AND")]
    And,
    #[token("OR")]
    Or,
    #[regex(r"[^() ]+", |lex| lex.slice())]
    Atom(&'source str),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::Atom(text) => write!(f, "{text}"),
        }
    }
}

pub struct Lexer<'input> {
    input: &'input str,
    token_stream: SpannedIter<'input, Token<'input>>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            token_stream: Token::lexer(input).spanned(),
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Token<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        self.token_stream.next().map(|(token, span)| match token {
            // Keywords are only recognized when they make up the whole atom.
            Ok(Token::Atom("AND")) => Token::And,
            Ok(Token::Atom("OR")) => Token::Or,
            Ok(token) => token,
            // Everything that is not a delimiter belongs to an atom.
            Err(()) => Token::Atom(&input[span]),
        })
    }
}

/// Split a query into its tokens.
///
/// This never fails: a malformed query is only detected when building the tree.
///
/// # Examples
///
/// ```rust
/// use tag_query::{tokenize, Token};
///
/// let tokens = tokenize("(urgent OR blocked) AND !done");
/// assert_eq!(
///     vec![
///         Token::OpenParen,
///         Token::Atom("urgent"),
///         Token::Or,
///         Token::Atom("blocked"),
///         Token::CloseParen,
///         Token::And,
///         Token::Atom("!done"),
///     ],
///     tokens
/// );
/// ```
#[inline]
pub fn tokenize(query: &str) -> Vec<Token<'_>> {
    Lexer::new(query).collect()
}
