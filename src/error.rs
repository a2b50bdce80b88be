use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("could not parse query: {0}")]
    InvalidQuery(InvalidQuery),
}

/// The reason a token sequence could not be turned into an expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidQuery {
    #[error("the query is empty")]
    Empty,
    #[error("closing parenthesis without a matching opening one")]
    UnmatchedClose,
    #[error("the query ended inside a group or after an operator")]
    Unterminated,
    #[error("an operator or group is missing an operand")]
    MissingOperand,
    #[error("two operands follow each other without an operator")]
    MissingOperator,
    #[error("the query is nested deeper than {} levels", crate::parser::MAX_DEPTH)]
    TooDeep,
}

impl From<InvalidQuery> for QueryError {
    fn from(reason: InvalidQuery) -> Self {
        Self::InvalidQuery(reason)
    }
}
