use crate::{
    ast::{Node, Operator},
    error::{InvalidQuery, QueryError},
    lexer::{tokenize, Token},
};
use slab::Slab;

type NodeId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot<'a> {
    Empty,
    Atom(&'a str),
    Operator(Operator),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Nothing has been assigned yet.
    Vacant,
    /// Holds a single completed operand as its left child (a group or the root placeholder).
    Grouped,
    /// An operator with both of its operands.
    Complete,
    /// An atom, or an operator still waiting for its right operand.
    Other,
}

#[derive(Debug)]
struct Entry<'a> {
    slot: Slot<'a>,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<'a> Entry<'a> {
    const fn new(parent: Option<NodeId>) -> Self {
        Self {
            slot: Slot::Empty,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    fn state(&self) -> State {
        match (self.slot, self.left, self.right) {
            (Slot::Empty, None, None) => State::Vacant,
            (Slot::Empty, Some(_), None) => State::Grouped,
            (Slot::Operator(_), Some(_), Some(_)) => State::Complete,
            _ => State::Other,
        }
    }
}

/// Builds the expression tree in a single pass by moving a cursor inside an arena.
///
/// The arena starts with a placeholder root whose left child is the first operand slot. The
/// parent links only serve the upward moves of the cursor and are dropped when the arena is
/// converted into a [`Node`].
struct Builder<'a> {
    nodes: Slab<Entry<'a>>,
    root: NodeId,
    cursor: NodeId,
}

impl<'a> Builder<'a> {
    const DEFAULT_NODES: usize = 16;

    fn new() -> Self {
        let mut nodes = Slab::with_capacity(Self::DEFAULT_NODES);
        let root = nodes.insert(Entry::new(None));
        let cursor = nodes.insert(Entry::new(Some(root)));
        nodes[root].left = Some(cursor);
        Self {
            nodes,
            root,
            cursor,
        }
    }

    #[inline]
    fn attach(&mut self, parent: NodeId) -> NodeId {
        self.nodes.insert(Entry::new(Some(parent)))
    }

    fn push(&mut self, token: &Token<'a>) -> Result<(), InvalidQuery> {
        match *token {
            Token::OpenParen => self.open_group(),
            Token::CloseParen => self.close_group(),
            Token::And => self.operator(Operator::And),
            Token::Or => self.operator(Operator::Or),
            Token::Atom(text) => self.atom(text),
        }
    }

    fn open_group(&mut self) -> Result<(), InvalidQuery> {
        if self.nodes[self.cursor].state() != State::Vacant {
            return Err(InvalidQuery::MissingOperator);
        }

        let child = self.attach(self.cursor);
        self.nodes[self.cursor].left = Some(child);
        self.cursor = child;
        Ok(())
    }

    fn close_group(&mut self) -> Result<(), InvalidQuery> {
        let entry = &self.nodes[self.cursor];
        if entry.state() == State::Vacant {
            return Err(InvalidQuery::MissingOperand);
        }

        self.cursor = entry.parent.ok_or(InvalidQuery::UnmatchedClose)?;
        Ok(())
    }

    fn operator(&mut self, operator: Operator) -> Result<(), InvalidQuery> {
        let cursor = self.cursor;
        match self.nodes[cursor].state() {
            State::Grouped => {}
            State::Complete => self.push_down(cursor),
            State::Vacant => return Err(InvalidQuery::MissingOperand),
            State::Other => return Err(InvalidQuery::MissingOperator),
        }

        let right = self.attach(cursor);
        let entry = &mut self.nodes[cursor];
        entry.slot = Slot::Operator(operator);
        entry.right = Some(right);
        self.cursor = right;
        Ok(())
    }

    /// Move the completed operator at `id` one level down as the left operand of whatever comes
    /// next, which makes chained operators left-associative.
    fn push_down(&mut self, id: NodeId) {
        let entry = &mut self.nodes[id];
        let slot = std::mem::replace(&mut entry.slot, Slot::Empty);
        let left = entry.left.take();
        let right = entry.right.take();
        let moved = self.nodes.insert(Entry {
            slot,
            parent: Some(id),
            left,
            right,
        });
        for child in [left, right].into_iter().flatten() {
            self.nodes[child].parent = Some(moved);
        }
        self.nodes[id].left = Some(moved);
    }

    fn atom(&mut self, text: &'a str) -> Result<(), InvalidQuery> {
        if text.is_empty() {
            return Err(InvalidQuery::MissingOperand);
        }

        let entry = &mut self.nodes[self.cursor];
        if entry.state() != State::Vacant {
            return Err(InvalidQuery::MissingOperator);
        }

        entry.slot = Slot::Atom(text);
        self.cursor = entry.parent.ok_or(InvalidQuery::MissingOperator)?;
        Ok(())
    }

    fn finish(self) -> Result<Node, InvalidQuery> {
        if self.cursor != self.root {
            return Err(InvalidQuery::Unterminated);
        }

        self.to_node(self.root, 1)
    }

    /// Convert the subtree at `id`, whose root sits at depth `level`, into a [`Node`].
    fn to_node(&self, mut id: NodeId, level: usize) -> Result<Node, InvalidQuery> {
        if level > MAX_DEPTH {
            return Err(InvalidQuery::TooDeep);
        }

        // The placeholder root and the groups only wrap their operand.
        let mut entry = &self.nodes[id];
        while let (Slot::Empty, Some(left), None) = (entry.slot, entry.left, entry.right) {
            id = left;
            entry = &self.nodes[id];
        }

        match (entry.slot, entry.left, entry.right) {
            (Slot::Atom(text), None, None) => Ok(Node::Atom(text.to_string())),
            (Slot::Operator(operator), Some(left), Some(right)) => Ok(Node::binary(
                operator,
                self.to_node(left, level + 1)?,
                self.to_node(right, level + 1)?,
            )),
            _ => Err(InvalidQuery::MissingOperand),
        }
    }
}

/// The deepest tree [`build`] accepts, as counted by [`Node::depth`].
///
/// A chain of `n` operands is `n` levels deep, parentheses alone add none.
pub const MAX_DEPTH: usize = 256;

/// Build the expression tree of a token sequence.
///
/// `AND` and `OR` have the same precedence and are left-associative; parentheses group. Trees
/// deeper than [`MAX_DEPTH`] are rejected with [`InvalidQuery::TooDeep`].
pub fn build(tokens: &[Token]) -> Result<Node, QueryError> {
    if tokens.is_empty() {
        return Err(InvalidQuery::Empty.into());
    }

    let mut builder = Builder::new();
    for token in tokens {
        builder.push(token)?;
    }

    Ok(builder.finish()?)
}

#[inline]
pub fn parse(input: &str) -> Result<Node, QueryError> {
    build(&tokenize(input))
}
