use serde::{Serialize, Deserialize};

/// Boolean query in disjunctive normal form: OR over AND-groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanQuery {
    pub conjunctions: Vec<Conjunction>,
}

/// AND-group of literals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjunction {
    pub literals: Vec<Literal>,
}

/// A single term, optionally wrapped in `not(...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    pub term: String,
    pub negated: bool,
}

impl Literal {
    pub fn positive(term: impl Into<String>) -> Self {
        Literal {
            term: term.into(),
            negated: false,
        }
    }

    pub fn negated(term: impl Into<String>) -> Self {
        Literal {
            term: term.into(),
            negated: true,
        }
    }
}

impl Conjunction {
    pub fn new() -> Self {
        Conjunction {
            literals: Vec::new(),
        }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literals.push(literal);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl Default for Conjunction {
    fn default() -> Self {
        Self::new()
    }
}

impl BooleanQuery {
    pub fn new() -> Self {
        BooleanQuery {
            conjunctions: Vec::new(),
        }
    }

    pub fn with_conjunction(mut self, conjunction: Conjunction) -> Self {
        self.conjunctions.push(conjunction);
        self
    }

    pub fn literal_count(&self) -> usize {
        self.conjunctions.iter().map(|c| c.literals.len()).sum()
    }

    /// True when no branch has a literal; such a query matches nothing.
    pub fn is_empty(&self) -> bool {
        self.conjunctions.iter().all(Conjunction::is_empty)
    }
}

impl Default for BooleanQuery {
    fn default() -> Self {
        Self::new()
    }
}
