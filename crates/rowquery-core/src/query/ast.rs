/// Query model types
///
/// The structured form of `PROJECT ... [FILTER ...]` text.
use serde::Serialize;
use std::fmt;

/// Ordered list of columns kept in output rows
pub type Projection = Vec<String>;

/// A parsed query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub projection: Projection,
    pub filter: FilterClause,
}

impl Query {
    /// The comparison that restricts rows, if any
    pub fn filter(&self) -> Option<&QueryFilter> {
        self.filter.as_comparison()
    }
}

/// Outcome of reading the `FILTER` part of a query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum FilterClause {
    /// No `FILTER` part
    #[default]
    None,
    /// A well-formed comparison
    Comparison(QueryFilter),
    /// An operator was found but not padded as `" op "`; the clause is not applied
    Ignored { text: String, operator: Operator },
}

impl FilterClause {
    pub fn as_comparison(&self) -> Option<&QueryFilter> {
        match self {
            FilterClause::Comparison(filter) => Some(filter),
            _ => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, FilterClause::Ignored { .. })
    }
}

/// A single `column op literal` comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryFilter {
    pub column: String,
    pub operator: Operator,
    /// Raw literal text; coerced against the column's kind at evaluation time
    pub value: String,
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Equal,       // =
    GreaterThan, // >
    LessThan,    // <
}

impl Operator {
    /// Every operator, in scan order
    pub const ALL: [Operator; 3] = [Operator::Equal, Operator::GreaterThan, Operator::LessThan];

    /// The operator spelled by `symbol`
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Equal => '=',
            Operator::GreaterThan => '>',
            Operator::LessThan => '<',
        }
    }
}

// Display implementations render the canonical query text

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PROJECT {}", self.projection.join(", "))?;
        match &self.filter {
            FilterClause::None => Ok(()),
            FilterClause::Comparison(filter) => write!(f, " FILTER {}", filter),
            FilterClause::Ignored { text, .. } => write!(f, " FILTER {}", text),
        }
    }
}

impl fmt::Display for QueryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.column, self.operator, self.value)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
