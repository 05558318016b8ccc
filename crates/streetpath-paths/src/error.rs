use std::fmt;

/// Errors surfaced by [`PathSearch::start`](crate::PathSearch::start) and
/// [`SearchSession::start`](crate::SearchSession::start).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search was started without a graph, origin or goal, or with an
    /// origin/goal the graph does not contain. Nothing was mutated.
    InvalidState(&'static str),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(why) => write!(f, "invalid search state: {why}"),
        }
    }
}

impl std::error::Error for SearchError {}
