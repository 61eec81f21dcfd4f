//! Declarative first-match-wins selection over a tuple of discrete values.
//!
//! UI layers pick a response (copy, allowed actions) from a
//! `(process name, state, role)`-like tuple. Branches accumulate as an
//! ordered list and are evaluated top-down in a single
//! [`resolve`](ConditionalResolver::resolve) call; the first branch whose
//! conditions all match wins, later branches are never consulted.

/// One comparison slot of a branch's condition tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond<'a> {
    /// Wildcard: matches any data value, present or absent.
    Any,
    /// Matches exactly this present value. Absent data never matches.
    Is(&'a str),
}

impl Cond<'_> {
    fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Cond::Any => true,
            Cond::Is(expected) => value == Some(*expected),
        }
    }
}

/// Picks a resolver by comparing condition tuples against a fixed data
/// tuple. Constructed per decision, consumed by `resolve()`.
///
/// ```
/// use biketribe_transactions::resolver::{Cond, ConditionalResolver};
///
/// let label = ConditionalResolver::new([Some("default-booking"), Some("preauthorized")])
///     .cond([Cond::Is("default-booking"), Cond::Any], || "respond to the request")
///     .cond([Cond::Any, Cond::Is("preauthorized")], || "unreached: first match won")
///     .default(|| "see the transaction")
///     .resolve();
/// assert_eq!(label, Some("respond to the request"));
/// ```
pub struct ConditionalResolver<'a, T> {
    data: Vec<Option<&'a str>>,
    branches: Vec<Branch<'a, T>>,
    fallback: Option<Box<dyn FnOnce() -> T + 'a>>,
}

struct Branch<'a, T> {
    conditions: Vec<Cond<'a>>,
    resolver: Box<dyn FnOnce() -> T + 'a>,
}

impl<'a, T> ConditionalResolver<'a, T> {
    /// Starts a resolver over the given data tuple. `None` marks an absent
    /// value, which only a wildcard can match.
    pub fn new<I>(data: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        Self {
            data: data.into_iter().collect(),
            branches: Vec::new(),
            fallback: None,
        }
    }

    /// Appends a branch. A branch is eligible only when its condition
    /// tuple has the same length as the data tuple.
    pub fn cond<I, F>(mut self, conditions: I, resolver: F) -> Self
    where
        I: IntoIterator<Item = Cond<'a>>,
        F: FnOnce() -> T + 'a,
    {
        self.branches.push(Branch {
            conditions: conditions.into_iter().collect(),
            resolver: Box::new(resolver),
        });
        self
    }

    /// Sets the fallback used when no branch matches.
    pub fn default<F>(mut self, resolver: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        self.fallback = Some(Box::new(resolver));
        self
    }

    /// Runs the first matching branch, or the fallback, or returns `None`.
    pub fn resolve(self) -> Option<T> {
        let Self {
            data,
            branches,
            fallback,
        } = self;

        let matched = branches.into_iter().find(|branch| {
            branch.conditions.len() == data.len()
                && branch
                    .conditions
                    .iter()
                    .zip(&data)
                    .all(|(cond, value)| cond.matches(*value))
        });

        match matched {
            Some(branch) => Some((branch.resolver)()),
            None => fallback.map(|resolver| resolver()),
        }
    }
}
