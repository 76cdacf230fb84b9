//! Ordered pattern rules over exercise ids.
//!
//! Every inference table in this crate is a `const` slice of [`Rule`]s.
//! Matching is substring containment on the lower-cased id, so `"press"`
//! matches `bench-press` as well as `pressure-drill`.

/// A containment test over a lower-cased id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Matches if the id contains any of the tokens.
    Any(&'static [&'static str]),
    /// Matches if the id contains any of `any` and none of `except`.
    AnyExcept {
        any: &'static [&'static str],
        except: &'static [&'static str],
    },
    /// Matches if the id contains every token.
    All(&'static [&'static str]),
}

impl Pattern {
    /// Test the pattern against an already lower-cased id.
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Pattern::Any(tokens) => tokens.iter().any(|t| id.contains(t)),
            Pattern::AnyExcept { any, except } => {
                any.iter().any(|t| id.contains(t)) && !except.iter().any(|t| id.contains(t))
            }
            Pattern::All(tokens) => tokens.iter().all(|t| id.contains(t)),
        }
    }
}

/// A named pattern paired with the value it produces.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
    pub name: &'static str,
    pub pattern: Pattern,
    pub value: T,
}

/// Name reported when a chain falls back to its default value.
pub const FALLBACK: &str = "fallback";

/// Rules evaluated in order; the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct RuleChain<T: 'static> {
    pub name: &'static str,
    pub rules: &'static [Rule<T>],
    /// Value used when no rule matches; `None` means the chain may yield nothing.
    pub fallback: Option<T>,
}

impl<T: 'static> RuleChain<T> {
    /// The first rule whose pattern matches `id`.
    pub fn first_match(&self, id: &str) -> Option<&'static Rule<T>> {
        self.rules.iter().find(|rule| rule.pattern.matches(id))
    }

    /// The winning value and the name of the rule that produced it.
    pub fn evaluate(&self, id: &str) -> Option<(&'static str, &T)> {
        match self.first_match(id) {
            Some(rule) => Some((rule.name, &rule.value)),
            None => self.fallback.as_ref().map(|value| (FALLBACK, value)),
        }
    }
}
