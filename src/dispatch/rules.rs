//! # Ordered dispatch rules
//!
//! A [`RuleSet`] is the heart of the delegated-listener model: an ordered
//! list of named `(predicate, action)` rules evaluated in priority order,
//! first match wins.
//!
//! # Architecture Note
//! Why generics here?
//! The storefront has three delegated handlers (click, submit, change), each
//! classifying a different event shape into the same semantic action type.
//! Writing the first-match loop once over `RuleSet<E, A>` means every handler
//! shares the same evaluation and logging behavior, and adding a rule is a
//! one-liner at the table definition site.
//!
//! Precedence is **rule order**, not ancestor proximity: a rule earlier in
//! the table wins even if a later rule would have matched an element closer
//! to the click target. This matches how the original dispatch table checks
//! its selectors one after another.

use tracing::debug;

/// A single named rule: a matcher that either claims the event (returning
/// the semantic action to run) or passes.
struct Rule<E, A> {
    name: &'static str,
    matcher: Box<dyn Fn(&E) -> Option<A> + Send + Sync>,
}

/// An ordered, first-match-wins rule table.
pub struct RuleSet<E, A> {
    rules: Vec<Rule<E, A>>,
}

impl<E, A> RuleSet<E, A> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Order of insertion is priority order.
    pub fn rule(
        mut self,
        name: &'static str,
        matcher: impl Fn(&E) -> Option<A> + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            name,
            matcher: Box::new(matcher),
        });
        self
    }

    /// Evaluates rules in order and returns the first claimed action.
    pub fn classify(&self, event: &E) -> Option<A> {
        for rule in &self.rules {
            if let Some(action) = (rule.matcher)(event) {
                debug!(rule = rule.name, "rule matched");
                return Some(action);
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<E, A> Default for RuleSet<E, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let rules: RuleSet<u32, &'static str> = RuleSet::new()
            .rule("small", |n| (*n < 10).then_some("small"))
            .rule("even", |n| (n % 2 == 0).then_some("even"));

        // 4 matches both rules; "small" is declared first.
        assert_eq!(rules.classify(&4), Some("small"));
        assert_eq!(rules.classify(&12), Some("even"));
        assert_eq!(rules.classify(&13), None);
    }

    #[test]
    fn empty_table_matches_nothing() {
        let rules: RuleSet<u32, ()> = RuleSet::new();
        assert!(rules.is_empty());
        assert_eq!(rules.classify(&1), None);
    }
}
