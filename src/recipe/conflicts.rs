// src/recipe/conflicts.rs

//! Conflict rules between variant settings
//!
//! A rule pairs a conflicting spec with an optional trigger condition,
//! mirroring the two-part shape recipes declare them in. The rule fires
//! when both predicates hold against the same assignment.

use crate::error::{Error, Result};
use crate::recipe::assignment::VariantAssignment;
use crate::recipe::predicate::Predicate;
use std::fmt;

/// A declared incompatibility between variant settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictRule {
    /// The combination being ruled out
    pub spec: Predicate,
    /// Trigger condition; `Always` when the rule is unconditional
    pub when: Predicate,
    /// Operator-facing explanation
    pub message: String,
}

impl ConflictRule {
    /// Create a new conflict rule
    pub fn new(spec: Predicate, when: Predicate, message: impl Into<String>) -> Self {
        Self {
            spec,
            when,
            message: message.into(),
        }
    }

    /// True when this rule rejects the given assignment
    pub fn fires(&self, assignment: &VariantAssignment) -> bool {
        self.spec.holds(assignment) && self.when.holds(assignment)
    }

    /// The offending combination, as a guard string
    pub fn combination(&self) -> String {
        match (&self.spec, &self.when) {
            (spec, Predicate::Always) => spec.to_string(),
            (Predicate::Always, when) => when.to_string(),
            (spec, when) => format!("{} {}", spec, when),
        }
    }
}

impl fmt::Display for ConflictRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.combination(), self.message)
    }
}

/// Check an assignment against every declared conflict rule
///
/// The first firing rule aborts the check; there is no partial result.
pub fn validate_conflicts(rules: &[ConflictRule], assignment: &VariantAssignment) -> Result<()> {
    for rule in rules {
        if rule.fires(assignment) {
            return Err(Error::ConflictError(rule.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crunchtope_rule() -> ConflictRule {
        ConflictRule::new(
            Predicate::enabled("crunchtope"),
            Predicate::disabled("alquimia"),
            "+crunchtope needs +alquimia",
        )
    }

    fn assignment(crunchtope: bool, alquimia: bool) -> VariantAssignment {
        use crate::recipe::variant::VariantValue;
        VariantAssignment::new()
            .with("crunchtope", VariantValue::Bool(crunchtope))
            .with("alquimia", VariantValue::Bool(alquimia))
    }

    #[test]
    fn test_rule_fires_on_offending_combination() {
        assert!(crunchtope_rule().fires(&assignment(true, false)));
    }

    #[test]
    fn test_rule_quiet_on_valid_combinations() {
        let rule = crunchtope_rule();
        assert!(!rule.fires(&assignment(false, false)));
        assert!(!rule.fires(&assignment(false, true)));
        assert!(!rule.fires(&assignment(true, true)));
    }

    #[test]
    fn test_validate_conflicts_error_names_combination() {
        let err = validate_conflicts(&[crunchtope_rule()], &assignment(true, false)).unwrap_err();
        let text = err.to_string();
        assert!(matches!(err, Error::ConflictError(_)));
        assert!(text.contains("+crunchtope"));
        assert!(text.contains("~alquimia"));
        assert!(text.contains("+crunchtope needs +alquimia"));
    }

    #[test]
    fn test_validate_conflicts_passes_clean_assignment() {
        assert!(validate_conflicts(&[crunchtope_rule()], &assignment(true, true)).is_ok());
    }

    #[test]
    fn test_unconditional_rule_display() {
        let rule = ConflictRule::new(
            Predicate::enabled("tpetra"),
            Predicate::Always,
            "Tpetra stack is not wired up yet",
        );
        assert_eq!(
            rule.to_string(),
            "+tpetra: Tpetra stack is not wired up yet"
        );
    }
}
