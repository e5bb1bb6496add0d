// src/recipe/predicate.rs
//! Guard predicates over variant assignments
//!
//! Guards gate dependencies, conflict rules, and build-option decisions.
//! Text form follows Spack spec notation: `+alquimia`, `~mstk` (`-mstk`
//! accepted on input), `mesh_type=structured`, and whitespace-joined
//! conjunctions like `+crunchtope ~alquimia`. The empty string is the
//! neutral guard that always holds.

use crate::error::{Error, Result};
use crate::recipe::assignment::VariantAssignment;
use std::fmt;
use std::str::FromStr;

/// A guard evaluated against a resolved variant assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Holds unconditionally
    Always,
    /// Named switch is enabled (`+name`)
    Enabled(String),
    /// Named switch is disabled (`~name`)
    Disabled(String),
    /// Named selector has the given value (`name=value`)
    Equals(String, String),
    /// Every inner predicate holds (whitespace-joined conjunction)
    All(Vec<Predicate>),
}

impl Predicate {
    /// Convenience constructor for [`Predicate::Enabled`]
    pub fn enabled(name: impl Into<String>) -> Self {
        Self::Enabled(name.into())
    }

    /// Convenience constructor for [`Predicate::Disabled`]
    pub fn disabled(name: impl Into<String>) -> Self {
        Self::Disabled(name.into())
    }

    /// Convenience constructor for [`Predicate::Equals`]
    pub fn equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equals(name.into(), value.into())
    }

    /// Parse a guard from its Spack-style text form
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::Always);
        }

        let mut parts = Vec::new();
        for token in s.split_whitespace() {
            parts.push(Self::parse_token(token)?);
        }

        match parts.len() {
            1 => Ok(parts.remove(0)),
            _ => Ok(Self::All(parts)),
        }
    }

    fn parse_token(token: &str) -> Result<Self> {
        if let Some(rest) = token.strip_prefix('+') {
            if rest.is_empty() {
                return Err(Error::ParseError(
                    "Missing variant name after + in guard".to_string(),
                ));
            }
            Ok(Self::Enabled(rest.to_string()))
        } else if let Some(rest) = token.strip_prefix('~').or_else(|| token.strip_prefix('-')) {
            if rest.is_empty() {
                return Err(Error::ParseError(
                    "Missing variant name after ~ in guard".to_string(),
                ));
            }
            Ok(Self::Disabled(rest.to_string()))
        } else if let Some((name, value)) = token.split_once('=') {
            if name.is_empty() || value.is_empty() {
                return Err(Error::ParseError(format!(
                    "Malformed guard token '{}': expected name=value",
                    token
                )));
            }
            Ok(Self::Equals(name.to_string(), value.to_string()))
        } else {
            Err(Error::ParseError(format!(
                "Guard token '{}' must start with '+' or '~' or contain '='",
                token
            )))
        }
    }

    /// Evaluate this guard against an assignment
    ///
    /// Variants absent from the assignment count as disabled switches and
    /// match no selector value.
    pub fn holds(&self, assignment: &VariantAssignment) -> bool {
        match self {
            Self::Always => true,
            Self::Enabled(name) => assignment.is_enabled(name),
            Self::Disabled(name) => !assignment.is_enabled(name),
            Self::Equals(name, value) => assignment
                .value_of(name)
                .map(|v| v.to_string() == *value)
                .unwrap_or(false),
            Self::All(parts) => parts.iter().all(|p| p.holds(assignment)),
        }
    }

    /// Collect every variant name this guard mentions
    pub fn variant_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Always => {}
            Self::Enabled(name) | Self::Disabled(name) | Self::Equals(name, _) => {
                out.push(name.as_str());
            }
            Self::All(parts) => {
                for p in parts {
                    p.collect_names(out);
                }
            }
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => Ok(()),
            Self::Enabled(name) => write!(f, "+{}", name),
            Self::Disabled(name) => write!(f, "~{}", name),
            Self::Equals(name, value) => write!(f, "{}={}", name, value),
            Self::All(parts) => {
                let rendered: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
                write!(f, "{}", rendered.join(" "))
            }
        }
    }
}

impl FromStr for Predicate {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Predicate::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::variant::VariantValue;

    fn assignment() -> VariantAssignment {
        VariantAssignment::new()
            .with("alquimia", VariantValue::Bool(false))
            .with("mstk", VariantValue::Bool(true))
            .with("mesh_type", VariantValue::Choice("unstructured".to_string()))
    }

    // === Parsing tests ===

    #[test]
    fn test_parse_enabled() {
        assert_eq!(
            Predicate::parse("+alquimia").unwrap(),
            Predicate::enabled("alquimia")
        );
    }

    #[test]
    fn test_parse_disabled_both_spellings() {
        assert_eq!(
            Predicate::parse("~alquimia").unwrap(),
            Predicate::disabled("alquimia")
        );
        assert_eq!(
            Predicate::parse("-alquimia").unwrap(),
            Predicate::disabled("alquimia")
        );
    }

    #[test]
    fn test_parse_equals() {
        assert_eq!(
            Predicate::parse("mesh_type=structured").unwrap(),
            Predicate::equals("mesh_type", "structured")
        );
    }

    #[test]
    fn test_parse_empty_is_always() {
        assert_eq!(Predicate::parse("").unwrap(), Predicate::Always);
        assert_eq!(Predicate::parse("   ").unwrap(), Predicate::Always);
    }

    #[test]
    fn test_parse_conjunction() {
        let pred = Predicate::parse("+crunchtope ~alquimia").unwrap();
        assert_eq!(
            pred,
            Predicate::All(vec![
                Predicate::enabled("crunchtope"),
                Predicate::disabled("alquimia"),
            ])
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Predicate::parse("+").is_err());
        assert!(Predicate::parse("~").is_err());
        assert!(Predicate::parse("=x").is_err());
        assert!(Predicate::parse("x=").is_err());
        assert!(Predicate::parse("bare").is_err());
    }

    // === Evaluation tests ===

    #[test]
    fn test_holds_always() {
        assert!(Predicate::Always.holds(&assignment()));
        assert!(Predicate::Always.holds(&VariantAssignment::new()));
    }

    #[test]
    fn test_holds_enabled() {
        assert!(Predicate::enabled("mstk").holds(&assignment()));
        assert!(!Predicate::enabled("alquimia").holds(&assignment()));
    }

    #[test]
    fn test_holds_disabled() {
        assert!(Predicate::disabled("alquimia").holds(&assignment()));
        assert!(!Predicate::disabled("mstk").holds(&assignment()));
    }

    #[test]
    fn test_holds_equals() {
        assert!(Predicate::equals("mesh_type", "unstructured").holds(&assignment()));
        assert!(!Predicate::equals("mesh_type", "structured").holds(&assignment()));
    }

    #[test]
    fn test_holds_absent_variant() {
        let empty = VariantAssignment::new();
        assert!(!Predicate::enabled("mstk").holds(&empty));
        assert!(Predicate::disabled("mstk").holds(&empty));
        assert!(!Predicate::equals("mesh_type", "unstructured").holds(&empty));
    }

    #[test]
    fn test_holds_conjunction() {
        let pred = Predicate::parse("+mstk ~alquimia").unwrap();
        assert!(pred.holds(&assignment()));

        let pred = Predicate::parse("+mstk +alquimia").unwrap();
        assert!(!pred.holds(&assignment()));
    }

    // === Display tests ===

    #[test]
    fn test_display_roundtrip() {
        for text in ["+alquimia", "~mstk", "mesh_type=structured", "+crunchtope ~alquimia"] {
            let pred = Predicate::parse(text).unwrap();
            assert_eq!(pred.to_string(), text);
            assert_eq!(Predicate::parse(&pred.to_string()).unwrap(), pred);
        }
    }

    #[test]
    fn test_display_always_is_empty() {
        assert_eq!(Predicate::Always.to_string(), "");
    }

    #[test]
    fn test_variant_names() {
        let pred = Predicate::parse("+crunchtope ~alquimia mesh_type=structured").unwrap();
        assert_eq!(
            pred.variant_names(),
            vec!["crunchtope", "alquimia", "mesh_type"]
        );
    }
}
