// src/recipe/variant.rs
//! Variant declarations, values, and requested overrides
//!
//! Variants are the build-time switches a recipe exposes. Most are on/off
//! switches; a few are single-valued selectors over a fixed choice set.
//! Request syntax follows Spack spec notation: `+mstk`, `~alquimia`
//! (`-alquimia` accepted on input), `mesh_type=structured`.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Value domain of a declared variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantDomain {
    /// On/off switch with a default state
    Switch { default: bool },
    /// Single-valued selector over a fixed set of choices
    Selector {
        values: Vec<String>,
        default: String,
    },
}

impl VariantDomain {
    /// The value a resolved assignment starts from
    pub fn default_value(&self) -> VariantValue {
        match self {
            Self::Switch { default } => VariantValue::Bool(*default),
            Self::Selector { default, .. } => VariantValue::Choice(default.clone()),
        }
    }

    /// Coerce a requested value into this domain, if it fits
    ///
    /// Switches accept booleans and the literal strings "true"/"false";
    /// selectors accept only their declared choices.
    pub fn coerce(&self, value: &VariantValue) -> Option<VariantValue> {
        match (self, value) {
            (Self::Switch { .. }, VariantValue::Bool(b)) => Some(VariantValue::Bool(*b)),
            (Self::Switch { .. }, VariantValue::Choice(s)) => match s.as_str() {
                "true" => Some(VariantValue::Bool(true)),
                "false" => Some(VariantValue::Bool(false)),
                _ => None,
            },
            (Self::Selector { values, .. }, VariantValue::Choice(s)) => {
                if values.iter().any(|v| v == s) {
                    Some(VariantValue::Choice(s.clone()))
                } else {
                    None
                }
            }
            (Self::Selector { .. }, VariantValue::Bool(_)) => None,
        }
    }

    /// Human-readable list of accepted values, for error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Switch { .. } => "true, false".to_string(),
            Self::Selector { values, .. } => values.join(", "),
        }
    }
}

/// A variant the recipe declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDecl {
    pub name: String,
    pub description: String,
    pub domain: VariantDomain,
}

impl VariantDecl {
    /// Declare an on/off switch
    pub fn switch(name: impl Into<String>, description: impl Into<String>, default: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            domain: VariantDomain::Switch { default },
        }
    }

    /// Declare a single-valued selector
    pub fn selector(
        name: impl Into<String>,
        description: impl Into<String>,
        values: &[&str],
        default: &str,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            domain: VariantDomain::Selector {
                values: values.iter().map(|v| v.to_string()).collect(),
                default: default.to_string(),
            },
        }
    }
}

/// A concrete variant value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantValue {
    Bool(bool),
    Choice(String),
}

impl VariantValue {
    /// True only for an enabled switch
    pub fn enabled(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Spack-style token for this value under the given variant name
    pub fn spec_token(&self, name: &str) -> String {
        match self {
            Self::Bool(true) => format!("+{}", name),
            Self::Bool(false) => format!("~{}", name),
            Self::Choice(v) => format!("{}={}", name, v),
        }
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Choice(v) => write!(f, "{}", v),
        }
    }
}

/// A requested variant override, parsed from a spec token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRequest {
    pub name: String,
    pub value: VariantValue,
}

impl VariantRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>, value: VariantValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Parse a request token like "+mstk", "~alquimia", or "mesh_type=structured"
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ParseError("Empty variant token".to_string()));
        }

        if let Some(rest) = s.strip_prefix('+') {
            let name = rest.trim();
            if name.is_empty() {
                return Err(Error::ParseError(
                    "Missing variant name after + operator".to_string(),
                ));
            }
            Ok(Self::new(name, VariantValue::Bool(true)))
        } else if let Some(rest) = s.strip_prefix('~').or_else(|| s.strip_prefix('-')) {
            let name = rest.trim();
            if name.is_empty() {
                return Err(Error::ParseError(
                    "Missing variant name after ~ operator".to_string(),
                ));
            }
            Ok(Self::new(name, VariantValue::Bool(false)))
        } else if let Some((name, value)) = s.split_once('=') {
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                return Err(Error::ParseError(format!(
                    "Malformed variant assignment '{}': expected name=value",
                    s
                )));
            }
            Ok(Self::new(name, VariantValue::Choice(value.to_string())))
        } else {
            Err(Error::ParseError(format!(
                "Variant token '{}' must start with '+' or '~' or contain '='",
                s
            )))
        }
    }

    /// Parse a whitespace-separated list of request tokens
    pub fn parse_list(s: &str) -> Result<Vec<Self>> {
        s.split_whitespace().map(Self::parse).collect()
    }
}

impl fmt::Display for VariantRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.spec_token(&self.name))
    }
}

impl FromStr for VariantRequest {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        VariantRequest::parse(s)
    }
}
