// src/recipe/assignment.rs
//! Resolved variant assignments
//!
//! An assignment maps every declared variant name to a concrete value.
//! Assignments come out of [`VariantAssignment::resolve`], which starts
//! from declared defaults and layers requested overrides on top.

use crate::error::{Error, Result};
use crate::recipe::variant::{VariantDecl, VariantRequest, VariantValue};
use std::collections::BTreeMap;
use std::fmt;

/// A complete name → value map for one build configuration
///
/// Backed by a BTreeMap so iteration (and anything derived from it) is
/// reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariantAssignment {
    values: BTreeMap<String, VariantValue>,
}

impl VariantAssignment {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve requested overrides against the declared variants
    ///
    /// Every declared variant starts at its default. Each request must name
    /// a declared variant and carry a value inside its domain.
    pub fn resolve(decls: &[VariantDecl], requests: &[VariantRequest]) -> Result<Self> {
        let mut values = BTreeMap::new();
        for decl in decls {
            values.insert(decl.name.clone(), decl.domain.default_value());
        }

        for req in requests {
            let decl = decls
                .iter()
                .find(|d| d.name == req.name)
                .ok_or_else(|| Error::UnknownVariantError(req.name.clone()))?;

            let value = decl.domain.coerce(&req.value).ok_or_else(|| {
                Error::InvalidVariantValue {
                    variant: req.name.clone(),
                    value: req.value.to_string(),
                    allowed: decl.domain.describe(),
                }
            })?;

            values.insert(req.name.clone(), value);
        }

        Ok(Self { values })
    }

    /// Set a value directly, bypassing domain checks
    pub fn set(&mut self, name: impl Into<String>, value: VariantValue) {
        self.values.insert(name.into(), value);
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, name: impl Into<String>, value: VariantValue) -> Self {
        self.set(name, value);
        self
    }

    /// Look up the value for a variant, if present
    pub fn value_of(&self, name: &str) -> Option<&VariantValue> {
        self.values.get(name)
    }

    /// True when the named variant is an enabled switch
    ///
    /// Absent variants count as not enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.value_of(name).map(|v| v.enabled()).unwrap_or(false)
    }

    /// Iterate entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &VariantValue)> {
        self.values.iter()
    }

    /// Number of assigned variants
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is assigned
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Spack-style spec string, e.g. `+alquimia ~mstk mesh_type=structured`
    pub fn spec_string(&self) -> String {
        self.values
            .iter()
            .map(|(name, value)| value.spec_token(name))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for VariantAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec_string())
    }
}
