// src/docs/extensions.rs

//! Documentation generator extension lists
//!
//! The generator loads plugins by dotted module name. The four groups are
//! kept separate so each can be maintained on its own; assembly
//! concatenates them in a fixed order.

/// Core generator extensions
pub const CORE_EXTENSIONS: &[&str] = &[
    "sphinx.ext.todo",
    "sphinx.ext.mathjax",
    "sphinx.ext.ifconfig",
    "sphinx.ext.autodoc",
    "sphinx.ext.doctest",
    "sphinxcontrib.tikz",
    "sphinxcontrib.bibtex",
];

/// Plot rendering
pub const PLOTTING_EXTENSIONS: &[&str] = &["matplotlib.sphinxext.plot_directive"];

/// Notebook-style console blocks
pub const NOTEBOOK_EXTENSIONS: &[&str] = &[
    "IPython.sphinxext.ipython_directive",
    "IPython.sphinxext.ipython_console_highlighting",
];

/// In-tree project extensions
pub const PROJECT_EXTENSIONS: &[&str] = &["extensions.hello", "extensions.amanzi_xml"];

/// Concatenate the four extension groups in declaration order
///
/// No de-duplication happens here; the groups are kept disjoint by hand,
/// and every entry survives in its original position.
pub fn assemble_extensions() -> Vec<String> {
    CORE_EXTENSIONS
        .iter()
        .chain(PLOTTING_EXTENSIONS)
        .chain(NOTEBOOK_EXTENSIONS)
        .chain(PROJECT_EXTENSIONS)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_length_is_sum_of_groups() {
        let all = assemble_extensions();
        assert_eq!(
            all.len(),
            CORE_EXTENSIONS.len()
                + PLOTTING_EXTENSIONS.len()
                + NOTEBOOK_EXTENSIONS.len()
                + PROJECT_EXTENSIONS.len()
        );
    }

    #[test]
    fn test_order_preserved() {
        let all = assemble_extensions();
        assert_eq!(all.first().map(|s| s.as_str()), Some("sphinx.ext.todo"));
        assert_eq!(all[CORE_EXTENSIONS.len()], "matplotlib.sphinxext.plot_directive");
        assert_eq!(all.last().map(|s| s.as_str()), Some("extensions.amanzi_xml"));
    }

    #[test]
    fn test_groups_are_disjoint() {
        let all = assemble_extensions();
        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }
}
