// src/docs/output.rs

//! Output-format descriptors
//!
//! Fixed metadata for the four rendering targets. Nothing in here is
//! derived; the defaults carry the values the generator expects verbatim.

use serde::Serialize;

/// Author credit used across the print, man and info targets
pub const AUTHORS: &str = "Amanzi Development Team (LANL, LBNL, PNNL)";

/// Web page rendering options
#[derive(Debug, Clone, Serialize)]
pub struct HtmlOptions {
    pub theme: String,
    pub static_path: Vec<String>,
    pub css_files: Vec<String>,
    pub help_basename: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            theme: "sphinx_rtd_theme".to_string(),
            static_path: vec!["_static".to_string()],
            css_files: vec!["fix_eq_position.css".to_string()],
            help_basename: "Amanzidoc".to_string(),
        }
    }
}

/// Typeset print options
#[derive(Debug, Clone, Serialize)]
pub struct LatexOptions {
    pub papersize: String,
    pub pointsize: String,
    pub preamble: String,
    pub document: LatexDocument,
}

/// The single typeset document the build produces
#[derive(Debug, Clone, Serialize)]
pub struct LatexDocument {
    pub source: String,
    pub target: String,
    pub title: String,
    pub author: String,
    pub document_class: String,
}

impl Default for LatexOptions {
    fn default() -> Self {
        LatexOptions {
            papersize: "letterpaper".to_string(),
            pointsize: "11pt".to_string(),
            preamble: "\\usepackage[version=3]{mhchem}\n\\usepackage{amssymb,grffile}\n"
                .to_string(),
            document: LatexDocument {
                source: "index".to_string(),
                target: "AmanziUserGuide.tex".to_string(),
                title: "Amanzi User Guide".to_string(),
                author: AUTHORS.to_string(),
                document_class: "manual".to_string(),
            },
        }
    }
}

/// Unix manual page entry
#[derive(Debug, Clone, Serialize)]
pub struct ManPage {
    pub source: String,
    pub name: String,
    pub description: String,
    pub authors: Vec<String>,
    pub section: u8,
}

impl Default for ManPage {
    fn default() -> Self {
        ManPage {
            source: "index".to_string(),
            name: "amanzi".to_string(),
            description: "Amanzi Documentation".to_string(),
            authors: vec![AUTHORS.to_string()],
            section: 1,
        }
    }
}

/// Info-format document entry
#[derive(Debug, Clone, Serialize)]
pub struct TexinfoDocument {
    pub source: String,
    pub target: String,
    pub title: String,
    pub author: String,
    pub dir_entry: String,
    pub description: String,
    pub category: String,
}

impl Default for TexinfoDocument {
    fn default() -> Self {
        TexinfoDocument {
            source: "index".to_string(),
            target: "Amanzi".to_string(),
            title: "Amanzi Documentation".to_string(),
            author: AUTHORS.to_string(),
            dir_entry: "Amanzi".to_string(),
            description: "One line description of project.".to_string(),
            category: "Miscellaneous".to_string(),
        }
    }
}
