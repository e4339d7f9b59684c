//! Parsed import representation
//!
//! This module defines the ParsedImport struct produced by the annotation
//! parser for each recognized `import ... // ...` line.

use crate::types::Constraint;
use serde::{Deserialize, Serialize};

/// A dependency reference extracted from one annotated import line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedImport {
    /// The local identifier the script uses to reference the module.
    /// Always a single identifier token; dotted paths are truncated to
    /// their first component.
    pub import_name: String,
    /// Where the dependency lives: an "org/repo" pair or a full
    /// repository URL. Never empty on a successful parse.
    pub dependency_name: String,
    /// Which versions of the dependency are acceptable
    pub constraint: Constraint,
}
