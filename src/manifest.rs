//! Dependency manifest assembly
//!
//! A pre-processing scan over a whole script: every line is offered to the
//! annotation parser and the successful results are collected in line
//! order. Lines that don't match are silently skipped; only I/O can fail.

use crate::error::{ScanError, ScanResult};
use crate::parsing::{ParsedImport, parse_import};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, trace};

/// All dependency annotations found in one script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyManifest {
    imports: Vec<ParsedImport>,
}

impl DependencyManifest {
    /// Scan script source, line by line, for annotated imports.
    ///
    /// Duplicate locators are kept as encountered; deduplication is the
    /// resolver's concern, not the scanner's.
    pub fn scan(source: &str) -> Self {
        let mut imports = Vec::new();
        for (idx, line) in source.lines().enumerate() {
            match parse_import(line) {
                Some(parsed) => {
                    debug!(
                        "line {}: import '{}' from '{}'",
                        idx + 1,
                        parsed.import_name,
                        parsed.dependency_name
                    );
                    imports.push(parsed);
                }
                None => trace!("line {}: no annotation", idx + 1),
            }
        }
        Self { imports }
    }

    /// Read a script file and scan it for annotated imports
    pub fn scan_file(path: &Path) -> ScanResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| ScanError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8(bytes).map_err(|_| ScanError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;
        Ok(Self::scan(&source))
    }

    pub fn imports(&self) -> &[ParsedImport] {
        &self.imports
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedImport> {
        self.imports.iter()
    }
}

impl IntoIterator for DependencyManifest {
    type Item = ParsedImport;
    type IntoIter = std::vec::IntoIter<ParsedImport>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.into_iter()
    }
}

impl<'a> IntoIterator for &'a DependencyManifest {
    type Item = &'a ParsedImport;
    type IntoIter = std::slice::Iter<'a, ParsedImport>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.iter()
    }
}
