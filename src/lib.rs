//! Dependency annotation parsing for script-style source files.
//!
//! A script declares its dependencies inline, as trailing comments on its
//! import statements:
//!
//! ```text
//! import Foo // @mxcl ~> 1.0
//! ```
//!
//! [`parse_import`] turns one such line into a [`ParsedImport`];
//! [`DependencyManifest::scan`] runs it over a whole script. Downstream
//! tooling (fetching, resolution, code generation) consumes the result;
//! none of that lives here.

pub mod error;
pub mod manifest;
pub mod parsing;
pub mod types;

// Explicit exports for better API clarity
pub use error::{ScanError, ScanResult};
pub use manifest::DependencyManifest;
pub use parsing::{ParsedImport, parse_import};
pub use types::{Constraint, Version};
