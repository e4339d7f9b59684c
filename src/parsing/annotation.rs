//! The import annotation grammar.
//!
//! Recognizes one line of script source of the shape
//!
//! ```text
//! [@testable] import [kind] Ident[.member] // <locator> [constraint]
//! ```
//!
//! where the locator is an `@owner` shorthand, an explicit `owner/repo`
//! pair, or a full URL, and the constraint is `~> X.Y[.Z]`, `== X.Y[.Z]`,
//! a bare branch/tag/commit token, or absent (latest).
//!
//! Whitespace between tokens is fully flexible: zero or more spaces/tabs
//! are accepted at every boundary, so `import Foo//@mxcl~>1.0` and
//! `import  Foo  //  @mxcl  ~>  1.0` parse identically.

use crate::parsing::ParsedImport;
use crate::types::Constraint;

/// Declaration keywords that may follow `import` to request a narrower
/// import of a single member. They are skipped; only the identifier after
/// them matters.
const IMPORT_KINDS: &[&str] = &[
    "struct",
    "class",
    "enum",
    "protocol",
    "typealias",
    "func",
    "let",
    "var",
];

/// Parse one line of source text as an annotated import.
///
/// Pure and total: returns `None` for any line that is not a recognizable
/// annotated import, and never panics or reports a distinguishable error.
/// Malformed annotation syntax is treated the same as "this line isn't an
/// annotated import".
pub fn parse_import(line: &str) -> Option<ParsedImport> {
    let mut cur = Cursor::new(line);

    cur.skip_ws();
    if cur.eat_word("@testable") {
        cur.skip_ws();
    }
    if !cur.eat_word("import") {
        return None;
    }
    cur.skip_ws();

    let mut import_name = cur.take_identifier()?;
    if IMPORT_KINDS.contains(&import_name) {
        // Only treat it as a kind keyword when a real identifier follows;
        // otherwise the word itself is the import name.
        let mut ahead = cur;
        ahead.skip_ws();
        if let Some(name) = ahead.take_identifier() {
            import_name = name;
            cur = ahead;
        }
    }
    // A dotted suffix (e.g. `Foo.bar`) narrows the import to one member.
    // Only the first component names the module; the rest is discarded.
    while cur.eat(".") {
        cur.take_identifier()?;
    }

    cur.skip_ws();
    if !cur.eat("//") {
        return None;
    }
    cur.skip_ws();

    let dependency_name = if cur.eat("@") {
        let owner = cur.take_locator();
        if owner.is_empty() {
            return None;
        }
        format!("{owner}/{import_name}")
    } else {
        let locator = cur.take_locator();
        if locator.contains("://") {
            locator.to_string()
        } else {
            // Explicit owner/repo pair; both halves must be present.
            let (owner, repo) = locator.split_once('/')?;
            if owner.is_empty() || repo.is_empty() {
                return None;
            }
            locator.to_string()
        }
    };

    let constraint = parse_constraint(&mut cur)?;
    cur.skip_ws();
    if !cur.is_empty() {
        return None;
    }

    Some(ParsedImport {
        import_name: import_name.to_string(),
        dependency_name,
        constraint,
    })
}

/// Parse the optional constraint clause after the locator
fn parse_constraint(cur: &mut Cursor) -> Option<Constraint> {
    cur.skip_ws();
    if cur.is_empty() {
        return Some(Constraint::Latest);
    }
    if cur.eat("~>") {
        cur.skip_ws();
        let from = cur.take_version()?;
        Some(Constraint::UpToNextMajor { from })
    } else if cur.eat("==") {
        cur.skip_ws();
        Some(Constraint::Exact(cur.take_version()?))
    } else {
        // Anything else is a literal branch, tag, or commit reference
        let reference = cur.take_token();
        if reference.is_empty() {
            return None;
        }
        Some(Constraint::Ref(reference.to_string()))
    }
}

/// A forward-only view over the unconsumed remainder of the line.
///
/// Copyable so callers can cheaply look ahead and back off.
#[derive(Clone, Copy)]
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Consume an exact prefix
    fn eat(&mut self, prefix: &str) -> bool {
        match self.rest.strip_prefix(prefix) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Consume a keyword: an exact prefix that is not immediately followed
    /// by another identifier character (so `import` never matches inside
    /// `important`).
    fn eat_word(&mut self, word: &str) -> bool {
        if let Some(rest) = self.rest.strip_prefix(word) {
            if rest.chars().next().is_none_or(|c| !is_ident_continue(c)) {
                self.rest = rest;
                return true;
            }
        }
        false
    }

    /// Consume an identifier token: `[A-Za-z_][A-Za-z0-9_]*`
    fn take_identifier(&mut self) -> Option<&'a str> {
        if !self.rest.chars().next().is_some_and(is_ident_start) {
            return None;
        }
        let end = self
            .rest
            .find(|c| !is_ident_continue(c))
            .unwrap_or(self.rest.len());
        let (ident, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(ident)
    }

    /// Consume a dependency locator: everything up to whitespace or the
    /// start of a version operator, so `@mxcl~>1.0` splits correctly even
    /// with no spacing.
    fn take_locator(&mut self) -> &'a str {
        let mut end = self.rest.len();
        for (i, c) in self.rest.char_indices() {
            if c.is_whitespace()
                || self.rest[i..].starts_with("~>")
                || self.rest[i..].starts_with("==")
            {
                end = i;
                break;
            }
        }
        let (locator, rest) = self.rest.split_at(end);
        self.rest = rest;
        locator
    }

    /// Consume a run of non-whitespace characters
    fn take_token(&mut self) -> &'a str {
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        token
    }

    /// Consume and parse a version literal (`X`, `X.Y`, or `X.Y.Z`)
    fn take_version(&mut self) -> Option<crate::types::Version> {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(self.rest.len());
        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        literal.parse().ok()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
