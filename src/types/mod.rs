use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A semantic version triple.
///
/// Ordering is lexicographic on (major, minor, patch); equality is
/// component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The exclusive upper bound implied by an up-to-next-major constraint
    pub fn next_major(self) -> Self {
        Self::new(self.major + 1, 0, 0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = &'static str;

    /// Accepts `X`, `X.Y`, or `X.Y.Z`; missing components default to 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = s.split('.');
        let mut next = |missing_ok: bool| -> Result<u64, &'static str> {
            match components.next() {
                Some(part) => part.parse().map_err(|_| "invalid version component"),
                None if missing_ok => Ok(0),
                None => Err("empty version"),
            }
        };
        let major = next(false)?;
        let minor = next(true)?;
        let patch = next(true)?;
        if components.next().is_some() {
            return Err("too many version components");
        }
        Ok(Self::new(major, minor, patch))
    }
}

/// Version constraint attached to a dependency annotation.
///
/// Equality is structural: two constraints are equal only if they are the
/// same variant with an equal payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constraint {
    /// No version specified; use the newest available
    Latest,
    /// Pin to precisely one version
    Exact(Version),
    /// Any version `>= from` and `< from.next_major()`
    UpToNextMajor { from: Version },
    /// An explicit branch, tag, or commit reference
    Ref(String),
}

impl Constraint {
    /// Whether a concrete version satisfies this constraint.
    ///
    /// `Ref` names a branch, tag, or commit rather than a version range,
    /// so no semantic version satisfies it.
    pub fn admits(&self, version: Version) -> bool {
        match self {
            Constraint::Latest => true,
            Constraint::Exact(v) => version == *v,
            Constraint::UpToNextMajor { from } => version >= *from && version < from.next_major(),
            Constraint::Ref(_) => false,
        }
    }
}
