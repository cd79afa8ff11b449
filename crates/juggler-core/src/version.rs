//! Build version grammar, ordering, and spec matching.
//!
//! Versions are written `v<major>.<minor>-b<revision>`, or `v<major>.<minor>-local`
//! for a developer build. Trailing components may be left out in a request
//! (`v1`, `v1.2`), and `latest` (or the empty string) leaves every component
//! open. Ordering compares major, minor, then revision; a local build sorts
//! after every numbered build of the same `major.minor`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use juggler_util::errors::{JugglerError, JugglerResult};

/// Text of the fully unconstrained version.
pub const LATEST: &str = "latest";

const LOCAL_TAG: &str = "local";
const BUILD_TAG_PREFIX: char = 'b';

/// The third version component: a numbered CI build or a local developer build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Revision {
    Numbered(u64),
    Local,
}

impl Revision {
    pub fn is_local(&self) -> bool {
        matches!(self, Revision::Local)
    }
}

impl Ord for Revision {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Revision::Numbered(a), Revision::Numbered(b)) => a.cmp(b),
            (Revision::Numbered(_), Revision::Local) => Ordering::Less,
            (Revision::Local, Revision::Numbered(_)) => Ordering::Greater,
            (Revision::Local, Revision::Local) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Revision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Numbered(n) => write!(f, "{BUILD_TAG_PREFIX}{n}"),
            Revision::Local => f.write_str(LOCAL_TAG),
        }
    }
}

/// A version as written in text, with any trailing components possibly absent.
///
/// Absent components mean "unconstrained" and only make sense in a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionInfo {
    major: Option<u64>,
    minor: Option<u64>,
    revision: Option<Revision>,
}

impl VersionInfo {
    /// The fully unconstrained version, rendered as `latest`.
    pub fn latest() -> Self {
        Self::default()
    }

    pub fn major(&self) -> Option<u64> {
        self.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    pub fn revision(&self) -> Option<Revision> {
        self.revision
    }

    /// True when major, minor and revision are all present.
    pub fn is_complete(&self) -> bool {
        self.major.is_some() && self.minor.is_some() && self.revision.is_some()
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(major) = self.major else {
            return f.write_str(LATEST);
        };
        write!(f, "v{major}")?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
        }
        if let Some(revision) = self.revision {
            write!(f, "-{revision}")?;
        }
        Ok(())
    }
}

impl FromStr for VersionInfo {
    type Err = JugglerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl TryFrom<&toml::Value> for VersionInfo {
    type Error = JugglerError;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        parse_version_value(value)
    }
}

impl From<BuildVersion> for VersionInfo {
    fn from(build: BuildVersion) -> Self {
        Self {
            major: Some(build.major),
            minor: Some(build.minor),
            revision: Some(build.revision),
        }
    }
}

/// Parse a version from text.
///
/// `""` and `"latest"` give the unconstrained version. Anything else must be
/// `v<digits>`, optionally followed by `.<digits>` and then by `-b<digits>`
/// or `-local`. Components that are not written stay absent.
pub fn parse_version(text: &str) -> JugglerResult<VersionInfo> {
    if text.is_empty() || text == LATEST {
        return Ok(VersionInfo::latest());
    }

    let invalid = || JugglerError::InvalidString {
        text: text.to_string(),
    };

    let rest = text.strip_prefix('v').ok_or_else(invalid)?;
    let (numbers, tag) = match rest.split_once('-') {
        Some((numbers, tag)) => (numbers, Some(tag)),
        None => (rest, None),
    };
    let (major, minor) = match numbers.split_once('.') {
        Some((major, minor)) => (major, Some(minor)),
        None => (numbers, None),
    };

    let major = parse_number(major).ok_or_else(invalid)?;
    let minor = match minor {
        Some(minor) => Some(parse_number(minor).ok_or_else(invalid)?),
        None => None,
    };
    let revision = match tag {
        Some(tag) => Some(parse_tag(tag).ok_or_else(invalid)?),
        None => None,
    };

    Ok(VersionInfo {
        major: Some(major),
        minor,
        revision,
    })
}

/// Parse a version from an untyped configuration value.
///
/// Only string values are accepted; anything else is [`JugglerError::InvalidType`].
pub fn parse_version_value(value: &toml::Value) -> JugglerResult<VersionInfo> {
    match value {
        toml::Value::String(text) => parse_version(text),
        other => Err(JugglerError::InvalidType {
            found: other.type_str().to_string(),
        }),
    }
}

fn parse_number(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_tag(tag: &str) -> Option<Revision> {
    if tag == LOCAL_TAG {
        return Some(Revision::Local);
    }
    tag.strip_prefix(BUILD_TAG_PREFIX)
        .and_then(parse_number)
        .map(Revision::Numbered)
}

/// A concrete, complete build version as registered in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildVersion {
    major: u64,
    minor: u64,
    revision: Revision,
}

impl BuildVersion {
    pub fn new(major: u64, minor: u64, revision: Revision) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// Parse a complete build version such as `v1.0-b3` or `v2.1-local`.
    pub fn parse(text: &str) -> JugglerResult<Self> {
        Self::try_from(parse_version(text)?)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn is_local(&self) -> bool {
        self.revision.is_local()
    }
}

impl TryFrom<VersionInfo> for BuildVersion {
    type Error = JugglerError;

    fn try_from(info: VersionInfo) -> Result<Self, Self::Error> {
        match (info.major, info.minor, info.revision) {
            (Some(major), Some(minor), Some(revision)) => Ok(Self::new(major, minor, revision)),
            _ => Err(JugglerError::InvalidString {
                text: info.to_string(),
            }),
        }
    }
}

impl FromStr for BuildVersion {
    type Err = JugglerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        VersionInfo::from(*self).fmt(f)
    }
}

/// A version request. Only obtainable by parsing, so every spec in
/// circulation is known to follow the grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VersionSpec(VersionInfo);

impl VersionSpec {
    /// The spec that matches every build.
    pub fn latest() -> Self {
        Self(VersionInfo::latest())
    }

    /// The components this spec constrains.
    pub fn as_version_info(&self) -> &VersionInfo {
        &self.0
    }

    /// A build matches when every component present in the spec is equal.
    pub fn matches(&self, build: &BuildVersion) -> bool {
        self.0.major.map_or(true, |major| major == build.major)
            && self.0.minor.map_or(true, |minor| minor == build.minor)
            && self
                .0
                .revision
                .map_or(true, |revision| revision == build.revision)
    }
}

/// Parse a version request; same grammar as [`parse_version`].
pub fn parse_spec(text: &str) -> JugglerResult<VersionSpec> {
    parse_version(text).map(VersionSpec)
}

impl FromStr for VersionSpec {
    type Err = JugglerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_spec(s)
    }
}

impl TryFrom<&toml::Value> for VersionSpec {
    type Error = JugglerError;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        parse_version_value(value).map(VersionSpec)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
