//! In-memory build listing keyed by package name and flavor.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use juggler_util::errors::JugglerResult;

use crate::package::{PackageEntry, PackageInfo};
use crate::version::{BuildVersion, VersionSpec};

/// Flavor used when none is given.
pub const DEFAULT_FLAVOR: &str = "vanilla";

/// Where a listing and its artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingRoot {
    Local(PathBuf),
    Remote(String),
}

impl ListingRoot {
    /// Location of `filename` under this root.
    pub fn locate(&self, filename: &str) -> String {
        match self {
            ListingRoot::Local(dir) => dir.join(filename).display().to_string(),
            ListingRoot::Remote(url) => format!("{}/{filename}", url.trim_end_matches('/')),
        }
    }
}

impl Default for ListingRoot {
    fn default() -> Self {
        ListingRoot::Local(PathBuf::from("."))
    }
}

impl From<PathBuf> for ListingRoot {
    fn from(dir: PathBuf) -> Self {
        ListingRoot::Local(dir)
    }
}

impl From<&Path> for ListingRoot {
    fn from(dir: &Path) -> Self {
        ListingRoot::Local(dir.to_path_buf())
    }
}

impl fmt::Display for ListingRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingRoot::Local(dir) => write!(f, "{}", dir.display()),
            ListingRoot::Remote(url) => f.write_str(url),
        }
    }
}

/// Identity of a package within a listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageKey {
    pub name: String,
    pub flavor: String,
}

impl PackageKey {
    pub fn new(name: impl Into<String>, flavor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flavor: flavor.into(),
        }
    }
}

/// Every known build of every package in one repository.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    root: ListingRoot,
    packages: BTreeMap<PackageKey, PackageInfo>,
}

impl Listing {
    pub fn new(root: impl Into<ListingRoot>) -> Self {
        Self {
            root: root.into(),
            packages: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &ListingRoot {
        &self.root
    }

    /// True when no package has been registered.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Packages ordered by name, then flavor.
    pub fn packages(&self) -> impl Iterator<Item = &PackageInfo> {
        self.packages.values()
    }

    /// Register the build `version_text` of `name` in `flavor`.
    ///
    /// The text must be a complete build version (`v1.0-b3`, `v1.0-local`).
    /// Registering a known build again is a no-op.
    pub fn add_package(
        &mut self,
        name: &str,
        version_text: &str,
        flavor: &str,
    ) -> JugglerResult<PackageEntry> {
        let build = BuildVersion::parse(version_text)?;
        Ok(self.add_build(name, build, flavor))
    }

    /// Register an already parsed build.
    pub fn add_build(&mut self, name: &str, build: BuildVersion, flavor: &str) -> PackageEntry {
        let root = &self.root;
        self.packages
            .entry(PackageKey::new(name, flavor))
            .or_insert_with(|| PackageInfo::new(name, root.clone(), flavor))
            .add_build(build)
    }

    /// Newest build of `name` in `flavor` matching `spec`.
    ///
    /// An unknown package is `None`, the same as a package with no matching build.
    pub fn get_package(
        &self,
        name: &str,
        spec: &VersionSpec,
        ignore_local_build: bool,
        flavor: &str,
    ) -> Option<PackageEntry> {
        self.packages
            .get(&PackageKey::new(name, flavor))?
            .get_entry(spec, ignore_local_build)
    }

    /// Start a query for `name` with the default spec (`latest`), flavor
    /// (`vanilla`) and local builds included.
    pub fn query<'a>(&'a self, name: &'a str) -> PackageQuery<'a> {
        PackageQuery {
            listing: self,
            name,
            spec: VersionSpec::latest(),
            ignore_local_build: false,
            flavor: DEFAULT_FLAVOR,
        }
    }
}

/// Builder over [`Listing::get_package`] that fills in the defaults.
#[derive(Debug, Clone)]
pub struct PackageQuery<'a> {
    listing: &'a Listing,
    name: &'a str,
    spec: VersionSpec,
    ignore_local_build: bool,
    flavor: &'a str,
}

impl<'a> PackageQuery<'a> {
    pub fn spec(mut self, spec: VersionSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn flavor(mut self, flavor: &'a str) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn ignore_local_build(mut self, ignore: bool) -> Self {
        self.ignore_local_build = ignore;
        self
    }

    pub fn get(&self) -> Option<PackageEntry> {
        self.listing
            .get_package(self.name, &self.spec, self.ignore_local_build, self.flavor)
    }
}
