use std::collections::BTreeSet;

use crate::listing::ListingRoot;
use crate::version::{BuildVersion, VersionSpec};

/// Extension of every packaged build artifact.
pub const ARTIFACT_EXTENSION: &str = "tar.gz";

/// All known builds of one package name in one flavor.
#[derive(Debug, Clone)]
pub struct PackageInfo {
    name: String,
    root: ListingRoot,
    flavor: String,
    builds: BTreeSet<BuildVersion>,
}

impl PackageInfo {
    pub fn new(name: impl Into<String>, root: ListingRoot, flavor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root,
            flavor: flavor.into(),
            builds: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    /// Registered builds, oldest first.
    pub fn builds(&self) -> impl Iterator<Item = &BuildVersion> {
        self.builds.iter()
    }

    /// Register a build. Adding a build that is already known changes nothing.
    pub fn add_build(&mut self, build: BuildVersion) -> PackageEntry {
        if !self.builds.insert(build) {
            tracing::debug!("{} {} {} already registered", self.name, self.flavor, build);
        }
        self.entry(build)
    }

    /// Pick the newest build matching `spec`.
    ///
    /// With `ignore_local_build`, local builds are never considered. Returns
    /// `None` when no build qualifies.
    pub fn get_entry(&self, spec: &VersionSpec, ignore_local_build: bool) -> Option<PackageEntry> {
        self.builds
            .iter()
            .rev()
            .filter(|build| !(ignore_local_build && build.is_local()))
            .find(|build| spec.matches(build))
            .map(|build| self.entry(*build))
    }

    fn entry(&self, version: BuildVersion) -> PackageEntry {
        PackageEntry {
            name: self.name.clone(),
            version,
            flavor: self.flavor.clone(),
            root: self.root.clone(),
        }
    }
}

/// A resolved build of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    name: String,
    version: BuildVersion,
    flavor: String,
    root: ListingRoot,
}

impl PackageEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &BuildVersion {
        &self.version
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    /// Root of the listing this entry was resolved from.
    pub fn root(&self) -> &ListingRoot {
        &self.root
    }

    /// Artifact file name: `<name>_<flavor>-<version>.tar.gz`.
    pub fn filename(&self) -> String {
        format!(
            "{}_{}-{}.{ARTIFACT_EXTENSION}",
            self.name, self.flavor, self.version
        )
    }

    /// Where the artifact lives: a path under a local root or a URL under a remote one.
    pub fn location(&self) -> String {
        self.root.locate(&self.filename())
    }
}
