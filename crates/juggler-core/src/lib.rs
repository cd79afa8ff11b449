//! Core data types for Juggler.
//!
//! This crate defines the version grammar and ordering, version specs, the
//! per-package build registry, the listing that indexes packages by name and
//! flavor, and the user configuration.
//!
//! This crate is free of network I/O and of the manifest document format.

pub mod config;
pub mod listing;
pub mod package;
pub mod version;

pub use listing::{Listing, ListingRoot, PackageKey, PackageQuery, DEFAULT_FLAVOR};
pub use package::{PackageEntry, PackageInfo};
pub use version::{parse_spec, parse_version, BuildVersion, Revision, VersionInfo, VersionSpec};
