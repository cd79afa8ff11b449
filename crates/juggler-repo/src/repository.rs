//! Local repository layout: loading, storing, and bootstrapping the listing.

use std::path::{Path, PathBuf};

use juggler_core::listing::{Listing, ListingRoot};
use juggler_util::errors::{JugglerError, JugglerResult};

use crate::manifest::{parse_listing, write_listing, LISTING_FILENAME};

/// Path of the listing file inside repository `dir`.
pub fn listing_path(dir: &Path) -> PathBuf {
    dir.join(LISTING_FILENAME)
}

/// Whether `dir` is a repository: an existing directory holding a listing file.
pub fn is_repository(dir: &Path) -> bool {
    dir.is_dir() && listing_path(dir).is_file()
}

/// Load the listing of the local repository `dir`.
///
/// Fails with [`JugglerError::FileNotFound`] when the listing is missing or
/// is a directory, and with [`JugglerError::InvalidFile`] when it is not XML.
pub fn load_local_listing(dir: &Path) -> JugglerResult<Listing> {
    let path = listing_path(dir);
    if !path.is_file() {
        return Err(JugglerError::FileNotFound {
            location: path.display().to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "is a directory or missing",
            )),
        });
    }

    tracing::info!("Loading listing {}", path.display());
    let bytes = std::fs::read(&path).map_err(|e| JugglerError::FileNotFound {
        location: path.display().to_string(),
        source: Box::new(e),
    })?;
    parse_listing(&bytes, ListingRoot::from(dir))
}

/// Write `listing` to the repository `dir`. Returns the file written.
pub fn store_listing(listing: &Listing, dir: &Path) -> JugglerResult<PathBuf> {
    let path = listing_path(dir);
    let xml = write_listing(listing)?;
    std::fs::write(&path, xml)?;
    tracing::info!("Stored listing {}", path.display());
    Ok(path)
}

/// What [`prepare_local_repository`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepareResult {
    /// The directory did not exist; it was created along with an empty listing.
    Created,
    /// The directory existed without a listing; an empty one was written.
    ListingCreated,
    /// The directory already was a repository.
    AlreadyPrepared,
}

/// Make `dir` a valid repository.
///
/// Creates the directory if needed and writes an empty listing if none is
/// present. Fails with [`JugglerError::InvalidRepository`] if `dir` exists
/// but is not a directory.
pub fn prepare_local_repository(dir: &Path) -> JugglerResult<PrepareResult> {
    if dir.exists() && !dir.is_dir() {
        return Err(JugglerError::InvalidRepository {
            path: dir.display().to_string(),
        });
    }

    let created = juggler_util::fs::ensure_dir(dir)?;
    if listing_path(dir).exists() {
        return Ok(PrepareResult::AlreadyPrepared);
    }

    store_listing(&Listing::new(dir), dir)?;
    tracing::info!("Prepared repository {}", dir.display());
    Ok(if created {
        PrepareResult::Created
    } else {
        PrepareResult::ListingCreated
    })
}
