//! Command dispatch and handler modules.

mod add;
mod init;
mod list;
mod resolve;

use std::path::{Path, PathBuf};

use miette::Result;

use juggler_core::config::GlobalConfig;
use juggler_core::listing::Listing;
use juggler_repo::{remote, repository, LISTING_FILENAME};
use juggler_util::fs::find_ancestor_with;
use juggler_util::progress;

use crate::cli::{Cli, Command, SourceArgs};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = GlobalConfig::load()?;
    tracing::debug!(config = %GlobalConfig::default_path().display(), "Loaded configuration");
    match cli.command {
        Command::Init { dir } => init::exec(&config, dir.as_deref()),
        Command::Add {
            name,
            version,
            flavor,
            repo,
        } => add::exec(&config, &name, &version, flavor.as_deref(), repo.as_deref()),
        Command::Resolve {
            name,
            spec,
            flavor,
            ignore_local,
            json,
            source,
        } => resolve::exec(
            &config,
            &source,
            &name,
            spec.as_deref(),
            flavor.as_deref(),
            ignore_local,
            json,
        ),
        Command::List { source } => list::exec(&config, &source),
    }
}

/// Local repository to work on: the explicit directory, else the enclosing
/// repository of the working directory, else the configured one, else `.`.
fn local_repository(config: &GlobalConfig, explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    std::env::current_dir()
        .ok()
        .and_then(|cwd| find_ancestor_with(&cwd, LISTING_FILENAME))
        .or_else(|| config.local_repository())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load the listing selected by `--repo`/`--remote`, falling back to the
/// configured remote only when no local repository can be found.
fn load_listing(config: &GlobalConfig, source: &SourceArgs) -> Result<Listing> {
    let remote_url = match (&source.remote, &source.repo) {
        (Some(url), _) => Some(url.clone()),
        (None, Some(_)) => None,
        (None, None) => {
            let local = local_repository(config, None);
            if repository::is_repository(&local) {
                None
            } else {
                config.repository.remote.clone()
            }
        }
    };

    match remote_url {
        Some(url) => {
            tracing::debug!(%url, "Using remote listing");
            let pb = progress::spinner(&format!("Fetching {}", remote::listing_url(&url)));
            let listing = remote::load_remote_listing(&url);
            pb.finish_and_clear();
            Ok(listing?)
        }
        None => {
            let dir = local_repository(config, source.repo.as_deref());
            tracing::debug!(dir = %dir.display(), "Using local listing");
            Ok(repository::load_local_listing(&dir)?)
        }
    }
}
