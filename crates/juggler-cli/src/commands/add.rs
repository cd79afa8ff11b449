use std::path::Path;

use miette::Result;

use juggler_core::config::GlobalConfig;
use juggler_repo::repository::{load_local_listing, store_listing};
use juggler_util::progress;

pub fn exec(
    config: &GlobalConfig,
    name: &str,
    version: &str,
    flavor: Option<&str>,
    repo: Option<&Path>,
) -> Result<()> {
    let dir = super::local_repository(config, repo);
    let flavor = flavor.unwrap_or(&config.defaults.flavor);

    let mut listing = load_local_listing(&dir)?;
    let entry = listing.add_package(name, version, flavor)?;
    store_listing(&listing, &dir)?;

    progress::status(
        "Added",
        &format!("{} {} ({})", entry.name(), entry.version(), entry.flavor()),
    );
    println!("{}", entry.filename());
    Ok(())
}
