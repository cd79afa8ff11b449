use miette::Result;

use juggler_core::config::GlobalConfig;
use juggler_util::progress;

use crate::cli::SourceArgs;

pub fn exec(config: &GlobalConfig, source: &SourceArgs) -> Result<()> {
    let listing = super::load_listing(config, source)?;
    if listing.is_empty() {
        progress::status_warn("Empty", &format!("no packages in {}", listing.root()));
        return Ok(());
    }

    for package in listing.packages() {
        let builds: Vec<String> = package.builds().map(ToString::to_string).collect();
        println!(
            "{} ({}): {}",
            package.name(),
            package.flavor(),
            builds.join(", ")
        );
    }
    Ok(())
}
