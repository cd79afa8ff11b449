use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use juggler_core::config::GlobalConfig;
use juggler_core::version::{parse_spec, VersionSpec};
use juggler_util::progress;

use crate::cli::SourceArgs;

/// JSON shape printed by `juggler resolve --json`.
#[derive(Debug, Serialize)]
struct ResolvedBuild<'a> {
    name: &'a str,
    version: String,
    flavor: &'a str,
    filename: String,
    location: String,
}

pub fn exec(
    config: &GlobalConfig,
    source: &SourceArgs,
    name: &str,
    spec: Option<&str>,
    flavor: Option<&str>,
    ignore_local: bool,
    json: bool,
) -> Result<()> {
    let spec = match spec {
        Some(text) => parse_spec(text)?,
        None => config.pinned_spec(name)?.unwrap_or_else(VersionSpec::latest),
    };
    let flavor = flavor.unwrap_or(&config.defaults.flavor);
    let ignore_local = ignore_local || config.defaults.ignore_local_builds;

    let listing = super::load_listing(config, source)?;
    let Some(entry) = listing
        .query(name)
        .spec(spec)
        .flavor(flavor)
        .ignore_local_build(ignore_local)
        .get()
    else {
        miette::bail!("No build of {name} ({flavor}) matches {spec}");
    };

    if json {
        let resolved = ResolvedBuild {
            name: entry.name(),
            version: entry.version().to_string(),
            flavor: entry.flavor(),
            filename: entry.filename(),
            location: entry.location(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&resolved).into_diagnostic()?
        );
    } else {
        progress::status_info(
            "Resolved",
            &format!("{name} {spec} -> {} ({})", entry.version(), entry.flavor()),
        );
        println!("{}", entry.filename());
    }
    Ok(())
}
