use std::path::Path;

use miette::Result;

use juggler_core::config::GlobalConfig;
use juggler_repo::repository::{prepare_local_repository, PrepareResult};

pub fn exec(config: &GlobalConfig, dir: Option<&Path>) -> Result<()> {
    let dir = dir
        .map(Path::to_path_buf)
        .or_else(|| config.local_repository())
        .unwrap_or_else(|| ".".into());

    match prepare_local_repository(&dir)? {
        PrepareResult::Created => println!("Created repository at {}", dir.display()),
        PrepareResult::ListingCreated => println!("Created listing in {}", dir.display()),
        PrepareResult::AlreadyPrepared => {
            println!("{} is already a repository", dir.display())
        }
    }
    Ok(())
}
