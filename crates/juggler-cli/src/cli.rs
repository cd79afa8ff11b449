//! CLI argument definitions for Juggler.
//!
//! Uses `clap` derive macros. Each command corresponds to a handler in the
//! [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "juggler",
    version,
    about = "Dependency listing for compiled build artifacts",
    long_about = "Juggler keeps a listing of named, flavored, versioned builds per repository \
                  and resolves version requests such as `v1.2` or `latest` to a single build."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a local repository (directory plus empty listing)
    Init {
        /// Repository directory (defaults to the configured local repository, then `.`)
        dir: Option<PathBuf>,
    },

    /// Register a build in a local repository
    Add {
        /// Package name
        name: String,
        /// Build version, e.g. v1.0-b3 or v1.0-local
        version: String,
        /// Package flavor
        #[arg(short, long)]
        flavor: Option<String>,
        /// Repository directory
        #[arg(long)]
        repo: Option<PathBuf>,
    },

    /// Resolve a version request to a single build
    Resolve {
        /// Package name
        name: String,
        /// Version request: latest, v1, v1.2, v1.2-b3, v1.2-local
        spec: Option<String>,
        /// Package flavor
        #[arg(short, long)]
        flavor: Option<String>,
        /// Never pick local builds
        #[arg(long)]
        ignore_local: bool,
        /// Print the resolved entry as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List every package, flavor and build
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where to read a listing from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Local repository directory
    #[arg(long, conflicts_with = "remote")]
    pub repo: Option<PathBuf>,
    /// Base URL of a remote repository
    #[arg(long)]
    pub remote: Option<String>,
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
