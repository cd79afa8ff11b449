use miette::Diagnostic;
use thiserror::Error;

/// Boxed underlying cause carried by [`JugglerError::FileNotFound`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for all Juggler operations.
#[derive(Debug, Error, Diagnostic)]
pub enum JugglerError {
    /// A version or spec was requested from a value that is not text.
    #[error("Invalid type: expected a version string, got {found}")]
    InvalidType { found: String },

    /// Text that does not follow the version grammar.
    #[error("{text} is not a valid version string")]
    #[diagnostic(help("Versions look like `latest`, `v1`, `v1.2`, `v1.2-b3` or `v1.2-local`"))]
    InvalidString { text: String },

    /// A listing could not be located, either on disk or at a remote URL.
    #[error("{location} could not be accessed: {source}")]
    FileNotFound {
        location: String,
        #[source]
        source: BoxedCause,
    },

    /// The listing document is not parseable at all.
    #[error("Parsing error in {location}: {message}")]
    InvalidFile { location: String, message: String },

    /// The repository target exists but is not a directory.
    #[error("Cannot prepare local repository {path}: the destination is not a directory")]
    InvalidRepository { path: String },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration file.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.juggler/config.toml for syntax errors"))]
    Config { message: String },
}

/// Convenience alias for results carrying a [`JugglerError`].
pub type JugglerResult<T> = Result<T, JugglerError>;
