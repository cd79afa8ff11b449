use std::path::{Path, PathBuf};

/// Walk up from `start` until a directory holding `filename` is found.
///
/// Used to locate the enclosing repository when no directory is given.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(filename).is_file())
        .map(Path::to_path_buf)
}

/// Create `path` and any missing parents. Returns `true` if anything was created.
pub fn ensure_dir(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    Ok(true)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~") {
        Some(rest) => {
            let home = std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .unwrap_or_else(|_| ".".to_string());
            Path::new(&home).join(rest.trim_start_matches(['/', '\\']))
        }
        None => PathBuf::from(path),
    }
}
