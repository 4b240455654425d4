//! Input file discovery.
//!
//! Expands a glob such as `input/*.json` into the list of matching files. The
//! directory part of the pattern without wildcards is used as the walk root,
//! and every file below it is matched against the full pattern.

use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use log::debug;
use walkdir::WalkDir;

use crate::error_handling::LocateError;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Returns the files matching `pattern`, sorted by path.
///
/// `*` and `?` do not cross directory separators; use `**` to descend into
/// subdirectories. A pattern whose fixed prefix does not exist matches
/// nothing. Sorting pins the order in which files are merged, which in turn
/// decides which duplicate entry survives.
///
/// # Errors
///
/// Returns [`LocateError::InvalidPattern`] for a malformed glob and
/// [`LocateError::Walk`] if a directory below the root cannot be listed.
pub fn locate_files(pattern: &str) -> Result<Vec<PathBuf>, LocateError> {
    let matcher = compile(pattern)?;
    let (root, depth) = walk_root(pattern);

    let walk_from = if root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        root.as_path()
    };
    if !walk_from.exists() {
        debug!("Input root {} does not exist", walk_from.display());
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(walk_from).follow_links(true);
    if let Some(depth) = depth {
        walker = walker.max_depth(depth);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        // A bare pattern like `*.json` is relative to the working directory
        let candidate = if root.as_os_str().is_empty() {
            entry
                .path()
                .strip_prefix(".")
                .unwrap_or(entry.path())
                .to_path_buf()
        } else {
            entry.path().to_path_buf()
        };
        if matcher.is_match(&candidate) {
            files.push(candidate);
        }
    }

    files.sort();
    debug!("Pattern {} matched {} file(s)", pattern, files.len());
    Ok(files)
}

fn compile(pattern: &str) -> Result<GlobMatcher, LocateError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| LocateError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Splits a pattern into its wildcard-free directory prefix and the walk depth
/// needed below it (`None` when `**` makes the depth unbounded).
fn walk_root(pattern: &str) -> (PathBuf, Option<usize>) {
    let path = Path::new(pattern);
    let mut root = PathBuf::new();
    let mut rest = Vec::new();

    for component in path.components() {
        let text = component.as_os_str().to_string_lossy();
        if rest.is_empty() && !text.contains(GLOB_META) {
            root.push(component);
        } else {
            rest.push(component);
        }
    }

    if rest.is_empty() {
        // No wildcards: the pattern names a single file
        return (root, Some(0));
    }

    let unbounded = rest
        .iter()
        .any(|c| matches!(c, Component::Normal(s) if s.to_string_lossy().contains("**")));
    let depth = if unbounded { None } else { Some(rest.len()) };
    (root, depth)
}
