// src/discovery.rs
//! Walks a project root and filters change events down to analyzable files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, VitalsError};

/// A discovered source file.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Lowercased extension with leading dot, e.g. `.ts`.
    pub extension: String,
    pub size: u64,
    pub modified: SystemTime,
}

impl FileRecord {
    /// Reads metadata for `path`. `None` when the file vanished or metadata
    /// is unreadable.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let meta = fs::metadata(path).ok()?;
        if !meta.is_file() {
            return None;
        }
        Some(Self {
            path: path.to_path_buf(),
            extension: extension_of(path),
            size: meta.len(),
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        })
    }
}

/// What happened to a watched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Deleted,
}

/// A file-system change notification from the hosting watcher.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub path: PathBuf,
}

/// Runs file discovery under `root`.
///
/// Unreadable subdirectories are skipped and counted; the walk itself never
/// fails once the root exists. Results are sorted by path so downstream
/// batching is deterministic.
///
/// # Errors
/// Returns `VitalsError::RootNotFound` when `root` is not a directory.
pub fn discover(root: &Path, config: &Config) -> Result<Vec<FileRecord>> {
    if !root.is_dir() {
        return Err(VitalsError::RootNotFound(root.to_path_buf()));
    }

    // Same component filter `change_applies` uses, so a file the walk
    // yields is always one a change event would reach.
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy(), config)
        });

    let mut records = Vec::new();
    let mut errors = 0usize;
    for item in walker {
        match item {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                if !extension_allowed(path, config) || is_excluded(root, path, config) {
                    continue;
                }
                match FileRecord::from_path(path) {
                    Some(record) => records.push(record),
                    None => errors += 1,
                }
            }
            Err(_) => errors += 1,
        }
    }

    if errors > 0 && config.verbose {
        eprintln!("WARN: Skipped {errors} unreadable entries during file walk");
    }

    records.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(records)
}

/// True when a change event's path passes the same filters discovery applies.
/// Pure path inspection, so it also works for deleted files.
#[must_use]
pub fn change_applies(root: &Path, event: &ChangeEvent, config: &Config) -> bool {
    let rel = event.path.strip_prefix(root).unwrap_or(&event.path);
    let inside_pruned = rel.components().any(|c| {
        let name = c.as_os_str().to_string_lossy();
        // The final component is the file itself, not a directory, but a
        // dotfile or ignored name there is not analyzable either.
        should_prune(&name, config)
    });
    !inside_pruned
        && extension_allowed(&event.path, config)
        && !is_excluded(root, &event.path, config)
}

fn should_prune(name: &str, config: &Config) -> bool {
    name.starts_with('.') || config.scan.ignore_dirs.iter().any(|d| d == name)
}

fn extension_allowed(path: &Path, config: &Config) -> bool {
    let ext = extension_of(path);
    !ext.is_empty()
        && config
            .scan
            .extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}

fn is_excluded(root: &Path, path: &Path, config: &Config) -> bool {
    if config.exclude_patterns.is_empty() {
        return false;
    }
    let rel = path.strip_prefix(root).unwrap_or(path);
    let normalized = rel.to_string_lossy().replace('\\', "/");
    config.is_excluded(&normalized)
}
