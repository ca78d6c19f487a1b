// src/integrations/conflicts.rs

//! Conflict resolver
//!
//! Compares the staging directory's top-level entries against the project
//! tree and asks the caller, per colliding path, whether the download may
//! overwrite the existing file. Declined (or unprompted) conflicts land on
//! the blacklist consumed by the merge engine.
//!
//! Detection runs at top-level-entry granularity: the blacklist's prefix
//! matching later removes whole subtrees, so one pass over the archive's
//! top-level manifest is enough.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Caller-supplied overwrite decision for one colliding path
///
/// Receives the would-be destination path and its existing metadata; returns
/// true to overwrite. Absence of a handler means "never overwrite".
pub type ConflictHandler<'a> = dyn FnMut(&Path, &fs::Metadata) -> Result<bool> + 'a;

/// Relative paths excluded from the merge
///
/// Entries ending in `/` are directory-exact exclusions; all entries exclude
/// their whole subtree by string-prefix matching. Fully computed before the
/// merge engine starts copying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: Vec<String>,
}

impl Blacklist {
    /// Empty blacklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pre-computed entries
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Record a relative path as excluded
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// The recorded entries, in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a relative path is excluded from the merge
    ///
    /// For each entry in order: a trailing-separator entry matches when the
    /// path plus a trailing separator equals it exactly; any entry matches
    /// when the path starts with it. The first matching entry wins.
    pub fn excludes(&self, relative: &str) -> bool {
        for entry in &self.entries {
            if entry.ends_with('/') && format!("{relative}/") == *entry {
                return true;
            }
            if relative.starts_with(entry.as_str()) {
                return true;
            }
        }
        false
    }
}

/// Compute the blacklist for one `add` run
///
/// Walks the staging directory's top-level entries. For each entry whose
/// destination already exists in the project, the handler decides whether to
/// overwrite; declined conflicts are recorded (directories with a trailing
/// separator). A stat failure other than NotFound is fatal.
pub fn resolve_conflicts(
    staging_dir: &Path,
    project_dir: &Path,
    mut handler: Option<&mut ConflictHandler<'_>>,
) -> Result<Blacklist> {
    let mut blacklist = Blacklist::new();

    let mut entries = fs::read_dir(staging_dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let file_name = entry.file_name();
        let dest = project_dir.join(&file_name);

        let metadata = match fs::metadata(&dest) {
            Ok(metadata) => metadata,
            // NotFound is the only expected stat outcome: no conflict
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };

        let overwrite = match handler.as_mut() {
            Some(h) => h(&dest, &metadata)?,
            None => false,
        };

        if !overwrite {
            let mut relative = file_name.to_string_lossy().into_owned();
            if metadata.is_dir() {
                relative.push('/');
            }
            debug!("excluding {} from merge", relative);
            blacklist.push(relative);
        }
    }

    Ok(blacklist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_trailing_separator_entry_matches_directory_and_subtree() {
        let blacklist = Blacklist::from_entries(vec!["b/".to_string()]);

        // exact directory match via the trailing-separator arm
        assert!(blacklist.excludes("b"));
        // subtree match via the prefix arm
        assert!(blacklist.excludes("b/c.txt"));
        assert!(blacklist.excludes("b/d/e.txt"));
        // no match outside the subtree
        assert!(!blacklist.excludes("ba"));
        assert!(!blacklist.excludes("a.txt"));
    }

    #[test]
    fn test_bare_entry_matches_by_prefix() {
        let blacklist = Blacklist::from_entries(vec!["b".to_string()]);

        assert!(blacklist.excludes("b"));
        assert!(blacklist.excludes("b/c.txt"));
        // string-prefix matching: a sibling sharing the prefix also matches
        assert!(blacklist.excludes("ba"));
        assert!(!blacklist.excludes("a.txt"));
    }

    #[test]
    fn test_no_conflicts_yields_empty_blacklist() {
        let staging = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(staging.path().join("a.txt"), b"new").unwrap();

        let blacklist = resolve_conflicts(staging.path(), project.path(), None).unwrap();
        assert!(blacklist.is_empty());
    }

    #[test]
    fn test_default_policy_never_overwrites() {
        let staging = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(staging.path().join("a.txt"), b"new").unwrap();
        fs::write(project.path().join("a.txt"), b"old").unwrap();

        let blacklist = resolve_conflicts(staging.path(), project.path(), None).unwrap();
        assert_eq!(blacklist.entries(), ["a.txt"]);
    }

    #[test]
    fn test_directory_conflict_recorded_with_separator() {
        let staging = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::create_dir(staging.path().join("b")).unwrap();
        fs::create_dir(project.path().join("b")).unwrap();

        let blacklist = resolve_conflicts(staging.path(), project.path(), None).unwrap();
        assert_eq!(blacklist.entries(), ["b/"]);
    }

    #[test]
    fn test_handler_can_accept_overwrite() {
        let staging = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(staging.path().join("a.txt"), b"new").unwrap();
        fs::write(project.path().join("a.txt"), b"old").unwrap();

        let mut seen = Vec::new();
        let mut handler = |path: &Path, metadata: &fs::Metadata| {
            seen.push(path.to_path_buf());
            assert!(metadata.is_file());
            Ok(true)
        };

        let blacklist =
            resolve_conflicts(staging.path(), project.path(), Some(&mut handler)).unwrap();
        assert!(blacklist.is_empty());
        assert_eq!(seen, [project.path().join("a.txt")]);
    }

    #[test]
    fn test_handler_not_invoked_without_conflict() {
        let staging = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(staging.path().join("a.txt"), b"new").unwrap();

        let mut invoked = false;
        let mut handler = |_: &Path, _: &fs::Metadata| {
            invoked = true;
            Ok(false)
        };

        resolve_conflicts(staging.path(), project.path(), Some(&mut handler)).unwrap();
        assert!(!invoked);
    }
}
