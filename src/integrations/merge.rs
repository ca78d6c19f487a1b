// src/integrations/merge.rs

//! Merge engine
//!
//! Copies the staging tree into the project directory, honoring the
//! blacklist computed by the conflict resolver. Excluded directories prune
//! their whole subtree. The inclusion decision is made first; the
//! file-creation callback fires afterwards, only for files that did not
//! already exist at the destination.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::conflicts::Blacklist;
use crate::error::{Error, Result};

/// Notification for every newly created file, given its path relative to the
/// staging root. A side channel, not a decision point.
pub type OnFileCreate<'a> = dyn FnMut(&Path) + 'a;

/// Copy the staging tree into the project directory
///
/// The staging root itself always passes; every other entry is filtered by
/// its relative path against the blacklist. A copy error is fatal and leaves
/// the project partially merged.
pub fn merge_tree(
    staging_dir: &Path,
    project_dir: &Path,
    blacklist: &Blacklist,
    mut on_file_create: Option<&mut OnFileCreate<'_>>,
) -> Result<()> {
    fs::create_dir_all(project_dir)?;

    let mut walker = WalkDir::new(staging_dir).into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry
            .map_err(|e| Error::IoError(format!("failed to walk staging directory: {e}")))?;
        let path = entry.path();

        if path == staging_dir {
            continue;
        }

        let relative = path.strip_prefix(staging_dir).map_err(|_| {
            Error::IoError(format!(
                "staging entry {} escapes {}",
                path.display(),
                staging_dir.display()
            ))
        })?;

        if blacklist.excludes(&relative.to_string_lossy()) {
            debug!("skipping blacklisted entry {}", relative.display());
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            continue;
        }

        let dest = project_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // Inclusion decided above; notify before the copy is reported as
        // accepted, and only for files that are new to the project tree.
        let created = !dest.exists();
        if created {
            if let Some(notify) = on_file_create.as_mut() {
                notify(relative);
            }
        }

        fs::copy(path, &dest).map_err(|e| {
            Error::IoError(format!("failed to copy {}: {e}", relative.display()))
        })?;
    }

    Ok(())
}
