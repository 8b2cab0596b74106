//! Log-target registry.
//!
//! Holds the set of file paths every file-level record is mirrored to, plus
//! capacity-bounded management of a log directory. The registry stores paths
//! only, never open handles: writability is proven with a probe open at
//! insertion time and each record reopens the file in append mode.

use std::{
    collections::BTreeSet,
    fs::{self, OpenOptions},
    io,
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
};

use chrono::Local;

use crate::{config, diag};

static TARGETS: LazyLock<Mutex<BTreeSet<PathBuf>>> = LazyLock::new(Default::default);

const DIR_PROBE_NAME: &str = ".tintlog-dir-probe";

/// Proves `path` is usable as a writable file: creates missing parent
/// directories, opens the file for write (truncating existing content), and
/// deletes the probe again if the file did not previously exist.
fn probe(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    let existed = path.exists();
    drop(
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?,
    );
    if !existed && let Err(err) = fs::remove_file(path) {
        diag::error(format_args!(
            "[tintlog] failed to remove probe file '{}': {err}; a stray file may remain",
            path.display()
        ));
    }
    Ok(())
}

/// Adds `path` to the target set. Fails if the path cannot be opened for
/// writing or is already a member.
pub fn add_log_target<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if let Err(err) = probe(path) {
        diag::warn(format_args!(
            "[tintlog] failed to add log target '{}': {err}",
            path.display()
        ));
        return false;
    }
    let inserted = TARGETS.lock().unwrap().insert(path.to_path_buf());
    if !inserted {
        diag::warn(format_args!(
            "[tintlog] failed to add log target '{}'; target already exists",
            path.display()
        ));
        return false;
    }
    diag::info(format_args!(
        "[tintlog] log target '{}' added",
        path.display()
    ));
    true
}

/// Removes `path` from the target set. Fails if it is not a member.
pub fn remove_log_target<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let removed = TARGETS.lock().unwrap().remove(path);
    if !removed {
        diag::warn(format_args!(
            "[tintlog] failed to remove log target '{}'; target doesn't exist",
            path.display()
        ));
        return false;
    }
    diag::info(format_args!(
        "[tintlog] log target '{}' removed",
        path.display()
    ));
    true
}

/// Empties the target set unconditionally.
pub fn clear_log_targets() {
    TARGETS.lock().unwrap().clear();
    diag::info(format_args!("[tintlog] log targets reset"));
}

/// Paths to mirror the current record to, cloned out of the lock so file I/O
/// happens unlocked.
pub(crate) fn snapshot() -> Vec<PathBuf> {
    TARGETS.lock().unwrap().iter().cloned().collect()
}

/// Caps the number of files kept in a managed directory. Rejects 0.
pub fn set_max_files_in_dir(count: u16) -> bool {
    if count == 0 {
        diag::warn(format_args!(
            "[tintlog] can't set maximum file count to 0"
        ));
        return false;
    }
    config::set_max_dir_files(count);
    true
}

/// Current managed-directory cap. `5` by default.
pub fn max_files_in_dir() -> u16 {
    config::max_dir_files()
}

/// Opens a fresh auto-named log file in `dir`, rotating the oldest files out
/// first so the directory never exceeds the cap, and registers it as a
/// target. Returns `None` if the directory is unusable.
pub fn log_to_dir<P: AsRef<Path>>(dir: P, base_name: &str) -> Option<PathBuf> {
    let dir = dir.as_ref();
    if let Err(err) = probe(&dir.join(DIR_PROBE_NAME)) {
        diag::warn(format_args!(
            "[tintlog] directory '{}' is not writable: {err}",
            dir.display()
        ));
        return None;
    }
    if let Err(err) = rotate(dir) {
        diag::warn(format_args!(
            "[tintlog] failed to rotate directory '{}': {err}",
            dir.display()
        ));
        return None;
    }

    let stamp = Local::now().format("%F %H.%M.%S%.3f");
    let target = dir.join(format!("{base_name} {stamp}.log"));
    if !add_log_target(&target) {
        return None;
    }
    Some(target)
}

/// Deletes the oldest files (by modification time) until one slot is free
/// under the cap. Listing and deleting are not transactional across
/// processes; the deleted set is a snapshot-based best effort.
fn rotate(dir: &Path) -> io::Result<()> {
    let cap = config::max_dir_files() as usize;
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let modified = entry.metadata()?.modified()?;
        entries.push((entry.path(), modified));
    }
    if entries.len() < cap {
        return Ok(());
    }

    entries.sort_by_key(|(_, modified)| *modified);
    let excess = entries.len() - cap + 1;
    diag::info(format_args!(
        "[tintlog] removing {excess} file(s) from '{}' (max files: {cap})",
        dir.display()
    ));
    for (path, _) in entries.into_iter().take(excess) {
        if let Err(err) = fs::remove_file(&path) {
            diag::error(format_args!(
                "[tintlog] failed to remove file '{}': {err}; a stray file may remain",
                path.display()
            ));
        }
    }
    Ok(())
}
