//! Single-entry archive installation.
//!
//! Extracts one known file from a ZIP buffer into a target directory,
//! lifts it out of its archive subdirectory, and removes the then-empty
//! subdirectory.

use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

/// Errors from installing an archive entry.
#[derive(Error, Debug)]
pub enum InstallError {
    /// Filesystem failure while writing, moving, or cleaning up.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The buffer is not a readable ZIP archive.
    #[error("Archive error: {0}")]
    Archive(String),

    /// The archive does not contain the requested entry.
    #[error("Entry '{0}' not found in archive")]
    MissingEntry(String),

    /// The entry path would land outside the target directory.
    #[error("Invalid path in archive: {0}")]
    InvalidPath(String),
}

/// Extract `entry_path` from `archive` and install it directly under `dest`.
///
/// The entry is first written to `dest/<entry_path>`, then renamed to
/// `dest/<file name>`; an existing file there is overwritten. The
/// intermediate directory is removed afterwards and must be empty.
///
/// Returns the absolute path of the installed file. Symlinks in `dest` are
/// not resolved, so the path stays under the directory the caller named.
pub fn install_entry(archive: &[u8], entry_path: &str, dest: &Path) -> Result<PathBuf, InstallError> {
    let mut zip =
        ZipArchive::new(Cursor::new(archive)).map_err(|e| InstallError::Archive(e.to_string()))?;

    let mut entry = match zip.by_name(entry_path) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(InstallError::MissingEntry(entry_path.to_string()));
        }
        Err(e) => return Err(InstallError::Archive(e.to_string())),
    };

    // Sanitize path to prevent Zip Slip
    let relative_path = entry
        .enclosed_name()
        .ok_or_else(|| InstallError::InvalidPath(entry_path.to_string()))?;
    let file_name = relative_path
        .file_name()
        .ok_or_else(|| InstallError::InvalidPath(entry_path.to_string()))?
        .to_owned();

    let staged_path = dest.join(&relative_path);
    let staging_dir = staged_path
        .parent()
        .filter(|p| *p != dest)
        .map(Path::to_path_buf);

    if let Some(dir) = &staging_dir {
        fs::create_dir_all(dir)?;
    }

    {
        let mut outfile = File::create(&staged_path)?;
        io::copy(&mut entry, &mut outfile)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Some(mode) = entry.unix_mode() {
            fs::set_permissions(&staged_path, fs::Permissions::from_mode(mode))?;
        }
    }

    debug!(entry = entry_path, path = %staged_path.display(), "extracted archive entry");

    let final_path = dest.join(file_name);
    if staged_path != final_path {
        fs::rename(&staged_path, &final_path)?;
    }

    if let Some(dir) = staging_dir {
        fs::remove_dir(&dir)?;
    }

    Ok(std::path::absolute(&final_path)?)
}
