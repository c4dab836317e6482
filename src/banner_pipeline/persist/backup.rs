use std::ffi::OsString;
use std::fs::Permissions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};
use crate::banner_pipeline::common::error::{BannerError, Result};

/// Sibling path of `path` with `suffix` appended to the full file name,
/// so `banner.bmp` becomes `banner.bmp.bak`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Replaces `path` with `bytes` through a temporary file in the same
/// directory followed by a rename. Readers never see a partial file.
///
/// An existing file keeps its permissions; a new one gets the temp file
/// defaults.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let permissions = std::fs::metadata(path).ok().map(|meta| meta.permissions());
    write_staged(path, bytes, permissions)
}

fn write_staged(path: &Path, bytes: &[u8], permissions: Option<Permissions>) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.flush()?;
    if let Some(permissions) = permissions {
        staged.as_file().set_permissions(permissions)?;
    }
    staged.as_file().sync_all()?;

    staged
        .persist(path)
        .map_err(|e| BannerError::OutputWriteError(format!("{}: {}", path.display(), e.error)))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(())
}

/// Saves the original banner beside itself, then overwrites it.
#[derive(Debug, Clone)]
pub struct BackupPersister {
    suffix: String,
    create_backup: bool,
}

impl Default for BackupPersister {
    fn default() -> Self {
        Self::new(".bak")
    }
}

impl BackupPersister {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            create_backup: true,
        }
    }

    pub fn without_backup() -> Self {
        Self {
            create_backup: false,
            ..Self::default()
        }
    }

    /// Writes `original` to the backup path, then `output` over `target`.
    ///
    /// `original` must be the bytes read from `target`; the backup is written
    /// from them directly so it is byte-identical to what was decoded. If the
    /// backup cannot be written, `target` is left untouched.
    ///
    /// Both files carry the permissions `target` had before the update.
    ///
    /// Returns the backup path when one was written.
    pub fn persist(&self, target: &Path, original: &[u8], output: &[u8]) -> Result<Option<PathBuf>> {
        let permissions = std::fs::metadata(target).ok().map(|meta| meta.permissions());

        let backup = if self.create_backup {
            let backup = backup_path(target, &self.suffix);
            write_staged(&backup, original, permissions.clone())
                .map_err(|e| BannerError::BackupError(format!("{}: {}", backup.display(), e)))?;
            info!(backup = %backup.display(), "Backed up original banner");
            Some(backup)
        } else {
            None
        };

        write_staged(target, output, permissions)?;
        info!(path = %target.display(), "Banner updated");

        Ok(backup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_path_appends_to_file_name() {
        assert_eq!(
            backup_path(Path::new("assets/banner.bmp"), ".bak"),
            PathBuf::from("assets/banner.bmp.bak")
        );
        assert_eq!(backup_path(Path::new("banner"), ".orig"), PathBuf::from("banner.orig"));
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.bmp");
        std::fs::write(&path, b"old contents that are longer").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_persist_writes_backup_then_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.bmp");
        std::fs::write(&path, b"original").unwrap();
        std::fs::write(dir.path().join("banner.bmp.bak"), b"stale backup").unwrap();

        let backup = BackupPersister::default()
            .persist(&path, b"original", b"composited")
            .unwrap();

        assert_eq!(backup, Some(dir.path().join("banner.bmp.bak")));
        assert_eq!(std::fs::read(dir.path().join("banner.bmp.bak")).unwrap(), b"original");
        assert_eq!(std::fs::read(&path).unwrap(), b"composited");
    }

    #[test]
    fn test_persist_without_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.bmp");
        std::fs::write(&path, b"original").unwrap();

        let backup = BackupPersister::without_backup()
            .persist(&path, b"original", b"composited")
            .unwrap();

        assert_eq!(backup, None);
        assert!(!dir.path().join("banner.bmp.bak").exists());
    }

    #[test]
    fn test_failed_backup_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.bmp");
        std::fs::write(&path, b"original").unwrap();
        // a directory where the backup file should go makes the rename fail
        std::fs::create_dir(dir.path().join("banner.bmp.bak")).unwrap();

        let result = BackupPersister::default().persist(&path, b"original", b"composited");

        assert!(matches!(result, Err(BannerError::BackupError(_))));
        assert_eq!(std::fs::read(&path).unwrap(), b"original");
    }

    #[cfg(unix)]
    #[test]
    fn test_persist_keeps_banner_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.bmp");
        std::fs::write(&path, b"original").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let backup = BackupPersister::default()
            .persist(&path, b"original", b"composited")
            .unwrap()
            .unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), 0o644);
        assert_eq!(mode(&backup), 0o644);
        assert_eq!(std::fs::read(&path).unwrap(), b"composited");
    }
}
