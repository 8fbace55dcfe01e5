//! File-system collaborator consumed by [`fs_ops`](crate::fs_ops).
//!
//! The trait is the minimal "native file API" capability the rest of the
//! crate needs: existence checks, copy/move/delete, listing, stat. The
//! default implementation passes through to `std::fs`.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Stat result for a file or directory.
#[derive(Clone, Copy, Debug)]
pub struct PathProperties {
    /// Creation time, when the platform records one.
    pub created: Option<SystemTime>,
    /// Last access time, when available.
    pub accessed: Option<SystemTime>,
    /// Last modification time, when available.
    pub modified: Option<SystemTime>,
    /// Size in bytes.
    pub size: u64,
    /// Whether the path refers to a directory.
    pub is_dir: bool,
    /// Whether the path is read-only.
    pub is_read_only: bool,
}

/// Directory entry returned by [`FileSystem::read_dir`].
#[derive(Clone, Debug)]
pub struct DirEntryInfo {
    /// Base name (no parent path)
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Whether this entry itself is a symbolic link.
    pub is_symlink: bool,
    /// File size in bytes (`None` for directories or when unavailable).
    pub size: Option<u64>,
    /// Last modified timestamp (when available).
    pub modified: Option<SystemTime>,
}

/// File system abstraction.
pub trait FileSystem: Send + Sync {
    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// List entries of a directory.
    fn read_dir(&self, dir: &Path) -> std::io::Result<Vec<DirEntryInfo>>;
    /// Stat a file or directory.
    fn properties(&self, path: &Path) -> std::io::Result<PathProperties>;
    /// Canonicalize a path (best-effort absolute normalization).
    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf>;
    /// Create a directory.
    fn create_dir(&self, path: &Path) -> std::io::Result<()>;
    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;
    /// Rename/move a path.
    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()>;
    /// Remove a file.
    fn remove_file(&self, path: &Path) -> std::io::Result<()>;
    /// Remove an empty directory.
    fn remove_dir(&self, path: &Path) -> std::io::Result<()>;
    /// Remove a directory and all of its contents (recursive).
    fn remove_dir_all(&self, path: &Path) -> std::io::Result<()>;
    /// Copy a file.
    ///
    /// Returns the number of bytes copied (mirrors `std::fs::copy`).
    fn copy_file(&self, from: &Path, to: &Path) -> std::io::Result<u64>;
}

/// Default filesystem implementation using `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, dir: &Path) -> std::io::Result<Vec<DirEntryInfo>> {
        let mut out = Vec::new();
        let rd = std::fs::read_dir(dir)?;
        for e in rd {
            let e = match e {
                Ok(v) => v,
                Err(_) => continue,
            };
            let ft = match e.file_type() {
                Ok(v) => v,
                Err(_) => continue,
            };
            let name = e.file_name().to_string_lossy().to_string();
            let path = e.path();
            let meta = e.metadata().ok();
            let modified = meta.as_ref().and_then(|m| m.modified().ok());
            let is_dir = ft.is_dir();
            let is_symlink = ft.is_symlink();
            let size = if is_dir {
                None
            } else {
                meta.as_ref().filter(|m| m.is_file()).map(|m| m.len())
            };
            out.push(DirEntryInfo {
                name,
                path,
                is_dir,
                is_symlink,
                size,
                modified,
            });
        }
        Ok(out)
    }

    fn properties(&self, path: &Path) -> std::io::Result<PathProperties> {
        let md = std::fs::metadata(path)?;
        Ok(PathProperties {
            created: md.created().ok(),
            accessed: md.accessed().ok(),
            modified: md.modified().ok(),
            size: md.len(),
            is_dir: md.is_dir(),
            is_read_only: md.permissions().readonly(),
        })
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn create_dir(&self, path: &Path) -> std::io::Result<()> {
        std::fs::create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        std::fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> std::io::Result<()> {
        std::fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> std::io::Result<()> {
        std::fs::remove_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> std::io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> std::io::Result<u64> {
        std::fs::copy(from, to)
    }
}
