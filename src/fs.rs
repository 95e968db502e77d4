// ==============================================================================
// Filesystem Contract
// ==============================================================================
//
// The organizer only ever needs four operations on the target directory. They
// live behind `Filesystem` so the same grouping code can run against the real
// disk or against an in-memory copy of a listing (dry runs, tests).

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The filesystem operations the organizer consumes.
pub trait Filesystem {
    /// Names of the entries directly inside `dir`, in no particular order.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Whether anything (file, directory, symlink) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single new directory. Fails if `path` already exists.
    fn create_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Move `from` to `to`. Fails if `to` already exists.
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real filesystem, via `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl Filesystem for RealFs {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let name = entry?.file_name();
            // Names that are not valid UTF-8 cannot be compared as text; they
            // are left where they are.
            match name.into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::warn!(name = ?raw, "skipping non UTF-8 entry"),
            }
        }
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        // `symlink_metadata` so that a dangling symlink still counts as taken.
        fs::symlink_metadata(path).is_ok()
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        // `fs::rename` silently replaces an existing file on Unix.
        if self.exists(to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }
        fs::rename(from, to)
    }
}

/// An in-memory set of paths standing in for a directory tree.
///
/// Only tracks which paths exist; there is no file content. Listing a
/// directory returns every tracked path whose parent it is.
/// Moving a directory does not carry its tracked children along, which is
/// enough for a single-level organize run where folders are only ever created
/// empty and then filled.
#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    entries: BTreeSet<PathBuf>,
    /// Directories that can be listed even while they hold no entries.
    roots: BTreeSet<PathBuf>,
}

impl MemoryFs {
    /// A tree holding `dir/name` for every name in `names`.
    #[must_use]
    pub fn with_entries<I, S>(dir: &Path, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .map(|name| dir.join(name.as_ref()))
            .collect();
        MemoryFs {
            entries,
            roots: BTreeSet::from([dir.to_path_buf()]),
        }
    }

    /// Copy the current listing of `dir` from another filesystem.
    pub fn snapshot(source: &impl Filesystem, dir: &Path) -> io::Result<Self> {
        Ok(Self::with_entries(dir, source.list_entries(dir)?))
    }

    /// Every tracked path, sorted.
    #[must_use]
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

impl Filesystem for MemoryFs {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>> {
        let names: Vec<String> = self
            .entries
            .iter()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        if !self.roots.contains(dir) && !self.entries.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", dir.display()),
            ));
        }
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        self.entries.contains(path)
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        if !self.entries.insert(path.to_path_buf()) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }
        Ok(())
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if !self.entries.contains(from) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", from.display()),
            ));
        }
        if self.entries.contains(to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }
        self.entries.remove(from);
        self.entries.insert(to.to_path_buf());
        Ok(())
    }
}
