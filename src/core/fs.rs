//! # Directory Snapshot
//!
//! A point-in-time listing of one directory: ordered entries with the
//! filesystem's type hint attached. The snapshot is built in a single
//! enumeration pass and never re-sorted: entries appear in whatever order
//! the filesystem yields them, dotfiles included.
//!
//! `.` and `..` are listed first so they are always navigable; `read_dir`
//! does not report them itself.

use log::warn;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem type hint for one entry, as reported by the directory
/// enumeration without following symlinks. An undeterminable type maps to
/// `Unknown` and is not resolved any further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    fn from_file_type(file_type: fs::FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_block_device() {
            EntryKind::BlockDevice
        } else if file_type.is_char_device() {
            EntryKind::CharDevice
        } else if file_type.is_fifo() {
            EntryKind::Fifo
        } else if file_type.is_socket() {
            EntryKind::Socket
        } else {
            EntryKind::Unknown
        }
    }
}

/// One member of a directory listing.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

/// Failure to enumerate a directory (permission, not-a-directory, removed
/// mid-flight). Fatal at startup; reported inline during navigation.
#[derive(Debug)]
pub enum SnapshotError {
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Unreadable { path, source } => {
                write!(f, "cannot read directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Unreadable { source, .. } => Some(source),
        }
    }
}

/// Ordered, point-in-time listing of a directory. Replaced wholesale on
/// every descent; no history is kept.
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    entries: Vec<Entry>,
}

impl DirectorySnapshot {
    /// Enumerate `path` into a snapshot.
    ///
    /// A single pass appends into a growable vector, so a directory that
    /// changes while being read can never desynchronize a pre-counted
    /// length. An empty directory yields just the two dot entries.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let read_dir = fs::read_dir(path).map_err(|source| SnapshotError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = vec![
            Entry {
                name: ".".to_string(),
                kind: EntryKind::Directory,
            },
            Entry {
                name: "..".to_string(),
                kind: EntryKind::Directory,
            },
        ];

        for dent in read_dir {
            let dent = match dent {
                Ok(dent) => dent,
                Err(e) => {
                    // An entry that vanished mid-enumeration is skipped, not
                    // a failure of the whole listing.
                    warn!("Skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            let kind = dent
                .file_type()
                .map(EntryKind::from_file_type)
                .unwrap_or(EntryKind::Unknown);
            entries.push(Entry {
                name: dent.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Test-only constructor for snapshots with hand-picked entries.
    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}
