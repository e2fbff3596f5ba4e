//! Notes on disk.
//!
//! A [`NoteStore`] is rooted at the notes directory. Notes are addressed by
//! `/`-separated paths relative to that root, so the same name works on every
//! platform and never points outside the store.

use crate::tags::collect_tags;
use relative_path::{Component, RelativePath, RelativePathBuf};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Note not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Not a notes directory: {}", .0.display())]
    InvalidNotesDir(PathBuf),
    #[error("Note path leaves the notes directory: {0}")]
    OutsideNotes(RelativePathBuf),
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    fn at(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
            _ => IoError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Extension of note files.
pub const NOTE_EXTENSION: &str = "md";

/// The notes directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    /// Opens the store at `root`, which must be an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, IoError> {
        let root = root.into();
        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => Ok(Self { root }),
            Ok(_) => Err(IoError::InvalidNotesDir(root)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(IoError::InvalidNotesDir(root)),
            Err(source) => Err(IoError::Io { path: root, source }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a note and return its raw text
    pub fn read(&self, note: &RelativePath) -> Result<String, IoError> {
        let path = self.locate(note)?;
        fs::read_to_string(&path).map_err(|e| IoError::at(&path, e))
    }

    /// Write raw text to a note, creating missing parent directories
    pub fn write(&self, note: &RelativePath, content: &str) -> Result<(), IoError> {
        let path = self.locate(note)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| IoError::at(parent, e))?;
        }
        fs::write(&path, content).map_err(|e| IoError::at(&path, e))
    }

    /// Every note in the store, sorted by path.
    ///
    /// Hidden files and directories are skipped. Symlinked notes are
    /// included, symlinked directories are not followed, so a link cycle
    /// cannot make the walk loop.
    pub fn notes(&self) -> Result<Vec<RelativePathBuf>, IoError> {
        let mut notes = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).map_err(|e| IoError::at(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| IoError::at(&dir, e))?;
                if entry.file_name().to_string_lossy().starts_with('.') {
                    continue;
                }

                let path = entry.path();
                let file_type = entry.file_type().map_err(|e| IoError::at(&path, e))?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_symlink() && path.is_dir() {
                    log::debug!("Not following symlinked directory {}", path.display());
                } else if is_note(&path) && path.is_file() {
                    match self.relative(&path) {
                        Some(note) => notes.push(note),
                        None => log::warn!("Skipping note with a non UTF-8 path: {}", path.display()),
                    }
                }
            }
        }

        notes.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(notes)
    }

    /// Collect every tag written in any note of the store.
    ///
    /// A note that cannot be read is logged and left out.
    pub fn known_tags(&self) -> Result<Vec<String>, IoError> {
        let notes = self.notes()?;
        let texts: Vec<String> = notes
            .iter()
            .filter_map(|note| match self.read(note) {
                Ok(text) => Some(text),
                Err(e) => {
                    log::warn!("Skipping {note} while collecting tags: {e}");
                    None
                }
            })
            .collect();

        let tags = collect_tags(texts.iter().map(String::as_str));
        log::debug!(
            "Found {} tags in {} notes under {}",
            tags.len(),
            texts.len(),
            self.root.display()
        );
        Ok(tags)
    }

    fn locate(&self, note: &RelativePath) -> Result<PathBuf, IoError> {
        let normalized = note.normalize();
        if matches!(normalized.components().next(), Some(Component::ParentDir)) {
            return Err(IoError::OutsideNotes(note.to_relative_path_buf()));
        }
        Ok(normalized.to_path(&self.root))
    }

    fn relative(&self, path: &Path) -> Option<RelativePathBuf> {
        let rel = path.strip_prefix(&self.root).ok()?;
        RelativePathBuf::from_path(rel).ok()
    }
}

fn is_note(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == NOTE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, NoteStore) {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();
        (dir, store)
    }

    fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn names(notes: &[RelativePathBuf]) -> Vec<&str> {
        notes.iter().map(|note| note.as_str()).collect()
    }

    #[test]
    fn test_scan_notes() {
        // Given a notes directory with notes
        let (dir, store) = create_test_store();
        create_test_file(&dir, "test2.md", "1. one\n2. two");
        create_test_file(&dir, "test1.md", "- [ ] First item\n- Second item");

        // When scanning for notes
        let notes = store.notes().unwrap();

        // Then we find them relative to the root, sorted
        assert_eq!(names(&notes), vec!["test1.md", "test2.md"]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let (dir, store) = create_test_store();
        create_test_file(&dir, "root.md", "root note");
        create_test_file(&dir, "subfolder/nested.md", "nested note");
        create_test_file(&dir, "a/b/deep.md", "deep note");

        let notes = store.notes().unwrap();

        assert_eq!(
            names(&notes),
            vec!["a/b/deep.md", "root.md", "subfolder/nested.md"]
        );
    }

    #[test]
    fn test_ignore_non_note_and_hidden_files() {
        let (dir, store) = create_test_store();
        create_test_file(&dir, "document.md", "note");
        create_test_file(&dir, "image.png", "fake image data");
        create_test_file(&dir, ".draft.md", "hidden note");
        create_test_file(&dir, ".git/HEAD.md", "not a note");

        let notes = store.notes().unwrap();

        assert_eq!(names(&notes), vec!["document.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_followed() {
        use std::os::unix::fs::symlink;

        // Given a directory that links back to the root, and a linked note
        let (dir, store) = create_test_store();
        let note = create_test_file(&dir, "sub/real.md", "#linked");
        symlink(dir.path(), dir.path().join("sub/loop")).unwrap();
        symlink(&note, dir.path().join("alias.md")).unwrap();

        // When scanning
        let notes = store.notes().unwrap();

        // Then the walk ends and sees the linked note, not the linked directory
        assert_eq!(names(&notes), vec!["alias.md", "sub/real.md"]);
    }

    #[test]
    fn test_open_rejects_missing_or_file_root() {
        let (dir, _) = create_test_store();
        let file = create_test_file(&dir, "file.md", "x");

        assert!(matches!(
            NoteStore::open(dir.path().join("missing")),
            Err(IoError::InvalidNotesDir(_))
        ));
        let err = NoteStore::open(&file).unwrap_err();
        assert!(matches!(err, IoError::InvalidNotesDir(ref path) if path == &file));
        assert!(err.to_string().contains("file.md"));
    }

    #[test]
    fn test_read_note_success() {
        let (dir, store) = create_test_store();
        create_test_file(&dir, "test.md", "Test content\n\nmore");

        let content = store.read(RelativePath::new("test.md")).unwrap();
        assert_eq!(content, "Test content\n\nmore");
    }

    #[test]
    fn test_read_note_not_found() {
        let (dir, store) = create_test_store();
        let result = store.read(RelativePath::new("nonexistent.md"));
        assert!(matches!(result, Err(IoError::NotFound(ref path)) if path == &dir.path().join("nonexistent.md")));
    }

    #[test]
    fn test_note_paths_stay_inside_the_store() {
        let (dir, store) = create_test_store();
        create_test_file(&dir, "sub/ok.md", "fine");

        assert_eq!(store.read(RelativePath::new("sub/../sub/ok.md")).unwrap(), "fine");
        assert!(matches!(
            store.read(RelativePath::new("../outside.md")),
            Err(IoError::OutsideNotes(_))
        ));
        assert!(matches!(
            store.write(RelativePath::new("sub/../../x.md"), "nope"),
            Err(IoError::OutsideNotes(_))
        ));
    }

    #[test]
    fn test_write_note_creates_parent_directories() {
        let (dir, store) = create_test_store();
        let note = RelativePath::new("folder/subfolder/new_note.md");
        let content = "- [x] written";

        store.write(note, content).unwrap();

        assert_eq!(store.read(note).unwrap(), content);
        assert!(dir.path().join("folder").join("subfolder").is_dir());
    }

    #[test]
    fn test_write_note_overwrites_existing() {
        let (dir, store) = create_test_store();
        create_test_file(&dir, "existing.md", "- [ ] original");

        let note = RelativePath::new("existing.md");
        store.write(note, "- [x] original").unwrap();

        assert_eq!(store.read(note).unwrap(), "- [x] original");
    }

    #[test]
    fn test_load_known_tags() {
        let (dir, store) = create_test_store();
        create_test_file(&dir, "a.md", "#work stuff\n```\n#code\n```");
        create_test_file(&dir, "b.md", "home #garden and #work");
        create_test_file(&dir, "c.txt", "#ignored");

        assert_eq!(store.known_tags().unwrap(), vec!["garden", "work"]);
    }

    #[test]
    fn test_unreadable_notes_do_not_hide_other_tags() {
        let (dir, store) = create_test_store();
        create_test_file(&dir, "good.md", "#kept");
        fs::write(dir.path().join("binary.md"), [0xff, 0xfe, 0x00]).unwrap();

        assert_eq!(store.known_tags().unwrap(), vec!["kept"]);
    }
}
