//! Scratch locations for tests that write rendered files.

use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary directory plus a file path inside it.
///
/// The directory is removed when this value is dropped.
pub struct ScratchFile {
    dir: TempDir,
    path: PathBuf,
}

impl ScratchFile {
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

/// Create a fresh temporary directory and return a path named `file_name`
/// inside it. The file itself is not created.
pub fn scratch_file(file_name: &str) -> ScratchFile {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join(file_name);
    ScratchFile { dir, path }
}
