use std::{fs, path::{Path, PathBuf}, ops::Deref, fmt::{self, Formatter, Display}};
use tempfile::{self, TempDir};

/// A file path living within its own temporary directory. The directory is removed once the
/// fixture gets dropped.
pub struct Fixture {
    path: PathBuf,
    _tempdir: TempDir,
}

impl Fixture {
    /// Reserve a path, without creating the file.
    pub fn blank(fixture_filename: &str) -> Self {
        let tempdir = tempfile::tempdir().expect("Failed to generate temp directory");
        let path    = tempdir.path().join(fixture_filename);
        Fixture { _tempdir: tempdir, path }
    }

    /// Create a file holding `contents`.
    pub fn with_contents(fixture_filename: &str, contents: &str) -> Self {
        let fixture = Fixture::blank(fixture_filename);
        fs::write(&fixture.path, contents).expect("Failed to write fixture contents");
        fixture
    }

    pub fn read_to_string(&self) -> String {
        fs::read_to_string(&self.path)
            .unwrap_or_else(|_| panic!("Failed to open {}", self.path.display()))
    }
}

impl Deref for Fixture {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
