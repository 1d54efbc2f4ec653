// Test utility module for suryacore integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use suryacore::{read_dataset, Dataset, DuplicatePolicy};
use tempfile::TempDir;

/// Path to the shared ingredient fixture.
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("ingredients.csv")
}

pub fn fixture_dataset() -> Dataset {
    let file = fs::File::open(fixture_path()).expect("fixture exists");
    read_dataset(file, &fixture_path(), DuplicatePolicy::FirstWins).expect("fixture parses")
}

/// A scratch directory holding an empty config file, so tests never pick up
/// a `.suryacore.toml` from the surrounding checkout.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join(".suryacore.toml"), "").expect("write config");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write file");
        path
    }
}
