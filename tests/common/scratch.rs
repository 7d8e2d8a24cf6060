use std::{
    fs,
    path::{Path, PathBuf},
};

use uuid::Uuid;

/// A unique directory under the system temp dir, removed on drop.
/// The directory itself is not created.
pub struct Scratch {
    root: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("json-map-store-{}", Uuid::new_v4()));
        Scratch { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/test_data/test.json`
    pub fn file(&self) -> PathBuf {
        self.root.join("test_data").join("test.json")
    }

    pub fn write_raw(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
