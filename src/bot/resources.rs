use std::path::{Path, PathBuf};

use crate::quiz::ImageRef;

const EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Looks up option pictures in a directory on disk.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file behind `image`, or `None` when it is not there.
    pub fn resolve(&self, image: ImageRef) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", image.name(), ext)))
            .find(|path| path.is_file())
    }
}
