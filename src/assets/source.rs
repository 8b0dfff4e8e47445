use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::assets::path::normalize_site_path;

/// Plain resource fetch: resolve a frame path to its encoded bytes.
///
/// Called concurrently from preload workers, hence `Send + Sync`.
pub trait FrameSource: Send + Sync {
    fn fetch(&self, path: &str) -> anyhow::Result<Vec<u8>>;
}

/// Serves site paths from a directory acting as the web root.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FrameSource for DirSource {
    fn fetch(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        let rel = normalize_site_path(path)?;
        let abs = self.root.join(Path::new(&rel));
        std::fs::read(&abs).with_context(|| format!("read frame bytes from '{}'", abs.display()))
    }
}

/// In-memory source keyed by the exact site path.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    entries: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(path.into(), bytes);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FrameSource for MemorySource {
    fn fetch(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no resource at '{path}'"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
