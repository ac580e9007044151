use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::decode::load_image,
    composite::raster::{CompositeThreading, composite_over_with},
    foundation::error::{BlendError, BlendResult},
    raster::buffer::RasterBuffer,
};

/// One selectable image in a [`Gallery`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GalleryEntry {
    /// Display title. Entries without one are titled `Image N` (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Image path; relative paths resolve against the gallery root.
    pub path: PathBuf,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct GalleryManifest {
    images: Vec<GalleryEntry>,
}

/// Which two gallery entries to composite, by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GallerySelection {
    /// Layer painted on top.
    pub top: usize,
    /// Layer already present underneath.
    pub bottom: usize,
}

impl Default for GallerySelection {
    fn default() -> Self {
        Self { top: 0, bottom: 1 }
    }
}

/// Caller-owned lookup table of images to pick blend layers from.
///
/// The gallery holds paths only; images are decoded on demand by [`Gallery::load`] and
/// [`Gallery::composite`], and nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct Gallery {
    root: PathBuf,
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Build a gallery from entries. Relative entry paths resolve against `root`.
    pub fn from_entries(root: impl Into<PathBuf>, entries: Vec<GalleryEntry>) -> BlendResult<Self> {
        if entries.is_empty() {
            return Err(BlendError::validation("gallery must list at least one image"));
        }
        for (idx, e) in entries.iter().enumerate() {
            if e.path.as_os_str().is_empty() {
                return Err(BlendError::validation(format!(
                    "gallery entry {idx} has an empty path"
                )));
            }
        }
        Ok(Self {
            root: root.into(),
            entries,
        })
    }

    /// Parse a JSON manifest (`{"images": [{"name": .., "path": ..}, ..]}`).
    pub fn from_json_str(json: &str, root: impl Into<PathBuf>) -> BlendResult<Self> {
        let manifest: GalleryManifest = serde_json::from_str(json)
            .map_err(|e| BlendError::serde(format!("gallery manifest: {e}")))?;
        Self::from_entries(root, manifest.images)
    }

    /// Read a JSON manifest from disk; entries resolve against its directory.
    pub fn from_path(path: &Path) -> BlendResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read gallery manifest '{}'", path.display()))?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_json_str(&json, root)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, index: usize) -> BlendResult<&GalleryEntry> {
        self.entries.get(index).ok_or_else(|| {
            BlendError::validation(format!(
                "gallery index {index} out of range (gallery has {} images)",
                self.entries.len()
            ))
        })
    }

    /// Display titles in gallery order.
    pub fn titles(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, e)| e.name.clone().unwrap_or_else(|| format!("Image {}", idx + 1)))
            .collect()
    }

    /// Absolute-or-root-relative path of an entry.
    pub fn resolve(&self, index: usize) -> BlendResult<PathBuf> {
        let entry = self.get(index)?;
        if entry.path.is_absolute() {
            Ok(entry.path.clone())
        } else {
            Ok(self.root.join(&entry.path))
        }
    }

    pub fn load(&self, index: usize) -> BlendResult<RasterBuffer> {
        load_image(&self.resolve(index)?)
    }

    /// Decode the selected pair and composite `top` over `bottom`.
    #[tracing::instrument(skip(self, threading))]
    pub fn composite(
        &self,
        selection: GallerySelection,
        threading: &CompositeThreading,
    ) -> BlendResult<RasterBuffer> {
        let top_path = self.resolve(selection.top)?;
        let bottom_path = self.resolve(selection.bottom)?;
        let top = load_image(&top_path)?;
        let bottom = load_image(&bottom_path)?;
        composite_over_with(&top, &bottom, threading)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/table.rs"]
mod tests;
