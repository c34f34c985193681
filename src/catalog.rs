// SPDX-License-Identifier: MPL-2.0
//! Static image catalog shown by the gallery.
//!
//! The catalog is generated once at startup from a count and a naming
//! convention (`<dir>/<stem><id>.<extension>`). Records are immutable and
//! their order is both the display order and the navigation order.

use crate::config::{self, GalleryConfig};
use crate::error::{Error, Result};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// A single gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// 1-based, sequential identifier.
    pub id: usize,
    /// Static asset reference.
    pub path: PathBuf,
}

/// Parameters used to generate a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSpec {
    pub count: usize,
    pub asset_dir: PathBuf,
    pub file_stem: String,
    pub extension: String,
}

impl Default for CatalogSpec {
    fn default() -> Self {
        Self {
            count: config::DEFAULT_IMAGE_COUNT,
            asset_dir: PathBuf::from(config::DEFAULT_ASSET_DIR),
            file_stem: config::DEFAULT_FILE_STEM.to_string(),
            extension: config::DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl CatalogSpec {
    /// Builds a spec from the `[gallery]` config section, filling gaps with
    /// defaults.
    #[must_use]
    pub fn from_config(gallery: &GalleryConfig) -> Self {
        let defaults = Self::default();
        Self {
            count: gallery.image_count(),
            asset_dir: gallery.asset_dir.clone().unwrap_or(defaults.asset_dir),
            file_stem: gallery.file_stem.clone().unwrap_or(defaults.file_stem),
            extension: gallery.extension.clone().unwrap_or(defaults.extension),
        }
    }

    fn file_name(&self, id: usize) -> String {
        format!("{}{}.{}", self.file_stem, id, self.extension)
    }
}

/// Ordered, non-empty list of image records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ImageRecord>,
}

impl Catalog {
    /// Generates the catalog described by `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] when the count is zero, or when the stem or
    /// extension would produce unusable file names.
    pub fn generate(spec: &CatalogSpec) -> Result<Self> {
        if spec.count == 0 {
            return Err(Error::Catalog("image count must be at least 1".into()));
        }
        if spec.count > config::MAX_IMAGE_COUNT {
            return Err(Error::Catalog(format!(
                "image count {} exceeds the maximum of {}",
                spec.count,
                config::MAX_IMAGE_COUNT
            )));
        }
        validate_name_part("file stem", &spec.file_stem)?;
        validate_name_part("extension", &spec.extension)?;
        if spec.extension.starts_with('.') {
            return Err(Error::Catalog(
                "extension must not start with a dot".into(),
            ));
        }

        Ok(Self::from_valid_spec(spec))
    }

    fn from_valid_spec(spec: &CatalogSpec) -> Self {
        let records = (1..=spec.count)
            .map(|id| ImageRecord {
                id,
                path: spec.asset_dir.join(spec.file_name(id)),
            })
            .collect();
        Self { records }
    }

    /// Number of records, never zero.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.records.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Record at a display position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    /// Records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }

    /// Directory shared by all records.
    #[must_use]
    pub fn asset_dir(&self) -> Option<&Path> {
        self.records.first().and_then(|r| r.path.parent())
    }
}

impl Default for Catalog {
    /// The built-in catalog, used when configured parameters are rejected.
    fn default() -> Self {
        Self::from_valid_spec(&CatalogSpec::default())
    }
}

fn validate_name_part(label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Catalog(format!("{label} must not be empty")));
    }
    if value.contains(['/', '\\']) {
        return Err(Error::Catalog(format!(
            "{label} must not contain path separators"
        )));
    }
    Ok(())
}
