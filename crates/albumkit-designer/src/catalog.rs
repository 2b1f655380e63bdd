//! Read-only collaborator inputs: the photo catalog and the print-lab
//! preset list. The engine treats photos as opaque references; pixel data
//! and thumbnailing live elsewhere.

use std::collections::HashMap;

use albumkit_core::error::{DesignError, Result};
use serde::{Deserialize, Serialize};

use crate::model::PageSpec;

/// One catalog entry mapping a photo id to its display URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoAsset {
    pub id: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Read-only id → asset lookup supplied by the photo storage collaborator.
#[derive(Debug, Clone, Default)]
pub struct PhotoCatalog {
    assets: HashMap<String, PhotoAsset>,
}

impl PhotoCatalog {
    pub fn new(assets: impl IntoIterator<Item = PhotoAsset>) -> Self {
        Self {
            assets: assets.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&PhotoAsset> {
        self.assets.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.assets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// A print-lab page preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintSpecPreset {
    pub id: String,
    pub label: String,
    pub spec: PageSpec,
}

/// The built-in preset list. A lab integration may supply its own.
pub fn default_presets() -> Vec<PrintSpecPreset> {
    vec![
        PrintSpecPreset {
            id: "square-30".to_string(),
            label: "30×30 cm square".to_string(),
            spec: PageSpec {
                width: 300.0,
                height: 300.0,
                bleed: 3.0,
                safe_zone: 5.0,
                dpi: 300,
            },
        },
        PrintSpecPreset {
            id: "landscape-a4".to_string(),
            label: "A4 landscape".to_string(),
            spec: PageSpec {
                width: 297.0,
                height: 210.0,
                bleed: 3.0,
                safe_zone: 5.0,
                dpi: 300,
            },
        },
        PrintSpecPreset {
            id: "square-20".to_string(),
            label: "20×20 cm square".to_string(),
            spec: PageSpec {
                width: 200.0,
                height: 200.0,
                bleed: 3.0,
                safe_zone: 4.0,
                dpi: 300,
            },
        },
    ]
}

/// Resolves a preset id against a preset list.
pub fn find_preset<'a>(presets: &'a [PrintSpecPreset], id: &str) -> Result<&'a PrintSpecPreset> {
    presets
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| DesignError::UnknownPreset { id: id.to_string() })
}
