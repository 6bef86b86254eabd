use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use motif_core::Size2D;

/// Unique identifier for an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A loaded asset: an opaque handle plus the extent layout needs.
/// Decoding and rasterization stay on the back-end side of the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    /// Source path, relative to the configured asset directory.
    pub path: PathBuf,
    /// Extent in scene units, as reported by the back-end.
    pub extent: Size2D,
}

impl Asset {
    pub fn new(id: AssetId, path: impl Into<PathBuf>, extent: Size2D) -> Self {
        Self {
            id,
            path: path.into(),
            extent,
        }
    }
}

/// Catalog of all assets a scene loaded through the back-end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetCatalog {
    assets: HashMap<AssetId, Asset>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
        }
    }

    /// Register an asset. Returns the AssetId.
    pub fn register(&mut self, asset: Asset) -> AssetId {
        let id = asset.id.clone();
        self.assets.insert(id.clone(), asset);
        id
    }

    /// Get an asset by ID.
    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.get(id)
    }

    /// List all assets.
    pub fn all(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    /// Number of registered assets.
    pub fn count(&self) -> usize {
        self.assets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_catalog() {
        let mut catalog = AssetCatalog::new();
        let asset = Asset::new(
            AssetId::new("engineer"),
            "engineer.png",
            Size2D::new(3.0, 3.0),
        );
        let id = catalog.register(asset);
        assert_eq!(catalog.count(), 1);
        assert!(catalog.get(&id).is_some());
        assert!((catalog.get(&id).unwrap().extent.width - 3.0).abs() < 1e-9);
    }
}
