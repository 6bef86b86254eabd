//! The rendering back-end boundary.
//!
//! The engine never rasterizes: it hands full registry snapshots to a
//! back-end once per tick and asks it for the two pieces of geometry layout
//! cannot compute itself (text extents and image extents).

use std::path::Path;

use crate::asset::{Asset, AssetId};
use crate::object::TextStyle;
use crate::registry::RegistrySnapshot;
use motif_core::{MotifError, MotifResult, Size2D};

/// The engine's only external interface. A real implementation typesets,
/// rasterizes, and encodes; the engine only drives it.
pub trait RenderBackend {
    /// Called once per rendered tick with the full current object states.
    fn submit_frame(&mut self, snapshot: &RegistrySnapshot) -> MotifResult<()>;

    /// Bring in an externally authored image. A missing file surfaces as
    /// `MotifError::MissingAsset` and is fatal to the scene that needs it,
    /// since layout cannot proceed without the asset's extent.
    fn load_asset(&mut self, path: &Path) -> MotifResult<Asset>;

    /// Measure a text block for the layout resolver. This is the one place
    /// layout depends on back-end-computed geometry.
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size2D;
}

/// A back-end that renders nothing: counts frames and measures text with a
/// fixed-width approximation. Used by the CLI for timing runs and by tests.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    frames: u64,
    /// When set, `load_asset` fails unless the file actually exists.
    strict_assets: bool,
    next_asset: u64,
}

/// Average glyph advance as a fraction of the line height. Close enough for
/// layout when nothing is being drawn.
const GLYPH_ASPECT: f64 = 0.5;
const LINE_SPACING: f64 = 1.2;

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `load_asset` for files that do not exist on disk.
    pub fn with_strict_assets(mut self) -> Self {
        self.strict_assets = true;
        self
    }

    /// Number of frames submitted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for HeadlessBackend {
    fn submit_frame(&mut self, _snapshot: &RegistrySnapshot) -> MotifResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn load_asset(&mut self, path: &Path) -> MotifResult<Asset> {
        if self.strict_assets && !path.exists() {
            return Err(MotifError::missing_asset("file not found", path));
        }
        self.next_asset += 1;
        let id = AssetId::new(format!("asset-{}", self.next_asset));
        // Square placeholder extent; a real back-end reports decoded size.
        Ok(Asset::new(id, path, Size2D::new(3.0, 3.0)))
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size2D {
        let lines: Vec<&str> = text.split('\n').collect();
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = longest as f64 * style.size * GLYPH_ASPECT;
        let height = if lines.len() <= 1 {
            style.size
        } else {
            lines.len() as f64 * style.size * LINE_SPACING
        };
        Size2D::new(width, height)
    }
}
