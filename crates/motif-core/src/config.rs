use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{MotifError, MotifResult};

/// Playback configuration: the viewport the layout resolver works against
/// and the frame rate the scheduler ticks at.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackConfig {
    /// Viewport width in scene units.
    pub frame_width: f64,
    /// Viewport height in scene units.
    pub frame_height: f64,
    /// Frames per second for playback.
    pub fps: f64,
    /// Scene background color.
    #[serde(default = "default_background")]
    pub background: Color,
    /// Directory asset paths are resolved against.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: String,
}

fn default_background() -> Color {
    Color::BACKGROUND
}

fn default_asset_dir() -> String {
    "assets".to_string()
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        // 14.22 x 8 scene units matches a 16:9 frame with 8-unit height.
        Self {
            frame_width: 128.0 / 9.0,
            frame_height: 8.0,
            fps: 30.0,
            background: Color::BACKGROUND,
            asset_dir: "assets".to_string(),
        }
    }
}

impl PlaybackConfig {
    pub fn load_from_file(path: &std::path::Path) -> MotifResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: PlaybackConfig =
            toml::from_str(&contents).map_err(|e| MotifError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> MotifResult<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| MotifError::Config(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Half the viewport width (distance from center to the right edge).
    pub fn half_width(&self) -> f64 {
        self.frame_width / 2.0
    }

    /// Half the viewport height (distance from center to the top edge).
    pub fn half_height(&self) -> f64 {
        self.frame_height / 2.0
    }
}
