//! Capture configuration.
//!
//! Orchestrator-level constants that the core needs when turning gestures
//! into capture parameters. Every field has a default, so a JSON document
//! only needs to list what it overrides:
//!
//! ```json
//! { "metering": { "width": 200, "height": 200 } }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{ScreenSize, DEFAULT_MIN_ZOOM_THRESHOLD, METERING_WEIGHT_MAX};

/// Errors from loading or validating a [`CaptureConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for this schema.
    #[error("Failed to parse capture config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A size field is zero.
    #[error("Invalid {field}: {width}x{height}")]
    InvalidSize {
        field: &'static str,
        width: u32,
        height: u32,
    },

    /// The zoom threshold is not a positive finite number.
    #[error("Invalid min zoom threshold: {0}")]
    InvalidZoomThreshold(f32),
}

/// Size and weight of the tap-to-focus metering rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeteringConfig {
    /// Width in sensor pixels.
    pub width: u32,
    /// Height in sensor pixels.
    pub height: u32,
    /// Weight (0 to 1000).
    pub weight: u32,
}

impl Default for MeteringConfig {
    fn default() -> Self {
        Self {
            width: 150,
            height: 150,
            weight: METERING_WEIGHT_MAX - 1,
        }
    }
}

/// Capture configuration for one orchestrator session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Fixed size of the preview surface.
    pub preview: ScreenSize,
    /// Still capture output size.
    pub capture: ScreenSize,
    /// Tap-to-focus metering rectangle.
    pub metering: MeteringConfig,
    /// Zoom at or below this reads out the full sensor.
    pub min_zoom_threshold: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            preview: ScreenSize::new(1440, 1080),
            capture: ScreenSize::new(4032, 3024),
            metering: MeteringConfig::default(),
            min_zoom_threshold: DEFAULT_MIN_ZOOM_THRESHOLD,
        }
    }
}

impl CaptureConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CaptureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that sizes are non-zero and the zoom threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size("preview", self.preview.width, self.preview.height)?;
        check_size("capture", self.capture.width, self.capture.height)?;
        check_size("metering", self.metering.width, self.metering.height)?;

        if !self.min_zoom_threshold.is_finite() || self.min_zoom_threshold <= 0.0 {
            return Err(ConfigError::InvalidZoomThreshold(self.min_zoom_threshold));
        }
        if self.metering.weight > METERING_WEIGHT_MAX {
            log::warn!(
                "metering weight {} exceeds {}, it will be capped",
                self.metering.weight,
                METERING_WEIGHT_MAX
            );
        }
        Ok(())
    }
}

fn check_size(field: &'static str, width: u32, height: u32) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidSize {
            field,
            width,
            height,
        });
    }
    Ok(())
}
