//! Touch-to-sensor coordinate mapping for tap-to-focus.
//!
//! # Algorithm
//!
//! 1. Normalize the touch against the preview size.
//! 2. Apply the [`AxisTransform`](super::AxisTransform) for the sensor mount
//!    and display rotation pair.
//! 3. Scale to sensor pixels.
//! 4. Project into the digital-zoom crop, which is centered on the sensor:
//!
//! ```text
//! factor = 1 / zoom
//! crop   = (size - size * factor) / 2
//! out    = crop + sensor * factor
//! ```
//!
//! Step 4 makes the result land on what the user actually sees through the
//! zoom crop rather than on the full unzoomed sensor.

use serde::{Deserialize, Serialize};

use super::{axis_transform, Rotation, ScreenPoint, ScreenSize, SensorPoint, SensorSize};

/// Map a preview touch position into sensor pixel space.
///
/// # Arguments
///
/// * `point` - Touch position in preview pixels
/// * `screen` - Preview dimensions
/// * `zoom_level` - Current effective zoom (1.0 = no zoom)
/// * `sensor_orientation` - Fixed mount orientation of the lens
/// * `display_rotation` - Current display rotation
/// * `sensor` - Active pixel array dimensions
///
/// # Behavior
///
/// - Touches outside the preview are clamped to its edges
/// - A non-finite or non-positive zoom is treated as 1.0
/// - The result is always within `[0, width-1] x [0, height-1]`
pub fn map_touch_to_sensor(
    point: ScreenPoint,
    screen: ScreenSize,
    zoom_level: f32,
    sensor_orientation: Rotation,
    display_rotation: Rotation,
    sensor: SensorSize,
) -> SensorPoint {
    let ratio_x = normalize(point.x, screen.width);
    let ratio_y = normalize(point.y, screen.height);

    let (ratio_x, ratio_y) =
        axis_transform(sensor_orientation, display_rotation).apply(ratio_x, ratio_y);

    let sensor_w = sensor.width() as i32;
    let sensor_h = sensor.height() as i32;
    let sensor_x = (ratio_x * sensor_w as f32) as i32;
    let sensor_y = (ratio_y * sensor_h as f32) as i32;

    let zoom_level = if zoom_level.is_finite() && zoom_level > 0.0 {
        zoom_level
    } else {
        1.0
    };
    let zoom_factor = 1.0 / zoom_level;
    let zoomed_w = (sensor_w as f32 * zoom_factor) as i32;
    let zoomed_h = (sensor_h as f32 * zoom_factor) as i32;
    let crop_x = (sensor_w - zoomed_w) / 2;
    let crop_y = (sensor_h - zoomed_h) / 2;

    let x = (crop_x as f32 + sensor_x as f32 * zoom_factor) as i32;
    let y = (crop_y as f32 + sensor_y as f32 * zoom_factor) as i32;

    sensor.clamp_point(x, y)
}

#[inline]
fn normalize(value: f32, extent: u32) -> f32 {
    if extent == 0 || !value.is_finite() {
        return 0.0;
    }
    (value / extent as f32).clamp(0.0, 1.0)
}

/// Largest metering weight a capture pipeline accepts.
pub const METERING_WEIGHT_MAX: u32 = 1000;

/// Sensor-space region telling the capture pipeline where to focus/expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteringRegion {
    /// Left edge in sensor pixels.
    pub x: i32,
    /// Top edge in sensor pixels.
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Relative weight (0 to [`METERING_WEIGHT_MAX`]).
    pub weight: u32,
}

impl MeteringRegion {
    /// Build a fixed-size region centered on `point`.
    ///
    /// The origin is clamped at zero and pulled back from the far edges so
    /// the region never overhangs the sensor (unless the region is larger
    /// than the sensor, in which case it starts at the origin).
    pub fn centered_on(
        point: SensorPoint,
        width: u32,
        height: u32,
        weight: u32,
        sensor: SensorSize,
    ) -> Self {
        let x = place(point.x, width, sensor.width());
        let y = place(point.y, height, sensor.height());
        Self {
            x,
            y,
            width,
            height,
            weight: weight.min(METERING_WEIGHT_MAX),
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

fn place(center: i32, extent: u32, limit: u32) -> i32 {
    let far = (limit as i32 - extent as i32).max(0);
    (center - extent as i32 / 2).min(far).max(0)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
