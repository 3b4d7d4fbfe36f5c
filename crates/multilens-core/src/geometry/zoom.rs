//! Digital zoom: crop rectangles and zoom state.
//!
//! Digital zoom reads out a centered sub-rectangle of the sensor:
//!
//! ```text
//! zoom_w = width / zoom        zoom_h = height / zoom
//! rect   = center -/+ (zoom_w / 2, zoom_h / 2)
//! ```
//!
//! Requests above the maximum are clamped to it, and requests at or below
//! the lower threshold fall back to the full sensor.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use super::{GeometryError, SensorRect, SensorSize};

/// Default lower zoom threshold; levels at or below read out the full sensor.
pub const DEFAULT_MIN_ZOOM_THRESHOLD: f32 = 0.5;

/// Compute the sensor crop rectangle for a zoom request.
///
/// # Arguments
///
/// * `requested_zoom` - Requested zoom scale
/// * `max_zoom` - Maximum digital zoom the lens supports
/// * `min_zoom_threshold` - At or below this the full sensor is returned
/// * `sensor` - Active pixel array dimensions
///
/// # Returns
///
/// A centered rectangle with `left < right` and `top < bottom`, always inside
/// the sensor.
pub fn compute_crop_rect(
    requested_zoom: f32,
    max_zoom: f32,
    min_zoom_threshold: f32,
    sensor: SensorSize,
) -> SensorRect {
    let zoom = if requested_zoom > max_zoom {
        max_zoom
    } else if requested_zoom > min_zoom_threshold {
        requested_zoom
    } else {
        // Also catches NaN, which fails both comparisons
        return sensor.full_rect();
    };

    if !zoom.is_finite() || zoom <= 0.0 {
        return sensor.full_rect();
    }

    let sensor_w = sensor.width() as i32;
    let sensor_h = sensor.height() as i32;
    let center_x = sensor_w / 2;
    let center_y = sensor_h / 2;

    let zoom_w = (sensor_w as f32 / zoom) as i32;
    let zoom_h = (sensor_h as f32 / zoom) as i32;
    let half_w = (zoom_w / 2).max(1);
    let half_h = (zoom_h / 2).max(1);

    let left = (center_x - half_w).max(0);
    let top = (center_y - half_h).max(0);
    let right = (center_x + half_w).min(sensor_w).max(left + 1);
    let bottom = (center_y + half_h).min(sensor_h).max(top + 1);

    SensorRect {
        left,
        top,
        right,
        bottom,
    }
}

/// Bounds for the digital zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawZoomLimits")]
pub struct ZoomLimits {
    min_threshold: f32,
    max: f32,
}

#[derive(Deserialize)]
struct RawZoomLimits {
    min_threshold: f32,
    max: f32,
}

impl TryFrom<RawZoomLimits> for ZoomLimits {
    type Error = GeometryError;

    fn try_from(raw: RawZoomLimits) -> Result<Self, Self::Error> {
        ZoomLimits::new(raw.min_threshold, raw.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_threshold: DEFAULT_MIN_ZOOM_THRESHOLD,
            max: 1.0,
        }
    }
}

impl ZoomLimits {
    /// Create zoom limits.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidZoomLimits` unless both values are
    /// finite and `0 < min_threshold <= max`.
    pub fn new(min_threshold: f32, max: f32) -> Result<Self, GeometryError> {
        let valid = min_threshold.is_finite()
            && max.is_finite()
            && min_threshold > 0.0
            && min_threshold <= max;
        if !valid {
            return Err(GeometryError::InvalidZoomLimits { min_threshold, max });
        }
        Ok(Self { min_threshold, max })
    }

    #[inline]
    pub fn min_threshold(&self) -> f32 {
        self.min_threshold
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn clamp(&self, level: f32) -> f32 {
        level.clamp(self.min_threshold, self.max)
    }
}

/// Current digital zoom level, bounded by [`ZoomLimits`].
///
/// Owned by the orchestrator and mutated only through explicit requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomState {
    level: f32,
    limits: ZoomLimits,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ZoomState {
    /// Start unzoomed (1.0, clamped into `limits`).
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            level: limits.clamp(1.0),
            limits,
        }
    }

    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    #[inline]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Level the preview actually shows.
    ///
    /// 1.0 whenever the crop covers the whole sensor: at or below the
    /// threshold, and for levels below 1.0 where the crop is clamped to the
    /// sensor edges.
    pub fn effective_level(&self) -> f32 {
        if self.level <= self.limits.min_threshold.max(1.0) {
            1.0
        } else {
            self.level
        }
    }

    /// Apply an incremental pinch: `new = level * scale_factor`.
    ///
    /// Returns the new level, or `None` when it equals the current level
    /// after clamping, so no redundant update needs to be issued.
    pub fn apply_pinch(&mut self, scale_factor: f32) -> Option<f32> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return None;
        }
        self.set_level(self.level * scale_factor)
    }

    /// Request an absolute level. Same rejection rule as [`apply_pinch`](Self::apply_pinch).
    pub fn set_level(&mut self, level: f32) -> Option<f32> {
        if level.is_nan() {
            return None;
        }
        let clamped = self.limits.clamp(level);
        if clamped == self.level {
            return None;
        }
        self.level = clamped;
        Some(clamped)
    }

    /// Replace the limits (e.g. after switching lens), re-clamping the level.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.level = limits.clamp(self.level);
    }

    /// Crop rectangle for the current level.
    pub fn crop_rect(&self, sensor: SensorSize) -> SensorRect {
        compute_crop_rect(
            self.level,
            self.limits.max,
            self.limits.min_threshold,
            sensor,
        )
    }
}

/// Zoom level shared between a single writer and any number of readers.
///
/// Reads never block; the value is stored as `f32` bits in an atomic.
#[derive(Debug)]
pub struct SharedZoomLevel(AtomicU32);

impl Default for SharedZoomLevel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl SharedZoomLevel {
    pub fn new(level: f32) -> Self {
        Self(AtomicU32::new(level.to_bits()))
    }

    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }

    #[inline]
    pub fn store(&self, level: f32) {
        self.0.store(level.to_bits(), Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{map_touch_to_sensor, Rotation, ScreenPoint, ScreenSize, SensorPoint};

    fn sensor() -> SensorSize {
        SensorSize::new(4032, 3024).unwrap()
    }

    #[test]
    fn test_threshold_returns_full_sensor() {
        let rect = compute_crop_rect(0.5, 8.0, 0.5, sensor());
        assert_eq!(rect, sensor().full_rect());

        let rect = compute_crop_rect(0.2, 8.0, 0.5, sensor());
        assert_eq!(rect, sensor().full_rect());
    }

    #[test]
    fn test_unzoomed_covers_sensor() {
        let rect = compute_crop_rect(1.0, 8.0, 0.5, sensor());
        assert_eq!(rect, sensor().full_rect());
    }

    #[test]
    fn test_double_zoom() {
        let rect = compute_crop_rect(2.0, 8.0, 0.5, sensor());
        assert_eq!(
            rect,
            SensorRect {
                left: 1008,
                top: 756,
                right: 3024,
                bottom: 2268,
            }
        );
        assert_eq!(rect.center(), sensor().full_rect().center());
    }

    #[test]
    fn test_max_zoom_width() {
        let rect = compute_crop_rect(8.0, 8.0, 0.5, sensor());
        assert!((rect.width() - 4032 / 8).abs() <= 1);
        assert!((rect.height() - 3024 / 8).abs() <= 1);
    }

    #[test]
    fn test_above_max_is_clamped() {
        let clamped = compute_crop_rect(20.0, 4.0, 0.5, sensor());
        let at_max = compute_crop_rect(4.0, 4.0, 0.5, sensor());
        assert_eq!(clamped, at_max);
    }

    #[test]
    fn test_below_one_stays_within_sensor() {
        // Between the threshold and 1.0 the crop would exceed the sensor
        let rect = compute_crop_rect(0.75, 8.0, 0.5, sensor());
        assert!(rect.is_within(sensor()));
    }

    #[test]
    fn test_nan_returns_full_sensor() {
        let rect = compute_crop_rect(f32::NAN, 8.0, 0.5, sensor());
        assert_eq!(rect, sensor().full_rect());
    }

    #[test]
    fn test_extreme_zoom_keeps_non_empty_rect() {
        let tiny = SensorSize::new(4, 4).unwrap();
        let rect = compute_crop_rect(1000.0, 1000.0, 0.5, tiny);
        assert!(rect.left < rect.right);
        assert!(rect.top < rect.bottom);
        assert!(rect.is_within(tiny));
    }

    #[test]
    fn test_zoom_limits_validation() {
        assert!(ZoomLimits::new(0.5, 8.0).is_ok());
        assert!(ZoomLimits::new(1.0, 1.0).is_ok());
        assert_eq!(
            ZoomLimits::new(2.0, 1.0),
            Err(GeometryError::InvalidZoomLimits {
                min_threshold: 2.0,
                max: 1.0
            })
        );
        assert!(ZoomLimits::new(0.0, 4.0).is_err());
        assert!(ZoomLimits::new(0.5, f32::INFINITY).is_err());
    }

    #[test]
    fn test_zoom_state_starts_unzoomed() {
        let state = ZoomState::new(ZoomLimits::new(0.5, 8.0).unwrap());
        assert_eq!(state.level(), 1.0);
        assert_eq!(state.effective_level(), 1.0);
    }

    #[test]
    fn test_pinch_updates_level() {
        let mut state = ZoomState::new(ZoomLimits::new(0.5, 8.0).unwrap());
        assert_eq!(state.apply_pinch(1.5), Some(1.5));
        assert_eq!(state.apply_pinch(2.0), Some(3.0));
        assert_eq!(state.level(), 3.0);
    }

    #[test]
    fn test_pinch_clamped_to_max_then_rejected() {
        let mut state = ZoomState::new(ZoomLimits::new(0.5, 4.0).unwrap());
        assert_eq!(state.apply_pinch(10.0), Some(4.0));
        // Already at max: further zoom-in is a no-op
        assert_eq!(state.apply_pinch(1.2), None);
        assert_eq!(state.level(), 4.0);
    }

    #[test]
    fn test_pinch_identity_rejected() {
        let mut state = ZoomState::new(ZoomLimits::new(0.5, 4.0).unwrap());
        assert_eq!(state.apply_pinch(1.0), None);
    }

    #[test]
    fn test_pinch_rejects_invalid_scale() {
        let mut state = ZoomState::new(ZoomLimits::new(0.5, 4.0).unwrap());
        assert_eq!(state.apply_pinch(0.0), None);
        assert_eq!(state.apply_pinch(f32::NAN), None);
        assert_eq!(state.apply_pinch(-1.0), None);
        assert_eq!(state.level(), 1.0);
    }

    #[test]
    fn test_pinch_out_snaps_to_full_sensor() {
        let mut state = ZoomState::new(ZoomLimits::new(0.5, 4.0).unwrap());
        assert_eq!(state.apply_pinch(0.1), Some(0.5));
        assert_eq!(state.effective_level(), 1.0);
        assert_eq!(state.crop_rect(sensor()), sensor().full_rect());
        assert_eq!(state.apply_pinch(0.5), None);
    }

    #[test]
    fn test_sub_unity_zoom_shows_full_sensor() {
        let mut state = ZoomState::new(ZoomLimits::new(0.5, 4.0).unwrap());
        assert_eq!(state.apply_pinch(0.75), Some(0.75));
        assert_eq!(state.crop_rect(sensor()), sensor().full_rect());
        assert_eq!(state.effective_level(), 1.0);

        // A tap at 10% / 10% lands on the pixel the preview shows there
        let p = map_touch_to_sensor(
            ScreenPoint::new(144.0, 108.0),
            ScreenSize::new(1440, 1080),
            state.effective_level(),
            Rotation::Deg0,
            Rotation::Deg0,
            sensor(),
        );
        assert_eq!(p, SensorPoint { x: 403, y: 302 });
    }

    #[test]
    fn test_effective_level_above_one_is_level() {
        let mut state = ZoomState::new(ZoomLimits::new(0.5, 4.0).unwrap());
        state.set_level(1.5);
        assert_eq!(state.effective_level(), 1.5);
    }

    #[test]
    fn test_set_limits_reclamps() {
        let mut state = ZoomState::new(ZoomLimits::new(0.5, 8.0).unwrap());
        state.set_level(6.0);
        state.set_limits(ZoomLimits::new(0.5, 2.0).unwrap());
        assert_eq!(state.level(), 2.0);
    }

    #[test]
    fn test_default_limits_allow_no_zoom_in() {
        let mut state = ZoomState::default();
        assert_eq!(state.apply_pinch(2.0), None);
        assert_eq!(state.crop_rect(sensor()), sensor().full_rect());
    }

    #[test]
    fn test_shared_zoom_level() {
        let shared = SharedZoomLevel::default();
        assert_eq!(shared.load(), 1.0);

        std::thread::scope(|s| {
            s.spawn(|| shared.store(2.5));
        });
        assert_eq!(shared.load(), 2.5);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
