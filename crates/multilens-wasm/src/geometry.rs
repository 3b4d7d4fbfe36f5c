//! Sensor geometry WASM bindings.
//!
//! Exposes touch mapping, zoom crop computation and JPEG orientation to the
//! JavaScript camera UI. Display rotation is passed as the platform's
//! discrete rotation state (0-3 quarter turns); sensor orientation as degrees.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const zoom = new JsZoomState(0.5, maxZoom);
//! if (zoom.apply_pinch(event.scale)) {
//!   const crop = zoom.crop_rect(sensorW, sensorH);
//!   session.setCropRegion(crop.left, crop.top, crop.right, crop.bottom);
//! }
//! const p = map_touch_to_sensor(x, y, viewW, viewH, zoom.effective_level,
//!                               90, displayState, sensorW, sensorH);
//! ```

use crate::types::{sensor_size, to_js_error, JsSensorPoint, JsSensorRect};
use multilens_core::geometry::{
    compute_crop_rect as core_crop_rect, jpeg_orientation as core_jpeg_orientation,
    map_touch_to_sensor as core_map_touch, Rotation, ScreenPoint, ScreenSize, ZoomLimits,
    ZoomState,
};
use wasm_bindgen::prelude::*;

/// Map a preview tap into sensor pixel space.
///
/// # Arguments
///
/// * `x`, `y` - Tap position in preview pixels
/// * `screen_width`, `screen_height` - Preview size in pixels
/// * `zoom_level` - Effective zoom level (1.0 = no zoom)
/// * `sensor_orientation` - Lens mount orientation in degrees (multiple of 90)
/// * `display_state` - Display rotation state (0-3); unknown values mean 0
/// * `sensor_width`, `sensor_height` - Active array size
///
/// # Errors
///
/// Returns an error for a zero sensor size or a non-right-angle orientation.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn map_touch_to_sensor(
    x: f32,
    y: f32,
    screen_width: u32,
    screen_height: u32,
    zoom_level: f32,
    sensor_orientation: i32,
    display_state: i32,
    sensor_width: u32,
    sensor_height: u32,
) -> Result<JsSensorPoint, JsValue> {
    let sensor = sensor_size(sensor_width, sensor_height).map_err(to_js_error)?;
    let mount = Rotation::from_degrees(sensor_orientation).map_err(to_js_error)?;

    let point = core_map_touch(
        ScreenPoint::new(x, y),
        ScreenSize::new(screen_width, screen_height),
        zoom_level,
        mount,
        Rotation::from_display_state(display_state),
        sensor,
    );
    Ok(point.into())
}

/// Compute the digital-zoom crop rectangle.
///
/// Zoom above `max_zoom` is clamped; zoom at or below `min_threshold`
/// returns the full sensor.
#[wasm_bindgen]
pub fn compute_crop_rect(
    zoom: f32,
    max_zoom: f32,
    min_threshold: f32,
    sensor_width: u32,
    sensor_height: u32,
) -> Result<JsSensorRect, JsValue> {
    let sensor = sensor_size(sensor_width, sensor_height).map_err(to_js_error)?;
    Ok(core_crop_rect(zoom, max_zoom, min_threshold, sensor).into())
}

/// Clockwise JPEG orientation in degrees for a still capture.
#[wasm_bindgen]
pub fn jpeg_orientation(sensor_orientation: i32, display_state: i32) -> u32 {
    core_jpeg_orientation(
        sensor_orientation,
        Rotation::from_display_state(display_state),
    )
}

/// Digital zoom state for one lens.
#[wasm_bindgen]
pub struct JsZoomState {
    inner: ZoomState,
}

#[wasm_bindgen]
impl JsZoomState {
    /// Create an unzoomed state.
    ///
    /// # Errors
    /// Returns error unless `0 < min_threshold <= max_zoom`
    #[wasm_bindgen(constructor)]
    pub fn new(min_threshold: f32, max_zoom: f32) -> Result<JsZoomState, JsValue> {
        let limits = ZoomLimits::new(min_threshold, max_zoom).map_err(to_js_error)?;
        Ok(JsZoomState {
            inner: ZoomState::new(limits),
        })
    }

    /// Current zoom level
    #[wasm_bindgen(getter)]
    pub fn level(&self) -> f32 {
        self.inner.level()
    }

    /// Zoom level to pass to `map_touch_to_sensor`
    #[wasm_bindgen(getter)]
    pub fn effective_level(&self) -> f32 {
        self.inner.effective_level()
    }

    /// Apply a pinch scale factor.
    ///
    /// Returns false when the level did not change, so no crop update is needed.
    pub fn apply_pinch(&mut self, scale_factor: f32) -> bool {
        self.inner.apply_pinch(scale_factor).is_some()
    }

    /// Crop rectangle for the current level.
    pub fn crop_rect(
        &self,
        sensor_width: u32,
        sensor_height: u32,
    ) -> Result<JsSensorRect, JsValue> {
        let sensor = sensor_size(sensor_width, sensor_height).map_err(to_js_error)?;
        Ok(self.inner.crop_rect(sensor).into())
    }
}
