//! Multilens WASM - WebAssembly bindings for Multilens
//!
//! This crate exposes the multilens-core lens classification and sensor
//! geometry to a JavaScript/TypeScript camera UI.
//!
//! # Module Structure
//!
//! - `lens` - Lens role classification
//! - `geometry` - Touch mapping, zoom crop, JPEG orientation and zoom state
//! - `types` - WASM-compatible wrapper types for sensor points and rectangles
//!
//! # Usage
//!
//! ```typescript
//! import init, { classify_lenses, jpeg_orientation } from '@multilens/wasm';
//!
//! await init();
//!
//! const roles = classify_lenses(lenses);
//! if (roles.telephoto === undefined) {
//!   teleButton.disabled = true;
//! }
//! const degrees = jpeg_orientation(sensorOrientation, displayState);
//! ```

use wasm_bindgen::prelude::*;

mod geometry;
mod lens;
mod types;

pub use geometry::{compute_crop_rect, jpeg_orientation, map_touch_to_sensor, JsZoomState};
pub use lens::classify_lenses;
pub use types::{JsSensorPoint, JsSensorRect};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
