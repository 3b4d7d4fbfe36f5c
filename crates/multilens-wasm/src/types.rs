//! WASM-compatible wrapper types for sensor geometry.
//!
//! These wrap the core point and rectangle types with JavaScript getters.

use multilens_core::geometry::{GeometryError, SensorPoint, SensorRect, SensorSize};
use wasm_bindgen::prelude::*;

/// A point in sensor pixel space.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsSensorPoint {
    x: i32,
    y: i32,
}

#[wasm_bindgen]
impl JsSensorPoint {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 {
        self.y
    }
}

impl From<SensorPoint> for JsSensorPoint {
    fn from(p: SensorPoint) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A crop rectangle in sensor pixel space (`right`/`bottom` exclusive).
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsSensorRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

#[wasm_bindgen]
impl JsSensorRect {
    #[wasm_bindgen(getter)]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[wasm_bindgen(getter)]
    pub fn top(&self) -> i32 {
        self.top
    }

    #[wasm_bindgen(getter)]
    pub fn right(&self) -> i32 {
        self.right
    }

    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

impl From<SensorRect> for JsSensorRect {
    fn from(r: SensorRect) -> Self {
        Self {
            left: r.left,
            top: r.top,
            right: r.right,
            bottom: r.bottom,
        }
    }
}

/// Build a validated sensor size for the binding functions.
pub(crate) fn sensor_size(width: u32, height: u32) -> Result<SensorSize, GeometryError> {
    SensorSize::new(width, height)
}

/// Convert a core error into a JavaScript error string.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
