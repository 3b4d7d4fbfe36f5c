//! Core types for preview and sensor coordinate spaces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for validating geometric inputs.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Sensor dimensions must be non-zero and fit in `i32` pixel coordinates.
    #[error("Invalid sensor size: {width}x{height}")]
    InvalidSensorSize { width: u32, height: u32 },

    /// Orientation is not a multiple of 90 degrees.
    #[error("Invalid orientation: {0} degrees is not a right angle")]
    InvalidOrientation(i32),

    /// Zoom limits must be finite with 0 < min_threshold <= max.
    #[error("Invalid zoom limits: min threshold {min_threshold}, max {max}")]
    InvalidZoomLimits { min_threshold: f32, max: f32 },
}

/// A touch position in preview pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Dimensions of the on-screen preview surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Active pixel array dimensions of a lens sensor.
///
/// Both dimensions are in `1..=i32::MAX`; use [`SensorSize::new`] to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSensorSize")]
pub struct SensorSize {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawSensorSize {
    width: u32,
    height: u32,
}

impl TryFrom<RawSensorSize> for SensorSize {
    type Error = GeometryError;

    fn try_from(raw: RawSensorSize) -> Result<Self, Self::Error> {
        SensorSize::new(raw.width, raw.height)
    }
}

impl SensorSize {
    /// Largest accepted dimension, so every pixel coordinate fits in `i32`.
    pub const MAX_DIMENSION: u32 = i32::MAX as u32;

    /// Create a sensor size, rejecting zero or oversized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        let in_range = |d: u32| (1..=Self::MAX_DIMENSION).contains(&d);
        if !in_range(width) || !in_range(height) {
            return Err(GeometryError::InvalidSensorSize { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// The rectangle covering the whole sensor.
    pub fn full_rect(self) -> SensorRect {
        SensorRect {
            left: 0,
            top: 0,
            right: self.width as i32,
            bottom: self.height as i32,
        }
    }

    /// Clamp a point into `[0, width-1] x [0, height-1]`.
    #[inline]
    pub fn clamp_point(self, x: i32, y: i32) -> SensorPoint {
        SensorPoint {
            x: x.clamp(0, self.width as i32 - 1),
            y: y.clamp(0, self.height as i32 - 1),
        }
    }
}

/// A point in sensor pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SensorPoint {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned rectangle in sensor pixel space.
///
/// Edges follow the `left < right`, `top < bottom` convention; `right` and
/// `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SensorRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl SensorRect {
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Integer center of the rectangle.
    pub fn center(&self) -> SensorPoint {
        SensorPoint {
            x: self.left + self.width() / 2,
            y: self.top + self.height() / 2,
        }
    }

    pub fn contains(&self, point: SensorPoint) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Check that the rectangle is non-empty and lies inside `sensor`.
    pub fn is_within(&self, sensor: SensorSize) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.left < self.right
            && self.top < self.bottom
            && self.right <= sensor.width() as i32
            && self.bottom <= sensor.height() as i32
    }
}

/// A right-angle rotation, used for both sensor mount orientation and
/// display rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Parse degrees, normalizing modulo 360.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOrientation` unless `degrees` is a
    /// multiple of 90.
    pub fn from_degrees(degrees: i32) -> Result<Self, GeometryError> {
        match degrees.rem_euclid(360) {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            _ => Err(GeometryError::InvalidOrientation(degrees)),
        }
    }

    /// Map a discrete display rotation state (0..=3, quarter turns) to a
    /// rotation. Unrecognized states map to `Deg0`.
    pub fn from_display_state(state: i32) -> Self {
        match state {
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            3 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }

    #[inline]
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Number of quarter turns (0..=3).
    #[inline]
    pub fn quarter_turns(self) -> u8 {
        (self.degrees() / 90) as u8
    }

    /// Sum of two rotations, modulo 360.
    pub fn compose(self, other: Rotation) -> Rotation {
        match (self.quarter_turns() + other.quarter_turns()) % 4 {
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            3 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = GeometryError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Rotation::from_degrees(degrees)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}
