//! Sensor geometry: touch mapping, digital zoom and capture orientation.
//!
//! All functions here are pure, synchronous and total over their inputs.
//! Out-of-range inputs are clamped rather than rejected; only the validating
//! constructors ([`SensorSize::new`], [`ZoomLimits::new`],
//! [`Rotation::from_degrees`]) return errors.
//!
//! # Coordinate System
//!
//! - Preview coordinates are pixels of the on-screen preview, origin top-left
//! - Sensor coordinates are pixels of the lens's active array, origin top-left,
//!   independent of display rotation
//! - Rotations are clockwise right angles

mod orientation;
mod touch;
mod transform;
mod types;
mod zoom;

pub use orientation::{jpeg_orientation, ExifOrientation};
pub use touch::{map_touch_to_sensor, MeteringRegion, METERING_WEIGHT_MAX};
pub use transform::{axis_transform, AxisTransform};
pub use types::{
    GeometryError, Rotation, ScreenPoint, ScreenSize, SensorPoint, SensorRect, SensorSize,
};
pub use zoom::{
    compute_crop_rect, SharedZoomLevel, ZoomLimits, ZoomState, DEFAULT_MIN_ZOOM_THRESHOLD,
};
