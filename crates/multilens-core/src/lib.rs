//! Multilens Core - lens selection and sensor geometry
//!
//! This crate provides the platform-independent logic behind a multi-lens
//! camera UI: classifying physical lenses into roles, mapping preview taps
//! into sensor coordinates, computing digital-zoom crop regions and the
//! orientation to record for still captures.
//!
//! # Module Structure
//!
//! - `lens` - Lens descriptors, role classification and the role cache
//! - `geometry` - Touch mapping, zoom crop, orientation
//! - `config` - Orchestrator-level capture constants
//! - `controller` - Wiring from gestures to a capture pipeline
//!
//! Device and session lifecycle stay with the caller, which implements
//! [`controller::CaptureRequestSink`].

pub mod config;
pub mod controller;
pub mod geometry;
pub mod lens;

pub use config::{CaptureConfig, ConfigError, MeteringConfig};
pub use controller::{CameraController, CaptureRequestSink, ControlError, LensGeometry};
pub use geometry::{
    compute_crop_rect, jpeg_orientation, map_touch_to_sensor, GeometryError, Rotation,
    ScreenPoint, ScreenSize, SensorPoint, SensorRect, SensorSize, ZoomLimits, ZoomState,
};
pub use lens::{classify, Facing, LensDescriptor, LensRole, Measurement, RoleCache, RoleMap};
