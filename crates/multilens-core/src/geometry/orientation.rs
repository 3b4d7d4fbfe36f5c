//! Output image orientation for still captures.

use serde::{Deserialize, Serialize};

use super::Rotation;

/// Clockwise rotation, in degrees, to record for a still capture.
///
/// `(sensor_orientation + display_rotation) mod 360`, always in `[0, 360)`.
/// The sensor orientation is reduced first, so any `i32` is accepted.
#[inline]
pub fn jpeg_orientation(sensor_orientation_degrees: i32, display_rotation: Rotation) -> u32 {
    let sensor = sensor_orientation_degrees.rem_euclid(360);
    ((sensor + display_rotation.degrees()) % 360) as u32
}

/// EXIF orientation tag values (1-8) for right-angle rotations.
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExifOrientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl ExifOrientation {
    /// Tag for a clockwise JPEG rotation. Non-right angles map to `Normal`.
    pub fn from_jpeg_degrees(degrees: u32) -> Self {
        match degrees % 360 {
            90 => ExifOrientation::Rotate90CW,
            180 => ExifOrientation::Rotate180,
            270 => ExifOrientation::Rotate270CW,
            _ => ExifOrientation::Normal,
        }
    }

    #[inline]
    pub fn tag_value(self) -> u8 {
        self as u8
    }

    /// Returns true if a viewer must swap width and height to display upright.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            ExifOrientation::Rotate90CW | ExifOrientation::Rotate270CW
        )
    }
}
