//! Preview-to-sensor axis transforms.
//!
//! A lens sensor is mounted at a fixed orientation relative to the device,
//! and the display may be rotated on top of that. Both are right angles, so
//! mapping a normalized preview position into the sensor is always one of
//! four axis transforms, selected by the net rotation
//! `(sensor_orientation + display_rotation) mod 360`:
//!
//! ```text
//! net   swap  invert_x  invert_y   (rx, ry) ->
//!   0    no     no        no       (rx,     ry)
//!  90    yes    no        yes      (ry,     1 - rx)
//! 180    no     yes       yes      (1 - rx, 1 - ry)
//! 270    yes    yes       no       (1 - ry, rx)
//! ```
//!
//! Inversions apply after the swap.

use super::Rotation;

/// Swap and flip operations applied to normalized preview coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisTransform {
    /// Exchange the x and y ratios.
    pub swap_axes: bool,
    /// Mirror the resulting x ratio (`1 - x`).
    pub invert_x: bool,
    /// Mirror the resulting y ratio (`1 - y`).
    pub invert_y: bool,
}

impl AxisTransform {
    pub const IDENTITY: AxisTransform = AxisTransform {
        swap_axes: false,
        invert_x: false,
        invert_y: false,
    };
    const QUARTER: AxisTransform = AxisTransform {
        swap_axes: true,
        invert_x: false,
        invert_y: true,
    };
    const HALF: AxisTransform = AxisTransform {
        swap_axes: false,
        invert_x: true,
        invert_y: true,
    };
    const THREE_QUARTER: AxisTransform = AxisTransform {
        swap_axes: true,
        invert_x: true,
        invert_y: false,
    };

    /// Transform for a net rotation.
    pub fn for_net_rotation(net: Rotation) -> Self {
        match net {
            Rotation::Deg0 => Self::IDENTITY,
            Rotation::Deg90 => Self::QUARTER,
            Rotation::Deg180 => Self::HALF,
            Rotation::Deg270 => Self::THREE_QUARTER,
        }
    }

    /// Apply to a normalized `(x, y)` pair.
    #[inline]
    pub fn apply(self, x: f32, y: f32) -> (f32, f32) {
        let (x, y) = if self.swap_axes { (y, x) } else { (x, y) };
        let x = if self.invert_x { 1.0 - x } else { x };
        let y = if self.invert_y { 1.0 - y } else { y };
        (x, y)
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

/// Lookup table indexed by `[sensor quarter turns][display quarter turns]`.
const TRANSFORM_TABLE: [[AxisTransform; 4]; 4] = {
    use AxisTransform as T;
    [
        [T::IDENTITY, T::QUARTER, T::HALF, T::THREE_QUARTER],
        [T::QUARTER, T::HALF, T::THREE_QUARTER, T::IDENTITY],
        [T::HALF, T::THREE_QUARTER, T::IDENTITY, T::QUARTER],
        [T::THREE_QUARTER, T::IDENTITY, T::QUARTER, T::HALF],
    ]
};

/// Look up the axis transform for a sensor mount and display rotation pair.
#[inline]
pub fn axis_transform(sensor_orientation: Rotation, display_rotation: Rotation) -> AxisTransform {
    TRANSFORM_TABLE[sensor_orientation.quarter_turns() as usize]
        [display_rotation.quarter_turns() as usize]
}
