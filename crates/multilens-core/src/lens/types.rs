//! Core types describing a physical lens.

use serde::{Deserialize, Serialize};

/// Direction a lens faces relative to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Same side as the display.
    Front,
    /// Opposite side to the display.
    #[default]
    Back,
    /// Externally attached camera.
    External,
}

impl Facing {
    /// Returns true for rear-facing lenses, the only ones that take part in
    /// wide/super-wide/telephoto classification.
    #[inline]
    pub fn is_back(self) -> bool {
        matches!(self, Facing::Back)
    }
}

/// An optical measurement the platform may or may not report.
///
/// `Unknown` takes part in arithmetic as `0.0`, but callers can still tell
/// it apart from a measured zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f32>", into = "Option<f32>")]
pub enum Measurement {
    /// Value reported by the platform.
    Known(f32),
    /// Not reported.
    #[default]
    Unknown,
}

impl Measurement {
    /// Numeric value, with `Unknown` treated as zero.
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Measurement::Known(v) => v,
            Measurement::Unknown => 0.0,
        }
    }

    #[inline]
    pub fn is_known(self) -> bool {
        matches!(self, Measurement::Known(_))
    }
}

impl From<Option<f32>> for Measurement {
    fn from(value: Option<f32>) -> Self {
        match value {
            Some(v) => Measurement::Known(v),
            None => Measurement::Unknown,
        }
    }
}

impl From<Measurement> for Option<f32> {
    fn from(value: Measurement) -> Self {
        match value {
            Measurement::Known(v) => Some(v),
            Measurement::Unknown => None,
        }
    }
}

/// Static optical metadata for one physical lens.
///
/// `characteristics` is an opaque handle to the platform's full
/// characteristic set. It is carried through classification untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensDescriptor<C = ()> {
    /// Platform identifier for the lens.
    pub id: String,
    /// Facing direction.
    pub facing: Facing,
    /// Focal length in millimetres.
    pub focal_length_mm: Measurement,
    /// Physical sensor area (width x height) in square millimetres.
    pub sensor_area_mm2: Measurement,
    /// Platform characteristics handle.
    pub characteristics: C,
}

impl<C> LensDescriptor<C> {
    pub fn new(
        id: impl Into<String>,
        facing: Facing,
        focal_length_mm: Measurement,
        sensor_area_mm2: Measurement,
        characteristics: C,
    ) -> Self {
        Self {
            id: id.into(),
            facing,
            focal_length_mm,
            sensor_area_mm2,
            characteristics,
        }
    }

    /// Build a descriptor from the raw fields a camera platform reports.
    ///
    /// # Arguments
    ///
    /// * `focal_lengths` - Available focal lengths; only the first is used
    /// * `physical_size_mm` - Sensor (width, height) in millimetres, if reported
    ///
    /// Missing values become [`Measurement::Unknown`].
    pub fn from_platform(
        id: impl Into<String>,
        facing: Facing,
        focal_lengths: &[f32],
        physical_size_mm: Option<(f32, f32)>,
        characteristics: C,
    ) -> Self {
        let focal_length_mm = Measurement::from(focal_lengths.first().copied());
        let sensor_area_mm2 = Measurement::from(physical_size_mm.map(|(w, h)| w * h));
        Self::new(id, facing, focal_length_mm, sensor_area_mm2, characteristics)
    }

    /// The (focal length, sensor area) pair used for deduplication and sorting.
    #[inline]
    pub(crate) fn optics(&self) -> (f32, f32) {
        (self.focal_length_mm.value(), self.sensor_area_mm2.value())
    }
}
