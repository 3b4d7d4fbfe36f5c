//! Lens role classification.
//!
//! Back lenses are ranked by focal length around the lens with the largest
//! sensor area, which is taken to be the main wide-angle lens:
//!
//! ```text
//! sorted by focal length ->  [ ... , super-wide, WIDE, telephoto, ... ]
//!                                                  ^ largest sensor area
//! ```
//!
//! No lens-type metadata is required, only focal length and sensor area.

use std::cmp::Ordering;
use std::sync::OnceLock;

use super::{LensDescriptor, LensRole, RoleMap};

/// Classify physical lenses into semantic roles.
///
/// # Algorithm
///
/// 1. The first non-back lens becomes [`LensRole::Front`]; later ones are ignored.
/// 2. Back lenses are deduplicated on an exact (focal length, sensor area)
///    match, keeping the first occurrence.
/// 3. Candidates are sorted by ascending focal length, then descending
///    sensor area.
/// 4. Wide is the first candidate whose sensor area equals the maximum.
/// 5. Super-wide and telephoto are Wide's left and right neighbours.
///
/// Never fails. Unknown measurements take part as zero, which can cause
/// spurious ties.
pub fn classify<C: Clone>(lenses: &[LensDescriptor<C>]) -> RoleMap<C> {
    let mut map = RoleMap::default();
    let mut candidates: Vec<&LensDescriptor<C>> = Vec::with_capacity(lenses.len());

    for lens in lenses {
        if !lens.facing.is_back() {
            if map.front.is_none() {
                map.front = Some(lens.clone());
            }
            continue;
        }

        let optics = lens.optics();
        if !candidates.iter().any(|c| c.optics() == optics) {
            candidates.push(lens);
        }
    }

    // Stable sort keeps enumeration order for identical keys
    candidates.sort_by(|a, b| compare_candidates(a.optics(), b.optics()));

    let max_area = candidates
        .iter()
        .map(|c| c.sensor_area_mm2.value())
        .fold(f32::NEG_INFINITY, f32::max);

    if let Some(wide_index) = candidates
        .iter()
        .position(|c| c.sensor_area_mm2.value() == max_area)
    {
        map.wide = Some(candidates[wide_index].clone());
        map.super_wide = wide_index
            .checked_sub(1)
            .map(|i| candidates[i].clone());
        map.telephoto = candidates.get(wide_index + 1).map(|&c| c.clone());
    }

    for (role, lens) in map.iter() {
        log::debug!(
            "lens {} -> {:?} (focal {} mm, area {} mm2)",
            lens.id,
            role,
            lens.focal_length_mm.value(),
            lens.sensor_area_mm2.value()
        );
    }

    map
}

/// Ascending focal length, ties broken by descending sensor area.
fn compare_candidates(a: (f32, f32), b: (f32, f32)) -> Ordering {
    a.0.total_cmp(&b.0).then_with(|| b.1.total_cmp(&a.1))
}

/// Holds the [`RoleMap`] for one device, classifying at most once.
///
/// The orchestrator owns one of these per device and shares it by reference.
/// Concurrent first callers are serialized; later calls return the stored
/// map without re-running classification, whatever lens list they pass.
#[derive(Debug)]
pub struct RoleCache<C = ()> {
    map: OnceLock<RoleMap<C>>,
}

impl<C> Default for RoleCache<C> {
    fn default() -> Self {
        Self {
            map: OnceLock::new(),
        }
    }
}

impl<C: Clone> RoleCache<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached map, classifying `lenses` on first use.
    pub fn get_or_classify(&self, lenses: &[LensDescriptor<C>]) -> &RoleMap<C> {
        self.map.get_or_init(|| classify(lenses))
    }

    /// The cached map, if classification has run.
    pub fn get(&self) -> Option<&RoleMap<C>> {
        self.map.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.map.get().is_some()
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
