//! Lens classification WASM bindings.

use multilens_core::lens::{classify, Facing, LensDescriptor, LensRole, Measurement, RoleMap};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Helper struct for deserializing JS lens descriptors via serde.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LensJs {
    id: String,
    facing: Facing,
    #[serde(default)]
    focal_length_mm: Option<f32>,
    #[serde(default)]
    sensor_area_mm2: Option<f32>,
}

impl From<LensJs> for LensDescriptor {
    fn from(lens: LensJs) -> Self {
        LensDescriptor::new(
            lens.id,
            lens.facing,
            Measurement::from(lens.focal_length_mm),
            Measurement::from(lens.sensor_area_mm2),
            (),
        )
    }
}

/// Lens ids bound to each role; unbound roles are omitted.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    front: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    super_wide: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wide: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    telephoto: Option<String>,
}

impl From<&RoleMap> for RoleIds {
    fn from(roles: &RoleMap) -> Self {
        let id = |role| roles.get(role).map(|lens| lens.id.clone());
        RoleIds {
            front: id(LensRole::Front),
            super_wide: id(LensRole::SuperWide),
            wide: id(LensRole::Wide),
            telephoto: id(LensRole::Telephoto),
        }
    }
}

fn classify_ids(lenses: Vec<LensJs>) -> RoleIds {
    let descriptors: Vec<LensDescriptor> = lenses.into_iter().map(LensDescriptor::from).collect();
    RoleIds::from(&classify(&descriptors))
}

/// Assign lens ids to roles.
///
/// # Arguments
/// * `lenses` - Array of `{id, facing, focalLengthMm?, sensorAreaMm2?}`
///   objects, with `facing` one of `"front"`, `"back"`, `"external"`
///
/// # Returns
/// An object `{front?, superWide?, wide?, telephoto?}` of lens ids
///
/// # Errors
/// Returns error if the lenses cannot be deserialized
#[wasm_bindgen]
pub fn classify_lenses(lenses: JsValue) -> Result<JsValue, JsValue> {
    let lenses: Vec<LensJs> = serde_wasm_bindgen::from_value(lenses)
        .map_err(|e| JsValue::from_str(&format!("Invalid lens list: {}", e)))?;

    serde_wasm_bindgen::to_value(&classify_ids(lenses))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
