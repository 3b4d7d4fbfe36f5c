//! Lens descriptors and role classification.
//!
//! A multi-lens device enumerates its physical lenses with optical metadata
//! but no explicit lens type. This module turns that list into semantic
//! roles (front, super-wide, wide, telephoto) so the application can offer
//! one control per role.
//!
//! # Examples
//!
//! ```ignore
//! use multilens_core::lens::{classify, Facing, LensDescriptor, LensRole};
//!
//! let lenses = vec![
//!     LensDescriptor::from_platform("0", Facing::Back, &[5.4], Some((7.6, 5.7)), ()),
//!     LensDescriptor::from_platform("2", Facing::Back, &[2.2], Some((4.0, 3.0)), ()),
//! ];
//! let roles = classify(&lenses);
//! assert_eq!(roles.get(LensRole::Wide).unwrap().id, "0");
//! ```

mod classify;
mod role;
mod types;

pub use classify::{classify, RoleCache};
pub use role::{LensRole, RoleMap};
pub use types::{Facing, LensDescriptor, Measurement};
