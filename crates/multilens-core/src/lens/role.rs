//! Semantic lens roles and the role-to-lens mapping.

use serde::{Deserialize, Serialize};

use super::LensDescriptor;

/// Semantic category assigned to a lens relative to its peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LensRole {
    Front,
    SuperWide,
    Wide,
    Telephoto,
}

impl LensRole {
    /// All roles in display order.
    pub const ALL: [LensRole; 4] = [
        LensRole::Front,
        LensRole::SuperWide,
        LensRole::Wide,
        LensRole::Telephoto,
    ];
}

/// Mapping from [`LensRole`] to at most one lens.
///
/// Built once by [`classify`](super::classify) and read-only afterwards.
/// Any role may be unbound; callers should disable the matching control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMap<C = ()> {
    pub(crate) front: Option<LensDescriptor<C>>,
    pub(crate) super_wide: Option<LensDescriptor<C>>,
    pub(crate) wide: Option<LensDescriptor<C>>,
    pub(crate) telephoto: Option<LensDescriptor<C>>,
}

impl<C> Default for RoleMap<C> {
    fn default() -> Self {
        Self {
            front: None,
            super_wide: None,
            wide: None,
            telephoto: None,
        }
    }
}

impl<C> RoleMap<C> {
    /// Lens bound to `role`, if any.
    pub fn get(&self, role: LensRole) -> Option<&LensDescriptor<C>> {
        match role {
            LensRole::Front => self.front.as_ref(),
            LensRole::SuperWide => self.super_wide.as_ref(),
            LensRole::Wide => self.wide.as_ref(),
            LensRole::Telephoto => self.telephoto.as_ref(),
        }
    }

    pub fn front(&self) -> Option<&LensDescriptor<C>> {
        self.front.as_ref()
    }

    pub fn super_wide(&self) -> Option<&LensDescriptor<C>> {
        self.super_wide.as_ref()
    }

    pub fn wide(&self) -> Option<&LensDescriptor<C>> {
        self.wide.as_ref()
    }

    pub fn telephoto(&self) -> Option<&LensDescriptor<C>> {
        self.telephoto.as_ref()
    }

    /// Check whether a lens is bound to `role`.
    #[inline]
    pub fn is_bound(&self, role: LensRole) -> bool {
        self.get(role).is_some()
    }

    /// Iterate bound roles in [`LensRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (LensRole, &LensDescriptor<C>)> {
        LensRole::ALL
            .into_iter()
            .filter_map(move |role| self.get(role).map(|lens| (role, lens)))
    }

    /// Role bound to the lens with the given id.
    pub fn role_of(&self, id: &str) -> Option<LensRole> {
        self.iter()
            .find(|(_, lens)| lens.id == id)
            .map(|(role, _)| role)
    }

    /// Number of bound roles.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
