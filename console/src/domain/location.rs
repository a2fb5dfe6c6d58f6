//! Administrative location [`Node`] definitions.
//!
//! Locations form a three-[`Tier`] tree: a province contains districts, a
//! district contains wards.

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Node of the administrative location tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    /// ID of this [`Node`].
    pub id: Id,

    /// [`Name`] of this [`Node`].
    pub name: Name,

    /// ID of the parent [`Node`].
    ///
    /// [`None`] for a [`Tier::Province`].
    pub parent_id: Option<Id>,
}

define_kind! {
    #[doc = "Tier of a location [`Node`]."]
    enum Tier {
        #[doc = "Top-level region."]
        Province = 1,

        #[doc = "Subdivision of a province."]
        District = 2,

        #[doc = "Subdivision of a district."]
        Ward = 3,
    }
}

/// ID of a location [`Node`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(i64);

/// Name of a location [`Node`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Name(String);

/// Reference to a location [`Node`] embedded into another entity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ref {
    /// ID of the referenced [`Node`].
    pub id: Id,

    /// [`Name`] of the referenced [`Node`], if known.
    pub name: Option<Name>,
}

/// Scope of a location [`Node`]s listing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scope {
    /// All the provinces.
    Provinces,

    /// Districts of the province with the provided ID.
    Districts(Id),

    /// Wards of the district with the provided ID.
    Wards(Id),
}

impl Scope {
    /// Returns [`Tier`] of the [`Node`]s listed in this [`Scope`].
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Provinces => Tier::Province,
            Self::Districts(_) => Tier::District,
            Self::Wards(_) => Tier::Ward,
        }
    }

    /// Returns ID of the parent [`Node`] of this [`Scope`], if any.
    #[must_use]
    pub const fn parent_id(self) -> Option<Id> {
        match self {
            Self::Provinces => None,
            Self::Districts(id) | Self::Wards(id) => Some(id),
        }
    }
}

/// Complete selection of a location down to a ward.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Address {
    /// ID of the selected province.
    pub province_id: Id,

    /// ID of the selected district.
    pub district_id: Id,

    /// ID of the selected ward.
    pub ward_id: Id,
}
