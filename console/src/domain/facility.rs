//! [`Facility`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantNames};

use crate::filter::{Field, Filterable, Kind as FilterKind};

/// Facility provided by a hotel or by a room.
#[derive(Clone, Debug)]
pub struct Facility {
    /// ID of this [`Facility`].
    pub id: Id,

    /// [`Name`] of this [`Facility`].
    pub name: Name,
}

/// ID of a [`Facility`].
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
    PartialEq,
    Serialize,
)]
pub struct Id(i64);

/// Name of a [`Facility`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        (!name.is_empty()).then(|| Self(name.to_owned()))
    }
}

/// Kind of a [`Facility`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    /// [`Facility`] of a whole hotel.
    #[default]
    Hotel,

    /// [`Facility`] of a single room.
    Room,
}

/// New [`Facility`] to be created.
#[derive(Clone, Debug)]
pub struct New {
    /// [`Kind`] of the created [`Facility`].
    pub kind: Kind,

    /// [`Name`] of the created [`Facility`].
    pub name: Name,
}

/// Filterable field of a [`Facility`].
#[derive(
    Clone,
    Copy,
    Debug,
    EnumString,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    strum::Display,
    VariantNames,
)]
#[strum(serialize_all = "camelCase")]
pub enum Key {
    /// [`Facility::name`].
    Name,
}

impl crate::filter::Key for Key {
    fn kind(self) -> FilterKind {
        match self {
            Self::Name => FilterKind::Text,
        }
    }
}

impl Filterable for Facility {
    type Key = Key;

    fn field(&self, key: Key) -> Field<'_> {
        match key {
            Key::Name => Field::text(Some(AsRef::<str>::as_ref(&self.name))),
        }
    }
}
