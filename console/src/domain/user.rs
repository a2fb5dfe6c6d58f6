//! [`User`] definitions.

use std::borrow::Cow;

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantNames};

use crate::filter::{Field, Filterable, Kind};

/// Platform user.
#[derive(Clone, Debug)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`FirstName`] of this [`User`].
    pub first_name: Option<FirstName>,

    /// [`LastName`] of this [`User`].
    pub last_name: Option<LastName>,

    /// [`Email`] of this [`User`].
    pub email: Option<Email>,

    /// [`Role`] of this [`User`], if any was assigned.
    pub role: Option<Role>,
}

impl User {
    /// Returns the full name of this [`User`], if any part of it is known.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        full_name(self.first_name.as_ref(), self.last_name.as_ref())
    }
}

/// Joins the provided name parts with a space, skipping the missing ones.
pub(crate) fn full_name(
    first: Option<&impl AsRef<str>>,
    last: Option<&impl AsRef<str>>,
) -> Option<String> {
    let parts = [first.map(AsRef::as_ref), last.map(AsRef::as_ref)];
    let name = parts
        .into_iter()
        .flatten()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!name.is_empty()).then_some(name)
}

/// ID of a [`User`].
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

/// First name of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct FirstName(String);

/// Last name of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct LastName(String);

/// Email address.
///
/// Shared by every entity having a contact address.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Email(String);

/// Name of a [`User`]'s role, as assigned by the backend.
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Role(String);

/// Filterable field of a [`User`].
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
    /// [`User::email`].
    Email,

    /// First and last names of a [`User`].
    Name,

    /// [`User::role`].
    Role,
}

impl crate::filter::Key for Key {
    fn kind(self) -> Kind {
        match self {
            Self::Email | Self::Name => Kind::Text,
            Self::Role => Kind::Exact,
        }
    }
}

impl Filterable for User {
    type Key = Key;

    fn field(&self, key: Key) -> Field<'_> {
        match key {
            Key::Email => {
                Field::text(self.email.as_ref().map(AsRef::<str>::as_ref))
            }
            Key::Name => Field::Text(
                [
                    self.first_name.as_ref().map(AsRef::<str>::as_ref),
                    self.last_name.as_ref().map(AsRef::<str>::as_ref),
                ]
                .into_iter()
                .flatten()
                .collect(),
            ),
            Key::Role => Field::Value(
                self.role
                    .as_ref()
                    .map(|r| Cow::Borrowed(AsRef::<str>::as_ref(r))),
            ),
        }
    }
}
