//! [`Rental`] definitions.

use std::borrow::Cow;

use common::define_kind;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantNames};

use crate::{
    domain::{
        user::{self, Email},
        Stateful,
    },
    filter::{Field, Filterable, Kind},
};

/// Account of a hotel owner renting out rooms through the platform.
#[derive(Clone, Debug)]
pub struct Rental {
    /// ID of this [`Rental`].
    pub id: Id,

    /// First name of the owner.
    pub first_name: Option<user::FirstName>,

    /// Last name of the owner.
    pub last_name: Option<user::LastName>,

    /// [`Email`] of the owner.
    pub email: Option<Email>,

    /// [`Approval`] of this [`Rental`] account.
    pub approval: Approval,
}

impl Rental {
    /// Returns the full name of the owner, if any part of it is known.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        user::full_name(self.first_name.as_ref(), self.last_name.as_ref())
    }
}

/// ID of a [`Rental`].
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

define_kind! {
    #[doc = "Approval of a [`Rental`] account."]
    enum Approval {
        #[doc = "Awaiting a decision of a platform admin."]
        Pending = 1,

        #[doc = "Allowed to list hotels."]
        Approved = 2,
    }
}

impl From<bool> for Approval {
    fn from(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::Pending
        }
    }
}

impl Stateful for Rental {
    type Id = Id;
    type Status = Approval;

    fn id(&self) -> Id {
        self.id
    }

    fn status(&self) -> Approval {
        self.approval
    }

    fn status_mut(&mut self) -> &mut Approval {
        &mut self.approval
    }

    fn can_transition(from: Approval, to: Approval) -> bool {
        matches!((from, to), (Approval::Pending, Approval::Approved))
    }
}

/// Filterable field of a [`Rental`].
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
    /// Any of the first name, last name or email.
    Search,

    /// [`Rental::approval`].
    Approval,
}

impl crate::filter::Key for Key {
    fn kind(self) -> Kind {
        match self {
            Self::Search => Kind::Text,
            Self::Approval => Kind::Exact,
        }
    }
}

impl Filterable for Rental {
    type Key = Key;

    fn field(&self, key: Key) -> Field<'_> {
        match key {
            Key::Search => Field::Text(
                [
                    self.first_name.as_ref().map(AsRef::<str>::as_ref),
                    self.last_name.as_ref().map(AsRef::<str>::as_ref),
                    self.email.as_ref().map(AsRef::<str>::as_ref),
                ]
                .into_iter()
                .flatten()
                .collect(),
            ),
            Key::Approval => {
                Field::Value(Some(Cow::Borrowed(self.approval.as_ref())))
            }
        }
    }
}
