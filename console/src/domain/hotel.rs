//! [`Hotel`] definitions.

use std::borrow::Cow;

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantNames};

use crate::{
    domain::{facility, location, user::Email, Stateful},
    filter::{Field, Filterable, Kind},
};

/// Hotel listed on the platform.
#[derive(Clone, Debug)]
pub struct Hotel {
    /// ID of this [`Hotel`].
    pub id: Id,

    /// [`Name`] of this [`Hotel`].
    pub name: Name,

    /// Contact [`Email`] of this [`Hotel`].
    pub email: Option<Email>,

    /// Contact [`Phone`] of this [`Hotel`].
    pub phone: Option<Phone>,

    /// [`Description`] of this [`Hotel`].
    pub description: Option<Description>,

    /// [`Street`] this [`Hotel`] is located on.
    pub street: Option<Street>,

    /// Province this [`Hotel`] is located in.
    pub province: Option<location::Ref>,

    /// District this [`Hotel`] is located in.
    pub district: Option<location::Ref>,

    /// Ward this [`Hotel`] is located in.
    pub ward: Option<location::Ref>,

    /// Names of the facilities this [`Hotel`] provides.
    pub facilities: Vec<facility::Name>,

    /// Moderation [`Status`] of this [`Hotel`].
    pub status: Status,
}

impl Hotel {
    /// Returns the human-readable address of this [`Hotel`].
    ///
    /// Unknown parts are skipped.
    #[must_use]
    pub fn address(&self) -> String {
        let street = self.street.as_ref().map(AsRef::<str>::as_ref);
        let locations = [&self.ward, &self.district, &self.province]
            .into_iter()
            .map(|r| r.as_ref().and_then(|r| r.name.as_ref()));
        [street]
            .into_iter()
            .chain(locations.map(|n| n.map(AsRef::<str>::as_ref)))
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// ID of a [`Hotel`].
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

/// Name of a [`Hotel`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Name(String);

/// Phone number of a [`Hotel`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Phone(String);

/// Free-form description of a [`Hotel`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Description(String);

/// Street address of a [`Hotel`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Street(String);

define_kind! {
    #[doc = "Moderation status of a [`Hotel`]."]
    enum Status {
        #[doc = "Awaiting a decision of a platform admin."]
        Pending = 1,

        #[doc = "Approved and listed."]
        Approved = 2,

        #[doc = "Rejected by a platform admin."]
        Rejected = 3,
    }
}

impl Stateful for Hotel {
    type Id = Id;
    type Status = Status;

    fn id(&self) -> Id {
        self.id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Only [`Status::Pending`] [`Hotel`]s may be decided upon, and the
    /// decision is final.
    fn can_transition(from: Status, to: Status) -> bool {
        matches!(
            (from, to),
            (Status::Pending, Status::Approved | Status::Rejected)
        )
    }
}

/// Filterable field of a [`Hotel`].
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
    /// [`Hotel::name`].
    Name,

    /// [`Hotel::email`].
    Email,

    /// [`Hotel::status`].
    Status,

    /// ID of the [`Hotel::province`].
    Province,

    /// ID of the [`Hotel::district`].
    District,

    /// ID of the [`Hotel::ward`].
    Ward,
}

impl crate::filter::Key for Key {
    fn kind(self) -> Kind {
        match self {
            Self::Name | Self::Email => Kind::Text,
            Self::Status | Self::Province | Self::District | Self::Ward => {
                Kind::Exact
            }
        }
    }
}

impl Filterable for Hotel {
    type Key = Key;

    fn field(&self, key: Key) -> Field<'_> {
        let location = |r: &Option<location::Ref>| {
            Field::display(r.as_ref().map(|r| r.id))
        };

        match key {
            Key::Name => Field::text(Some(AsRef::<str>::as_ref(&self.name))),
            Key::Email => {
                Field::text(self.email.as_ref().map(AsRef::<str>::as_ref))
            }
            Key::Status => {
                Field::Value(Some(Cow::Borrowed(self.status.as_ref())))
            }
            Key::Province => location(&self.province),
            Key::District => location(&self.district),
            Key::Ward => location(&self.ward),
        }
    }
}

/// Form registering a new [`Hotel`] on behalf of its owner.
#[derive(Clone, Debug)]
pub struct Registration {
    /// [`Name`] of the registered [`Hotel`].
    pub name: Name,

    /// Contact [`Email`] of the registered [`Hotel`].
    pub email: Option<Email>,

    /// Contact [`Phone`] of the registered [`Hotel`].
    pub phone: Option<Phone>,

    /// [`Description`] of the registered [`Hotel`].
    pub description: Option<Description>,

    /// [`Street`] of the registered [`Hotel`].
    pub street: Option<Street>,

    /// Complete location of the registered [`Hotel`].
    pub address: location::Address,

    /// IDs of the facilities the registered [`Hotel`] provides.
    pub facilities: Vec<facility::Id>,
}

/// Edited details of an existing [`Hotel`].
///
/// Unlike a [`Registration`], facilities are addressed by their names.
#[derive(Clone, Debug)]
pub struct Edit {
    /// New [`Name`] of the [`Hotel`].
    pub name: Name,

    /// New contact [`Email`] of the [`Hotel`].
    pub email: Option<Email>,

    /// New contact [`Phone`] of the [`Hotel`].
    pub phone: Option<Phone>,

    /// New [`Description`] of the [`Hotel`].
    pub description: Option<Description>,

    /// New [`Street`] of the [`Hotel`].
    pub street: Option<Street>,

    /// New complete location of the [`Hotel`].
    pub address: location::Address,

    /// Names of the facilities the [`Hotel`] provides now.
    pub facilities: Vec<facility::Name>,
}

pub mod list {
    //! [`Hotel`]s list definitions.

    #[cfg(doc)]
    use super::{Hotel, Status};

    /// Selector of a [`Hotel`]s list.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum Selector {
        /// Every [`Hotel`] on the platform.
        #[default]
        All,

        /// [`Hotel`]s in [`Status::Pending`] only.
        Pending,

        /// [`Hotel`]s owned by the current session's user.
        Owned,
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{location, Stateful as _},
        filter::{self, Criteria, Criterion},
    };

    use super::{Hotel, Key, Status};

    fn hotel(id: i64, name: &str, status: Status) -> Hotel {
        Hotel {
            id: id.into(),
            name: name.into(),
            email: None,
            phone: None,
            description: None,
            street: Some("12 Ly Thai To".into()),
            province: Some(location::Ref {
                id: 1.into(),
                name: Some("Ha Noi".into()),
            }),
            district: Some(location::Ref {
                id: 11.into(),
                name: Some("Hoan Kiem".into()),
            }),
            ward: None,
            facilities: vec![],
            status,
        }
    }

    #[test]
    fn only_pending_hotels_transition() {
        assert!(Hotel::can_transition(Status::Pending, Status::Approved));
        assert!(Hotel::can_transition(Status::Pending, Status::Rejected));
        assert!(!Hotel::can_transition(Status::Approved, Status::Rejected));
        assert!(!Hotel::can_transition(Status::Rejected, Status::Approved));
        assert!(!Hotel::can_transition(Status::Pending, Status::Pending));
    }

    #[test]
    fn filters_by_status_and_location() {
        let mut other = hotel(3, "Lotte", Status::Pending);
        other.province = Some(location::Ref {
            id: 79.into(),
            name: None,
        });
        let hotels = [
            hotel(1, "Metropole", Status::Approved),
            hotel(2, "Sofitel", Status::Pending),
            other,
        ];

        let criteria = Criteria::new()
            .with(Key::Status, Criterion::exact("PENDING"))
            .with(Key::Province, Criterion::exact("1"));

        assert_eq!(filter::positions(&hotels, &criteria), [1]);

        let everything = Criteria::new()
            .with(Key::Status, Criterion::exact(Criterion::WILDCARD));

        assert_eq!(filter::positions(&hotels, &everything), [0, 1, 2]);
    }

    #[test]
    fn formats_address() {
        assert_eq!(
            hotel(1, "Metropole", Status::Approved).address(),
            "12 Ly Thai To, Hoan Kiem, Ha Noi",
        );
    }
}
