//! [`Room`] definitions.

use std::borrow::Cow;

use derive_more::{AsRef, Display, Error, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantNames};

use crate::{
    domain::{facility, hotel},
    filter::{Field, Filterable, Kind},
};

/// Room offered by a hotel.
#[derive(Clone, Debug)]
pub struct Room {
    /// ID of this [`Room`].
    pub id: Id,

    /// [`Name`] of this [`Room`].
    pub name: Name,

    /// Price of this [`Room`] per night.
    pub price: Decimal,

    /// Number of identical rooms offered.
    pub quantity: u32,

    /// Name of the [`Type`] of this [`Room`], if known.
    pub kind: Option<TypeName>,

    /// Names of the facilities this [`Room`] provides.
    pub facilities: Vec<facility::Name>,

    /// Share of the price to be paid upfront, as a fraction of one.
    pub deposit: Decimal,
}

/// ID of a [`Room`].
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

/// Name of a [`Room`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Name(String);

/// Type of a [`Room`] (single, double, suite and so on).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Type {
    /// ID of this [`Type`].
    pub id: TypeId,

    /// [`TypeName`] of this [`Type`].
    pub name: TypeName,
}

/// ID of a room [`Type`].
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
pub struct TypeId(i64);

/// Name of a room [`Type`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct TypeName(String);

/// Deposit of a [`Room`] in whole percents of its price.
///
/// Offered in steps of [`Deposit::STEP`] percents up to a full prepayment.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[display("{_0}%")]
pub struct Deposit(u8);

impl Deposit {
    /// Granularity of a [`Deposit`], in percents.
    pub const STEP: u8 = 5;

    /// Creates a new [`Deposit`] of the provided `percent`, if it's one of
    /// the offered ones.
    #[must_use]
    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= 100 && percent % Self::STEP == 0 {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Returns this [`Deposit`] as a fraction of one.
    #[must_use]
    pub fn fraction(self) -> Decimal {
        Decimal::new(self.0.into(), 2)
    }
}

/// Details of a [`Room`] as entered, before validation.
#[derive(Clone, Debug)]
pub struct Draft {
    /// Name of the [`Room`].
    pub name: String,

    /// Price of the [`Room`] per night.
    pub price: Decimal,

    /// Number of identical rooms offered.
    pub quantity: u32,

    /// ID of the room [`Type`].
    pub kind: TypeId,

    /// Deposit in percents of the price.
    pub deposit: u8,

    /// IDs of the facilities the [`Room`] provides.
    pub facilities: Vec<facility::Id>,
}

impl Draft {
    /// Validates this [`Draft`] into a [`Form`].
    ///
    /// # Errors
    ///
    /// With the first [`Invalid`] detail found.
    pub fn validate(self) -> Result<Form, Invalid> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Invalid::EmptyName);
        }
        if self.price <= Decimal::ZERO {
            return Err(Invalid::NonPositivePrice(self.price));
        }
        if self.quantity == 0 {
            return Err(Invalid::ZeroQuantity);
        }
        let deposit =
            Deposit::new(self.deposit).ok_or(Invalid::Deposit(self.deposit))?;

        Ok(Form {
            name: name.into(),
            price: self.price,
            quantity: self.quantity,
            kind: self.kind,
            deposit,
            facilities: self.facilities,
        })
    }
}

/// Invalid detail of a [`Draft`].
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum Invalid {
    /// [`Name`] is blank.
    #[display("room name is required")]
    EmptyName,

    /// Price is zero or negative.
    #[display("room price must be positive, got `{_0}`")]
    NonPositivePrice(#[error(not(source))] Decimal),

    /// No rooms are offered.
    #[display("room quantity must be at least 1")]
    ZeroQuantity,

    /// Deposit is not one of the offered percentages.
    #[display("deposit must be a multiple of 5% up to 100%, got `{_0}%`")]
    Deposit(#[error(not(source))] u8),
}

/// Validated details of a [`Room`] to be created or updated.
#[derive(Clone, Debug)]
pub struct Form {
    /// [`Name`] of the [`Room`].
    pub name: Name,

    /// Price of the [`Room`] per night.
    pub price: Decimal,

    /// Number of identical rooms offered.
    pub quantity: u32,

    /// ID of the room [`Type`].
    pub kind: TypeId,

    /// [`Deposit`] of the [`Room`].
    pub deposit: Deposit,

    /// IDs of the facilities the [`Room`] provides.
    pub facilities: Vec<facility::Id>,
}

/// New [`Room`] to be added to a hotel.
#[derive(Clone, Debug)]
pub struct New {
    /// ID of the hotel the [`Room`] belongs to.
    pub hotel_id: hotel::Id,

    /// Details of the [`Room`].
    pub form: Form,
}

/// Filterable field of a [`Room`].
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
    /// [`Room::name`].
    Name,

    /// [`Room::kind`].
    Type,

    /// One of the [`Room::facilities`].
    Facility,
}

impl crate::filter::Key for Key {
    fn kind(self) -> Kind {
        match self {
            Self::Name => Kind::Text,
            Self::Type | Self::Facility => Kind::Exact,
        }
    }
}

impl Filterable for Room {
    type Key = Key;

    fn field(&self, key: Key) -> Field<'_> {
        match key {
            Key::Name => Field::text(Some(AsRef::<str>::as_ref(&self.name))),
            Key::Type => Field::Value(
                self.kind
                    .as_ref()
                    .map(|k| Cow::Borrowed(AsRef::<str>::as_ref(k))),
            ),
            Key::Facility => Field::Text(
                self.facilities
                    .iter()
                    .map(AsRef::<str>::as_ref)
                    .collect(),
            ),
        }
    }
}
