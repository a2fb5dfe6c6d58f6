//! [`Booking`] definitions.

use std::borrow::Cow;

use common::{define_kind, unit, DateOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantNames};

use crate::{
    domain::{hotel, user::Email, Stateful},
    filter::{Field, Filterable, Kind},
};

/// Booking of hotel rooms made by a guest.
#[derive(Clone, Debug)]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// Name of the booked [`Hotel`].
    ///
    /// [`Hotel`]: crate::domain::Hotel
    pub hotel_name: Option<hotel::Name>,

    /// Names of the booked rooms.
    pub room_names: Vec<RoomName>,

    /// Full name of the guest.
    pub guest_name: Option<GuestName>,

    /// [`Email`] of the guest.
    pub guest_email: Option<Email>,

    /// [`Date`] of the check-in.
    ///
    /// [`Date`]: common::Date
    pub check_in: Option<CheckInDate>,

    /// [`Date`] of the check-out.
    ///
    /// [`Date`]: common::Date
    pub check_out: Option<CheckOutDate>,

    /// Total price of this [`Booking`].
    pub total_price: Option<Decimal>,

    /// Amount paid in advance.
    pub deposit_amount: Option<Decimal>,

    /// [`PaymentMethod`] of the deposit.
    pub payment_method: Option<PaymentMethod>,

    /// [`Date`] of the deposit payment.
    ///
    /// [`Date`]: common::Date
    pub payment_date: Option<PaymentDate>,

    /// Current [`Status`] of this [`Booking`].
    pub status: Status,
}

/// ID of a [`Booking`].
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

/// Code of a [`Booking`] presented by a guest at the check-in.
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Code(String);

/// Name of a booked room.
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct RoomName(String);

/// Full name of a guest.
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct GuestName(String);

/// Method a [`Booking`] deposit was paid with.
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct PaymentMethod(String);

define_kind! {
    #[doc = "Status of a [`Booking`]."]
    enum Status {
        #[doc = "Created and awaiting a confirmation."]
        Pending = 1,

        #[doc = "Confirmed by the hotel."]
        Confirmed = 2,

        #[doc = "Cancelled."]
        Cancelled = 3,

        #[doc = "Guest has checked out."]
        Completed = 4,

        #[doc = "Deposit has been paid."]
        Deposited = 5,
    }
}

impl Stateful for Booking {
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
}

/// Filterable field of a [`Booking`].
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
    /// [`Booking::guest_email`].
    Email,

    /// [`Booking::guest_name`].
    GuestName,

    /// [`Booking::hotel_name`], matched exactly.
    HotelName,

    /// [`Booking::hotel_name`], matched as a substring.
    HotelNameLike,

    /// [`Booking::status`].
    Status,

    /// Span between [`Booking::check_in`] and [`Booking::check_out`].
    DateRange,
}

impl crate::filter::Key for Key {
    fn kind(self) -> Kind {
        match self {
            Self::Email | Self::GuestName | Self::HotelNameLike => Kind::Text,
            Self::HotelName | Self::Status => Kind::Exact,
            Self::DateRange => Kind::Range,
        }
    }
}

impl Filterable for Booking {
    type Key = Key;

    fn field(&self, key: Key) -> Field<'_> {
        let hotel_name = self.hotel_name.as_ref().map(AsRef::<str>::as_ref);

        match key {
            Key::Email => {
                Field::text(self.guest_email.as_ref().map(AsRef::<str>::as_ref))
            }
            Key::GuestName => {
                Field::text(self.guest_name.as_ref().map(AsRef::<str>::as_ref))
            }
            Key::HotelName => Field::Value(hotel_name.map(Cow::Borrowed)),
            Key::HotelNameLike => Field::text(hotel_name),
            Key::Status => {
                Field::Value(Some(Cow::Borrowed(self.status.as_ref())))
            }
            Key::DateRange => Field::Span(
                self.check_in.map(DateOf::coerce),
                self.check_out.map(DateOf::coerce),
            ),
        }
    }
}

/// [`Date`] of a [`Booking`] check-in.
///
/// [`Date`]: common::Date
pub type CheckInDate = DateOf<(Booking, unit::CheckIn)>;

/// [`Date`] of a [`Booking`] check-out.
///
/// [`Date`]: common::Date
pub type CheckOutDate = DateOf<(Booking, unit::CheckOut)>;

/// [`Date`] of a [`Booking`] deposit payment.
///
/// [`Date`]: common::Date
pub type PaymentDate = DateOf<(Booking, unit::Payment)>;

pub mod list {
    //! [`Booking`]s list definitions.

    #[cfg(doc)]
    use super::Booking;

    /// Selector of a [`Booking`]s list.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum Selector {
        /// Every [`Booking`] on the platform.
        #[default]
        All,

        /// [`Booking`]s of the hotels owned by the current session's user.
        Owned,
    }
}
