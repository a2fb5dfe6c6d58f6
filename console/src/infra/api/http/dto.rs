//! Wire representations of the remote REST backend.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{
    self,
    booking::{self, CheckInDate, CheckOutDate, PaymentDate},
    facility, hotel, location, rental, room, user,
};

/// Deserializes a value out of its string representation.
fn from_str<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err: fmt::Display>,
{
    let s = String::deserialize(de)?;
    s.parse().map_err(serde::de::Error::custom)
}

/// Location node.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Node {
    id: i64,
    name: String,
    #[serde(default)]
    parent_id: Option<i64>,
}

impl Node {
    /// Converts this [`Node`] into a domain one, listed in the provided
    /// [`location::Scope`].
    pub(super) fn into_domain(self, scope: location::Scope) -> domain::Node {
        domain::Node {
            id: self.id.into(),
            name: self.name.into(),
            parent_id: self.parent_id.map(Into::into).or(scope.parent_id()),
        }
    }
}

/// Location reference nested into a [`Hotel`].
#[derive(Debug, Deserialize)]
struct NestedRef {
    id: i64,
    #[serde(default)]
    name: Option<String>,
}

/// Ward nested into a [`Hotel`].
#[derive(Debug, Deserialize)]
struct NestedWard {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    district: Option<NestedDistrict>,
}

/// District nested into a [`NestedWard`].
#[derive(Debug, Deserialize)]
struct NestedDistrict {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    province: Option<NestedRef>,
}

/// Hotel.
///
/// Location is either flattened into `*Id`/`*Name` pairs or nested under
/// `ward`, depending on the endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Hotel {
    id: i64,
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    street: Option<String>,
    #[serde(default)]
    province_id: Option<i64>,
    #[serde(default)]
    province_name: Option<String>,
    #[serde(default)]
    district_id: Option<i64>,
    #[serde(default)]
    district_name: Option<String>,
    #[serde(default)]
    ward_id: Option<i64>,
    #[serde(default)]
    ward_name: Option<String>,
    #[serde(default)]
    ward: Option<NestedWard>,
    #[serde(default)]
    facility_names: Vec<String>,
    #[serde(deserialize_with = "from_str")]
    status: hotel::Status,
}

impl From<Hotel> for domain::Hotel {
    fn from(dto: Hotel) -> Self {
        let reference = |id: Option<i64>, name: Option<String>| {
            id.map(|id| location::Ref {
                id: id.into(),
                name: name.map(Into::into),
            })
        };
        let nested = |r: NestedRef| reference(Some(r.id), r.name);

        let mut ward = reference(dto.ward_id, dto.ward_name);
        let mut district = reference(dto.district_id, dto.district_name);
        let mut province = reference(dto.province_id, dto.province_name);
        if let Some(w) = dto.ward {
            let d = w.district;
            ward = ward.or(reference(Some(w.id), w.name));
            if let Some(d) = d {
                province = province.or(d.province.and_then(nested));
                district = district.or(reference(Some(d.id), d.name));
            }
        }

        Self {
            id: dto.id.into(),
            name: dto.name.into(),
            email: dto.email.map(Into::into),
            phone: dto.phone_number.map(Into::into),
            description: dto.description.map(Into::into),
            street: dto.street.map(Into::into),
            province,
            district,
            ward,
            facilities: dto.facility_names.into_iter().map(Into::into).collect(),
            status: dto.status,
        }
    }
}

/// Booking.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Booking {
    #[serde(alias = "id")]
    booking_id: i64,
    #[serde(default)]
    hotel_name: Option<String>,
    #[serde(default)]
    room_names: Vec<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    check_in_date: Option<CheckInDate>,
    #[serde(default)]
    check_out_date: Option<CheckOutDate>,
    #[serde(default)]
    total_price: Option<Decimal>,
    #[serde(default)]
    deposit_amount: Option<Decimal>,
    #[serde(default)]
    payment_method: Option<String>,
    #[serde(default)]
    payment_date: Option<PaymentDate>,
    #[serde(deserialize_with = "from_str")]
    status: booking::Status,
}

impl From<Booking> for domain::Booking {
    fn from(dto: Booking) -> Self {
        Self {
            id: dto.booking_id.into(),
            hotel_name: dto.hotel_name.map(Into::into),
            room_names: dto.room_names.into_iter().map(Into::into).collect(),
            guest_name: dto.name.map(Into::into),
            guest_email: dto.email.map(Into::into),
            check_in: dto.check_in_date,
            check_out: dto.check_out_date,
            total_price: dto.total_price,
            deposit_amount: dto.deposit_amount,
            payment_method: dto.payment_method.map(Into::into),
            payment_date: dto.payment_date,
            status: dto.status,
        }
    }
}

/// Hotel owner account.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Rental {
    id: i64,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    approved: bool,
}

impl From<Rental> for domain::Rental {
    fn from(dto: Rental) -> Self {
        Self {
            id: rental::Id::from(dto.id),
            first_name: dto.first_name.map(Into::into),
            last_name: dto.last_name.map(Into::into),
            email: dto.email.map(Into::into),
            approval: dto.approved.into(),
        }
    }
}

/// Platform user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct User {
    id: i64,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role_name: Option<String>,
}

impl From<User> for domain::User {
    fn from(dto: User) -> Self {
        Self {
            id: user::Id::from(dto.id),
            first_name: dto.first_name.map(Into::into),
            last_name: dto.last_name.map(Into::into),
            email: dto.email.map(Into::into),
            role: dto.role_name.filter(|r| !r.is_empty()).map(Into::into),
        }
    }
}

/// Hotel or room facility.
#[derive(Debug, Deserialize)]
pub(super) struct Facility {
    id: i64,
    name: String,
}

impl From<Facility> for domain::Facility {
    fn from(dto: Facility) -> Self {
        Self {
            id: facility::Id::from(dto.id),
            name: dto.name.into(),
        }
    }
}

/// Request creating a new facility.
#[derive(Debug, Serialize)]
pub(super) struct NewFacility<'a> {
    pub(super) name: &'a str,
}

/// Room type.
#[derive(Debug, Deserialize)]
pub(super) struct RoomType {
    id: i64,
    name: String,
}

impl From<RoomType> for room::Type {
    fn from(dto: RoomType) -> Self {
        Self {
            id: dto.id.into(),
            name: dto.name.into(),
        }
    }
}

/// Room of a hotel.
///
/// Type is either a bare name or nested under `roomTypeDetails`, depending
/// on the endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Room {
    id: i64,
    name: String,
    room_price: Decimal,
    #[serde(default)]
    quantity: u32,
    #[serde(default)]
    room_type: Option<String>,
    #[serde(default)]
    room_type_details: Option<RoomType>,
    #[serde(default)]
    facilities: Vec<String>,
    #[serde(default)]
    deposit_percentage: Decimal,
}

impl From<Room> for domain::Room {
    fn from(dto: Room) -> Self {
        let kind = dto
            .room_type
            .or(dto.room_type_details.map(|t| t.name))
            .filter(|t| !t.is_empty());

        Self {
            id: dto.id.into(),
            name: dto.name.into(),
            price: dto.room_price,
            quantity: dto.quantity,
            kind: kind.map(Into::into),
            facilities: dto.facilities.into_iter().map(Into::into).collect(),
            deposit: dto.deposit_percentage,
        }
    }
}
