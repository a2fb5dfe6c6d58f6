//! [`Api`] operations of the [`Http`] client.

use common::operations::{By, Delete, Insert, Perform, Select, Update};
use reqwest::{multipart, Method, StatusCode};
use tracerr::Traced;

use crate::{
    domain::{
        booking, facility, hotel, location, rental, room, Booking, Facility,
        Hotel, Node, Rental, Room, User,
    },
    infra::{api, Api},
};

use super::{dto, Http};

impl Api<Select<By<Vec<Node>, location::Scope>>> for Http {
    type Ok = Vec<Node>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Node>, location::Scope>>,
    ) -> Result<Self::Ok, Self::Err> {
        let scope = by.into_inner();
        let req = match scope {
            location::Scope::Provinces => {
                self.request(Method::GET, "/api/locations/provinces")
            }
            location::Scope::Districts(id) => self
                .request(Method::GET, "/api/locations/districts")
                .query(&[("provinceId", id)]),
            location::Scope::Wards(id) => self
                .request(Method::GET, "/api/locations/wards")
                .query(&[("districtId", id)]),
        };
        Ok(self
            .json::<Vec<dto::Node>>(req)
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|n| n.into_domain(scope))
            .collect())
    }
}

impl Api<Select<By<Vec<Hotel>, hotel::list::Selector>>> for Http {
    type Ok = Vec<Hotel>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Hotel>, hotel::list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = match by.into_inner() {
            hotel::list::Selector::All => "/hotels/all",
            hotel::list::Selector::Pending => "/hotels/pending",
            hotel::list::Selector::Owned => "/hotels/my-hotels",
        };
        Ok(self
            .json::<Vec<dto::Hotel>>(self.request(Method::GET, path))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl Api<Select<By<Hotel, hotel::Id>>> for Http {
    type Ok = Hotel;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Hotel, hotel::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = format!("/hotels/hotels/{}", by.into_inner());
        self.json::<dto::Hotel>(self.request(Method::GET, &path))
            .await
            .map(Into::into)
            .map_err(tracerr::wrap!())
    }
}

impl Api<Update<By<Hotel, (hotel::Id, hotel::Status)>>> for Http {
    type Ok = Hotel;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Hotel, (hotel::Id, hotel::Status)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, status) = by.into_inner();
        let action = match status {
            hotel::Status::Approved => "approve",
            hotel::Status::Rejected => "reject",
            hotel::Status::Pending => {
                return Err(tracerr::new!(api::Error::Unsupported(
                    "returning a hotel to `PENDING`",
                )));
            }
        };
        let path = format!("/hotels/{action}/{id}");
        self.json::<dto::Hotel>(self.request(Method::PUT, &path))
            .await
            .map(Into::into)
            .map_err(tracerr::wrap!())
    }
}

impl Api<Select<By<Vec<Booking>, booking::list::Selector>>> for Http {
    type Ok = Vec<Booking>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Booking>, booking::list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = match by.into_inner() {
            booking::list::Selector::All => "/admin/bookings",
            booking::list::Selector::Owned => "/bookings/hotel-owner/bookings",
        };
        Ok(self
            .json::<Vec<dto::Booking>>(self.request(Method::GET, path))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl Api<Update<By<Booking, (booking::Id, booking::Status)>>> for Http {
    type Ok = Booking;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Booking, (booking::Id, booking::Status)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, status) = by.into_inner();
        let req = self
            .request(Method::PUT, &format!("/admin/bookings/{id}/status"))
            .query(&[("status", status.as_ref())]);
        self.json::<dto::Booking>(req)
            .await
            .map(Into::into)
            .map_err(tracerr::wrap!())
    }
}

impl Api<Perform<By<bool, booking::Id>>> for Http {
    type Ok = bool;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Perform(by): Perform<By<bool, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::PUT, "/bookings/confirm")
            .query(&[("bookingId", by.into_inner())]);
        let resp = self.send(req).await.map_err(tracerr::wrap!())?;
        Ok(resp.status() == StatusCode::OK)
    }
}

impl Api<Perform<By<Booking, booking::Code>>> for Http {
    type Ok = Booking;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Perform(by): Perform<By<Booking, booking::Code>>,
    ) -> Result<Self::Ok, Self::Err> {
        let code = by.into_inner();
        let req = self
            .request(Method::POST, "/bookings/checkin")
            .query(&[("bookingCode", AsRef::<str>::as_ref(&code))]);
        self.json::<dto::Booking>(req)
            .await
            .map(Into::into)
            .map_err(tracerr::wrap!())
    }
}

impl Api<Select<By<Vec<Rental>, ()>>> for Http {
    type Ok = Vec<Rental>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Rental>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .json::<Vec<dto::Rental>>(self.request(Method::GET, "/api/rental"))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl Api<Update<By<Rental, (rental::Id, rental::Approval)>>> for Http {
    type Ok = String;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Rental, (rental::Id, rental::Approval)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, approval) = by.into_inner();
        if approval != rental::Approval::Approved {
            return Err(tracerr::new!(api::Error::Unsupported(
                "revoking a rental approval",
            )));
        }
        let path = format!("/api/rental/approve/{id}");
        self.text(self.request(Method::POST, &path))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Api<Select<By<Vec<User>, ()>>> for Http {
    type Ok = Vec<User>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .json::<Vec<dto::User>>(self.request(Method::GET, "/users/all"))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

/// Returns the endpoint path of [`Facility`]s of the provided
/// [`facility::Kind`].
const fn facilities_path(kind: facility::Kind) -> &'static str {
    match kind {
        facility::Kind::Hotel => "/api/facilities",
        facility::Kind::Room => "/api/roomFacilities",
    }
}

impl Api<Select<By<Vec<Facility>, facility::Kind>>> for Http {
    type Ok = Vec<Facility>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Facility>, facility::Kind>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = facilities_path(by.into_inner());
        Ok(self
            .json::<Vec<dto::Facility>>(self.request(Method::GET, path))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl Api<Insert<facility::New>> for Http {
    type Ok = Facility;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<facility::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, facilities_path(new.kind))
            .json(&dto::NewFacility {
                name: AsRef::<str>::as_ref(&new.name),
            });
        self.json::<dto::Facility>(req)
            .await
            .map(Into::into)
            .map_err(tracerr::wrap!())
    }
}

impl Api<Insert<hotel::Registration>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(form): Insert<hotel::Registration>,
    ) -> Result<Self::Ok, Self::Err> {
        let hotel::Registration {
            name,
            email,
            phone,
            description,
            street,
            address,
            facilities,
        } = form;

        let optional = |v: Option<String>| v.unwrap_or_default();
        let mut multipart = multipart::Form::new()
            .text("name", name.to_string())
            .text("email", optional(email.map(|v| v.to_string())))
            .text("phoneNumber", optional(phone.map(|v| v.to_string())))
            .text(
                "description",
                optional(description.map(|v| v.to_string())),
            )
            .text("street", optional(street.map(|v| v.to_string())))
            .text("provinceId", address.province_id.to_string())
            .text("districtId", address.district_id.to_string())
            .text("wardId", address.ward_id.to_string());
        for id in facilities {
            multipart = multipart.text("facilityIds", id.to_string());
        }

        let req = self
            .request(Method::POST, "/hotels/register")
            .multipart(multipart);
        _ = self.text(req).await.map_err(tracerr::wrap!())?;
        Ok(())
    }
}

impl Api<Update<By<Hotel, (hotel::Id, hotel::Edit)>>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Hotel, (hotel::Id, hotel::Edit)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, edit) = by.into_inner();
        let hotel::Edit {
            name,
            email,
            phone,
            description,
            street,
            address,
            facilities,
        } = edit;

        let optional = |v: Option<String>| v.unwrap_or_default();
        let facilities = facilities
            .iter()
            .map(AsRef::<str>::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        let multipart = multipart::Form::new()
            .text("name", name.to_string())
            .text("email", optional(email.map(|v| v.to_string())))
            .text("phoneNumber", optional(phone.map(|v| v.to_string())))
            .text(
                "description",
                optional(description.map(|v| v.to_string())),
            )
            .text("street", optional(street.map(|v| v.to_string())))
            .text("wardId", address.ward_id.to_string())
            .text("facilityNames", facilities);

        let req = self
            .request(Method::PUT, &format!("/hotels/hotels/update/{id}"))
            .multipart(multipart);
        _ = self.text(req).await.map_err(tracerr::wrap!())?;
        Ok(())
    }
}

impl Api<Select<By<Vec<Room>, hotel::Id>>> for Http {
    type Ok = Vec<Room>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Room>, hotel::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = format!("/api/rooms/{}", by.into_inner());
        Ok(self
            .json::<Vec<dto::Room>>(self.request(Method::GET, &path))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl Api<Select<By<Vec<room::Type>, ()>>> for Http {
    type Ok = Vec<room::Type>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<room::Type>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .json::<Vec<dto::RoomType>>(
                self.request(Method::GET, "/api/room/type"),
            )
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

/// Builds the multipart body of the provided [`room::Form`], listing its
/// facilities under the provided `facilities` field.
fn room_multipart(form: room::Form, facilities: &str) -> multipart::Form {
    let room::Form {
        name,
        price,
        quantity,
        kind,
        deposit,
        facilities: ids,
    } = form;

    let mut multipart = multipart::Form::new()
        .text("name", name.to_string())
        .text("roomPrice", price.to_string())
        .text("quantity", quantity.to_string())
        .text("roomTypeId", kind.to_string())
        .text("depositPercentage", deposit.fraction().to_string());
    for id in ids {
        multipart = multipart.text(facilities.to_owned(), id.to_string());
    }
    multipart
}

impl Api<Insert<room::New>> for Http {
    type Ok = Room;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<room::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let room::New { hotel_id, form } = new;

        let multipart = room_multipart(form, "facilityIds")
            .text("hotelId", hotel_id.to_string());
        let req = self
            .request(Method::POST, "/api/rooms")
            .multipart(multipart);
        self.json::<dto::Room>(req)
            .await
            .map(Into::into)
            .map_err(tracerr::wrap!())
    }
}

impl Api<Update<By<Room, (room::Id, room::Form)>>> for Http {
    type Ok = Room;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Room, (room::Id, room::Form)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, form) = by.into_inner();

        let req = self
            .request(Method::PUT, &format!("/api/rooms/{id}"))
            .multipart(room_multipart(form, "facilityIds[]"));
        self.json::<dto::Room>(req)
            .await
            .map(Into::into)
            .map_err(tracerr::wrap!())
    }
}

impl Api<Delete<By<Room, room::Id>>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Room, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = format!("/rooms/delete/room/{}", by.into_inner());
        _ = self
            .send(self.request(Method::DELETE, &path))
            .await
            .map_err(tracerr::wrap!())?;
        Ok(())
    }
}
