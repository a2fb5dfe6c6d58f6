//! In-memory [`Api`] used in tests.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use common::operations::{By, Delete, Insert, Perform, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{
        booking, facility, hotel, location, rental, room, Booking, Facility,
        Hotel, Node, Rental, Room, User,
    },
    infra::{api, Api},
};

/// In-memory [`Api`] with scriptable failures.
#[derive(Debug, Default)]
pub(crate) struct Mock {
    /// Location [`Node`]s by their [`location::Scope`].
    pub(crate) nodes: HashMap<location::Scope, Vec<Node>>,

    /// Stored [`Hotel`]s.
    pub(crate) hotels: Vec<Hotel>,

    /// Stored [`Booking`]s.
    pub(crate) bookings: Vec<Booking>,

    /// Stored [`Rental`]s.
    pub(crate) rentals: Vec<Rental>,

    /// Stored [`User`]s.
    pub(crate) users: Vec<User>,

    /// Stored [`Facility`]s.
    pub(crate) facilities: RefCell<Vec<Facility>>,

    /// Accepted [`hotel::Registration`]s.
    pub(crate) registrations: RefCell<Vec<hotel::Registration>>,

    /// Accepted [`hotel::Edit`]s along with the IDs of edited [`Hotel`]s.
    pub(crate) edits: RefCell<Vec<(hotel::Id, hotel::Edit)>>,

    /// Stored [`Room`]s.
    pub(crate) rooms: RefCell<Vec<Room>>,

    /// Offered [`room::Type`]s.
    pub(crate) room_types: Vec<room::Type>,

    /// Whether a booking confirmation is declined.
    pub(crate) declines: bool,

    /// Status every call fails with, if any.
    pub(crate) failure: Option<u16>,

    /// Number of performed calls.
    pub(crate) calls: Cell<usize>,
}

impl Mock {
    /// Makes every call of this [`Mock`] fail with the provided `status`.
    pub(crate) fn failing(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    /// Returns the number of calls performed so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Registers a call, failing it if scripted so.
    fn call(&self) -> Result<(), Traced<api::Error>> {
        self.calls.set(self.calls.get() + 1);
        match self.failure {
            Some(status) => Err(tracerr::new!(api::Error::Rejected {
                status,
                message: "scripted failure".into(),
            })),
            None => Ok(()),
        }
    }

    /// Fills the provided [`Room`] with the details of a [`room::Form`],
    /// resolving its type and facilities among the stored ones.
    fn fill(&self, room: &mut Room, form: room::Form) {
        let facilities = self.facilities.borrow();
        room.name = form.name;
        room.price = form.price;
        room.quantity = form.quantity;
        room.kind = self
            .room_types
            .iter()
            .find(|t| t.id == form.kind)
            .map(|t| t.name.clone());
        room.facilities = facilities
            .iter()
            .filter(|f| form.facilities.contains(&f.id))
            .map(|f| f.name.clone())
            .collect();
        room.deposit = form.deposit.fraction();
    }

    /// Returns an [`api::Error::Rejected`] of a missing entity.
    fn not_found(what: impl std::fmt::Display) -> Traced<api::Error> {
        tracerr::new!(api::Error::Rejected {
            status: 404,
            message: format!("{what} not found"),
        })
    }
}

impl Api<Select<By<Vec<Node>, location::Scope>>> for Mock {
    type Ok = Vec<Node>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Node>, location::Scope>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(self.nodes.get(by.inner()).cloned().unwrap_or_default())
    }
}

impl Api<Select<By<Vec<Hotel>, hotel::list::Selector>>> for Mock {
    type Ok = Vec<Hotel>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Hotel>, hotel::list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(match by.into_inner() {
            hotel::list::Selector::All | hotel::list::Selector::Owned => {
                self.hotels.clone()
            }
            hotel::list::Selector::Pending => self
                .hotels
                .iter()
                .filter(|h| h.status == hotel::Status::Pending)
                .cloned()
                .collect(),
        })
    }
}

impl Api<Select<By<Hotel, hotel::Id>>> for Mock {
    type Ok = Hotel;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Hotel, hotel::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let id = by.into_inner();
        self.hotels
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("hotel `{id}`")))
    }
}

impl Api<Update<By<Hotel, (hotel::Id, hotel::Status)>>> for Mock {
    type Ok = Hotel;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Hotel, (hotel::Id, hotel::Status)>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let (id, status) = by.into_inner();
        let mut hotel = self
            .hotels
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("hotel `{id}`")))?;
        hotel.status = status;
        Ok(hotel)
    }
}

impl Api<Select<By<Vec<Booking>, booking::list::Selector>>> for Mock {
    type Ok = Vec<Booking>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Booking>, booking::list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(self.bookings.clone())
    }
}

impl Api<Update<By<Booking, (booking::Id, booking::Status)>>> for Mock {
    type Ok = Booking;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Booking, (booking::Id, booking::Status)>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let (id, status) = by.into_inner();
        let mut booking = self
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("booking `{id}`")))?;
        booking.status = status;
        Ok(booking)
    }
}

impl Api<Perform<By<bool, booking::Id>>> for Mock {
    type Ok = bool;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Perform<By<bool, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(!self.declines)
    }
}

/// Checks in the [`Booking`] whose ID is written as its [`booking::Code`].
impl Api<Perform<By<Booking, booking::Code>>> for Mock {
    type Ok = Booking;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Perform(by): Perform<By<Booking, booking::Code>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let code = by.into_inner();
        let mut booking = self
            .bookings
            .iter()
            .find(|b| b.id.to_string() == AsRef::<str>::as_ref(&code))
            .cloned()
            .ok_or_else(|| Self::not_found(format!("booking `{code}`")))?;
        booking.status = booking::Status::Completed;
        Ok(booking)
    }
}

impl Api<Select<By<Vec<Rental>, ()>>> for Mock {
    type Ok = Vec<Rental>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Rental>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(self.rentals.clone())
    }
}

impl Api<Update<By<Rental, (rental::Id, rental::Approval)>>> for Mock {
    type Ok = String;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Rental, (rental::Id, rental::Approval)>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let (id, _) = by.into_inner();
        Ok(format!("Rental {id} approved"))
    }
}

impl Api<Select<By<Vec<User>, ()>>> for Mock {
    type Ok = Vec<User>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(self.users.clone())
    }
}

impl Api<Select<By<Vec<Facility>, facility::Kind>>> for Mock {
    type Ok = Vec<Facility>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Facility>, facility::Kind>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(self.facilities.borrow().clone())
    }
}

impl Api<Insert<facility::New>> for Mock {
    type Ok = Facility;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<facility::New>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let mut facilities = self.facilities.borrow_mut();
        let id = i64::try_from(facilities.len()).unwrap_or_default() + 1;
        let facility = Facility {
            id: id.into(),
            name: new.name,
        };
        facilities.push(facility.clone());
        Ok(facility)
    }
}

impl Api<Insert<hotel::Registration>> for Mock {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(form): Insert<hotel::Registration>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        self.registrations.borrow_mut().push(form);
        Ok(())
    }
}

impl Api<Update<By<Hotel, (hotel::Id, hotel::Edit)>>> for Mock {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Hotel, (hotel::Id, hotel::Edit)>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let (id, edit) = by.into_inner();
        if !self.hotels.iter().any(|h| h.id == id) {
            return Err(Self::not_found(format!("hotel `{id}`")));
        }
        self.edits.borrow_mut().push((id, edit));
        Ok(())
    }
}

impl Api<Select<By<Vec<Room>, hotel::Id>>> for Mock {
    type Ok = Vec<Room>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Room>, hotel::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(self.rooms.borrow().clone())
    }
}

impl Api<Select<By<Vec<room::Type>, ()>>> for Mock {
    type Ok = Vec<room::Type>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<room::Type>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(self.room_types.clone())
    }
}

impl Api<Insert<room::New>> for Mock {
    type Ok = Room;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<room::New>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let id = self
            .rooms
            .borrow()
            .iter()
            .map(|r| i64::from(r.id))
            .max()
            .unwrap_or_default()
            + 1;
        let mut room = Room {
            id: id.into(),
            name: new.form.name.clone(),
            price: new.form.price,
            quantity: new.form.quantity,
            kind: None,
            facilities: vec![],
            deposit: new.form.deposit.fraction(),
        };
        self.fill(&mut room, new.form);
        self.rooms.borrow_mut().push(room.clone());
        Ok(room)
    }
}

impl Api<Update<By<Room, (room::Id, room::Form)>>> for Mock {
    type Ok = Room;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Room, (room::Id, room::Form)>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let (id, form) = by.into_inner();
        let mut room = self
            .rooms
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("room `{id}`")))?;
        self.fill(&mut room, form);
        self.rooms
            .borrow_mut()
            .iter_mut()
            .filter(|r| r.id == id)
            .for_each(|r| *r = room.clone());
        Ok(room)
    }
}

impl Api<Delete<By<Room, room::Id>>> for Mock {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Room, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let id = by.into_inner();
        let mut rooms = self.rooms.borrow_mut();
        let pos = rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Self::not_found(format!("room `{id}`")))?;
        _ = rooms.remove(pos);
        Ok(())
    }
}
