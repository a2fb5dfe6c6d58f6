//! Domain definitions.

pub mod booking;
pub mod facility;
pub mod hotel;
pub mod location;
pub mod rental;
pub mod room;
pub mod session;
pub mod user;

use std::fmt;

pub use self::{
    booking::Booking, facility::Facility, hotel::Hotel, location::Node,
    rental::Rental, room::Room, session::Session, user::User,
};

/// Entity owning an administrative status.
pub trait Stateful {
    /// Type of this entity's ID.
    type Id: Copy + fmt::Debug + fmt::Display + Eq;

    /// Type of this entity's status.
    type Status: Copy + fmt::Debug + fmt::Display + Eq;

    /// Returns ID of this entity.
    fn id(&self) -> Self::Id;

    /// Returns the current status of this entity.
    fn status(&self) -> Self::Status;

    /// Returns a mutable reference to the status of this entity.
    fn status_mut(&mut self) -> &mut Self::Status;

    /// Indicates whether the status may be changed from `from` to `to` on the
    /// client side.
    ///
    /// The server remains authoritative, so everything is allowed by default.
    fn can_transition(from: Self::Status, to: Self::Status) -> bool {
        _ = (from, to);
        true
    }
}
