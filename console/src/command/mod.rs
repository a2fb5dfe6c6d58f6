//! [`Command`] definition.

pub mod add_facility;
pub mod add_room;
pub mod check_in_booking;
pub mod confirm_booking;
pub mod delete_room;
pub mod load_provinces;
pub mod register_hotel;
pub mod restore_location;
pub mod select_location;
pub mod transition_status;
pub mod update_hotel;
pub mod update_room;

/// [`Command`] of the [`Console`].
///
/// [`Console`]: crate::Console
pub use common::Handler as Command;

pub use self::{
    add_facility::AddFacility, add_room::AddRoom,
    check_in_booking::CheckInBooking, confirm_booking::ConfirmBooking,
    delete_room::DeleteRoom, load_provinces::LoadProvinces,
    register_hotel::RegisterHotel, restore_location::RestoreLocation,
    select_location::SelectLocation, transition_status::TransitionStatus,
    update_hotel::UpdateHotel, update_room::UpdateRoom,
};
