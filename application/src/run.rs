//! Execution of a parsed [`Command`].

use console::{
    command::{
        AddFacility, AddRoom, CheckInBooking, Command as _, ConfirmBooking,
        DeleteRoom, LoadProvinces, RegisterHotel, RestoreLocation,
        SelectLocation, TransitionStatus, UpdateHotel, UpdateRoom,
    },
    domain::{
        booking, facility, hotel,
        location::{self, Tier},
        rental, Booking, Facility, Hotel, Rental, Room, User,
    },
    filter::Filterable,
    query::{self, list},
    view::{Cascade, List},
};

use crate::{
    args::{Command, Filter},
    error::Classify as _,
    output::{self, Row as _},
    Console, Error,
};

/// Executes the provided [`Command`] with the provided [`Console`], printing
/// its outcome.
///
/// # Errors
///
/// If the [`Command`] fails.
pub async fn run(console: &Console, command: Command) -> Result<(), Error> {
    match command {
        Command::Hotels {
            pending,
            owned,
            filters,
        } => {
            let by = if pending {
                hotel::list::Selector::Pending
            } else if owned {
                hotel::list::Selector::Owned
            } else {
                hotel::list::Selector::All
            };
            let view = hotels(console, by, filters).await?;
            output::print(view.visible());
        }
        Command::Hotel { id } => {
            let hotel = console
                .execute(query::hotel::ById::by(id))
                .await
                .map_err(|e| e.into_error())?;
            println!("{}", hotel.row());
            let facilities = hotel
                .facilities
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            println!("facilities: {}", facilities.join(", "));
            if let Some(description) = &hotel.description {
                println!("{description}");
            }
        }
        Command::ApproveHotel { id } => {
            decide_hotel(console, id, hotel::Status::Approved).await?;
        }
        Command::RejectHotel { id } => {
            decide_hotel(console, id, hotel::Status::Rejected).await?;
        }
        Command::RegisterHotel {
            name,
            email,
            phone,
            description,
            street,
            province,
            district,
            ward,
            facilities,
        } => {
            let mut cascade = Cascade::new();
            select(console, &mut cascade, Tier::Province, province).await?;
            select(console, &mut cascade, Tier::District, district).await?;
            select(console, &mut cascade, Tier::Ward, ward).await?;

            console
                .execute(RegisterHotel {
                    cascade: &cascade,
                    name,
                    email,
                    phone,
                    description,
                    street,
                    facilities,
                })
                .await
                .map_err(|e| e.into_error())?;
            println!("hotel registered, awaiting approval");
        }
        Command::UpdateHotel {
            id,
            name,
            email,
            phone,
            description,
            street,
            province,
            district,
            ward,
            facilities,
        } => {
            let hotel = console
                .execute(query::hotel::ById::by(id))
                .await
                .map_err(|e| e.into_error())?;

            let mut cascade = Cascade::new();
            console
                .execute(RestoreLocation {
                    cascade: &mut cascade,
                    province: hotel.province.as_ref().map(|r| r.id),
                    district: hotel.district.as_ref().map(|r| r.id),
                    ward: hotel.ward.as_ref().map(|r| r.id),
                })
                .await
                .map_err(|e| e.into_error())?;
            for (tier, id) in [
                (Tier::Province, province),
                (Tier::District, district),
                (Tier::Ward, ward),
            ] {
                if let Some(id) = id {
                    select(console, &mut cascade, tier, id).await?;
                }
            }

            let facilities = if facilities.is_empty() {
                hotel.facilities.clone()
            } else {
                facilities.into_iter().map(Into::into).collect()
            };
            console
                .execute(UpdateHotel {
                    cascade: &cascade,
                    id,
                    name: name.unwrap_or_else(|| hotel.name.to_string()),
                    email: or_current(email, hotel.email.as_ref()),
                    phone: or_current(phone, hotel.phone.as_ref()),
                    description: or_current(
                        description,
                        hotel.description.as_ref(),
                    ),
                    street: or_current(street, hotel.street.as_ref()),
                    facilities,
                })
                .await
                .map_err(|e| e.into_error())?;
            println!("hotel #{id} updated");
        }
        Command::Rooms { hotel, filters } => {
            let view = rooms(console, hotel, filters).await?;
            output::print(view.visible());
        }
        Command::RoomTypes => {
            let types = console
                .execute(query::room::Types::by(()))
                .await
                .map_err(|e| e.into_error())?;
            output::print(&types);
        }
        Command::AddRoom { hotel, room } => {
            let mut view = rooms(console, hotel, vec![]).await?;
            let created = console
                .execute(AddRoom {
                    view: &mut view,
                    hotel,
                    draft: room.into(),
                })
                .await
                .map_err(|e| e.into_error())?;
            println!("{}", created.row());
        }
        Command::UpdateRoom { hotel, id, room } => {
            let mut view = rooms(console, hotel, vec![]).await?;
            let updated = console
                .execute(UpdateRoom {
                    view: &mut view,
                    id,
                    draft: room.into(),
                })
                .await
                .map_err(|e| e.into_error())?;
            println!("{}", updated.row());
        }
        Command::DeleteRoom { hotel, id } => {
            let mut view = rooms(console, hotel, vec![]).await?;
            console
                .execute(DeleteRoom { view: &mut view, id })
                .await
                .map_err(|e| e.into_error())?;
            output::print(view.visible());
        }
        Command::Bookings {
            owned,
            hotel_names,
            filters,
        } => {
            let by = if owned {
                booking::list::Selector::Owned
            } else {
                booking::list::Selector::All
            };
            let view = bookings(console, by, filters).await?;
            if hotel_names {
                for name in view.distinct(booking::Key::HotelName) {
                    println!("{name}");
                }
            } else {
                output::print(view.visible());
            }
        }
        Command::SetBookingStatus { id, status } => {
            let mut view =
                bookings(console, booking::list::Selector::All, vec![]).await?;
            let updated = console
                .execute(TransitionStatus {
                    view: &mut view,
                    id,
                    status,
                })
                .await
                .map_err(|e| e.into_error())?;
            println!("{}", updated.row());
        }
        Command::ConfirmBooking { id } => {
            let mut view =
                bookings(console, booking::list::Selector::Owned, vec![])
                    .await?;
            console
                .execute(ConfirmBooking { view: &mut view, id })
                .await
                .map_err(|e| e.into_error())?;
            match view.get(id) {
                Some(b) => println!("{}", b.row()),
                None => println!("booking #{id} confirmed"),
            }
        }
        Command::CheckIn { code } => {
            let mut view =
                bookings(console, booking::list::Selector::Owned, vec![])
                    .await?;
            let booking = console
                .execute(CheckInBooking {
                    view: &mut view,
                    code,
                })
                .await
                .map_err(|e| e.into_error())?;
            println!("{}", booking.row());
        }
        Command::Rentals { filters } => {
            let view = rentals(console, filters).await?;
            output::print(view.visible());
        }
        Command::ApproveRental { id } => {
            let mut view = rentals(console, vec![]).await?;
            let message = console
                .execute(TransitionStatus {
                    view: &mut view,
                    id,
                    status: rental::Approval::Approved,
                })
                .await
                .map_err(|e| e.into_error())?;
            println!("{message}");
        }
        Command::Users { filters } => {
            let mut view = List::<User>::new();
            filter(&mut view, filters)?;
            console
                .execute(list::Users {
                    view: &mut view,
                    by: (),
                })
                .await
                .map_err(|e| e.into_error())?;
            output::print(view.visible());
        }
        Command::Facilities { kind, filters } => {
            let view = facilities(console, kind, filters).await?;
            output::print(view.visible());
        }
        Command::AddFacility { kind, name } => {
            let mut view = facilities(console, kind, vec![]).await?;
            let created = console
                .execute(AddFacility {
                    view: &mut view,
                    kind,
                    name,
                })
                .await
                .map_err(|e| e.into_error())?;
            println!("{}", created.row());
        }
        Command::Locations { province, district } => {
            let mut cascade = Cascade::new();
            let mut tier = Tier::Province;
            if let Some(id) = province {
                select(console, &mut cascade, Tier::Province, id).await?;
                tier = Tier::District;
            }
            if let Some(id) = district {
                select(console, &mut cascade, Tier::District, id).await?;
                tier = Tier::Ward;
            }
            output::print(cascade.level(tier).options());
        }
    }
    Ok(())
}

/// Returns the provided `input`, falling back to the `current` value.
fn or_current(
    input: Option<String>,
    current: Option<&impl ToString>,
) -> Option<String> {
    input.or_else(|| current.map(ToString::to_string))
}

/// Applies the provided [`Filter`]s to the provided [`List`] view.
fn filter<E: Filterable>(
    view: &mut List<E>,
    filters: Vec<Filter>,
) -> Result<(), Error> {
    for Filter { key, value } in filters {
        _ = view
            .set_filter_str(&key, &value)
            .map_err(|e| e.into_error())?;
    }
    Ok(())
}

/// Loads [`Hotel`]s selected by the provided [`hotel::list::Selector`] under
/// the provided [`Filter`]s.
async fn hotels(
    console: &Console,
    by: hotel::list::Selector,
    filters: Vec<Filter>,
) -> Result<List<Hotel>, Error> {
    let mut view = List::new();
    filter(&mut view, filters)?;
    console
        .execute(list::Hotels {
            view: &mut view,
            by,
        })
        .await
        .map_err(|e| e.into_error())?;
    Ok(view)
}

/// Loads [`Booking`]s selected by the provided [`booking::list::Selector`]
/// under the provided [`Filter`]s.
async fn bookings(
    console: &Console,
    by: booking::list::Selector,
    filters: Vec<Filter>,
) -> Result<List<Booking>, Error> {
    let mut view = List::new();
    filter(&mut view, filters)?;
    console
        .execute(list::Bookings {
            view: &mut view,
            by,
        })
        .await
        .map_err(|e| e.into_error())?;
    Ok(view)
}

/// Loads [`Rental`]s under the provided [`Filter`]s.
async fn rentals(
    console: &Console,
    filters: Vec<Filter>,
) -> Result<List<Rental>, Error> {
    let mut view = List::new();
    filter(&mut view, filters)?;
    console
        .execute(list::Rentals {
            view: &mut view,
            by: (),
        })
        .await
        .map_err(|e| e.into_error())?;
    Ok(view)
}

/// Loads [`Facility`]s of the provided [`facility::Kind`] under the provided
/// [`Filter`]s.
async fn facilities(
    console: &Console,
    kind: facility::Kind,
    filters: Vec<Filter>,
) -> Result<List<Facility>, Error> {
    let mut view = List::new();
    filter(&mut view, filters)?;
    console
        .execute(list::Facilities {
            view: &mut view,
            by: kind,
        })
        .await
        .map_err(|e| e.into_error())?;
    Ok(view)
}

/// Loads [`Room`]s of the provided [`Hotel`] under the provided [`Filter`]s.
async fn rooms(
    console: &Console,
    hotel: hotel::Id,
    filters: Vec<Filter>,
) -> Result<List<Room>, Error> {
    let mut view = List::new();
    filter(&mut view, filters)?;
    console
        .execute(list::Rooms {
            view: &mut view,
            by: hotel,
        })
        .await
        .map_err(|e| e.into_error())?;
    Ok(view)
}

/// Changes the [`hotel::Status`] of a [`Hotel`], listing all of them first.
async fn decide_hotel(
    console: &Console,
    id: hotel::Id,
    status: hotel::Status,
) -> Result<(), Error> {
    let mut view = hotels(console, hotel::list::Selector::All, vec![]).await?;
    let hotel = console
        .execute(TransitionStatus {
            view: &mut view,
            id,
            status,
        })
        .await
        .map_err(|e| e.into_error())?;
    println!("{}", hotel.row());
    Ok(())
}

/// Selects the location of the provided [`Tier`] in the [`Cascade`], loading
/// the provinces first if needed.
///
/// The location must be one of the options offered by the [`Cascade`].
async fn select(
    console: &Console,
    cascade: &mut Cascade,
    tier: Tier,
    id: location::Id,
) -> Result<(), Error> {
    if tier == Tier::Province {
        console
            .execute(LoadProvinces {
                cascade: &mut *cascade,
            })
            .await
            .map_err(|e| e.into_error())?;
    }
    if !cascade.level(tier).options().iter().any(|n| n.id == id) {
        return Err(Error::validation(&format!(
            "{} `{id}` is not offered",
            tier.as_ref().to_lowercase(),
        )));
    }

    console
        .execute(SelectLocation {
            cascade,
            tier,
            id: Some(id),
        })
        .await
        .map_err(|e| e.into_error())
}
