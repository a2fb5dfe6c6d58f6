//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use console::domain::{booking, facility, hotel, location, rental, room};
use rust_decimal::Decimal;

/// Administration console of the hotel booking platform.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Filter of a listing, given as `KEY=VALUE`.
#[derive(Clone, Debug)]
pub struct Filter {
    /// Name of the filter key.
    pub key: String,

    /// Raw value of the filter.
    pub value: String,
}

/// Parses a [`Filter`] out of its `KEY=VALUE` form.
fn parse_filter(input: &str) -> Result<Filter, String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("`{input}` is not in `KEY=VALUE` form"))?;
    Ok(Filter {
        key: key.trim().to_owned(),
        value: value.to_owned(),
    })
}

/// Details of a room, as entered.
#[derive(Clone, Debug, clap::Args)]
pub struct RoomArgs {
    /// Name of the room.
    #[arg(long)]
    pub name: String,

    /// Price of the room per night.
    #[arg(long)]
    pub price: Decimal,

    /// Number of identical rooms offered.
    #[arg(long, default_value_t = 1)]
    pub quantity: u32,

    /// ID of the room type.
    #[arg(long = "type")]
    pub kind: room::TypeId,

    /// Deposit in percents of the price, in steps of 5.
    #[arg(long, default_value_t = 0)]
    pub deposit: u8,

    /// IDs of the provided room facilities.
    #[arg(long = "facility")]
    pub facilities: Vec<facility::Id>,
}

impl From<RoomArgs> for room::Draft {
    fn from(args: RoomArgs) -> Self {
        Self {
            name: args.name,
            price: args.price,
            quantity: args.quantity,
            kind: args.kind,
            deposit: args.deposit,
            facilities: args.facilities,
        }
    }
}

/// Console command.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lists hotels.
    Hotels {
        /// Lists pending hotels only.
        #[arg(long, conflicts_with = "owned")]
        pending: bool,

        /// Lists hotels of the current user only.
        #[arg(long)]
        owned: bool,

        /// Filters as `KEY=VALUE` (`name`, `email`, `status`, `province`,
        /// `district`, `ward`).
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<Filter>,
    },

    /// Shows a single hotel.
    Hotel {
        /// ID of the hotel.
        id: hotel::Id,
    },

    /// Approves a pending hotel.
    ApproveHotel {
        /// ID of the hotel.
        id: hotel::Id,
    },

    /// Rejects a pending hotel.
    RejectHotel {
        /// ID of the hotel.
        id: hotel::Id,
    },

    /// Registers a new hotel owned by the current user.
    RegisterHotel {
        /// Name of the hotel.
        #[arg(long)]
        name: String,

        /// Contact email of the hotel.
        #[arg(long)]
        email: Option<String>,

        /// Contact phone number of the hotel.
        #[arg(long)]
        phone: Option<String>,

        /// Description of the hotel.
        #[arg(long)]
        description: Option<String>,

        /// Street of the hotel.
        #[arg(long)]
        street: Option<String>,

        /// ID of the province.
        #[arg(long)]
        province: location::Id,

        /// ID of the district within the province.
        #[arg(long)]
        district: location::Id,

        /// ID of the ward within the district.
        #[arg(long)]
        ward: location::Id,

        /// IDs of the provided facilities.
        #[arg(long = "facility")]
        facilities: Vec<facility::Id>,
    },

    /// Updates details of an existing hotel.
    ///
    /// Omitted details are kept. Changing the province or the district
    /// requires selecting every level below it again.
    UpdateHotel {
        /// ID of the hotel.
        id: hotel::Id,

        /// New name of the hotel.
        #[arg(long)]
        name: Option<String>,

        /// New contact email of the hotel.
        #[arg(long)]
        email: Option<String>,

        /// New contact phone number of the hotel.
        #[arg(long)]
        phone: Option<String>,

        /// New description of the hotel.
        #[arg(long)]
        description: Option<String>,

        /// New street of the hotel.
        #[arg(long)]
        street: Option<String>,

        /// ID of the new province.
        #[arg(long)]
        province: Option<location::Id>,

        /// ID of the new district within the province.
        #[arg(long)]
        district: Option<location::Id>,

        /// ID of the new ward within the district.
        #[arg(long)]
        ward: Option<location::Id>,

        /// Names of the provided facilities, replacing the current ones.
        #[arg(long = "facility")]
        facilities: Vec<String>,
    },

    /// Lists rooms of a hotel.
    Rooms {
        /// ID of the hotel.
        hotel: hotel::Id,

        /// Filters as `KEY=VALUE` (`name`, `type`, `facility`).
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<Filter>,
    },

    /// Lists room types.
    RoomTypes,

    /// Adds a new room to a hotel.
    AddRoom {
        /// ID of the hotel.
        hotel: hotel::Id,

        /// Details of the room.
        #[command(flatten)]
        room: RoomArgs,
    },

    /// Updates details of a room of a hotel.
    UpdateRoom {
        /// ID of the hotel.
        hotel: hotel::Id,

        /// ID of the room.
        id: room::Id,

        /// New details of the room.
        #[command(flatten)]
        room: RoomArgs,
    },

    /// Deletes a room of a hotel.
    DeleteRoom {
        /// ID of the hotel.
        hotel: hotel::Id,

        /// ID of the room.
        id: room::Id,
    },

    /// Lists bookings.
    Bookings {
        /// Lists bookings of the current hotel owner only.
        #[arg(long)]
        owned: bool,

        /// Lists distinct hotel names of the bookings instead.
        #[arg(long)]
        hotel_names: bool,

        /// Filters as `KEY=VALUE` (`email`, `guestName`, `hotelName`,
        /// `hotelNameLike`, `status`, `dateRange` as `FROM..TO`).
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<Filter>,
    },

    /// Sets a status of a booking.
    SetBookingStatus {
        /// ID of the booking.
        id: booking::Id,

        /// New status of the booking.
        status: booking::Status,
    },

    /// Confirms a booking as its hotel owner.
    ConfirmBooking {
        /// ID of the booking.
        id: booking::Id,
    },

    /// Checks a guest in by a booking code.
    CheckIn {
        /// Booking code presented by the guest.
        code: String,
    },

    /// Lists hotel owner accounts.
    Rentals {
        /// Filters as `KEY=VALUE` (`search`, `approval`).
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<Filter>,
    },

    /// Approves a hotel owner account.
    ApproveRental {
        /// ID of the account.
        id: rental::Id,
    },

    /// Lists platform users.
    Users {
        /// Filters as `KEY=VALUE` (`email`, `name`, `role`).
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<Filter>,
    },

    /// Lists facilities.
    Facilities {
        /// Kind of the facilities (`hotel` or `room`).
        #[arg(long, default_value = "hotel")]
        kind: facility::Kind,

        /// Filters as `KEY=VALUE` (`name`).
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<Filter>,
    },

    /// Adds a new facility.
    AddFacility {
        /// Kind of the facility (`hotel` or `room`).
        #[arg(long, default_value = "hotel")]
        kind: facility::Kind,

        /// Name of the facility.
        name: String,
    },

    /// Lists provinces, or districts and wards of the selected ones.
    Locations {
        /// ID of the province to list districts of.
        #[arg(long)]
        province: Option<location::Id>,

        /// ID of the district to list wards of.
        #[arg(long, requires = "province")]
        district: Option<location::Id>,
    },
}
