//! Plain-text rendering of console entities.

use console::domain::{
    room, Booking, Facility, Hotel, Node, Rental, Room, User,
};
use rust_decimal::Decimal;

/// Entity rendered as a single line of text.
pub trait Row {
    /// Renders this entity as a single line of text.
    fn row(&self) -> String;
}

/// Placeholder of a missing value.
const MISSING: &str = "-";

/// Renders the provided optional value, if any.
fn or_missing(value: Option<impl ToString>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| v.to_string())
}

impl Row for Hotel {
    fn row(&self) -> String {
        let address = self.address();
        format!(
            "#{} [{}] {} | {} | {}",
            self.id,
            self.status,
            self.name,
            if address.is_empty() { MISSING } else { address.as_str() },
            or_missing(self.email.as_ref()),
        )
    }
}

impl Row for Booking {
    fn row(&self) -> String {
        let rooms = self
            .room_names
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "#{} [{}] {} ({}) | {} <{}> | {}..{} | total {} deposit {} \
             via {} on {}",
            self.id,
            self.status,
            or_missing(self.hotel_name.as_ref()),
            if rooms.is_empty() { MISSING } else { rooms.as_str() },
            or_missing(self.guest_name.as_ref()),
            or_missing(self.guest_email.as_ref()),
            or_missing(self.check_in),
            or_missing(self.check_out),
            or_missing(self.total_price),
            or_missing(self.deposit_amount),
            or_missing(self.payment_method.as_ref()),
            or_missing(self.payment_date),
        )
    }
}

impl Row for Rental {
    fn row(&self) -> String {
        format!(
            "#{} [{}] {} <{}>",
            self.id,
            self.approval,
            or_missing(self.full_name()),
            or_missing(self.email.as_ref()),
        )
    }
}

impl Row for User {
    fn row(&self) -> String {
        format!(
            "#{} [{}] {} <{}>",
            self.id,
            or_missing(self.role.as_ref()),
            or_missing(self.full_name()),
            or_missing(self.email.as_ref()),
        )
    }
}

impl Row for Facility {
    fn row(&self) -> String {
        format!("#{} {}", self.id, self.name)
    }
}

impl Row for Room {
    fn row(&self) -> String {
        let facilities = self
            .facilities
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "#{} {} [{}] {} x{} | deposit {}% | {}",
            self.id,
            self.name,
            or_missing(self.kind.as_ref()),
            self.price,
            self.quantity,
            (self.deposit * Decimal::ONE_HUNDRED).normalize(),
            if facilities.is_empty() { MISSING } else { facilities.as_str() },
        )
    }
}

impl Row for room::Type {
    fn row(&self) -> String {
        format!("#{} {}", self.id, self.name)
    }
}

impl Row for Node {
    fn row(&self) -> String {
        format!("#{} {}", self.id, self.name)
    }
}

/// Prints the provided entities, one per line, followed by their count.
pub fn print<'e, E: Row + 'e>(entities: impl IntoIterator<Item = &'e E>) {
    let mut count = 0_usize;
    for e in entities {
        println!("{}", e.row());
        count += 1;
    }
    println!("({count} shown)");
}
