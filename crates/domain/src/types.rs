// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::codes::new_entity_id;
use crate::seat::SeatLabel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Tiered service level of a screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VenueClass {
    /// Regular auditorium.
    #[default]
    Standard,
    /// Recliner seating.
    Deluxe,
    /// Premium large format screen.
    VMax,
    /// Lounge service.
    GoldClass,
}

impl VenueClass {
    /// Returns whether this class carries the large-format surcharge.
    #[must_use]
    pub const fn is_premium_large_format(&self) -> bool {
        matches!(self, Self::VMax)
    }
}

/// A cinema site owning one or more auditoriums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cinema {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Suburb the cinema is in.
    #[serde(default)]
    pub suburb: String,
    /// State or region.
    #[serde(default)]
    pub state: String,
}

const fn default_premium_row_cutoff() -> u8 {
    2
}

/// An auditorium with a rectangular seat grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique identifier.
    pub id: String,
    /// The owning cinema.
    pub cinema_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Number of rows, lettered from `A`.
    pub row_count: u8,
    /// Number of seats per row, numbered from 1.
    pub column_count: u16,
    /// Rows with an index below this value are premium.
    #[serde(default = "default_premium_row_cutoff")]
    pub premium_row_cutoff: u8,
}

/// A film that screenings are scheduled for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub runtime_minutes: u32,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// A scheduled screening of a movie in a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: String,
    /// The movie being screened.
    pub movie_id: String,
    /// The auditorium hosting the screening.
    pub venue_id: String,
    /// Scheduled start.
    #[serde(with = "time::serde::rfc3339")]
    pub start_utc: OffsetDateTime,
    /// Price used when a ticket type defers to the screening.
    pub base_price: Decimal,
    /// Service level of the screening.
    #[serde(default)]
    pub class: VenueClass,
}

/// Category of a ticket product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketCategory {
    #[default]
    Adult,
    Child,
    Senior,
    Student,
    Member,
}

/// A ticket type that can be attached to a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketProduct {
    /// Unique identifier.
    pub id: String,
    /// Ticket category.
    #[serde(default)]
    pub category: TicketCategory,
    /// Display name.
    pub name: String,
    /// Unit price. Zero defers to the event base price.
    pub price: Decimal,
    /// Whether the ticket is reserved for members.
    #[serde(default)]
    pub requires_membership: bool,
}

impl TicketProduct {
    /// Returns the price this ticket charges before seat adjustments.
    #[must_use]
    pub fn effective_price(&self, base_price: Decimal) -> Decimal {
        if self.price > Decimal::ZERO {
            self.price
        } else {
            base_price
        }
    }
}

/// A caller's request to put a ticket type on a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSelection {
    /// The seat label as supplied.
    pub seat_label: String,
    /// The ticket type identifier as supplied; may be blank.
    #[serde(default)]
    pub ticket_type_id: String,
}

impl SeatSelection {
    /// Creates a new seat selection.
    #[must_use]
    pub fn new(seat_label: &str, ticket_type_id: &str) -> Self {
        Self {
            seat_label: seat_label.to_string(),
            ticket_type_id: ticket_type_id.to_string(),
        }
    }

    /// Returns the normalized seat label.
    #[must_use]
    pub fn label(&self) -> SeatLabel {
        SeatLabel::new(&self.seat_label)
    }

    /// Returns the ticket type identifier without surrounding whitespace.
    #[must_use]
    pub fn ticket_type(&self) -> &str {
        self.ticket_type_id.trim()
    }
}

/// Contact details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomerInfo {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// One seat of a committed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLine {
    /// The seat sold.
    pub seat_label: SeatLabel,
    /// The ticket type sold for the seat.
    pub ticket_type_id: String,
    /// The unit price actually charged.
    pub unit_price: Decimal,
}

/// The durable record of a committed sale.
///
/// Created exactly once per successful confirmation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier.
    pub id: String,
    /// The event the seats belong to.
    pub event_id: String,
    /// Human-readable reference such as `BK123456`.
    pub reference_code: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    /// When the booking was committed.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    /// One line per seat.
    pub lines: Vec<BookingLine>,
}

impl Booking {
    /// Returns the labels of every seat in this booking.
    pub fn seat_labels(&self) -> impl Iterator<Item = &SeatLabel> {
        self.lines.iter().map(|line| &line.seat_label)
    }

    /// Returns whether this booking was made with the given e-mail.
    ///
    /// Blank addresses never match.
    #[must_use]
    pub fn belongs_to(&self, email: &str) -> bool {
        let email: &str = email.trim();
        !email.is_empty() && self.customer_email.trim().eq_ignore_ascii_case(email)
    }
}

/// A percentage discount on every seat of a movie's screenings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// Unique identifier.
    pub id: String,
    /// The movie the deal applies to.
    pub movie_id: String,
    /// Discount percentage, 0 to 100.
    pub discount: u8,
    /// The deal stops applying at this instant.
    #[serde(with = "time::serde::rfc3339")]
    pub expiry_date: OffsetDateTime,
}

impl Deal {
    /// Creates a deal with a freshly generated identifier.
    #[must_use]
    pub fn new(movie_id: &str, discount: u8, expiry_date: OffsetDateTime) -> Self {
        Self {
            id: new_entity_id(),
            movie_id: movie_id.to_string(),
            discount,
            expiry_date,
        }
    }

    /// Returns whether the deal applies at `now`. Expiry is exclusive.
    #[must_use]
    pub fn is_active_at(&self, now: OffsetDateTime) -> bool {
        self.expiry_date > now
    }
}

/// A loyalty code that can be redeemed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Six character code from `A-Z0-9`.
    pub reward_code: String,
    /// The customer the reward was issued to.
    #[serde(default)]
    pub customer_email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,
}

/// A registered customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_utc: OffsetDateTime,
}

/// A message in a customer's mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// The recipient's customer id.
    pub to_user_id: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub sent_utc: OffsetDateTime,
}

impl Message {
    /// Creates a message with a freshly generated identifier.
    #[must_use]
    pub fn new(to_user_id: &str, content: String, sent_utc: OffsetDateTime) -> Self {
        Self {
            id: new_entity_id(),
            to_user_id: to_user_id.to_string(),
            content,
            sent_utc,
        }
    }
}
