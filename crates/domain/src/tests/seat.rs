// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_venue;
use crate::{SeatClass, SeatLabel, SeatMap, SeatState, Venue, classify_seat, is_permanently_blocked};
use std::collections::BTreeMap;

#[test]
fn test_seat_label_normalizes_case_and_whitespace() {
    let label: SeatLabel = SeatLabel::new(" b12 ");
    assert_eq!(label.value(), "B12");
    assert_eq!(label, SeatLabel::new("B12"));
}

#[test]
fn test_seat_label_from_position() {
    assert_eq!(SeatLabel::from_position(0, 1).value(), "A1");
    assert_eq!(SeatLabel::from_position(2, 14).value(), "C14");
    assert_eq!(SeatLabel::from_position(25, 3).value(), "Z3");
}

#[test]
fn test_seat_label_position_parses_row_and_column() {
    assert_eq!(SeatLabel::new("A1").position(), Some((0, 1)));
    assert_eq!(SeatLabel::new("m20").position(), Some((12, 20)));
}

#[test]
fn test_seat_label_position_rejects_malformed_labels() {
    assert_eq!(SeatLabel::new("").position(), None);
    assert_eq!(SeatLabel::new("A").position(), None);
    assert_eq!(SeatLabel::new("1A").position(), None);
    assert_eq!(SeatLabel::new("AB").position(), None);
    assert_eq!(SeatLabel::new("A-1").position(), None);
}

#[test]
fn test_seat_label_serializes_as_plain_string() {
    let label: SeatLabel = SeatLabel::new("c4");
    let json: String = serde_json::to_string(&label).unwrap();
    assert_eq!(json, "\"C4\"");

    let parsed: SeatLabel = serde_json::from_str("\"d7\"").unwrap();
    assert_eq!(parsed.value(), "D7");
}

#[test]
fn test_two_by_two_venue_classification() {
    let venue: Venue = create_test_venue(2, 2, 1);

    assert_eq!(classify_seat(&venue, &SeatLabel::new("A1")), SeatClass::Premium);
    assert_eq!(classify_seat(&venue, &SeatLabel::new("A2")), SeatClass::Premium);
    assert_eq!(classify_seat(&venue, &SeatLabel::new("B1")), SeatClass::Accessible);
    assert_eq!(classify_seat(&venue, &SeatLabel::new("B2")), SeatClass::Accessible);

    assert!(is_permanently_blocked(&venue, &SeatLabel::new("B1")));
    assert!(!is_permanently_blocked(&venue, &SeatLabel::new("B2")));
    assert!(!is_permanently_blocked(&venue, &SeatLabel::new("A1")));
}

#[test]
fn test_accessible_only_on_last_row_first_two_columns() {
    let venue: Venue = create_test_venue(5, 8, 2);

    assert_eq!(classify_seat(&venue, &SeatLabel::new("E1")), SeatClass::Accessible);
    assert_eq!(classify_seat(&venue, &SeatLabel::new("E2")), SeatClass::Accessible);
    assert_eq!(classify_seat(&venue, &SeatLabel::new("E3")), SeatClass::Standard);
    assert_eq!(classify_seat(&venue, &SeatLabel::new("D1")), SeatClass::Standard);
    assert_eq!(classify_seat(&venue, &SeatLabel::new("B8")), SeatClass::Premium);
    assert_eq!(classify_seat(&venue, &SeatLabel::new("C1")), SeatClass::Standard);
}

#[test]
fn test_premium_takes_precedence_over_accessible() {
    let venue: Venue = create_test_venue(2, 4, 2);

    assert_eq!(classify_seat(&venue, &SeatLabel::new("B1")), SeatClass::Premium);
    assert!(!is_permanently_blocked(&venue, &SeatLabel::new("B1")));
}

#[test]
fn test_unparseable_label_classifies_as_standard() {
    let venue: Venue = create_test_venue(5, 8, 2);
    assert_eq!(classify_seat(&venue, &SeatLabel::new("??")), SeatClass::Standard);
    assert!(!is_permanently_blocked(&venue, &SeatLabel::new("??")));
}

#[test]
fn test_seat_map_lookup_treats_unknown_seats_as_blocked() {
    let mut seats: BTreeMap<SeatLabel, SeatState> = BTreeMap::new();
    seats.insert(SeatLabel::new("A1"), SeatState::Available);
    seats.insert(SeatLabel::new("A2"), SeatState::Booked);
    let map: SeatMap = SeatMap {
        event_id: String::from("evt-1"),
        rows: 1,
        columns: 2,
        seats,
    };

    assert_eq!(map.state("a1"), SeatState::Available);
    assert_eq!(map.state("A2"), SeatState::Booked);
    assert_eq!(map.state("Q9"), SeatState::Blocked);
    assert_eq!(map.get(&SeatLabel::new("Q9")), None);
    assert_eq!(map.count(SeatState::Available), 1);
    assert_eq!(map.labels_in_state(SeatState::Booked), vec![&SeatLabel::new("A2")]);
}
