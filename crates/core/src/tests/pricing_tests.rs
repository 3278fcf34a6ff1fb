// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    Fixture, NOW, create_test_deal, create_test_event, create_test_venue, selections,
};
use crate::{CoreError, active_deal_for, price_selections, seat_discount, seat_unit_price};
use cinebook_domain::{Deal, OrderQuote, SeatLabel, TicketProduct, VenueClass};
use rust_decimal::Decimal;
use time::Duration;

fn adult(fixture: &Fixture) -> &TicketProduct {
    fixture.context().ticket_product("adult").unwrap()
}

#[test]
fn test_premium_seat_in_two_by_two_venue() {
    let fixture: Fixture = Fixture::new(
        create_test_venue(2, 2, 1),
        create_test_event(Decimal::new(1950, 2), VenueClass::Standard),
    );

    let quote: OrderQuote =
        price_selections(&fixture.context(), &selections(&[("A1", "adult")]), NOW).unwrap();

    assert_eq!(quote.lines.len(), 1);
    assert_eq!(quote.lines[0].unit_price, Decimal::new(2350, 2));
    assert_eq!(quote.subtotal, Decimal::new(2350, 2));
    assert_eq!(quote.total, Decimal::new(2350, 2));
}

#[test]
fn test_seat_class_adjustments() {
    let fixture: Fixture = Fixture::standard();
    let product: &TicketProduct = adult(&fixture);

    let premium = seat_unit_price(&fixture.event, &fixture.venue, product, &SeatLabel::new("B4"));
    let standard = seat_unit_price(&fixture.event, &fixture.venue, product, &SeatLabel::new("C4"));
    let accessible =
        seat_unit_price(&fixture.event, &fixture.venue, product, &SeatLabel::new("E2"));

    assert_eq!(premium, Decimal::new(2350, 2));
    assert_eq!(standard, Decimal::new(1950, 2));
    assert_eq!(accessible, Decimal::new(1700, 2));
}

#[test]
fn test_large_format_surcharge_stacks_with_seat_class() {
    let mut fixture: Fixture = Fixture::standard();
    fixture.event.class = VenueClass::VMax;
    let product: &TicketProduct = adult(&fixture);

    let standard = seat_unit_price(&fixture.event, &fixture.venue, product, &SeatLabel::new("C4"));
    let premium = seat_unit_price(&fixture.event, &fixture.venue, product, &SeatLabel::new("A1"));

    assert_eq!(standard, Decimal::new(2200, 2));
    assert_eq!(premium, Decimal::new(2600, 2));
}

#[test]
fn test_other_venue_classes_carry_no_surcharge() {
    for class in [VenueClass::Deluxe, VenueClass::GoldClass] {
        let mut fixture: Fixture = Fixture::standard();
        fixture.event.class = class;
        let price = seat_unit_price(
            &fixture.event,
            &fixture.venue,
            adult(&fixture),
            &SeatLabel::new("C4"),
        );
        assert_eq!(price, Decimal::new(1950, 2));
    }
}

#[test]
fn test_zero_priced_ticket_uses_event_base_price() {
    let fixture: Fixture = Fixture::standard();
    let quote: OrderQuote =
        price_selections(&fixture.context(), &selections(&[("C4", "standard")]), NOW).unwrap();

    assert_eq!(quote.lines[0].unit_price, Decimal::new(1500, 2));
}

#[test]
fn test_unit_price_rounds_midpoint_away_from_zero() {
    let fixture: Fixture = Fixture::new(
        create_test_venue(5, 8, 2),
        create_test_event(Decimal::new(10_005, 3), VenueClass::Standard),
    );
    let quote: OrderQuote =
        price_selections(&fixture.context(), &selections(&[("C4", "standard")]), NOW).unwrap();

    assert_eq!(quote.lines[0].unit_price, Decimal::new(1001, 2));
}

#[test]
fn test_active_deal_discount() {
    let mut fixture: Fixture = Fixture::new(
        create_test_venue(5, 8, 2),
        create_test_event(Decimal::new(2000, 2), VenueClass::Standard),
    );
    fixture.deals.push(create_test_deal(20, NOW + Duration::days(7)));

    let quote: OrderQuote =
        price_selections(&fixture.context(), &selections(&[("C4", "standard")]), NOW).unwrap();

    assert_eq!(quote.lines[0].unit_price, Decimal::new(2000, 2));
    assert_eq!(quote.lines[0].discount, Decimal::new(400, 2));
    assert_eq!(quote.subtotal, Decimal::new(2000, 2));
    assert_eq!(quote.discount, Decimal::new(400, 2));
    assert_eq!(quote.total, Decimal::new(1600, 2));
}

#[test]
fn test_discount_is_not_rounded() {
    let fixture: Fixture = Fixture::standard();
    let deal: Deal = create_test_deal(15, NOW + Duration::days(1));

    let discount: Decimal = seat_discount(Some(&deal), Decimal::new(1950, 2));

    assert_eq!(discount, Decimal::new(2925, 3));
    assert_eq!(seat_discount(None, adult(&fixture).price), Decimal::ZERO);
}

#[test]
fn test_deal_expiring_now_does_not_apply() {
    let mut fixture: Fixture = Fixture::standard();
    fixture.deals.push(create_test_deal(50, NOW));

    let quote: OrderQuote =
        price_selections(&fixture.context(), &selections(&[("C4", "adult")]), NOW).unwrap();

    assert_eq!(quote.discount, Decimal::ZERO);
    assert_eq!(quote.total, quote.subtotal);
}

#[test]
fn test_deal_for_other_movie_does_not_apply() {
    let mut fixture: Fixture = Fixture::standard();
    let mut deal: Deal = create_test_deal(50, NOW + Duration::days(1));
    deal.movie_id = String::from("movie-2");
    fixture.deals.push(deal);

    assert!(active_deal_for(&fixture.deals, "movie-1", NOW).is_none());
}

#[test]
fn test_first_active_deal_in_store_order_wins() {
    let mut expired: Deal = create_test_deal(90, NOW - Duration::days(1));
    expired.id = String::from("expired");
    let mut first: Deal = create_test_deal(10, NOW + Duration::days(1));
    first.id = String::from("first");
    let mut second: Deal = create_test_deal(30, NOW + Duration::days(1));
    second.id = String::from("second");
    let deals: Vec<Deal> = vec![expired, first, second];

    let chosen: &Deal = active_deal_for(&deals, "movie-1", NOW).unwrap();
    assert_eq!(chosen.id, "first");
}

#[test]
fn test_lines_grouped_by_ticket_type_in_first_appearance_order() {
    let fixture: Fixture = Fixture::standard();
    let quote: OrderQuote = price_selections(
        &fixture.context(),
        &selections(&[("C1", "child"), ("C2", "adult"), ("c3", "child")]),
        NOW,
    )
    .unwrap();

    let descriptions: Vec<&str> = quote
        .lines
        .iter()
        .map(|line| line.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec!["Child - Seat C1", "Child - Seat C3", "Adult - Seat C2"]
    );
    assert!(quote.lines.iter().all(|line| line.quantity == 1));
    assert_eq!(quote.subtotal, Decimal::new(4450, 2));
}

#[test]
fn test_empty_selection_gives_empty_quote() {
    let fixture: Fixture = Fixture::standard();
    let quote: OrderQuote = price_selections(&fixture.context(), &[], NOW).unwrap();

    assert!(quote.lines.is_empty());
    assert_eq!(quote.event_id, "evt-1");
    assert_eq!(quote.subtotal, Decimal::ZERO);
    assert_eq!(quote.discount, Decimal::ZERO);
    assert_eq!(quote.total, Decimal::ZERO);
}

#[test]
fn test_unknown_ticket_type_is_not_found() {
    let fixture: Fixture = Fixture::standard();
    let err: CoreError =
        price_selections(&fixture.context(), &selections(&[("C4", "vip")]), NOW).unwrap_err();

    assert_eq!(err, CoreError::ticket_type_not_found("vip"));
}

#[test]
fn test_pricing_is_deterministic() {
    let mut fixture: Fixture = Fixture::standard();
    fixture.deals.push(create_test_deal(25, NOW + Duration::hours(2)));
    let request = selections(&[("A1", "adult"), ("E2", "child"), ("C4", "standard")]);

    let first: OrderQuote = price_selections(&fixture.context(), &request, NOW).unwrap();
    let second: OrderQuote = price_selections(&fixture.context(), &request, NOW).unwrap();

    assert_eq!(first, second);
}
