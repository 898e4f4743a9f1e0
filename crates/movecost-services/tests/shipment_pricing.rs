//! End-to-end pricing of shipments against in-memory tariff tables

mod common;

use chrono::NaiveDate;
use common::*;
use movecost_core::models::{
    Cents, LineItemLocation, Pound, ShipmentStatus, BASE_LINE_ITEM_CODES,
};
use movecost_services::{CostScenario, PpmLane, PpmMove, RecalculateOutcome};
use rust_decimal_macros::dec;

fn delivery_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 7, 2).unwrap()
}

#[tokio::test]
async fn test_deliver_and_price_shipment() {
    let harness = Harness::new();
    let mut shipment = in_transit_shipment();
    harness.store.insert_shipment(&shipment);
    harness.store.insert_item(accessorial(
        shipment.id,
        "125A",
        LineItemLocation::Origin,
        1,
    ));
    // Left over from an earlier pricing, replaced on save
    harness.store.insert_item(accessorial(
        shipment.id,
        "LHS",
        LineItemLocation::Neither,
        1,
    ));

    harness
        .deliver()
        .call(delivery_date(), &mut shipment)
        .await
        .unwrap();

    let saved = harness.store.shipment(shipment.id).unwrap();
    assert_eq!(saved.status, ShipmentStatus::Delivered);
    assert_eq!(saved.actual_delivery_date, Some(delivery_date()));

    let items = harness.store.items_for(shipment.id);
    for code in BASE_LINE_ITEM_CODES {
        assert_eq!(
            items.iter().filter(|i| i.item.code == code).count(),
            1,
            "expected one {} item",
            code
        );
    }

    let base_total: Cents = items
        .iter()
        .filter(|i| i.is_base_line_item())
        .filter_map(|i| i.amount)
        .sum();
    assert_eq!(base_total, Cents(175543));

    let flat = items.iter().find(|i| i.item.code == "125A").unwrap();
    assert_eq!(flat.amount, Some(Cents(3000)));
}

#[tokio::test]
async fn test_deliver_requires_in_transit() {
    let harness = Harness::new();
    let mut shipment = in_transit_shipment();
    shipment.status = ShipmentStatus::Approved;
    harness.store.insert_shipment(&shipment);

    let err = harness
        .deliver()
        .call(delivery_date(), &mut shipment)
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "invalid_status_transition");
    assert!(harness.store.items_for(shipment.id).is_empty());
}

#[tokio::test]
async fn test_deliver_fails_atomically_without_tariff_rows() {
    let harness = Harness::new();
    let mut shipment = in_transit_shipment();
    shipment.book_date = NaiveDate::from_ymd_opt(2017, 1, 1);
    harness.store.insert_shipment(&shipment);

    let err = harness
        .deliver()
        .call(delivery_date(), &mut shipment)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(harness.store.items_for(shipment.id).is_empty());
    assert_eq!(
        harness.store.shipment(shipment.id).unwrap().status,
        ShipmentStatus::InTransit
    );
}

#[tokio::test]
async fn test_deliver_keeps_base_items_when_accessorial_fails() {
    let harness = Harness::new();
    let mut shipment = in_transit_shipment();
    harness.store.insert_shipment(&shipment);
    harness.store.insert_item(accessorial(
        shipment.id,
        "LHS",
        LineItemLocation::Neither,
        1,
    ));
    // No rate row exists for 120A
    harness.store.insert_item(accessorial(
        shipment.id,
        "120A",
        LineItemLocation::Origin,
        3,
    ));

    let err = harness
        .deliver()
        .call(delivery_date(), &mut shipment)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(harness.store.base_item_count(shipment.id), 1);
    let unpriced = harness.store.items_for(shipment.id);
    assert!(unpriced.iter().all(|i| i.amount.is_none()));
    assert_eq!(
        harness.store.shipment(shipment.id).unwrap().status,
        ShipmentStatus::InTransit
    );
}

#[tokio::test]
async fn test_ppm_fixture_gcc() {
    let harness = Harness::new();
    let lane = PpmLane {
        weight: Pound(2000),
        origin_zip5: "39574".into(),
        destination_zip5: "33633".into(),
        distance_miles: 1234,
        date: book_date(),
        days_in_sit: 0,
    };

    let cost = harness
        .engine
        .compute_ppm(
            &lane,
            movecost_core::models::DiscountRate::new(dec!(0.6)),
            movecost_core::models::DiscountRate::new(dec!(0.5)),
        )
        .await
        .unwrap();
    assert_eq!(cost.gcc, Cents(175543));

    let including = harness
        .engine
        .compute_ppm_including_lh_discount(&lane)
        .await
        .unwrap();
    assert_eq!(including, cost);
}

#[tokio::test]
async fn test_ppm_longer_lane_wins() {
    let harness = Harness::new();
    let ppm = PpmMove {
        weight: Pound(2000),
        origin_pickup_zip5: "39574".into(),
        origin_duty_location_zip5: "39501".into(),
        destination_zip5: "33633".into(),
        distance_miles_from_pickup: 1234,
        distance_miles_from_duty_location: 400,
        date: book_date(),
        days_in_sit: 0,
    };

    // Shorthaul only applies to the 400 mile lane, so it costs more
    let details = harness.engine.compute_ppm_move_costs(&ppm).await.unwrap();
    assert!(
        details.origin_duty_location.cost.gcc > details.pickup_location.cost.gcc,
        "shorthaul should raise the duty location lane"
    );
    assert_eq!(details.winning_scenario(), CostScenario::OriginDutyLocation);
    assert!(!details.pickup_location.is_winning);
}

async fn delivered_shipment(harness: &Harness) -> movecost_core::models::Shipment {
    let mut shipment = in_transit_shipment();
    harness.store.insert_shipment(&shipment);
    harness
        .deliver()
        .call(delivery_date(), &mut shipment)
        .await
        .unwrap();
    shipment
}

#[tokio::test]
async fn test_no_window_skips() {
    let harness = Harness::new();
    let mut shipment = delivered_shipment(&harness).await;
    let items = harness.store.items_for(shipment.id);

    let outcome = harness.process().call(&mut shipment, &items).await.unwrap();
    assert!(matches!(outcome, RecalculateOutcome::Skipped));
    assert!(harness.store.logs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_recalculates_when_base_item_missing() {
    let harness = Harness::new();
    let mut shipment = delivered_shipment(&harness).await;
    *harness.store.window.lock().unwrap() = Some(window(at(6, 1), at(7, 1)));

    // Lose the fuel surcharge item
    harness
        .store
        .line_items
        .lock()
        .unwrap()
        .retain(|i| i.item.code != "16A");
    let items = harness.store.items_for(shipment.id);

    let outcome = harness.process().call(&mut shipment, &items).await.unwrap();
    assert!(matches!(outcome, RecalculateOutcome::Recalculated));

    let items = harness.store.items_for(shipment.id);
    assert_eq!(items.iter().filter(|i| i.is_base_line_item()).count(), 6);
    assert_eq!(shipment.status, ShipmentStatus::Delivered);
    assert_eq!(
        harness.store.shipment(shipment.id).unwrap().status,
        ShipmentStatus::Delivered
    );
    assert_eq!(
        *harness.store.status_history.lock().unwrap(),
        vec![ShipmentStatus::Recalculate]
    );

    let logs = harness.store.logs.lock().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].shipment_id, shipment.id);
}

#[tokio::test]
async fn test_complete_shipment_outside_window_skips() {
    let harness = Harness::new();
    let mut shipment = delivered_shipment(&harness).await;
    *harness.store.window.lock().unwrap() = Some(window(at(7, 1), at(8, 1)));
    let items = harness.store.items_for(shipment.id);

    let outcome = harness.process().call(&mut shipment, &items).await.unwrap();
    assert!(!outcome.update_attempted());
}

#[tokio::test]
async fn test_failed_recalculation_restores_status() {
    let harness = Harness::new();
    let mut shipment = delivered_shipment(&harness).await;
    *harness.store.window.lock().unwrap() = Some(window(at(6, 1), at(7, 1)));
    *harness.store.fail_saves.lock().unwrap() = true;

    let mut items = harness.store.items_for(shipment.id);
    items.retain(|i| i.item.code != "LHS");

    let outcome = harness.process().call(&mut shipment, &items).await.unwrap();
    assert!(outcome.update_attempted());
    let err = outcome.into_result().unwrap_err();
    assert_eq!(err.error_code(), "transaction_error");

    assert_eq!(shipment.status, ShipmentStatus::Delivered);
    assert_eq!(
        harness.store.shipment(shipment.id).unwrap().status,
        ShipmentStatus::Delivered
    );
    assert_eq!(harness.store.base_item_count(shipment.id), 6);
    assert!(harness.store.logs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_accessorial_pricing_keeps_base_items() {
    let harness = Harness::new();
    let mut shipment = delivered_shipment(&harness).await;
    *harness.store.window.lock().unwrap() = Some(window(at(6, 1), at(7, 1)));

    // Added inside the window, with no rate row for 120A
    harness.store.insert_item(accessorial(
        shipment.id,
        "120A",
        LineItemLocation::Origin,
        3,
    ));
    let items = harness.store.items_for(shipment.id);

    let outcome = harness.process().call(&mut shipment, &items).await.unwrap();
    let err = outcome.into_result().unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(harness.store.base_item_count(shipment.id), 6);
    assert_eq!(
        harness.store.shipment(shipment.id).unwrap().status,
        ShipmentStatus::Delivered
    );
    assert!(harness.store.logs.lock().unwrap().is_empty());
}
