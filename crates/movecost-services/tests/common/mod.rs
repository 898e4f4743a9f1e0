//! In-memory repositories shared by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use movecost_core::{
    models::{
        Address, Cents, DiscountRate, DiscountType, EffectiveDateRange, ItemRate,
        LineItemLocation, LineItemStatus, Millicents, Pound, ServiceArea, Shipment,
        ShipmentLineItem, ShipmentRecalculate, ShipmentRecalculateLog, ShipmentStatus,
        Tariff400ngItem, TspPerformance,
    },
    traits::{LineItemRepository, RecalculateRepository, ShipmentRepository, TariffRepository},
    AppError, AppResult,
};
use movecost_route::ConstantPlanner;
use movecost_services::{
    DeliverAndPriceShipment, ProcessRecalculateShipment, RateEngine, RecalculateShipment,
};
use rust_decimal_macros::dec;
use uuid::Uuid;

pub fn book_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 6, 18).unwrap()
}

pub fn at(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, month, day, 12, 0, 0).unwrap()
}

/// Tariff tables for a Gulfport (395) to Tampa (336) move
pub struct StaticTariff;

fn effective() -> EffectiveDateRange {
    EffectiveDateRange::new(
        NaiveDate::from_ymd_opt(2018, 5, 15).unwrap(),
        NaiveDate::from_ymd_opt(2019, 5, 14).unwrap(),
    )
}

pub fn tariff_item(code: &str) -> Tariff400ngItem {
    let discount_type = match code {
        "185A" | "185B" => DiscountType::Sit,
        "226A" => DiscountType::None,
        _ => DiscountType::Hhg,
    };
    Tariff400ngItem {
        id: Uuid::new_v4(),
        code: code.to_string(),
        item: format!("Tariff item {}", code),
        discount_type,
        ..Default::default()
    }
}

#[async_trait]
impl TariffRepository for StaticTariff {
    async fn base_linehaul_rate(&self, _: i64, _: Pound, _: NaiveDate) -> AppResult<Cents> {
        Ok(Cents(296640))
    }

    async fn service_area_for_zip3(&self, zip3: &str, date: NaiveDate) -> AppResult<ServiceArea> {
        if !effective().contains(date) {
            return Err(AppError::NotFound(format!("service area at {}", date)));
        }
        let (code, schedule, factor, charge, sit_185a) = match zip3 {
            "395" => ("428", 1, 57, 350, 1402),
            "336" => ("197", 2, 69, 663, 1557),
            _ => return Err(AppError::NotFound(format!("service area for zip3 {}", zip3))),
        };
        Ok(ServiceArea {
            service_area: code.to_string(),
            name: format!("Service area {}", code),
            services_schedule: schedule,
            linehaul_factor: Cents(factor),
            service_charge_cents: Cents(charge),
            sit_185a_rate_cents: Cents(sit_185a),
            sit_185b_rate_cents: Cents(53),
            sit_pd_schedule: schedule,
            effective: effective(),
        })
    }

    async fn shorthaul_rate(&self, _: i64, _: NaiveDate) -> AppResult<Cents> {
        Ok(Cents(5000))
    }

    async fn full_pack_rate(&self, _: i32, _: Pound, _: NaiveDate) -> AppResult<Cents> {
        Ok(Cents(5429))
    }

    async fn full_unpack_rate(&self, _: i32, _: Pound, _: NaiveDate) -> AppResult<Millicents> {
        Ok(Millicents(542_900))
    }

    async fn item_rate(
        &self,
        code: &str,
        schedule: i32,
        _: Pound,
        _: NaiveDate,
    ) -> AppResult<ItemRate> {
        let rate_cents = match code {
            "210A" => Cents(2000),
            "125A" => Cents(7500),
            _ => return Err(AppError::NotFound(format!("item rate for {}", code))),
        };
        Ok(ItemRate {
            code: code.to_string(),
            schedule: Some(schedule),
            weight_lbs_lower: Pound(0),
            weight_lbs_upper: Pound(100_000),
            rate_cents,
            effective: effective(),
        })
    }

    async fn item_by_code(&self, code: &str) -> AppResult<Tariff400ngItem> {
        Ok(tariff_item(code))
    }

    async fn ppm_discounts(
        &self,
        _: &str,
        _: &str,
        _: NaiveDate,
    ) -> AppResult<(DiscountRate, DiscountRate)> {
        Ok((DiscountRate::new(dec!(0.6)), DiscountRate::new(dec!(0.5))))
    }
}

/// Shipments, line items and recalculation state in one store
#[derive(Default)]
pub struct MemoryStore {
    pub shipments: Mutex<HashMap<Uuid, Shipment>>,
    pub line_items: Mutex<Vec<ShipmentLineItem>>,
    pub window: Mutex<Option<ShipmentRecalculate>>,
    pub logs: Mutex<Vec<ShipmentRecalculateLog>>,
    pub status_history: Mutex<Vec<ShipmentStatus>>,
    pub fail_saves: Mutex<bool>,
}

impl MemoryStore {
    pub fn shipment(&self, id: Uuid) -> Option<Shipment> {
        self.shipments.lock().unwrap().get(&id).cloned()
    }

    pub fn items_for(&self, shipment_id: Uuid) -> Vec<ShipmentLineItem> {
        self.line_items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.shipment_id == shipment_id)
            .cloned()
            .collect()
    }

    pub fn insert_shipment(&self, shipment: &Shipment) {
        self.shipments
            .lock()
            .unwrap()
            .insert(shipment.id, shipment.clone());
    }

    pub fn insert_item(&self, item: ShipmentLineItem) {
        self.line_items.lock().unwrap().push(item);
    }

    pub fn base_item_count(&self, shipment_id: Uuid) -> usize {
        self.items_for(shipment_id)
            .iter()
            .filter(|i| i.is_base_line_item())
            .count()
    }
}

#[async_trait]
impl ShipmentRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Shipment>> {
        Ok(self.shipment(id))
    }

    async fn find_priced_created_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<Vec<Shipment>> {
        Ok(self
            .shipments
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.status.is_priced() && after <= s.created_at && s.created_at < before)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: Uuid, status: ShipmentStatus) -> AppResult<()> {
        let mut shipments = self.shipments.lock().unwrap();
        let shipment = shipments
            .get_mut(&id)
            .ok_or_else(|| AppError::ShipmentNotFound(id.to_string()))?;
        shipment.status = status;
        self.status_history.lock().unwrap().push(status);
        Ok(())
    }

    async fn save_shipment_and_line_items(
        &self,
        shipment: &Shipment,
        base_items: &[ShipmentLineItem],
        updated_items: &[ShipmentLineItem],
    ) -> AppResult<()> {
        if *self.fail_saves.lock().unwrap() {
            return Err(AppError::Transaction("save rejected".into()));
        }

        self.insert_shipment(shipment);
        let mut items = self.line_items.lock().unwrap();
        items.retain(|i| !(i.shipment_id == shipment.id && i.is_base_line_item()));
        for updated in updated_items {
            if let Some(existing) = items.iter_mut().find(|i| i.id == updated.id) {
                *existing = updated.clone();
            }
        }
        items.extend(base_items.iter().cloned());
        Ok(())
    }
}

#[async_trait]
impl LineItemRepository for MemoryStore {
    async fn find_by_shipment(&self, shipment_id: Uuid) -> AppResult<Vec<ShipmentLineItem>> {
        Ok(self.items_for(shipment_id))
    }
}

#[async_trait]
impl RecalculateRepository for MemoryStore {
    async fn fetch_active_window(&self) -> AppResult<Option<ShipmentRecalculate>> {
        Ok(self.window.lock().unwrap().clone().filter(|w| w.active))
    }

    async fn create_log(&self, log: &ShipmentRecalculateLog) -> AppResult<()> {
        self.logs.lock().unwrap().push(log.clone());
        Ok(())
    }
}

pub fn window(after: DateTime<Utc>, before: DateTime<Utc>) -> ShipmentRecalculate {
    ShipmentRecalculate {
        id: Uuid::new_v4(),
        shipment_updated_after: after,
        shipment_updated_before: before,
        active: true,
        created_at: after,
        updated_at: after,
    }
}

/// 2000 lb in-transit shipment from 39574 to 33633 at 60% / 50% off
pub fn in_transit_shipment() -> Shipment {
    Shipment {
        status: ShipmentStatus::InTransit,
        book_date: Some(book_date()),
        actual_pickup_date: Some(book_date()),
        net_weight: Some(Pound(2000)),
        pickup_address: Some(Address::from_postal_code("39574")),
        destination_address: Some(Address::from_postal_code("33633")),
        tsp_performance: Some(TspPerformance {
            id: Uuid::new_v4(),
            linehaul_rate: DiscountRate::new(dec!(0.6)),
            sit_rate: DiscountRate::new(dec!(0.5)),
        }),
        created_at: at(6, 5),
        updated_at: at(6, 5),
        ..Default::default()
    }
}

pub fn accessorial(
    shipment_id: Uuid,
    code: &str,
    location: LineItemLocation,
    quantity: i64,
) -> ShipmentLineItem {
    ShipmentLineItem {
        shipment_id,
        item: tariff_item(code),
        location,
        quantity_1: movecost_core::models::BaseQuantity::from_int(quantity),
        status: LineItemStatus::Approved,
        created_at: at(6, 5),
        updated_at: at(6, 5),
        ..Default::default()
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub engine: Arc<RateEngine>,
}

impl Harness {
    pub fn new() -> Self {
        let engine = RateEngine::new(Arc::new(StaticTariff), Arc::new(ConstantPlanner::new(1234)));
        Self {
            store: Arc::new(MemoryStore::default()),
            engine: Arc::new(engine),
        }
    }

    pub fn deliver(&self) -> DeliverAndPriceShipment {
        DeliverAndPriceShipment::new(
            self.engine.clone(),
            self.store.clone(),
            self.store.clone(),
        )
    }

    pub fn recalculate(&self) -> RecalculateShipment {
        RecalculateShipment::new(
            self.engine.clone(),
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
        )
    }

    pub fn process(&self) -> ProcessRecalculateShipment {
        ProcessRecalculateShipment::new(self.store.clone(), self.recalculate())
    }
}
