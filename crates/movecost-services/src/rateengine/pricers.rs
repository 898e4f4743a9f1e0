//! Line item pricers and the tariff code policy tables
//!
//! Which pricer applies to a code, which code's rate a code is billed at and
//! which codes are priced on the shipment's net weight are all data. A new
//! accessorial is onboarded by adding an entry here, not a code path.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use movecost_core::models::{BaseQuantity, Cents, DiscountRate};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

/// How a rate and a quantity combine into a charge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricer {
    /// `rate * quantity`
    BasicQuantity,
    /// `rate * max(quantity, minimum)`
    MinimumQuantity { minimum: BaseQuantity },
    /// `rate * max(quantity, minimum) / 100`, for rates quoted per hundredweight
    MinimumQuantityHundredweight { minimum: BaseQuantity },
    /// `rate`, whatever the quantity
    FlatRate,
}

impl Pricer {
    pub fn minimum_quantity(minimum: i64) -> Self {
        Pricer::MinimumQuantity {
            minimum: BaseQuantity::from_int(minimum),
        }
    }

    pub fn minimum_quantity_hundredweight(minimum: i64) -> Self {
        Pricer::MinimumQuantityHundredweight {
            minimum: BaseQuantity::from_int(minimum),
        }
    }

    /// Price a charge, applying the discount to the rounded result
    pub fn price(
        &self,
        rate: Cents,
        quantity: BaseQuantity,
        discount: Option<DiscountRate>,
    ) -> Cents {
        let charge = match *self {
            Pricer::BasicQuantity => rate.multiply_decimal(quantity.to_unit_decimal()),
            Pricer::MinimumQuantity { minimum } => {
                rate.multiply_decimal(quantity.max(minimum).to_unit_decimal())
            }
            Pricer::MinimumQuantityHundredweight { minimum } => rate.multiply_decimal(
                quantity.max(minimum).to_unit_decimal() / Decimal::ONE_HUNDRED,
            ),
            Pricer::FlatRate => rate,
        };

        match discount {
            Some(discount) => discount.apply(charge),
            None => charge,
        }
    }
}

/// Immutable policy tables consulted by the rate engine
#[derive(Debug, Clone)]
pub struct PricingTables {
    pricers: HashMap<&'static str, Pricer>,
    rate_codes: HashMap<&'static str, &'static str>,
    weight_based: HashSet<&'static str>,
}

static STANDARD_TABLES: Lazy<Arc<PricingTables>> = Lazy::new(|| Arc::new(PricingTables::build()));

impl PricingTables {
    /// The Tariff 400NG tables, built once per process
    pub fn standard() -> Arc<PricingTables> {
        Arc::clone(&STANDARD_TABLES)
    }

    pub fn new(
        pricers: HashMap<&'static str, Pricer>,
        rate_codes: HashMap<&'static str, &'static str>,
        weight_based: HashSet<&'static str>,
    ) -> Self {
        Self {
            pricers,
            rate_codes,
            weight_based,
        }
    }

    fn build() -> Self {
        use Pricer::{BasicQuantity, FlatRate};
        let hundredweight = Pricer::minimum_quantity_hundredweight(1000);

        let pricers = HashMap::from([
            ("LHS", BasicQuantity),
            ("4A", BasicQuantity),
            ("4B", BasicQuantity),
            ("16A", BasicQuantity),
            ("17A", hundredweight),
            ("17B", hundredweight),
            ("17C", hundredweight),
            ("17D", hundredweight),
            ("17E", hundredweight),
            ("17F", hundredweight),
            ("17G", hundredweight),
            ("28A", BasicQuantity),
            ("28B", BasicQuantity),
            ("28C", BasicQuantity),
            ("35A", BasicQuantity),
            ("105A", BasicQuantity),
            ("105B", Pricer::minimum_quantity(4)),
            ("105C", BasicQuantity),
            ("105D", BasicQuantity),
            ("105E", Pricer::minimum_quantity(4)),
            ("120A", BasicQuantity),
            ("120B", BasicQuantity),
            ("120C", BasicQuantity),
            ("120D", BasicQuantity),
            ("120E", BasicQuantity),
            ("120F", BasicQuantity),
            ("125A", FlatRate),
            ("125B", FlatRate),
            ("125C", FlatRate),
            ("125D", FlatRate),
            ("130A", BasicQuantity),
            ("130B", BasicQuantity),
            ("130C", BasicQuantity),
            ("130D", BasicQuantity),
            ("130E", BasicQuantity),
            ("135A", BasicQuantity),
            ("135B", BasicQuantity),
            ("175A", hundredweight),
            ("183A", BasicQuantity),
            ("183B", BasicQuantity),
            ("185A", hundredweight),
            ("185B", hundredweight),
            ("210A", hundredweight),
            ("210B", hundredweight),
            ("210C", hundredweight),
            ("225A", BasicQuantity),
            ("225B", BasicQuantity),
            ("226A", BasicQuantity),
        ]);

        // Codes legally billed at another code's rate
        let rate_codes = HashMap::from([("17A", "210A")]);

        let weight_based = HashSet::from(["17D", "175A", "185A"]);

        Self::new(pricers, rate_codes, weight_based)
    }

    pub fn pricer(&self, code: &str) -> Option<Pricer> {
        self.pricers.get(code).copied()
    }

    /// The code whose rate table rows price `code`
    pub fn rate_code<'a>(&self, code: &'a str) -> &'a str {
        match self.rate_codes.get(code) {
            Some(mapped) => mapped,
            None => code,
        }
    }

    pub fn is_weight_based(&self, code: &str) -> bool {
        self.weight_based.contains(code)
    }
}
