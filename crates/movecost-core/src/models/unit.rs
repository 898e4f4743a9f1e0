//! Tariff units
//!
//! Money is tracked in integer cents, with millicents for rates whose source
//! tables carry sub-cent precision. Weights are pounds or hundredweight
//! (CWT), and line item quantities use a fixed-point representation with
//! four implied decimal places. Every conversion that can produce a fraction
//! rounds half away from zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Round a decimal to the nearest integer, half away from zero
pub fn round_to_i64(value: Decimal) -> i64 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Integer cents
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    #[inline]
    pub fn multiply(self, factor: i64) -> Cents {
        Cents(self.0 * factor)
    }

    #[inline]
    pub fn multiply_decimal(self, factor: Decimal) -> Cents {
        Cents(round_to_i64(Decimal::from(self.0) * factor))
    }

    #[inline]
    pub fn to_millicents(self) -> Millicents {
        Millicents(self.0 * 1000)
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl Sub for Cents {
    type Output = Cents;

    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Thousandths of a cent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Millicents(pub i64);

impl Millicents {
    #[inline]
    pub fn to_cents(self) -> Cents {
        Cents(round_to_i64(Decimal::new(self.0, 3)))
    }

    #[inline]
    pub fn multiply(self, factor: i64) -> Millicents {
        Millicents(self.0 * factor)
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

/// Weight in pounds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Pound(pub i64);

impl Pound {
    /// Whole hundredweight (integer division)
    #[inline]
    pub fn to_cwt(self) -> Cwt {
        Cwt(self.0 / 100)
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Pound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lbs", self.0)
    }
}

/// Hundredweight (100 lbs)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cwt(pub i64);

impl Cwt {
    #[inline]
    pub fn to_pounds(self) -> Pound {
        Pound(self.0 * 100)
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

/// Fixed-point quantity with four implied decimal places
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BaseQuantity(pub i64);

impl BaseQuantity {
    const SCALE: i64 = 10_000;

    #[inline]
    pub fn from_int(value: i64) -> BaseQuantity {
        BaseQuantity(value * Self::SCALE)
    }

    #[inline]
    pub fn from_cents(value: Cents) -> BaseQuantity {
        Self::from_int(value.0)
    }

    #[inline]
    pub fn from_cwt(value: Cwt) -> BaseQuantity {
        Self::from_int(value.0)
    }

    /// The quantity as a plain decimal (10000 → 1.0000)
    #[inline]
    pub fn to_unit_decimal(self) -> Decimal {
        Decimal::new(self.0, 4)
    }
}

/// A discount expressed as a fraction (0.6 means 60% off)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(pub Decimal);

impl DiscountRate {
    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn from_percent(percent: Decimal) -> Self {
        Self(percent / Decimal::from(100))
    }

    /// Apply the discount: `cents * (1 - rate)`, rounded
    #[inline]
    pub fn apply(self, cents: Cents) -> Cents {
        cents.multiply_decimal(Decimal::ONE - self.0)
    }

    #[inline]
    pub fn as_decimal(self) -> Decimal {
        self.0
    }
}
