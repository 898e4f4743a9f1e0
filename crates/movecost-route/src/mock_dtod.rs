//! Deterministic stand-in for the DTOD service

use async_trait::async_trait;

use crate::dtod::Zip5Distance;
use crate::error::{PlannerError, PlannerResult};

/// A ZIP that only serves PO boxes; DTOD has no route to it
pub const PO_BOX_ZIP: &str = "20090";
/// A ZIP DTOD does not know
pub const INVALID_ZIP: &str = "00000";

const SAME_ZIP3_MILES: (i64, i64) = (2, 100);
const SAME_ZIP3_MAX_DIFF: i64 = 99;
const CROSS_ZIP3_MILES: (i64, i64) = (10, 3500);
const CROSS_ZIP3_MAX_DIFF: i64 = 99_999;

/// Maps the numeric distance between two ZIPs onto a plausible mileage
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDtodDistance;

impl MockDtodDistance {
    pub fn new() -> Self {
        Self
    }

    fn zip_number(zip: &str) -> PlannerResult<i64> {
        if zip.len() != 5 {
            return Err(PlannerError::InvalidZip(zip.to_string()));
        }
        zip.parse::<i64>()
            .map_err(|_| PlannerError::InvalidZip(zip.to_string()))
    }
}

fn scale(diff: i64, max_diff: i64, (low, high): (i64, i64)) -> i64 {
    let diff = diff.clamp(0, max_diff);
    low + diff * (high - low) / max_diff
}

#[async_trait]
impl Zip5Distance for MockDtodDistance {
    async fn dtod_zip5_distance(&self, pickup: &str, destination: &str) -> PlannerResult<i64> {
        for zip in [pickup, destination] {
            if zip == PO_BOX_ZIP || zip == INVALID_ZIP {
                return Err(PlannerError::NoDistance {
                    pickup: pickup.to_string(),
                    destination: destination.to_string(),
                    reason: "invalid zip code".to_string(),
                });
            }
        }

        let from = Self::zip_number(pickup)?;
        let to = Self::zip_number(destination)?;
        let diff = (from - to).abs();

        if diff == 0 {
            return Ok(0);
        }

        if pickup[0..3] == destination[0..3] {
            Ok(scale(diff, SAME_ZIP3_MAX_DIFF, SAME_ZIP3_MILES))
        } else {
            Ok(scale(diff, CROSS_ZIP3_MAX_DIFF, CROSS_ZIP3_MILES))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn distance(a: &str, b: &str) -> PlannerResult<i64> {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(MockDtodDistance::new().dtod_zip5_distance(a, b))
    }

    #[test]
    fn test_ranges() {
        assert_eq!(distance("39574", "39574").unwrap(), 0);

        let near = distance("39574", "39575").unwrap();
        assert!((2..=100).contains(&near));
        assert_eq!(distance("39500", "39599").unwrap(), 100);

        let far = distance("39574", "33633").unwrap();
        assert!((10..=3500).contains(&far));
        assert_eq!(distance("00501", "99950").unwrap(), 10 + 99449 * 3490 / 99999);
    }

    #[test]
    fn test_sentinel_zips_fail() {
        assert!(matches!(
            distance(PO_BOX_ZIP, "33633"),
            Err(PlannerError::NoDistance { .. })
        ));
        assert!(matches!(
            distance("39574", INVALID_ZIP),
            Err(PlannerError::NoDistance { .. })
        ));
        assert!(matches!(
            distance("3957", "33633"),
            Err(PlannerError::InvalidZip(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_identical_zip_is_zero(zip in 1u32..99_999u32) {
            let zip = format!("{:05}", zip);
            prop_assume!(zip != PO_BOX_ZIP);
            prop_assert_eq!(distance(&zip, &zip).unwrap(), 0);
        }

        #[test]
        fn prop_symmetric(a in 1u32..99_999u32, b in 1u32..99_999u32) {
            let (a, b) = (format!("{:05}", a), format!("{:05}", b));
            prop_assume!(a != PO_BOX_ZIP && b != PO_BOX_ZIP);
            prop_assert_eq!(distance(&a, &b).unwrap(), distance(&b, &a).unwrap());
        }
    }
}
