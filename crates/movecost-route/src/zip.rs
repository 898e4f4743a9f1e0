//! ZIP normalisation and the ZIP3 centroid table

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{PlannerError, PlannerResult};
use crate::planner::LatLong;
use crate::zip3_centroids::ZIP3_CENTROIDS;

static ZIP3_LAT_LONG: Lazy<HashMap<&'static str, LatLong>> = Lazy::new(|| {
    ZIP3_CENTROIDS
        .iter()
        .map(|&(zip3, latitude, longitude)| (zip3, LatLong::new(latitude, longitude)))
        .collect()
});

/// Normalise a postal code to five digits
///
/// Drops a `-xxxx` suffix and left-pads short codes, so `"1001"`,
/// `"01001"` and `"01001-1234"` all become `"01001"`.
pub fn format_zip5(postal_code: &str) -> PlannerResult<String> {
    let base = postal_code
        .split('-')
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base.len() > 5 || !base.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PlannerError::UnsupportedPostalCode(postal_code.to_string()));
    }

    Ok(format!("{:0>5}", base))
}

/// Centroid of the ZIP3 prefix a postal code belongs to
pub fn zip5_to_zip3_lat_long(postal_code: &str) -> PlannerResult<LatLong> {
    let zip5 = format_zip5(postal_code)?;
    zip3_lat_long(&zip5[0..3])
}

/// Centroid of a ZIP3 prefix
pub fn zip3_lat_long(zip3: &str) -> PlannerResult<LatLong> {
    ZIP3_LAT_LONG
        .get(zip3)
        .copied()
        .ok_or_else(|| PlannerError::UnsupportedPostalCode(zip3.to_string()))
}
