//! HERE routing and geocoding planner
//!
//! Addresses are geocoded concurrently, one task per endpoint, and the two
//! positions are then routed as a truck. Route distances come back in meters.

use std::future::Future;

use async_trait::async_trait;
use movecost_core::config::HereConfig;
use movecost_core::models::Address;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::error::{PlannerError, PlannerResult};
use crate::planner::{LatLong, Planner};
use crate::zip::{zip3_lat_long, zip5_to_zip3_lat_long};

const METERS_PER_MILE: f64 = 1609.34;

/// Which end of the move a geocoding result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeocodeResponse {
    response: GeocodeBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeocodeBody {
    #[serde(default)]
    view: Vec<GeocodeView>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeocodeView {
    #[serde(default)]
    result: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeocodeResult {
    location: GeocodeLocation,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeocodeLocation {
    display_position: DisplayPosition,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DisplayPosition {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    response: RouteBody,
}

#[derive(Debug, Deserialize)]
struct RouteBody {
    #[serde(default)]
    route: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    summary: RouteSummary,
}

#[derive(Debug, Deserialize)]
struct RouteSummary {
    /// Meters
    distance: f64,
}

fn parse_geocode(host: &str, body: &str) -> PlannerResult<Option<LatLong>> {
    let parsed: GeocodeResponse = serde_json::from_str(body).map_err(|e| PlannerError::Decode {
        host: host.to_string(),
        message: e.to_string(),
    })?;

    Ok(parsed
        .response
        .view
        .into_iter()
        .next()
        .and_then(|view| view.result.into_iter().next())
        .map(|result| {
            let position = result.location.display_position;
            LatLong::new(position.latitude, position.longitude)
        }))
}

fn parse_route_miles(host: &str, body: &str) -> PlannerResult<i64> {
    let parsed: RouteResponse = serde_json::from_str(body).map_err(|e| PlannerError::Decode {
        host: host.to_string(),
        message: e.to_string(),
    })?;

    let route = parsed
        .response
        .route
        .into_iter()
        .next()
        .ok_or_else(|| PlannerError::NoRoute(host.to_string()))?;

    Ok((route.summary.distance / METERS_PER_MILE).round() as i64)
}

/// Geocode both endpoints concurrently and pair the results back up
pub async fn geocode_pair<F, Fut>(
    geocode: F,
    source: Address,
    destination: Address,
) -> PlannerResult<(LatLong, LatLong)>
where
    F: Fn(Address) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = PlannerResult<LatLong>> + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel(2);

    for (endpoint, address) in [
        (Endpoint::Source, source),
        (Endpoint::Destination, destination),
    ] {
        let tx = tx.clone();
        let geocode = geocode.clone();
        tokio::spawn(async move {
            let result = geocode(address).await;
            if tx.send((endpoint, result)).await.is_err() {
                debug!("Geocode result for {:?} dropped", endpoint);
            }
        });
    }
    drop(tx);

    let mut source_position = None;
    let mut destination_position = None;

    for _ in 0..2 {
        let (endpoint, result) = rx
            .recv()
            .await
            .ok_or_else(|| PlannerError::Geocode("geocoding task ended early".to_string()))?;

        match endpoint {
            Endpoint::Source => source_position = Some(result?),
            Endpoint::Destination => destination_position = Some(result?),
        }
    }

    match (source_position, destination_position) {
        (Some(source), Some(destination)) => Ok((source, destination)),
        _ => Err(PlannerError::Geocode(
            "missing source or destination position".to_string(),
        )),
    }
}

/// Address geocoding half of the HERE API
#[derive(Clone)]
struct HereGeocoder {
    http_client: Client,
    endpoint: String,
    host: String,
    app_id: String,
    app_code: String,
}

impl HereGeocoder {
    async fn geocode(&self, address: &Address) -> PlannerResult<LatLong> {
        let query = address.line_format();
        let request = self.http_client.get(&self.endpoint).query(&[
            ("app_id", self.app_id.as_str()),
            ("app_code", self.app_code.as_str()),
            ("searchtext", query.as_str()),
        ]);

        let body = crate::fetch(request, &self.host).await?;
        parse_geocode(&self.host, &body)?.ok_or(PlannerError::Geocode(query))
    }
}

pub struct HerePlanner {
    geocoder: HereGeocoder,
    route_endpoint: String,
    route_host: String,
}

impl HerePlanner {
    pub fn from_config(config: &HereConfig) -> PlannerResult<Self> {
        let app_id = config
            .app_id
            .clone()
            .ok_or_else(|| PlannerError::Config("here.app_id is not set".to_string()))?;
        let app_code = config
            .app_code
            .clone()
            .ok_or_else(|| PlannerError::Config("here.app_code is not set".to_string()))?;

        let http_client = crate::http_client(config.timeout_secs)?;

        Ok(Self {
            geocoder: HereGeocoder {
                http_client,
                endpoint: config.geocode_endpoint.clone(),
                host: crate::host_of(&config.geocode_endpoint)?,
                app_id,
                app_code,
            },
            route_endpoint: config.route_endpoint.clone(),
            route_host: crate::host_of(&config.route_endpoint)?,
        })
    }
}

#[async_trait]
impl Planner for HerePlanner {
    #[instrument(skip(self, source, destination))]
    async fn transit_distance(
        &self,
        source: &Address,
        destination: &Address,
    ) -> PlannerResult<i64> {
        let geocoder = self.geocoder.clone();
        let (source, destination) = geocode_pair(
            move |address: Address| {
                let geocoder = geocoder.clone();
                async move { geocoder.geocode(&address).await }
            },
            source.clone(),
            destination.clone(),
        )
        .await?;

        self.lat_long_transit_distance(source, destination).await
    }

    #[instrument(skip(self))]
    async fn lat_long_transit_distance(
        &self,
        source: LatLong,
        destination: LatLong,
    ) -> PlannerResult<i64> {
        let waypoint0 = format!("geo!{}", source.coords());
        let waypoint1 = format!("geo!{}", destination.coords());
        let request = self.geocoder.http_client.get(&self.route_endpoint).query(&[
            ("app_id", self.geocoder.app_id.as_str()),
            ("app_code", self.geocoder.app_code.as_str()),
            ("waypoint0", waypoint0.as_str()),
            ("waypoint1", waypoint1.as_str()),
            ("mode", "fastest;truck;traffic:disabled"),
        ]);

        let body = crate::fetch(request, &self.route_host).await?;
        let miles = parse_route_miles(&self.route_host, &body)?;
        info!("HERE route {} -> {}: {} miles", waypoint0, waypoint1, miles);
        Ok(miles)
    }

    async fn zip5_transit_distance(&self, source: &str, destination: &str) -> PlannerResult<i64> {
        let source = zip5_to_zip3_lat_long(source)?;
        let destination = zip5_to_zip3_lat_long(destination)?;
        self.lat_long_transit_distance(source, destination).await
    }

    async fn zip3_transit_distance(&self, source: &str, destination: &str) -> PlannerResult<i64> {
        let source = zip3_lat_long(source)?;
        let destination = zip3_lat_long(destination)?;
        self.lat_long_transit_distance(source, destination).await
    }
}
