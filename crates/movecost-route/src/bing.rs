//! Bing Maps truck routing planner

use async_trait::async_trait;
use movecost_core::config::BingConfig;
use movecost_core::models::Address;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::{PlannerError, PlannerResult};
use crate::planner::{LatLong, Planner};
use crate::zip::{zip3_lat_long, zip5_to_zip3_lat_long};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoutesResponse {
    #[serde(default)]
    resource_sets: Vec<ResourceSet>,
}

#[derive(Debug, Deserialize)]
struct ResourceSet {
    #[serde(default)]
    resources: Vec<RouteResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteResource {
    /// In the unit requested by `distanceUnit`
    travel_distance: f64,
}

fn parse_travel_distance(host: &str, body: &str) -> PlannerResult<i64> {
    let parsed: RoutesResponse = serde_json::from_str(body).map_err(|e| PlannerError::Decode {
        host: host.to_string(),
        message: e.to_string(),
    })?;

    parsed
        .resource_sets
        .into_iter()
        .next()
        .and_then(|set| set.resources.into_iter().next())
        .map(|resource| resource.travel_distance.round() as i64)
        .ok_or_else(|| PlannerError::NoRoute(host.to_string()))
}

pub struct BingPlanner {
    http_client: Client,
    endpoint: String,
    host: String,
    api_key: String,
}

impl BingPlanner {
    pub fn from_config(config: &BingConfig) -> PlannerResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| PlannerError::Config("bing.api_key is not set".to_string()))?;

        Ok(Self {
            http_client: crate::http_client(config.timeout_secs)?,
            endpoint: config.endpoint.clone(),
            host: crate::host_of(&config.endpoint)?,
            api_key,
        })
    }

    /// Waypoints are either `lat,long` pairs or free-form addresses
    async fn waypoints_distance(&self, source: &str, destination: &str) -> PlannerResult<i64> {
        let request = self.http_client.get(&self.endpoint).query(&[
            ("wp.0", source),
            ("wp.1", destination),
            ("distanceUnit", "mi"),
            ("key", self.api_key.as_str()),
        ]);

        let body = crate::fetch(request, &self.host).await?;
        let miles = parse_travel_distance(&self.host, &body)?;
        info!("Bing route {} -> {}: {} miles", source, destination, miles);
        Ok(miles)
    }
}

#[async_trait]
impl Planner for BingPlanner {
    #[instrument(skip(self, source, destination))]
    async fn transit_distance(
        &self,
        source: &Address,
        destination: &Address,
    ) -> PlannerResult<i64> {
        self.waypoints_distance(&source.line_format(), &destination.line_format())
            .await
    }

    #[instrument(skip(self))]
    async fn lat_long_transit_distance(
        &self,
        source: LatLong,
        destination: LatLong,
    ) -> PlannerResult<i64> {
        self.waypoints_distance(&source.coords(), &destination.coords())
            .await
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

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "dev.virtualearth.net";

    #[test]
    fn test_parse_travel_distance() {
        let body = r#"{"authenticationResultCode":"ValidCredentials","resourceSets":[{"estimatedTotal":1,"resources":[{"distanceUnit":"Mile","travelDistance":612.48}]}],"statusCode":200}"#;
        assert_eq!(parse_travel_distance(HOST, body).unwrap(), 612);
    }

    #[test]
    fn test_parse_without_route() {
        let body = r#"{"resourceSets":[{"resources":[]}]}"#;
        assert!(matches!(
            parse_travel_distance(HOST, body),
            Err(PlannerError::NoRoute(_))
        ));
        assert!(matches!(
            parse_travel_distance(HOST, "<html>"),
            Err(PlannerError::Decode { .. })
        ));
    }

    #[test]
    fn test_from_config_requires_key() {
        assert!(BingPlanner::from_config(&BingConfig::default()).is_err());

        let config = BingConfig {
            api_key: Some("key".to_string()),
            ..BingConfig::default()
        };
        let planner = BingPlanner::from_config(&config).unwrap();
        assert_eq!(planner.host, HOST);
    }

    #[tokio::test]
    async fn test_unsupported_zip_fails_before_request() {
        let config = BingConfig {
            api_key: Some("key".to_string()),
            endpoint: "http://127.0.0.1:9/Routes/Truck".to_string(),
            ..BingConfig::default()
        };
        let planner = BingPlanner::from_config(&config).unwrap();
        let err = planner
            .zip5_transit_distance("98765", "33633")
            .await
            .unwrap_err();
        assert!(err.is_unsupported_postal_code());
    }
}
