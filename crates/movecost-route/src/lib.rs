//! Route distance planners for MoveCost
//!
//! Every planner answers the same question, "how many miles between these two
//! locations", through the [`Planner`] trait:
//! - [`DtodPlanner`]: DoD Defense Table of Official Distances SOAP service
//! - [`HhgPlanner`]: DTOD for short hops, the ZIP3 distance table otherwise
//! - [`HerePlanner`] / [`BingPlanner`]: commercial routing APIs
//! - [`ConstantPlanner`] / [`MockPlanner`]: deterministic doubles

pub mod bing;
pub mod dtod;
pub mod error;
pub mod here;
pub mod hhg;
pub mod mock_dtod;
pub mod planner;
pub mod testing;
pub mod zip;
mod zip3_centroids;

use std::sync::Arc;
use std::time::Duration;

use movecost_core::config::PlannerKind;
use movecost_core::traits::ZipRepository;
use movecost_core::AppConfig;
use tracing::info;

pub use bing::BingPlanner;
pub use dtod::{
    dtod_status, Caller, DtodPlanner, DtodSoapClient, DtodStatus, HttpSoapCaller, SoapCaller,
    Zip5Distance,
};
pub use error::{PlannerError, PlannerResult};
pub use here::HerePlanner;
pub use hhg::HhgPlanner;
pub use mock_dtod::MockDtodDistance;
pub use planner::{LatLong, Planner};
pub use testing::{ConstantPlanner, MockPlanner};
pub use zip::{format_zip5, zip5_to_zip3_lat_long};

/// Build the planner selected by configuration
pub fn planner_from_config(
    config: &AppConfig,
    zips: Arc<dyn ZipRepository>,
) -> PlannerResult<Arc<dyn Planner>> {
    info!("Using {:?} distance planner", config.planner.kind);

    let planner: Arc<dyn Planner> = match config.planner.kind {
        PlannerKind::Hhg => {
            let dtod = Arc::new(DtodSoapClient::from_config(&config.dtod)?);
            Arc::new(HhgPlanner::new(dtod, zips))
        }
        PlannerKind::Dtod => {
            let dtod = Arc::new(DtodSoapClient::from_config(&config.dtod)?);
            Arc::new(DtodPlanner::new(dtod))
        }
        PlannerKind::Here => Arc::new(HerePlanner::from_config(&config.here)?),
        PlannerKind::Bing => Arc::new(BingPlanner::from_config(&config.bing)?),
        PlannerKind::Mock => Arc::new(MockPlanner::new()),
    };

    Ok(planner)
}

pub(crate) fn http_client(timeout_secs: u64) -> PlannerResult<reqwest::Client> {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|e| PlannerError::Config(e.to_string()))
}

pub(crate) fn host_of(url: &str) -> PlannerResult<String> {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .ok_or_else(|| PlannerError::Config(format!("Invalid service url: {}", url)))
}

/// Send a request and return the body of a successful response
pub(crate) async fn fetch(request: reqwest::RequestBuilder, host: &str) -> PlannerResult<String> {
    let response = request
        .send()
        .await
        .map_err(|e| PlannerError::from_reqwest(host, e))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| PlannerError::Decode {
        host: host.to_string(),
        message: format!("Failed to read response body: {}", e),
    })?;

    if !status.is_success() {
        tracing::error!("{} HTTP error: status={}", host, status);
        return Err(PlannerError::HttpStatus {
            host: host.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
