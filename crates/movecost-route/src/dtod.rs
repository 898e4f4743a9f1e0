//! DTOD SOAP distance client
//!
//! The Defense Table of Official Distances answers ZIP5-to-ZIP5 mileage
//! through a single `ProcessRequest` SOAP operation. A response distance of
//! zero or less means either the service is down or one of the ZIPs is
//! unknown to it; [`dtod_status`] tells the two apart.

use std::sync::Arc;

use async_trait::async_trait;
use movecost_core::config::DtodConfig;
use movecost_core::models::Address;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, error, instrument, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::planner::{LatLong, Planner};
use crate::zip::format_zip5;

const SOAP_ACTION: &str = "https://dtod.sddc.army.mil/service/ProcessRequest";
const ROUTE_TYPE: &str = "CommercialPersonalProperty";

/// ZIPs DTOD is known to resolve, used to probe availability
const STATUS_PICKUP_ZIP: &str = "22030";
const STATUS_DESTINATION_ZIP: &str = "90210";

/// Who is asking for the distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Caller {
    #[default]
    Office,
    /// Self-service flows must not block on a DTOD outage
    ServiceMember,
}

/// A source of ZIP5-to-ZIP5 DTOD distances
#[async_trait]
pub trait Zip5Distance: Send + Sync {
    async fn dtod_zip5_distance(&self, pickup: &str, destination: &str) -> PlannerResult<i64>;
}

/// Transport for a raw SOAP envelope
#[async_trait]
pub trait SoapCaller: Send + Sync {
    async fn call(&self, envelope: String) -> PlannerResult<String>;
}

/// SOAP over HTTPS via reqwest
pub struct HttpSoapCaller {
    http_client: Client,
    url: String,
    host: String,
}

impl HttpSoapCaller {
    pub fn new(url: &str, timeout_secs: u64) -> PlannerResult<Self> {
        Ok(Self {
            http_client: crate::http_client(timeout_secs)?,
            url: url.to_string(),
            host: crate::host_of(url)?,
        })
    }
}

#[async_trait]
impl SoapCaller for HttpSoapCaller {
    async fn call(&self, envelope: String) -> PlannerResult<String> {
        let request = self
            .http_client
            .post(&self.url)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", SOAP_ACTION)
            .body(envelope);

        crate::fetch(request, &self.host).await
    }
}

/// Client for the DTOD distance service
pub struct DtodSoapClient {
    soap: Arc<dyn SoapCaller>,
    username: String,
    password: String,
    simulate_outage: bool,
    caller: Caller,
}

impl DtodSoapClient {
    pub fn new(
        soap: Arc<dyn SoapCaller>,
        username: impl Into<String>,
        password: impl Into<String>,
        simulate_outage: bool,
    ) -> Self {
        Self {
            soap,
            username: username.into(),
            password: password.into(),
            simulate_outage,
            caller: Caller::default(),
        }
    }

    pub fn from_config(config: &DtodConfig) -> PlannerResult<Self> {
        let username = config
            .username
            .clone()
            .ok_or_else(|| PlannerError::Config("dtod.username is not set".to_string()))?;
        let password = config
            .password
            .clone()
            .ok_or_else(|| PlannerError::Config("dtod.password is not set".to_string()))?;

        let soap = HttpSoapCaller::new(&config.url, config.timeout_secs)?;
        Ok(Self::new(
            Arc::new(soap),
            username,
            password,
            config.simulate_outage,
        ))
    }

    /// Same client, acting on behalf of `caller`
    pub fn for_caller(mut self, caller: Caller) -> Self {
        self.caller = caller;
        self
    }

    fn envelope(&self, pickup: &str, destination: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <ProcessRequest xmlns="https://dtod.sddc.army.mil/service/">
      <AuthToken>
        <Username>{}</Username>
        <Password>{}</Password>
      </AuthToken>
      <Function>Distance</Function>
      <Origin>
        <ZipCode>{}</ZipCode>
      </Origin>
      <Destination>
        <ZipCode>{}</ZipCode>
      </Destination>
      <RouteType>{}</RouteType>
    </ProcessRequest>
  </soap:Body>
</soap:Envelope>"#,
            escape(self.username.as_str()),
            escape(self.password.as_str()),
            escape(pickup),
            escape(destination),
            ROUTE_TYPE,
        )
    }

    /// Unrounded distance as reported by DTOD
    async fn raw_distance(&self, pickup: &str, destination: &str) -> PlannerResult<f64> {
        let body = self.soap.call(self.envelope(pickup, destination)).await?;
        debug!("DTOD response: {}", body);
        parse_distance(&body)
    }
}

#[async_trait]
impl Zip5Distance for DtodSoapClient {
    #[instrument(skip(self))]
    async fn dtod_zip5_distance(&self, pickup: &str, destination: &str) -> PlannerResult<i64> {
        if pickup.len() < 5 {
            return Err(PlannerError::InvalidZip(pickup.to_string()));
        }
        if destination.len() < 5 {
            return Err(PlannerError::InvalidZip(destination.to_string()));
        }

        let distance = self.raw_distance(pickup, destination).await?;

        if distance <= 0.0 {
            if self.simulate_outage || self.caller == Caller::ServiceMember {
                warn!(
                    "DTOD returned no distance between {} and {}, using 0",
                    pickup, destination
                );
                return Ok(0);
            }

            let status = dtod_status(self).await;
            error!(
                "DTOD returned no distance between {} and {}: {}",
                pickup,
                destination,
                status.reason()
            );
            return Err(PlannerError::NoDistance {
                pickup: pickup.to_string(),
                destination: destination.to_string(),
                reason: status.reason().to_string(),
            });
        }

        Ok(round_half_up(distance))
    }
}

/// Availability of the DTOD service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DtodStatus {
    Available,
    Unavailable,
}

impl DtodStatus {
    /// Why a lane returned no distance, given this status
    pub fn reason(&self) -> &'static str {
        match self {
            DtodStatus::Available => "invalid zip code",
            DtodStatus::Unavailable => "DTOD service outage",
        }
    }
}

/// Probe DTOD with two ZIPs it always resolves
pub async fn dtod_status(client: &DtodSoapClient) -> DtodStatus {
    match client
        .raw_distance(STATUS_PICKUP_ZIP, STATUS_DESTINATION_ZIP)
        .await
    {
        Ok(distance) if distance > 0.0 => DtodStatus::Available,
        Ok(_) => DtodStatus::Unavailable,
        Err(e) => {
            warn!("DTOD status probe failed: {}", e);
            DtodStatus::Unavailable
        }
    }
}

fn round_half_up(distance: f64) -> i64 {
    (distance + 0.5).floor() as i64
}

/// Extract `ProcessRequestResult/Distance` from a SOAP response
pub(crate) fn parse_distance(body: &str) -> PlannerResult<f64> {
    let decode = |message: String| PlannerError::Decode {
        host: "dtod".to_string(),
        message,
    };

    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut in_result = false;
    let mut in_distance = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"ProcessRequestResult" => in_result = true,
                b"Distance" if in_result => in_distance = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"ProcessRequestResult" => in_result = false,
                b"Distance" => in_distance = false,
                _ => {}
            },
            Ok(Event::Text(text)) if in_distance => {
                let value = text
                    .unescape()
                    .map_err(|e| decode(format!("Invalid Distance text: {}", e)))?;
                return value
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| decode(format!("Distance '{}' is not a number: {}", value, e)));
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(decode(format!("Malformed XML: {}", e))),
            _ => {}
        }
    }

    Err(decode("response has no ProcessRequestResult Distance".to_string()))
}

/// Planner answering every query through DTOD
pub struct DtodPlanner {
    source: Arc<dyn Zip5Distance>,
}

impl DtodPlanner {
    pub fn new(source: Arc<dyn Zip5Distance>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Planner for DtodPlanner {
    async fn transit_distance(
        &self,
        source: &Address,
        destination: &Address,
    ) -> PlannerResult<i64> {
        self.zip5_transit_distance(&source.postal_code, &destination.postal_code)
            .await
    }

    async fn lat_long_transit_distance(
        &self,
        _source: LatLong,
        _destination: LatLong,
    ) -> PlannerResult<i64> {
        Err(PlannerError::Unsupported("DTOD lat/long distance"))
    }

    async fn zip5_transit_distance(&self, source: &str, destination: &str) -> PlannerResult<i64> {
        let pickup = format_zip5(source)?;
        let destination = format_zip5(destination)?;
        self.source.dtod_zip5_distance(&pickup, &destination).await
    }

    async fn zip3_transit_distance(
        &self,
        _source: &str,
        _destination: &str,
    ) -> PlannerResult<i64> {
        Err(PlannerError::Unsupported("DTOD zip3 distance"))
    }
}
