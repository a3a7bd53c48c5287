//! Remote image catalog lookup.
//!
//! The catalog answers `GET <endpoint>?md5=<UPPERHEX>` with
//! `{ "result": [ { "checksum": .., "name": .., "circuit_size": .. }, .. ] }`.
//! Only the first record is considered.

use reqwest::blocking::Client;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use anyhow::Context;

use crate::config::CatalogConfig;
use crate::error::{Result, ZkwasmError};

use super::report::{keys, CheckOutcome, CheckReport};
use super::ReadinessCheck;

/// A catalog record. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogImage {
    /// Checksum the catalog stored for the image.
    #[serde(default)]
    pub checksum: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Circuit size the image was set up with.
    #[serde(default)]
    pub circuit_size: Option<u64>,
}

/// Body of a catalog lookup response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Matching records; absent and empty both mean "not found".
    #[serde(default)]
    pub result: Option<Vec<CatalogImage>>,
}

impl CatalogResponse {
    /// The first matching record, if any.
    pub fn first(&self) -> Option<&CatalogImage> {
        self.result.as_ref().and_then(|images| images.first())
    }
}

/// Looks up images by digest.
pub trait CatalogClient {
    /// Query the catalog for images with the given uppercase hex MD5.
    fn lookup(&self, md5: &str) -> Result<CatalogResponse>;

    /// Human-readable location of the catalog, for messages.
    fn endpoint(&self) -> &str;
}

/// Catalog client over HTTP.
pub struct HttpCatalog {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpCatalog {
    /// Create a client for the configured catalog.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        if config.timeout_secs == 0 {
            return Err(ZkwasmError::ConfigValidationError {
                message: "catalog.timeout_secs must be at least 1".to_string(),
            });
        }
        let timeout = config.timeout();
        let client = Client::builder()
            .user_agent(concat!("zkwasm/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request_error(&self, err: reqwest::Error) -> ZkwasmError {
        let message = if err.is_timeout() {
            format!(
                "request to {} timed out after {}s",
                self.endpoint,
                self.timeout.as_secs()
            )
        } else if err.is_decode() {
            format!("invalid response from {}: {}", self.endpoint, err)
        } else {
            format!("{}: {}", self.endpoint, err)
        };
        ZkwasmError::CatalogRequest { message }
    }
}

impl CatalogClient for HttpCatalog {
    fn lookup(&self, md5: &str) -> Result<CatalogResponse> {
        let url = Url::parse_with_params(&self.endpoint, &[("md5", md5)]).map_err(|e| {
            ZkwasmError::CatalogRequest {
                message: format!("invalid catalog URL '{}': {}", self.endpoint, e),
            }
        })?;

        tracing::debug!("Querying image catalog: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ZkwasmError::CatalogStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        response
            .json::<CatalogResponse>()
            .map_err(|e| self.request_error(e))
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Checks that the image digest is registered in the catalog.
pub struct CatalogCheck {
    client: Box<dyn CatalogClient>,
}

impl CatalogCheck {
    /// Create a check using the given client.
    pub fn new(client: Box<dyn CatalogClient>) -> Self {
        Self { client }
    }
}

impl ReadinessCheck for CatalogCheck {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn run(&self, report: &CheckReport) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();

        let Some(md5) = report.info(keys::MD5_HASH) else {
            outcome.error("Cannot query image catalog: no digest available");
            return outcome;
        };

        match self.client.lookup(md5) {
            Ok(response) => match response.first() {
                None => outcome.error(format!(
                    "Image {} not found in catalog, please publish first",
                    md5
                )),
                Some(image) => match image.checksum.as_deref().filter(|c| !c.is_empty()) {
                    None => outcome.error(format!(
                        "Catalog record for image {} has no checksum",
                        md5
                    )),
                    Some(checksum) => {
                        outcome.record(keys::IMAGE_CHECKSUM, checksum);
                        if let Some(name) = &image.name {
                            outcome.record(keys::IMAGE_NAME, name.clone());
                        }
                        if let Some(size) = image.circuit_size {
                            outcome.record(keys::CIRCUIT_SIZE, size.to_string());
                        }
                    }
                },
            },
            Err(e) => {
                tracing::warn!("Catalog lookup against {} failed: {}", self.client.endpoint(), e);
                outcome.error(format!("Catalog lookup failed: {}", e));
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const MD5: &str = "B95F67F61EBB03619622D798F45FC2D3";

    /// Returns a canned response and counts calls.
    struct StubCatalog {
        calls: Rc<Cell<usize>>,
        response: RefCell<Option<Result<CatalogResponse>>>,
    }

    impl StubCatalog {
        fn new(response: Result<CatalogResponse>) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            (
                Self {
                    calls: Rc::clone(&calls),
                    response: RefCell::new(Some(response)),
                },
                calls,
            )
        }
    }

    impl CatalogClient for StubCatalog {
        fn lookup(&self, _md5: &str) -> Result<CatalogResponse> {
            self.calls.set(self.calls.get() + 1);
            self.response
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Ok(CatalogResponse::default()))
        }

        fn endpoint(&self) -> &str {
            "stub"
        }
    }

    fn report_with_digest() -> CheckReport {
        let mut outcome = CheckOutcome::new();
        outcome.record(keys::MD5_HASH, MD5);
        CheckReport::new().absorb("integrity", outcome)
    }

    fn http_catalog(server: &MockServer) -> HttpCatalog {
        HttpCatalog::new(&CatalogConfig {
            url: server.base_url(),
            path: "/image".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn no_digest_means_no_lookup() {
        let (stub, calls) = StubCatalog::new(Ok(CatalogResponse::default()));
        let outcome = CatalogCheck::new(Box::new(stub)).run(&CheckReport::new());

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("no digest available"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn empty_result_is_not_found() {
        let (stub, calls) = StubCatalog::new(Ok(CatalogResponse {
            result: Some(vec![]),
        }));
        let outcome = CatalogCheck::new(Box::new(stub)).run(&report_with_digest());

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("not found"));
        assert!(outcome.errors[0].contains(MD5));
    }

    #[test]
    fn absent_result_is_not_found() {
        let (stub, _) = StubCatalog::new(Ok(CatalogResponse { result: None }));
        let outcome = CatalogCheck::new(Box::new(stub)).run(&report_with_digest());
        assert!(outcome.errors[0].contains("not found"));
    }

    #[test]
    fn record_without_checksum_is_error() {
        let (stub, _) = StubCatalog::new(Ok(CatalogResponse {
            result: Some(vec![CatalogImage {
                checksum: Some(String::new()),
                name: Some("demo".to_string()),
                circuit_size: None,
            }]),
        }));
        let outcome = CatalogCheck::new(Box::new(stub)).run(&report_with_digest());

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("no checksum"));
        assert!(outcome.info.is_empty());
    }

    #[test]
    fn found_records_checksum_and_details() {
        let (stub, _) = StubCatalog::new(Ok(CatalogResponse {
            result: Some(vec![CatalogImage {
                checksum: Some("abc".to_string()),
                name: Some("demo".to_string()),
                circuit_size: Some(22),
            }]),
        }));
        let outcome = CatalogCheck::new(Box::new(stub)).run(&report_with_digest());

        assert!(outcome.passed());
        assert_eq!(
            outcome.info,
            vec![
                (keys::IMAGE_CHECKSUM.to_string(), "abc".to_string()),
                (keys::IMAGE_NAME.to_string(), "demo".to_string()),
                (keys::CIRCUIT_SIZE.to_string(), "22".to_string()),
            ]
        );
    }

    #[test]
    fn client_error_is_recorded_not_raised() {
        let (stub, _) = StubCatalog::new(Err(ZkwasmError::CatalogStatus {
            status: 502,
            url: "stub".to_string(),
        }));
        let outcome = CatalogCheck::new(Box::new(stub)).run(&report_with_digest());

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("502"));
    }

    #[test]
    fn http_lookup_sends_md5_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/image").query_param("md5", MD5);
            then.status(200)
                .json_body(json!({ "result": [{ "checksum": "abc", "name": "demo", "extra": 1 }] }));
        });

        let response = http_catalog(&server).lookup(MD5).unwrap();

        mock.assert_calls(1);
        let first = response.first().unwrap();
        assert_eq!(first.checksum.as_deref(), Some("abc"));
        assert_eq!(first.name.as_deref(), Some("demo"));
        assert_eq!(first.circuit_size, None);
    }

    #[test]
    fn http_lookup_maps_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/image");
            then.status(500).body("Internal Server Error");
        });

        let result = http_catalog(&server).lookup(MD5);

        assert!(matches!(
            result,
            Err(ZkwasmError::CatalogStatus { status: 500, .. })
        ));
    }

    #[test]
    fn http_lookup_rejects_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/image");
            then.status(200).body("not json");
        });

        let result = http_catalog(&server).lookup(MD5);

        assert!(matches!(result, Err(ZkwasmError::CatalogRequest { .. })));
    }

    #[test]
    fn http_lookup_unreachable_host() {
        let catalog = HttpCatalog::new(&CatalogConfig {
            url: "http://127.0.0.1:1".to_string(),
            path: "/image".to_string(),
            timeout_secs: 2,
        })
        .unwrap();

        let result = catalog.lookup(MD5);

        assert!(matches!(result, Err(ZkwasmError::CatalogRequest { .. })));
    }

    #[test]
    fn http_lookup_times_out_on_slow_catalog() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/image");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(json!({ "result": [{ "checksum": "abc" }] }));
        });
        let catalog = HttpCatalog::new(&CatalogConfig {
            url: server.base_url(),
            path: "/image".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        match catalog.lookup(MD5) {
            Err(ZkwasmError::CatalogRequest { message }) => {
                assert!(message.contains("timed out after 1s"), "message: {}", message);
            }
            other => panic!("expected timeout, got {:?}", other),
        }

        let outcome = CatalogCheck::new(Box::new(catalog)).run(&report_with_digest());

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("timed out"));
        assert!(outcome.info.is_empty());
    }

    #[test]
    fn http_catalog_rejects_zero_timeout() {
        let result = HttpCatalog::new(&CatalogConfig {
            timeout_secs: 0,
            ..CatalogConfig::default()
        });

        assert!(matches!(
            result,
            Err(ZkwasmError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn http_catalog_uses_configured_timeout() {
        let catalog = HttpCatalog::new(&CatalogConfig::default()).unwrap();
        assert_eq!(catalog.timeout(), Duration::from_secs(10));
        assert_eq!(catalog.endpoint(), "https://rpc.zkwasmhub.com:8090/image");
    }
}
