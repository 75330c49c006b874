//! Blocking HTTP client for the CFBD API.
//!
//! Holds the resolved [`ApiToken`] explicitly; every endpoint wrapper takes
//! a `&CfbdClient`, so there is no process-global credential state. One
//! blocking GET per call, no retries and no caching.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::ApiToken;
use crate::error::{CfbdError, Result};
use crate::table::DataTable;

/// Production base URL for the CFBD API.
pub const BASE_URL: &str = "https://api.collegefootballdata.com";

pub struct CfbdClient {
    http: Client,
    token: ApiToken,
    base_url: String,
}

impl CfbdClient {
    pub fn new(token: ApiToken) -> Result<Self> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Client against a non-default base URL. Used by tests with a mock
    /// server; the path and query construction is identical.
    pub fn with_base_url(token: ApiToken, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("cfbd-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET `path` with the given query pairs and parse the JSON body.
    ///
    /// A 401 or 403 means the upstream rejected the bearer token and maps to
    /// [`CfbdError::UpstreamAuth`], distinct from failing to resolve a token
    /// in the first place. Other non-success statuses surface as HTTP errors.
    pub fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, params = query.len(), "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.token.bearer())
            .send()?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(status = status.as_u16(), %url, "CFBD rejected the bearer token");
            return Err(CfbdError::UpstreamAuth {
                status: status.as_u16(),
            });
        }
        let response = response.error_for_status()?;

        Ok(response.json()?)
    }

    /// [`CfbdClient::get_json`] flattened into a [`DataTable`].
    pub fn get_table(&self, path: &str, query: &[(&str, String)]) -> Result<DataTable> {
        DataTable::from_json(&self.get_json(path, query)?)
    }
}
