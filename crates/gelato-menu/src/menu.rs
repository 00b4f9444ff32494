//! Remote menu fetching and decoding
//!
//! The menu is a single hosted document: a JSON array of string-keyed
//! records. [`HttpMenu`] performs the one GET request (no retry, no
//! caching), [`decode_menu`] checks the document shape, and [`load_menu`]
//! composes fetch + decode + validation into the typed flavor list the
//! screen installs.

use std::time::Duration;

use tokio::time::timeout;
use url::Url;

use gelato_core::prelude::*;
use gelato_core::{parse_menu, Flavor, RawRecord};

/// The built-in menu document location
pub const DEFAULT_MENU_URL: &str = "https://menu.gelato.dev/flavors.json";

/// Default time budget for the whole fetch (connect + body)
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of raw menu records
///
/// [`HttpMenu`] is the production implementation; tests substitute
/// in-memory stubs.
#[trait_variant::make(MenuSource: Send)]
pub trait LocalMenuSource {
    /// Fetch the remote document and decode it into raw records
    async fn fetch_raw(&self) -> Result<Vec<RawRecord>>;
}

/// HTTP menu source: one GET against a fixed URL
#[derive(Debug, Clone)]
pub struct HttpMenu {
    client: reqwest::Client,
    url: Url,
    fetch_timeout: Duration,
}

impl HttpMenu {
    /// Create a source for the given menu URL
    pub fn new(url: Url, fetch_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            fetch_timeout,
        }
    }

    /// Create a source for the built-in menu URL
    pub fn with_default_url(fetch_timeout: Duration) -> Result<Self> {
        let url = Url::parse(DEFAULT_MENU_URL)
            .map_err(|e| Error::config(format!("Built-in menu URL is invalid: {}", e)))?;
        Ok(Self::new(url, fetch_timeout))
    }

    /// The URL this source fetches from
    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn get_body(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| Error::transport(format!("GET {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(format!(
                "GET {} returned {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(format!("Reading body from {} failed: {}", self.url, e)))?;

        Ok(body.to_vec())
    }
}

impl MenuSource for HttpMenu {
    async fn fetch_raw(&self) -> Result<Vec<RawRecord>> {
        debug!("Fetching menu from {}", self.url);

        let body = timeout(self.fetch_timeout, self.get_body())
            .await
            .map_err(|_| {
                Error::transport(format!(
                    "GET {} timed out after {:?}",
                    self.url, self.fetch_timeout
                ))
            })??;

        decode_menu(&body)
    }
}

/// Decode a menu document body into raw records
///
/// The document root must be an array of string-keyed objects; anything
/// else is a decode failure for the whole document. Per-record field
/// problems are not checked here, that is [`parse_menu`]'s job.
pub fn decode_menu(body: &[u8]) -> Result<Vec<RawRecord>> {
    let root: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| Error::decode(format!("Menu document is not valid JSON: {}", e)))?;

    let entries = match root {
        serde_json::Value::Array(entries) => entries,
        other => {
            return Err(Error::decode(format!(
                "Menu root must be an array, got {}",
                value_kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .map(|entry| match entry {
            serde_json::Value::Object(record) => Ok(record),
            other => Err(Error::decode(format!(
                "Menu entry must be an object, got {}",
                value_kind(&other)
            ))),
        })
        .collect()
}

/// Load the full menu: fetch, decode, validate
///
/// One attempt only; a transport or decode failure is terminal for the
/// load. Malformed records shrink the result without failing it.
pub async fn load_menu<S: MenuSource>(source: &S) -> Result<Vec<Flavor>> {
    let raw = source.fetch_raw().await?;
    let total = raw.len();

    let flavors = parse_menu(raw);
    info!("Menu loaded: {} flavors ({} raw entries)", flavors.len(), total);

    Ok(flavors)
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
