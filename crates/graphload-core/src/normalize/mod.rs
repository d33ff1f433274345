//! Response normalization: fetched payload → the flat data a graph consumes.
//!
//! Dispatches on the logical protocol recorded at translation time. Any
//! failure returns the error alone; partially decoded data is dropped.

mod api;
mod sparql;
mod tabular;

pub use sparql::{TypedValueDecoder, ValueDecoder};

use serde_json::Value;

use crate::error::NormalizeError;
use crate::protocol::Protocol;

/// Normalized response data.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedData {
    Json(Value),
    /// Payload returned unchanged (or page wikitext).
    Text(String),
}

impl NormalizedData {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            NormalizedData::Json(v) => Some(v),
            NormalizedData::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedData::Json(_) => None,
            NormalizedData::Text(s) => Some(s),
        }
    }
}

/// Normalizes payloads with a configurable SPARQL value decoder.
pub struct Normalizer<D = TypedValueDecoder> {
    decoder: D,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(TypedValueDecoder)
    }
}

impl<D: ValueDecoder> Normalizer<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// Unwraps `payload` fetched from `url` according to `protocol`.
    pub fn normalize(
        &self,
        payload: &str,
        protocol: Protocol,
        url: &str,
    ) -> Result<NormalizedData, NormalizeError> {
        let data = match protocol {
            Protocol::WikiApi => NormalizedData::Json(api::unwrap_api_response(payload, protocol)?),
            Protocol::WikiRaw => {
                let response = api::unwrap_api_response(payload, protocol)?;
                NormalizedData::Text(api::page_content(&response, url)?)
            }
            Protocol::Tabular => {
                let response = api::unwrap_api_response(payload, protocol)?;
                NormalizedData::Json(tabular::rows_to_records(&response)?)
            }
            Protocol::TabularInfo => {
                let response = api::unwrap_api_response(payload, protocol)?;
                NormalizedData::Json(tabular::dataset_info(&response)?)
            }
            Protocol::WikidataSparql => {
                let results = api::parse_json(payload, protocol)?;
                NormalizedData::Json(sparql::bindings_to_records(&results, &self.decoder)?)
            }
            Protocol::Http
            | Protocol::Https
            | Protocol::WikiRest
            | Protocol::WikiFile
            | Protocol::WikiRawUpload
            | Protocol::Geoshape
            | Protocol::Geoline
            | Protocol::MapSnapshot
            | Protocol::WikiTitle => NormalizedData::Text(payload.to_string()),
        };
        Ok(data)
    }
}

/// [`Normalizer::normalize`] with the default decoder.
pub fn normalize(
    payload: &str,
    protocol: Protocol,
    url: &str,
) -> Result<NormalizedData, NormalizeError> {
    Normalizer::<TypedValueDecoder>::default().normalize(payload, protocol, url)
}
