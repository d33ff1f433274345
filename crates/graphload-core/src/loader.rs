//! Loader interface: translate → fetch → normalize.
//!
//! The core never performs network I/O. Callers supply a [`Transport`]; the
//! loader only decides whether and how it may be used and interprets what
//! comes back.

use crate::config::GraphLoadConfig;
use crate::error::LoadError;
use crate::normalize::{NormalizedData, Normalizer, TypedValueDecoder, ValueDecoder};
use crate::translate::{RequestDescriptor, SafeRequest, Translator};

/// Trait implemented by whatever actually performs the HTTP request.
///
/// Implementations must send `request.headers`, and make an anonymous
/// cross-origin request when `request.add_cors_origin` is set.
pub trait Transport {
    fn fetch(&self, request: &SafeRequest) -> anyhow::Result<String>;
}

impl<F> Transport for F
where
    F: Fn(&SafeRequest) -> anyhow::Result<String>,
{
    fn fetch(&self, request: &SafeRequest) -> anyhow::Result<String> {
        self(request)
    }
}

/// Translator and normalizer under one configuration.
pub struct GraphLoader<D = TypedValueDecoder> {
    translator: Translator,
    normalizer: Normalizer<D>,
}

impl GraphLoader {
    pub fn new(cfg: &GraphLoadConfig) -> Self {
        Self::with_decoder(cfg, TypedValueDecoder)
    }
}

impl<D: ValueDecoder> GraphLoader<D> {
    pub fn with_decoder(cfg: &GraphLoadConfig, decoder: D) -> Self {
        Self {
            translator: Translator::new(cfg),
            normalizer: Normalizer::new(decoder),
        }
    }

    /// Translates `descriptor`, fetches it with `transport` and normalizes
    /// the payload. The transport is not called if translation fails.
    pub fn load(
        &self,
        descriptor: &RequestDescriptor,
        transport: &dyn Transport,
    ) -> Result<NormalizedData, LoadError> {
        let request = self.translator.translate(descriptor)?;
        let payload = transport
            .fetch(&request)
            .map_err(|source| LoadError::Transport {
                url: request.url.clone(),
                source,
            })?;
        let data = self
            .normalizer
            .normalize(&payload, request.protocol, &request.url)?;
        Ok(data)
    }
}
