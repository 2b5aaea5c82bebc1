use async_trait::async_trait;
use thiserror::Error;

use super::ConversionRequest;
use super::ErrorKind;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("the translation service could not be reached")]
    Network(#[source] reqwest::Error),
    #[error("the translation service answered with status {status}")]
    Service { status: u16 },
    #[error("the translation service answered without a text payload")]
    MalformedResponse,
}

impl TranslateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::Network(_) => return ErrorKind::Network,
            TranslateError::Service { .. } => return ErrorKind::Service,
            TranslateError::MalformedResponse => return ErrorKind::MalformedResponse,
        }
    }
}

/// Single attempt per call. Retries, caching, and de-duplication are all the
/// caller's problem, and the session engine deliberately does none of them.
#[async_trait]
pub trait Translator {
    async fn translate(&self, request: &ConversionRequest) -> Result<String, TranslateError>;
}

pub type TranslatorBox = Box<dyn Translator + Send + Sync>;
