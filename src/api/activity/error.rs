//! provides error types related to deriving activity display data.

use serde::Deserialize;
use serde::Serialize;

use crate::models::currency::ConversionError;

/// enumerates reasons a transaction group cannot be displayed.
///
/// Each of these means the wallet's own records are inconsistent, so they
/// are reported rather than papered over. Callers rendering a list should
/// substitute a placeholder for the failing group only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ActivityError {
    #[error(transparent)]
    InvalidNumericInput(#[from] ConversionError),

    #[error("no known token at address {address}")]
    UnknownToken { address: String },

    #[error("token amount has no decoded parameters")]
    MissingDecodedParams,

    // catch-all error, eg for anyhow errors
    #[error("display data could not be derived.  reason: {0}")]
    Failed(String),
}

// convert anyhow::Error to an ActivityError::Failed.
// note that anyhow Error is not serializable.
impl From<anyhow::Error> for ActivityError {
    fn from(e: anyhow::Error) -> Self {
        Self::Failed(e.to_string())
    }
}
