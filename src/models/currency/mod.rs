//! Amounts of the native asset and of fiat currencies: exact conversion
//! between denominations, exchange into fiat, and rendering for display.

pub mod conversion;
pub mod decimal;
pub mod denomination;
pub mod fiat;
pub mod formatter;

pub use conversion::CurrencyConversion;
pub use denomination::Denomination;
pub use fiat::FiatCurrency;
pub use formatter::format_currency;
pub use formatter::format_with_label;
pub use formatter::CurrencyDisplayParts;
pub use formatter::LabelOptions;
use serde::Deserialize;
use serde::Serialize;

/// The native asset shown when the wallet state does not name one.
pub const DEFAULT_NATIVE_CURRENCY: &str = "ETH";

/// enumerates numeric conversion failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ConversionError {
    #[error("invalid numeric input: {value:?}")]
    InvalidNumericInput { value: String },

    #[error("invalid conversion rate: {rate}")]
    InvalidConversionRate { rate: String },
}
