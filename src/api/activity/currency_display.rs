//! Turning an amount source into a labelled display string.

use num_rational::BigRational;

use super::error::ActivityError;
use crate::models::currency::decimal;
use crate::models::currency::format_with_label;
use crate::models::currency::formatter::labelled;
use crate::models::currency::CurrencyConversion;
use crate::models::currency::CurrencyDisplayParts;
use crate::models::currency::Denomination;
use crate::models::currency::LabelOptions;
use crate::models::state::Token;
use crate::models::state::WalletSnapshot;
use crate::models::transaction::token_data::TokenData;

/// decimals used when the caller does not ask for a precision
pub const DEFAULT_NUMBER_OF_DECIMALS: u32 = 2;

/// What an amount is computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountSource {
    /// native-asset base units, hex encoded
    Native(String),

    /// a decoded token method call and the token it moves
    Token { data: TokenData, token: Token },
}

impl AmountSource {
    pub fn is_token(&self) -> bool {
        matches!(self, AmountSource::Token { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// use this value verbatim instead of converting the source
    pub display_value: Option<String>,

    pub prefix: Option<String>,
    pub number_of_decimals: Option<u32>,

    /// denomination of the native asset to show; major unit when unset
    pub denomination: Option<Denomination>,

    /// target currency; the user's fiat currency when unset
    pub currency: Option<String>,

    pub hide_label: bool,

    /// label to show in place of the currency code
    pub suffix: Option<String>,
}

/// Format `source` for display, returning the full string and its parts.
///
/// Native amounts are converted from base units into `options.currency` at
/// the snapshot's conversion rate. Token amounts are scaled by the token's
/// decimals and shown exactly, labelled with the token symbol.
pub fn format_amount_for_display(
    source: &AmountSource,
    options: &DisplayOptions,
    snapshot: &WalletSnapshot,
) -> Result<(String, CurrencyDisplayParts), ActivityError> {
    let number_of_decimals = options
        .number_of_decimals
        .unwrap_or(DEFAULT_NUMBER_OF_DECIMALS);
    let label_options = LabelOptions {
        prefix: options.prefix.clone(),
        hide_label: options.hide_label,
        suffix: options.suffix.clone(),
        number_of_decimals: Some(number_of_decimals),
    };

    match source {
        AmountSource::Token { data, token } => {
            let value = token_amount(data, token)?;
            let label = options
                .suffix
                .clone()
                .unwrap_or_else(|| token.symbol.clone());
            Ok(labelled(
                options.display_value.clone().unwrap_or(value),
                label,
                &label_options,
            ))
        }
        AmountSource::Native(value_hex) => {
            let currency = options
                .currency
                .as_deref()
                .unwrap_or(&snapshot.current_currency);

            if let Some(display_value) = &options.display_value {
                let label = options
                    .suffix
                    .clone()
                    .unwrap_or_else(|| currency.to_uppercase());
                return Ok(labelled(display_value.clone(), label, &label_options));
            }

            let value = CurrencyConversion::native(snapshot.native_currency())
                .to_currency(currency, snapshot.conversion_rate)
                .to_denomination(options.denomination.unwrap_or_default())
                .number_of_decimals(Some(number_of_decimals))
                .convert_hex(value_hex)?;

            Ok(format_with_label(&value, currency, &label_options))
        }
    }
}

/// `_value / 10^decimals`, exactly.
fn token_amount(data: &TokenData, token: &Token) -> Result<String, ActivityError> {
    let raw = data.value().ok_or(ActivityError::MissingDecodedParams)?;
    let amount = decimal::parse_decimal(raw)?
        / BigRational::from_integer(decimal::pow10(token.decimals));
    Ok(decimal::to_decimal_string(&amount, None))
}
