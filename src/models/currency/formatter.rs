use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

use super::fiat::FiatCurrency;

/// The pieces of a rendered amount, so that callers can style the prefix,
/// number and currency label independently.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrencyDisplayParts {
    pub prefix: Option<String>,
    pub value: String,
    pub suffix: Option<String>,
}

impl Display for CurrencyDisplayParts {
    /// `{prefix}{value} {suffix}`, omitting whatever is absent.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{prefix}")?;
        }
        write!(f, "{}", self.value)?;
        match &self.suffix {
            Some(suffix) if !suffix.is_empty() => write!(f, " {suffix}"),
            _ => Ok(()),
        }
    }
}

/// Options controlling how an amount is labelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOptions {
    /// prepended to the whole result, whatever the currency
    pub prefix: Option<String>,

    /// drop the currency label entirely
    pub hide_label: bool,

    /// label to use in place of the currency code
    pub suffix: Option<String>,

    /// precision the value was truncated to; fiat padding stops there
    pub number_of_decimals: Option<u32>,
}

/// Render a decimal amount with the conventions of `currency_code`.
///
/// Fiat currencies get their symbol and separators, with the fraction
/// padded to at most `number_of_decimals` digits. Anything else (the native
/// asset, tokens, unknown codes) is returned verbatim.
pub fn format_currency(
    decimal_value: &str,
    currency_code: &str,
    number_of_decimals: Option<u32>,
) -> String {
    match FiatCurrency::from_code(currency_code) {
        Some(fiat) => fiat.format(decimal_value, number_of_decimals),
        None => decimal_value.to_owned(),
    }
}

/// Format `decimal_value` as an amount of `currency_code`, returning the
/// full display string together with its parts.
///
/// ```
/// use wallet_activity::models::currency::format_with_label;
/// use wallet_activity::models::currency::LabelOptions;
///
/// let (display, parts) = format_with_label("2.8", "usd", &LabelOptions::default());
/// assert_eq!("$2.80 USD", display);
/// assert_eq!(Some("USD".to_owned()), parts.suffix);
/// ```
pub fn format_with_label(
    decimal_value: &str,
    currency_code: &str,
    options: &LabelOptions,
) -> (String, CurrencyDisplayParts) {
    let label = options
        .suffix
        .clone()
        .unwrap_or_else(|| currency_code.to_uppercase());

    labelled(
        format_currency(decimal_value, currency_code, options.number_of_decimals),
        label,
        options,
    )
}

/// Attach prefix and label to an already formatted value.
pub fn labelled(
    value: String,
    label: String,
    options: &LabelOptions,
) -> (String, CurrencyDisplayParts) {
    let parts = CurrencyDisplayParts {
        prefix: options.prefix.clone(),
        value,
        suffix: (!options.hide_label).then_some(label),
    };
    (parts.to_string(), parts)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn fiat_gets_symbol_and_code() {
        let (display, parts) = format_with_label("2.8", "usd", &LabelOptions::default());
        assert_eq!("$2.80 USD", display);
        assert_eq!("$2.80", parts.value);
        assert_eq!(Some("USD".to_owned()), parts.suffix);
        assert_eq!(None, parts.prefix);
    }

    #[test]
    fn crypto_gets_no_symbol() {
        let (display, parts) = format_with_label("1.266", "ETH", &LabelOptions::default());
        assert_eq!("1.266 ETH", display);
        assert_eq!("1.266", parts.value);
    }

    #[test]
    fn hide_label_drops_suffix() {
        let options = LabelOptions {
            hide_label: true,
            ..Default::default()
        };
        let (display, parts) = format_with_label("2.8", "usd", &options);
        assert_eq!("$2.80", display);
        assert_eq!(None, parts.suffix);
    }

    #[test]
    fn prefix_wraps_every_kind() {
        let options = LabelOptions {
            prefix: Some("-".to_owned()),
            ..Default::default()
        };
        assert_eq!("-$2.80 USD", format_with_label("2.8", "usd", &options).0);
        assert_eq!("-0.5 ETH", format_with_label("0.5", "ETH", &options).0);
    }

    #[test]
    fn zero_decimals_are_not_padded() {
        let options = LabelOptions {
            number_of_decimals: Some(0),
            ..Default::default()
        };
        assert_eq!("$2 USD", format_with_label("2", "usd", &options).0);
        assert_eq!("$2 NZD", format_with_label("2", "nzd", &options).0);
    }

    #[test]
    fn explicit_suffix_replaces_code() {
        let options = LabelOptions {
            suffix: Some("dollars".to_owned()),
            ..Default::default()
        };
        assert_eq!("$1.00 dollars", format_with_label("1", "usd", &options).0);
    }
}
