use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::warn;

use super::decimal;
use super::ConversionError;
use super::Denomination;

/// Describes one conversion of a native-asset amount: which denomination it
/// is written in, which currency and denomination it should come out in, and
/// how many decimal places the result may keep.
///
/// Shifting between denominations of the same asset is exact. Converting to
/// a different currency multiplies the major-unit amount by
/// `conversion_rate`, the only step where the caller-supplied ratio can
/// introduce rounding.
///
/// ```
/// use wallet_activity::models::currency::CurrencyConversion;
/// use wallet_activity::models::currency::Denomination;
///
/// let gwei = CurrencyConversion::native("ETH")
///     .to_denomination(Denomination::Gwei)
///     .convert_hex("0x3b9aca00")
///     .unwrap();
/// assert_eq!("1", gwei);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyConversion {
    pub from_currency: String,
    pub to_currency: String,
    pub from_denomination: Denomination,
    pub to_denomination: Denomination,
    pub conversion_rate: Option<f64>,
    pub number_of_decimals: Option<u32>,
}

impl CurrencyConversion {
    /// A conversion from base units of `native_currency` into its major unit,
    /// with exact output.
    pub fn native(native_currency: &str) -> Self {
        Self {
            from_currency: native_currency.to_owned(),
            to_currency: native_currency.to_owned(),
            from_denomination: Denomination::Wei,
            to_denomination: Denomination::Ether,
            conversion_rate: None,
            number_of_decimals: None,
        }
    }

    pub fn to_currency(mut self, currency: &str, conversion_rate: Option<f64>) -> Self {
        self.to_currency = currency.to_owned();
        self.conversion_rate = conversion_rate;
        self
    }

    pub fn from_denomination(mut self, denomination: Denomination) -> Self {
        self.from_denomination = denomination;
        self
    }

    pub fn to_denomination(mut self, denomination: Denomination) -> Self {
        self.to_denomination = denomination;
        self
    }

    pub fn number_of_decimals(mut self, number_of_decimals: Option<u32>) -> Self {
        self.number_of_decimals = number_of_decimals;
        self
    }

    /// true if the conversion crosses from one currency into another.
    pub fn crosses_currencies(&self) -> bool {
        !self.from_currency.eq_ignore_ascii_case(&self.to_currency)
    }

    /// Convert an integer written in hexadecimal, such as a transaction's
    /// `value` field.
    pub fn convert_hex(&self, value_hex: &str) -> Result<String, ConversionError> {
        let value = decimal::parse_hex_integer(value_hex)?;
        Ok(self.convert(BigRational::from_integer(value)))
    }

    /// Convert an amount written as a base-10 decimal string.
    pub fn convert_decimal(&self, value: &str) -> Result<String, ConversionError> {
        let parsed = decimal::parse_decimal(value)?;
        if parsed < BigRational::zero() {
            return Err(ConversionError::InvalidNumericInput {
                value: value.to_owned(),
            });
        }
        Ok(self.convert(parsed))
    }

    fn convert(&self, value: BigRational) -> String {
        let major = value / BigRational::from_integer(self.from_denomination_scale());
        let major = if self.crosses_currencies() {
            major * self.exchange_rate()
        } else {
            major
        };
        let converted =
            major * BigRational::from_integer(decimal::pow10(self.to_denomination.exponent_below_major()));

        decimal::to_decimal_string(&converted, self.number_of_decimals)
    }

    fn from_denomination_scale(&self) -> BigInt {
        decimal::pow10(self.from_denomination.exponent_below_major())
    }

    fn exchange_rate(&self) -> BigRational {
        let Some(rate) = self.conversion_rate else {
            warn!(
                "no conversion rate from {} to {}; rendering zero",
                self.from_currency, self.to_currency
            );
            return BigRational::zero();
        };

        decimal::rate_to_rational(rate).unwrap_or_else(|| {
            warn!(
                "{}",
                ConversionError::InvalidConversionRate {
                    rate: rate.to_string()
                }
            );
            BigRational::zero()
        })
    }
}
