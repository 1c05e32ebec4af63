//! Gas arithmetic on hex encoded base-unit amounts.

use num_bigint::BigInt;

use crate::models::currency::decimal::parse_hex_integer;
use crate::models::currency::ConversionError;

/// A replacement transaction must outbid the one it replaces by this factor,
/// expressed as numerator and denominator.
const GAS_PRICE_BUMP: (u32, u32) = (11, 10);

fn to_hex(value: &BigInt) -> String {
    format!("0x{value:x}")
}

/// `gas_price` raised by ten percent, rounded down.
pub fn increase_last_gas_price(gas_price: &str) -> Result<String, ConversionError> {
    let (numerator, denominator) = GAS_PRICE_BUMP;
    let increased = parse_hex_integer(gas_price)? * numerator / denominator;
    Ok(to_hex(&increased))
}

/// The most a transaction can spend on gas: price times limit.
pub fn gas_total(gas_price: &str, gas_limit: &str) -> Result<BigInt, ConversionError> {
    Ok(parse_hex_integer(gas_price)? * parse_hex_integer(gas_limit)?)
}

/// true if `balance` covers sending `amount` plus `gas_total`.
pub fn is_balance_sufficient(
    amount: &BigInt,
    gas_total: &BigInt,
    balance: &str,
) -> Result<bool, ConversionError> {
    Ok(parse_hex_integer(balance)? >= amount + gas_total)
}
