use serde::Deserialize;
use serde::Serialize;
use strum::EnumIter;

/// The units a native-asset amount can be expressed in.
///
/// The ladder is fixed: 1 ETH = 10^9 GWEI = 10^18 WEI. Amounts recorded on
/// chain (transaction values, gas prices, balances) are always integers of
/// the base unit, [`Denomination::Wei`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(arbitrary::Arbitrary))]
#[strum(ascii_case_insensitive)]
pub enum Denomination {
    /// base unit
    #[strum(serialize = "WEI")]
    #[serde(rename = "WEI")]
    Wei,

    /// intermediate unit, used for gas prices
    #[strum(serialize = "GWEI")]
    #[serde(rename = "GWEI")]
    Gwei,

    /// major unit, the canonical display unit
    #[default]
    #[strum(serialize = "ETH")]
    #[serde(rename = "ETH")]
    Ether,
}

impl Denomination {
    /// Number of decimal places this denomination is shifted by relative to
    /// the base unit.
    pub const fn exponent(self) -> u32 {
        match self {
            Denomination::Wei => 0,
            Denomination::Gwei => 9,
            Denomination::Ether => 18,
        }
    }

    /// Decimal places separating `self` from `Denomination::Ether`.
    pub const fn exponent_below_major(self) -> u32 {
        Denomination::Ether.exponent() - self.exponent()
    }
}
