//! Which currency, and how precisely, each amount slot should show.
//!
//! Every transaction shows up to two amounts. The user decides whether the
//! native asset or fiat goes first; the other one fills the secondary slot.
//! When fiat is hidden altogether both slots fall back to the native asset.
//!
//! | native first | show fiat | primary        | secondary      |
//! |--------------|-----------|----------------|----------------|
//! | yes          | yes       | native, 6      | fiat, 2        |
//! | no           | yes       | fiat, 2        | native, 6      |
//! | no           | no        | native, 6      | native, 6      |
//! | yes          | no        | native, 6      | native, 6      |

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::models::state::WalletSnapshot;

pub const NATIVE_NUMBER_OF_DECIMALS: u32 = 6;
pub const FIAT_NUMBER_OF_DECIMALS: u32 = 2;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayRole {
    Primary,
    Secondary,
}

/// Caller-supplied overrides. Each field replaces the default of the slot
/// it applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceOverrides {
    /// decimals for whichever currency the slot resolves to
    pub number_of_decimals: Option<u32>,

    /// decimals when the slot resolves to the native asset
    pub native_number_of_decimals: Option<u32>,

    /// decimals when the slot resolves to fiat
    pub fiat_number_of_decimals: Option<u32>,

    /// prefix for the amount when the slot resolves to fiat
    pub fiat_prefix: Option<String>,
}

/// The outcome of resolving a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPreference {
    /// `None` means the user's selected fiat currency
    pub currency: Option<String>,
    pub number_of_decimals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl CurrencyPreference {
    pub fn is_fiat(&self) -> bool {
        self.currency.is_none()
    }
}

/// Resolve the currency and precision for `role`.
///
/// Never fails: anything not specified falls back to the defaults in the
/// module-level table.
pub fn resolve_currency_preference(
    role: DisplayRole,
    overrides: &PreferenceOverrides,
    snapshot: &WalletSnapshot,
) -> CurrencyPreference {
    let native_first = snapshot.preferences.use_native_currency_as_primary_currency;
    let shows_native = !snapshot.show_fiat
        || match role {
            DisplayRole::Primary => native_first,
            DisplayRole::Secondary => !native_first,
        };

    let preference = if shows_native {
        CurrencyPreference {
            currency: Some(snapshot.native_currency().to_owned()),
            number_of_decimals: overrides
                .number_of_decimals
                .or(overrides.native_number_of_decimals)
                .unwrap_or(NATIVE_NUMBER_OF_DECIMALS),
            prefix: None,
        }
    } else {
        CurrencyPreference {
            currency: None,
            number_of_decimals: overrides
                .number_of_decimals
                .or(overrides.fiat_number_of_decimals)
                .unwrap_or(FIAT_NUMBER_OF_DECIMALS),
            prefix: overrides.fiat_prefix.clone(),
        }
    };

    debug!(
        "resolved {role} currency preference: {:?}, {} decimals",
        preference.currency, preference.number_of_decimals
    );
    preference
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use strum::IntoEnumIterator;
    use test_strategy::proptest;

    use super::*;
    use crate::models::state::Preferences;

    fn snapshot(native_first: bool, show_fiat: bool) -> WalletSnapshot {
        WalletSnapshot {
            native_currency: "ETH".to_owned(),
            preferences: Preferences {
                use_native_currency_as_primary_currency: native_first,
            },
            show_fiat,
            ..Default::default()
        }
    }

    fn native(decimals: u32) -> CurrencyPreference {
        CurrencyPreference {
            currency: Some("ETH".to_owned()),
            number_of_decimals: decimals,
            prefix: None,
        }
    }

    fn fiat(decimals: u32) -> CurrencyPreference {
        CurrencyPreference {
            currency: None,
            number_of_decimals: decimals,
            prefix: None,
        }
    }

    #[test]
    fn decision_table() {
        let none = PreferenceOverrides::default();
        let cases = [
            (true, true, native(6), fiat(2)),
            (false, true, fiat(2), native(6)),
            (false, false, native(6), native(6)),
            (true, false, native(6), native(6)),
        ];

        for (native_first, show_fiat, primary, secondary) in cases {
            let state = snapshot(native_first, show_fiat);
            assert_eq!(
                primary,
                resolve_currency_preference(DisplayRole::Primary, &none, &state),
                "primary for native_first={native_first}, show_fiat={show_fiat}"
            );
            assert_eq!(
                secondary,
                resolve_currency_preference(DisplayRole::Secondary, &none, &state),
                "secondary for native_first={native_first}, show_fiat={show_fiat}"
            );
        }
    }

    #[test]
    fn fiat_decimal_override_applies_to_fiat_slot() {
        let overrides = PreferenceOverrides {
            fiat_number_of_decimals: Some(4),
            fiat_prefix: Some("-".to_owned()),
            ..Default::default()
        };
        let resolved =
            resolve_currency_preference(DisplayRole::Secondary, &overrides, &snapshot(true, true));
        assert_eq!(None, resolved.currency);
        assert_eq!(4, resolved.number_of_decimals);
        assert_eq!(Some("-".to_owned()), resolved.prefix);
    }

    #[test]
    fn general_decimal_override_wins_over_fiat_override() {
        let overrides = PreferenceOverrides {
            number_of_decimals: Some(3),
            fiat_number_of_decimals: Some(4),
            fiat_prefix: Some("a".to_owned()),
            ..Default::default()
        };
        let resolved =
            resolve_currency_preference(DisplayRole::Secondary, &overrides, &snapshot(false, true));
        assert_eq!(native(3), resolved);
    }

    #[test]
    fn native_decimal_override_does_not_touch_fiat() {
        let overrides = PreferenceOverrides {
            native_number_of_decimals: Some(8),
            ..Default::default()
        };
        let state = snapshot(true, true);
        assert_eq!(
            native(8),
            resolve_currency_preference(DisplayRole::Primary, &overrides, &state)
        );
        assert_eq!(
            fiat(2),
            resolve_currency_preference(DisplayRole::Secondary, &overrides, &state)
        );
    }

    #[test]
    fn roles_parse_from_upper_case() {
        let roles = DisplayRole::iter().map(|r| r.to_string()).collect::<Vec<_>>();
        assert_eq!(vec!["PRIMARY", "SECONDARY"], roles);
    }

    #[proptest]
    fn without_fiat_both_slots_show_native(native_first: bool) {
        let state = snapshot(native_first, false);
        for role in DisplayRole::iter() {
            let resolved = resolve_currency_preference(role, &PreferenceOverrides::default(), &state);
            proptest::prop_assert_eq!(native(6), resolved);
        }
    }

    #[proptest]
    fn with_fiat_exactly_one_slot_is_fiat(native_first: bool) {
        let state = snapshot(native_first, true);
        let fiat_slots = DisplayRole::iter()
            .filter(|role| {
                resolve_currency_preference(*role, &PreferenceOverrides::default(), &state).is_fiat()
            })
            .count();
        proptest::prop_assert_eq!(1, fiat_slots);
    }
}
