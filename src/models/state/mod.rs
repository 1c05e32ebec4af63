//! The read-only wallet state that every derivation is computed against.
//!
//! A [`WalletSnapshot`] is deserialized from the wallet's persisted state
//! (camelCase JSON) or built directly, and handed to each call. Nothing in
//! this crate mutates it.

pub mod token;

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

pub use self::token::Token;
use crate::models::currency::DEFAULT_NATIVE_CURRENCY;
use crate::models::permissions::Domain;
use crate::models::permissions::DomainMetadata;
use crate::models::transaction::method_data::four_byte_prefix;
use crate::models::transaction::method_data::MethodData;

/// User preferences that affect how amounts are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// show the native asset in the primary slot and fiat in the secondary
    #[serde(default)]
    pub use_native_currency_as_primary_currency: bool,
}

/// An account the wallet controls. `balance` is a hex string of base units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    #[serde(default = "zero_hex")]
    pub balance: String,
}

fn zero_hex() -> String {
    "0x0".to_owned()
}

fn default_native_currency() -> String {
    DEFAULT_NATIVE_CURRENCY.to_owned()
}

fn default_current_currency() -> String {
    "usd".to_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    /// monotonically increasing; changes whenever anything below changes
    #[serde(default)]
    pub version: u64,

    /// the fiat currency the user selected, e.g. `usd`
    #[serde(default = "default_current_currency")]
    pub current_currency: String,

    /// the chain's native asset, e.g. `ETH`
    #[serde(default = "default_native_currency")]
    pub native_currency: String,

    /// price of one major unit of the native asset in `current_currency`
    #[serde(default)]
    pub conversion_rate: Option<f64>,

    #[serde(default)]
    pub tokens: Vec<Token>,

    /// resolved method signatures keyed by 4-byte selector (`0xa9059cbb`)
    #[serde(default)]
    pub known_method_data: HashMap<String, MethodData>,

    #[serde(default)]
    pub preferences: Preferences,

    #[serde(default)]
    pub show_fiat: bool,

    #[serde(default)]
    pub selected_address: Option<String>,

    #[serde(default)]
    pub accounts: HashMap<String, Account>,

    /// granted permissions keyed by origin
    #[serde(default)]
    pub domains: HashMap<String, Domain>,

    #[serde(default)]
    pub domain_metadata: HashMap<String, DomainMetadata>,

    #[serde(default)]
    pub feature_flags: HashMap<String, bool>,
}

impl Default for WalletSnapshot {
    fn default() -> Self {
        Self {
            version: 0,
            current_currency: default_current_currency(),
            native_currency: default_native_currency(),
            conversion_rate: None,
            tokens: vec![],
            known_method_data: HashMap::new(),
            preferences: Preferences::default(),
            show_fiat: false,
            selected_address: None,
            accounts: HashMap::new(),
            domains: HashMap::new(),
            domain_metadata: HashMap::new(),
            feature_flags: HashMap::new(),
        }
    }
}

impl WalletSnapshot {
    /// The native currency, falling back to the default when unset.
    pub fn native_currency(&self) -> &str {
        if self.native_currency.is_empty() {
            DEFAULT_NATIVE_CURRENCY
        } else {
            &self.native_currency
        }
    }

    /// The account currently selected in the wallet, if it is known.
    pub fn selected_account(&self) -> Option<&Account> {
        self.selected_address
            .as_ref()
            .and_then(|address| self.accounts.get(address))
    }

    /// Method data for the selector that starts `data`.
    pub fn known_method_data(&self, data: Option<&str>) -> Option<&MethodData> {
        data.and_then(four_byte_prefix)
            .and_then(|prefix| self.known_method_data.get(prefix))
    }

    /// One value per requested flag, `false` for flags that are not set.
    pub fn feature_flags(&self, flags: &[&str]) -> Vec<bool> {
        flags
            .iter()
            .map(|flag| self.feature_flags.get(*flag).copied().unwrap_or(false))
            .collect()
    }
}
