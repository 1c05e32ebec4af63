//! Permissions granted to sites (origins) and the metadata the wallet keeps
//! about them.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// capability that grants an origin access to account addresses
pub const ETH_ACCOUNTS_CAPABILITY: &str = "eth_accounts";

/// caveat on [`ETH_ACCOUNTS_CAPABILITY`] listing the exposed addresses
pub const EXPOSED_ACCOUNTS_CAVEAT: &str = "exposedAccounts";

/// A restriction attached to a permission. The value is free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caveat {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub parent_capability: String,
    #[serde(default)]
    pub caveats: Vec<Caveat>,
}

/// Everything one origin has been granted. At most one permission carries
/// [`ETH_ACCOUNTS_CAPABILITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Domain {
    pub fn accounts_permission(&self) -> Option<&Permission> {
        self.permissions
            .iter()
            .find(|permission| permission.parent_capability == ETH_ACCOUNTS_CAPABILITY)
    }

    /// Addresses this origin may see. Empty when there is no accounts
    /// permission, no exposed-accounts caveat, or the caveat is not a list.
    pub fn exposed_accounts(&self) -> Vec<String> {
        self.accounts_permission()
            .and_then(|permission| {
                permission
                    .caveats
                    .iter()
                    .find(|caveat| caveat.name == EXPOSED_ACCOUNTS_CAVEAT)
            })
            .and_then(|caveat| caveat.value.as_array())
            .map(|accounts| {
                accounts
                    .iter()
                    .filter_map(|account| account.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainMetadata {
    #[serde(default)]
    pub extension_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;

    pub(crate) fn domain_exposing(accounts: &[&str]) -> Domain {
        Domain {
            permissions: vec![
                Permission {
                    parent_capability: "eth_signTypedData".to_owned(),
                    caveats: vec![],
                },
                Permission {
                    parent_capability: ETH_ACCOUNTS_CAPABILITY.to_owned(),
                    caveats: vec![Caveat {
                        name: EXPOSED_ACCOUNTS_CAVEAT.to_owned(),
                        value: json!(accounts),
                    }],
                },
            ],
        }
    }

    #[test]
    fn reads_exposed_accounts() {
        let domain = domain_exposing(&["0xa", "0xb"]);
        assert_eq!(vec!["0xa".to_owned(), "0xb".to_owned()], domain.exposed_accounts());
    }

    #[test]
    fn missing_permission_or_caveat_means_no_accounts() {
        assert!(Domain::default().exposed_accounts().is_empty());

        let no_caveat = Domain {
            permissions: vec![Permission {
                parent_capability: ETH_ACCOUNTS_CAPABILITY.to_owned(),
                caveats: vec![],
            }],
        };
        assert!(no_caveat.exposed_accounts().is_empty());
    }

    #[test]
    fn non_list_caveat_means_no_accounts() {
        let domain = Domain {
            permissions: vec![Permission {
                parent_capability: ETH_ACCOUNTS_CAPABILITY.to_owned(),
                caveats: vec![Caveat {
                    name: EXPOSED_ACCOUNTS_CAVEAT.to_owned(),
                    value: json!("0xa"),
                }],
            }],
        };
        assert!(domain.exposed_accounts().is_empty());
    }

    #[test]
    fn deserializes_wallet_json() {
        let domain: Domain = serde_json::from_value(json!({
            "permissions": [{
                "parentCapability": "eth_accounts",
                "caveats": [{ "name": "exposedAccounts", "type": "filterResponse", "value": ["0xa"] }]
            }]
        }))
        .unwrap();
        assert_eq!(vec!["0xa".to_owned()], domain.exposed_accounts());
    }
}
