//! Account-centric views over the permissions the wallet has granted.
//!
//! The wallet stores permissions per origin. These functions turn that
//! around: which sites can see an address, and which addresses a site can
//! see. All of them tolerate missing permissions, caveats and metadata.
//! Result order follows map iteration and is not meaningful.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::models::permissions::Domain;
use crate::models::permissions::DomainMetadata;

/// A site connected to some address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedDomain {
    pub extension_id: Option<String>,

    /// the origin
    pub key: String,
    pub name: Option<String>,
    pub icon: Option<String>,
}

/// What to render for a connected site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInfo {
    pub icon: Option<String>,

    /// the site's name, or its origin when it has none
    pub name: String,
}

/// Addresses `origin` may see; empty for unknown origins.
pub fn accounts_for_origin(domains: &HashMap<String, Domain>, origin: &str) -> Vec<String> {
    domains
        .get(origin)
        .map(Domain::exposed_accounts)
        .unwrap_or_default()
}

/// Origin → addresses, for every origin that can see at least one address.
pub fn permitted_accounts_by_origin(
    domains: &HashMap<String, Domain>,
) -> HashMap<String, Vec<String>> {
    domains
        .iter()
        .map(|(origin, domain)| (origin.clone(), domain.exposed_accounts()))
        .filter(|(_, accounts)| !accounts.is_empty())
        .collect()
}

/// Every site that can see `address`.
pub fn connected_domains_for_address(
    domains: &HashMap<String, Domain>,
    domain_metadata: &HashMap<String, DomainMetadata>,
    address: &str,
) -> Vec<ConnectedDomain> {
    domains
        .iter()
        .filter(|(_, domain)| domain.exposed_accounts().iter().any(|a| a == address))
        .map(|(origin, _)| {
            let metadata = domain_metadata.get(origin).cloned().unwrap_or_default();
            ConnectedDomain {
                extension_id: metadata.extension_id,
                key: origin.clone(),
                name: metadata.name,
                icon: metadata.icon,
            }
        })
        .collect()
}

/// Address → origin → site info, for every address some site can see.
pub fn address_to_domain_map(
    domains: &HashMap<String, Domain>,
    domain_metadata: &HashMap<String, DomainMetadata>,
) -> HashMap<String, HashMap<String, DomainInfo>> {
    let mut map: HashMap<String, HashMap<String, DomainInfo>> = HashMap::new();

    for (origin, accounts) in permitted_accounts_by_origin(domains) {
        let metadata = domain_metadata.get(&origin);
        let info = DomainInfo {
            icon: metadata.and_then(|m| m.icon.clone()),
            name: metadata
                .and_then(|m| m.name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| origin.clone()),
        };

        for address in accounts {
            map.entry(address)
                .or_default()
                .insert(origin.clone(), info.clone());
        }
    }

    map
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::permissions::tests::domain_exposing;

    const ALICE: &str = "0x0dcd5d886577d5081b0c52e242ef29e70be3e7bc";
    const BOB: &str = "0xc42edfcc21ed14dda456aa0756c153f7985d8813";

    fn domains() -> HashMap<String, Domain> {
        HashMap::from([
            ("https://metamask.github.io".to_owned(), domain_exposing(&[ALICE, BOB])),
            ("https://app.uniswap.org".to_owned(), domain_exposing(&[ALICE])),
            ("https://no-accounts.example".to_owned(), Domain::default()),
        ])
    }

    fn metadata() -> HashMap<String, DomainMetadata> {
        HashMap::from([(
            "https://metamask.github.io".to_owned(),
            DomainMetadata {
                extension_id: None,
                name: Some("E2E Test Dapp".to_owned()),
                icon: Some("https://metamask.github.io/favicon.png".to_owned()),
            },
        )])
    }

    #[test]
    fn accounts_for_known_and_unknown_origins() {
        let domains = domains();
        assert_eq!(
            vec![ALICE.to_owned()],
            accounts_for_origin(&domains, "https://app.uniswap.org")
        );
        assert!(accounts_for_origin(&domains, "https://no-accounts.example").is_empty());
        assert!(accounts_for_origin(&domains, "https://unknown.example").is_empty());
    }

    #[test]
    fn origins_without_accounts_are_omitted() {
        let by_origin = permitted_accounts_by_origin(&domains());
        assert_eq!(2, by_origin.len());
        assert!(!by_origin.contains_key("https://no-accounts.example"));
    }

    #[test]
    fn connected_domains() {
        let connected = connected_domains_for_address(&domains(), &metadata(), ALICE)
            .into_iter()
            .collect::<HashSet<_>>();
        let expected = HashSet::from([
            ConnectedDomain {
                extension_id: None,
                key: "https://metamask.github.io".to_owned(),
                name: Some("E2E Test Dapp".to_owned()),
                icon: Some("https://metamask.github.io/favicon.png".to_owned()),
            },
            ConnectedDomain {
                extension_id: None,
                key: "https://app.uniswap.org".to_owned(),
                name: None,
                icon: None,
            },
        ]);
        assert_eq!(expected, connected);

        let bob = connected_domains_for_address(&domains(), &metadata(), BOB);
        assert_eq!(1, bob.len());
        assert!(connected_domains_for_address(&domains(), &metadata(), "0x1").is_empty());
    }

    #[test]
    fn address_map_falls_back_to_origin_name() {
        let map = address_to_domain_map(&domains(), &metadata());
        assert_eq!(2, map.len());

        let alice = &map[ALICE];
        assert_eq!(2, alice.len());
        assert_eq!("E2E Test Dapp", alice["https://metamask.github.io"].name);
        assert_eq!("https://app.uniswap.org", alice["https://app.uniswap.org"].name);
        assert_eq!(None, alice["https://app.uniswap.org"].icon);

        let bob = &map[BOB];
        assert_eq!(
            HashSet::from(["https://metamask.github.io"]),
            bob.keys().map(String::as_str).collect::<HashSet<_>>()
        );
    }
}
