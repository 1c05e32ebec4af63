//! Decoding of call data for the standard token methods.

use num_bigint::BigUint;
use serde::Deserialize;
use serde::Serialize;

pub const TOKEN_METHOD_TRANSFER: &str = "transfer";
pub const TOKEN_METHOD_APPROVE: &str = "approve";
pub const TOKEN_METHOD_TRANSFER_FROM: &str = "transferFrom";

/// hex characters in one ABI-encoded argument
const WORD_HEX_LEN: usize = 64;
const SELECTOR_HEX_LEN: usize = 8;
const ADDRESS_HEX_LEN: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AbiType {
    Address,
    Uint256,
}

impl AbiType {
    fn name(self) -> &'static str {
        match self {
            AbiType::Address => "address",
            AbiType::Uint256 => "uint256",
        }
    }
}

struct TokenMethod {
    selector: &'static str,
    name: &'static str,
    params: &'static [(&'static str, AbiType)],
}

const TOKEN_METHODS: &[TokenMethod] = &[
    TokenMethod {
        selector: "a9059cbb",
        name: TOKEN_METHOD_TRANSFER,
        params: &[("_to", AbiType::Address), ("_value", AbiType::Uint256)],
    },
    TokenMethod {
        selector: "095ea7b3",
        name: TOKEN_METHOD_APPROVE,
        params: &[("_spender", AbiType::Address), ("_value", AbiType::Uint256)],
    },
    TokenMethod {
        selector: "23b872dd",
        name: TOKEN_METHOD_TRANSFER_FROM,
        params: &[
            ("_from", AbiType::Address),
            ("_to", AbiType::Address),
            ("_value", AbiType::Uint256),
        ],
    },
];

/// One decoded argument. Addresses are `0x`-prefixed lowercase hex, integers
/// are base-10 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenParam {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// A decoded token method call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    pub name: String,
    pub params: Vec<TokenParam>,
}

impl TokenData {
    /// Decode the call data of a standard token method. Returns `None` for
    /// unknown selectors and truncated or malformed arguments.
    pub fn decode(data: &str) -> Option<Self> {
        let hex = data
            .strip_prefix("0x")
            .or_else(|| data.strip_prefix("0X"))
            .unwrap_or(data);
        if !hex.is_ascii() || hex.len() < SELECTOR_HEX_LEN {
            return None;
        }

        let (selector, mut arguments) = hex.split_at(SELECTOR_HEX_LEN);
        let method = TOKEN_METHODS
            .iter()
            .find(|method| method.selector.eq_ignore_ascii_case(selector))?;

        let mut params = Vec::with_capacity(method.params.len());
        for &(name, kind) in method.params {
            if arguments.len() < WORD_HEX_LEN {
                return None;
            }
            let (word, rest) = arguments.split_at(WORD_HEX_LEN);
            arguments = rest;

            let value = match kind {
                AbiType::Address => {
                    let address = &word[WORD_HEX_LEN - ADDRESS_HEX_LEN..];
                    BigUint::parse_bytes(word.as_bytes(), 16)?;
                    format!("0x{}", address.to_ascii_lowercase())
                }
                AbiType::Uint256 => BigUint::parse_bytes(word.as_bytes(), 16)?.to_string(),
            };
            params.push(TokenParam {
                name: name.to_owned(),
                kind: kind.name().to_owned(),
                value,
            });
        }

        Some(Self {
            name: method.name.to_owned(),
            params,
        })
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.value.as_str())
    }

    /// The amount moved, in the token's base units.
    pub fn value(&self) -> Option<&str> {
        self.param("_value")
    }

    /// The receiving address; falls back to the first argument.
    pub fn to_address(&self) -> Option<&str> {
        self.param("_to")
            .or_else(|| self.params.first().map(|param| param.value.as_str()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use super::*;

    pub(crate) const RECIPIENT: &str = "0x2f318c334780961fb129d2a6c30d0763d9a5c970";

    /// transfer(RECIPIENT, 1_000_000)
    pub(crate) fn transfer_call_data() -> String {
        format!(
            "0xa9059cbb{:0>64}{:0>64x}",
            RECIPIENT.trim_start_matches("0x"),
            1_000_000u64
        )
    }

    #[test]
    fn decodes_transfer() {
        let decoded = TokenData::decode(&transfer_call_data()).unwrap();
        assert_eq!(TOKEN_METHOD_TRANSFER, decoded.name);
        assert_eq!(Some(RECIPIENT), decoded.to_address());
        assert_eq!(Some("1000000"), decoded.value());
        assert_eq!("address", decoded.params[0].kind);
        assert_eq!("uint256", decoded.params[1].kind);
    }

    #[test]
    fn decodes_transfer_from() {
        let from = "0x9eca64466f257793eaa52fcfff5066894b76a149";
        let data = format!(
            "0x23B872DD{:0>64}{:0>64}{:0>64x}",
            from.trim_start_matches("0x"),
            RECIPIENT.trim_start_matches("0x").to_uppercase(),
            42u8
        );
        let decoded = TokenData::decode(&data).unwrap();
        assert_eq!(TOKEN_METHOD_TRANSFER_FROM, decoded.name);
        assert_eq!(Some(RECIPIENT), decoded.to_address());
        assert_eq!(Some("42"), decoded.value());
    }

    #[test]
    fn approve_has_no_recipient_param_and_falls_back_to_spender() {
        let data = format!(
            "0x095ea7b3{:0>64}{:0>64x}",
            RECIPIENT.trim_start_matches("0x"),
            5u8
        );
        let decoded = TokenData::decode(&data).unwrap();
        assert_eq!(Some(RECIPIENT), decoded.to_address());
    }

    #[test]
    fn rejects_unknown_or_truncated_data() {
        assert!(TokenData::decode("0x").is_none());
        assert!(TokenData::decode("0xdeadbeef").is_none());

        let truncated = transfer_call_data();
        assert!(TokenData::decode(&truncated[..truncated.len() - 2]).is_none());

        let garbage = format!("0xa9059cbb{}", "zz".repeat(64));
        assert!(TokenData::decode(&garbage).is_none());
    }
}
