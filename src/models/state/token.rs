use serde::Deserialize;
use serde::Serialize;

/// A token contract the user is tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub decimals: u32,
}

impl Token {
    /// Find the token deployed at `address` among `tokens`. Addresses are
    /// compared without regard to checksum casing.
    pub fn find_by_address<'a>(tokens: &'a [Token], address: &str) -> Option<&'a Token> {
        tokens
            .iter()
            .find(|token| token.address.eq_ignore_ascii_case(address))
    }
}
