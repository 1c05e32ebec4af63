use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new("([A-Z])").expect("valid regex"));

/// hex characters in `0x` plus a 4-byte method selector
const FOUR_BYTE_PREFIX_LEN: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParam {
    #[serde(rename = "type")]
    pub kind: String,
}

/// A contract method signature the wallet has resolved for some selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodData {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub params: Vec<MethodParam>,
}

impl MethodData {
    /// The method name in title case: `"setApprovalForAll"` becomes
    /// `"Set Approval For All"`.
    pub fn humanized_name(&self) -> Option<String> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(camel_case_to_capitalize)
    }
}

/// The `0x`-prefixed method selector that starts `data`, the key under which
/// method data is stored.
pub fn four_byte_prefix(data: &str) -> Option<&str> {
    data.get(..FOUR_BYTE_PREFIX_LEN)
}

pub fn camel_case_to_capitalize(name: &str) -> String {
    let spaced = UPPERCASE.replace_all(name, " $1");
    let mut chars = spaced.trim_start().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
