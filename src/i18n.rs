//! User-facing text.
//!
//! Derivations never hard-code display strings; they ask a [`Translator`]
//! for a message key. [`LocaleMessages`] implements it over a catalog in the
//! wallet's locale-file format:
//!
//! ```json
//! { "sendSpecifiedTokens": { "message": "Send $1" } }
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::Context;
use regex::Captures;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

static SUBSTITUTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$(\d+)").expect("valid regex"));

const ENGLISH_MESSAGES: &str = r#"{
  "approve": { "message": "Approve" },
  "approveSpendLimit": { "message": "Approve spend limit" },
  "cancelAttempt": { "message": "Cancel Attempt" },
  "contractDeployment": { "message": "Contract Deployment" },
  "contractInteraction": { "message": "Contract Interaction" },
  "deposit": { "message": "Deposit" },
  "sendETH": { "message": "Send ETH" },
  "sendSpecifiedTokens": { "message": "Send $1" },
  "sendTokens": { "message": "Send Tokens" },
  "sentEther": { "message": "Sent Ether" },
  "transferFrom": { "message": "Transfer From" }
}"#;

/// Looks up the display text for a message key, substituting `args` for the
/// message's `$1`, `$2`, ... placeholders.
pub trait Translator {
    fn translate(&self, key: &str, args: &[&str]) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, &[&str]) -> String,
{
    fn translate(&self, key: &str, args: &[&str]) -> String {
        self(key, args)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleMessage {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A message catalog for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleMessages {
    messages: HashMap<String, LocaleMessage>,
}

impl LocaleMessages {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("locale messages are not a valid catalog")
    }

    /// The built-in English catalog.
    pub fn english() -> Self {
        Self::from_json(ENGLISH_MESSAGES).expect("built-in catalog is valid")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|m| m.message.as_str())
    }
}

impl Translator for LocaleMessages {
    /// Missing keys translate to the key itself.
    fn translate(&self, key: &str, args: &[&str]) -> String {
        let Some(message) = self.get(key) else {
            warn!("no translation for message key \"{key}\"");
            return key.to_owned();
        };

        SUBSTITUTION
            .replace_all(message, |captures: &Captures<'_>| {
                captures[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| args.get(index))
                    .map_or_else(|| captures[0].to_owned(), |arg| (*arg).to_owned())
            })
            .into_owned()
    }
}
