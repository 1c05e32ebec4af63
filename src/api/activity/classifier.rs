//! Sorting transaction groups into the four kinds of entry the activity list
//! distinguishes, and writing their title and subtitle.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use super::currency_display::AmountSource;
use super::error::ActivityError;
use crate::i18n::Translator;
use crate::models::state::Token;
use crate::models::transaction::method_data::MethodData;
use crate::models::transaction::token_data::TokenData;
use crate::models::transaction::DisplayStatus;
use crate::models::transaction::TransactionCategory;
use crate::models::transaction::TransactionGroup;
use crate::util::address::shorten_address;
use crate::util::date::format_date_with_year_context;

/// separates the parts of a subtitle
const SEPARATOR: &str = " · ";

/// prefix marking an amount that leaves the wallet
const OUTGOING_PREFIX: &str = "-";

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
    strum::EnumIs,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayCategory {
    Send,
    Deposit,
    Interaction,
    Approval,
}

/// Everything about a transaction group that does not depend on currency
/// preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: DisplayCategory,
    pub title: String,
    pub subtitle: String,

    /// what the displayed amount is computed from
    pub amount_source: AmountSource,

    /// `"-"` for outgoing amounts, empty for deposits
    pub prefix: String,

    pub sender_address: String,
    pub recipient_address: Option<String>,
    pub status: DisplayStatus,
}

/// Classify `group` by the category recorded on its initial transaction.
///
/// `method_data` is the resolved signature of the primary transaction's
/// call, if any. `now` decides whether dates include their year.
///
/// Fails with [`ActivityError::UnknownToken`] when a token transfer targets
/// a contract missing from `known_tokens`, and with
/// [`ActivityError::MissingDecodedParams`] when its call data cannot be
/// decoded.
pub fn classify(
    group: &TransactionGroup,
    known_tokens: &[Token],
    method_data: Option<&MethodData>,
    translator: &dyn Translator,
    now: DateTime<Utc>,
) -> Result<Classification, ActivityError> {
    let initial = &group.initial_transaction;
    let primary = &group.primary_transaction;

    let sender_address = initial.tx_params.from.clone();
    let to = initial.tx_params.to.clone();
    let date = format_date_with_year_context(initial.time.unwrap_or(0), now);
    let origin = initial.origin.as_deref().unwrap_or_default();
    let native_amount = || AmountSource::Native(primary.tx_params.value.clone());
    let sent_to = |recipient: Option<&str>| {
        format!("To: {}", shorten_address(recipient.unwrap_or_default()))
    };

    let (category, title, detail, amount_source, prefix, recipient_address) =
        match initial.transaction_category {
            TransactionCategory::Approve => (
                DisplayCategory::Approval,
                translator.translate("approveSpendLimit", &[]),
                origin.to_owned(),
                native_amount(),
                OUTGOING_PREFIX,
                to,
            ),
            TransactionCategory::ContractDeployment | TransactionCategory::ContractInteraction => {
                let title = method_data
                    .and_then(MethodData::humanized_name)
                    .unwrap_or_else(|| translator.translate(initial.action_key(), &[]));
                (
                    DisplayCategory::Interaction,
                    title,
                    origin.to_owned(),
                    native_amount(),
                    OUTGOING_PREFIX,
                    to,
                )
            }
            TransactionCategory::Incoming => (
                DisplayCategory::Deposit,
                translator.translate("deposit", &[]),
                format!("From: {}", shorten_address(&sender_address)),
                native_amount(),
                "",
                to,
            ),
            TransactionCategory::Transfer => {
                let contract = to.unwrap_or_default();
                let token = Token::find_by_address(known_tokens, &contract)
                    .ok_or(ActivityError::UnknownToken { address: contract })?
                    .clone();
                let data = initial
                    .tx_params
                    .data
                    .as_deref()
                    .and_then(TokenData::decode)
                    .ok_or(ActivityError::MissingDecodedParams)?;
                let recipient = data
                    .to_address()
                    .ok_or(ActivityError::MissingDecodedParams)?
                    .to_owned();

                (
                    DisplayCategory::Send,
                    translator.translate("sendSpecifiedTokens", &[&token.symbol]),
                    sent_to(Some(&recipient)),
                    AmountSource::Token { data, token },
                    OUTGOING_PREFIX,
                    Some(recipient),
                )
            }
            TransactionCategory::Send | TransactionCategory::TransferFrom => (
                DisplayCategory::Send,
                translator.translate("sendETH", &[]),
                sent_to(to.as_deref()),
                native_amount(),
                OUTGOING_PREFIX,
                to,
            ),
        };

    debug!(
        "classified transaction group {} ({}) as {category}",
        group.id(),
        initial.transaction_category
    );

    Ok(Classification {
        category,
        title,
        subtitle: format!("{date}{SEPARATOR}{detail}"),
        amount_source,
        prefix: prefix.to_owned(),
        sender_address,
        recipient_address,
        status: primary.status_key().into(),
    })
}
