//! Assembling the display record for a transaction group.

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use super::classifier::classify;
use super::classifier::DisplayCategory;
use super::currency_display::format_amount_for_display;
use super::currency_display::AmountSource;
use super::currency_display::DisplayOptions;
use super::error::ActivityError;
use crate::api::preferences::resolve_currency_preference;
use crate::api::preferences::CurrencyPreference;
use crate::api::preferences::DisplayRole;
use crate::api::preferences::PreferenceOverrides;
use crate::i18n::Translator;
use crate::models::state::WalletSnapshot;
use crate::models::transaction::DisplayStatus;
use crate::models::transaction::TransactionGroup;

/// Everything a list item or detail view shows for one transaction group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// id of the group's initial transaction
    pub id: u64,
    pub category: DisplayCategory,
    pub title: String,
    pub subtitle: String,
    pub status: DisplayStatus,
    pub primary_currency: String,

    /// absent for token transfers, which show a single amount
    pub secondary_currency: Option<String>,

    pub sender_address: String,
    pub recipient_address: Option<String>,
}

impl DisplayRecord {
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}

/// The inputs a derivation reads besides the transaction group itself.
#[derive(Clone, Copy)]
pub struct ActivityContext<'a> {
    pub snapshot: &'a WalletSnapshot,
    pub translator: &'a dyn Translator,

    /// reference time for year-aware dates
    pub now: DateTime<Utc>,
}

impl std::fmt::Debug for ActivityContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityContext")
            .field("snapshot_version", &self.snapshot.version)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}

impl<'a> ActivityContext<'a> {
    pub fn new(snapshot: &'a WalletSnapshot, translator: &'a dyn Translator) -> Self {
        Self {
            snapshot,
            translator,
            now: Utc::now(),
        }
    }

    pub fn with_now(self, now: DateTime<Utc>) -> Self {
        Self { now, ..self }
    }
}

fn slot_options(preference: &CurrencyPreference, prefix: Option<String>) -> DisplayOptions {
    DisplayOptions {
        prefix: prefix.or_else(|| preference.prefix.clone()),
        number_of_decimals: Some(preference.number_of_decimals),
        currency: preference.currency.clone(),
        ..Default::default()
    }
}

fn format_slot(
    source: &AmountSource,
    options: &DisplayOptions,
    snapshot: &WalletSnapshot,
) -> Result<String, ActivityError> {
    format_amount_for_display(source, options, snapshot).map(|(display, _)| display)
}

/// Derive the display record for `group`.
///
/// Classification runs first; the amount is then rendered once per display
/// slot with that slot's currency preference. The sign prefix goes on the
/// primary amount only.
pub fn derive_display_record(
    group: &TransactionGroup,
    context: &ActivityContext<'_>,
) -> Result<DisplayRecord, ActivityError> {
    let snapshot = context.snapshot;
    let method_data =
        snapshot.known_method_data(group.primary_transaction.tx_params.data.as_deref());

    let classification = classify(
        group,
        &snapshot.tokens,
        method_data,
        context.translator,
        context.now,
    )?;

    let overrides = PreferenceOverrides::default();
    let primary = resolve_currency_preference(DisplayRole::Primary, &overrides, snapshot);
    let secondary = resolve_currency_preference(DisplayRole::Secondary, &overrides, snapshot);

    let source = &classification.amount_source;
    let sign = Some(classification.prefix.clone()).filter(|prefix| !prefix.is_empty());
    let primary_currency = format_slot(source, &slot_options(&primary, sign), snapshot)?;
    let secondary_currency = if source.is_token() {
        None
    } else {
        Some(format_slot(source, &slot_options(&secondary, None), snapshot)?)
    };

    Ok(DisplayRecord {
        id: group.id(),
        category: classification.category,
        title: classification.title,
        subtitle: classification.subtitle,
        status: classification.status,
        primary_currency,
        secondary_currency,
        sender_address: classification.sender_address,
        recipient_address: classification.recipient_address,
    })
}

/// Derive a record for every group, in order. A group that cannot be
/// derived yields its error in place and does not affect the others.
pub fn derive_display_records(
    groups: &[TransactionGroup],
    context: &ActivityContext<'_>,
) -> Vec<Result<DisplayRecord, ActivityError>> {
    groups
        .iter()
        .map(|group| {
            derive_display_record(group, context).inspect_err(|error| {
                warn!("could not derive display data for transaction group {}: {error}", group.id());
            })
        })
        .collect()
}
