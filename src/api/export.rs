//! provides common types used in the crate's public API
//!
//! They are exported here in one location for convenience.

pub use crate::api::activity::derive_display_record;
pub use crate::api::activity::derive_display_records;
pub use crate::api::activity::format_amount_for_display;
pub use crate::api::activity::ActivityContext;
pub use crate::api::activity::ActivityError;
pub use crate::api::activity::AmountSource;
pub use crate::api::activity::DisplayCategory;
pub use crate::api::activity::DisplayOptions;
pub use crate::api::activity::DisplayRecord;
pub use crate::api::activity::DisplayRecordCache;
pub use crate::api::pending_actions::ActivityDispatcher;
pub use crate::api::pending_actions::CancelTransaction;
pub use crate::api::pending_actions::GasEstimator;
pub use crate::api::pending_actions::PendingActionError;
pub use crate::api::pending_actions::RetryTransaction;
pub use crate::api::permissions::ConnectedDomain;
pub use crate::api::permissions::DomainInfo;
pub use crate::api::preferences::resolve_currency_preference;
pub use crate::api::preferences::CurrencyPreference;
pub use crate::api::preferences::DisplayRole;
pub use crate::api::preferences::PreferenceOverrides;
pub use crate::config_models::cli_args::Args;
pub use crate::config_models::cli_args::OutputFormat;
pub use crate::i18n::LocaleMessages;
pub use crate::i18n::Translator;
pub use crate::models::currency::ConversionError;
pub use crate::models::currency::CurrencyConversion;
pub use crate::models::currency::CurrencyDisplayParts;
pub use crate::models::currency::Denomination;
pub use crate::models::state::Token;
pub use crate::models::state::WalletSnapshot;
pub use crate::models::transaction::DisplayStatus;
pub use crate::models::transaction::Transaction;
pub use crate::models::transaction::TransactionCategory;
pub use crate::models::transaction::TransactionGroup;
pub use crate::models::transaction::TransactionStatus;
