//! Display data for the activity list: what each transaction group is
//! called, how its amounts read, and what state it is in.
//!
//! The entry point is [`derive_display_record`], a pure function of a
//! transaction group and an [`ActivityContext`]. Callers that re-render often
//! can hold a [`DisplayRecordCache`].

pub mod cache;
pub mod classifier;
pub mod currency_display;
pub mod display_data;
pub mod error;

pub use cache::DisplayRecordCache;
pub use classifier::classify;
pub use classifier::Classification;
pub use classifier::DisplayCategory;
pub use currency_display::format_amount_for_display;
pub use currency_display::AmountSource;
pub use currency_display::DisplayOptions;
pub use display_data::derive_display_record;
pub use display_data::derive_display_records;
pub use display_data::ActivityContext;
pub use display_data::DisplayRecord;
pub use error::ActivityError;
