//! public api for deriving what the wallet's activity view shows
//!
//! every function in here is a pure derivation over a
//! [`WalletSnapshot`](crate::models::state::WalletSnapshot) supplied by the
//! caller, except for the pending-transaction workflows, which request their
//! effects through a caller-supplied dispatcher.
pub mod activity;
pub mod export;
pub mod pending_actions;
pub mod permissions;
pub mod preferences;
