use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use wallet_activity::models::state::WalletSnapshot;
use wallet_activity::models::transaction::TransactionGroup;

pub const SELECTED_ADDRESS: &str = "0x9eca64466f257793eaa52fcfff5066894b76a149";
pub const OTHER_ADDRESS: &str = "0xc42edfcc21ed14dda456aa0756c153f7985d8813";

const WALLET_STATE: &str = include_str!("../fixtures/wallet_state.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub snapshot: WalletSnapshot,
    pub transaction_groups: Vec<TransactionGroup>,
}

/// A wallet with one group of each kind, plus a transfer of a token the
/// wallet does not know.
pub fn wallet_state() -> WalletState {
    serde_json::from_str(WALLET_STATE).expect("fixture is valid")
}

/// A few weeks after the fixture's transactions, in the same year.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap()
}
