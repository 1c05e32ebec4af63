pub mod currency;
pub mod permissions;
pub mod state;
pub mod transaction;
