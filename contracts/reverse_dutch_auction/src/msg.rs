use soroban_sdk::contracttype;

use crate::storage::{AuctionState, Config};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionResponse {
    pub config: Config,
    pub state: AuctionState,
    pub current_price: i128,
    /// Asset quantity still held by the auction
    pub custody: i128,
    pub expiry_ts: u64,
    pub expired: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuoteResponse {
    pub price: i128,
    pub cost: i128,
}
