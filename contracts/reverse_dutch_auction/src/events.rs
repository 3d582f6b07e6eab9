use soroban_sdk::{Address, Env, Symbol};

use crate::storage::Config;

pub struct AuctionEvents {}

impl AuctionEvents {
    /// Emitted when the auction is created
    ///
    /// - topics - `["initialize", seller: Address]`
    /// - data - `[asset: Address, payment_token: Address, initial_price: i128, duration: u64, decrease_rate: i128, start_ts: u64]`
    pub fn initialize(env: &Env, config: &Config, start_ts: u64) {
        let topics = (Symbol::new(env, "initialize"), config.seller.clone());
        env.events().publish(
            topics,
            (
                config.asset.clone(),
                config.payment_token.clone(),
                config.initial_price,
                config.duration,
                config.decrease_rate,
                start_ts,
            ),
        );
    }

    /// Emitted when the asset is bought
    ///
    /// - topics - `["purchased", buyer: Address]`
    /// - data - `[amount: i128, price: i128, cost: i128, paid: i128]`
    pub fn purchased(env: &Env, buyer: Address, amount: i128, price: i128, cost: i128, paid: i128) {
        let topics = (Symbol::new(env, "purchased"), buyer);
        env.events().publish(topics, (amount, price, cost, paid));
    }

    /// Emitted when the seller reclaims the asset left in custody
    ///
    /// - topics - `["withdrawn", seller: Address]`
    /// - data - `amount: i128`
    pub fn withdrawn(env: &Env, seller: Address, amount: i128) {
        let topics = (Symbol::new(env, "withdrawn"), seller);
        env.events().publish(topics, amount);
    }
}
