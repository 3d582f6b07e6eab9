use auction_common::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    math::auction::{
        calculate_expiry_ts,
        calculate_linear_decay_price,
        calculate_purchase_cost_with_scale,
        is_auction_expired,
    },
};
use soroban_sdk::{contracttype, log, Address, Env};

use crate::errors::ErrorCode;

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    State,
    Initialized,
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OverpaymentPolicy {
    /// The whole payment offered by the buyer goes to the seller
    ForwardToSeller,
    /// Only the quoted cost is collected, the excess stays with the buyer
    RefundExcess,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Receives the proceeds and reclaims unsold inventory
    pub seller: Address,
    /// Token being sold, held by the auction contract
    pub asset: Address,
    /// Token the buyer pays with (native XLM asset contract in production)
    pub payment_token: Address,
    /// precision = price_scale
    pub initial_price: i128,
    /// Seconds until the price reaches zero
    pub duration: u64,
    /// Price decrease per second, precision = price_scale
    pub decrease_rate: i128,
    pub price_scale: i128,
    pub overpayment_policy: OverpaymentPolicy,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Result<Config, ErrorCode> {
    let config = env.storage().persistent().get(&DataKey::Config).ok_or_else(|| {
        log!(env, "Auction: Config not set");
        ErrorCode::NotInitialized
    })?;

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(config)
}

// ################################################################
//                             State
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub start_ts: u64,
    pub buyer: Option<Address>,
    /// true iff `buyer` is set
    pub ended: bool,
}

impl AuctionState {
    pub fn new(start_ts: u64) -> Self {
        AuctionState {
            start_ts,
            buyer: None,
            ended: false,
        }
    }

    pub fn settle(&mut self, buyer: Address) {
        self.buyer = Some(buyer);
        self.ended = true;
    }

    pub fn current_price(&self, env: &Env, config: &Config, now: u64) -> Result<i128, ErrorCode> {
        Ok(calculate_linear_decay_price(
            env,
            config.initial_price,
            config.decrease_rate,
            self.start_ts,
            config.duration,
            now,
        )?)
    }

    /// Returns `(price, cost)` for `amount` units at `now`.
    pub fn quote(
        &self,
        env: &Env,
        config: &Config,
        amount: i128,
        now: u64,
    ) -> Result<(i128, i128), ErrorCode> {
        let price = self.current_price(env, config, now)?;
        let cost = calculate_purchase_cost_with_scale(env, amount, price, config.price_scale)?;

        Ok((price, cost))
    }

    pub fn expiry_ts(&self, config: &Config) -> u64 {
        calculate_expiry_ts(self.start_ts, config.duration)
    }

    pub fn is_expired(&self, config: &Config, now: u64) -> bool {
        is_auction_expired(self.start_ts, config.duration, now)
    }
}

pub fn save_state(env: &Env, state: &AuctionState) {
    env.storage().persistent().set(&DataKey::State, state);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::State, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_state(env: &Env) -> Result<AuctionState, ErrorCode> {
    let state = env.storage().persistent().get(&DataKey::State).ok_or_else(|| {
        log!(env, "Auction: State not set");
        ErrorCode::NotInitialized
    })?;

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::State, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(state)
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use auction_common::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
    use soroban_sdk::token;

    use super::*;

    pub fn transfer_tokens(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
        if amount == 0 {
            return;
        }
        let token_client = token::Client::new(env, token);
        token_client.transfer(from, to, &amount);
    }

    /// Quantity of `asset` held by the auction contract.
    pub fn read_custody(env: &Env, asset: &Address) -> i128 {
        token::Client::new(env, asset).balance(&env.current_contract_address())
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
