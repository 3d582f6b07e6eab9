use auction_common::validate;
use soroban_sdk::{log, Address, Env};

use crate::{
    errors::ErrorCode,
    events::AuctionEvents,
    storage::{
        utils::{read_custody, transfer_tokens},
        AuctionState,
        Config,
    },
};

/// Sends everything left in custody back to the seller once the auction expired.
///
/// Does not look at `ended`: whatever a partial buy left behind is reclaimable.
/// An empty custody is not an error, the call moves nothing and still emits the event.
pub fn withdraw(
    env: &Env,
    config: &Config,
    state: &AuctionState,
    sender: &Address,
    now: u64,
) -> Result<i128, ErrorCode> {
    validate!(
        env,
        state.is_expired(config, now),
        ErrorCode::NotExpired,
        "Auction: Withdraw: auction has not expired yet"
    )?;

    validate!(
        env,
        *sender == config.seller,
        ErrorCode::Unauthorized,
        "Auction: Withdraw: only seller can withdraw"
    )?;

    let custody = read_custody(env, &config.asset);

    transfer_tokens(env, &config.asset, &env.current_contract_address(), &config.seller, custody);

    AuctionEvents::withdrawn(env, config.seller.clone(), custody);

    Ok(custody)
}
