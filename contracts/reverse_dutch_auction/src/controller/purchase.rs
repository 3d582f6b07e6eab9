use auction_common::validate;
use soroban_sdk::{log, Address, Env};

use crate::{
    errors::ErrorCode,
    events::AuctionEvents,
    storage::{save_state, utils::transfer_tokens, AuctionState, Config, OverpaymentPolicy},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Purchase {
    pub price: i128,
    pub cost: i128,
    /// Amount collected from the buyer and forwarded to the seller
    pub paid: i128,
}

/// Checks a buy against the auction without touching state.
///
/// Checks run in order and the first failure wins: already sold, expired,
/// payment below cost, negative amount.
pub fn validate_purchase(
    env: &Env,
    config: &Config,
    state: &AuctionState,
    amount: i128,
    payment: i128,
    now: u64,
) -> Result<Purchase, ErrorCode> {
    validate!(env, !state.ended, ErrorCode::AlreadySold, "Auction: Buy: auction already bought")?;

    validate!(
        env,
        !state.is_expired(config, now),
        ErrorCode::AuctionExpired,
        "Auction: Buy: auction has expired"
    )?;

    let (price, cost) = state.quote(env, config, amount, now)?;

    if payment < cost {
        log!(env, "Auction: Buy: payment {} is below the cost {}", payment, cost);
        return Err(ErrorCode::InsufficientPayment);
    }

    validate!(
        env,
        amount >= 0,
        ErrorCode::InvalidParameter,
        "Auction: Buy: amount must not be negative"
    )?;

    let paid = match config.overpayment_policy {
        OverpaymentPolicy::ForwardToSeller => payment,
        OverpaymentPolicy::RefundExcess => cost,
    };

    Ok(Purchase { price, cost, paid })
}

pub fn buy(
    env: &Env,
    config: &Config,
    state: &mut AuctionState,
    buyer: &Address,
    amount: i128,
    payment: i128,
    now: u64,
) -> Result<Purchase, ErrorCode> {
    let purchase = validate_purchase(env, config, state, amount, payment, now)?;

    // the auction is closed in storage before any token leaves or enters it
    state.settle(buyer.clone());
    save_state(env, state);

    transfer_tokens(env, &config.asset, &env.current_contract_address(), buyer, amount);
    transfer_tokens(env, &config.payment_token, buyer, &config.seller, purchase.paid);

    AuctionEvents::purchased(
        env,
        buyer.clone(),
        amount,
        purchase.price,
        purchase.cost,
        purchase.paid,
    );

    Ok(purchase)
}
