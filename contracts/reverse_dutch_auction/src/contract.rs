use auction_common::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PRICE_SCALE},
    validate,
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, Address, Env};

use crate::{
    auction::ReverseDutchAuctionTrait,
    controller,
    errors::ErrorCode,
    events::AuctionEvents,
    msg::{AuctionResponse, QuoteResponse},
    storage::{
        get_config,
        get_state,
        save_config,
        save_state,
        utils::{is_initialized, read_custody, set_initialized},
        AuctionState,
        Config,
        OverpaymentPolicy,
    },
};

contractmeta!(
    key = "Description",
    val = "Single-lot reverse Dutch auction with a linearly decaying price"
);

#[contract]
pub struct ReverseDutchAuction;

#[contractimpl]
impl ReverseDutchAuctionTrait for ReverseDutchAuction {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        seller: Address,
        asset: Address,
        payment_token: Address,
        initial_price: i128,
        duration: u64,
        decrease_rate: i128,
        price_scale: Option<i128>,
        overpayment_policy: OverpaymentPolicy,
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Auction: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        seller.require_auth();

        let price_scale = price_scale.unwrap_or(PRICE_SCALE);

        validate!(
            &env,
            duration > 0,
            ErrorCode::InvalidParameter,
            "Auction: Initialize: duration must be greater than zero"
        )?;
        validate!(
            &env,
            initial_price >= 0 && decrease_rate >= 0,
            ErrorCode::InvalidParameter,
            "Auction: Initialize: initial price and decrease rate must not be negative"
        )?;
        validate!(
            &env,
            price_scale > 0,
            ErrorCode::InvalidParameter,
            "Auction: Initialize: price scale must be positive"
        )?;

        set_initialized(&env);

        let config = Config {
            seller,
            asset,
            payment_token,
            initial_price,
            duration,
            decrease_rate,
            price_scale,
            overpayment_policy,
        };
        save_config(&env, &config);

        let state = AuctionState::new(env.ledger().timestamp());
        save_state(&env, &state);

        AuctionEvents::initialize(&env, &config, state.start_ts);

        Ok(())
    }

    fn withdraw(env: Env, sender: Address) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;
        let state = get_state(&env)?;

        controller::withdraw::withdraw(&env, &config, &state, &sender, env.ledger().timestamp())?;

        Ok(())
    }

    fn buy(env: Env, buyer: Address, amount: i128, payment: i128) -> Result<(), ErrorCode> {
        buyer.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;

        controller::purchase::buy(
            &env,
            &config,
            &mut state,
            &buyer,
            amount,
            payment,
            env.ledger().timestamp(),
        )?;

        Ok(())
    }

    fn current_price(env: Env) -> Result<i128, ErrorCode> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;

        state.current_price(&env, &config, env.ledger().timestamp())
    }

    fn quote(env: Env, amount: i128) -> Result<QuoteResponse, ErrorCode> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;

        let (price, cost) = state.quote(&env, &config, amount, env.ledger().timestamp())?;

        Ok(QuoteResponse { price, cost })
    }

    fn is_expired(env: Env) -> Result<bool, ErrorCode> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;

        Ok(state.is_expired(&config, env.ledger().timestamp()))
    }

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env)
    }

    fn query_state(env: Env) -> Result<AuctionState, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_state(&env)
    }

    fn query_custody(env: Env) -> Result<i128, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;

        Ok(read_custody(&env, &config.asset))
    }

    fn query_auction(env: Env) -> Result<AuctionResponse, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;
        let state = get_state(&env)?;
        let now = env.ledger().timestamp();

        Ok(AuctionResponse {
            current_price: state.current_price(&env, &config, now)?,
            custody: read_custody(&env, &config.asset),
            expiry_ts: state.expiry_ts(&config),
            expired: state.is_expired(&config, now),
            config,
            state,
        })
    }
}
