use soroban_sdk::{Address, Env};

use crate::{
    errors::ErrorCode,
    msg::{AuctionResponse, QuoteResponse},
    storage::{AuctionState, Config, OverpaymentPolicy},
};

pub trait ReverseDutchAuctionTrait {
    // ################################################################
    //                             SELLER
    // ################################################################

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
    ) -> Result<(), ErrorCode>;

    fn withdraw(env: Env, sender: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             BUYER
    // ################################################################

    fn buy(env: Env, buyer: Address, amount: i128, payment: i128) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn current_price(env: Env) -> Result<i128, ErrorCode>;

    fn quote(env: Env, amount: i128) -> Result<QuoteResponse, ErrorCode>;

    fn is_expired(env: Env) -> Result<bool, ErrorCode>;

    fn query_config(env: Env) -> Result<Config, ErrorCode>;

    fn query_state(env: Env) -> Result<AuctionState, ErrorCode>;

    fn query_custody(env: Env) -> Result<i128, ErrorCode>;

    fn query_auction(env: Env) -> Result<AuctionResponse, ErrorCode>;
}
