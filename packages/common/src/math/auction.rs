use soroban_sdk::{log, Env};

use crate::{
    constants::PRICE_SCALE,
    error::{ErrorCode, NormalResult},
};

use super::{bn::U256, casting::Cast, safe_math::SafeMath};

/// Price of a linearly decaying auction at `now`.
///
/// The price starts at `initial_price`, drops by `decrease_rate` per second and is
/// floored at zero. Once `duration` seconds have elapsed the price is zero.
pub fn calculate_linear_decay_price(
    env: &Env,
    initial_price: i128,
    decrease_rate: i128,
    start_ts: u64,
    duration: u64,
    now: u64,
) -> NormalResult<i128> {
    let elapsed = now.saturating_sub(start_ts);

    if elapsed >= duration {
        return Ok(0);
    }

    // A product that does not fit in i128 is larger than any initial price.
    let price_delta = match decrease_rate.checked_mul(elapsed.cast::<i128>(env)?) {
        Some(delta) => delta,
        None => return Ok(0),
    };

    Ok(initial_price.safe_sub(price_delta, env)?.max(0))
}

/// Cost of `amount` units at `price`, truncated to the fixed-point unit.
pub fn calculate_purchase_cost(env: &Env, amount: i128, price: i128) -> NormalResult<i128> {
    calculate_purchase_cost_with_scale(env, amount, price, PRICE_SCALE)
}

pub fn calculate_purchase_cost_with_scale(
    env: &Env,
    amount: i128,
    price: i128,
    price_scale: i128,
) -> NormalResult<i128> {
    if price_scale <= 0 {
        log!(env, "Math error: price scale must be positive, got {}", price_scale);
        return Err(ErrorCode::MathError);
    }

    if amount <= 0 || price <= 0 {
        return Ok(0);
    }

    let cost = U256::from(amount.cast::<u128>(env)?)
        .safe_mul(U256::from(price.cast::<u128>(env)?), env)?
        .safe_div(U256::from(price_scale.cast::<u128>(env)?), env)?;

    cost.try_to_u128()?.cast::<i128>(env)
}

/// Timestamp from which the auction no longer accepts purchases.
///
/// Saturates at `u64::MAX`: an expiry past the end of the ledger clock is never reached.
pub fn calculate_expiry_ts(start_ts: u64, duration: u64) -> u64 {
    start_ts.saturating_add(duration)
}

pub fn is_auction_expired(start_ts: u64, duration: u64, now: u64) -> bool {
    now >= calculate_expiry_ts(start_ts, duration)
}
