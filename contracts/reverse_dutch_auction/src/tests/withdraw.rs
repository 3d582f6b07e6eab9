extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation},
    Address,
    IntoVal,
    Symbol,
};

use super::setup::{AuctionTest, DURATION, FUNDED_AMOUNT, SCALE};
use crate::errors::ErrorCode;

#[test]
fn withdraw_after_expiry() {
    let test = AuctionTest::setup();
    test.jump_to(DURATION + 1);

    test.auction.withdraw(&test.seller);

    test.assert_last_event(
        (Symbol::new(&test.env, "withdrawn"), test.seller.clone()),
        FUNDED_AMOUNT.into_val(&test.env),
    );

    assert_eq!(test.asset.balance(&test.seller), FUNDED_AMOUNT);
    assert_eq!(test.auction.query_custody(), 0);
    assert!(!test.auction.query_state().ended);
}

#[test]
fn withdraw_at_exact_expiry() {
    let test = AuctionTest::setup();
    test.jump_to(DURATION);

    test.auction.withdraw(&test.seller);

    assert_eq!(test.asset.balance(&test.seller), FUNDED_AMOUNT);
}

#[test]
fn withdraw_requires_seller_auth() {
    let test = AuctionTest::setup();
    test.jump_to(DURATION + 1);

    test.auction.withdraw(&test.seller);

    assert_eq!(
        test.env.auths(),
        [(
            test.seller.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    test.auction.address.clone(),
                    Symbol::new(&test.env, "withdraw"),
                    (&test.seller,).into_val(&test.env),
                )),
                sub_invocations: std::vec![],
            },
        ),]
    );
}

#[test]
fn withdraw_before_expiry_should_fail() {
    let test = AuctionTest::setup();
    test.jump_to(30);

    assert_eq!(test.auction.try_withdraw(&test.seller), Err(Ok(ErrorCode::NotExpired)));

    assert_eq!(test.asset.balance(&test.seller), 0);
    assert_eq!(test.auction.query_custody(), FUNDED_AMOUNT);
}

#[test]
fn withdraw_by_other_should_fail() {
    let test = AuctionTest::setup();
    let other = Address::generate(&test.env);

    // expiry is checked before the caller
    test.jump_to(30);
    assert_eq!(test.auction.try_withdraw(&other), Err(Ok(ErrorCode::NotExpired)));

    test.jump_to(DURATION + 1);
    assert_eq!(test.auction.try_withdraw(&other), Err(Ok(ErrorCode::Unauthorized)));
    assert_eq!(test.auction.try_withdraw(&test.buyer), Err(Ok(ErrorCode::Unauthorized)));

    assert_eq!(test.asset.balance(&other), 0);
    assert_eq!(test.auction.query_custody(), FUNDED_AMOUNT);
}

#[test]
fn second_withdraw_moves_nothing() {
    let test = AuctionTest::setup();
    test.jump_to(DURATION + 1);

    test.auction.withdraw(&test.seller);
    test.auction.withdraw(&test.seller);

    test.assert_last_event(
        (Symbol::new(&test.env, "withdrawn"), test.seller.clone()),
        0_i128.into_val(&test.env),
    );
    assert_eq!(test.asset.balance(&test.seller), FUNDED_AMOUNT);
}

#[test]
fn withdraw_remainder_after_partial_buy() {
    let test = AuctionTest::setup();
    test.jump_to(30);

    let cost = test.auction.quote(&SCALE).cost;
    test.fund(&test.buyer, cost);
    test.auction.buy(&test.buyer, &SCALE, &cost);

    test.jump_to(DURATION + 1);
    test.auction.withdraw(&test.seller);

    assert_eq!(test.asset.balance(&test.seller), FUNDED_AMOUNT - SCALE);
    assert_eq!(test.asset.balance(&test.buyer), SCALE);
    assert_eq!(test.auction.query_custody(), 0);
    assert_eq!(test.auction.query_state().buyer, Some(test.buyer.clone()));
}

#[test]
fn withdraw_picks_up_late_deposits() {
    let test = AuctionTest::setup();
    test.jump_to(DURATION + 1);

    test.auction.withdraw(&test.seller);

    test.asset_admin.mint(&test.auction.address, &(5 * SCALE));
    test.auction.withdraw(&test.seller);

    assert_eq!(test.asset.balance(&test.seller), FUNDED_AMOUNT + 5 * SCALE);
}
