//! Unstake (position close-out at maturity) tests.

#![cfg(test)]

use crate::test_helpers::*;
use soroban_sdk::token::TokenClient;
use soroban_sdk::Env;

fn matured_setup(e: &Env) -> (Setup<'_>, u64) {
    let s = setup_active(e);
    s.client.deposit(&s.user, &1_000_000_i128, &memo(e));
    let id = s.client.stake(&s.user, &400_000_i128, &365_u32);
    s.client.advance(&s.admin, &id, &365_u32);
    (s, id)
}

#[test]
fn test_unstake_releases_principal_to_balance() {
    let e = Env::default();
    let (s, id) = matured_setup(&e);

    s.client.unstake(&id);

    assert_eq!(s.client.get_balance(&s.user), 1_000_000);
    assert_eq!(s.client.get_staked_balance(&s.user), 0);
    assert_eq!(s.client.get_owner_positions(&s.user).len(), 0);
}

#[test]
fn test_unstake_pays_residual_interest_first() {
    let e = Env::default();
    let (s, id) = matured_setup(&e);

    // Full-year interest at rate 0.03100 on 400_000.
    let expected_interest = 400_000_i128 * 3_100 / 100_000;

    s.client.unstake(&id);

    let reward = TokenClient::new(&e, &s.reward_token);
    assert_eq!(reward.balance(&s.user), expected_interest);
    assert_eq!(s.client.get_reserve(), DEFAULT_RESERVE - expected_interest);
}

#[test]
fn test_unstake_after_full_claim_pays_nothing_more() {
    let e = Env::default();
    let (s, id) = matured_setup(&e);

    let paid = s.client.claim(&id);
    s.client.unstake(&id);

    let reward = TokenClient::new(&e, &s.reward_token);
    assert_eq!(reward.balance(&s.user), paid);
    assert_eq!(s.client.get_balance(&s.user), 1_000_000);
}

#[test]
#[should_panic(expected = "position not found")]
fn test_unstake_removes_the_position_row() {
    let e = Env::default();
    let (s, id) = matured_setup(&e);
    s.client.unstake(&id);
    s.client.get_position(&id);
}

#[test]
#[should_panic(expected = "position has not reached maturity")]
fn test_unstake_before_maturity_panics() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.deposit(&s.user, &1_000_i128, &memo(&e));
    let id = s.client.stake(&s.user, &1_000_i128, &365_u32);
    s.client.advance(&s.admin, &id, &364_u32);
    s.client.unstake(&id);
}

#[test]
#[should_panic(expected = "position not found")]
fn test_unstake_twice_panics() {
    let e = Env::default();
    let (s, id) = matured_setup(&e);
    s.client.unstake(&id);
    s.client.unstake(&id);
}

#[test]
fn test_unstaked_principal_is_withdrawable() {
    let e = Env::default();
    let (s, id) = matured_setup(&e);
    s.client.unstake(&id);

    assert_eq!(s.client.withdraw_all(&s.user), 1_000_000);
    let base = TokenClient::new(&e, &s.base_token);
    assert_eq!(base.balance(&s.user), DEFAULT_MINT);
}
