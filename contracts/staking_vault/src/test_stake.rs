//! Stake-operation tests.

#![cfg(test)]

use crate::test_helpers::*;
use soroban_sdk::Env;

#[test]
fn test_stake_success() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.deposit(&s.user, &1_000_000_000_i128, &memo(&e));

    let id = s.client.stake(&s.user, &1_000_000_i128, &3650_u32);

    let position = s.client.get_position(&id);
    assert_eq!(position.owner, s.user);
    assert_eq!(position.principal, 1_000_000);
    assert_eq!(position.duration_days, 3650);
    assert_eq!(position.interest_rate, 14_800);
    assert_eq!(position.elapsed_days, 0);
    assert_eq!(position.claimed_amount, 0);
}

#[test]
fn test_stake_debits_unstaked_balance() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.deposit(&s.user, &1_000_000_000_i128, &memo(&e));

    s.client.stake(&s.user, &1_000_000_i128, &365_u32);

    assert_eq!(s.client.get_balance(&s.user), 999_000_000);
    assert_eq!(s.client.get_staked_balance(&s.user), 1_000_000);
}

#[test]
fn test_stake_ids_are_sequential_and_never_reused() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.deposit(&s.user, &1_000_000_i128, &memo(&e));

    let a = s.client.stake(&s.user, &100_i128, &91_u32);
    let b = s.client.stake(&s.user, &100_i128, &183_u32);
    assert_eq!(a, 0);
    assert_eq!(b, 1);
    assert_eq!(s.client.position_count(), 2);

    // Closing a position does not free its id for reuse.
    s.client.advance(&s.admin, &a, &91_u32);
    s.client.unstake(&a);
    let c = s.client.stake(&s.user, &100_i128, &365_u32);
    assert_eq!(c, 2);
}

#[test]
fn test_stake_full_balance() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.deposit(&s.user, &5_000_i128, &memo(&e));
    s.client.stake(&s.user, &5_000_i128, &365_u32);
    assert_eq!(s.client.get_balance(&s.user), 0);
}

#[test]
fn test_owner_position_index() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.deposit(&s.user, &10_000_i128, &memo(&e));

    let a = s.client.stake(&s.user, &1_000_i128, &91_u32);
    let b = s.client.stake(&s.user, &1_000_i128, &183_u32);

    let ids = s.client.get_owner_positions(&s.user);
    assert_eq!(ids.len(), 2);
    assert_eq!(ids.get(0), Some(a));
    assert_eq!(ids.get(1), Some(b));
}

// ── Error paths ──────────────────────────────────────────────────────

#[test]
#[should_panic(expected = "vault is not active")]
fn test_stake_while_inactive_panics() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.deposit(&s.user, &1_000_i128, &memo(&e));
    s.client.set_active(&s.admin, &false);
    s.client.stake(&s.user, &1_000_i128, &365_u32);
}

#[test]
#[should_panic(expected = "amount must be positive")]
fn test_stake_zero_amount_panics() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.stake(&s.user, &0_i128, &365_u32);
}

#[test]
#[should_panic(expected = "duration must be positive")]
fn test_stake_zero_duration_panics() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.deposit(&s.user, &1_000_i128, &memo(&e));
    s.client.stake(&s.user, &1_000_i128, &0_u32);
}

#[test]
#[should_panic(expected = "insufficient unstaked funds")]
fn test_stake_more_than_balance_panics() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.deposit(&s.user, &1_000_i128, &memo(&e));
    s.client.stake(&s.user, &1_001_i128, &365_u32);
}

#[test]
#[should_panic(expected = "insufficient unstaked funds")]
fn test_stake_without_deposit_panics() {
    let e = Env::default();
    let s = setup_active(&e);
    s.client.stake(&s.user, &1_i128, &365_u32);
}
