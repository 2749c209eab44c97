//! Custodial Staking Vault
//!
//! Users deposit a base asset, open time-locked positions against their
//! deposited balance, accrue interest at a rate fixed at stake time by a
//! configurable duration curve, and claim accrued interest in a reward asset
//! paid from a reserve funded by out-of-band top-ups.
//!
//! ## Key design decisions
//!
//! - **Exact integer math**: rates, parameters and prices are fixed-point
//!   `i128`; every arithmetic step is checked and rounding rules are fixed,
//!   so outcomes are bit-for-bit reproducible.
//! - **Rates lock at creation**: a position's rate is computed once from the
//!   curve parameters in force at stake time and never recomputed.
//! - **Explicit time**: an admin-driven `advance` tick moves a position's
//!   elapsed days instead of the ledger clock, keeping accrual deterministic
//!   and independently testable.
//! - **Checks-Effects-Interactions**: storage is updated *before* token
//!   transfers.
//! - **Conservation**: principal only ever moves between the balance ledger
//!   and the position table; claims touch only the reward reserve.

#![no_std]

mod errors;
mod events;
mod math;
mod rate;
mod types;

use errors::*;
use math::{add_i128, sub_i128};
use rate::{annual_rate, entitlement};
use types::{DataKey, PARAM_SCALE};

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, String, Vec};

pub use types::{Config, CurveParams, Position};




#[cfg(test)]
mod test_stake;




#[cfg(test)]
mod test_unstake;



// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED));
    if stored != *caller {
        panic!("{}", ERR_UNAUTHORIZED);
    }
}

fn read_config(e: &Env) -> Config {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn write_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
}

fn read_balance(e: &Env, account: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

fn write_balance(e: &Env, account: &Address, funds: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::Balance(account.clone()), &funds);
}

fn read_reserve(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Reserve).unwrap_or(0)
}

fn write_reserve(e: &Env, reserve: i128) {
    e.storage().instance().set(&DataKey::Reserve, &reserve);
}

fn read_position(e: &Env, id: u64) -> Position {
    e.storage()
        .persistent()
        .get(&DataKey::Position(id))
        .unwrap_or_else(|| panic!("{}", ERR_POSITION_NOT_FOUND))
}

fn write_position(e: &Env, position: &Position) {
    e.storage()
        .persistent()
        .set(&DataKey::Position(position.id), position);
}

fn owner_positions(e: &Env, owner: &Address) -> Vec<u64> {
    e.storage()
        .persistent()
        .get(&DataKey::OwnerPositions(owner.clone()))
        .unwrap_or_else(|| Vec::new(e))
}

fn next_position_id(e: &Env) -> u64 {
    let id: u64 = e
        .storage()
        .instance()
        .get(&DataKey::NextPositionId)
        .unwrap_or(0);
    let next = id
        .checked_add(1)
        .unwrap_or_else(|| panic!("{}", ERR_POSITION_ID_OVERFLOW));
    e.storage().instance().set(&DataKey::NextPositionId, &next);
    id
}

/// Pays out whatever interest `position` has accrued beyond what was already
/// claimed, at the current price. Updates the position row, the reserve and
/// performs the reward-token transfer. Returns the amount paid (0 when the
/// increment is not positive; callers decide whether that is an error).
fn settle_claim(e: &Env, position: &mut Position) -> i128 {
    let config = read_config(e);

    let entitled = entitlement(
        position.principal,
        position.interest_rate,
        position.elapsed_days,
        config.price,
    );
    let payable = entitled - position.claimed_amount;
    if payable <= 0 {
        return 0;
    }

    let reserve = read_reserve(e);
    if reserve < payable {
        panic!("{}", ERR_RESERVE_EXHAUSTED);
    }

    // CEI: record state before the transfer.
    position.claimed_amount = entitled;
    write_position(e, position);
    write_reserve(e, reserve - payable);

    let contract = e.current_contract_address();
    TokenClient::new(e, &config.reward_token).transfer(&contract, &position.owner, &payable);

    events::emit_claimed(e, &position.owner, position.id, payable, entitled);
    payable
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct StakingVault;

#[contractimpl]
impl StakingVault {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. Stores `admin` and a default configuration:
    /// inactive, unit price, zeroed curve. Panics if called again.
    pub fn initialize(e: Env, admin: Address, base_token: Address, reward_token: Address) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        write_config(
            &e,
            &Config {
                base_token,
                reward_token,
                active: false,
                price: PARAM_SCALE,
                curve: CurveParams {
                    shift: 0,
                    tilt: 0,
                    butterfly: 0,
                    constant: 0,
                },
            },
        );
    }

    /// Overwrite the rate-curve coefficients. Snapshot semantics: only
    /// positions created afterwards are priced with the new curve.
    pub fn set_curve_params(
        e: Env,
        admin: Address,
        shift: u32,
        tilt: i128,
        butterfly: i128,
        constant: i128,
    ) {
        require_admin(&e, &admin);
        let mut config = read_config(&e);
        config.curve = CurveParams {
            shift,
            tilt,
            butterfly,
            constant,
        };
        write_config(&e, &config);
        events::emit_curve_set(&e, shift, tilt, butterfly, constant);
    }

    /// Set the base-value → reward-asset conversion factor (PARAM_SCALE
    /// fixed point) used when valuing claim payouts.
    pub fn set_price(e: Env, admin: Address, price: i128) {
        require_admin(&e, &admin);
        let mut config = read_config(&e);
        config.price = price;
        write_config(&e, &config);
        events::emit_price_set(&e, price);
    }

    /// Gate deposits and stakes. Claims and withdrawals are never gated.
    pub fn set_active(e: Env, admin: Address, active: bool) {
        require_admin(&e, &admin);
        let mut config = read_config(&e);
        config.active = active;
        write_config(&e, &config);
        events::emit_active_set(&e, active);
    }

    // ── Deposits ───────────────────────────────────────────────────────────

    /// Inbound transfer surface. Pulls tokens from `from` (requires prior
    /// approval) and routes them by `note`:
    ///
    /// - `"NODEPOSIT"`: a reward-reserve top-up in the reward asset. Credited
    ///   to the reserve, not to any account's balance. Accepted even while
    ///   the vault is inactive.
    /// - anything else: a user deposit in the base asset; requires the vault
    ///   to be active and credits the account's un-staked balance.
    pub fn deposit(e: Env, from: Address, amount: i128, note: String) {
        from.require_auth();

        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }

        let config = read_config(&e);
        let contract = e.current_contract_address();

        if note == String::from_str(&e, "NODEPOSIT") {
            TokenClient::new(&e, &config.reward_token)
                .transfer_from(&contract, &from, &contract, &amount);
            let new_reserve = add_i128(read_reserve(&e), amount, ERR_RESERVE_OVERFLOW);
            write_reserve(&e, new_reserve);
            events::emit_reserve_funded(&e, &from, amount, new_reserve);
            return;
        }

        if !config.active {
            panic!("{}", ERR_VAULT_INACTIVE);
        }

        TokenClient::new(&e, &config.base_token)
            .transfer_from(&contract, &from, &contract, &amount);
        let new_balance = add_i128(read_balance(&e, &from), amount, ERR_BALANCE_OVERFLOW);
        write_balance(&e, &from, new_balance);
        events::emit_deposit(&e, &from, amount, new_balance);
    }

    // ── Position lifecycle ─────────────────────────────────────────────────

    /// Lock `amount` of un-staked balance for `duration_days`, at the rate
    /// the current curve assigns to that term. Returns the new position id.
    pub fn stake(e: Env, owner: Address, amount: i128, duration_days: u32) -> u64 {
        owner.require_auth();

        let config = read_config(&e);
        if !config.active {
            panic!("{}", ERR_VAULT_INACTIVE);
        }
        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        if duration_days == 0 {
            panic!("{}", ERR_INVALID_DURATION);
        }

        let funds = read_balance(&e, &owner);
        if funds < amount {
            panic!("{}", ERR_INSUFFICIENT_FUNDS);
        }
        write_balance(&e, &owner, sub_i128(funds, amount, ERR_INSUFFICIENT_FUNDS));

        let rate = annual_rate(duration_days, &config.curve);
        let id = next_position_id(&e);
        let position = Position {
            id,
            owner: owner.clone(),
            principal: amount,
            duration_days,
            interest_rate: rate,
            elapsed_days: 0,
            claimed_amount: 0,
        };
        write_position(&e, &position);

        let mut ids = owner_positions(&e, &owner);
        ids.push_back(id);
        e.storage()
            .persistent()
            .set(&DataKey::OwnerPositions(owner.clone()), &ids);

        events::emit_staked(&e, &owner, id, amount, duration_days, rate);
        id
    }

    /// Externally driven time tick (admin only). Adds `days` to the
    /// position's elapsed counter, clamped to its term. Never pays out.
    pub fn advance(e: Env, admin: Address, position_id: u64, days: u32) {
        require_admin(&e, &admin);

        let mut position = read_position(&e, position_id);
        position.elapsed_days = position
            .elapsed_days
            .saturating_add(days)
            .min(position.duration_days);
        write_position(&e, &position);

        events::emit_advanced(&e, position_id, position.elapsed_days);
    }

    /// Pay the interest accrued since the last claim, in the reward asset.
    ///
    /// Entitlement is `principal * rate * elapsed_days / 365`, valued at the
    /// current price; what was already claimed is subtracted. Panics when
    /// the increment is zero or the reserve cannot cover it.
    pub fn claim(e: Env, position_id: u64) -> i128 {
        let mut position = read_position(&e, position_id);
        position.owner.require_auth();

        let paid = settle_claim(&e, &mut position);
        if paid == 0 {
            panic!("{}", ERR_NOTHING_TO_CLAIM);
        }
        paid
    }

    /// Claim across all of `owner`'s open positions. Positions with nothing
    /// accrued are skipped. Returns the total paid (0 when none accrued).
    pub fn claim_all(e: Env, owner: Address) -> i128 {
        owner.require_auth();

        let mut total: i128 = 0;
        for id in owner_positions(&e, &owner).iter() {
            let mut position = read_position(&e, id);
            total = add_i128(total, settle_claim(&e, &mut position), ERR_ENTITLEMENT_OVERFLOW);
        }
        total
    }

    /// Close a matured position: pay any residual interest, release the
    /// principal back to the owner's un-staked balance and delete the row.
    pub fn unstake(e: Env, position_id: u64) {
        let mut position = read_position(&e, position_id);
        position.owner.require_auth();

        if position.elapsed_days < position.duration_days {
            panic!("{}", ERR_NOT_MATURED);
        }

        settle_claim(&e, &mut position);

        let owner = position.owner.clone();
        let new_balance = add_i128(
            read_balance(&e, &owner),
            position.principal,
            ERR_BALANCE_OVERFLOW,
        );
        write_balance(&e, &owner, new_balance);

        e.storage()
            .persistent()
            .remove(&DataKey::Position(position_id));
        let mut ids = owner_positions(&e, &owner);
        if let Some(index) = ids.first_index_of(position_id) {
            ids.remove(index);
        }
        e.storage()
            .persistent()
            .set(&DataKey::OwnerPositions(owner.clone()), &ids);

        events::emit_unstaked(&e, &owner, position_id, position.principal);
    }

    // ── Withdrawals ────────────────────────────────────────────────────────

    /// Withdraw the entire un-staked balance back to `owner` in the base
    /// asset. Returns the amount sent; a zero balance is a no-op returning 0.
    /// Open positions are untouched.
    pub fn withdraw_all(e: Env, owner: Address) -> i128 {
        owner.require_auth();

        let funds = read_balance(&e, &owner);
        if funds == 0 {
            return 0;
        }
        write_balance(&e, &owner, 0);

        let config = read_config(&e);
        let contract = e.current_contract_address();
        TokenClient::new(&e, &config.base_token).transfer(&contract, &owner, &funds);

        events::emit_withdrawn(&e, &owner, funds);
        funds
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Current configuration snapshot.
    pub fn get_config(e: Env) -> Config {
        read_config(&e)
    }

    /// Un-staked balance of `account` (0 for accounts never seen).
    pub fn get_balance(e: Env, account: Address) -> i128 {
        read_balance(&e, &account)
    }

    /// Current reward-reserve total.
    pub fn get_reserve(e: Env) -> i128 {
        read_reserve(&e)
    }

    /// Position row by id. Panics if the id is unknown or already unstaked.
    pub fn get_position(e: Env, position_id: u64) -> Position {
        read_position(&e, position_id)
    }

    /// Ids of `owner`'s open positions, in creation order.
    pub fn get_owner_positions(e: Env, owner: Address) -> Vec<u64> {
        owner_positions(&e, &owner)
    }

    /// Number of position ids ever allocated (ids are never reused).
    pub fn position_count(e: Env) -> u64 {
        e.storage()
            .instance()
            .get(&DataKey::NextPositionId)
            .unwrap_or(0)
    }

    /// Sum of open-position principal for `owner`, base-asset units.
    pub fn get_staked_balance(e: Env, owner: Address) -> i128 {
        let mut staked: i128 = 0;
        for id in owner_positions(&e, &owner).iter() {
            let position = read_position(&e, id);
            staked = add_i128(staked, position.principal, ERR_BALANCE_OVERFLOW);
        }
        staked
    }
}
