use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a user deposit credits the balance ledger.
///
/// # Topics
/// * `Symbol` - "deposit"
/// * `Address` - The depositing account
///
/// # Data
/// * `i128` - The amount deposited
/// * `i128` - The account's new un-staked balance
pub fn emit_deposit(e: &Env, from: &Address, amount: i128, new_balance: i128) {
    let topics = (Symbol::new(e, "deposit"), from.clone());
    e.events().publish(topics, (amount, new_balance));
}

/// Emitted when a NODEPOSIT transfer tops up the reward reserve.
///
/// # Topics
/// * `Symbol` - "reserve_funded"
/// * `Address` - The funding account
///
/// # Data
/// * `i128` - The amount added
/// * `i128` - The new reserve total
pub fn emit_reserve_funded(e: &Env, from: &Address, amount: i128, new_reserve: i128) {
    let topics = (Symbol::new(e, "reserve_funded"), from.clone());
    e.events().publish(topics, (amount, new_reserve));
}

/// Emitted when a new position is opened.
///
/// # Topics
/// * `Symbol` - "staked"
/// * `Address` - The position owner
///
/// # Data
/// * `u64` - Position id
/// * `i128` - Principal locked
/// * `u32` - Term in days
/// * `i128` - Locked-in annualized rate (RATE_SCALE units)
pub fn emit_staked(
    e: &Env,
    owner: &Address,
    id: u64,
    principal: i128,
    duration_days: u32,
    rate: i128,
) {
    let topics = (Symbol::new(e, "staked"), owner.clone());
    e.events().publish(topics, (id, principal, duration_days, rate));
}

/// Emitted when the externally driven tick advances a position.
pub fn emit_advanced(e: &Env, id: u64, elapsed_days: u32) {
    e.events()
        .publish((Symbol::new(e, "advanced"), id), elapsed_days);
}

/// Emitted when accrued interest is paid out.
///
/// # Data
/// * `u64` - Position id
/// * `i128` - Amount paid in this claim
/// * `i128` - Cumulative amount claimed on the position
pub fn emit_claimed(e: &Env, owner: &Address, id: u64, payout: i128, claimed_total: i128) {
    let topics = (Symbol::new(e, "claimed"), owner.clone());
    e.events().publish(topics, (id, payout, claimed_total));
}

/// Emitted when a matured position is closed and its principal released.
pub fn emit_unstaked(e: &Env, owner: &Address, id: u64, principal: i128) {
    let topics = (Symbol::new(e, "unstaked"), owner.clone());
    e.events().publish(topics, (id, principal));
}

/// Emitted when an account withdraws its un-staked balance.
pub fn emit_withdrawn(e: &Env, owner: &Address, amount: i128) {
    e.events()
        .publish((Symbol::new(e, "withdrawn"), owner.clone()), amount);
}

/// Emitted when the admin overwrites the curve parameters.
pub fn emit_curve_set(e: &Env, shift: u32, tilt: i128, butterfly: i128, constant: i128) {
    e.events().publish(
        (Symbol::new(e, "curve_set"),),
        (shift, tilt, butterfly, constant),
    );
}

/// Emitted when the admin sets the reward conversion price.
pub fn emit_price_set(e: &Env, price: i128) {
    e.events().publish((Symbol::new(e, "price_set"),), price);
}

/// Emitted when the admin flips the activation flag.
pub fn emit_active_set(e: &Env, active: bool) {
    e.events().publish((Symbol::new(e, "active_set"),), active);
}
