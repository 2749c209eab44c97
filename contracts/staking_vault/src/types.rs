use soroban_sdk::{contracttype, Address};

/// Fixed-point scale for curve parameters and the conversion price
/// (six decimal places).
pub const PARAM_SCALE: i128 = 1_000_000;

/// Fixed-point scale for annualized interest rates (five decimal places).
pub const RATE_SCALE: i128 = 100_000;

/// Interest pro-rates over a 365-day year regardless of term length.
pub const DAYS_PER_YEAR: u32 = 365;

// ─── Rate curve ────────────────────────────────────────────────────────────

/// Coefficients of the duration → annualized-rate curve.
///
/// `tilt`, `butterfly` and `constant` are PARAM_SCALE fixed-point decimals;
/// `shift` is a plain integer coefficient.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    pub shift: u32,
    pub tilt: i128,
    pub butterfly: i128,
    pub constant: i128,
}

// ─── Vault configuration ───────────────────────────────────────────────────

/// Singleton vault configuration. Mutable only through admin entrypoints;
/// rates already locked into positions are unaffected by later changes.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Config {
    /// Token users deposit and stake.
    pub base_token: Address,
    /// Token interest is paid in.
    pub reward_token: Address,
    /// Gates deposit and stake; withdrawals and claims stay open.
    pub active: bool,
    /// Base-asset value → reward-asset conversion, PARAM_SCALE fixed point.
    pub price: i128,
    pub curve: CurveParams,
}

// ─── Position state ────────────────────────────────────────────────────────

/// A single time-locked stake earning a fixed rate for a fixed term.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Position {
    pub id: u64,
    pub owner: Address,
    /// Staked base-asset amount. Immutable after creation.
    pub principal: i128,
    /// Lock term in days. Immutable after creation.
    pub duration_days: u32,
    /// Annualized rate in RATE_SCALE units, locked at creation from the
    /// curve parameters in force at that moment.
    pub interest_rate: i128,
    /// Days of the term recognized so far. Monotone, clamped to
    /// `duration_days`. Advanced only by the externally driven tick.
    pub elapsed_days: u32,
    /// Cumulative reward-asset amount already paid out. Monotone.
    pub claimed_amount: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Singleton `Config`.
    Config,
    /// Un-staked deposited funds per account, base-asset units.
    Balance(Address),
    /// Reward-asset pool claims are paid from, funded by NODEPOSIT top-ups.
    Reserve,
    /// Position row by id.
    Position(u64),
    /// Next position id. Ids are never reused.
    NextPositionId,
    /// Open position ids per owner.
    OwnerPositions(Address),
}
