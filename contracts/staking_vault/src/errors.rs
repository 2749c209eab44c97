/// All panic messages used by the staking_vault contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_UNAUTHORIZED: &str = "unauthorized";
pub const ERR_VAULT_INACTIVE: &str = "vault is not active";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_INVALID_DURATION: &str = "duration must be positive";
pub const ERR_INSUFFICIENT_FUNDS: &str = "insufficient unstaked funds";
pub const ERR_POSITION_NOT_FOUND: &str = "position not found";
pub const ERR_NOTHING_TO_CLAIM: &str = "nothing to claim";
pub const ERR_RESERVE_EXHAUSTED: &str = "reward reserve exhausted";
pub const ERR_NOT_MATURED: &str = "position has not reached maturity";
pub const ERR_BALANCE_OVERFLOW: &str = "balance overflow";
pub const ERR_RESERVE_OVERFLOW: &str = "reserve overflow";
pub const ERR_RATE_OVERFLOW: &str = "rate computation overflow";
pub const ERR_ENTITLEMENT_OVERFLOW: &str = "entitlement computation overflow";
pub const ERR_POSITION_ID_OVERFLOW: &str = "position id counter overflow";
