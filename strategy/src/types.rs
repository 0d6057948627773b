use soroban_sdk::{contracttype, Address};

/// Immutable venue wiring resolved at deployment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyConfig {
    pub want: Address,          // LP token of `pool`, staked in `gauge`
    pub native: Address,        // asset the performance fee is paid in
    pub reward1: Address,       // minted through `minter`
    pub reward2: Address,       // paid out by `gauge`
    pub lp_receipt: Address,    // receipt for staked want
    pub pool: Address,          // AMM turning native into want
    pub reward1_pool: Address,  // [native, reward1] swap pool
    pub reward2_pool: Address,  // [native, reward2] swap pool
    pub gauge: Address,
    pub minter: Address,
    pub fee_recipient: Address,
    pub native_index: u32,      // position of native in `pool` coins
}

/// Outcome of a single harvest
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvestReport {
    pub reward1: i128, // reward1 swapped into native
    pub reward2: i128, // reward2 swapped into native
    pub native: i128,  // native available before the fee
    pub fee: i128,     // native sent to the fee recipient
    pub want: i128,    // want produced from the remaining native
}
