use soroban_sdk::{contractclient, Address, Env, Vec};

/// AMM pool used both as the want source and for reward swaps
#[contractclient(name = "Client")]
pub trait PoolInterface {
    /// Returns the token at index `i`
    fn coins(e: Env, i: u32) -> Address;

    /// Returns the pool's liquidity token
    fn lp_token(e: Env) -> Address;

    /// Swaps `dx` of coin `i` for coin `j`, pulling `dx` from `user` by allowance
    ///
    /// Returns the amount of coin `j` sent to `user`. Panics if it is below `min_dy`.
    fn exchange(e: Env, user: Address, i: u32, j: u32, dx: i128, min_dy: i128) -> i128;

    /// Deposits `amounts` (one entry per coin) and mints lp tokens to `user`
    ///
    /// Returns the lp tokens minted. Panics if it is below `min_mint_amount`.
    fn add_liquidity(e: Env, user: Address, amounts: Vec<i128>, min_mint_amount: i128) -> i128;
}
