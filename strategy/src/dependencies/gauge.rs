use soroban_sdk::{contractclient, Address, Env};

/// Liquidity gauge the strategy stakes want into
#[contractclient(name = "Client")]
pub trait GaugeInterface {
    /// Returns the token the gauge accepts for staking
    fn lp_token(e: Env) -> Address;

    /// Stakes `amount` of the lp token on behalf of `user`
    ///
    /// Pulls the tokens with `transfer_from`, so `user` must have approved the gauge.
    fn deposit(e: Env, user: Address, amount: i128);

    /// Unstakes `amount` and sends it back to `user`
    fn withdraw(e: Env, user: Address, amount: i128);

    /// Returns the amount staked by `user`
    fn balance(e: Env, user: Address) -> i128;

    /// Pays out every secondary reward accrued by `user`
    fn claim_rewards(e: Env, user: Address);
}
