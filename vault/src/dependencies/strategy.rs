use soroban_sdk::{contractclient, Address, Env};

/// Strategy client interface - the subset of the strategy the vault drives
#[contractclient(name = "Client")]
pub trait StrategyInterface {
    /// Returns the address of the asset the strategy farms
    fn want(e: Env) -> Address;

    /// Stakes every unit of want the strategy holds, returns the amount staked
    fn deposit(e: Env) -> i128;

    /// Sends up to `amount` want back to the vault, returns the amount sent
    fn withdraw(e: Env, caller: Address, amount: i128) -> i128;

    /// Total want managed by the strategy (staked + idle)
    fn balance_of(e: Env) -> i128;
}
