use soroban_sdk::{contractclient, Address, Env};

/// Emissions minter paying the primary gauge reward
#[contractclient(name = "Client")]
pub trait MinterInterface {
    /// Returns the token the minter emits
    fn token(e: Env) -> Address;

    /// Pays `user` everything accrued by its stake in `gauge` since the last mint
    ///
    /// Returns the amount paid.
    fn mint(e: Env, user: Address, gauge: Address) -> i128;
}
