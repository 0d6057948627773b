use soroban_sdk::{Address, Env, Symbol};

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when want is deposited into the vault
    ///
    /// - topics - `["deposit"]`
    /// - data - `[from: Address, amount: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * from - The address that deposited and received the minted shares
    /// * amount - The amount of want credited to the vault
    /// * shares - The amount of shares minted
    pub fn deposit(e: &Env, from: Address, amount: i128, shares: i128) {
        let topics = (Symbol::new(e, "deposit"),);
        e.events().publish(topics, (from, amount, shares));
    }

    /// Emitted when shares are redeemed for want
    ///
    /// - topics - `["withdraw"]`
    /// - data - `[from: Address, shares: i128, amount: i128]`
    ///
    /// ### Arguments
    /// * from - The address whose shares were burned
    /// * shares - The amount of shares burned
    /// * amount - The amount of want sent to `from`
    pub fn withdraw(e: &Env, from: Address, shares: i128, amount: i128) {
        let topics = (Symbol::new(e, "withdraw"),);
        e.events().publish(topics, (from, shares, amount));
    }

    /// Emitted when idle want is pushed to the strategy
    ///
    /// - topics - `["earn"]`
    /// - data - `[strategy: Address, amount: i128]`
    pub fn earn(e: &Env, strategy: Address, amount: i128) {
        let topics = (Symbol::new(e, "earn"),);
        e.events().publish(topics, (strategy, amount));
    }

    /// Emitted when shares move between holders
    ///
    /// - topics - `["transfer", from: Address, to: Address]`
    /// - data - `shares: i128`
    pub fn transfer(e: &Env, from: Address, to: Address, shares: i128) {
        let topics = (Symbol::new(e, "transfer"), from, to);
        e.events().publish(topics, shares);
    }
}
