use soroban_sdk::{Address, Env, Symbol};

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted once when the strategy is bound to its vault
    ///
    /// - topics - `["set_vault"]`
    /// - data - `vault: Address`
    pub fn set_vault(e: &Env, vault: Address) {
        let topics = (Symbol::new(e, "set_vault"),);
        e.events().publish(topics, vault);
    }

    /// Emitted when idle want is staked in the gauge
    ///
    /// - topics - `["deposit"]`
    /// - data - `[amount: i128, staked: i128]`
    ///
    /// ### Arguments
    /// * amount - The amount of want staked by this call
    /// * staked - The strategy's gauge balance afterwards
    pub fn deposit(e: &Env, amount: i128, staked: i128) {
        let topics = (Symbol::new(e, "deposit"),);
        e.events().publish(topics, (amount, staked));
    }

    /// Emitted when want is returned to the vault
    ///
    /// - topics - `["withdraw"]`
    /// - data - `[vault: Address, amount: i128, staked: i128]`
    ///
    /// ### Arguments
    /// * vault - The vault receiving the want
    /// * amount - The amount of want sent
    /// * staked - The strategy's gauge balance afterwards
    pub fn withdraw(e: &Env, vault: Address, amount: i128, staked: i128) {
        let topics = (Symbol::new(e, "withdraw"),);
        e.events().publish(topics, (vault, amount, staked));
    }

    /// Emitted after every harvest, including empty ones
    ///
    /// - topics - `["harvest"]`
    /// - data - `[fee: i128, want: i128, staked: i128]`
    ///
    /// ### Arguments
    /// * fee - The native paid to the fee recipient
    /// * want - The want compounded back into the gauge
    /// * staked - The strategy's gauge balance afterwards
    pub fn harvest(e: &Env, fee: i128, want: i128, staked: i128) {
        let topics = (Symbol::new(e, "harvest"),);
        e.events().publish(topics, (fee, want, staked));
    }

    /// Emitted when the performance fee is paid
    ///
    /// - topics - `["charge_fees", fee_recipient: Address]`
    /// - data - `fee: i128`
    pub fn charge_fees(e: &Env, fee_recipient: Address, fee: i128) {
        let topics = (Symbol::new(e, "charge_fees"), fee_recipient);
        e.events().publish(topics, fee);
    }
}
