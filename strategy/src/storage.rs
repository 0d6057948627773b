use soroban_sdk::{Address, Env, Symbol, unwrap::UnwrapOptimized};

use crate::types::StrategyConfig;

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

/********** Storage Types **********/

const ADMIN_KEY: &str = "Admin";
const CONFIG_KEY: &str = "Config";
const VAULT_KEY: &str = "Vault";
const LAST_HARVEST_KEY: &str = "LastHarvest";

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/********** Admin **********/

/// Fetch the address allowed to bind the vault
pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

/// Set the admin address
///
/// ### Arguments
/// * `admin` - The new admin address
pub fn set_admin(e: &Env, admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), admin);
}

/********** Config **********/

/// Fetch the venue configuration
pub fn get_config(e: &Env) -> StrategyConfig {
    e.storage()
        .instance()
        .get(&Symbol::new(e, CONFIG_KEY))
        .unwrap_optimized()
}

/// Set the venue configuration
///
/// ### Arguments
/// * `config` - The resolved venue configuration
pub fn set_config(e: &Env, config: &StrategyConfig) {
    e.storage()
        .instance()
        .set::<Symbol, StrategyConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/********** Vault **********/

/// Fetch the bound vault, if any
pub fn get_vault(e: &Env) -> Option<Address> {
    e.storage().instance().get(&Symbol::new(e, VAULT_KEY))
}

/// Bind the vault
///
/// ### Arguments
/// * `vault` - The vault address
pub fn set_vault(e: &Env, vault: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, VAULT_KEY), vault);
}

/********** Harvest **********/

/// Fetch the timestamp of the last harvest, 0 if never harvested
pub fn get_last_harvest(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, LAST_HARVEST_KEY))
        .unwrap_or(0)
}

pub fn set_last_harvest(e: &Env, timestamp: u64) {
    e.storage()
        .instance()
        .set::<Symbol, u64>(&Symbol::new(e, LAST_HARVEST_KEY), &timestamp);
}
