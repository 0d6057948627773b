use soroban_sdk::{contracttype, Address, Env, String, Symbol, unwrap::UnwrapOptimized};

// Persistent storage keys
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    Shares(Address),               // Stores the holder's share balance as i128
}

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

// Instance storage key strings
const WANT: &str = "Want";
const STRATEGY: &str = "Strategy";
const NAME: &str = "Name";
const SYMBOL: &str = "Symbol";
const TOTAL_SHARES: &str = "TotalShares";
const LOCK_TIME: &str = "LockTime";

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_want(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, WANT)).unwrap_optimized()
}

pub fn set_want(e: &Env, want: &Address) {
    e.storage().instance().set(&Symbol::new(e, WANT), want);
}

pub fn get_strategy(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, STRATEGY)).unwrap_optimized()
}

pub fn set_strategy(e: &Env, strategy: &Address) {
    e.storage().instance().set(&Symbol::new(e, STRATEGY), strategy);
}

pub fn get_name(e: &Env) -> String {
    e.storage().instance().get(&Symbol::new(e, NAME)).unwrap_optimized()
}

pub fn set_name(e: &Env, name: &String) {
    e.storage().instance().set(&Symbol::new(e, NAME), name);
}

pub fn get_symbol(e: &Env) -> String {
    e.storage().instance().get(&Symbol::new(e, SYMBOL)).unwrap_optimized()
}

pub fn set_symbol(e: &Env, symbol: &String) {
    e.storage().instance().set(&Symbol::new(e, SYMBOL), symbol);
}

pub fn get_total_shares(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOTAL_SHARES))
        .unwrap_optimized()
}

pub fn set_total_shares(e: &Env, total_shares: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, TOTAL_SHARES), total_shares);
}

pub fn get_lock_time(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, LOCK_TIME))
        .unwrap_optimized()
}

pub fn set_lock_time(e: &Env, lock_time: &u64) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, LOCK_TIME), lock_time);
}

/// Fetch a holder's share balance, 0 if they never held shares
pub fn get_shares(e: &Env, holder: &Address) -> i128 {
    let key = DataKey::Shares(holder.clone());
    if let Some(shares) = e.storage().persistent().get::<DataKey, i128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
        shares
    } else {
        0
    }
}

pub fn set_shares(e: &Env, holder: &Address, shares: &i128) {
    let key = DataKey::Shares(holder.clone());
    e.storage().persistent().set(&key, shares);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}
