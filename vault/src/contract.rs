use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, token::TokenClient, Address, Env, String};

use crate::{
    dependencies::StrategyClient,
    errors::VaultError,
    events::VaultEvents,
    shares,
    storage,
};

#[contract]
pub struct VaultContract;

#[contractclient(name = "VaultClient")]
pub trait Vault {
    /// Returns the address of the want token managed by this vault
    ///
    /// This is the token users deposit and that the strategy farms.
    /// Share value is denominated in terms of this token.
    fn want(e: Env) -> Address;

    /// Returns the address of the strategy bound at deployment
    fn strategy(e: Env) -> Address;

    /// Returns the name of the vault's receipt shares
    fn name(e: Env) -> String;

    /// Returns the symbol of the vault's receipt shares
    fn symbol(e: Env) -> String;

    /// Returns the decimals of the vault's receipt shares (same as want)
    fn decimals(e: Env) -> u32;

    /// Returns the configured lock time in seconds
    ///
    /// The value is recorded at deployment and exposed for integrators. It does
    /// not gate withdrawals.
    fn lock_time(e: Env) -> u64;

    /// Returns the total number of shares in circulation
    fn total_shares(e: Env) -> i128;

    /// Returns the share balance of `holder`
    fn balance_of(e: Env, holder: Address) -> i128;

    /// Returns the total want managed by the vault
    ///
    /// Sum of the want sitting idle in the vault and everything the strategy
    /// reports (staked in the gauge plus idle in the strategy).
    fn balance(e: Env) -> i128;

    /// Returns the want sitting idle in the vault
    fn available(e: Env) -> i128;

    /// Returns the value of one whole share in want, in SCALAR_7
    ///
    /// An empty vault reports 1:1.
    fn price_per_share(e: Env) -> i128;

    /// Deposits want and mints shares to `from`
    ///
    /// Pulls `amount` want from `from` using the allowance granted to the vault,
    /// hands it to the strategy to be staked, and mints shares at the price
    /// observed before the deposit.
    ///
    /// # Arguments
    /// * `from` - Address depositing want and receiving shares (must authorize)
    /// * `amount` - Amount of want to deposit (must be > 0)
    ///
    /// # Returns
    /// Amount of shares minted to `from`
    ///
    /// # Panics
    /// - `ZeroAmount` if amount <= 0
    /// - `InsufficientFunds` if `from` lacks the balance or allowance
    /// - `ZeroShares` if the deposit is worth less than one share
    fn deposit(e: Env, from: Address, amount: i128) -> i128;

    /// Burns shares from `from` and sends the proportional want
    ///
    /// Owed want is `floor(shares * balance / total_shares)`. When the vault
    /// holds less than that idle, the shortfall is pulled from the strategy.
    ///
    /// # Arguments
    /// * `from` - Address redeeming shares (must authorize)
    /// * `shares` - Amount of shares to burn (must be > 0)
    ///
    /// # Returns
    /// Amount of want transferred to `from`
    ///
    /// # Panics
    /// - `ZeroAmount` if shares <= 0
    /// - `InsufficientShares` if `from` holds fewer than `shares`
    fn withdraw(e: Env, from: Address, shares: i128) -> i128;

    /// Burns every share held by `from`, see `withdraw`
    ///
    /// # Panics
    /// - `ZeroAmount` if `from` holds no shares
    fn withdraw_all(e: Env, from: Address) -> i128;

    /// Pushes idle vault want to the strategy and stakes it (permissionless)
    ///
    /// # Returns
    /// Amount of want forwarded to the strategy
    fn earn(e: Env) -> i128;

    /// Moves `shares` from `from` to `to`
    ///
    /// # Panics
    /// - `ZeroAmount` if shares <= 0
    /// - `InsufficientShares` if `from` holds fewer than `shares`
    fn transfer(e: Env, from: Address, to: Address, shares: i128);
}

#[contractimpl]
impl VaultContract {
    /// Initializes the vault against an already deployed strategy
    ///
    /// The strategy is fixed for the lifetime of the vault and the want token
    /// is read from it. The strategy still has to be bound to this vault with
    /// its own `set_vault` before withdrawals can be served.
    ///
    /// # Arguments
    /// * `strategy` - Address of the strategy contract
    /// * `name` - Name for the receipt shares
    /// * `symbol` - Symbol for the receipt shares
    /// * `lock_time` - Lock duration in seconds (recorded, not enforced)
    pub fn __constructor(e: Env, strategy: Address, name: String, symbol: String, lock_time: u64) {
        let want = StrategyClient::new(&e, &strategy).want();

        storage::set_want(&e, &want);
        storage::set_strategy(&e, &strategy);
        storage::set_name(&e, &name);
        storage::set_symbol(&e, &symbol);
        storage::set_lock_time(&e, &lock_time);
        storage::set_total_shares(&e, &0);

        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Vault for VaultContract {
    fn want(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_want(&e)
    }

    fn strategy(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_strategy(&e)
    }

    fn name(e: Env) -> String {
        storage::extend_instance(&e);
        storage::get_name(&e)
    }

    fn symbol(e: Env) -> String {
        storage::extend_instance(&e);
        storage::get_symbol(&e)
    }

    fn decimals(e: Env) -> u32 {
        storage::extend_instance(&e);
        TokenClient::new(&e, &storage::get_want(&e)).decimals()
    }

    fn lock_time(e: Env) -> u64 {
        storage::extend_instance(&e);
        storage::get_lock_time(&e)
    }

    fn total_shares(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_total_shares(&e)
    }

    fn balance_of(e: Env, holder: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_shares(&e, &holder)
    }

    fn balance(e: Env) -> i128 {
        storage::extend_instance(&e);
        total_balance(&e)
    }

    fn available(e: Env) -> i128 {
        storage::extend_instance(&e);
        idle_balance(&e)
    }

    fn price_per_share(e: Env) -> i128 {
        storage::extend_instance(&e);
        shares::price_per_share(&e, storage::get_total_shares(&e), total_balance(&e))
    }

    fn deposit(e: Env, from: Address, amount: i128) -> i128 {
        from.require_auth();
        if amount <= 0 {
            panic_with_error!(e, VaultError::ZeroAmount);
        }

        let vault_address = e.current_contract_address();
        let want_client = TokenClient::new(&e, &storage::get_want(&e));
        if want_client.balance(&from) < amount
            || want_client.allowance(&from, &vault_address) < amount
        {
            panic_with_error!(e, VaultError::InsufficientFunds);
        }

        // Price is fixed before any want moves
        let total_shares = storage::get_total_shares(&e);
        let pool = total_balance(&e);

        want_client.transfer_from(&vault_address, &from, &vault_address, &amount);
        execute_earn(&e);

        // Credit what actually reached the vault and strategy
        let received = total_balance(&e) - pool;
        let shares = shares::shares_for_deposit(&e, received, total_shares, pool);
        if shares <= 0 {
            panic_with_error!(e, VaultError::ZeroShares);
        }

        let held = storage::get_shares(&e, &from);
        storage::set_shares(&e, &from, &(held + shares));
        storage::set_total_shares(&e, &(total_shares + shares));

        VaultEvents::deposit(&e, from.clone(), received, shares);

        storage::extend_instance(&e);
        shares
    }

    fn withdraw(e: Env, from: Address, shares: i128) -> i128 {
        from.require_auth();
        let amount = execute_withdraw(&e, &from, shares);
        storage::extend_instance(&e);
        amount
    }

    fn withdraw_all(e: Env, from: Address) -> i128 {
        from.require_auth();
        let shares = storage::get_shares(&e, &from);
        let amount = execute_withdraw(&e, &from, shares);
        storage::extend_instance(&e);
        amount
    }

    fn earn(e: Env) -> i128 {
        let amount = execute_earn(&e);
        storage::extend_instance(&e);
        amount
    }

    fn transfer(e: Env, from: Address, to: Address, shares: i128) {
        from.require_auth();
        if shares <= 0 {
            panic_with_error!(e, VaultError::ZeroAmount);
        }

        let from_shares = storage::get_shares(&e, &from);
        if from_shares < shares {
            panic_with_error!(e, VaultError::InsufficientShares);
        }
        storage::set_shares(&e, &from, &(from_shares - shares));
        let to_shares = storage::get_shares(&e, &to);
        storage::set_shares(&e, &to, &(to_shares + shares));

        VaultEvents::transfer(&e, from, to, shares);
        storage::extend_instance(&e);
    }
}

fn idle_balance(e: &Env) -> i128 {
    TokenClient::new(e, &storage::get_want(e)).balance(&e.current_contract_address())
}

fn total_balance(e: &Env) -> i128 {
    let strategy = storage::get_strategy(e);
    idle_balance(e) + StrategyClient::new(e, &strategy).balance_of()
}

/// Forward all idle want to the strategy and have it staked
fn execute_earn(e: &Env) -> i128 {
    let idle = idle_balance(e);
    if idle <= 0 {
        return 0;
    }

    let strategy = storage::get_strategy(e);
    TokenClient::new(e, &storage::get_want(e)).transfer(&e.current_contract_address(), &strategy, &idle);
    StrategyClient::new(e, &strategy).deposit();

    VaultEvents::earn(e, strategy, idle);
    idle
}

fn execute_withdraw(e: &Env, from: &Address, shares: i128) -> i128 {
    if shares <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }

    let held = storage::get_shares(e, from);
    if held < shares {
        panic_with_error!(e, VaultError::InsufficientShares);
    }

    // owed = shares * (total want / total shares)
    let total_shares = storage::get_total_shares(e);
    let owed = shares::want_for_shares(e, shares, total_shares, total_balance(e));

    storage::set_shares(e, from, &(held - shares));
    storage::set_total_shares(e, &(total_shares - shares));

    let vault_address = e.current_contract_address();
    let want_client = TokenClient::new(e, &storage::get_want(e));
    let mut amount = owed;
    let idle = want_client.balance(&vault_address);
    if idle < owed {
        let strategy = storage::get_strategy(e);
        StrategyClient::new(e, &strategy).withdraw(&vault_address, &(owed - idle));

        // The venue may return slightly less than requested
        let idle_after = want_client.balance(&vault_address);
        if idle_after < owed {
            amount = idle_after;
        }
    }

    if amount > 0 {
        want_client.transfer(&vault_address, from, &amount);
    }

    VaultEvents::withdraw(e, from.clone(), shares, amount);
    amount
}
