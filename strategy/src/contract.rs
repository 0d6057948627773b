#![allow(clippy::too_many_arguments)]

use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};

use crate::constants::PERFORMANCE_FEE;
use crate::types::HarvestReport;
use crate::{storage, strategy};

#[contract]
pub struct StrategyContract;

#[contractclient(name = "StrategyClient")]
pub trait Strategy {
    /// (Admin only) Bind the strategy to its vault
    ///
    /// The strategy is deployed before the vault, so the vault is attached
    /// afterwards. This can only happen once.
    ///
    /// ### Arguments
    /// * `vault` - The vault address
    ///
    /// ### Panics
    /// If the caller is not the admin
    /// or a vault is already bound (`AlreadyBound`)
    fn set_vault(e: Env, vault: Address);

    /// Returns the bound vault, `None` before `set_vault`
    fn vault(e: Env) -> Option<Address>;

    /// Returns the admin allowed to bind the vault
    fn admin(e: Env) -> Address;

    fn want(e: Env) -> Address;

    fn native(e: Env) -> Address;

    fn reward1(e: Env) -> Address;

    fn reward2(e: Env) -> Address;

    /// Returns the receipt for staked want (the gauge)
    fn lp_receipt(e: Env) -> Address;

    fn pool(e: Env) -> Address;

    fn gauge(e: Env) -> Address;

    fn minter(e: Env) -> Address;

    fn fee_recipient(e: Env) -> Address;

    /// Returns the performance fee in SCALAR_7
    fn performance_fee(e: Env) -> i128;

    /// Returns the ledger timestamp of the last harvest, 0 if never harvested
    fn last_harvest(e: Env) -> u64;

    /// Stakes all idle want in the gauge (permissionless)
    ///
    /// # Returns
    /// Amount of want staked by this call
    fn deposit(e: Env) -> i128;

    /// (Vault only) Sends up to `amount` want to the vault
    ///
    /// Idle want is used first, the remainder is unstaked from the gauge.
    ///
    /// # Arguments
    /// * `caller` - The vault (must authorize)
    /// * `amount` - Amount of want requested (must be > 0)
    ///
    /// # Returns
    /// Amount of want sent to the vault
    ///
    /// # Panics
    /// - `Unauthorized` if `caller` is not the bound vault
    /// - `ZeroAmount` if amount <= 0
    fn withdraw(e: Env, caller: Address, amount: i128) -> i128;

    /// Returns want held idle by the strategy
    fn balance_of_want(e: Env) -> i128;

    /// Returns want staked in the gauge
    fn balance_of_gauge(e: Env) -> i128;

    /// Returns all want managed by the strategy (idle + staked)
    fn balance_of(e: Env) -> i128;

    /// Claims rewards, charges the performance fee and compounds the rest (permissionless)
    ///
    /// Safe to call with nothing accrued.
    ///
    /// # Returns
    /// What was claimed, charged and compounded
    fn harvest(e: Env) -> HarvestReport;
}

#[contractimpl]
impl StrategyContract {
    /// Constructor for initializing the contract when deployed
    ///
    /// ### Arguments
    /// * `admin` - Address allowed to bind the vault
    /// * `pool` - AMM pool whose lp token is want
    /// * `reward1_pool` - `[native, reward1]` swap pool
    /// * `reward2_pool` - `[native, reward2]` swap pool
    /// * `gauge` - Gauge staking want
    /// * `minter` - Minter paying reward1 for gauge stakes
    /// * `fee_recipient` - Receiver of the performance fee
    ///
    /// ### Panics
    /// `InvalidConfig` if the collaborators disagree on their tokens
    pub fn __constructor(
        e: Env,
        admin: Address,
        pool: Address,
        reward1_pool: Address,
        reward2_pool: Address,
        gauge: Address,
        minter: Address,
        fee_recipient: Address,
    ) {
        strategy::execute_initialize(
            &e,
            &admin,
            &pool,
            &reward1_pool,
            &reward2_pool,
            &gauge,
            &minter,
            &fee_recipient,
        );
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Strategy for StrategyContract {
    fn set_vault(e: Env, vault: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        strategy::execute_set_vault(&e, &vault);
    }

    fn vault(e: Env) -> Option<Address> {
        storage::extend_instance(&e);
        storage::get_vault(&e)
    }

    fn admin(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_admin(&e)
    }

    fn want(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_config(&e).want
    }

    fn native(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_config(&e).native
    }

    fn reward1(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_config(&e).reward1
    }

    fn reward2(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_config(&e).reward2
    }

    fn lp_receipt(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_config(&e).lp_receipt
    }

    fn pool(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_config(&e).pool
    }

    fn gauge(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_config(&e).gauge
    }

    fn minter(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_config(&e).minter
    }

    fn fee_recipient(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_config(&e).fee_recipient
    }

    fn performance_fee(_e: Env) -> i128 {
        PERFORMANCE_FEE
    }

    fn last_harvest(e: Env) -> u64 {
        storage::extend_instance(&e);
        storage::get_last_harvest(&e)
    }

    fn deposit(e: Env) -> i128 {
        storage::extend_instance(&e);
        strategy::execute_deposit(&e)
    }

    fn withdraw(e: Env, caller: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        caller.require_auth();

        strategy::execute_withdraw(&e, &caller, amount)
    }

    fn balance_of_want(e: Env) -> i128 {
        storage::extend_instance(&e);
        strategy::balance_of_want(&e, &storage::get_config(&e))
    }

    fn balance_of_gauge(e: Env) -> i128 {
        storage::extend_instance(&e);
        strategy::balance_of_gauge(&e, &storage::get_config(&e))
    }

    fn balance_of(e: Env) -> i128 {
        storage::extend_instance(&e);
        let config = storage::get_config(&e);
        strategy::balance_of_want(&e, &config) + strategy::balance_of_gauge(&e, &config)
    }

    fn harvest(e: Env) -> HarvestReport {
        storage::extend_instance(&e);
        strategy::execute_harvest(&e)
    }
}
