#![allow(clippy::too_many_arguments)]

use soroban_sdk::{panic_with_error, Address, Env};

use crate::dependencies::{GaugeClient, MinterClient, PoolClient};
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::types::StrategyConfig;

/// Resolve the venue wiring from the deployed collaborators and store it
///
/// want is the LP token of `pool`, native and the two rewards are read from
/// the `[native, reward]` swap pools. Every collaborator must agree on the
/// tokens it handles.
///
/// ### Panics
/// * `InvalidConfig` if the collaborators disagree
pub fn execute_initialize(
    e: &Env,
    admin: &Address,
    pool: &Address,
    reward1_pool: &Address,
    reward2_pool: &Address,
    gauge: &Address,
    minter: &Address,
    fee_recipient: &Address,
) {
    let pool_client = PoolClient::new(e, pool);
    let want = pool_client.lp_token();
    if GaugeClient::new(e, gauge).lp_token() != want {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }

    let reward1_pool_client = PoolClient::new(e, reward1_pool);
    let native = reward1_pool_client.coins(&0);
    let reward1 = reward1_pool_client.coins(&1);
    if MinterClient::new(e, minter).token() != reward1 {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }

    let reward2_pool_client = PoolClient::new(e, reward2_pool);
    if reward2_pool_client.coins(&0) != native {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }
    let reward2 = reward2_pool_client.coins(&1);

    let native_index = if pool_client.coins(&0) == native {
        0
    } else if pool_client.coins(&1) == native {
        1
    } else {
        panic_with_error!(e, StrategyError::InvalidConfig);
    };

    storage::set_admin(e, admin);
    storage::set_config(
        e,
        &StrategyConfig {
            want,
            native,
            reward1,
            reward2,
            lp_receipt: gauge.clone(),
            pool: pool.clone(),
            reward1_pool: reward1_pool.clone(),
            reward2_pool: reward2_pool.clone(),
            gauge: gauge.clone(),
            minter: minter.clone(),
            fee_recipient: fee_recipient.clone(),
            native_index,
        },
    );
}

/// Bind the strategy to its vault. Only the first call succeeds.
///
/// ### Panics
/// * `AlreadyBound` if a vault is already set
pub fn execute_set_vault(e: &Env, vault: &Address) {
    if storage::get_vault(e).is_some() {
        panic_with_error!(e, StrategyError::AlreadyBound);
    }
    storage::set_vault(e, vault);
    StrategyEvents::set_vault(e, vault.clone());
}
