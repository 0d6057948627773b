use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};

use crate::dependencies::GaugeClient;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::types::StrategyConfig;

/// Want staked in the gauge on behalf of the strategy
pub fn balance_of_gauge(e: &Env, config: &StrategyConfig) -> i128 {
    GaugeClient::new(e, &config.gauge).balance(&e.current_contract_address())
}

/// Want held idle by the strategy
pub fn balance_of_want(e: &Env, config: &StrategyConfig) -> i128 {
    TokenClient::new(e, &config.want).balance(&e.current_contract_address())
}

/// Stake all idle want in the gauge
///
/// Returns the amount staked, 0 when there was nothing to stake.
pub fn execute_deposit(e: &Env) -> i128 {
    let config = storage::get_config(e);
    let strategy = e.current_contract_address();

    let idle = balance_of_want(e, &config);
    if idle <= 0 {
        return 0;
    }

    // Gauge pulls the want by allowance
    TokenClient::new(e, &config.want).approve(
        &strategy,
        &config.gauge,
        &idle,
        &(e.ledger().sequence() + 1),
    );
    GaugeClient::new(e, &config.gauge).deposit(&strategy, &idle);

    StrategyEvents::deposit(e, idle, balance_of_gauge(e, &config));
    idle
}

/// Send up to `amount` want to the vault, unstaking whatever idle want can't cover
///
/// Returns the amount sent.
///
/// ### Panics
/// * `Unauthorized` if `caller` is not the bound vault
/// * `ZeroAmount` if `amount` <= 0
pub fn execute_withdraw(e: &Env, caller: &Address, amount: i128) -> i128 {
    match storage::get_vault(e) {
        Some(vault) if vault == *caller => {}
        _ => panic_with_error!(e, StrategyError::Unauthorized),
    }
    if amount <= 0 {
        panic_with_error!(e, StrategyError::ZeroAmount);
    }

    let config = storage::get_config(e);
    let strategy = e.current_contract_address();
    let want_client = TokenClient::new(e, &config.want);

    let idle = want_client.balance(&strategy);
    if idle < amount {
        let staked = balance_of_gauge(e, &config);
        let unstake = (amount - idle).min(staked);
        if unstake > 0 {
            GaugeClient::new(e, &config.gauge).withdraw(&strategy, &unstake);
        }
    }

    let sent = amount.min(want_client.balance(&strategy));
    if sent > 0 {
        want_client.transfer(&strategy, caller, &sent);
    }

    StrategyEvents::withdraw(e, caller.clone(), sent, balance_of_gauge(e, &config));
    sent
}
