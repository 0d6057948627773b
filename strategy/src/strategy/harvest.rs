use soroban_sdk::{token::TokenClient, vec, Address, Env};

use crate::dependencies::{GaugeClient, MinterClient, PoolClient};
use crate::events::StrategyEvents;
use crate::storage;
use crate::strategy::fees::split_performance_fee;
use crate::strategy::venue::{balance_of_gauge, execute_deposit};
use crate::types::{HarvestReport, StrategyConfig};

/// Claim, convert, charge the performance fee and compound
///
/// 1. mint reward1 through the minter and claim reward2 from the gauge
/// 2. swap both rewards into native
/// 3. send the performance fee share of native to the fee recipient
/// 4. turn the remaining native into want through the pool
/// 5. stake all idle want
///
/// Every step tolerates a zero balance, so harvesting with nothing accrued
/// succeeds and only re-stakes idle want.
pub fn execute_harvest(e: &Env) -> HarvestReport {
    let config = storage::get_config(e);
    let strategy = e.current_contract_address();

    MinterClient::new(e, &config.minter).mint(&strategy, &config.gauge);
    GaugeClient::new(e, &config.gauge).claim_rewards(&strategy);

    let reward1 = TokenClient::new(e, &config.reward1).balance(&strategy);
    let reward2 = TokenClient::new(e, &config.reward2).balance(&strategy);
    swap_to_native(e, &config.reward1_pool, &config.reward1, reward1);
    swap_to_native(e, &config.reward2_pool, &config.reward2, reward2);

    let native_client = TokenClient::new(e, &config.native);
    let native = native_client.balance(&strategy);
    let (fee, remaining) = split_performance_fee(e, native);
    if fee > 0 {
        native_client.transfer(&strategy, &config.fee_recipient, &fee);
        StrategyEvents::charge_fees(e, config.fee_recipient.clone(), fee);
    }

    let want = add_liquidity(e, &config, remaining);
    execute_deposit(e);

    storage::set_last_harvest(e, e.ledger().timestamp());
    StrategyEvents::harvest(e, fee, want, balance_of_gauge(e, &config));

    HarvestReport {
        reward1,
        reward2,
        native,
        fee,
        want,
    }
}

/// Swap `amount` of a reward through its `[native, reward]` pool
fn swap_to_native(e: &Env, reward_pool: &Address, reward: &Address, amount: i128) -> i128 {
    if amount <= 0 {
        return 0;
    }
    let strategy = e.current_contract_address();
    TokenClient::new(e, reward).approve(&strategy, reward_pool, &amount, &(e.ledger().sequence() + 1));
    PoolClient::new(e, reward_pool).exchange(&strategy, &1, &0, &amount, &0)
}

/// Provide `amount` native as single-sided liquidity, returns the want minted
fn add_liquidity(e: &Env, config: &StrategyConfig, amount: i128) -> i128 {
    if amount <= 0 {
        return 0;
    }
    let strategy = e.current_contract_address();
    TokenClient::new(e, &config.native).approve(&strategy, &config.pool, &amount, &(e.ledger().sequence() + 1));

    let mut amounts = vec![e, 0i128, 0i128];
    amounts.set(config.native_index, amount);
    PoolClient::new(e, &config.pool).add_liquidity(&strategy, &amounts, &0)
}
