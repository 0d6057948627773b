use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Symbol};
use strategy::dependencies::GaugeInterface;

use crate::SCALAR_7;

const LP_TOKEN: &str = "LpToken";
const REWARD_TOKEN: &str = "RewardToken";
const RATES: &str = "Rates";

#[derive(Clone)]
#[contracttype]
enum MockGaugeDataKey {
    Balance(Address),
    Checkpoint(Address),
    Integrated(Address),
    Claimable(Address),
}

fn get_i128(e: &Env, key: &MockGaugeDataKey) -> i128 {
    e.storage().persistent().get(key).unwrap_or(0)
}

fn set_i128(e: &Env, key: &MockGaugeDataKey, value: i128) {
    e.storage().persistent().set(key, &value);
}

/// Accrue rewards for `user` since its last checkpoint
///
/// Both rewards accrue as `balance * rate * elapsed / SCALAR_7`. The primary
/// reward is only tracked here and paid out by the minter, the secondary one
/// is paid by `claim_rewards` from the gauge's own balance.
fn checkpoint(e: &Env, user: &Address) {
    let now = e.ledger().timestamp();
    let last: u64 = e
        .storage()
        .persistent()
        .get(&MockGaugeDataKey::Checkpoint(user.clone()))
        .unwrap_or(now);
    let balance = get_i128(e, &MockGaugeDataKey::Balance(user.clone()));

    if now > last && balance > 0 {
        let (reward1_rate, reward2_rate): (i128, i128) = e
            .storage()
            .instance()
            .get(&Symbol::new(e, RATES))
            .unwrap();
        let elapsed = (now - last) as i128;

        let integrated_key = MockGaugeDataKey::Integrated(user.clone());
        let integrated = get_i128(e, &integrated_key);
        let accrued1 = balance.fixed_mul_floor(e, &(reward1_rate * elapsed), &SCALAR_7);
        set_i128(e, &integrated_key, integrated + accrued1);

        let claimable_key = MockGaugeDataKey::Claimable(user.clone());
        let claimable = get_i128(e, &claimable_key);
        let accrued2 = balance.fixed_mul_floor(e, &(reward2_rate * elapsed), &SCALAR_7);
        set_i128(e, &claimable_key, claimable + accrued2);
    }

    e.storage()
        .persistent()
        .set(&MockGaugeDataKey::Checkpoint(user.clone()), &now);
}

/// Liquidity gauge with linear emissions per staked unit
#[contract]
pub struct MockGauge;

#[contractimpl]
impl MockGauge {
    /// ### Arguments
    /// * `lp_token` - Token accepted for staking
    /// * `reward_token` - Secondary reward paid by `claim_rewards`
    /// * `reward1_rate` - Primary reward per staked unit per second, in SCALAR_7
    /// * `reward2_rate` - Secondary reward per staked unit per second, in SCALAR_7
    pub fn __constructor(
        e: Env,
        lp_token: Address,
        reward_token: Address,
        reward1_rate: i128,
        reward2_rate: i128,
    ) {
        e.storage().instance().set(&Symbol::new(&e, LP_TOKEN), &lp_token);
        e.storage()
            .instance()
            .set(&Symbol::new(&e, REWARD_TOKEN), &reward_token);
        e.storage()
            .instance()
            .set(&Symbol::new(&e, RATES), &(reward1_rate, reward2_rate));
    }

    pub fn set_rates(e: Env, reward1_rate: i128, reward2_rate: i128) {
        e.storage()
            .instance()
            .set(&Symbol::new(&e, RATES), &(reward1_rate, reward2_rate));
    }

    pub fn user_checkpoint(e: Env, user: Address) {
        checkpoint(&e, &user);
    }

    /// Total primary reward ever accrued by `user`
    pub fn integrate_fraction(e: Env, user: Address) -> i128 {
        get_i128(&e, &MockGaugeDataKey::Integrated(user))
    }

    /// Secondary reward `user` could claim as of its last checkpoint
    pub fn claimable_reward(e: Env, user: Address) -> i128 {
        get_i128(&e, &MockGaugeDataKey::Claimable(user))
    }
}

#[contractimpl]
impl GaugeInterface for MockGauge {
    fn lp_token(e: Env) -> Address {
        e.storage().instance().get(&Symbol::new(&e, LP_TOKEN)).unwrap()
    }

    fn deposit(e: Env, user: Address, amount: i128) {
        user.require_auth();
        checkpoint(&e, &user);

        let gauge = e.current_contract_address();
        TokenClient::new(&e, &Self::lp_token(e.clone())).transfer_from(&gauge, &user, &gauge, &amount);

        let key = MockGaugeDataKey::Balance(user);
        set_i128(&e, &key, get_i128(&e, &key) + amount);
    }

    fn withdraw(e: Env, user: Address, amount: i128) {
        user.require_auth();
        checkpoint(&e, &user);

        let key = MockGaugeDataKey::Balance(user.clone());
        let balance = get_i128(&e, &key);
        if balance < amount {
            panic!("withdraw exceeds staked balance");
        }
        set_i128(&e, &key, balance - amount);

        TokenClient::new(&e, &Self::lp_token(e.clone())).transfer(&e.current_contract_address(), &user, &amount);
    }

    fn balance(e: Env, user: Address) -> i128 {
        get_i128(&e, &MockGaugeDataKey::Balance(user))
    }

    fn claim_rewards(e: Env, user: Address) {
        checkpoint(&e, &user);

        let key = MockGaugeDataKey::Claimable(user.clone());
        let claimable = get_i128(&e, &key);
        if claimable > 0 {
            let reward_token: Address = e
                .storage()
                .instance()
                .get(&Symbol::new(&e, REWARD_TOKEN))
                .unwrap();
            set_i128(&e, &key, 0);
            TokenClient::new(&e, &reward_token).transfer(&e.current_contract_address(), &user, &claimable);
        }
    }
}
