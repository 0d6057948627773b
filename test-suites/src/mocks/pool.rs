use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, Symbol, Vec};
use strategy::dependencies::PoolInterface;

use crate::SCALAR_7;

const COINS: &str = "Coins";
const RATES: &str = "Rates";
const LP_TOKEN: &str = "LpToken";
const LP_RATE: &str = "LpRate";
const PAUSED: &str = "Paused";

fn get_coins(e: &Env) -> Vec<Address> {
    e.storage().instance().get(&Symbol::new(e, COINS)).unwrap()
}

fn get_rates(e: &Env) -> Vec<i128> {
    e.storage().instance().get(&Symbol::new(e, RATES)).unwrap()
}

fn require_not_paused(e: &Env) {
    let paused: bool = e
        .storage()
        .instance()
        .get(&Symbol::new(e, PAUSED))
        .unwrap_or(false);
    if paused {
        panic!("pool is paused");
    }
}

/// Fixed-rate pool
///
/// Every coin has a value in SCALAR_7. Swaps convert at the ratio of the two
/// values and liquidity is minted at `value / lp_rate`. Output tokens come
/// from the pool's pre-funded balance.
#[contract]
pub struct MockPool;

#[contractimpl]
impl MockPool {
    pub fn __constructor(e: Env, coins: Vec<Address>, rates: Vec<i128>, lp_token: Address, lp_rate: i128) {
        if coins.len() != rates.len() {
            panic!("one rate per coin");
        }
        e.storage().instance().set(&Symbol::new(&e, COINS), &coins);
        e.storage().instance().set(&Symbol::new(&e, RATES), &rates);
        e.storage().instance().set(&Symbol::new(&e, LP_TOKEN), &lp_token);
        e.storage().instance().set(&Symbol::new(&e, LP_RATE), &lp_rate);
    }

    /// Make every swap and liquidity call fail
    pub fn set_paused(e: Env, paused: bool) {
        e.storage().instance().set(&Symbol::new(&e, PAUSED), &paused);
    }
}

#[contractimpl]
impl PoolInterface for MockPool {
    fn coins(e: Env, i: u32) -> Address {
        get_coins(&e).get(i).unwrap()
    }

    fn lp_token(e: Env) -> Address {
        e.storage().instance().get(&Symbol::new(&e, LP_TOKEN)).unwrap()
    }

    fn exchange(e: Env, user: Address, i: u32, j: u32, dx: i128, min_dy: i128) -> i128 {
        user.require_auth();
        require_not_paused(&e);

        let coins = get_coins(&e);
        let rates = get_rates(&e);
        let dy = dx.fixed_mul_floor(&e, &rates.get(i).unwrap(), &rates.get(j).unwrap());
        if dy < min_dy {
            panic!("exchange below min_dy");
        }

        let pool = e.current_contract_address();
        TokenClient::new(&e, &coins.get(i).unwrap()).transfer_from(&pool, &user, &pool, &dx);
        TokenClient::new(&e, &coins.get(j).unwrap()).transfer(&pool, &user, &dy);
        dy
    }

    fn add_liquidity(e: Env, user: Address, amounts: Vec<i128>, min_mint_amount: i128) -> i128 {
        user.require_auth();
        require_not_paused(&e);

        let coins = get_coins(&e);
        let rates = get_rates(&e);
        let pool = e.current_contract_address();

        let mut value = 0;
        for (index, amount) in amounts.iter().enumerate() {
            if amount <= 0 {
                continue;
            }
            let index = index as u32;
            TokenClient::new(&e, &coins.get(index).unwrap()).transfer_from(&pool, &user, &pool, &amount);
            value += amount.fixed_mul_floor(&e, &rates.get(index).unwrap(), &SCALAR_7);
        }

        let lp_rate: i128 = e.storage().instance().get(&Symbol::new(&e, LP_RATE)).unwrap();
        let minted = value.fixed_mul_floor(&e, &SCALAR_7, &lp_rate);
        if minted < min_mint_amount {
            panic!("mint below min_mint_amount");
        }
        if minted > 0 {
            TokenClient::new(&e, &Self::lp_token(e.clone())).transfer(&pool, &user, &minted);
        }
        minted
    }
}
