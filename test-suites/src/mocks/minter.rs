use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Symbol};
use strategy::dependencies::MinterInterface;

use crate::mocks::MockGaugeClient;

const TOKEN: &str = "Token";

#[derive(Clone)]
#[contracttype]
enum MockMinterDataKey {
    Minted(Address, Address),
}

/// Pays the primary gauge reward out of its own pre-funded balance
#[contract]
pub struct MockMinter;

#[contractimpl]
impl MockMinter {
    pub fn __constructor(e: Env, token: Address) {
        e.storage().instance().set(&Symbol::new(&e, TOKEN), &token);
    }

    /// Total already paid to `user` for its stake in `gauge`
    pub fn minted(e: Env, user: Address, gauge: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&MockMinterDataKey::Minted(user, gauge))
            .unwrap_or(0)
    }
}

#[contractimpl]
impl MinterInterface for MockMinter {
    fn token(e: Env) -> Address {
        e.storage().instance().get(&Symbol::new(&e, TOKEN)).unwrap()
    }

    fn mint(e: Env, user: Address, gauge: Address) -> i128 {
        user.require_auth();

        let gauge_client = MockGaugeClient::new(&e, &gauge);
        gauge_client.user_checkpoint(&user);
        let total = gauge_client.integrate_fraction(&user);
        let minted = Self::minted(e.clone(), user.clone(), gauge.clone());

        let amount = total - minted;
        if amount > 0 {
            TokenClient::new(&e, &Self::token(e.clone())).transfer(&e.current_contract_address(), &user, &amount);
            e.storage()
                .persistent()
                .set(&MockMinterDataKey::Minted(user, gauge), &total);
        }
        amount
    }
}
