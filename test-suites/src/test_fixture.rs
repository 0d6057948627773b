use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec as svec, Address, Env, String};
use strategy::StrategyClient;
use vault::VaultClient;

use crate::mocks::{MockGauge, MockGaugeClient, MockMinter, MockMinterClient, MockPool, MockPoolClient};
use crate::token::create_stellar_token;
use crate::SCALAR_7;

/// Primary reward per staked unit per second
pub const REWARD1_RATE: i128 = 100;
/// Secondary reward per staked unit per second
pub const REWARD2_RATE: i128 = 10;
/// Native paid per reward1 in the reward1 pool
pub const REWARD1_PRICE: i128 = 0_5000000;
/// Native paid per reward2 in the reward2 pool
pub const REWARD2_PRICE: i128 = 2_0000000;
/// Stock each pool, the gauge and the minter start with
pub const VENUE_STOCK: i128 = 10_000_000 * SCALAR_7;

pub const LOCK_TIME: u64 = 86_400;

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub fee_recipient: Address,
    pub users: Vec<Address>,
    pub want: MockTokenClient<'a>,
    pub native: MockTokenClient<'a>,
    pub reward1: MockTokenClient<'a>,
    pub reward2: MockTokenClient<'a>,
    /// `[other, native]` pool whose lp token is want
    pub pool: MockPoolClient<'a>,
    /// `[native, reward1]` swap pool
    pub reward1_pool: MockPoolClient<'a>,
    /// `[native, reward2]` swap pool
    pub reward2_pool: MockPoolClient<'a>,
    pub gauge: MockGaugeClient<'a>,
    pub minter: MockMinterClient<'a>,
    pub strategy: StrategyClient<'a>,
    pub vault: VaultClient<'a>,
}

impl TestFixture<'_> {
    /// Deploy the venue mocks, the strategy and the vault, then bind them
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();
        e.ledger().with_mut(|li| {
            li.timestamp = 1_700_000_000;
            li.sequence_number = 100;
            li.min_temp_entry_ttl = 17280;
            li.min_persistent_entry_ttl = 2073600;
            li.max_entry_ttl = 3110400;
        });

        let admin = Address::generate(&e);
        let fee_recipient = Address::generate(&e);

        let (want_id, want_client) = create_stellar_token(&e, &admin);
        let (native_id, native_client) = create_stellar_token(&e, &admin);
        let (reward1_id, reward1_client) = create_stellar_token(&e, &admin);
        let (reward2_id, reward2_client) = create_stellar_token(&e, &admin);
        let (other_id, _) = create_stellar_token(&e, &admin);

        let pool_id = e.register(
            MockPool,
            (
                svec![&e, other_id, native_id.clone()],
                svec![&e, SCALAR_7, SCALAR_7],
                want_id.clone(),
                SCALAR_7,
            ),
        );
        let reward1_pool_id = e.register(
            MockPool,
            (
                svec![&e, native_id.clone(), reward1_id.clone()],
                svec![&e, SCALAR_7, REWARD1_PRICE],
                Address::generate(&e),
                SCALAR_7,
            ),
        );
        let reward2_pool_id = e.register(
            MockPool,
            (
                svec![&e, native_id.clone(), reward2_id.clone()],
                svec![&e, SCALAR_7, REWARD2_PRICE],
                Address::generate(&e),
                SCALAR_7,
            ),
        );
        let gauge_id = e.register(
            MockGauge,
            (want_id.clone(), reward2_id.clone(), REWARD1_RATE, REWARD2_RATE),
        );
        let minter_id = e.register(MockMinter, (reward1_id.clone(),));

        want_client.mint(&pool_id, &VENUE_STOCK);
        native_client.mint(&reward1_pool_id, &VENUE_STOCK);
        native_client.mint(&reward2_pool_id, &VENUE_STOCK);
        reward2_client.mint(&gauge_id, &VENUE_STOCK);
        reward1_client.mint(&minter_id, &VENUE_STOCK);

        let strategy_id = e.register(
            strategy::StrategyContract {},
            (
                admin.clone(),
                pool_id.clone(),
                reward1_pool_id.clone(),
                reward2_pool_id.clone(),
                gauge_id.clone(),
                minter_id.clone(),
                fee_recipient.clone(),
            ),
        );
        let strategy_client = StrategyClient::new(&e, &strategy_id);

        let vault_id = e.register(
            vault::VaultContract {},
            (
                strategy_id,
                String::from_str(&e, "Vault Receipt"),
                String::from_str(&e, "vaultReceipt"),
                LOCK_TIME,
            ),
        );
        let vault_client = VaultClient::new(&e, &vault_id);

        strategy_client.set_vault(&vault_id);

        let pool_client = MockPoolClient::new(&e, &pool_id);
        let reward1_pool_client = MockPoolClient::new(&e, &reward1_pool_id);
        let reward2_pool_client = MockPoolClient::new(&e, &reward2_pool_id);
        let gauge_client = MockGaugeClient::new(&e, &gauge_id);
        let minter_client = MockMinterClient::new(&e, &minter_id);

        TestFixture {
            env: e,
            admin,
            fee_recipient,
            users: vec![],
            want: want_client,
            native: native_client,
            reward1: reward1_client,
            reward2: reward2_client,
            pool: pool_client,
            reward1_pool: reward1_pool_client,
            reward2_pool: reward2_pool_client,
            gauge: gauge_client,
            minter: minter_client,
            strategy: strategy_client,
            vault: vault_client,
        }
    }

    /// Deploy another strategy wired to the same venue, not bound to any vault
    pub fn deploy_strategy<'a>(&self) -> StrategyClient<'a> {
        let strategy_id = self.env.register(
            strategy::StrategyContract {},
            (
                self.admin.clone(),
                self.pool.address.clone(),
                self.reward1_pool.address.clone(),
                self.reward2_pool.address.clone(),
                self.gauge.address.clone(),
                self.minter.address.clone(),
                self.fee_recipient.clone(),
            ),
        );
        StrategyClient::new(&self.env, &strategy_id)
    }

    /// Create a user holding `amount` want with the vault approved to pull it
    pub fn create_user(&mut self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.want.mint(&user, &amount);
        self.want.approve(
            &user,
            &self.vault.address,
            &i128::MAX,
            &(self.env.ledger().sequence() + 100_000),
        );
        self.users.push(user.clone());
        user
    }

    /********** Chain Helpers ***********/

    /// Move the ledger clock forward without closing ledgers
    pub fn jump(&self, time: u64) {
        self.env.ledger().with_mut(|li| {
            li.timestamp = li.timestamp.saturating_add(time);
        });
    }
}
