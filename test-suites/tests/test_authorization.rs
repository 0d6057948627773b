use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec as svec, Address, Symbol};
use strategy::StrategyError;
use test_suites::mocks::{MockGauge, MockPoolClient};
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::{TestFixture, REWARD1_RATE, REWARD2_RATE};
use test_suites::SCALAR_7;

fn setup_fixture() -> TestFixture<'static> {
    create_fixture_with_data()
}

#[test]
#[should_panic(expected = "Error(Contract, #510)")]
fn test_strategy_withdraw_from_user() {
    let fixture = setup_fixture();
    let user = &fixture.users[0];
    fixture.vault.deposit(user, &(1_000 * SCALAR_7));

    fixture.strategy.withdraw(user, &SCALAR_7);
}

#[test]
fn test_strategy_withdraw_before_binding() {
    let fixture = setup_fixture();
    let unbound = fixture.deploy_strategy();
    assert_eq!(unbound.vault(), None);

    let result = unbound.try_withdraw(&fixture.vault.address, &SCALAR_7);
    assert_eq!(result.err(), Some(Ok(StrategyError::Unauthorized.into())));
}

#[test]
#[should_panic(expected = "Error(Contract, #520)")]
fn test_strategy_withdraw_zero() {
    let fixture = setup_fixture();
    let vault = fixture.vault.address.clone();

    fixture.env.as_contract(&vault, || {
        fixture.strategy.withdraw(&vault, &0);
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #501)")]
fn test_set_vault_twice() {
    let fixture = setup_fixture();
    let other = Address::generate(&fixture.env);

    fixture.strategy.set_vault(&other);
}

#[test]
fn test_set_vault_requires_admin() {
    let fixture = setup_fixture();
    let unbound = fixture.deploy_strategy();

    fixture.env.set_auths(&[]);
    assert!(unbound.try_set_vault(&fixture.vault.address).is_err());
    assert_eq!(unbound.vault(), None);
}

#[test]
fn test_set_vault_binds_once() {
    let fixture = setup_fixture();
    let unbound = fixture.deploy_strategy();
    let vault = Address::generate(&fixture.env);

    unbound.set_vault(&vault);
    assert_eq!(unbound.vault(), Some(vault.clone()));

    let result = unbound.try_set_vault(&fixture.vault.address);
    assert_eq!(result.err(), Some(Ok(StrategyError::AlreadyBound.into())));
    assert_eq!(unbound.vault(), Some(vault));
}

#[test]
fn test_vault_calls_require_depositor_auth() {
    let fixture = setup_fixture();
    let user = &fixture.users[0];

    fixture.vault.deposit(user, &(1_000 * SCALAR_7));
    let auths = fixture.env.auths();
    let (address, invocation) = &auths[0];
    assert_eq!(address, user);
    match &invocation.function {
        soroban_sdk::testutils::AuthorizedFunction::Contract((contract, function, _)) => {
            assert_eq!(*contract, fixture.vault.address);
            assert_eq!(*function, Symbol::new(&fixture.env, "deposit"));
        }
        _ => panic!("unexpected authorized function"),
    }

    fixture.vault.withdraw(user, &SCALAR_7);
    let auths = fixture.env.auths();
    assert!(auths.iter().any(|(address, _)| address == user));
}

#[test]
#[should_panic]
fn test_strategy_rejects_mismatched_gauge() {
    let fixture = setup_fixture();
    // stakes the wrong lp token
    let gauge_id = fixture.env.register(
        MockGauge,
        (
            fixture.native.address.clone(),
            fixture.reward2.address.clone(),
            REWARD1_RATE,
            REWARD2_RATE,
        ),
    );

    fixture.env.register(
        strategy::StrategyContract {},
        (
            fixture.admin.clone(),
            fixture.pool.address.clone(),
            fixture.reward1_pool.address.clone(),
            fixture.reward2_pool.address.clone(),
            gauge_id,
            fixture.minter.address.clone(),
            fixture.fee_recipient.clone(),
        ),
    );
}

#[test]
#[should_panic]
fn test_strategy_rejects_pool_without_native() {
    let fixture = setup_fixture();
    let pool_id = fixture.env.register(
        test_suites::mocks::MockPool,
        (
            svec![&fixture.env, fixture.reward1.address.clone(), fixture.reward2.address.clone()],
            svec![&fixture.env, SCALAR_7, SCALAR_7],
            fixture.want.address.clone(),
            SCALAR_7,
        ),
    );
    assert_eq!(MockPoolClient::new(&fixture.env, &pool_id).lp_token(), fixture.want.address);

    fixture.env.register(
        strategy::StrategyContract {},
        (
            fixture.admin.clone(),
            pool_id,
            fixture.reward1_pool.address.clone(),
            fixture.reward2_pool.address.clone(),
            fixture.gauge.address.clone(),
            fixture.minter.address.clone(),
            fixture.fee_recipient.clone(),
        ),
    );
}
