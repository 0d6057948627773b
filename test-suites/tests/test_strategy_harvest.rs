use strategy::HarvestReport;
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::TestFixture;
use test_suites::SCALAR_7;

const BIG_DEPOSIT: i128 = 10_000 * SCALAR_7;
const LOW_DEPOSIT: i128 = 1_000;

fn setup_fixture() -> TestFixture<'static> {
    create_fixture_with_data()
}

#[test]
fn test_harvest_accounting() {
    let fixture = setup_fixture();
    let user = &fixture.users[0];
    fixture.vault.deposit(user, &BIG_DEPOSIT);

    fixture.jump(3600);
    let report = fixture.strategy.harvest();

    // 10_000 staked for an hour at 100 and 10 stroops per unit per second
    assert_eq!(report.reward1, 3_600_000_000);
    assert_eq!(report.reward2, 360_000_000);
    // reward1 sells at 0.5 native, reward2 at 2 native
    assert_eq!(report.native, 2_520_000_000);
    assert_eq!(report.fee, 113_400_000);
    assert_eq!(report.want, 2_406_600_000);

    assert_eq!(fixture.native.balance(&fixture.fee_recipient), 113_400_000);
    assert_eq!(fixture.strategy.balance_of_gauge(), BIG_DEPOSIT + 2_406_600_000);
    assert_eq!(fixture.vault.balance(), BIG_DEPOSIT + 2_406_600_000);

    // nothing is left behind in the strategy
    assert_eq!(fixture.reward1.balance(&fixture.strategy.address), 0);
    assert_eq!(fixture.reward2.balance(&fixture.strategy.address), 0);
    assert_eq!(fixture.native.balance(&fixture.strategy.address), 0);
    assert_eq!(fixture.strategy.balance_of_want(), 0);
}

#[test]
fn test_harvest_compounds_for_depositors() {
    let fixture = setup_fixture();
    let user_a = &fixture.users[0];
    let user_b = &fixture.users[1];
    fixture.vault.deposit(user_a, &BIG_DEPOSIT);
    fixture.vault.deposit(user_b, &LOW_DEPOSIT);

    let fee_before = fixture.native.balance(&fixture.fee_recipient);
    let gauge_before = fixture.strategy.balance_of_gauge();
    fixture.jump(3600);
    fixture.strategy.harvest();

    let fee_after = fixture.native.balance(&fixture.fee_recipient);
    let gauge_after = fixture.strategy.balance_of_gauge();
    assert!(fee_after > fee_before);
    assert!(gauge_after > gauge_before);

    fixture.jump(36_000);
    fixture.strategy.harvest();

    assert!(fixture.native.balance(&fixture.fee_recipient) > fee_after);
    assert!(fixture.strategy.balance_of_gauge() > gauge_after);
}

#[test]
fn test_harvest_raises_price_per_share() {
    let fixture = setup_fixture();
    let user = &fixture.users[0];
    fixture.vault.deposit(user, &BIG_DEPOSIT);
    let total_shares = fixture.vault.total_shares();
    let price_before = fixture.vault.price_per_share();
    assert_eq!(price_before, SCALAR_7);

    fixture.jump(3600);
    fixture.strategy.harvest();

    assert_eq!(fixture.vault.total_shares(), total_shares);
    assert!(fixture.vault.price_per_share() > price_before);
}

#[test]
fn test_immediate_second_harvest() {
    let fixture = setup_fixture();
    let user = &fixture.users[0];
    fixture.vault.deposit(user, &BIG_DEPOSIT);

    fixture.jump(3600);
    fixture.strategy.harvest();
    let fee_after = fixture.native.balance(&fixture.fee_recipient);
    let gauge_after = fixture.strategy.balance_of_gauge();

    let report = fixture.strategy.harvest();

    assert_eq!(
        report,
        HarvestReport {
            reward1: 0,
            reward2: 0,
            native: 0,
            fee: 0,
            want: 0,
        }
    );
    assert_eq!(fixture.native.balance(&fixture.fee_recipient), fee_after);
    assert!(fixture.strategy.balance_of_gauge() >= gauge_after);
}

#[test]
fn test_harvest_empty_strategy() {
    let fixture = setup_fixture();
    fixture.jump(3600);

    let report = fixture.strategy.harvest();

    assert_eq!(report.native, 0);
    assert_eq!(report.want, 0);
    assert_eq!(fixture.strategy.balance_of_gauge(), 0);
    assert_eq!(fixture.native.balance(&fixture.fee_recipient), 0);
    assert_eq!(fixture.strategy.last_harvest(), fixture.env.ledger().timestamp());
}

#[test]
fn test_harvest_records_timestamp() {
    let fixture = setup_fixture();
    let user = &fixture.users[0];
    fixture.vault.deposit(user, &BIG_DEPOSIT);
    assert_eq!(fixture.strategy.last_harvest(), 0);

    fixture.jump(3600);
    fixture.strategy.harvest();
    let first = fixture.strategy.last_harvest();
    assert_eq!(first, fixture.env.ledger().timestamp());

    fixture.jump(600);
    fixture.strategy.harvest();
    assert_eq!(fixture.strategy.last_harvest(), first + 600);
}

#[test]
fn test_harvest_restakes_idle_want() {
    let fixture = setup_fixture();
    let user = &fixture.users[0];
    fixture.vault.deposit(user, &BIG_DEPOSIT);
    fixture.want.mint(&fixture.strategy.address, &SCALAR_7);

    fixture.strategy.harvest();

    assert_eq!(fixture.strategy.balance_of_want(), 0);
    assert_eq!(fixture.strategy.balance_of_gauge(), BIG_DEPOSIT + SCALAR_7);
}

#[test]
fn test_failed_swap_aborts_harvest() {
    let fixture = setup_fixture();
    let user = &fixture.users[0];
    fixture.vault.deposit(user, &BIG_DEPOSIT);
    fixture.jump(3600);

    // reward1 is swapped before reward2, so the first swap has already run
    fixture.reward2_pool.set_paused(&true);
    let result = fixture.strategy.try_harvest();
    assert!(result.is_err());

    assert_eq!(fixture.minter.minted(&fixture.strategy.address, &fixture.gauge.address), 0);
    assert_eq!(fixture.reward1.balance(&fixture.strategy.address), 0);
    assert_eq!(fixture.reward2.balance(&fixture.strategy.address), 0);
    assert_eq!(fixture.native.balance(&fixture.strategy.address), 0);
    assert_eq!(fixture.native.balance(&fixture.fee_recipient), 0);
    assert_eq!(fixture.strategy.balance_of_gauge(), BIG_DEPOSIT);
    assert_eq!(fixture.strategy.last_harvest(), 0);

    // the rewards are still there once the pool recovers
    fixture.reward2_pool.set_paused(&false);
    let report = fixture.strategy.harvest();
    assert_eq!(report.reward1, 3_600_000_000);
    assert_eq!(report.reward2, 360_000_000);
    assert_eq!(fixture.native.balance(&fixture.fee_recipient), 113_400_000);
}

#[test]
fn test_harvest_without_emissions() {
    let fixture = setup_fixture();
    let user = &fixture.users[0];
    fixture.vault.deposit(user, &BIG_DEPOSIT);
    fixture.gauge.set_rates(&0, &0);

    fixture.jump(3600);
    let report = fixture.strategy.harvest();

    assert_eq!(report.native, 0);
    assert_eq!(fixture.strategy.balance_of_gauge(), BIG_DEPOSIT);
    assert_eq!(fixture.vault.price_per_share(), SCALAR_7);
}
