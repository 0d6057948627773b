use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

use crate::constants::SCALAR_7;

/// Shares minted for `amount` want entering a vault that manages `total_value`
/// against `total_shares`. Empty vaults mint 1:1.
///
/// Rounds down so the vault never hands out more claim than it received.
pub fn shares_for_deposit(e: &Env, amount: i128, total_shares: i128, total_value: i128) -> i128 {
    if total_shares == 0 || total_value == 0 {
        amount
    } else {
        amount.fixed_mul_floor(e, &total_shares, &total_value)
    }
}

/// Want owed for burning `shares` out of `total_shares`, rounded down
pub fn want_for_shares(e: &Env, shares: i128, total_shares: i128, total_value: i128) -> i128 {
    if total_shares == 0 {
        return 0;
    }
    shares.fixed_mul_floor(e, &total_value, &total_shares)
}

/// Value of one whole share in want, scaled by SCALAR_7
pub fn price_per_share(e: &Env, total_shares: i128, total_value: i128) -> i128 {
    if total_shares == 0 {
        SCALAR_7
    } else {
        total_value.fixed_mul_floor(e, &SCALAR_7, &total_shares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vault_mints_one_to_one() {
        let e = Env::default();
        assert_eq!(shares_for_deposit(&e, 10_000 * SCALAR_7, 0, 0), 10_000 * SCALAR_7);
        // dust left behind after everyone exited
        assert_eq!(shares_for_deposit(&e, 500, 0, 3), 500);
        // shares outstanding but nothing managed
        assert_eq!(shares_for_deposit(&e, 500, 1_000, 0), 500);
    }

    #[test]
    fn test_deposit_rounds_down() {
        let e = Env::default();
        // 1 want into a vault at 1.2 want/share
        assert_eq!(shares_for_deposit(&e, 1, 1_000, 1_200), 0);
        assert_eq!(shares_for_deposit(&e, 6, 1_000, 1_200), 5);
        assert_eq!(shares_for_deposit(&e, 7, 1_000, 1_200), 5);
        assert_eq!(shares_for_deposit(&e, 600 * SCALAR_7, 1_000 * SCALAR_7, 1_200 * SCALAR_7), 500 * SCALAR_7);
    }

    #[test]
    fn test_withdraw_rounds_down() {
        let e = Env::default();
        assert_eq!(want_for_shares(&e, 1, 3, 10), 3);
        assert_eq!(want_for_shares(&e, 2, 3, 10), 6);
        assert_eq!(want_for_shares(&e, 3, 3, 10), 10);
        assert_eq!(want_for_shares(&e, 5, 0, 10), 0);
    }

    #[test]
    fn test_price_per_share() {
        let e = Env::default();
        assert_eq!(price_per_share(&e, 0, 0), SCALAR_7);
        assert_eq!(price_per_share(&e, 1_000, 1_000), SCALAR_7);
        assert_eq!(price_per_share(&e, 1_000, 1_200), 1_2000000);
        assert_eq!(price_per_share(&e, 3, 10), 3_3333333);
    }

    #[test]
    fn test_round_trip_never_gains() {
        let e = Env::default();
        let (mut total_shares, mut total_value) = (7_777, 9_001);
        for amount in [1, 2, 13, 999, 10_000, 123_457] {
            let minted = shares_for_deposit(&e, amount, total_shares, total_value);
            total_shares += minted;
            total_value += amount;
            let out = want_for_shares(&e, minted, total_shares, total_value);
            assert!(out <= amount);
            total_shares -= minted;
            total_value -= out;
        }
    }
}
