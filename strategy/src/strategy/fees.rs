use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

use crate::constants::{PERFORMANCE_FEE, SCALAR_7};

/// Split harvested native into `(fee, remaining)`
///
/// The fee rounds down, so dust always stays with the depositors.
pub fn split_performance_fee(e: &Env, native: i128) -> (i128, i128) {
    if native <= 0 {
        return (0, 0);
    }
    let fee = native.fixed_mul_floor(e, &PERFORMANCE_FEE, &SCALAR_7);
    (fee, native - fee)
}
