use crate::full_math::{mul_u256, to_u128};
use amm_types::PairError;
use soroban_sdk::{Env, U256};

/// Integer square root, floor(sqrt(y)), by Newton's method
///
/// For y > 3 the iteration starts at y / 2 + 1 and stops as soon as the
/// next estimate is not smaller than the current one. Estimates decrease
/// monotonically and never drop below floor(sqrt(y)), so the loop ends.
pub fn sqrt(env: &Env, y: &U256) -> U256 {
    let zero = U256::from_u32(env, 0);
    let one = U256::from_u32(env, 1);
    let two = U256::from_u32(env, 2);
    let three = U256::from_u32(env, 3);

    if *y > three {
        let mut z = y.clone();
        let mut x = y.div(&two).add(&one);
        while x < z {
            z = x.clone();
            x = y.div(&x).add(&x).div(&two);
        }
        z
    } else if *y != zero {
        one
    } else {
        zero
    }
}

/// floor(sqrt(a * b)) for two u128 factors
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> Result<u128, PairError> {
    to_u128(&sqrt(env, &mul_u256(env, a, b)))
}
