use crate::full_math::wrapping_add_u256;
use amm_types::{PairError, MAX_RESERVE, Q112};
use soroban_sdk::{Env, U256};

/// numerator / denominator encoded as UQ112.112
pub fn uq112x112_div(env: &Env, numerator: u128, denominator: u128) -> Result<U256, PairError> {
    if denominator == 0 {
        return Err(PairError::Overflow);
    }
    if numerator > MAX_RESERVE {
        return Err(PairError::Overflow);
    }
    let encoded = U256::from_u128(env, numerator).mul(&U256::from_u128(env, Q112));
    Ok(encoded.div(&U256::from_u128(env, denominator)))
}

/// Advance a price accumulator by price * elapsed, wrapping modulo 2^256
///
/// With both reserves under 2^112 the price is below 2^224, so the
/// product with a u32 elapsed time stays within 256 bits.
pub fn accumulate_price(
    env: &Env,
    cumulative: &U256,
    reserve_numerator: u128,
    reserve_denominator: u128,
    elapsed: u32,
) -> Result<U256, PairError> {
    let price = uq112x112_div(env, reserve_numerator, reserve_denominator)?;
    let delta = price.mul(&U256::from_u32(env, elapsed));
    Ok(wrapping_add_u256(env, cumulative, &delta))
}
