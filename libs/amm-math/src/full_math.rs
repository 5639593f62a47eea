use amm_types::PairError;
use soroban_sdk::{Env, U256};

/// Full 256-bit product of two u128 values (cannot overflow)
pub fn mul_u256(env: &Env, a: u128, b: u128) -> U256 {
    U256::from_u128(env, a).mul(&U256::from_u128(env, b))
}

/// Narrow a U256 back to u128
pub fn to_u128(value: &U256) -> Result<u128, PairError> {
    value.to_u128().ok_or(PairError::Overflow)
}

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, PairError> {
    if denominator == 0 {
        return Err(PairError::Overflow);
    }

    let product = mul_u256(env, a, b);
    let result = product.div(&U256::from_u128(env, denominator));

    to_u128(&result)
}

pub fn checked_add(a: u128, b: u128) -> Result<u128, PairError> {
    a.checked_add(b).ok_or(PairError::Overflow)
}

pub fn checked_sub(a: u128, b: u128) -> Result<u128, PairError> {
    a.checked_sub(b).ok_or(PairError::Overflow)
}

pub fn checked_mul(a: u128, b: u128) -> Result<u128, PairError> {
    a.checked_mul(b).ok_or(PairError::Overflow)
}

/// 2^128 as U256
fn q128(env: &Env) -> U256 {
    U256::from_u128(env, 1u128 << 64).mul(&U256::from_u128(env, 1u128 << 64))
}

/// U256 max = 2^256 - 1
pub fn u256_max(env: &Env) -> U256 {
    let high = U256::from_u128(env, u128::MAX);
    high.mul(&q128(env)).add(&U256::from_u128(env, u128::MAX))
}

/// a + b modulo 2^256
pub fn wrapping_add_u256(env: &Env, a: &U256, b: &U256) -> U256 {
    let headroom = u256_max(env).sub(a);
    if *b > headroom {
        b.sub(&headroom).sub(&U256::from_u32(env, 1))
    } else {
        a.add(b)
    }
}
