use crate::full_math::{mul_u256, to_u128};
use crate::sqrt_math::sqrt;
use amm_types::{PairError, PROTOCOL_FEE_DENOMINATOR_FACTOR};
use soroban_sdk::{Env, U256};

/// Protocol share of the fee growth since `k_last`, in liquidity shares
///
/// liquidity = total_supply * (rootK - rootKLast) / (rootK * 5 + rootKLast)
///
/// Minting that many shares hands the protocol 1/6 of the growth in
/// sqrt(k). Returns 0 when accrual is off (`k_last == 0`) or k has not grown.
pub fn protocol_fee_liquidity(
    env: &Env,
    total_supply: u128,
    reserve0: u128,
    reserve1: u128,
    k_last: &U256,
) -> Result<u128, PairError> {
    if *k_last == U256::from_u32(env, 0) {
        return Ok(0);
    }

    let root_k = sqrt(env, &mul_u256(env, reserve0, reserve1));
    let root_k_last = sqrt(env, k_last);
    if root_k <= root_k_last {
        return Ok(0);
    }

    let numerator = U256::from_u128(env, total_supply).mul(&root_k.sub(&root_k_last));
    let denominator = root_k
        .mul(&U256::from_u32(env, PROTOCOL_FEE_DENOMINATOR_FACTOR))
        .add(&root_k_last);

    to_u128(&numerator.div(&denominator))
}
