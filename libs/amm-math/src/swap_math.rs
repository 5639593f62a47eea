use crate::full_math::{checked_add, checked_mul, checked_sub, mul_u256, to_u128};
use amm_types::{PairError, FEE_DENOMINATOR, FEE_NUMERATOR, MAX_RESERVE};
use soroban_sdk::{Env, U256};

/// Output amount for an exact input, after the 0.3% fee
///
/// amount_out = amount_in * 997 * reserve_out / (reserve_in * 1000 + amount_in * 997)
///
/// Rounds down, in favor of the pool. A result of 0 is a valid outcome for
/// dust inputs and is not an error.
pub fn get_amount_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, PairError> {
    if amount_in == 0 {
        return Err(PairError::InsufficientInputAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(PairError::InsufficientLiquidity);
    }

    let amount_in_with_fee = checked_mul(amount_in, FEE_NUMERATOR)?;
    let numerator = mul_u256(env, amount_in_with_fee, reserve_out);
    let denominator = mul_u256(env, reserve_in, FEE_DENOMINATOR)
        .add(&U256::from_u128(env, amount_in_with_fee));

    to_u128(&numerator.div(&denominator))
}

/// Input amount required for an exact output, after the 0.3% fee
///
/// amount_in = reserve_in * amount_out * 1000 / ((reserve_out - amount_out) * 997) + 1
pub fn get_amount_in(
    env: &Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, PairError> {
    if amount_out == 0 {
        return Err(PairError::InsufficientOutputAmount);
    }
    if reserve_in == 0 || reserve_out == 0 || amount_out >= reserve_out {
        return Err(PairError::InsufficientLiquidity);
    }
    if reserve_in > MAX_RESERVE || reserve_out > MAX_RESERVE {
        return Err(PairError::Overflow);
    }

    let numerator = mul_u256(env, reserve_in, amount_out)
        .mul(&U256::from_u128(env, FEE_DENOMINATOR));
    let denominator = checked_mul(reserve_out - amount_out, FEE_NUMERATOR)?;

    let quotient = to_u128(&numerator.div(&U256::from_u128(env, denominator)))?;
    checked_add(quotient, 1)
}

/// Fee kept by the pool for an input amount: floor(amount_in * 3 / 1000)
pub fn swap_fee(amount_in: u128) -> Result<u128, PairError> {
    Ok(checked_mul(amount_in, FEE_DENOMINATOR - FEE_NUMERATOR)? / FEE_DENOMINATOR)
}

/// balance * 1000 - amount_in * 3
fn adjusted_balance(balance: u128, amount_in: u128) -> Result<u128, PairError> {
    let scaled = checked_mul(balance, FEE_DENOMINATOR)?;
    let fee = checked_mul(amount_in, FEE_DENOMINATOR - FEE_NUMERATOR)?;
    // An input larger than the balance can never satisfy the product check
    checked_sub(scaled, fee).map_err(|_| PairError::K)
}

/// Check a settled swap against the fee-adjusted constant product
///
/// Requires (b0 * 1000 - in0 * 3) * (b1 * 1000 - in1 * 3) >= r0 * r1 * 1000^2,
/// where b are the post-settlement balances and r the pre-swap reserves.
/// The balances are what the pool actually holds, so the check holds no
/// matter which amounts the caller claims to have moved.
pub fn validate_swap(
    env: &Env,
    balance0: u128,
    balance1: u128,
    amount0_in: u128,
    amount1_in: u128,
    reserve0: u128,
    reserve1: u128,
) -> Result<(), PairError> {
    if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
        return Err(PairError::Overflow);
    }
    if reserve0 > MAX_RESERVE || reserve1 > MAX_RESERVE {
        return Err(PairError::Overflow);
    }

    let balance0_adjusted = adjusted_balance(balance0, amount0_in)?;
    let balance1_adjusted = adjusted_balance(balance1, amount1_in)?;

    let k_after = mul_u256(env, balance0_adjusted, balance1_adjusted);
    let k_before = mul_u256(env, reserve0, reserve1)
        .mul(&U256::from_u128(env, FEE_DENOMINATOR * FEE_DENOMINATOR));

    if k_after < k_before {
        return Err(PairError::K);
    }
    Ok(())
}

/// Boolean form of [`validate_swap`]
pub fn is_k_satisfied(
    env: &Env,
    balance0: u128,
    balance1: u128,
    amount0_in: u128,
    amount1_in: u128,
    reserve0: u128,
    reserve1: u128,
) -> bool {
    validate_swap(env, balance0, balance1, amount0_in, amount1_in, reserve0, reserve1).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    const E18: u128 = 1_000_000_000_000_000_000;

    // === get_amount_out tests ===

    #[test]
    fn test_get_amount_out_equal_reserves() {
        let env = Env::default();
        // 1000e18 in against 1000e18 / 1000e18: 997 / 1997 of the reserve
        let out = get_amount_out(&env, 1000 * E18, 1000 * E18, 1000 * E18).unwrap();
        assert_eq!(out, 499_248_873_309_964_947_421);
    }

    #[test]
    fn test_get_amount_out_uniswap_vectors() {
        let env = Env::default();
        assert_eq!(
            get_amount_out(&env, E18, 5 * E18, 10 * E18),
            Ok(1_662_497_915_624_478_906)
        );
        assert_eq!(
            get_amount_out(&env, E18, 10 * E18, 5 * E18),
            Ok(453_305_446_940_074_565)
        );
        assert_eq!(
            get_amount_out(&env, E18, 1000 * E18, 1000 * E18),
            Ok(996_006_981_039_903_216)
        );
    }

    #[test]
    fn test_get_amount_out_dust_is_zero_not_error() {
        let env = Env::default();
        assert_eq!(get_amount_out(&env, 1, 1000 * E18, 1000 * E18), Ok(0));
    }

    #[test]
    fn test_get_amount_out_zero_input() {
        let env = Env::default();
        assert_eq!(
            get_amount_out(&env, 0, 100, 100),
            Err(PairError::InsufficientInputAmount)
        );
    }

    #[test]
    fn test_get_amount_out_empty_reserve() {
        let env = Env::default();
        assert_eq!(get_amount_out(&env, 10, 0, 100), Err(PairError::InsufficientLiquidity));
        assert_eq!(get_amount_out(&env, 10, 100, 0), Err(PairError::InsufficientLiquidity));
    }

    #[test]
    fn test_get_amount_out_input_overflow() {
        let env = Env::default();
        assert_eq!(
            get_amount_out(&env, u128::MAX, 100, 100),
            Err(PairError::Overflow)
        );
    }

    // === get_amount_in tests ===

    #[test]
    fn test_get_amount_in_inverts_amount_out() {
        let env = Env::default();
        let amount_out = get_amount_out(&env, E18, 5 * E18, 10 * E18).unwrap();
        let amount_in = get_amount_in(&env, amount_out, 5 * E18, 10 * E18).unwrap();
        // Rounds up, so never less than what produced the output
        assert!(amount_in <= E18);
        assert!(get_amount_out(&env, amount_in, 5 * E18, 10 * E18).unwrap() >= amount_out);
    }

    #[test]
    fn test_get_amount_in_errors() {
        let env = Env::default();
        assert_eq!(get_amount_in(&env, 0, 100, 100), Err(PairError::InsufficientOutputAmount));
        assert_eq!(get_amount_in(&env, 100, 100, 100), Err(PairError::InsufficientLiquidity));
        assert_eq!(get_amount_in(&env, 10, 0, 100), Err(PairError::InsufficientLiquidity));
    }

    // === swap_fee tests ===

    #[test]
    fn test_swap_fee() {
        assert_eq!(swap_fee(1000), Ok(3));
        assert_eq!(swap_fee(999), Ok(2));
        assert_eq!(swap_fee(333), Ok(0));
        assert_eq!(swap_fee(2000), Ok(6));
    }

    // === validate_swap tests ===

    #[test]
    fn test_validate_swap_accepts_quoted_output() {
        let env = Env::default();
        let (r0, r1) = (5 * E18, 10 * E18);
        let out = get_amount_out(&env, E18, r0, r1).unwrap();

        assert_eq!(validate_swap(&env, r0 + E18, r1 - out, E18, 0, r0, r1), Ok(()));
    }

    #[test]
    fn test_validate_swap_rejects_one_more_than_quoted() {
        let env = Env::default();
        let (r0, r1) = (5 * E18, 10 * E18);
        let out = get_amount_out(&env, E18, r0, r1).unwrap();

        assert_eq!(
            validate_swap(&env, r0 + E18, r1 - out - 1, E18, 0, r0, r1),
            Err(PairError::K)
        );
        assert!(!is_k_satisfied(&env, r0 + E18, r1 - out - 1, E18, 0, r0, r1));
    }

    #[test]
    fn test_validate_swap_fee_free_output_rejected() {
        let env = Env::default();
        let (r0, r1) = (1000u128, 1000u128);
        // Without the fee, 1000 in would pay 500 out; the fee forbids it
        assert_eq!(validate_swap(&env, 2000, 500, 1000, 0, r0, r1), Err(PairError::K));
    }

    #[test]
    fn test_validate_swap_balance_over_112_bits() {
        let env = Env::default();
        assert_eq!(
            validate_swap(&env, MAX_RESERVE + 1, 1, 1, 0, 1, 1),
            Err(PairError::Overflow)
        );
    }

    #[test]
    fn test_validate_swap_donation_only() {
        let env = Env::default();
        // No output, pure input: product can only grow
        assert_eq!(validate_swap(&env, 1100, 1000, 100, 0, 1000, 1000), Ok(()));
    }
}
