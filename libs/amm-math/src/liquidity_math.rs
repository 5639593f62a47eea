use crate::full_math::mul_div;
use crate::sqrt_math::sqrt_product;
use amm_types::{PairError, MINIMUM_LIQUIDITY};
use soroban_sdk::Env;

/// Shares minted for a deposit of `amount0` / `amount1`
///
/// First deposit (`total_supply == 0`): sqrt(amount0 * amount1) - MINIMUM_LIQUIDITY.
/// The caller is responsible for locking MINIMUM_LIQUIDITY on top of the result.
///
/// Later deposits: min(amount0 * total_supply / reserve0, amount1 * total_supply / reserve1),
/// so an unbalanced deposit is credited at the less favorable ratio.
pub fn mint_liquidity(
    env: &Env,
    amount0: u128,
    amount1: u128,
    reserve0: u128,
    reserve1: u128,
    total_supply: u128,
) -> Result<u128, PairError> {
    if amount0 == 0 || amount1 == 0 {
        return Err(PairError::InsufficientLiquidityMinted);
    }

    if total_supply == 0 {
        let root = sqrt_product(env, amount0, amount1)?;
        return match root.checked_sub(MINIMUM_LIQUIDITY) {
            Some(liquidity) if liquidity > 0 => Ok(liquidity),
            _ => Err(PairError::InsufficientLiquidityMinted),
        };
    }

    if reserve0 == 0 || reserve1 == 0 {
        return Err(PairError::InsufficientLiquidity);
    }

    let liquidity0 = mul_div(env, amount0, total_supply, reserve0)?;
    let liquidity1 = mul_div(env, amount1, total_supply, reserve1)?;
    let liquidity = liquidity0.min(liquidity1);

    if liquidity == 0 {
        return Err(PairError::InsufficientLiquidityMinted);
    }
    Ok(liquidity)
}

/// Token amounts redeemed by burning `liquidity` shares
///
/// amountN = liquidity * balanceN / total_supply, on the balances the pool
/// currently holds (so donations since the last sync are shared pro rata).
pub fn burn_amounts(
    env: &Env,
    liquidity: u128,
    balance0: u128,
    balance1: u128,
    total_supply: u128,
) -> Result<(u128, u128), PairError> {
    if liquidity == 0 || liquidity > total_supply {
        return Err(PairError::InsufficientLiquidityBurned);
    }

    let amount0 = mul_div(env, liquidity, balance0, total_supply)?;
    let amount1 = mul_div(env, liquidity, balance1, total_supply)?;

    if amount0 == 0 || amount1 == 0 {
        return Err(PairError::InsufficientLiquidityBurned);
    }
    Ok((amount0, amount1))
}
