use amm_math::{checked_add, mul_u256, protocol_fee_liquidity};
use amm_types::{PairError, PairState};
use soroban_sdk::{Env, U256};

/// Accrue the protocol's cut of fee growth before a liquidity event
///
/// Runs ahead of the mint/burn math so fee shares are priced on the
/// pre-deposit ratio. Returns the shares to mint to the fee recipient; the
/// caller credits them when it commits. With accrual off, `k_last` is cleared.
pub fn settle(env: &Env, state: &mut PairState, fee_on: bool) -> Result<Option<u128>, PairError> {
    let zero = U256::from_u32(env, 0);

    if !fee_on {
        if state.k_last != zero {
            state.k_last = zero;
        }
        return Ok(None);
    }

    let liquidity = protocol_fee_liquidity(
        env,
        state.total_supply,
        state.reserve0,
        state.reserve1,
        &state.k_last,
    )?;
    if liquidity == 0 {
        return Ok(None);
    }

    state.total_supply = checked_add(state.total_supply, liquidity)?;
    Ok(Some(liquidity))
}

/// Record k after a liquidity event, on the post-operation reserves
pub fn record_k_last(env: &Env, state: &mut PairState, fee_on: bool) {
    state.k_last = if fee_on {
        mul_u256(env, state.reserve0, state.reserve1)
    } else {
        U256::from_u32(env, 0)
    };
}
