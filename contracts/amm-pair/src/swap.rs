use crate::invariants::k_non_decreasing;
use crate::lock::PairLock;
use crate::state::{balances, commit, pay, sync};
use crate::storage::{get_config, get_state};
use amm_math::validate_swap;
use amm_types::PairError;
use soroban_sdk::{log, Address, Env};

/// Execute a swap under the optimistic transfer protocol
///
/// Outputs are paid to `to` first; the amounts in are whatever the pair
/// holds above its reserves net of those outputs. The settled balances must
/// satisfy the fee-adjusted constant product or the whole call fails.
pub fn execute_swap(
    env: &Env,
    amount0_out: u128,
    amount1_out: u128,
    to: &Address,
) -> Result<(), PairError> {
    let _lock = PairLock::acquire(env)?;

    if amount0_out == 0 && amount1_out == 0 {
        return Err(PairError::InsufficientOutputAmount);
    }

    let config = get_config(env)?;
    let mut state = get_state(env)?;
    let (reserve0, reserve1) = (state.reserve0, state.reserve1);

    if amount0_out >= reserve0 || amount1_out >= reserve1 {
        return Err(PairError::InsufficientLiquidity);
    }
    if *to == config.token0 || *to == config.token1 {
        return Err(PairError::InvalidTo);
    }

    pay(env, &config.token0, to, amount0_out)?;
    pay(env, &config.token1, to, amount1_out)?;

    let (balance0, balance1) = balances(env, &config)?;
    let amount0_in = balance0.saturating_sub(reserve0 - amount0_out);
    let amount1_in = balance1.saturating_sub(reserve1 - amount1_out);
    if amount0_in == 0 && amount1_in == 0 {
        return Err(PairError::InsufficientInputAmount);
    }

    validate_swap(env, balance0, balance1, amount0_in, amount1_in, reserve0, reserve1)?;

    let before = state.clone();
    sync(env, &mut state, balance0, balance1)?;
    debug_assert!(k_non_decreasing(env, &before, &state));
    commit(env, &state);

    log!(env, "swap", to.clone(), amount0_in, amount1_in, amount0_out, amount1_out);
    Ok(())
}

/// Pay out any balance held above the reserves, leaving reserves as they are
pub fn skim(env: &Env, to: &Address) -> Result<(u128, u128), PairError> {
    let _lock = PairLock::acquire(env)?;

    let config = get_config(env)?;
    let state = get_state(env)?;
    let (balance0, balance1) = balances(env, &config)?;

    let excess0 = balance0.saturating_sub(state.reserve0);
    let excess1 = balance1.saturating_sub(state.reserve1);
    pay(env, &config.token0, to, excess0)?;
    pay(env, &config.token1, to, excess1)?;

    log!(env, "skim", to.clone(), excess0, excess1);
    Ok((excess0, excess1))
}

/// Force the reserves to match the balances held
pub fn force_sync(env: &Env) -> Result<(), PairError> {
    let _lock = PairLock::acquire(env)?;

    let config = get_config(env)?;
    let mut state = get_state(env)?;
    let (balance0, balance1) = balances(env, &config)?;

    sync(env, &mut state, balance0, balance1)?;
    commit(env, &state);

    log!(env, "sync", balance0, balance1);
    Ok(())
}
