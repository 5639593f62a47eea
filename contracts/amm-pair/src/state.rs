use crate::invariants::state_invariants_hold;
use crate::storage::set_state;
use amm_math::accumulate_price;
use amm_types::{PairConfig, PairError, PairState, MAX_RESERVE};
use soroban_sdk::{token, Address, Env};

/// Balances the pair holds right now, as reported by the token contracts
pub fn balances(env: &Env, config: &PairConfig) -> Result<(u128, u128), PairError> {
    let this = env.current_contract_address();
    let balance0 = token::Client::new(env, &config.token0).balance(&this);
    let balance1 = token::Client::new(env, &config.token1).balance(&this);
    Ok((from_token_amount(balance0)?, from_token_amount(balance1)?))
}

/// Send `amount` of `token` from the pair to `to`
pub fn pay(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), PairError> {
    if amount == 0 {
        return Ok(());
    }
    let amount = to_token_amount(amount)?;
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

fn from_token_amount(amount: i128) -> Result<u128, PairError> {
    u128::try_from(amount).map_err(|_| PairError::Overflow)
}

fn to_token_amount(amount: u128) -> Result<i128, PairError> {
    i128::try_from(amount).map_err(|_| PairError::Overflow)
}

/// Overwrite the reserves with settled balances
///
/// Advances both price accumulators by the time elapsed since the last
/// sync, priced at the reserves that held during that time. This is the
/// only place reserves are written.
pub fn sync(
    env: &Env,
    state: &mut PairState,
    balance0: u128,
    balance1: u128,
) -> Result<(), PairError> {
    if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
        return Err(PairError::Overflow);
    }

    // Truncation keeps the timestamp mod 2^32; elapsed wraps accordingly
    let block_timestamp = env.ledger().timestamp() as u32;
    let elapsed = block_timestamp.wrapping_sub(state.block_timestamp_last);

    if elapsed > 0 && state.reserve0 != 0 && state.reserve1 != 0 {
        state.price0_cumulative_last = accumulate_price(
            env,
            &state.price0_cumulative_last,
            state.reserve1,
            state.reserve0,
            elapsed,
        )?;
        state.price1_cumulative_last = accumulate_price(
            env,
            &state.price1_cumulative_last,
            state.reserve0,
            state.reserve1,
            elapsed,
        )?;
    }

    state.reserve0 = balance0;
    state.reserve1 = balance1;
    state.block_timestamp_last = block_timestamp;
    Ok(())
}

/// Write the state back once every check of the operation has passed
pub fn commit(env: &Env, state: &PairState) {
    debug_assert!(state_invariants_hold(env, state));
    set_state(env, state);
}
