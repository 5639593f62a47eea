use crate::fee::{record_k_last, settle};
use crate::lock::PairLock;
use crate::shares::{balance_of, credit, debit};
use crate::state::{balances, commit, pay, sync};
use crate::storage::{get_config, get_fee_to, get_state};
use amm_math::{burn_amounts, checked_add, checked_sub, mint_liquidity};
use amm_types::{PairError, MINIMUM_LIQUIDITY};
use soroban_sdk::{log, Address, Env};

/// Mint shares to `to` for whatever was transferred in since the last sync
///
/// The deposit is `balance - reserve` of each token. On the first deposit
/// MINIMUM_LIQUIDITY shares are credited to the pair itself and can never be
/// redeemed.
pub fn mint(env: &Env, to: &Address) -> Result<u128, PairError> {
    let _lock = PairLock::acquire(env)?;

    let config = get_config(env)?;
    let mut state = get_state(env)?;
    let (balance0, balance1) = balances(env, &config)?;
    let amount0 = balance0.saturating_sub(state.reserve0);
    let amount1 = balance1.saturating_sub(state.reserve1);

    let fee_to = get_fee_to(env);
    let fee_on = fee_to.is_some();
    let fee_shares = settle(env, &mut state, fee_on)?;

    let first_deposit = state.total_supply == 0;
    let liquidity = mint_liquidity(
        env,
        amount0,
        amount1,
        state.reserve0,
        state.reserve1,
        state.total_supply,
    )?;
    if first_deposit {
        state.total_supply = MINIMUM_LIQUIDITY;
    }
    state.total_supply = checked_add(state.total_supply, liquidity)?;

    sync(env, &mut state, balance0, balance1)?;
    record_k_last(env, &mut state, fee_on);

    if let (Some(fee_to), Some(shares)) = (&fee_to, fee_shares) {
        credit(env, fee_to, shares)?;
    }
    if first_deposit {
        credit(env, &env.current_contract_address(), MINIMUM_LIQUIDITY)?;
    }
    credit(env, to, liquidity)?;
    commit(env, &state);

    log!(env, "mint", to.clone(), amount0, amount1, liquidity);
    Ok(liquidity)
}

/// Burn `liquidity` of `from`'s shares and pay the pro-rata tokens to `to`
///
/// Amounts are computed on the balances the pair holds, so tokens donated
/// since the last sync are shared by the burners.
pub fn burn(
    env: &Env,
    from: &Address,
    liquidity: u128,
    to: &Address,
) -> Result<(u128, u128), PairError> {
    from.require_auth();
    let _lock = PairLock::acquire(env)?;

    let config = get_config(env)?;
    let mut state = get_state(env)?;

    // The locked minimum belongs to the pair and is never redeemable
    if *from == env.current_contract_address() {
        return Err(PairError::InsufficientBalance);
    }
    if balance_of(env, from) < liquidity {
        return Err(PairError::InsufficientBalance);
    }

    let (balance0, balance1) = balances(env, &config)?;

    let fee_to = get_fee_to(env);
    let fee_on = fee_to.is_some();
    let fee_shares = settle(env, &mut state, fee_on)?;

    let (amount0, amount1) = burn_amounts(env, liquidity, balance0, balance1, state.total_supply)?;
    state.total_supply = checked_sub(state.total_supply, liquidity)?;

    pay(env, &config.token0, to, amount0)?;
    pay(env, &config.token1, to, amount1)?;

    let (balance0, balance1) = balances(env, &config)?;
    sync(env, &mut state, balance0, balance1)?;
    record_k_last(env, &mut state, fee_on);

    if let (Some(fee_to), Some(shares)) = (&fee_to, fee_shares) {
        credit(env, fee_to, shares)?;
    }
    debit(env, from, liquidity)?;
    commit(env, &state);

    log!(env, "burn", from.clone(), to.clone(), amount0, amount1, liquidity);
    Ok((amount0, amount1))
}
