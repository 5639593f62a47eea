use crate::storage::{get_shares, set_shares};
use amm_math::{checked_add, checked_sub};
use amm_types::PairError;
use soroban_sdk::{Address, Env};

// Liquidity share ledger. The pair tracks who owns its shares; shares are
// created by mint and protocol fee accrual and destroyed by burn. The sum of
// all balances equals `PairState::total_supply`.

pub fn balance_of(env: &Env, holder: &Address) -> u128 {
    get_shares(env, holder)
}

pub fn credit(env: &Env, holder: &Address, amount: u128) -> Result<(), PairError> {
    if amount == 0 {
        return Ok(());
    }
    let balance = checked_add(get_shares(env, holder), amount)?;
    set_shares(env, holder, balance);
    Ok(())
}

pub fn debit(env: &Env, holder: &Address, amount: u128) -> Result<(), PairError> {
    let balance =
        checked_sub(get_shares(env, holder), amount).map_err(|_| PairError::InsufficientBalance)?;
    set_shares(env, holder, balance);
    Ok(())
}
