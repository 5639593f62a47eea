#![no_std]

mod fee;
mod invariants;
mod liquidity;
mod lock;
mod shares;
mod state;
mod storage;
mod swap;


use amm_types::{PairConfig, PairError, PairState};
use soroban_sdk::{contract, contractimpl, log, Address, Env, U256};
use storage::{get_config, get_fee_to, get_state, has_config, set_config, set_state};

#[contract]
pub struct AmmPair;

#[contractimpl]
impl AmmPair {
    /// Initialize an empty pair for two tokens
    ///
    /// Tokens must be passed in ascending address order. The pair holds no
    /// liquidity until the first `mint`.
    pub fn initialize(
        env: Env,
        factory: Address,
        token0: Address,
        token1: Address,
    ) -> Result<(), PairError> {
        if has_config(&env) {
            return Err(PairError::AlreadyInitialized);
        }
        if token0 >= token1 {
            return Err(PairError::InvalidTokenOrder);
        }

        let config = PairConfig {
            factory,
            token0,
            token1,
        };
        set_config(&env, &config);
        set_state(&env, &PairState::new(&env));
        Ok(())
    }

    /// Mint liquidity shares for the tokens transferred in since the last sync
    ///
    /// # Returns
    /// Shares credited to `to`
    pub fn mint(env: Env, to: Address) -> Result<u128, PairError> {
        liquidity::mint(&env, &to)
    }

    /// Burn `liquidity` shares held by `from` and pay out the underlying tokens
    ///
    /// # Returns
    /// (amount0, amount1) - Token amounts sent to `to`
    pub fn burn(
        env: Env,
        from: Address,
        liquidity: u128,
        to: Address,
    ) -> Result<(u128, u128), PairError> {
        liquidity::burn(&env, &from, liquidity, &to)
    }

    /// Swap tokens already transferred in for the requested outputs
    ///
    /// # Arguments
    /// * `amount0_out` - token0 to send to `to`
    /// * `amount1_out` - token1 to send to `to`
    /// * `to` - Recipient of the outputs; may not be either token
    pub fn swap(
        env: Env,
        amount0_out: u128,
        amount1_out: u128,
        to: Address,
    ) -> Result<(), PairError> {
        swap::execute_swap(&env, amount0_out, amount1_out, &to)
    }

    /// Send balances held above the reserves to `to`
    pub fn skim(env: Env, to: Address) -> Result<(u128, u128), PairError> {
        swap::skim(&env, &to)
    }

    /// Set the reserves to the balances held
    pub fn sync(env: Env) -> Result<(), PairError> {
        swap::force_sync(&env)
    }

    /// Turn protocol fee accrual on (`Some`) or off (`None`)
    pub fn set_fee_to(env: Env, fee_to: Option<Address>) -> Result<(), PairError> {
        let config = get_config(&env)?;
        config.factory.require_auth();

        storage::set_fee_to(&env, fee_to.as_ref());
        log!(&env, "set_fee_to", fee_to);
        Ok(())
    }

    // === View Functions ===

    pub fn fee_to(env: Env) -> Option<Address> {
        get_fee_to(&env)
    }

    /// (reserve0, reserve1, block_timestamp_last)
    pub fn get_reserves(env: Env) -> Result<(u128, u128, u32), PairError> {
        Ok(get_state(&env)?.reserves())
    }

    pub fn total_supply(env: Env) -> Result<u128, PairError> {
        Ok(get_state(&env)?.total_supply())
    }

    pub fn k_last(env: Env) -> Result<U256, PairError> {
        Ok(get_state(&env)?.k_last())
    }

    /// Liquidity shares held by `id`
    pub fn balance_of(env: Env, id: Address) -> u128 {
        shares::balance_of(&env, &id)
    }

    pub fn price0_cumulative_last(env: Env) -> Result<U256, PairError> {
        Ok(get_state(&env)?.price0_cumulative_last)
    }

    pub fn price1_cumulative_last(env: Env) -> Result<U256, PairError> {
        Ok(get_state(&env)?.price1_cumulative_last)
    }

    /// Output for an exact input against the given reserves
    pub fn quote(
        env: Env,
        amount_in: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, PairError> {
        amm_math::get_amount_out(&env, amount_in, reserve_in, reserve_out)
    }

    /// Input required for an exact output against the given reserves
    pub fn get_amount_in(
        env: Env,
        amount_out: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, PairError> {
        amm_math::get_amount_in(&env, amount_out, reserve_in, reserve_out)
    }

    pub fn get_state(env: Env) -> Result<PairState, PairError> {
        get_state(&env)
    }

    pub fn get_config(env: Env) -> Result<PairConfig, PairError> {
        get_config(&env)
    }

    pub fn token0(env: Env) -> Result<Address, PairError> {
        Ok(get_config(&env)?.token0)
    }

    pub fn token1(env: Env) -> Result<Address, PairError> {
        Ok(get_config(&env)?.token1)
    }
}
