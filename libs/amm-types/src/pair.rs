use soroban_sdk::{contracttype, Address, Env, U256};

/// Reserve and supply record of a pair - stored in Instance storage
///
/// Reserves change only through `sync` in the pair contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairState {
    /// Last synchronized balance of token0
    pub reserve0: u128,
    /// Last synchronized balance of token1
    pub reserve1: u128,
    /// Outstanding liquidity shares, including the locked minimum
    pub total_supply: u128,
    /// reserve0 * reserve1 as of the last liquidity event (0 = fee accrual off)
    pub k_last: U256,
    /// Ledger timestamp (mod 2^32) of the last reserve sync
    pub block_timestamp_last: u32,
    /// Sum of Q112 price of token0 (in token1) times seconds elapsed
    pub price0_cumulative_last: U256,
    /// Sum of Q112 price of token1 (in token0) times seconds elapsed
    pub price1_cumulative_last: U256,
}

impl PairState {
    pub fn new(env: &Env) -> Self {
        Self {
            reserve0: 0,
            reserve1: 0,
            total_supply: 0,
            k_last: U256::from_u32(env, 0),
            block_timestamp_last: 0,
            price0_cumulative_last: U256::from_u32(env, 0),
            price1_cumulative_last: U256::from_u32(env, 0),
        }
    }

    /// (reserve0, reserve1, block_timestamp_last)
    pub fn reserves(&self) -> (u128, u128, u32) {
        (self.reserve0, self.reserve1, self.block_timestamp_last)
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn k_last(&self) -> U256 {
        self.k_last.clone()
    }

    /// True once the first deposit has been minted
    pub fn is_funded(&self) -> bool {
        self.total_supply > 0
    }
}

/// Pair configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairConfig {
    /// Address allowed to switch protocol fee accrual on and off
    pub factory: Address,
    /// Token0 address (lower address)
    pub token0: Address,
    /// Token1 address (higher address)
    pub token1: Address,
}
