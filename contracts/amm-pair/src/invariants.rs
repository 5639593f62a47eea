// ============================================================================
// PAIR INVARIANTS
// ============================================================================
//
// Predicates over the pair state that every committed operation preserves.
// `state::commit` debug-asserts the state-only ones and `execute_swap` the
// k predicate; the balance predicate needs token balances and is checked by
// the tests around each flow.
//
// 1. BOUNDS
//    - reserves fit in 112 bits
//
// 2. SUPPLY
//    - a funded pair has at least MINIMUM_LIQUIDITY shares outstanding
//    - a funded pair keeps at least one reserve nonzero
//
// 3. BACKING
//    - reserves never exceed what the pair holds
//    - k never decreases across a swap
//
// ============================================================================

use amm_math::mul_u256;
use amm_types::{PairState, MAX_RESERVE, MINIMUM_LIQUIDITY};
use soroban_sdk::Env;

// ============================================================================
// BOUNDS
// ============================================================================

/// reserve0 <= 2^112 - 1 and reserve1 <= 2^112 - 1
pub fn reserves_in_bounds(state: &PairState) -> bool {
    state.reserve0 <= MAX_RESERVE && state.reserve1 <= MAX_RESERVE
}

// ============================================================================
// SUPPLY
// ============================================================================

/// total_supply == 0 || total_supply >= MINIMUM_LIQUIDITY
///
/// The first deposit locks MINIMUM_LIQUIDITY shares that are never burned.
pub fn minimum_liquidity_locked(state: &PairState) -> bool {
    state.total_supply == 0 || state.total_supply >= MINIMUM_LIQUIDITY
}

/// total_supply > 0 => reserve0 > 0 || reserve1 > 0
///
/// A sync may leave one side empty (e.g. after a clawback); only a funded
/// pair with nothing left on either side is inconsistent.
pub fn reserves_backed_by_supply(state: &PairState) -> bool {
    state.total_supply == 0 || state.reserve0 > 0 || state.reserve1 > 0
}

/// k_last == 0 || k_last <= reserve0 * reserve1
///
/// Holds right after any mint or burn with fee accrual on, and stays true
/// while swaps grow k.
pub fn k_last_bounded(env: &Env, state: &PairState) -> bool {
    let zero = soroban_sdk::U256::from_u32(env, 0);
    state.k_last == zero || state.k_last <= mul_u256(env, state.reserve0, state.reserve1)
}

// ============================================================================
// BACKING
// ============================================================================

/// reserveN <= balanceN
#[cfg_attr(not(test), allow(dead_code))]
pub fn reserves_backed_by_balances(state: &PairState, balance0: u128, balance1: u128) -> bool {
    state.reserve0 <= balance0 && state.reserve1 <= balance1
}

/// reserve0 * reserve1 after a swap >= before
pub fn k_non_decreasing(env: &Env, before: &PairState, after: &PairState) -> bool {
    mul_u256(env, after.reserve0, after.reserve1)
        >= mul_u256(env, before.reserve0, before.reserve1)
}

// ============================================================================
// COMBINED
// ============================================================================

/// All state-only invariants
pub fn state_invariants_hold(env: &Env, state: &PairState) -> bool {
    reserves_in_bounds(state)
        && minimum_liquidity_locked(state)
        && reserves_backed_by_supply(state)
        && k_last_bounded(env, state)
}
