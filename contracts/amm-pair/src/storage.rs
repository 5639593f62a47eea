use amm_types::{PairConfig, PairError, PairState};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// Storage layout
// ============================================================================
// - Config, State, FeeTo and the lock flag live in Instance storage: they are
//   read by every entry point and are small.
// - Share balances are one Persistent entry per holder. Zero balances are
//   removed.
// ============================================================================

/// Storage keys for the pair contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pair configuration (Instance storage)
    Config,
    /// Reserves, supply and accumulators (Instance storage)
    State,
    /// Protocol fee recipient; absent = accrual off (Instance storage)
    FeeTo,
    /// Present while a mutating entry point runs (Instance storage)
    Locked,
    /// Liquidity share balance: holder -> u128 (Persistent storage)
    Shares(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PairConfig, PairError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PairError::NotInitialized)
}

pub fn set_config(env: &Env, config: &PairConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<PairState, PairError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(PairError::NotInitialized)
}

pub fn set_state(env: &Env, state: &PairState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Fee recipient ===

pub fn get_fee_to(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::FeeTo)
}

pub fn set_fee_to(env: &Env, fee_to: Option<&Address>) {
    match fee_to {
        Some(fee_to) => env.storage().instance().set(&DataKey::FeeTo, fee_to),
        None => env.storage().instance().remove(&DataKey::FeeTo),
    }
    extend_instance_ttl(env);
}

// === Lock ===

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Locked)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

// === Shares ===

pub fn get_shares(env: &Env, holder: &Address) -> u128 {
    let key = DataKey::Shares(holder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_shares(env: &Env, holder: &Address, amount: u128) {
    let key = DataKey::Shares(holder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}
