use crate::storage::{is_locked, set_locked};
use amm_types::PairError;
use soroban_sdk::Env;

/// Exclusive guard over the pair state
///
/// Every mutating entry point holds one for its whole body. The flag lives
/// in this pair's instance storage and is cleared when the guard drops, on
/// success and on every early `?` return.
pub struct PairLock<'a> {
    env: &'a Env,
}

impl<'a> PairLock<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, PairError> {
        if is_locked(env) {
            return Err(PairError::Locked);
        }
        set_locked(env, true);
        Ok(Self { env })
    }
}

impl Drop for PairLock<'_> {
    fn drop(&mut self) {
        set_locked(self.env, false);
    }
}
