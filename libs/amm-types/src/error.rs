use soroban_sdk::contracterror;

/// Errors returned by the pair contract and the math library.
///
/// Every variant is a local, non-retryable rejection: the operation that
/// produced it leaves the pair state unchanged.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    /// `initialize` called on a pair that already has a config
    AlreadyInitialized = 1,
    /// Pair config or state read before `initialize`
    NotInitialized = 2,
    /// token0 must sort strictly before token1
    InvalidTokenOrder = 3,
    InsufficientInputAmount = 4,
    InsufficientOutputAmount = 5,
    InsufficientLiquidity = 6,
    InsufficientLiquidityMinted = 7,
    InsufficientLiquidityBurned = 8,
    /// Fee-adjusted constant product decreased
    K = 9,
    /// Checked arithmetic failed or a reserve exceeds 112 bits
    Overflow = 10,
    /// Reentrant call while the pair lock is held
    Locked = 11,
    /// Swap recipient is one of the pair's own tokens
    InvalidTo = 12,
    /// Burn amount exceeds the holder's share balance
    InsufficientBalance = 13,
}
