#![no_std]

mod error;
mod pair;

pub use error::*;
pub use pair::*;

/// Shares permanently locked by the first deposit.
/// Keeps `total_supply` away from zero for the lifetime of the pair.
pub const MINIMUM_LIQUIDITY: u128 = 1_000;

/// Reserves are bounded to 112 bits so that `reserve0 * reserve1 * 1000^2`
/// and the Q112 price accumulators fit in 256 bits.
pub const MAX_RESERVE: u128 = (1u128 << 112) - 1;

/// Q112 fixed-point scale (2^112) used by the price accumulators
pub const Q112: u128 = 1u128 << 112;

/// Swap fee: the pool keeps `amount_in * (FEE_DENOMINATOR - FEE_NUMERATOR) / FEE_DENOMINATOR`
/// 997 / 1000 = 0.3% fee
pub const FEE_NUMERATOR: u128 = 997;

/// Denominator of the swap fee ratio
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Multiplier applied to `rootK` in the protocol fee denominator.
/// `rootK * 5 + rootKLast` mints 1/6 of the fee growth to the protocol.
pub const PROTOCOL_FEE_DENOMINATOR_FACTOR: u32 = 5;
