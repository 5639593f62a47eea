#![no_std]

pub mod fee_math;
pub mod full_math;
pub mod liquidity_math;
pub mod oracle_math;
pub mod sqrt_math;
pub mod swap_math;

pub use fee_math::*;
pub use full_math::*;
pub use liquidity_math::*;
pub use oracle_math::*;
pub use sqrt_math::*;
pub use swap_math::*;
