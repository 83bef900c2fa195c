#![no_std]

/// One unit in 18-decimal fixed point. Prices and ratios share this scale.
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: u64 = 10_000; // 100%

/// Swap factors are expressed per mille, 1000 means the full quoted output is required.
pub const SWAP_FACTOR_PRECISION: u64 = 1_000;

/// Number of deposit -> borrow -> swap rounds performed on every issuance.
pub const LEVERAGE_ROUNDS: usize = 2;

/// Borrow at 99.9% of the computed headroom so the lending market never sits on its own limit.
pub const BORROW_SAFETY_FACTOR_BPS: u64 = 9_990;

/// Repayment swaps may spend up to 100/90 of the debt share valued at the current venue rate.
pub const REPAY_BUFFER_NUMERATOR: u64 = 100;
pub const REPAY_BUFFER_DENOMINATOR: u64 = 90;

