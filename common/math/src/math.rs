#![no_std]

use common_constants::{BPS, WAD, WAD_PRECISION};
use common_errors::ERROR_DIVISION_BY_ZERO;

multiversx_sc::imports!();

/// Fixed-point helpers shared by every contract of the workspace.
///
/// All helpers round toward zero. Amounts are raw token units, ratios and prices are WAD.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / denominator`, floored. The product is computed at full width before dividing.
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        require!(*denominator > 0u64, ERROR_DIVISION_BY_ZERO);

        (a * b) / denominator
    }

    /// Scales `amount` by `bps / 10_000`, floored.
    fn apply_bps_floor(&self, amount: &BigUint, bps: u64) -> BigUint {
        self.mul_div_floor(amount, &BigUint::from(bps), &BigUint::from(BPS))
    }

    /// Scales `amount` by a WAD fraction, floored.
    fn mul_wad_floor(
        &self,
        amount: &BigUint,
        fraction: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let fraction = fraction.rescale(WAD_PRECISION);
        self.mul_div_floor(amount, fraction.into_raw_units(), &BigUint::from(WAD))
    }

    fn get_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
