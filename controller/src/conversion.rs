use common_constants::WAD;
use common_errors::ERROR_DIVISION_BY_ZERO;
use common_proxies::proxy_price_oracle;
use common_structs::{PoolPosition, PriceIndex, PriceVector};

multiversx_sc::imports!();

/// Price vector construction and amount conversion between the assets of a pool.
#[multiversx_sc::module]
pub trait PriceConversionModule: common_math::SharedMathModule {
    /// Converts `amount` priced at `prices[from]` into units priced at `prices[to]`.
    ///
    /// # Arguments
    /// - `amount`: Amount expressed in the `from` unit.
    /// - `from`: Price index of the input unit.
    /// - `to`: Price index of the output unit.
    /// - `prices`: Prices of the pool assets in the reference unit.
    ///
    /// # Returns
    /// - `BigUint`: `amount * prices[from] / prices[to]`, floored.
    ///
    /// # Errors
    /// - `ERROR_DIVISION_BY_ZERO`: If the target price is zero.
    fn convert(
        &self,
        amount: &BigUint,
        from: PriceIndex,
        to: PriceIndex,
        prices: &PriceVector<Self::Api>,
    ) -> BigUint {
        let to_price = prices.get(to);
        require!(*to_price > 0u64, ERROR_DIVISION_BY_ZERO);

        self.mul_div_floor(amount, prices.get(from), to_price)
    }

    /// Reads the collateral and debt prices of a pool from its oracle.
    ///
    /// The reference entry is always one WAD. Missing prices are left at zero and only fail
    /// once a conversion divides by them.
    fn fetch_price_vector(
        &self,
        price_oracle: &ManagedAddress,
        position: &PoolPosition<Self::Api>,
    ) -> PriceVector<Self::Api> {
        PriceVector {
            reference: BigUint::from(WAD),
            collateral: self.asset_price(price_oracle, position.collateral_asset()),
            debt: self.asset_price(price_oracle, position.debt_asset()),
        }
    }

    fn asset_price(
        &self,
        price_oracle: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        self.tx()
            .to(price_oracle)
            .typed(proxy_price_oracle::PriceOracleMockProxy)
            .get_asset_price(asset)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
