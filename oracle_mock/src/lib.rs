#![no_std]

multiversx_sc::imports!();

/// Spot price source with owner-set quotes.
#[multiversx_sc::contract]
pub trait PriceOracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setAssetPrice)]
    fn set_asset_price(&self, asset: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.asset_price(&asset).set(price);
    }

    /// Price of one whole token in the reference unit, WAD precision. Zero when unknown.
    #[view(getAssetPrice)]
    fn get_asset_price(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.asset_price(&asset).get()
    }

    #[storage_mapper("asset_price")]
    fn asset_price(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;
}
