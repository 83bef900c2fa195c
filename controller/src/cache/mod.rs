use common_errors::{ERROR_POOL_NOT_CONFIGURED, ERROR_POOL_NOT_FOUND};
use common_structs::{ModuleConfig, PoolPosition, PriceIndex, PriceVector};

multiversx_sc::imports!();

/// Everything an issue or redeem needs to know about one pool, read once per call.
///
/// Oracle prices are fetched when the cache is built, so every conversion inside a single
/// operation uses the same price vector.
pub struct PoolCache<'a, C>
where
    C: crate::storage::Storage + crate::conversion::PriceConversionModule,
{
    sc_ref: &'a C,

    pub pool: ManagedAddress<C::Api>,
    pub position: PoolPosition<C::Api>,
    pub config: ModuleConfig<C::Api>,
    pub prices: PriceVector<C::Api>,
}

impl<'a, C> PoolCache<'a, C>
where
    C: crate::storage::Storage + crate::conversion::PriceConversionModule,
{
    pub fn new(sc_ref: &'a C, pool: &ManagedAddress<C::Api>) -> Self {
        if !(sc_ref.pools().contains(pool)) {
            multiversx_sc::contract_base::ErrorHelper::<C::Api>::signal_error_with_message(ERROR_POOL_NOT_FOUND);
        }

        let config_mapper = sc_ref.pool_config(pool);
        if !(!config_mapper.is_empty()) {
            multiversx_sc::contract_base::ErrorHelper::<C::Api>::signal_error_with_message(ERROR_POOL_NOT_CONFIGURED);
        }

        let position = sc_ref.pool_position(pool).get();
        let config = config_mapper.get();
        let prices = sc_ref.fetch_price_vector(&config.price_oracle, &position);

        PoolCache {
            sc_ref,
            pool: pool.clone(),
            position,
            config,
            prices,
        }
    }

    pub fn collateral_asset(&self) -> &EgldOrEsdtTokenIdentifier<C::Api> {
        self.position.collateral_asset()
    }

    pub fn debt_asset(&self) -> &EgldOrEsdtTokenIdentifier<C::Api> {
        self.position.debt_asset()
    }

    /// Value of a collateral amount in the reference unit.
    pub fn collateral_value(&self, amount: &BigUint<C::Api>) -> BigUint<C::Api> {
        self.sc_ref.convert(
            amount,
            PriceIndex::Collateral,
            PriceIndex::Reference,
            &self.prices,
        )
    }

    /// Debt-asset amount worth `value` reference units.
    pub fn value_in_debt_asset(&self, value: &BigUint<C::Api>) -> BigUint<C::Api> {
        self.sc_ref
            .convert(value, PriceIndex::Reference, PriceIndex::Debt, &self.prices)
    }
}
