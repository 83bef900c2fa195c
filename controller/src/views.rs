use common_structs::{
    AccountData, PooledPosition, PriceVector, RedeemQuantity, RedemptionShares, UserPosition,
};

use crate::{cache::PoolCache, conversion, gateway, ledger, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + conversion::PriceConversionModule
    + gateway::GatewayModule
    + ledger::PositionLedgerModule
    + common_math::SharedMathModule
{
    /// Live totals of a configured pool.
    #[view(getPooledPosition)]
    fn get_pooled_position(&self, pool: ManagedAddress) -> PooledPosition<Self::Api> {
        let cache = PoolCache::new(self, &pool);
        self.pooled_position(&cache)
    }

    /// Token balance and recorded debt of `user` in `pool`.
    #[view(getUserPosition)]
    fn get_user_position(
        &self,
        pool: ManagedAddress,
        user: ManagedAddress,
    ) -> UserPosition<Self::Api> {
        self.require_pool_exists(&pool);
        self.user_position(&pool, &user)
    }

    /// Shares a redemption of `quantity` by `user` would unwind at current pool totals.
    #[view(previewRedeem)]
    fn preview_redeem(
        &self,
        pool: ManagedAddress,
        user: ManagedAddress,
        quantity: RedeemQuantity<Self::Api>,
    ) -> RedemptionShares<Self::Api> {
        let cache = PoolCache::new(self, &pool);
        let pooled = self.pooled_position(&cache);
        self.compute_shares(&pool, &user, &quantity, &pooled)
    }

    #[view(getPriceVector)]
    fn get_price_vector(&self, pool: ManagedAddress) -> PriceVector<Self::Api> {
        PoolCache::new(self, &pool).prices
    }

    /// The pool's account summary at its lending market.
    #[view(getPoolAccountData)]
    fn get_pool_account_data(&self, pool: ManagedAddress) -> AccountData<Self::Api> {
        let cache = PoolCache::new(self, &pool);
        self.pool_account_data(&cache)
    }
}
