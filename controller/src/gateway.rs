use common_proxies::{proxy_leveraged_token, proxy_lending_market, proxy_swap_router};
use common_structs::AccountData;

use crate::{cache::PoolCache, conversion, storage};

multiversx_sc::imports!();

/// Typed access to the venues of a pool.
///
/// Write operations go through the pool's custody contract, which owns the lending position and
/// holds the liquid balance. Reads query the venues directly.
#[multiversx_sc::module]
pub trait GatewayModule:
    storage::Storage + conversion::PriceConversionModule + common_math::SharedMathModule
{
    /// Sells exactly `amount_in` of `token_in`, requiring at least `min_out` of `token_out`.
    ///
    /// # Returns
    /// - `BigUint`: The amount of `token_out` received by custody.
    fn swap_exact_in(
        &self,
        cache: &PoolCache<Self>,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
        min_out: &BigUint,
    ) -> BigUint {
        let deadline = self.blockchain().get_block_timestamp();

        self.tx()
            .to(&cache.pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .swap_exact_in(
                &cache.config.swap_venue,
                token_in,
                token_out,
                amount_in,
                min_out,
                deadline,
            )
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Buys exactly `amount_out` of `token_out`, spending at most `amount_in_max`.
    ///
    /// # Returns
    /// - `BigUint`: The amount of `token_in` actually spent by custody.
    fn swap_exact_out(
        &self,
        cache: &PoolCache<Self>,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
        amount_in_max: &BigUint,
        amount_out: &BigUint,
    ) -> BigUint {
        let deadline = self.blockchain().get_block_timestamp();

        self.tx()
            .to(&cache.pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .swap_exact_out(
                &cache.config.swap_venue,
                token_in,
                token_out,
                amount_in_max,
                amount_out,
                deadline,
            )
            .returns(ReturnsResult)
            .sync_call()
    }

    fn deposit_collateral(&self, cache: &PoolCache<Self>, amount: &BigUint) -> BigUint {
        self.tx()
            .to(&cache.pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .supply_collateral(&cache.config.lending_market, cache.collateral_asset(), amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn borrow_debt(&self, cache: &PoolCache<Self>, amount: &BigUint) -> BigUint {
        self.tx()
            .to(&cache.pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .borrow(&cache.config.lending_market, cache.debt_asset(), amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn withdraw_collateral(&self, cache: &PoolCache<Self>, amount: &BigUint) -> BigUint {
        self.tx()
            .to(&cache.pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .withdraw_collateral(&cache.config.lending_market, cache.collateral_asset(), amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn repay_debt(&self, cache: &PoolCache<Self>, amount: &BigUint) -> BigUint {
        self.tx()
            .to(&cache.pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .repay_debt(&cache.config.lending_market, cache.debt_asset(), amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Venue quote for selling `amount` of `from` into `to`.
    fn quote_amount_out(
        &self,
        cache: &PoolCache<Self>,
        from: &EgldOrEsdtTokenIdentifier,
        to: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        let mut path = MultiValueEncoded::new();
        path.push(from.clone());
        path.push(to.clone());

        let amounts = self
            .tx()
            .to(&cache.config.swap_venue)
            .typed(proxy_swap_router::SwapRouterMockProxy)
            .get_amounts_out(amount, path)
            .returns(ReturnsResult)
            .sync_call_readonly();

        amounts.into_iter().last().unwrap_or_default()
    }

    fn pool_account_data(&self, cache: &PoolCache<Self>) -> AccountData<Self::Api> {
        self.tx()
            .to(&cache.config.lending_market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .get_user_account_data(&cache.pool)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Collateral held by the pool at the lending market.
    fn market_collateral(&self, cache: &PoolCache<Self>) -> BigUint {
        self.tx()
            .to(&cache.config.lending_market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .deposit_of(&cache.pool, cache.collateral_asset())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Debt owed by the pool at the lending market.
    fn market_debt(&self, cache: &PoolCache<Self>) -> BigUint {
        self.tx()
            .to(&cache.config.lending_market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .debt_of(&cache.pool, cache.debt_asset())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
