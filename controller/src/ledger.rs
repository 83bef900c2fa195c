use common_errors::{ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_BALANCE};
use common_proxies::proxy_leveraged_token;
use common_structs::{PooledPosition, RedeemQuantity, RedemptionShares, UserPosition};

use crate::{cache::PoolCache, conversion, gateway, storage};

multiversx_sc::imports!();

/// Per-user debt records and token balances, kept on the pool's leveraged token contract.
///
/// The sum of all debt records of a pool tracks the pool's debt at the lending market: debt is
/// recorded with the amount actually borrowed and settled with the amount actually repaid.
#[multiversx_sc::module]
pub trait PositionLedgerModule:
    storage::Storage
    + conversion::PriceConversionModule
    + gateway::GatewayModule
    + common_math::SharedMathModule
{
    fn record_debt(&self, pool: &ManagedAddress, user: &ManagedAddress, amount: &BigUint) {
        self.tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .add_debt(user, amount)
            .sync_call();
    }

    /// Reduces the user's debt record by `repaid`. The ledger rejects any amount above the record.
    fn settle_debt(&self, pool: &ManagedAddress, user: &ManagedAddress, repaid: &BigUint) {
        self.tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .pay_debt(user, repaid)
            .sync_call();
    }

    /// Maps a redemption quantity to the user's claim on the pool.
    ///
    /// # Arguments
    /// - `pool`: Leveraged token contract of the pool.
    /// - `user`: Holder being redeemed.
    /// - `quantity`: Exact amount or the entire balance.
    /// - `pooled`: Pool totals measured before any mutation.
    ///
    /// # Returns
    /// - `RedemptionShares`: Floored collateral, liquid and debt shares of the quantity.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: If the resolved quantity is zero.
    /// - `ERROR_INSUFFICIENT_BALANCE`: If the quantity exceeds the user's balance.
    fn compute_shares(
        &self,
        pool: &ManagedAddress,
        user: &ManagedAddress,
        quantity: &RedeemQuantity<Self::Api>,
        pooled: &PooledPosition<Self::Api>,
    ) -> RedemptionShares<Self::Api> {
        let user_position = self.user_position(pool, user);
        let quantity = quantity.resolve(&user_position.balance);
        require!(quantity > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(
            quantity <= user_position.balance,
            ERROR_INSUFFICIENT_BALANCE
        );

        let collateral_share =
            self.mul_div_floor(&quantity, &pooled.total_collateral, &pooled.total_supply);
        let liquid_share =
            self.mul_div_floor(&quantity, &pooled.liquid_balance, &pooled.total_supply);
        let debt_share =
            self.mul_div_floor(&quantity, &user_position.debt, &user_position.balance);

        RedemptionShares {
            quantity,
            user_balance: user_position.balance,
            user_debt: user_position.debt,
            collateral_share,
            liquid_share,
            debt_share,
        }
    }

    /// Live totals of a pool across the lending market, the ledger and custody.
    fn pooled_position(&self, cache: &PoolCache<Self>) -> PooledPosition<Self::Api> {
        PooledPosition {
            total_collateral: self.market_collateral(cache),
            total_debt: self.market_debt(cache),
            total_supply: self.ledger_total_supply(&cache.pool),
            liquid_balance: self.custody_balance(&cache.pool, cache.collateral_asset()),
        }
    }

    fn user_position(
        &self,
        pool: &ManagedAddress,
        user: &ManagedAddress,
    ) -> UserPosition<Self::Api> {
        let balance = self
            .tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .balance_of(user)
            .returns(ReturnsResult)
            .sync_call_readonly();
        let debt = self
            .tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .debt(user)
            .returns(ReturnsResult)
            .sync_call_readonly();

        UserPosition { balance, debt }
    }

    fn ledger_total_supply(&self, pool: &ManagedAddress) -> BigUint {
        self.tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn custody_balance(
        &self,
        pool: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        self.tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .liquid_balance(asset)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn mint_tokens(&self, pool: &ManagedAddress, user: &ManagedAddress, amount: &BigUint) {
        self.tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .mint(user, amount)
            .sync_call();
    }

    fn burn_tokens(&self, pool: &ManagedAddress, user: &ManagedAddress, amount: &BigUint) {
        self.tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .burn(user, amount)
            .sync_call();
    }

    /// Moves funds held by this contract into the pool's custody.
    fn fund_custody(
        &self,
        pool: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .receive_funds()
            .egld_or_single_esdt(asset, 0, amount)
            .sync_call();
    }

    fn release_from_custody(
        &self,
        pool: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        to: &ManagedAddress,
        amount: &BigUint,
    ) {
        self.tx()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .transfer_asset(asset, to, amount)
            .sync_call();
    }
}
