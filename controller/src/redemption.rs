use common_constants::{REPAY_BUFFER_DENOMINATOR, REPAY_BUFFER_NUMERATOR};
use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDITY, ERROR_NEGATIVE_PROCEEDS, ERROR_REDEMPTION_TOO_SMALL,
};
use common_structs::{RedemptionReceipt, RedemptionShares};

use crate::{cache::PoolCache, conversion, gateway, ledger, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait RedemptionModule:
    storage::Storage
    + conversion::PriceConversionModule
    + gateway::GatewayModule
    + ledger::PositionLedgerModule
    + common_math::SharedMathModule
{
    /// Unwinds `shares` for `caller` and pays the net collateral out of custody.
    ///
    /// The debt share is bought on the venue with liquid collateral, repaid and settled before
    /// the collateral share leaves the lending market. Bridge liquidity joins the liquid balance
    /// for the repayment swap and is returned with the proceeds.
    ///
    /// # Arguments
    /// - `cache`: Pool context with venues and prices.
    /// - `caller`: Redeeming holder.
    /// - `shares`: Claim computed before any mutation of the pool.
    /// - `bridge`: Collateral attached by the caller, possibly zero.
    ///
    /// # Errors
    /// - `ERROR_REDEMPTION_TOO_SMALL`: If the repay ceiling cannot buy the debt share.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`: If the repay ceiling exceeds the liquid collateral.
    /// - `ERROR_NEGATIVE_PROCEEDS`: If the swap spent more than the caller's collateral.
    fn execute_redemption(
        &self,
        cache: &PoolCache<Self>,
        caller: &ManagedAddress,
        shares: &RedemptionShares<Self::Api>,
        bridge: &BigUint,
    ) -> RedemptionReceipt<Self::Api> {
        let collateral_asset = cache.collateral_asset().clone();

        if *bridge > 0u64 {
            self.fund_custody(&cache.pool, &collateral_asset, bridge);
        }

        let mut debt_repaid = BigUint::zero();
        let mut collateral_spent = BigUint::zero();
        if shares.debt_share > 0u64 {
            let ceiling = self.repay_ceiling(cache, shares);
            self.require_ceiling_covers_debt(cache, &ceiling, &shares.debt_share);

            let liquid = self.custody_balance(&cache.pool, &collateral_asset);
            require!(ceiling <= liquid, ERROR_INSUFFICIENT_LIQUIDITY);

            collateral_spent = self.swap_exact_out(
                cache,
                &collateral_asset,
                cache.debt_asset(),
                &ceiling,
                &shares.debt_share,
            );
            debt_repaid = self.repay_debt(cache, &shares.debt_share);
            self.settle_debt(&cache.pool, caller, &debt_repaid);
        }

        let collateral_withdrawn = if shares.collateral_share > 0u64 {
            self.withdraw_collateral(cache, &shares.collateral_share)
        } else {
            BigUint::zero()
        };

        let credited = &shares.liquid_share + bridge + &collateral_withdrawn;
        require!(credited >= collateral_spent, ERROR_NEGATIVE_PROCEEDS);
        let proceeds = credited - &collateral_spent;

        self.burn_tokens(&cache.pool, caller, &shares.quantity);
        self.release_from_custody(&cache.pool, &collateral_asset, caller, &proceeds);

        RedemptionReceipt {
            debt_repaid,
            collateral_spent,
            collateral_withdrawn,
            proceeds: EgldOrEsdtTokenPayment::new(collateral_asset, 0, proceeds),
        }
    }

    /// Most collateral the repayment swap may spend: the quantity's slice of the user's debt
    /// valued at the venue rate, padded by the repay buffer.
    fn repay_ceiling(
        &self,
        cache: &PoolCache<Self>,
        shares: &RedemptionShares<Self::Api>,
    ) -> BigUint {
        let debt_in_collateral = self.quote_amount_out(
            cache,
            cache.debt_asset(),
            cache.collateral_asset(),
            &shares.user_debt,
        );
        let quantity_slice =
            self.mul_div_floor(&shares.quantity, &debt_in_collateral, &shares.user_balance);

        self.mul_div_floor(
            &quantity_slice,
            &BigUint::from(REPAY_BUFFER_NUMERATOR),
            &BigUint::from(REPAY_BUFFER_DENOMINATOR),
        )
    }

    /// Dust quantities floor the ceiling below what the debt share costs on the venue.
    fn require_ceiling_covers_debt(
        &self,
        cache: &PoolCache<Self>,
        ceiling: &BigUint,
        debt_share: &BigUint,
    ) {
        require!(*ceiling > 0u64, ERROR_REDEMPTION_TOO_SMALL);

        let purchasable = self.quote_amount_out(
            cache,
            cache.collateral_asset(),
            cache.debt_asset(),
            ceiling,
        );
        require!(purchasable >= *debt_share, ERROR_REDEMPTION_TOO_SMALL);
    }
}
