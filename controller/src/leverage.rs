use common_constants::{BORROW_SAFETY_FACTOR_BPS, LEVERAGE_ROUNDS, SWAP_FACTOR_PRECISION, WAD};
use common_errors::ERROR_LEVERAGE_CONSTRUCTION_FAILED;
use common_structs::{LeverageOutcome, PositionSide};

use crate::{cache::PoolCache, conversion, gateway, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait LeverageModule:
    storage::Storage
    + conversion::PriceConversionModule
    + gateway::GatewayModule
    + common_math::SharedMathModule
{
    /// Turns a quote deposit held by custody into a leveraged collateral position.
    ///
    /// Bull pools first swap the deposit into the base asset, Bear pools already hold collateral.
    /// Each round then supplies the collateral in hand, borrows against the value just supplied
    /// and swaps the loan back into collateral. The last swap output stays liquid in custody.
    ///
    /// # Arguments
    /// - `cache`: Pool context with venues and prices.
    /// - `deposit`: Quote amount already moved into custody.
    /// - `base_price`: Quote units per base unit (WAD) used for slippage bounds.
    /// - `swap_factor`: Minimum accepted output, per mille of the quoted amount.
    ///
    /// # Returns
    /// - `LeverageOutcome`: Collateral obtained and debt borrowed across all rounds.
    ///
    /// # Errors
    /// - `ERROR_LEVERAGE_CONSTRUCTION_FAILED`: If any swap or borrow yields nothing.
    fn build_leverage(
        &self,
        cache: &PoolCache<Self>,
        deposit: &BigUint,
        base_price: &BigUint,
        swap_factor: u64,
    ) -> LeverageOutcome<Self::Api> {
        let mut outcome = LeverageOutcome::default();

        let mut collateral_in_hand = match cache.position.side {
            PositionSide::Bull => self.swap_into_collateral(
                cache,
                cache.position.deposit_asset(),
                deposit,
                base_price,
                swap_factor,
            ),
            PositionSide::Bear => deposit.clone(),
        };
        outcome.add_amount_out(&collateral_in_hand);

        for _ in 0..LEVERAGE_ROUNDS {
            let supplied = self.deposit_collateral(cache, &collateral_in_hand);

            let borrow_amount = self.next_borrow_amount(cache, &supplied);
            let borrowed = self.borrow_debt(cache, &borrow_amount);
            require!(borrowed > 0u64, ERROR_LEVERAGE_CONSTRUCTION_FAILED);
            outcome.add_borrow(&borrowed);

            collateral_in_hand = self.swap_into_collateral(
                cache,
                cache.debt_asset(),
                &borrowed,
                base_price,
                swap_factor,
            );
            outcome.add_amount_out(&collateral_in_hand);
        }

        require!(
            outcome.total_amount_out > 0u64,
            ERROR_LEVERAGE_CONSTRUCTION_FAILED
        );

        outcome
    }

    /// Debt-asset amount to borrow after supplying `supplied` collateral.
    ///
    /// The value of the supplied collateral is scaled by the pool's leverage factor, capped at
    /// the market's available borrows and converted into the debt asset with the safety haircut.
    fn next_borrow_amount(&self, cache: &PoolCache<Self>, supplied: &BigUint) -> BigUint {
        let supplied_value = cache.collateral_value(supplied);
        let target_value =
            self.mul_wad_floor(&supplied_value, &cache.config.amount_per_unit_collateral);

        let account = self.pool_account_data(cache);
        let borrow_value = self.get_min(target_value, account.available_borrows_value);

        let borrow_amount = self.apply_bps_floor(
            &cache.value_in_debt_asset(&borrow_value),
            BORROW_SAFETY_FACTOR_BPS,
        );
        require!(borrow_amount > 0u64, ERROR_LEVERAGE_CONSTRUCTION_FAILED);

        borrow_amount
    }

    fn swap_into_collateral(
        &self,
        cache: &PoolCache<Self>,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
        base_price: &BigUint,
        swap_factor: u64,
    ) -> BigUint {
        let min_out = self.min_amount_out(cache, token_in, amount_in, base_price, swap_factor);
        let amount_out = self.swap_exact_in(
            cache,
            token_in,
            cache.collateral_asset(),
            amount_in,
            &min_out,
        );
        require!(amount_out > 0u64, ERROR_LEVERAGE_CONSTRUCTION_FAILED);

        amount_out
    }

    /// Slippage floor for selling `amount_in` of `token_in`, valued at `base_price`.
    fn min_amount_out(
        &self,
        cache: &PoolCache<Self>,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
        base_price: &BigUint,
        swap_factor: u64,
    ) -> BigUint {
        let bounded = self.mul_div_floor(
            amount_in,
            &BigUint::from(swap_factor),
            &BigUint::from(SWAP_FACTOR_PRECISION),
        );

        if token_in == &cache.position.quote_asset {
            self.mul_div_floor(&bounded, &BigUint::from(WAD), base_price)
        } else {
            self.mul_div_floor(&bounded, base_price, &BigUint::from(WAD))
        }
    }
}
