#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod conversion;
pub mod factory;
pub mod gateway;
pub mod ledger;
pub mod leverage;
pub mod redemption;
pub mod storage;
pub mod validation;
pub mod views;

use cache::PoolCache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait LeverageController:
    config::ConfigModule
    + factory::FactoryModule
    + storage::Storage
    + validation::ValidationModule
    + conversion::PriceConversionModule
    + gateway::GatewayModule
    + ledger::PositionLedgerModule
    + leverage::LeverageModule
    + redemption::RedemptionModule
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the controller.
    ///
    /// # Arguments
    /// - `leveraged_token_template`: Deployed leveraged token contract whose code every new pool
    ///   is created from.
    #[init]
    fn init(&self, leveraged_token_template: ManagedAddress) {
        self.leveraged_token_template()
            .set(&leveraged_token_template);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Deposits the attached quote asset, builds leverage and mints pool tokens.
    ///
    /// # Arguments
    /// - `pool`: Leveraged token contract of the pool.
    /// - `base_price`: Quote units per base unit (WAD) used to bound every swap.
    /// - `swap_factor`: Minimum accepted swap output, per mille of the amount valued at
    ///   `base_price`.
    ///
    /// # Payment
    /// - The pool's quote asset. The payment amount is the issued quantity.
    ///
    /// # Returns
    /// - `BigUint`: Leveraged tokens minted to the caller.
    #[payable]
    #[endpoint(issue)]
    fn issue(&self, pool: ManagedAddress, base_price: BigUint, swap_factor: u64) -> BigUint {
        self.require_not_paused();
        self.validate_issue_params(&base_price, swap_factor);

        let cache = PoolCache::new(self, &pool);
        self.reentrancy_guard(&pool);
        let deposit = self.validate_deposit_payment(&cache.position);
        let caller = self.blockchain().get_caller();

        let pooled = self.pooled_position(&cache);

        self.fund_custody(&pool, cache.position.deposit_asset(), &deposit);
        let outcome = self.build_leverage(&cache, &deposit, &base_price, swap_factor);

        // First issuance sets one token per collateral unit, later ones mint pro rata
        let minted = if pooled.total_supply == 0u64 {
            outcome.total_amount_out.clone()
        } else {
            self.mul_div_floor(
                &outcome.total_amount_out,
                &pooled.total_supply,
                &(&pooled.total_collateral + &pooled.liquid_balance),
            )
        };
        require!(minted > 0u64, ERROR_LEVERAGE_CONSTRUCTION_FAILED);

        self.record_debt(&pool, &caller, &outcome.total_borrow_amount);
        self.mint_tokens(&pool, &caller, &minted);

        self.issue_event(&pool, &caller, &deposit, &minted, &outcome);
        self.release_guard(&pool);

        minted
    }

    /// Unwinds the caller's share, optionally bridged by an attached collateral payment.
    ///
    /// # Arguments
    /// - `pool`: Leveraged token contract of the pool.
    /// - `quantity`: Tokens to redeem, an exact amount or the entire balance.
    ///
    /// # Payment
    /// - Optional bridge liquidity in the pool's collateral asset, returned with the proceeds.
    ///
    /// # Returns
    /// - `RedemptionReceipt`: Debt repaid, collateral moved and the payment sent to the caller.
    #[payable]
    #[endpoint(redeem)]
    fn redeem(
        &self,
        pool: ManagedAddress,
        quantity: RedeemQuantity<Self::Api>,
    ) -> RedemptionReceipt<Self::Api> {
        self.require_not_paused();

        let cache = PoolCache::new(self, &pool);
        self.reentrancy_guard(&pool);
        let bridge = self.validate_bridge_payment(&cache.position);
        let caller = self.blockchain().get_caller();

        let pooled = self.pooled_position(&cache);
        let shares = self.compute_shares(&pool, &caller, &quantity, &pooled);

        let receipt = self.execute_redemption(&cache, &caller, &shares, &bridge);

        self.redeem_event(&pool, &caller, &shares, &receipt);
        self.release_guard(&pool);

        receipt
    }
}
