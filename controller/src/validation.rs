use common_constants::{SWAP_FACTOR_PRECISION, WAD, WAD_PRECISION};
use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INVALID_BASE_PRICE,
    ERROR_INVALID_LEVERAGE_FACTOR, ERROR_INVALID_PAYMENT_TOKEN, ERROR_INVALID_SWAP_FACTOR,
    ERROR_INVALID_VENUE_ADDRESS, ERROR_ONLY_POOL_MANAGER, ERROR_OPERATION_ONGOING,
    ERROR_POOL_NOT_FOUND,
};
use common_structs::{ModuleConfig, PoolPosition};

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    fn require_pool_exists(&self, pool: &ManagedAddress) {
        require!(self.pools().contains(pool), ERROR_POOL_NOT_FOUND);
    }

    fn require_pool_manager(&self, pool: &ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            self.pool_manager(pool).get() == caller,
            ERROR_ONLY_POOL_MANAGER
        );
    }

    /// Marks the pool busy for the rest of the call.
    ///
    /// # Errors
    /// - `ERROR_OPERATION_ONGOING`: If another issue or redeem already holds the pool.
    fn reentrancy_guard(&self, pool: &ManagedAddress) {
        let ongoing = self.pool_operation_ongoing(pool);
        require!(!ongoing.get(), ERROR_OPERATION_ONGOING);
        ongoing.set(true);
    }

    fn release_guard(&self, pool: &ManagedAddress) {
        self.pool_operation_ongoing(pool).clear();
    }

    /// # Errors
    /// - `ERROR_INVALID_BASE_PRICE`: If `base_price` is zero.
    /// - `ERROR_INVALID_SWAP_FACTOR`: If `swap_factor` is outside (0, 1000].
    fn validate_issue_params(&self, base_price: &BigUint, swap_factor: u64) {
        require!(*base_price > 0u64, ERROR_INVALID_BASE_PRICE);
        require!(
            swap_factor > 0 && swap_factor <= SWAP_FACTOR_PRECISION,
            ERROR_INVALID_SWAP_FACTOR
        );
    }

    /// Returns the deposited quote amount.
    fn validate_deposit_payment(&self, position: &PoolPosition<Self::Api>) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            &payment.token_identifier == position.deposit_asset(),
            ERROR_INVALID_PAYMENT_TOKEN
        );
        require!(
            payment.amount > 0u64,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        payment.amount
    }

    /// Returns the attached bridge liquidity, zero when nothing was paid.
    fn validate_bridge_payment(&self, position: &PoolPosition<Self::Api>) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        if payment.amount == 0u64 {
            return BigUint::zero();
        }
        require!(
            &payment.token_identifier == position.collateral_asset(),
            ERROR_INVALID_PAYMENT_TOKEN
        );

        payment.amount
    }

    /// # Errors
    /// - `ERROR_INVALID_LEVERAGE_FACTOR`: If the factor is zero or above one.
    /// - `ERROR_ADDRESS_IS_ZERO`: If a venue address is zero.
    /// - `ERROR_INVALID_VENUE_ADDRESS`: If a venue address is not a smart contract.
    fn validate_module_config(&self, config: &ModuleConfig<Self::Api>) {
        let factor = config
            .amount_per_unit_collateral
            .clone()
            .rescale(WAD_PRECISION);
        let raw_factor = factor.into_raw_units();
        require!(
            *raw_factor > 0u64 && *raw_factor <= BigUint::from(WAD),
            ERROR_INVALID_LEVERAGE_FACTOR
        );

        self.require_venue_address(&config.lending_market);
        self.require_venue_address(&config.swap_venue);
        self.require_venue_address(&config.price_oracle);
    }

    fn require_venue_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(
            self.blockchain().is_smart_contract(address),
            ERROR_INVALID_VENUE_ADDRESS
        );
    }
}
