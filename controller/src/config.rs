use common_errors::{
    ERROR_POOL_ALREADY_INITIALIZED, ERROR_POOL_NOT_INITIALIZED, ERROR_SAME_ASSET_PAIR,
};
use common_structs::{ModuleConfig, PoolPosition, PositionSide};

use crate::{factory, storage, validation};

multiversx_sc::imports!();

/// Pool lifecycle and per-pool configuration.
///
/// The owner creates pools and appoints their managers. A manager initializes its pool once and
/// then sets the venues and leverage factor used by every issue and redeem of that pool.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + factory::FactoryModule
    + validation::ValidationModule
    + common_events::EventsModule
{
    /// Deploys and registers a new leveraged token pool.
    ///
    /// # Arguments
    /// - `base_asset`: Volatile asset tracked by the pool.
    /// - `quote_asset`: Stable asset users deposit.
    /// - `side`: `Bull` for long base exposure, `Bear` for short.
    /// - `manager`: Address allowed to initialize and configure the pool.
    ///
    /// # Returns
    /// - `ManagedAddress`: Address of the pool's leveraged token contract.
    #[only_owner]
    #[endpoint(createPool)]
    fn create_pool(
        &self,
        base_asset: EgldOrEsdtTokenIdentifier,
        quote_asset: EgldOrEsdtTokenIdentifier,
        side: PositionSide,
        manager: ManagedAddress,
    ) -> ManagedAddress {
        require!(base_asset != quote_asset, ERROR_SAME_ASSET_PAIR);

        let position = PoolPosition::new(base_asset, quote_asset, side);
        let pool = self.deploy_leveraged_token(&position);

        self.pools().insert(pool.clone());
        self.pool_position(&pool).set(&position);
        self.pool_manager(&pool).set(&manager);

        self.create_pool_event(&pool, &position, &manager);

        pool
    }

    #[endpoint(initialize)]
    fn initialize(&self, pool: ManagedAddress) {
        self.require_pool_exists(&pool);
        self.require_pool_manager(&pool);

        let initialized = self.pool_initialized(&pool);
        require!(!initialized.get(), ERROR_POOL_ALREADY_INITIALIZED);
        initialized.set(true);

        self.initialize_pool_event(&pool);
    }

    /// Sets the venues and leverage factor of an initialized pool.
    ///
    /// # Arguments
    /// - `pool`: Leveraged token contract of the pool.
    /// - `config`: Lending market, swap venue, price oracle and the fraction of each supplied
    ///   collateral value to borrow.
    #[endpoint(setConfigForToken)]
    fn set_config_for_token(&self, pool: ManagedAddress, config: ModuleConfig<Self::Api>) {
        self.require_pool_exists(&pool);
        self.require_pool_manager(&pool);
        require!(
            self.pool_initialized(&pool).get(),
            ERROR_POOL_NOT_INITIALIZED
        );
        self.validate_module_config(&config);

        self.pool_config(&pool).set(&config);

        self.update_pool_config_event(&pool, &config);
    }

    #[only_owner]
    #[endpoint(setPoolManager)]
    fn set_pool_manager(&self, pool: ManagedAddress, manager: ManagedAddress) {
        self.require_pool_exists(&pool);

        self.pool_manager(&pool).set(&manager);

        self.update_pool_manager_event(&pool, &manager);
    }
}
