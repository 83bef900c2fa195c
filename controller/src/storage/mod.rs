use common_structs::{ModuleConfig, PoolPosition};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the set of registered pools
    /// Each pool is identified by the address of its leveraged token contract.
    #[view(getPools)]
    #[storage_mapper("pools")]
    fn pools(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the leveraged token template address
    /// New pools are deployed from the code of this contract.
    #[view(getLeveragedTokenTemplate)]
    #[storage_mapper("leveraged_token_template")]
    fn leveraged_token_template(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the asset pair and side of a pool
    #[view(getPoolPosition)]
    #[storage_mapper("pool_position")]
    fn pool_position(&self, pool: &ManagedAddress) -> SingleValueMapper<PoolPosition<Self::Api>>;

    /// Get the venues and leverage factor of a pool
    /// Empty until the pool manager configures the pool.
    #[view(getPoolConfig)]
    #[storage_mapper("pool_config")]
    fn pool_config(&self, pool: &ManagedAddress) -> SingleValueMapper<ModuleConfig<Self::Api>>;

    #[view(getPoolManager)]
    #[storage_mapper("pool_manager")]
    fn pool_manager(&self, pool: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    #[view(isPoolInitialized)]
    #[storage_mapper("pool_initialized")]
    fn pool_initialized(&self, pool: &ManagedAddress) -> SingleValueMapper<bool>;

    /// Set while an issue or redeem runs against the pool.
    #[storage_mapper("pool_operation_ongoing")]
    fn pool_operation_ongoing(&self, pool: &ManagedAddress) -> SingleValueMapper<bool>;
}
