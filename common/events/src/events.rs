#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("create_pool")]
    fn create_pool_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] position: &PoolPosition<Self::Api>,
        #[indexed] manager: &ManagedAddress,
    );

    #[event("initialize_pool")]
    fn initialize_pool_event(&self, #[indexed] pool: &ManagedAddress);

    #[event("update_pool_config")]
    fn update_pool_config_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] config: &ModuleConfig<Self::Api>,
    );

    #[event("update_pool_manager")]
    fn update_pool_manager_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] manager: &ManagedAddress,
    );

    // Emitted once per successful issuance:
    // deposit -> quote amount paid in by the caller
    // minted -> leveraged tokens credited to the caller
    // outcome -> collateral obtained and debt recorded by the leverage construction
    #[event("issue")]
    fn issue_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] caller: &ManagedAddress,
        #[indexed] deposit: &BigUint,
        #[indexed] minted: &BigUint,
        #[indexed] outcome: &LeverageOutcome<Self::Api>,
    );

    #[event("redeem")]
    fn redeem_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] caller: &ManagedAddress,
        #[indexed] shares: &RedemptionShares<Self::Api>,
        #[indexed] receipt: &RedemptionReceipt<Self::Api>,
    );
}
