multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::PoolPosition;

/// On-chain state of the pool ledger.
#[multiversx_sc::module]
pub trait Storage {
    /// Returns the asset pair and direction of the pool.
    #[view(getPosition)]
    #[storage_mapper("position")]
    fn position(&self) -> SingleValueMapper<PoolPosition<Self::Api>>;

    /// Leveraged token balance of a user.
    #[view(balanceOf)]
    #[storage_mapper("balance")]
    fn balance_of(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(totalSupply)]
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    /// Debt recorded for a user, in units of the pool's debt asset.
    #[view(getDebt)]
    #[storage_mapper("debt")]
    fn debt(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Sum of every user's recorded debt.
    ///
    /// Must match the debt the lending market reports for this contract.
    #[view(getTotalDebt)]
    #[storage_mapper("total_debt")]
    fn total_debt(&self) -> SingleValueMapper<BigUint>;

    /// Tokens held by the contract outside of the lending market.
    #[view(getLiquidBalance)]
    fn liquid_balance(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.blockchain().get_sc_balance(&asset, 0)
    }
}
