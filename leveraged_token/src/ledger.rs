multiversx_sc::imports!();

use common_errors::{ERROR_DEBT_UNDERFLOW, ERROR_INSUFFICIENT_BALANCE};

use crate::storage;

/// Balance and debt bookkeeping of the pool. Only the controller (owner) can move entries.
#[multiversx_sc::module]
pub trait LedgerModule: storage::Storage {
    /// Credits `amount` pool tokens to `user`.
    #[only_owner]
    #[endpoint(mint)]
    fn mint(&self, user: ManagedAddress, amount: BigUint) {
        self.balance_of(&user).update(|balance| *balance += &amount);
        self.total_supply().update(|supply| *supply += &amount);
    }

    /// Removes `amount` pool tokens from `user`.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_BALANCE`: If `user` holds fewer than `amount` tokens.
    #[only_owner]
    #[endpoint(burn)]
    fn burn(&self, user: ManagedAddress, amount: BigUint) {
        let balance_mapper = self.balance_of(&user);
        let balance = balance_mapper.get();
        require!(balance >= amount, ERROR_INSUFFICIENT_BALANCE);

        balance_mapper.set(balance - &amount);
        self.total_supply().update(|supply| *supply -= &amount);
    }

    #[only_owner]
    #[endpoint(addDebt)]
    fn add_debt(&self, user: ManagedAddress, amount: BigUint) {
        self.debt(&user).update(|debt| *debt += &amount);
        self.total_debt().update(|total| *total += &amount);
    }

    /// Decreases the debt recorded for `user`.
    ///
    /// # Errors
    /// - `ERROR_DEBT_UNDERFLOW`: If `amount` exceeds the recorded debt.
    #[only_owner]
    #[endpoint(payDebt)]
    fn pay_debt(&self, user: ManagedAddress, amount: BigUint) {
        let debt_mapper = self.debt(&user);
        let debt = debt_mapper.get();
        require!(amount <= debt, ERROR_DEBT_UNDERFLOW);

        debt_mapper.set(debt - &amount);
        self.total_debt().update(|total| *total -= &amount);
    }

    /// Sends custodied funds out of the pool.
    #[only_owner]
    #[endpoint(transferAsset)]
    fn transfer_asset(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        to: ManagedAddress,
        amount: BigUint,
    ) {
        if amount == 0u64 {
            return;
        }

        self.tx().to(&to).egld_or_single_esdt(&asset, 0, &amount).transfer();
    }

    /// Accepts funds the controller moves into custody.
    #[only_owner]
    #[payable]
    #[endpoint(receiveFunds)]
    fn receive_funds(&self) {}
}
