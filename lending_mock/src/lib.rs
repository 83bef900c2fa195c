#![no_std]

use common_constants::WAD;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_HEALTH_FACTOR_WITHDRAW,
    ERROR_INSUFFICIENT_COLLATERAL, ERROR_INSUFFICIENT_DEPOSIT, ERROR_INSUFFICIENT_MARKET_LIQUIDITY,
    ERROR_NO_DEBT_TO_REPAY, ERROR_PRICE_NOT_SET,
};
use common_proxies::proxy_price_oracle;
use common_structs::AccountData;

multiversx_sc::imports!();

/// Minimal over-collateralized lending market.
///
/// Positions are tracked per caller address and per asset. Values are priced through the oracle
/// in the reference unit, a single loan-to-value and liquidation threshold apply to every asset,
/// and no interest accrues.
#[multiversx_sc::contract]
pub trait LendingMarketMock: common_math::SharedMathModule {
    #[init]
    fn init(&self, price_oracle: ManagedAddress, ltv_bps: u64, liquidation_threshold_bps: u64) {
        self.price_oracle().set(price_oracle);
        self.ltv_bps().set(ltv_bps);
        self.liquidation_threshold_bps().set(liquidation_threshold_bps);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.amount > 0u64,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
        let caller = self.blockchain().get_caller();

        self.deposits(&caller, &payment.token_identifier)
            .update(|deposit| *deposit += &payment.amount);
        self.collateral_assets(&caller)
            .insert(payment.token_identifier);

        payment.amount
    }

    #[endpoint(borrow)]
    fn borrow(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        require!(amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(
            self.blockchain().get_sc_balance(&asset, 0) >= amount,
            ERROR_INSUFFICIENT_MARKET_LIQUIDITY
        );
        let caller = self.blockchain().get_caller();

        let account = self.get_user_account_data(caller.clone());
        require!(
            self.value_of(&asset, &amount) <= account.available_borrows_value,
            ERROR_INSUFFICIENT_COLLATERAL
        );

        self.debts(&caller, &asset)
            .update(|debt| *debt += &amount);
        self.debt_assets(&caller).insert(asset.clone());

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&asset, 0, &amount)
            .transfer();

        amount
    }

    /// Withdraws up to `amount` of the caller's collateral, capped at the deposited amount.
    #[endpoint(withdraw)]
    fn withdraw(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        let deposit_mapper = self.deposits(&caller, &asset);
        let deposited = deposit_mapper.get();
        require!(deposited > 0u64, ERROR_INSUFFICIENT_DEPOSIT);

        let withdrawn = self.get_min(amount, deposited.clone());
        let remaining = deposited - &withdrawn;
        if remaining == 0u64 {
            deposit_mapper.clear();
            self.collateral_assets(&caller).swap_remove(&asset);
        } else {
            deposit_mapper.set(remaining);
        }

        let account = self.get_user_account_data(caller.clone());
        require!(
            account.health_factor >= BigUint::from(WAD),
            ERROR_HEALTH_FACTOR_WITHDRAW
        );

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&asset, 0, &withdrawn)
            .transfer();

        withdrawn
    }

    /// Repays the caller's debt in the paid token. Anything above the open debt is refunded.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();
        let debt_mapper = self.debts(&caller, &payment.token_identifier);
        let debt = debt_mapper.get();
        require!(debt > 0u64, ERROR_NO_DEBT_TO_REPAY);

        let applied = self.get_min(payment.amount.clone(), debt.clone());
        let remaining = debt - &applied;
        if remaining == 0u64 {
            debt_mapper.clear();
            self.debt_assets(&caller)
                .swap_remove(&payment.token_identifier);
        } else {
            debt_mapper.set(remaining);
        }

        let refund = &payment.amount - &applied;
        if refund > 0u64 {
            self.tx()
                .to(&caller)
                .egld_or_single_esdt(&payment.token_identifier, 0, &refund)
                .transfer();
        }

        applied
    }

    #[view(getUserAccountData)]
    fn get_user_account_data(&self, account: ManagedAddress) -> AccountData<Self::Api> {
        let ltv_bps = self.ltv_bps().get();
        let liquidation_threshold_bps = self.liquidation_threshold_bps().get();

        let mut total_collateral_value = BigUint::zero();
        for asset in self.collateral_assets(&account).iter() {
            let amount = self.deposits(&account, &asset).get();
            total_collateral_value += self.value_of(&asset, &amount);
        }

        let mut total_debt_value = BigUint::zero();
        for asset in self.debt_assets(&account).iter() {
            let amount = self.debts(&account, &asset).get();
            total_debt_value += self.value_of(&asset, &amount);
        }

        let borrow_limit = self.apply_bps_floor(&total_collateral_value, ltv_bps);
        let available_borrows_value = if borrow_limit > total_debt_value {
            &borrow_limit - &total_debt_value
        } else {
            BigUint::zero()
        };

        let health_factor = if total_debt_value == 0u64 {
            BigUint::from(u128::MAX)
        } else {
            let weighted_collateral =
                self.apply_bps_floor(&total_collateral_value, liquidation_threshold_bps);
            self.mul_div_floor(&weighted_collateral, &BigUint::from(WAD), &total_debt_value)
        };

        AccountData {
            total_collateral_value,
            total_debt_value,
            available_borrows_value,
            liquidation_threshold_bps,
            ltv_bps,
            health_factor,
        }
    }

    #[view(getDeposit)]
    fn deposit_of(&self, account: ManagedAddress, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.deposits(&account, &asset).get()
    }

    #[view(getDebt)]
    fn debt_of(&self, account: ManagedAddress, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.debts(&account, &asset).get()
    }

    fn value_of(&self, asset: &EgldOrEsdtTokenIdentifier, amount: &BigUint) -> BigUint {
        let price = self
            .tx()
            .to(self.price_oracle().get())
            .typed(proxy_price_oracle::PriceOracleMockProxy)
            .get_asset_price(asset)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(price > 0u64, ERROR_PRICE_NOT_SET);

        self.mul_div_floor(amount, &price, &BigUint::from(WAD))
    }

    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("ltv_bps")]
    fn ltv_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("liquidation_threshold_bps")]
    fn liquidation_threshold_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("deposits")]
    fn deposits(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("debts")]
    fn debts(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("collateral_assets")]
    fn collateral_assets(
        &self,
        account: &ManagedAddress,
    ) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("debt_assets")]
    fn debt_assets(&self, account: &ManagedAddress)
        -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;
}
