multiversx_sc::imports!();

use common_proxies::{proxy_lending_market, proxy_swap_router};

/// Typed forwarders to the lending market and the swap router.
///
/// The pool position at the lending market belongs to this contract, so every venue interaction
/// of the pool originates here. Results are decoded from the contract's own balance changes,
/// which gives the amount actually moved regardless of what the venue reports.
#[multiversx_sc::module]
pub trait VenueModule {
    /// Deposits `amount` of `asset` from custody as collateral.
    ///
    /// # Returns
    /// - `BigUint`: The amount that left custody.
    #[only_owner]
    #[endpoint(supplyCollateral)]
    fn supply_collateral(
        &self,
        market: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> BigUint {
        let balance_before = self.blockchain().get_sc_balance(&asset, 0);

        self.tx()
            .to(&market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .deposit()
            .egld_or_single_esdt(&asset, 0, &amount)
            .sync_call();

        balance_before - self.blockchain().get_sc_balance(&asset, 0)
    }

    /// Borrows `amount` of `asset` into custody.
    ///
    /// # Returns
    /// - `BigUint`: The amount received.
    #[only_owner]
    #[endpoint(borrow)]
    fn borrow(
        &self,
        market: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> BigUint {
        let balance_before = self.blockchain().get_sc_balance(&asset, 0);

        self.tx()
            .to(&market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .borrow(&asset, &amount)
            .sync_call();

        self.blockchain().get_sc_balance(&asset, 0) - balance_before
    }

    #[only_owner]
    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(
        &self,
        market: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> BigUint {
        let balance_before = self.blockchain().get_sc_balance(&asset, 0);

        self.tx()
            .to(&market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .withdraw(&asset, &amount)
            .sync_call();

        self.blockchain().get_sc_balance(&asset, 0) - balance_before
    }

    /// Repays up to `amount` of `asset`. The market refunds anything above the open debt.
    ///
    /// # Returns
    /// - `BigUint`: The amount actually applied to the debt.
    #[only_owner]
    #[endpoint(repayDebt)]
    fn repay_debt(
        &self,
        market: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> BigUint {
        let balance_before = self.blockchain().get_sc_balance(&asset, 0);

        self.tx()
            .to(&market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .repay()
            .egld_or_single_esdt(&asset, 0, &amount)
            .sync_call();

        balance_before - self.blockchain().get_sc_balance(&asset, 0)
    }

    /// Sells exactly `amount_in` of `token_in`.
    ///
    /// # Returns
    /// - `BigUint`: The amount of `token_out` received.
    #[only_owner]
    #[endpoint(swapExactIn)]
    fn swap_exact_in(
        &self,
        router: ManagedAddress,
        token_in: EgldOrEsdtTokenIdentifier,
        token_out: EgldOrEsdtTokenIdentifier,
        amount_in: BigUint,
        min_out: BigUint,
        deadline: u64,
    ) -> BigUint {
        let balance_before = self.blockchain().get_sc_balance(&token_out, 0);

        self.tx()
            .to(&router)
            .typed(proxy_swap_router::SwapRouterMockProxy)
            .swap_exact_tokens_for_tokens(
                &min_out,
                deadline,
                self.swap_path(&token_in, &token_out),
            )
            .egld_or_single_esdt(&token_in, 0, &amount_in)
            .sync_call();

        self.blockchain().get_sc_balance(&token_out, 0) - balance_before
    }

    /// Buys exactly `amount_out` of `token_out`, spending at most `amount_in_max`.
    ///
    /// # Returns
    /// - `BigUint`: The amount of `token_in` spent after the router's refund.
    #[only_owner]
    #[endpoint(swapExactOut)]
    fn swap_exact_out(
        &self,
        router: ManagedAddress,
        token_in: EgldOrEsdtTokenIdentifier,
        token_out: EgldOrEsdtTokenIdentifier,
        amount_in_max: BigUint,
        amount_out: BigUint,
        deadline: u64,
    ) -> BigUint {
        let balance_before = self.blockchain().get_sc_balance(&token_in, 0);

        self.tx()
            .to(&router)
            .typed(proxy_swap_router::SwapRouterMockProxy)
            .swap_tokens_for_exact_tokens(
                &amount_out,
                deadline,
                self.swap_path(&token_in, &token_out),
            )
            .egld_or_single_esdt(&token_in, 0, &amount_in_max)
            .sync_call();

        balance_before - self.blockchain().get_sc_balance(&token_in, 0)
    }

    fn swap_path(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
    ) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut path = MultiValueEncoded::new();
        path.push(token_in.clone());
        path.push(token_out.clone());
        path
    }
}
