#![no_std]

use common_constants::{BPS, WAD};
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INVALID_SWAP_FEE, ERROR_INVALID_SWAP_PATH,
    ERROR_SWAP_EXCESSIVE_INPUT, ERROR_SWAP_EXPIRED, ERROR_SWAP_PAIR_NOT_SUPPORTED,
    ERROR_SWAP_SLIPPAGE_EXCEEDED,
};

multiversx_sc::imports!();

/// Two-token router quoting every pair at an owner-set rate minus a flat fee.
///
/// Rates are expressed as units of the output token per unit of the input token, WAD precision.
/// The router pays out of its own balance, so tests fund it with both legs of every pair.
#[multiversx_sc::contract]
pub trait SwapRouterMock: common_math::SharedMathModule {
    #[init]
    fn init(&self, fee_bps: u64) {
        require!(fee_bps <= BPS, ERROR_INVALID_SWAP_FEE);

        self.fee_bps().set(fee_bps);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setRate)]
    fn set_rate(
        &self,
        token_in: EgldOrEsdtTokenIdentifier,
        token_out: EgldOrEsdtTokenIdentifier,
        rate: BigUint,
    ) {
        self.rate(&token_in, &token_out).set(rate);
    }

    // Misbehaving venue: exact input swaps keep the payment and send nothing back
    #[only_owner]
    #[endpoint(setSilentFailure)]
    fn set_silent_failure(&self, enabled: bool) {
        self.silent_failure().set(enabled);
    }

    /// Funds the router with the attached payment.
    #[only_owner]
    #[payable]
    #[endpoint(addLiquidity)]
    fn add_liquidity(&self) {}

    #[payable]
    #[endpoint(swapExactTokensForTokens)]
    fn swap_exact_tokens_for_tokens(
        &self,
        amount_out_min: BigUint,
        deadline: u64,
        path: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> BigUint {
        self.require_not_expired(deadline);
        let (token_in, token_out) = self.pair_from_path(path);
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.token_identifier == token_in, ERROR_INVALID_SWAP_PATH);
        require!(
            payment.amount > 0u64,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        if self.silent_failure().get() {
            sc_print!("Silent swap failure: kept {} input", payment.amount);
            return BigUint::zero();
        }

        let amount_out = self.quote_out(&token_in, &token_out, &payment.amount);
        require!(amount_out >= amount_out_min, ERROR_SWAP_SLIPPAGE_EXCEEDED);

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&token_out, 0, &amount_out)
            .transfer();

        amount_out
    }

    /// Buys exactly `amount_out`, the payment being the maximum input. Unused input is refunded.
    #[payable]
    #[endpoint(swapTokensForExactTokens)]
    fn swap_tokens_for_exact_tokens(
        &self,
        amount_out: BigUint,
        deadline: u64,
        path: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> BigUint {
        self.require_not_expired(deadline);
        let (token_in, token_out) = self.pair_from_path(path);
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.token_identifier == token_in, ERROR_INVALID_SWAP_PATH);
        require!(amount_out > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let amount_in = self.quote_in(&token_in, &token_out, &amount_out);
        require!(amount_in <= payment.amount, ERROR_SWAP_EXCESSIVE_INPUT);

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&token_out, 0, &amount_out)
            .transfer();

        let refund = &payment.amount - &amount_in;
        if refund > 0u64 {
            self.tx()
                .to(&caller)
                .egld_or_single_esdt(&token_in, 0, &refund)
                .transfer();
        }

        amount_in
    }

    #[view(getAmountsOut)]
    fn get_amounts_out(
        &self,
        amount_in: BigUint,
        path: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> MultiValueEncoded<BigUint> {
        let (token_in, token_out) = self.pair_from_path(path);
        let amount_out = self.quote_out(&token_in, &token_out, &amount_in);

        let mut amounts = MultiValueEncoded::new();
        amounts.push(amount_in);
        amounts.push(amount_out);
        amounts
    }

    fn quote_out(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
    ) -> BigUint {
        let rate = self.pair_rate(token_in, token_out);
        let gross_out = self.mul_div_floor(amount_in, &rate, &BigUint::from(WAD));

        self.apply_bps_floor(&gross_out, BPS - self.fee_bps().get())
    }

    // Rounds up so the forward quote of the returned input always covers `amount_out`
    fn quote_in(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
        amount_out: &BigUint,
    ) -> BigUint {
        let rate = self.pair_rate(token_in, token_out);
        let numerator = amount_out * &BigUint::from(WAD) * BigUint::from(BPS);
        let denominator = rate * BigUint::from(BPS - self.fee_bps().get());

        (numerator + &denominator - 1u64) / denominator
    }

    fn pair_rate(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        let rate = self.rate(token_in, token_out).get();
        require!(rate > 0u64, ERROR_SWAP_PAIR_NOT_SUPPORTED);

        rate
    }

    fn pair_from_path(
        &self,
        path: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> (EgldOrEsdtTokenIdentifier, EgldOrEsdtTokenIdentifier) {
        require!(path.len() == 2, ERROR_INVALID_SWAP_PATH);

        let mut tokens = path.into_iter();
        match (tokens.next(), tokens.next()) {
            (Some(token_in), Some(token_out)) => (token_in, token_out),
            _ => sc_panic!(ERROR_INVALID_SWAP_PATH),
        }
    }

    fn require_not_expired(&self, deadline: u64) {
        require!(
            deadline >= self.blockchain().get_block_timestamp(),
            ERROR_SWAP_EXPIRED
        );
    }

    #[view(getRate)]
    #[storage_mapper("rate")]
    fn rate(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("fee_bps")]
    fn fee_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("silent_failure")]
    fn silent_failure(&self) -> SingleValueMapper<bool>;
}
