use crate::{constants::*, proxys::*};

use leverage_controller::*;
use multiversx_sc::types::{
    BigUint, ManagedAddress, ManagedDecimal, ReturnsNewManagedAddress,
    ReturnsResult, TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CONTROLLER_PATH, leverage_controller::ContractBuilder);
    blockchain.register_contract(LEVERAGED_TOKEN_PATH, leveraged_token::ContractBuilder);
    blockchain.register_contract(LENDING_MOCK_PATH, lending_mock::ContractBuilder);
    blockchain.register_contract(SWAP_MOCK_PATH, swap_mock::ContractBuilder);
    blockchain.register_contract(ORACLE_MOCK_PATH, oracle_mock::ContractBuilder);

    blockchain
}

pub struct LeverageTestState {
    pub world: ScenarioWorld,
    pub controller: ManagedAddress<StaticApi>,
    pub template: ManagedAddress<StaticApi>,
    pub lending_market: ManagedAddress<StaticApi>,
    pub swap_router: ManagedAddress<StaticApi>,
    pub price_oracle: ManagedAddress<StaticApi>,
    /// Bull pool on BASE/QUOTE, initialized and configured.
    pub pool: ManagedAddress<StaticApi>,
}

impl LeverageTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(1_000);

        let price_oracle = setup_price_oracle(&mut world);
        let lending_market = setup_lending_market(&mut world, &price_oracle);
        let swap_router = setup_swap_router(&mut world);
        let template = setup_template(&mut world);
        let controller = setup_controller(&mut world, &template);

        let mut state = Self {
            world,
            controller,
            template,
            lending_market,
            swap_router,
            price_oracle,
            pool: ManagedAddress::zero(),
        };

        let pool = state.create_pool(PositionSide::Bull);
        state.configure_pool(&pool);
        state.pool = pool;

        state
    }

    pub fn default_config(&self) -> ModuleConfig<StaticApi> {
        self.config_with_factor(BigUint::from(AMOUNT_PER_UNIT_COLLATERAL))
    }

    pub fn config_with_factor(&self, factor: BigUint<StaticApi>) -> ModuleConfig<StaticApi> {
        ModuleConfig {
            lending_market: self.lending_market.clone(),
            swap_venue: self.swap_router.clone(),
            price_oracle: self.price_oracle.clone(),
            amount_per_unit_collateral: ManagedDecimal::from_raw_units(factor, 18usize),
        }
    }

    // Pool administration
    pub fn create_pool(&mut self, side: PositionSide) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .create_pool(
                token(BASE_TOKEN),
                token(QUOTE_TOKEN),
                side,
                MANAGER_ADDRESS.to_managed_address(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_pool_error(
        &mut self,
        from: TestAddress,
        base_asset: TestTokenIdentifier,
        quote_asset: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .create_pool(
                token(base_asset),
                token(quote_asset),
                PositionSide::Bull,
                MANAGER_ADDRESS.to_managed_address(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Initializes `pool` and sets the default venues, both as the manager.
    pub fn configure_pool(&mut self, pool: &ManagedAddress<StaticApi>) {
        self.initialize_pool(MANAGER_ADDRESS, pool);
        let config = self.default_config();
        self.set_pool_config(MANAGER_ADDRESS, pool, config);
    }

    pub fn initialize_pool(&mut self, from: TestAddress, pool: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .initialize(pool)
            .run();
    }

    pub fn initialize_pool_error(
        &mut self,
        from: TestAddress,
        pool: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .initialize(pool)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_pool_config(
        &mut self,
        from: TestAddress,
        pool: &ManagedAddress<StaticApi>,
        config: ModuleConfig<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .set_config_for_token(pool, config)
            .run();
    }

    pub fn set_pool_config_error(
        &mut self,
        from: TestAddress,
        pool: &ManagedAddress<StaticApi>,
        config: ModuleConfig<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .set_config_for_token(pool, config)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_pool_manager(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        manager: TestAddress,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .set_pool_manager(pool, manager.to_managed_address())
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .unpause_endpoint()
            .run();
    }

    // Issue and redeem
    pub fn issue(&mut self, from: TestAddress, amount: BigUint<StaticApi>) -> BigUint<StaticApi> {
        let pool = self.pool.clone();
        self.issue_in(
            from,
            &pool,
            QUOTE_TOKEN,
            amount,
            units(BASE_PRICE_IN_QUOTE),
            SWAP_FACTOR,
        )
    }

    pub fn issue_in(
        &mut self,
        from: TestAddress,
        pool: &ManagedAddress<StaticApi>,
        payment_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        base_price: BigUint<StaticApi>,
        swap_factor: u64,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .issue(pool, base_price, swap_factor)
            .egld_or_single_esdt(&token(payment_token), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn issue_error(
        &mut self,
        from: TestAddress,
        pool: &ManagedAddress<StaticApi>,
        payment_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        base_price: BigUint<StaticApi>,
        swap_factor: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .issue(pool, base_price, swap_factor)
            .egld_or_single_esdt(&token(payment_token), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn redeem(
        &mut self,
        from: TestAddress,
        quantity: RedeemQuantity<StaticApi>,
    ) -> RedemptionReceipt<StaticApi> {
        let pool = self.pool.clone();
        self.redeem_in(from, &pool, quantity, None)
    }

    /// Redeems from `pool`, attaching `bridge` as collateral-asset liquidity when given.
    pub fn redeem_in(
        &mut self,
        from: TestAddress,
        pool: &ManagedAddress<StaticApi>,
        quantity: RedeemQuantity<StaticApi>,
        bridge: Option<(TestTokenIdentifier, BigUint<StaticApi>)>,
    ) -> RedemptionReceipt<StaticApi> {
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .redeem(pool, quantity);

        match bridge {
            Some((bridge_token, amount)) => call
                .egld_or_single_esdt(&token(bridge_token), 0, &amount)
                .returns(ReturnsResult)
                .run(),
            None => call.returns(ReturnsResult).run(),
        }
    }

    pub fn redeem_error(
        &mut self,
        from: TestAddress,
        pool: &ManagedAddress<StaticApi>,
        quantity: RedeemQuantity<StaticApi>,
        bridge: Option<(TestTokenIdentifier, BigUint<StaticApi>)>,
        error_message: &[u8],
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .redeem(pool, quantity);
        let expected = ExpectMessage(core::str::from_utf8(error_message).unwrap());

        match bridge {
            Some((bridge_token, amount)) => call
                .egld_or_single_esdt(&token(bridge_token), 0, &amount)
                .returns(expected)
                .run(),
            None => call.returns(expected).run(),
        }
    }

    // Controller views
    pub fn pooled_position(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
    ) -> PooledPosition<StaticApi> {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .get_pooled_position(pool)
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_position(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        user: TestAddress,
    ) -> UserPosition<StaticApi> {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .get_user_position(pool, user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn preview_redeem(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        user: TestAddress,
        quantity: RedeemQuantity<StaticApi>,
    ) -> RedemptionShares<StaticApi> {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .preview_redeem(pool, user.to_managed_address(), quantity)
            .returns(ReturnsResult)
            .run()
    }

    pub fn price_vector(&mut self, pool: &ManagedAddress<StaticApi>) -> PriceVector<StaticApi> {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .get_price_vector(pool)
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_account_data(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
    ) -> AccountData<StaticApi> {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .get_pool_account_data(pool)
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_manager(&mut self, pool: &ManagedAddress<StaticApi>) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .pool_manager(pool)
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_initialized(&mut self, pool: &ManagedAddress<StaticApi>) -> bool {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .pool_initialized(pool)
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_position(&mut self, pool: &ManagedAddress<StaticApi>) -> PoolPosition<StaticApi> {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .pool_position(pool)
            .returns(ReturnsResult)
            .run()
    }

    pub fn pools(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(&self.controller)
            .typed(proxy_leverage_controller::LeverageControllerProxy)
            .pools()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    // Venue and ledger state
    pub fn market_debt(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.lending_market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .debt_of(pool, token(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_collateral(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.lending_market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .deposit_of(pool, token(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn ledger_total_debt(&mut self, pool: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .total_debt()
            .returns(ReturnsResult)
            .run()
    }

    pub fn ledger_debt(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        user: TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(pool)
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .debt(user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_silent_swap_failure(&mut self, enabled: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.swap_router)
            .typed(proxy_swap_router::SwapRouterMockProxy)
            .set_silent_failure(enabled)
            .run();
    }

    pub fn set_asset_price(&mut self, asset: TestTokenIdentifier, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_oracle)
            .typed(proxy_price_oracle::PriceOracleMockProxy)
            .set_asset_price(token(asset), price)
            .run();
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(QUOTE_TOKEN, units(100_000_000))
        .esdt_balance(BASE_TOKEN, units(1_000_000))
        .esdt_balance(OTHER_TOKEN, units(1_000));
    world.account(MANAGER_ADDRESS).nonce(1);

    for user in [ALICE_ADDRESS, BOB_ADDRESS, CAROL_ADDRESS] {
        world
            .account(user)
            .nonce(1)
            .esdt_balance(QUOTE_TOKEN, units(USER_QUOTE_BALANCE))
            .esdt_balance(BASE_TOKEN, units(USER_BASE_BALANCE))
            .esdt_balance(OTHER_TOKEN, units(1_000));
    }
}

/// Oracle quoting BASE at 800 and QUOTE at 1 in the reference unit.
pub fn setup_price_oracle(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let price_oracle = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_price_oracle::PriceOracleMockProxy)
        .init()
        .code(ORACLE_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    for (asset, price) in [
        (BASE_TOKEN, units(BASE_PRICE_IN_QUOTE)),
        (QUOTE_TOKEN, units(1)),
    ] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&price_oracle)
            .typed(proxy_price_oracle::PriceOracleMockProxy)
            .set_asset_price(token(asset), price)
            .run();
    }

    price_oracle
}

/// Lending market with both assets supplied by the owner as borrowable liquidity.
pub fn setup_lending_market(
    world: &mut ScenarioWorld,
    price_oracle: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let lending_market = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_lending_market::LendingMarketMockProxy)
        .init(price_oracle, LTV_BPS, LIQ_THRESHOLD_BPS)
        .code(LENDING_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    for (asset, amount) in [
        (QUOTE_TOKEN, units(50_000_000)),
        (BASE_TOKEN, units(100_000)),
    ] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&lending_market)
            .typed(proxy_lending_market::LendingMarketMockProxy)
            .deposit()
            .egld_or_single_esdt(&token(asset), 0, &amount)
            .run();
    }

    lending_market
}

/// Router trading BASE/QUOTE at the oracle price with a 0.3% fee.
pub fn setup_swap_router(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let swap_router = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_swap_router::SwapRouterMockProxy)
        .init(SWAP_FEE_BPS)
        .code(SWAP_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    let quote_to_base = wad() / BigUint::from(BASE_PRICE_IN_QUOTE);
    let base_to_quote = units(BASE_PRICE_IN_QUOTE);
    for (token_in, token_out, rate) in [
        (QUOTE_TOKEN, BASE_TOKEN, quote_to_base),
        (BASE_TOKEN, QUOTE_TOKEN, base_to_quote),
    ] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&swap_router)
            .typed(proxy_swap_router::SwapRouterMockProxy)
            .set_rate(token(token_in), token(token_out), rate)
            .run();
    }

    for (asset, amount) in [
        (QUOTE_TOKEN, units(40_000_000)),
        (BASE_TOKEN, units(500_000)),
    ] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&swap_router)
            .typed(proxy_swap_router::SwapRouterMockProxy)
            .add_liquidity()
            .egld_or_single_esdt(&token(asset), 0, &amount)
            .run();
    }

    swap_router
}

pub fn setup_template(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_leveraged_token::LeveragedTokenProxy)
        .init(token(BASE_TOKEN), token(QUOTE_TOKEN), PositionSide::Bull)
        .code(LEVERAGED_TOKEN_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_controller(
    world: &mut ScenarioWorld,
    template: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_leverage_controller::LeverageControllerProxy)
        .init(template)
        .code(CONTROLLER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

/// Sum of the recorded debt of `users` in `pool`.
pub fn recorded_debt(
    state: &mut LeverageTestState,
    pool: &ManagedAddress<StaticApi>,
    users: &[TestAddress],
) -> BigUint<StaticApi> {
    let mut total = BigUint::zero();
    for user in users {
        total += state.ledger_debt(pool, *user);
    }
    total
}

