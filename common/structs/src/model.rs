#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Direction of a leveraged pool.
///
/// `Bull` holds the base asset as collateral and borrows the quote asset.
/// `Bear` holds the quote asset as collateral and borrows the base asset.
#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum PositionSide {
    Bull,
    Bear,
}

/// Asset pair and direction of a pool, fixed when the pool is created.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct PoolPosition<M: ManagedTypeApi> {
    pub base_asset: EgldOrEsdtTokenIdentifier<M>,
    pub quote_asset: EgldOrEsdtTokenIdentifier<M>,
    pub side: PositionSide,
}

impl<M: ManagedTypeApi> PoolPosition<M> {
    pub fn new(
        base_asset: EgldOrEsdtTokenIdentifier<M>,
        quote_asset: EgldOrEsdtTokenIdentifier<M>,
        side: PositionSide,
    ) -> Self {
        PoolPosition {
            base_asset,
            quote_asset,
            side,
        }
    }

    /// Users always deposit the stable leg.
    pub fn deposit_asset(&self) -> &EgldOrEsdtTokenIdentifier<M> {
        &self.quote_asset
    }

    pub fn collateral_asset(&self) -> &EgldOrEsdtTokenIdentifier<M> {
        match self.side {
            PositionSide::Bull => &self.base_asset,
            PositionSide::Bear => &self.quote_asset,
        }
    }

    pub fn debt_asset(&self) -> &EgldOrEsdtTokenIdentifier<M> {
        match self.side {
            PositionSide::Bull => &self.quote_asset,
            PositionSide::Bear => &self.base_asset,
        }
    }
}

/// Venues and leverage factor used by a pool.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct ModuleConfig<M: ManagedTypeApi> {
    pub lending_market: ManagedAddress<M>,
    pub swap_venue: ManagedAddress<M>,
    pub price_oracle: ManagedAddress<M>,
    /// Fraction of each deposited collateral value that gets borrowed, WAD precision.
    pub amount_per_unit_collateral: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub enum RedeemQuantity<M: ManagedTypeApi> {
    Exact(BigUint<M>),
    EntireBalance,
}

impl<M: ManagedTypeApi> RedeemQuantity<M> {
    pub fn resolve(&self, balance: &BigUint<M>) -> BigUint<M> {
        match self {
            RedeemQuantity::Exact(amount) => amount.clone(),
            RedeemQuantity::EntireBalance => balance.clone(),
        }
    }
}

/// Running totals of a leverage construction.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug)]
pub struct LeverageOutcome<M: ManagedTypeApi> {
    /// Collateral-asset amounts obtained, including what stays liquid in custody.
    pub total_amount_out: BigUint<M>,
    /// Debt-asset amounts borrowed from the lending market.
    pub total_borrow_amount: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for LeverageOutcome<M> {
    fn default() -> Self {
        LeverageOutcome {
            total_amount_out: BigUint::zero(),
            total_borrow_amount: BigUint::zero(),
        }
    }
}

impl<M: ManagedTypeApi> LeverageOutcome<M> {
    pub fn add_amount_out(&mut self, amount: &BigUint<M>) {
        self.total_amount_out += amount;
    }

    pub fn add_borrow(&mut self, amount: &BigUint<M>) {
        self.total_borrow_amount += amount;
    }
}

/// A user's claim on a pool, computed before any redemption step mutates the pool.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct RedemptionShares<M: ManagedTypeApi> {
    pub quantity: BigUint<M>,
    pub user_balance: BigUint<M>,
    pub user_debt: BigUint<M>,
    pub collateral_share: BigUint<M>,
    pub liquid_share: BigUint<M>,
    pub debt_share: BigUint<M>,
}

/// Amounts moved by a completed redemption.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug)]
pub struct RedemptionReceipt<M: ManagedTypeApi> {
    pub debt_repaid: BigUint<M>,
    pub collateral_spent: BigUint<M>,
    pub collateral_withdrawn: BigUint<M>,
    pub proceeds: EgldOrEsdtTokenPayment<M>,
}

/// Account summary reported by the lending market, values in the reference unit (WAD).
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug)]
pub struct AccountData<M: ManagedTypeApi> {
    pub total_collateral_value: BigUint<M>,
    pub total_debt_value: BigUint<M>,
    pub available_borrows_value: BigUint<M>,
    pub liquidation_threshold_bps: u64,
    pub ltv_bps: u64,
    pub health_factor: BigUint<M>,
}

/// Live view of a pool, never stored.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug)]
pub struct PooledPosition<M: ManagedTypeApi> {
    pub total_collateral: BigUint<M>,
    pub total_debt: BigUint<M>,
    pub total_supply: BigUint<M>,
    pub liquid_balance: BigUint<M>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug)]
pub struct UserPosition<M: ManagedTypeApi> {
    pub balance: BigUint<M>,
    pub debt: BigUint<M>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Debug)]
pub enum PriceIndex {
    Reference,
    Collateral,
    Debt,
}

/// Oracle prices for one pool, each expressed in the common reference unit (WAD).
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug)]
pub struct PriceVector<M: ManagedTypeApi> {
    pub reference: BigUint<M>,
    pub collateral: BigUint<M>,
    pub debt: BigUint<M>,
}

impl<M: ManagedTypeApi> PriceVector<M> {
    pub fn get(&self, index: PriceIndex) -> &BigUint<M> {
        match index {
            PriceIndex::Reference => &self.reference,
            PriceIndex::Collateral => &self.collateral,
            PriceIndex::Debt => &self.debt,
        }
    }
}
