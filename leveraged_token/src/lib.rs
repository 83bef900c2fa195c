#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod ledger;
pub mod storage;
pub mod venue;

pub use common_structs::*;

use common_errors::ERROR_SAME_ASSET_PAIR;

/// Ledger and custody of a single leveraged pool.
///
/// The contract is deployed from a template by the controller, which becomes its owner. It keeps
/// the token balances and per-user debt records of the pool, holds the pool's liquid funds and is
/// the account that owns the pool's position at the lending market. Every mutating endpoint is
/// reserved to the owner.
#[multiversx_sc::contract]
pub trait LeveragedToken:
    storage::Storage + ledger::LedgerModule + venue::VenueModule
{
    /// Records the asset pair and the direction of the pool.
    ///
    /// # Arguments
    /// - `base_asset`: The volatile asset the pool is exposed to.
    /// - `quote_asset`: The stable asset users deposit.
    /// - `side`: `Bull` borrows the quote asset against base collateral, `Bear` the inverse.
    #[init]
    fn init(
        &self,
        base_asset: EgldOrEsdtTokenIdentifier,
        quote_asset: EgldOrEsdtTokenIdentifier,
        side: PositionSide,
    ) {
        require!(base_asset != quote_asset, ERROR_SAME_ASSET_PAIR);

        self.position()
            .set(PoolPosition::new(base_asset, quote_asset, side));
    }

    #[upgrade]
    fn upgrade(&self) {}
}
