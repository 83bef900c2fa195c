use common_errors::ERROR_TEMPLATE_EMPTY;
use common_proxies::proxy_leveraged_token;
use common_structs::PoolPosition;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait FactoryModule: storage::Storage {
    /// Deploys a leveraged token contract for `position` from the template's code.
    /// This contract becomes its owner and the only caller of its ledger and venue endpoints.
    fn deploy_leveraged_token(&self, position: &PoolPosition<Self::Api>) -> ManagedAddress {
        require!(
            !self.leveraged_token_template().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );

        self.tx()
            .typed(proxy_leveraged_token::LeveragedTokenProxy)
            .init(&position.base_asset, &position.quote_asset, position.side)
            .from_source(self.leveraged_token_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call()
    }
}
