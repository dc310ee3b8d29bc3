//! The bound handle a submission run works with.

use alloy::primitives::Address;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainResult, ChainId, KeyRole};
use crate::blockchain::wallet::Wallet;
use crate::config::schema::Credentials;

/// Node connection plus the two parsed keys.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Session {
    client: BlockchainClient,
    chain_id: ChainId,
    signing_key: Wallet,
    wallet: Wallet,
}

impl Session {
    /// Parse both keys, then dial the node.
    ///
    /// Keys are parsed first so a malformed key never causes network traffic.
    /// Any failure returns an error and no partial session.
    pub async fn connect(credentials: &Credentials) -> BlockchainResult<Self> {
        let signing_key = Wallet::from_private_key(&credentials.signing_key, KeyRole::RelaySigning)?;
        let wallet = Wallet::from_private_key(&credentials.private_key, KeyRole::Identity)?;
        let (client, chain_id) = BlockchainClient::connect(&credentials.provider_url).await?;

        Ok(Self {
            client,
            chain_id,
            signing_key,
            wallet,
        })
    }

    /// Address derived from the identity key.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Key that authenticates relay requests.
    pub fn signing_key(&self) -> &Wallet {
        &self.signing_key
    }

    /// The identity key.
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn client(&self) -> &BlockchainClient {
        &self.client
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}
