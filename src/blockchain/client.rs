//! Node JSON-RPC client.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Probe the endpoint once so an unreachable node fails the run early
//! - Query the chain head for operator diagnostics

use alloy::providers::{Provider, ProviderBuilder};
use std::sync::Arc;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};

/// Node RPC client wrapper.
#[derive(Clone)]
pub struct BlockchainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: url::Url,
}

impl BlockchainClient {
    /// Dial a node.
    ///
    /// The URL is parsed and the connection is proven with one `eth_chainId`
    /// call. There is no retry and no timeout beyond the transport default.
    pub async fn connect(rpc_url: &str) -> BlockchainResult<(Self, ChainId)> {
        let url: url::Url = rpc_url.parse().map_err(|e: url::ParseError| {
            BlockchainError::InvalidEndpoint {
                url: rpc_url.to_string(),
                reason: e.to_string(),
            }
        })?;

        let provider =
            Arc::new(ProviderBuilder::new().connect_http(url.clone())) as Arc<dyn Provider + Send + Sync>;
        let client = Self {
            provider,
            rpc_url: url,
        };

        let chain_id = client.get_chain_id().await?;
        tracing::info!(
            rpc_url = %client.rpc_url,
            chain_id = chain_id.0,
            "Blockchain client connected"
        );

        Ok((client, chain_id))
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.provider
            .get_chain_id()
            .await
            .map(ChainId)
            .map_err(|e| BlockchainError::Rpc(format!("eth_chainId failed: {}", e)))
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BlockchainResult<u64> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| BlockchainError::Rpc(format!("eth_blockNumber failed: {}", e)))
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &(dyn Provider + Send + Sync) {
        self.provider.as_ref()
    }

    pub fn rpc_url(&self) -> &url::Url {
        &self.rpc_url
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.rpc_url.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_rejected_without_dialing() {
        let err = BlockchainClient::connect("not a url").await.unwrap_err();
        assert!(matches!(err, BlockchainError::InvalidEndpoint { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[tokio::test]
    async fn test_unreachable_node_fails() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = BlockchainClient::connect(&format!("http://{}", addr)).await;
        assert!(matches!(result, Err(BlockchainError::Rpc(_))));
    }
}
