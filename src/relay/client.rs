//! Flashbots-style relay client.
//!
//! # Responsibilities
//! - Encode `eth_callBundle` / `eth_sendBundle` JSON-RPC requests
//! - Authenticate each request with the signing key
//! - Separate relay rejections from transport and decoding failures
//!
//! # Request Signing
//! ```text
//! body      = serialized JSON-RPC request
//! message   = "0x" + hex(keccak256(body))
//! signature = EIP-191 personal_sign(message) by the signing key
//! header    = X-Flashbots-Signature: <signer address>:<0x signature>
//! ```

use std::future::Future;

use alloy::primitives::{hex, keccak256};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::blockchain::wallet::Wallet;
use crate::relay::error::{RelayError, RelayResult};
use crate::relay::types::{
    Bundle, CallBundleResult, JsonRpcRequest, JsonRpcResponse, SendBundleResult,
    CALL_BUNDLE_METHOD, FLASHBOTS_SIGNATURE_HEADER, SEND_BUNDLE_METHOD,
};

/// The two relay calls a submission needs.
pub trait BundleRelay {
    /// Simulate the bundle against its state block.
    fn call_bundle(
        &self,
        bundle: &Bundle,
    ) -> impl Future<Output = RelayResult<CallBundleResult>> + Send;

    /// Submit the bundle for inclusion at its target block.
    fn send_bundle(
        &self,
        bundle: &Bundle,
    ) -> impl Future<Output = RelayResult<SendBundleResult>> + Send;
}

/// HTTP JSON-RPC client for a single relay.
#[derive(Debug, Clone)]
pub struct FlashbotsRelay {
    http: Client,
    url: url::Url,
    signer: Wallet,
}

impl FlashbotsRelay {
    /// Create a relay client that signs requests with `signer`.
    pub fn new(relay_url: &str, signer: Wallet) -> RelayResult<Self> {
        let url = url::Url::parse(relay_url).map_err(|e| RelayError::InvalidEndpoint {
            url: relay_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http: Client::new(),
            url,
            signer,
        })
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }

    async fn call<P, R>(&self, method: &'static str, params: P) -> RelayResult<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = JsonRpcRequest::new(method, params);
        let body = serde_json::to_string(&request)
            .map_err(|e| RelayError::Transport(format!("failed to encode {}: {}", method, e)))?;
        let signature = sign_payload(&self.signer, &body).await?;

        tracing::debug!(method, relay = %self.url, body = %body, "Relay request");

        let response = self
            .http
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(FLASHBOTS_SIGNATURE_HEADER, signature)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(method, status = %status, body = %text, "Relay response");

        decode_response(status, &text)
    }
}

impl BundleRelay for FlashbotsRelay {
    async fn call_bundle(&self, bundle: &Bundle) -> RelayResult<CallBundleResult> {
        self.call(CALL_BUNDLE_METHOD, bundle.call_params()).await
    }

    async fn send_bundle(&self, bundle: &Bundle) -> RelayResult<SendBundleResult> {
        self.call(SEND_BUNDLE_METHOD, bundle.send_params()).await
    }
}

/// Build the `X-Flashbots-Signature` header value for a request body.
pub async fn sign_payload(signer: &Wallet, body: &str) -> RelayResult<String> {
    let message = hex::encode_prefixed(keccak256(body.as_bytes()));
    let signature = signer
        .sign_message(message.as_bytes())
        .await
        .map_err(|e| RelayError::Signing(e.to_string()))?;

    Ok(format!(
        "{}:{}",
        signer.address(),
        hex::encode_prefixed(signature.as_bytes())
    ))
}

/// Classify a relay response body.
///
/// An error body wins regardless of HTTP status. A non-success status without
/// one is a transport failure; a success status with an unreadable body is a
/// decode failure.
pub fn decode_response<R: DeserializeOwned>(status: StatusCode, text: &str) -> RelayResult<R> {
    match serde_json::from_str::<JsonRpcResponse<R>>(text) {
        Ok(JsonRpcResponse {
            error: Some(error), ..
        }) => Err(error.into()),
        Ok(_) | Err(_) if !status.is_success() => Err(RelayError::Transport(format!(
            "relay returned HTTP {}: {}",
            status, text
        ))),
        Ok(JsonRpcResponse {
            result: Some(result),
            ..
        }) => Ok(result),
        Ok(_) => Err(RelayError::Decode(
            "response carried neither result nor error".to_string(),
        )),
        Err(e) => Err(RelayError::Decode(e.to_string())),
    }
}
