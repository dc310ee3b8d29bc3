//! Relay wire types.
//!
//! Request params and results follow the Flashbots relay JSON-RPC surface.
//! Numeric result fields are kept as the relay renders them; unknown fields
//! are ignored.

use serde::{Deserialize, Serialize};

pub use crate::config::schema::Bundle;

/// Simulation method.
pub const CALL_BUNDLE_METHOD: &str = "eth_callBundle";

/// Submission method.
pub const SEND_BUNDLE_METHOD: &str = "eth_sendBundle";

/// Header carrying `<address>:<signature>` for relay authentication.
pub const FLASHBOTS_SIGNATURE_HEADER: &str = "X-Flashbots-Signature";

impl Bundle {
    /// Target block as a lowercase `0x`-prefixed hex quantity.
    pub fn block_number_hex(&self) -> String {
        format!("{:#x}", self.block_number)
    }

    /// Params for `eth_callBundle`.
    pub fn call_params(&self) -> CallBundleParams {
        CallBundleParams {
            txs: self.txs.clone(),
            block_number: self.block_number_hex(),
            state_block_number: self.state_block_number.clone(),
            timestamp: None,
        }
    }

    /// Params for `eth_sendBundle`.
    pub fn send_params(&self) -> SendBundleParams {
        SendBundleParams {
            txs: self.txs.clone(),
            block_number: self.block_number_hex(),
            min_timestamp: self.min_timestamp,
            max_timestamp: self.max_timestamp,
            reverting_tx_hashes: self.reverting_tx_hashes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBundleParams {
    pub txs: Vec<String>,
    pub block_number: String,
    pub state_block_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBundleParams {
    pub txs: Vec<String>,
    pub block_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reverting_tx_hashes: Vec<String>,
}

/// Outcome of `eth_callBundle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CallBundleResult {
    pub bundle_gas_price: String,
    pub bundle_hash: String,
    pub coinbase_diff: String,
    pub eth_sent_to_coinbase: String,
    pub gas_fees: String,
    pub results: Vec<TxSimulation>,
    pub state_block_number: u64,
    pub total_gas_used: u64,
}

/// Per-transaction entry of a simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TxSimulation {
    pub coinbase_diff: String,
    pub eth_sent_to_coinbase: String,
    pub from_address: String,
    pub gas_fees: String,
    pub gas_price: String,
    pub gas_used: u64,
    pub to_address: String,
    pub tx_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert: Option<String>,
}

/// Outcome of `eth_sendBundle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendBundleResult {
    pub bundle_hash: String,
}

/// JSON-RPC 2.0 request envelope with a single params object.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: [P; 1],
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub fn new(method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params: [params],
        }
    }
}

/// Relay response: either a JSON-RPC envelope or a bare `{"error": ...}`.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<ErrorPayload>,
}

/// Error body returned by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Object {
        #[serde(default)]
        code: Option<i64>,
        message: String,
    },
    Message(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_number_hex() {
        let bundle = Bundle::default();
        assert_eq!(bundle.block_number_hex(), "0xca99fa");

        let bundle = Bundle {
            block_number: 0,
            ..Bundle::default()
        };
        assert_eq!(bundle.block_number_hex(), "0x0");
    }

    #[test]
    fn test_call_params_wire_shape() {
        let bundle = Bundle {
            txs: vec!["0xAbC".into()],
            block_number: 16,
            ..Bundle::default()
        };
        let request = JsonRpcRequest::new(CALL_BUNDLE_METHOD, bundle.call_params());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "eth_callBundle",
                "params": [{
                    "txs": ["0xAbC"],
                    "blockNumber": "0x10",
                    "stateBlockNumber": "latest"
                }]
            })
        );
    }

    #[test]
    fn test_send_params_optional_fields() {
        let mut bundle = Bundle::default();
        let params = serde_json::to_value(bundle.send_params()).unwrap();
        assert_eq!(params.as_object().unwrap().len(), 2);

        bundle.min_timestamp = Some(1);
        bundle.reverting_tx_hashes = vec!["0xdead".into()];
        let params = serde_json::to_value(bundle.send_params()).unwrap();
        assert_eq!(params["minTimestamp"], 1);
        assert_eq!(params["revertingTxHashes"], json!(["0xdead"]));
        assert!(params.get("maxTimestamp").is_none());
    }

    #[test]
    fn test_params_forward_transactions_verbatim() {
        let bundle = Bundle::default();
        let call = bundle.call_params();
        let send = bundle.send_params();
        assert_eq!(call.txs, send.txs);
        assert_eq!(call.block_number, send.block_number);
        assert_eq!(call.txs, bundle.txs);
    }

    #[test]
    fn test_call_result_decodes_relay_shape() {
        let body = json!({
            "bundleGasPrice": "476190476193",
            "bundleHash": "0x73b1e258c7a42fd0230b2fd05529c5d4b6fcb66c227783f8bece8aeacdd1db2e",
            "coinbaseDiff": "20000000000126000",
            "ethSentToCoinbase": "20000000000000000",
            "gasFees": "126000",
            "results": [{
                "coinbaseDiff": "10000000000063000",
                "ethSentToCoinbase": "10000000000000000",
                "fromAddress": "0x02A727155aeF8609c9f7F2179b2a1f560B39F5A0",
                "gasFees": "63000",
                "gasPrice": "476190476193",
                "gasUsed": 21000,
                "toAddress": "0x73625f59CAdc5009Cb458B751b3E7b6b48C06f2C",
                "txHash": "0x669b4704a7d993a946cdd6e2f95233f308ce0c4649d2e04944e8299efcaa098a",
                "value": "0x"
            }],
            "stateBlockNumber": 5221585,
            "totalGasUsed": 42000,
            "somethingNew": true
        });
        let result: CallBundleResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.total_gas_used, 42000);
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].gas_used, 21000);
        assert_eq!(result.results[0].value.as_deref(), Some("0x"));
        assert_eq!(result.results[0].error, None);
    }

    #[test]
    fn test_error_payload_forms() {
        let rpc: JsonRpcResponse<SendBundleResult> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32000, "message": "bundle too old"}
        }))
        .unwrap();
        assert_eq!(
            rpc.error,
            Some(ErrorPayload::Object {
                code: Some(-32000),
                message: "bundle too old".into()
            })
        );
        assert!(rpc.result.is_none());

        let bare: JsonRpcResponse<SendBundleResult> =
            serde_json::from_value(json!({"error": "missing signature"})).unwrap();
        assert_eq!(bare.error, Some(ErrorPayload::Message("missing signature".into())));
    }
}
