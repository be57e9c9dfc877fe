#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value};
use tiny_http::{Response, Server, StatusCode};

use counter_wallet_core::WalletHandle;

pub const BRIDGE_ACCOUNT: &str = "0x2000000000000000000000000000000000000002";
pub const BRIDGE_TX_HASH: &str =
    "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// How the mock bridge answers `eth_sendTransaction`.
#[derive(Debug, Clone, Copy)]
pub enum SendBehaviour {
    Accept,
    UserRejects,
    ServerError,
}

pub fn wallet_handle() -> WalletHandle {
    WalletHandle {
        address: BRIDGE_ACCOUNT.parse().expect("valid account"),
        chain_id: 84_532,
    }
}

/// JSON-RPC wallet bridge on a random local port. Every request body is
/// recorded in `calls`.
pub fn spawn_wallet_bridge(
    calls: Arc<Mutex<Vec<Value>>>,
    send: SendBehaviour,
) -> (String, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").expect("start server");
    let addr = format!("http://{}", server.server_addr());

    let join = thread::spawn(move || {
        for _ in 0..8 {
            let mut req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            let mut body = String::new();
            let _ = req.as_reader().read_to_string(&mut body);
            let rpc: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            if let Ok(mut g) = calls.lock() {
                g.push(rpc.clone());
            }

            let id = rpc.get("id").cloned().unwrap_or(json!(1));
            let method = rpc.get("method").and_then(Value::as_str).unwrap_or_default();
            let (code, payload) = match (method, send) {
                ("eth_requestAccounts", _) => {
                    (200, json!({"jsonrpc": "2.0", "id": id, "result": [BRIDGE_ACCOUNT]}))
                }
                ("eth_chainId", _) => (200, json!({"jsonrpc": "2.0", "id": id, "result": "0x14a34"})),
                ("eth_sendTransaction", SendBehaviour::Accept) => {
                    (200, json!({"jsonrpc": "2.0", "id": id, "result": BRIDGE_TX_HASH}))
                }
                ("eth_sendTransaction", SendBehaviour::UserRejects) => (
                    200,
                    json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "error": {"code": 4001, "message": "User rejected the request."}
                    }),
                ),
                ("eth_sendTransaction", SendBehaviour::ServerError) => {
                    (502, json!({"jsonrpc": "2.0", "id": id, "status": "bad gateway"}))
                }
                _ => (404, json!({"error": "not found"})),
            };

            let response =
                Response::from_string(payload.to_string()).with_status_code(StatusCode(code));
            let _ = req.respond(response);
        }
    });

    (addr, join)
}
