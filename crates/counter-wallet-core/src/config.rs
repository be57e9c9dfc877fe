use alloy::primitives::{address, Address};

/// Placeholder substituted with the transaction hash in the explorer template.
pub const HASH_PLACEHOLDER: &str = "{hash}";

/// Networks with a known name and block explorer: `(chain id, name, explorer)`.
const KNOWN_CHAINS: &[(u64, &str, &str)] = &[
    (1, "ethereum", "https://etherscan.io"),
    (10, "optimism", "https://optimistic.etherscan.io"),
    (8_453, "base", "https://basescan.org"),
    (42_161, "arbitrum", "https://arbiscan.io"),
    (84_532, "base-sepolia", "https://sepolia.basescan.org"),
    (11_155_111, "sepolia", "https://sepolia.etherscan.io"),
];

pub fn chain_name_for_id(chain_id: u64) -> Option<&'static str> {
    KNOWN_CHAINS
        .iter()
        .find(|(id, _, _)| *id == chain_id)
        .map(|(_, name, _)| *name)
}

/// Explorer root for a chain name; `mainnet` is accepted for `ethereum`.
pub fn explorer_base_url(chain_name: &str) -> Option<&'static str> {
    let name = chain_name.to_ascii_lowercase();
    let name = if name == "mainnet" { "ethereum" } else { name.as_str() };
    KNOWN_CHAINS
        .iter()
        .find(|(_, known, _)| *known == name)
        .map(|(_, _, base)| *base)
}

#[derive(Debug, Clone)]
pub struct SubmitterConfig {
    pub counter_address: Address,
    pub explorer_tx_url_template: String,
    pub chain_name: String,
    pub chain_id: u64,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            counter_address: address!("0xA63b3f815016c753cEbCe9FA2c8a390E78a1304c"),
            explorer_tx_url_template: "https://sepolia.basescan.org/tx/{hash}".to_owned(),
            chain_name: "base-sepolia".to_owned(),
            chain_id: 84_532,
        }
    }
}

impl SubmitterConfig {
    /// Explorer page for `hash`. Templates without a placeholder get the hash
    /// appended as a path segment.
    pub fn explorer_tx_url(&self, hash: &str) -> String {
        if self.explorer_tx_url_template.contains(HASH_PLACEHOLDER) {
            self.explorer_tx_url_template.replace(HASH_PLACEHOLDER, hash)
        } else {
            format!(
                "{}/{}",
                self.explorer_tx_url_template.trim_end_matches('/'),
                hash
            )
        }
    }
}
