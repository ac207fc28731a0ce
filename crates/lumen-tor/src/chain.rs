//! # Chain Identifiers
//!
//! Which network environment a wallet build targets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Network chain a wallet build targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Production network.
    #[default]
    Mainnet,
    /// Public test network.
    Testnet,
}

impl Chain {
    /// Resolve a chain from its build-time name.
    ///
    /// Only the exact name `"testnet"` selects [`Chain::Testnet`]; any other
    /// name (including unrecognized chains) behaves as mainnet.
    pub fn from_name(name: &str) -> Self {
        if name == "testnet" {
            Chain::Testnet
        } else {
            Chain::Mainnet
        }
    }

    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Chain::Mainnet => "mainnet",
            Chain::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
