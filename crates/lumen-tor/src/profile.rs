//! # Build Profile
//!
//! Build-time configuration the port policy depends on.

use std::env;

use serde::{Deserialize, Serialize};

use crate::chain::Chain;

/// Build-time configuration supplied by the packaging system.
///
/// Immutable for the lifetime of a running instance; the packaging system
/// fixes both fields when the application is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildProfile {
    /// Target network chain.
    pub chain: Chain,

    /// Whether this is a debug build.
    pub debug: bool,
}

impl Default for BuildProfile {
    fn default() -> Self {
        Self {
            chain: Chain::Mainnet,
            debug: false,
        }
    }
}

impl BuildProfile {
    /// Create a profile for a specific chain and build type.
    pub const fn new(chain: Chain, debug: bool) -> Self {
        Self { chain, debug }
    }

    /// Create a profile from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LUMEN_CHAIN`: chain name (default: mainnet; unrecognized names
    ///   behave as mainnet)
    /// - `LUMEN_DEBUG`: override the compiled-in debug flag (default:
    ///   `cfg!(debug_assertions)`)
    pub fn from_env() -> Self {
        let chain = Chain::from_name(
            &env::var("LUMEN_CHAIN").unwrap_or_else(|_| "mainnet".to_string()),
        );

        let debug = env::var("LUMEN_DEBUG")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(cfg!(debug_assertions));

        let profile = Self { chain, debug };
        tracing::debug!(chain = %profile.chain, debug = profile.debug, "resolved build profile");
        profile
    }
}
