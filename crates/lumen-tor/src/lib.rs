//! # Lumen Tor Configuration
//!
//! Port selection for the Tor client embedded in the Lumen Wallet.
//!
//! The wallet ships in four variants (mainnet/testnet x debug/release), and
//! during development several of them run on the same device at once. Each
//! variant therefore gets its own block of Tor ports, derived from the
//! [`BuildProfile`] fixed at packaging time:
//!
//! | Variant          | SOCKS | Control | Listener |
//! |------------------|-------|---------|----------|
//! | mainnet release  | 9070  | 9071    | 9760     |
//! | testnet release  | 9080  | 9081    | 9770     |
//! | mainnet debug    | 9170  | 9171    | 9860     |
//! | testnet debug    | 9180  | 9181    | 9870     |
//!
//! This crate only derives the numbers; the Tor client integration layer
//! owns the sockets.
//!
//! ## Usage
//!
//! ```rust
//! use lumen_tor::{BuildProfile, Chain, PortResolver};
//!
//! let resolver = PortResolver::new(BuildProfile::new(Chain::Testnet, false));
//! assert_eq!(resolver.socks_port(), 9080);
//! assert_eq!(resolver.socks_addr(), "127.0.0.1:9080");
//! ```

#![warn(missing_docs)]

mod chain;
mod ports;
mod profile;

pub use chain::Chain;
pub use ports::{
    PortResolver, TorPorts, CONTROL_PORT_BASE, DEBUG_OFFSET, LISTEN_PORT_BASE, SOCKS_PORT_BASE,
    TESTNET_OFFSET,
};
pub use profile::BuildProfile;
