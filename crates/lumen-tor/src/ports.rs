//! # Port Selection
//!
//! Derives the three Tor client ports from the build profile.
//!
//! Each build variant gets its own port block (testnet +10, debug +100) so
//! debug/release and mainnet/testnet builds can run on one device without
//! colliding.

use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::profile::BuildProfile;

/// Base port for the SOCKS proxy exposed by the Tor client.
pub const SOCKS_PORT_BASE: u16 = 9070;

/// Base port for the Tor control connection.
pub const CONTROL_PORT_BASE: u16 = 9071;

/// Base port for inbound connections routed through the Tor client.
pub const LISTEN_PORT_BASE: u16 = 9760;

/// Offset applied to every port on testnet builds.
pub const TESTNET_OFFSET: u16 = 10;

/// Offset applied to every port on debug builds.
pub const DEBUG_OFFSET: u16 = 100;

/// Maps a [`BuildProfile`] to the three Tor client ports.
///
/// Each query is a pure function of the profile: identical profiles always
/// yield identical ports, with no side effects. Values are not cached here;
/// callers may cache them, since the profile is fixed for the process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortResolver {
    profile: BuildProfile,
}

impl PortResolver {
    /// Create a resolver for the given build profile.
    pub const fn new(profile: BuildProfile) -> Self {
        Self { profile }
    }

    /// Combined offset for this profile's port block.
    const fn offset(&self) -> u16 {
        let chain_offset = match self.profile.chain {
            Chain::Testnet => TESTNET_OFFSET,
            Chain::Mainnet => 0,
        };
        let debug_offset = if self.profile.debug { DEBUG_OFFSET } else { 0 };
        chain_offset + debug_offset
    }

    /// Local port for SOCKS-protocol traffic routing.
    pub const fn socks_port(&self) -> u16 {
        SOCKS_PORT_BASE + self.offset()
    }

    /// Local port for control commands to the Tor client.
    pub const fn control_port(&self) -> u16 {
        CONTROL_PORT_BASE + self.offset()
    }

    /// Port on which the node accepts inbound connections.
    pub const fn listen_port(&self) -> u16 {
        LISTEN_PORT_BASE + self.offset()
    }

    /// SOCKS proxy address as `ip:port`. The Tor client is only reachable
    /// over loopback.
    pub fn socks_addr(&self) -> String {
        format!("127.0.0.1:{}", self.socks_port())
    }

    /// Control connection address as `ip:port`, loopback only.
    pub fn control_addr(&self) -> String {
        format!("127.0.0.1:{}", self.control_port())
    }

    /// Listener bind address as `ip:port`.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.listen_port())
    }

    /// Snapshot of all three ports for this profile.
    pub const fn ports(&self) -> TorPorts {
        TorPorts {
            socks: self.socks_port(),
            control: self.control_port(),
            listen: self.listen_port(),
        }
    }
}

/// The three derived ports as one plain value, in the shape the Tor client
/// integration layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorPorts {
    /// SOCKS proxy port.
    pub socks: u16,

    /// Control connection port.
    pub control: u16,

    /// Inbound listener port.
    pub listen: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(chain: Chain, debug: bool) -> PortResolver {
        PortResolver::new(BuildProfile::new(chain, debug))
    }

    #[test]
    fn test_mainnet_release_ports() {
        let r = resolver(Chain::Mainnet, false);
        assert_eq!(r.socks_port(), 9070);
        assert_eq!(r.control_port(), 9071);
        assert_eq!(r.listen_port(), 9760);
    }

    #[test]
    fn test_mainnet_debug_ports() {
        let r = resolver(Chain::Mainnet, true);
        assert_eq!(r.socks_port(), 9170);
        assert_eq!(r.control_port(), 9171);
        assert_eq!(r.listen_port(), 9860);
    }

    #[test]
    fn test_testnet_release_ports() {
        let r = resolver(Chain::Testnet, false);
        assert_eq!(r.socks_port(), 9080);
        assert_eq!(r.control_port(), 9081);
        assert_eq!(r.listen_port(), 9770);
    }

    #[test]
    fn test_testnet_debug_ports() {
        let r = resolver(Chain::Testnet, true);
        assert_eq!(r.socks_port(), 9180);
        assert_eq!(r.control_port(), 9181);
        assert_eq!(r.listen_port(), 9870);
    }

    #[test]
    fn test_unknown_chain_behaves_as_mainnet() {
        let unknown = resolver(Chain::from_name("unknown"), false);
        let mainnet = resolver(Chain::Mainnet, false);
        assert_eq!(unknown.ports(), mainnet.ports());
    }

    #[test]
    fn test_ports_pairwise_distinct() {
        for chain in [Chain::Mainnet, Chain::Testnet] {
            for debug in [false, true] {
                let p = resolver(chain, debug).ports();
                assert_ne!(p.socks, p.control);
                assert_ne!(p.socks, p.listen);
                assert_ne!(p.control, p.listen);
            }
        }
    }

    #[test]
    fn test_repeated_queries_are_deterministic() {
        let r = resolver(Chain::Testnet, true);
        assert_eq!(r.socks_port(), r.socks_port());
        assert_eq!(r.control_port(), r.control_port());
        assert_eq!(r.listen_port(), r.listen_port());
    }

    #[test]
    fn test_addrs_embed_matching_port() {
        let r = resolver(Chain::Mainnet, true);
        assert_eq!(r.socks_addr(), "127.0.0.1:9170");
        assert_eq!(r.control_addr(), "127.0.0.1:9171");
        assert_eq!(r.listen_addr(), "0.0.0.0:9860");
    }

    #[test]
    fn test_tor_ports_serialization_shape() {
        let p = resolver(Chain::Testnet, false).ports();
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"socks": 9080, "control": 9081, "listen": 9770})
        );
    }
}
