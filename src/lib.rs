//! IP address, prefix and network value types
//!
//! - [Ipv4Address](struct.Ipv4Address.html) and [Ipv6Address](struct.Ipv6Address.html) are
//!   concrete address families implementing [NetworkAddress](base/trait.NetworkAddress.html);
//! - [Prefix](struct.Prefix.html) is family independent prefix length convertible into network mask;
//! - [Ipv4Network](struct.Ipv4Network.html) derives network, broadcast and host range out of
//!   address and prefix;
//! - [Ipv4AddressRange](struct.Ipv4AddressRange.html) lazily enumerates addresses.
//!
//! ```
//! use ip_hosts::Ipv4Network;
//!
//! let network = Ipv4Network::from_bits(0x01020304, 24);
//! assert_eq!(network.network().to_string(), "1.2.3.0");
//! assert_eq!(network.broadcast().to_string(), "1.2.3.255");
//! assert_eq!(network.hosts().iter().count(), 254);
//! ```
//!
//! ## Features
//!
//! - `serde` - Enables serialization of addresses, prefixes and networks using their textual form.

#![no_std]
#![warn(missing_docs)]
#![allow(clippy::style)]

extern crate alloc;

mod parser;
pub use parser::{parse_ip, parse_ipv4, parse_ipv6, ParseError};
pub mod base;
pub use base::{Family, NetworkAddress};
mod v4;
pub use v4::Ipv4Address;
mod v6;
pub use v6::Ipv6Address;
mod prefix;
pub use prefix::{Prefix, PrefixLenError, MAX_LEN};
mod network;
pub use network::Ipv4Network;
mod range;
pub use range::{Ipv4AddressRange, Ipv4AddressRangeIterator, Iter};

use core::{fmt, net, str};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
///Address of any family
///
///Equality is exact equality of the family and bytes.
///Ordering puts every IPv4 address before any IPv6 address.
pub enum Address {
    ///IPv4 address
    V4(Ipv4Address),
    ///IPv6 address
    V6(Ipv6Address),
}

impl Address {
    ///Number of bits within ipv4 address
    pub const IPV4_BITS: u8 = v4::BITS_LEN;
    ///Number of bits within ipv6 address
    pub const IPV6_BITS: u8 = v6::BITS_LEN;

    #[inline(always)]
    ///Returns address family
    pub const fn family(&self) -> Family {
        match self {
            Self::V4(_) => Family::Ipv4,
            Self::V6(_) => Family::Ipv6,
        }
    }

    #[inline(always)]
    ///Returns address bytes in network order: 4 for IPv4 and 16 for IPv6
    pub fn octets(&self) -> &[u8] {
        match self {
            Self::V4(addr) => NetworkAddress::octets(addr),
            Self::V6(addr) => NetworkAddress::octets(addr),
        }
    }

    #[inline(always)]
    ///Returns `true` for the unspecified address
    pub const fn is_unspecified(&self) -> bool {
        match self {
            Self::V4(addr) => addr.is_unspecified(),
            Self::V6(addr) => addr.is_unspecified(),
        }
    }

    #[inline(always)]
    ///Returns `true` for the broadcast address
    pub const fn is_broadcast(&self) -> bool {
        match self {
            Self::V4(addr) => addr.is_broadcast(),
            Self::V6(addr) => addr.is_broadcast(),
        }
    }

    #[inline(always)]
    ///Returns `true` for the loopback address
    pub const fn is_loopback(&self) -> bool {
        match self {
            Self::V4(addr) => addr.is_loopback(),
            Self::V6(addr) => addr.is_loopback(),
        }
    }

    #[inline(always)]
    ///Returns `true` for the multicast address
    pub const fn is_multicast(&self) -> bool {
        match self {
            Self::V4(addr) => addr.is_multicast(),
            Self::V6(addr) => addr.is_multicast(),
        }
    }

    #[inline(always)]
    ///Returns `true` for the unicast address
    pub const fn is_unicast(&self) -> bool {
        match self {
            Self::V4(addr) => addr.is_unicast(),
            Self::V6(addr) => addr.is_unicast(),
        }
    }
}

impl Default for Address {
    #[inline(always)]
    fn default() -> Self {
        Self::V4(Ipv4Address::UNSPECIFIED)
    }
}

impl From<Ipv4Address> for Address {
    #[inline(always)]
    fn from(addr: Ipv4Address) -> Self {
        Self::V4(addr)
    }
}

impl From<Ipv6Address> for Address {
    #[inline(always)]
    fn from(addr: Ipv6Address) -> Self {
        Self::V6(addr)
    }
}

impl From<net::IpAddr> for Address {
    #[inline(always)]
    fn from(addr: net::IpAddr) -> Self {
        match addr {
            net::IpAddr::V4(addr) => Self::V4(addr.into()),
            net::IpAddr::V6(addr) => Self::V6(addr.into()),
        }
    }
}

impl From<Address> for net::IpAddr {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(addr) => net::IpAddr::V4(addr.into()),
            Address::V6(addr) => net::IpAddr::V6(addr.into()),
        }
    }
}

impl str::FromStr for Address {
    type Err = ParseError;

    ///Parses address of either family, rejecting CIDR prefix
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match parse_ip(text)? {
            (addr, None) => Ok(addr),
            (_, Some(_)) => {
                log::debug!("Rejected IP '{text}': unexpected prefix");
                Err(ParseError::UnexpectedCharacter('/', text.find('/').unwrap_or_default()))
            }
        }
    }
}

impl fmt::Display for Address {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(addr) => fmt::Display::fmt(addr, fmt),
            Self::V6(addr) => fmt::Display::fmt(addr, fmt),
        }
    }
}

#[cfg(feature = "serde")]
base::impl_serde_via_str!(Address, "IPv4 or IPv6 address");
