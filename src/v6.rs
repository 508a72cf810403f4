//!IPv6 module
//!
//!Only address level is provided: there is no IPv6 network nor host range.

use core::{cmp, fmt, net, str};

use crate::base::{self, Family, NetworkAddress};
use crate::parser::{self, ParseError};

pub(crate) const BITS_LEN: u8 = net::Ipv6Addr::BITS as u8;

#[derive(Copy, Clone, Default)]
///IPv6 address
///
///Stored as 16 bytes in network byte order.
pub struct Ipv6Address {
    octets: [u8; 16],
}

impl Ipv6Address {
    ///`::`
    pub const UNSPECIFIED: Self = Self::new(0);
    ///`::1`
    pub const LOCALHOST: Self = Self::new(1);

    #[inline(always)]
    ///Creates address from host order integer
    pub const fn new(addr: u128) -> Self {
        Self {
            octets: addr.to_be_bytes(),
        }
    }

    #[inline(always)]
    ///Creates address from bytes in network order
    pub const fn from_octets(octets: [u8; 16]) -> Self {
        Self {
            octets
        }
    }

    #[inline(always)]
    ///Returns address bytes in network order
    pub const fn octets(&self) -> [u8; 16] {
        self.octets
    }

    #[inline(always)]
    ///Returns host order integer
    pub const fn to_u128(&self) -> u128 {
        u128::from_be_bytes(self.octets)
    }

    #[inline(always)]
    ///Returns `true` for `::`
    pub const fn is_unspecified(&self) -> bool {
        self.to_u128() == 0
    }

    #[inline(always)]
    ///IPv6 has no broadcast address, hence always `false`
    pub const fn is_broadcast(&self) -> bool {
        false
    }

    #[inline(always)]
    ///Returns `true` for `::1`
    pub const fn is_loopback(&self) -> bool {
        self.to_u128() == 1
    }

    #[inline(always)]
    ///Returns `true` for `ff00::/8`
    pub const fn is_multicast(&self) -> bool {
        self.octets[0] == 0xff
    }

    #[inline(always)]
    ///Returns `true` unless address is unspecified or multicast
    pub const fn is_unicast(&self) -> bool {
        !self.is_unspecified() && !self.is_multicast()
    }
}

impl NetworkAddress for Ipv6Address {
    const BITS_LEN: u8 = BITS_LEN;
    const FAMILY: Family = Family::Ipv6;

    #[inline(always)]
    fn octets(&self) -> &[u8] {
        &self.octets
    }

    #[inline(always)]
    fn is_unspecified(&self) -> bool {
        Ipv6Address::is_unspecified(self)
    }

    #[inline(always)]
    fn is_broadcast(&self) -> bool {
        Ipv6Address::is_broadcast(self)
    }

    #[inline(always)]
    fn is_loopback(&self) -> bool {
        Ipv6Address::is_loopback(self)
    }

    #[inline(always)]
    fn is_multicast(&self) -> bool {
        Ipv6Address::is_multicast(self)
    }

    #[inline(always)]
    fn is_unicast(&self) -> bool {
        Ipv6Address::is_unicast(self)
    }

    #[inline(always)]
    fn compare(&self, other: &Self) -> cmp::Ordering {
        self.to_u128().cmp(&other.to_u128())
    }
}

base::impl_address_relations!(Ipv6Address);

impl From<u128> for Ipv6Address {
    #[inline(always)]
    fn from(addr: u128) -> Self {
        Self::new(addr)
    }
}

impl From<net::Ipv6Addr> for Ipv6Address {
    #[inline(always)]
    fn from(addr: net::Ipv6Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<Ipv6Address> for net::Ipv6Addr {
    #[inline(always)]
    fn from(addr: Ipv6Address) -> Self {
        net::Ipv6Addr::from(addr.octets)
    }
}

impl str::FromStr for Ipv6Address {
    type Err = ParseError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parser::parse_ipv6(text).inspect_err(|error| {
            log::debug!("Rejected IPv6 '{text}': {error}");
        })
    }
}

impl fmt::Display for Ipv6Address {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&net::Ipv6Addr::from(self.octets), fmt)
    }
}

impl fmt::Debug for Ipv6Address {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

#[cfg(feature = "serde")]
base::impl_serde_via_str!(Ipv6Address, "IPv6 address");
