//!IPv4 module

use core::{cmp, fmt, net, ops, str};

use crate::base::{self, Family, NetworkAddress};
use crate::parser::{self, ParseError};

pub(crate) const BITS_LEN: u8 = net::Ipv4Addr::BITS as u8;

#[derive(Copy, Clone, Default)]
///IPv4 address
///
///Stored as 4 bytes in network byte order, while arithmetic is performed over host order `u32`.
///
///Increment and decrement wrap around at the boundaries of address space:
///```
///use ip_hosts::Ipv4Address;
///
///assert_eq!(Ipv4Address::BROADCAST.next(), Ipv4Address::UNSPECIFIED);
///assert_eq!(Ipv4Address::UNSPECIFIED.prev(), Ipv4Address::BROADCAST);
///```
pub struct Ipv4Address {
    octets: [u8; 4],
}

impl Ipv4Address {
    ///`0.0.0.0`
    pub const UNSPECIFIED: Self = Self::new(0);
    ///`255.255.255.255`
    pub const BROADCAST: Self = Self::new(u32::MAX);
    ///`127.0.0.1`
    pub const LOCALHOST: Self = Self::new(0x7f00_0001);

    #[inline(always)]
    ///Creates address from host order integer
    pub const fn new(addr: u32) -> Self {
        Self {
            octets: addr.to_be_bytes(),
        }
    }

    #[inline(always)]
    ///Creates address from bytes in network order
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self {
            octets
        }
    }

    #[inline(always)]
    ///Returns address bytes in network order
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    #[inline(always)]
    ///Returns host order integer
    pub const fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    #[inline(always)]
    ///Returns address following `self`, wrapping `255.255.255.255` to `0.0.0.0`
    pub const fn next(self) -> Self {
        Self::new(self.to_u32().wrapping_add(1))
    }

    #[inline(always)]
    ///Returns address preceding `self`, wrapping `0.0.0.0` to `255.255.255.255`
    pub const fn prev(self) -> Self {
        Self::new(self.to_u32().wrapping_sub(1))
    }

    #[inline]
    ///Moves `self` to the next address, returning previous value
    pub fn advance(&mut self) -> Self {
        let current = *self;
        *self = current.next();
        current
    }

    #[inline]
    ///Moves `self` to the previous address, returning previous value
    pub fn retreat(&mut self) -> Self {
        let current = *self;
        *self = current.prev();
        current
    }

    #[inline(always)]
    ///Returns `true` for `0.0.0.0`
    pub const fn is_unspecified(&self) -> bool {
        self.to_u32() == 0
    }

    #[inline(always)]
    ///Returns `true` for `255.255.255.255`
    pub const fn is_broadcast(&self) -> bool {
        self.to_u32() == u32::MAX
    }

    #[inline(always)]
    ///Returns `true` for `127.0.0.0/8`
    pub const fn is_loopback(&self) -> bool {
        self.octets[0] == 0x7f
    }

    #[inline(always)]
    ///Returns `true` for `224.0.0.0/4`
    pub const fn is_multicast(&self) -> bool {
        self.octets[0] & 0xf0 == 0xe0
    }

    #[inline(always)]
    ///Returns `true` unless address is unspecified, broadcast or multicast
    ///
    ///Link-local, private and other special purpose blocks are all unicast.
    pub const fn is_unicast(&self) -> bool {
        !self.is_unspecified() && !self.is_broadcast() && !self.is_multicast()
    }
}

impl NetworkAddress for Ipv4Address {
    const BITS_LEN: u8 = BITS_LEN;
    const FAMILY: Family = Family::Ipv4;

    #[inline(always)]
    fn octets(&self) -> &[u8] {
        &self.octets
    }

    #[inline(always)]
    fn is_unspecified(&self) -> bool {
        Ipv4Address::is_unspecified(self)
    }

    #[inline(always)]
    fn is_broadcast(&self) -> bool {
        Ipv4Address::is_broadcast(self)
    }

    #[inline(always)]
    fn is_loopback(&self) -> bool {
        Ipv4Address::is_loopback(self)
    }

    #[inline(always)]
    fn is_multicast(&self) -> bool {
        Ipv4Address::is_multicast(self)
    }

    #[inline(always)]
    fn is_unicast(&self) -> bool {
        Ipv4Address::is_unicast(self)
    }

    #[inline(always)]
    fn compare(&self, other: &Self) -> cmp::Ordering {
        self.to_u32().cmp(&other.to_u32())
    }
}

base::impl_address_relations!(Ipv4Address);

impl ops::BitAnd for Ipv4Address {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, other: Self) -> Self {
        Self::new(self.to_u32() & other.to_u32())
    }
}

impl ops::BitOr for Ipv4Address {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, other: Self) -> Self {
        Self::new(self.to_u32() | other.to_u32())
    }
}

impl ops::Not for Ipv4Address {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self::new(!self.to_u32())
    }
}

impl From<u32> for Ipv4Address {
    #[inline(always)]
    fn from(addr: u32) -> Self {
        Self::new(addr)
    }
}

impl From<Ipv4Address> for u32 {
    #[inline(always)]
    fn from(addr: Ipv4Address) -> Self {
        addr.to_u32()
    }
}

impl From<net::Ipv4Addr> for Ipv4Address {
    #[inline(always)]
    fn from(addr: net::Ipv4Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<Ipv4Address> for net::Ipv4Addr {
    #[inline(always)]
    fn from(addr: Ipv4Address) -> Self {
        net::Ipv4Addr::from(addr.octets)
    }
}

impl str::FromStr for Ipv4Address {
    type Err = ParseError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parser::parse_ipv4(text).inspect_err(|error| {
            log::debug!("Rejected IPv4 '{text}': {error}");
        })
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        fmt.write_fmt(format_args!("{a}.{b}.{c}.{d}"))
    }
}

impl fmt::Debug for Ipv4Address {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

#[cfg(feature = "serde")]
base::impl_serde_via_str!(Ipv4Address, "IPv4 address in dotted-decimal form");
