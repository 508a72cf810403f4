//!IPv4 network module

use core::{fmt, hash, str};

use crate::parser::{self, ParseError};
use crate::prefix::Prefix;
use crate::range::Ipv4AddressRange;
use crate::v4::{self, Ipv4Address};

#[derive(Copy, Clone, Default)]
///IPv4 network, i.e. address with prefix
///
///Address is stored as it is given, host bits included.
///Network and broadcast addresses are derived from it on demand.
///
///Two networks are equal when both [network](#method.network) and [prefix](#method.prefix) are equal:
///```
///use ip_hosts::Ipv4Network;
///
///assert_eq!(Ipv4Network::from_bits(0x01020304, 16), Ipv4Network::from_bits(0x01020405, 16));
///assert_ne!(Ipv4Network::from_bits(0x01020304, 16), Ipv4Network::from_bits(0x01020304, 17));
///```
pub struct Ipv4Network {
    addr: Ipv4Address,
    prefix: Prefix,
}

impl Ipv4Network {
    #[inline(always)]
    ///Creates network out of `addr` and `prefix`
    pub const fn new(addr: Ipv4Address, prefix: Prefix) -> Self {
        Self {
            addr,
            prefix,
        }
    }

    #[inline(always)]
    ///Creates network out of host order integer and prefix length
    pub const fn from_bits(addr: u32, prefix_len: u8) -> Self {
        Self::new(Ipv4Address::new(addr), Prefix::new(prefix_len))
    }

    #[inline(always)]
    ///Returns address as it was stored
    pub const fn address(&self) -> Ipv4Address {
        self.addr
    }

    #[inline(always)]
    ///Returns prefix
    pub const fn prefix(&self) -> Prefix {
        self.prefix
    }

    #[inline(always)]
    ///Returns network mask
    pub const fn netmask(&self) -> Ipv4Address {
        self.prefix.ipv4_mask()
    }

    #[inline(always)]
    ///Returns network address, which is the lowest possible address within network
    pub fn network(&self) -> Ipv4Address {
        self.addr & self.netmask()
    }

    #[inline(always)]
    ///Returns broadcast address, which is the highest possible address within network
    pub fn broadcast(&self) -> Ipv4Address {
        self.network() | !self.netmask()
    }

    #[inline(always)]
    ///Checks if a given `addr` is contained within `self`
    pub fn contains(&self, addr: Ipv4Address) -> bool {
        (addr & self.netmask()) == self.network()
    }

    ///Returns range of addresses usable by hosts
    ///
    ///- `/32` consists of the address itself;
    ///- `/31` is point to point link, so both addresses are usable;
    ///- otherwise network and broadcast addresses are excluded.
    ///
    ///Prefix longer than 32 is not special, producing range from `address + 1` to `address - 1`.
    pub fn hosts(&self) -> Ipv4AddressRange {
        match self.prefix.length() {
            32 => {
                log::trace!("{self}: single host");
                Ipv4AddressRange::new(self.addr, self.addr)
            },
            31 => {
                log::trace!("{self}: point to point hosts");
                Ipv4AddressRange::new(self.network(), self.broadcast())
            },
            _ => {
                log::trace!("{self}: hosts exclude network and broadcast");
                Ipv4AddressRange::new(self.network().next(), self.broadcast().prev())
            }
        }
    }
}

impl PartialEq for Ipv4Network {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.network() == other.network() && self.prefix == other.prefix
    }
}

impl Eq for Ipv4Network {}

impl hash::Hash for Ipv4Network {
    #[inline(always)]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.network(), state);
        hash::Hash::hash(&self.prefix, state);
    }
}

impl fmt::Display for Ipv4Network {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { addr, prefix } = self;
        fmt.write_fmt(format_args!("{addr}/{prefix}"))
    }
}

impl fmt::Debug for Ipv4Network {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

impl str::FromStr for Ipv4Network {
    type Err = ParseError;

    ///Parses `addr/prefix`, while bare address is treated as `/32`
    ///
    ///Prefix may be any length up to [MAX_LEN](constant.MAX_LEN.html), same as accepted by constructors.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = parser::parse_ipv4_network(text)?;
        Ok(Self::new(addr, Prefix::new(prefix.unwrap_or(v4::BITS_LEN))))
    }
}

#[cfg(feature = "serde")]
crate::base::impl_serde_via_str!(Ipv4Network, "IPv4 network in the form of addr/prefix");
