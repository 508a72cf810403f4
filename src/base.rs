//! Base module

use core::{cmp, fmt, hash, str};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
///Address family
pub enum Family {
    ///IPv4, 4 bytes
    Ipv4,
    ///IPv6, 16 bytes
    Ipv6,
}

///Network address trait
///
///Capabilities shared by every concrete address family.
///
///Equality of implementors is exact equality of [octets](#tymethod.octets), while ordering is
///defined by [compare](#tymethod.compare) which uses family's natural integer ordering.
pub trait NetworkAddress: Copy + Default + fmt::Debug + fmt::Display + str::FromStr + Eq + Ord + hash::Hash {
    ///Max possible length of the address in bits
    const BITS_LEN: u8;
    ///Family of the address
    const FAMILY: Family;

    #[inline(always)]
    ///Returns family of the address
    fn family(&self) -> Family {
        Self::FAMILY
    }

    ///Returns address bytes in network byte order
    fn octets(&self) -> &[u8];
    ///Returns `true` for the unspecified address
    fn is_unspecified(&self) -> bool;
    ///Returns `true` for the broadcast address
    fn is_broadcast(&self) -> bool;
    ///Returns `true` for the loopback address
    fn is_loopback(&self) -> bool;
    ///Returns `true` for the multicast address
    fn is_multicast(&self) -> bool;
    ///Returns `true` if address is neither of unspecified, broadcast or multicast
    fn is_unicast(&self) -> bool;

    ///Compares numeric value of `self` with `other`
    fn compare(&self, other: &Self) -> cmp::Ordering;
}

//Equality over raw bytes and ordering over `NetworkAddress::compare`
macro_rules! impl_address_relations {
    ($typ:ty) => {
        impl PartialEq for $typ {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                $crate::base::NetworkAddress::octets(self) == $crate::base::NetworkAddress::octets(other)
            }
        }

        impl Eq for $typ {}

        impl core::hash::Hash for $typ {
            #[inline(always)]
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash($crate::base::NetworkAddress::octets(self), state)
            }
        }

        impl PartialOrd for $typ {
            #[inline(always)]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $typ {
            #[inline(always)]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                $crate::base::NetworkAddress::compare(self, other)
            }
        }
    }
}

pub(crate) use impl_address_relations;

#[cfg(feature = "serde")]
//Serializes addresses through their canonical text form
macro_rules! impl_serde_via_str {
    ($typ:ty, $expecting:literal) => {
        impl serde::Serialize for $typ {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $typ {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct Visitor;

                impl serde::de::Visitor<'_> for Visitor {
                    type Value = $typ;

                    fn expecting(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                        fmt.write_str($expecting)
                    }

                    fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<Self::Value, E> {
                        text.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(Visitor)
            }
        }
    }
}

#[cfg(feature = "serde")]
pub(crate) use impl_serde_via_str;
