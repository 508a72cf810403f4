//!Prefix module

use core::fmt;

use alloc::string::{String, ToString};

use crate::v4::Ipv4Address;

///Number of bits in the prefix storage, enough to fit any family
pub const MAX_LEN: u8 = 128;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, thiserror::Error)]
#[error("Network mask has non-contiguous bits")]
///Error returned when network mask cannot be expressed as prefix
pub struct PrefixLenError;

#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
///Network prefix, i.e. number of leading network bits
///
///Bits are kept counting from the lowest bit of the storage, so prefix of length `n` is stored as
///`n` lowest bits set. Conversion into network mask re-justifies them to the left.
///
///Length is not checked against address family: every length above 32 maps onto `/32` mask.
pub struct Prefix {
    bits: u128,
}

impl Prefix {
    #[inline]
    ///Creates prefix of `len` bits, saturating at [MAX_LEN](constant.MAX_LEN.html)
    pub const fn new(len: u8) -> Self {
        let len = if len > MAX_LEN { MAX_LEN } else { len };
        let bits = match u128::MAX.checked_shr((MAX_LEN - len) as u32) {
            Some(bits) => bits,
            None => 0,
        };
        Self {
            bits
        }
    }

    #[inline(always)]
    ///Returns prefix length within range `0..=128`
    pub const fn length(&self) -> u8 {
        self.bits.count_ones() as u8
    }

    ///Returns IPv4 network mask as host order integer
    ///
    ///Low 32 bits of the storage (or all ones if prefix is `/32` or longer) are shifted left by
    ///`32 - min(length, 32)`, so that mask bits start from most significant bit.
    ///`/0` yields empty mask.
    pub const fn to_u32(&self) -> u32 {
        let (bits, count) = match self.length() {
            count if count >= 32 => (u32::MAX, 32),
            count => (self.bits as u32, count as u32),
        };

        match bits.checked_shl(32 - count) {
            Some(mask) => mask,
            None => 0,
        }
    }

    #[inline(always)]
    ///Returns IPv4 network mask
    pub const fn ipv4_mask(&self) -> Ipv4Address {
        Ipv4Address::new(self.to_u32())
    }

    #[inline]
    ///Returns IPv4 network mask in dotted-decimal form
    pub fn to_string_ipv4(&self) -> String {
        self.ipv4_mask().to_string()
    }

    ///Converts IPv4 network mask into prefix
    ///
    ///Returns `Err` if mask bits are not contiguous from the left
    pub const fn from_ipv4_mask(mask: Ipv4Address) -> Result<Self, PrefixLenError> {
        let mask = mask.to_u32();
        let len = mask.leading_ones();
        let rest = match mask.checked_shl(len) {
            Some(rest) => rest,
            None => 0,
        };

        if rest == 0 {
            Ok(Self::new(len as u8))
        } else {
            Err(PrefixLenError)
        }
    }
}

impl From<u8> for Prefix {
    #[inline(always)]
    fn from(len: u8) -> Self {
        Self::new(len)
    }
}

impl fmt::Display for Prefix {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.length(), fmt)
    }
}

impl fmt::Debug for Prefix {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_fmt(format_args!("/{}", self.length()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Prefix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.length())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Prefix {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let len = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        if len > MAX_LEN {
            return Err(serde::de::Error::custom(format_args!("Prefix '{len}' is greater than {MAX_LEN}")));
        }
        Ok(Self::new(len))
    }
}
