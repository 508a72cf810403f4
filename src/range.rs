//!IPv4 address range module

use core::iter::FusedIterator;

use crate::v4::Ipv4Address;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
///Position within [Ipv4AddressRange](struct.Ipv4AddressRange.html)
///
///Counter is 64 bit wide, so that position past `255.255.255.255` is `0x1_0000_0000` and cannot
///be confused with `0.0.0.0`
pub struct Ipv4AddressRangeIterator {
    curr: u64,
}

impl Ipv4AddressRangeIterator {
    #[inline(always)]
    ///Creates cursor at `start`
    pub const fn new(start: u64) -> Self {
        Self {
            curr: start
        }
    }

    #[inline(always)]
    ///Returns raw counter
    pub const fn position(&self) -> u64 {
        self.curr
    }

    #[inline(always)]
    ///Returns address at the current position, truncating counter to 32 bits
    pub const fn get(&self) -> Ipv4Address {
        Ipv4Address::new(self.curr as u32)
    }

    #[inline]
    ///Moves to the next position, returning previous one
    pub fn advance(&mut self) -> Self {
        let current = *self;
        self.curr = self.curr.wrapping_add(1);
        current
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
///Inclusive range of IPv4 addresses
///
///Addresses are never materialized, iteration produces them one by one.
///
///Bounds are not validated: if `first > last` range is empty.
pub struct Ipv4AddressRange {
    first: Ipv4Address,
    last: Ipv4Address,
}

impl Ipv4AddressRange {
    #[inline(always)]
    ///Creates range `[first, last]`
    pub const fn new(first: Ipv4Address, last: Ipv4Address) -> Self {
        Self {
            first,
            last,
        }
    }

    #[inline(always)]
    ///Creates range `[first, last]` out of host order integers
    pub const fn from_bits(first: u32, last: u32) -> Self {
        Self::new(Ipv4Address::new(first), Ipv4Address::new(last))
    }

    #[inline(always)]
    ///Returns first address of the range
    pub const fn first(&self) -> Ipv4Address {
        self.first
    }

    #[inline(always)]
    ///Returns last address of the range
    pub const fn last(&self) -> Ipv4Address {
        self.last
    }

    #[inline(always)]
    ///Returns position of the first address
    pub const fn begin(&self) -> Ipv4AddressRangeIterator {
        Ipv4AddressRangeIterator::new(self.first.to_u32() as u64)
    }

    #[inline(always)]
    ///Returns position one past the last address
    pub const fn end(&self) -> Ipv4AddressRangeIterator {
        Ipv4AddressRangeIterator::new(self.last.to_u32() as u64 + 1)
    }

    #[inline(always)]
    ///Returns number of addresses within range
    pub const fn len(&self) -> u64 {
        self.end().position().saturating_sub(self.begin().position())
    }

    #[inline(always)]
    ///Returns `true` if range has no addresses
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    ///Checks if a given `addr` is within range
    pub const fn contains(&self, addr: Ipv4Address) -> bool {
        let addr = addr.to_u32();
        self.first.to_u32() <= addr && addr <= self.last.to_u32()
    }

    #[inline(always)]
    ///Returns iterator over addresses of the range
    pub const fn iter(&self) -> Iter {
        Iter {
            cursor: self.begin(),
            end: self.end(),
        }
    }
}

impl IntoIterator for Ipv4AddressRange {
    type Item = Ipv4Address;
    type IntoIter = Iter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Ipv4AddressRange {
    type Item = Ipv4Address;
    type IntoIter = Iter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
///Iterator over [Ipv4AddressRange](struct.Ipv4AddressRange.html)
pub struct Iter {
    cursor: Ipv4AddressRangeIterator,
    end: Ipv4AddressRangeIterator,
}

impl Iter {
    #[inline(always)]
    fn remaining(&self) -> u64 {
        self.end.position().saturating_sub(self.cursor.position())
    }
}

impl Iterator for Iter {
    type Item = Ipv4Address;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor < self.end {
            Some(self.cursor.advance().get())
        } else {
            None
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = u64::try_from(n).unwrap_or(u64::MAX).min(self.remaining());
        self.cursor = Ipv4AddressRangeIterator::new(self.cursor.position() + skip);
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }

    #[inline]
    ///Saturates at `usize::MAX` where the remaining count does not fit `usize`, which is the case
    ///for the whole address space on 32 bit targets. Use [Ipv4AddressRange::len](struct.Ipv4AddressRange.html#method.len)
    ///to get exact `u64` count.
    fn count(self) -> usize {
        usize::try_from(self.remaining()).unwrap_or(usize::MAX)
    }
}

impl DoubleEndedIterator for Iter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.cursor < self.end {
            self.end = Ipv4AddressRangeIterator::new(self.end.position() - 1);
            Some(self.end.get())
        } else {
            None
        }
    }
}

impl FusedIterator for Iter {}
