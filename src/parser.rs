use core::net;

use crate::base::Family;
use crate::prefix::MAX_LEN;
use crate::v4::{self, Ipv4Address};
use crate::v6::{self, Ipv6Address};
use crate::Address;

#[derive(Debug)]
enum ParserState {
    Initial,
    Digit,
    Sep,
}

//Dotted-decimal parser, accepting exactly the `inet_pton` grammar:
//four decimal octets without leading zeros separated by `.`
struct Ipv4Parser<'a> {
    state: ParserState,
    octets: [u8; 4],
    octets_size: u8,
    component: u16,
    component_len: u8,
    component_start: usize,
    text: &'a [u8],
}

impl Ipv4Parser<'_> {
    #[inline(always)]
    const fn on_digit(&mut self, digit: u8, pos: usize) -> Option<ParseError> {
        match self.state {
            ParserState::Digit => {
                if self.component_len == 1 && self.component == 0 {
                    return Some(ParseError::Ipv4LeadingZero(self.component_start));
                }

                self.component = self.component * 10 + (digit - b'0') as u16;
                self.component_len = self.component_len.saturating_add(1);
                if self.component > u8::MAX as u16 {
                    return Some(ParseError::Ipv4ComponentOverflow(self.component));
                }
                None
            },
            ParserState::Initial | ParserState::Sep => {
                if self.octets_size >= 4 {
                    return Some(ParseError::Ipv4InvalidComponentSize(self.octets_size.saturating_add(1)));
                }

                self.state = ParserState::Digit;
                self.component = (digit - b'0') as u16;
                self.component_len = 1;
                self.component_start = pos;
                None
            }
        }
    }

    #[inline(always)]
    const fn push_component(&mut self) {
        self.octets[self.octets_size as usize] = self.component as u8;
        self.octets_size = self.octets_size.saturating_add(1);
    }

    #[inline(always)]
    const fn on_sep(&mut self) -> Option<ParseError> {
        match self.state {
            ParserState::Digit => {
                self.push_component();
                self.state = ParserState::Sep;
                None
            },
            ParserState::Initial | ParserState::Sep => Some(ParseError::InvalidIpv4),
        }
    }

    //Handles last address component if any
    const fn on_end(&mut self) -> Result<Ipv4Address, ParseError> {
        match self.state {
            ParserState::Digit => {
                self.push_component();
                if self.octets_size == 4 {
                    Ok(Ipv4Address::from_octets(self.octets))
                } else {
                    Err(ParseError::Ipv4InvalidComponentSize(self.octets_size))
                }
            },
            ParserState::Sep => Err(ParseError::InvalidIpv4),
            ParserState::Initial => Err(ParseError::MissingIp),
        }
    }

    const fn parse(&mut self) -> Result<Ipv4Address, ParseError> {
        let mut idx = 0;

        while idx < self.text.len() {
            let ch = self.text[idx];
            if ch.is_ascii_digit() {
                if let Some(error) = self.on_digit(ch, idx) {
                    return Err(error);
                }
            } else if ch == b'.' {
                if let Some(error) = self.on_sep() {
                    return Err(error);
                }
            } else {
                return Err(ParseError::UnexpectedCharacter(char_at(self.text, idx), idx));
            }

            idx = idx + 1;
        }

        self.on_end()
    }
}

//Decodes UTF-8 character starting at `idx`.
//Everything before `idx` is ASCII, so `idx` is always at char boundary.
const fn char_at(text: &[u8], idx: usize) -> char {
    let first = text[idx];
    let (len, mut code) = match first {
        0x00..=0x7f => return first as char,
        0xc0..=0xdf => (2, (first & 0x1f) as u32),
        0xe0..=0xef => (3, (first & 0x0f) as u32),
        _ => (4, (first & 0x07) as u32),
    };

    let mut pos = 1;
    while pos < len && idx + pos < text.len() {
        code = (code << 6) | (text[idx + pos] & 0x3f) as u32;
        pos = pos + 1;
    }

    match char::from_u32(code) {
        Some(ch) => ch,
        None => char::REPLACEMENT_CHARACTER,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
///Possible errors parsing IP addr
pub enum ParseError {
    ///IP address is not specified
    #[error("Address is not specified")]
    MissingIp,
    ///Unexpected character with position where it is encountered at
    #[error("Encountered unexpected character '{0}' at idx={1}")]
    UnexpectedCharacter(char, usize),
    ///Address is not valid IPv4
    #[error("Address is not valid IPv4")]
    InvalidIpv4,
    ///IPv4 Address must have 4 components
    #[error("IPv4 Address has '{0}' components but expected 4")]
    Ipv4InvalidComponentSize(u8),
    ///IPv4 Address component is greater than 255
    #[error("IPv4 component is '{0}' while allowed range is 0..=255")]
    Ipv4ComponentOverflow(u16),
    ///IPv4 Address component starting at idx has leading zero
    #[error("IPv4 component at idx={0} has leading zero")]
    Ipv4LeadingZero(usize),
    ///Address is not valid IPv6
    #[error("Address is not valid IPv6")]
    InvalidIpv6,
    ///Prefix separator is present but prefix is not
    #[error("Prefix is not specified")]
    MissingPrefix,
    ///Prefix is not decimal number
    #[error("Invalid prefix")]
    InvalidPrefix,
    ///Prefix is greater than 32
    #[error("Prefix '{0}' is greater than 32")]
    Ipv4PrefixOverflow(u8),
    ///Prefix is greater than 128
    #[error("Prefix '{0}' is greater than 128")]
    Ipv6PrefixOverflow(u8),
    ///Network prefix is greater than max length of [Prefix](struct.Prefix.html)
    #[error("Network prefix '{0}' is greater than 128")]
    PrefixOverflow(u8),
}

///Parses dotted-decimal IPv4 literal
pub const fn parse_ipv4(text: &str) -> Result<Ipv4Address, ParseError> {
    let mut parser = Ipv4Parser {
        state: ParserState::Initial,
        octets: [0; 4],
        octets_size: 0,
        component: 0,
        component_len: 0,
        component_start: 0,
        text: text.as_bytes(),
    };
    parser.parse()
}

///Parses IPv6 literal in any of its textual forms
pub fn parse_ipv6(text: &str) -> Result<Ipv6Address, ParseError> {
    match text.parse::<net::Ipv6Addr>() {
        Ok(addr) => Ok(Ipv6Address::from(addr)),
        Err(_) => Err(ParseError::InvalidIpv6),
    }
}

//Extracts decimal prefix length, which is at most 3 digits
const fn parse_prefix_len(text: &[u8]) -> Result<u8, ParseError> {
    if text.is_empty() {
        return Err(ParseError::MissingPrefix);
    }
    if text.len() > 3 {
        return Err(ParseError::InvalidPrefix);
    }

    let mut prefix = 0u16;
    let mut idx = 0;
    while idx < text.len() {
        let ch = text[idx];
        if !ch.is_ascii_digit() {
            return Err(ParseError::InvalidPrefix);
        }
        prefix = prefix * 10 + (ch - b'0') as u16;
        idx = idx + 1;
    }

    if prefix > u8::MAX as u16 {
        Err(ParseError::InvalidPrefix)
    } else {
        Ok(prefix as u8)
    }
}

//Extracts prefix length, verifying it fits family
const fn parse_prefix(text: &[u8], family: Family) -> Result<u8, ParseError> {
    let prefix = match parse_prefix_len(text) {
        Ok(prefix) => prefix,
        Err(error) => return Err(error),
    };

    match family {
        Family::Ipv4 if prefix > v4::BITS_LEN => Err(ParseError::Ipv4PrefixOverflow(prefix)),
        Family::Ipv6 if prefix > v6::BITS_LEN => Err(ParseError::Ipv6PrefixOverflow(prefix)),
        _ => Ok(prefix),
    }
}

#[inline(always)]
fn split_prefix(text: &str) -> (&str, Option<&str>) {
    match text.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (text, None),
    }
}

///Performs parsing of the string into IP addr with optional CIDR prefix
///
///Family is selected by presence of `:` within address part.
pub fn parse_ip(text: &str) -> Result<(Address, Option<u8>), ParseError> {
    parse_ip_prefix(text).inspect_err(|error| {
        log::debug!("Rejected IP '{text}': {error}");
    })
}

fn parse_ip_prefix(text: &str) -> Result<(Address, Option<u8>), ParseError> {
    let (addr, prefix) = split_prefix(text);

    let addr = if addr.contains(':') {
        Address::V6(parse_ipv6(addr)?)
    } else {
        Address::V4(parse_ipv4(addr)?)
    };

    let prefix = match prefix {
        Some(prefix) => Some(parse_prefix(prefix.as_bytes(), addr.family())?),
        None => None,
    };

    Ok((addr, prefix))
}

//Parses IPv4 address with optional prefix of any length `Prefix` can hold.
//Unlike `parse_ip`, prefix is not limited by family so that `Ipv4Network` text form round trips.
pub(crate) fn parse_ipv4_network(text: &str) -> Result<(Ipv4Address, Option<u8>), ParseError> {
    parse_ipv4_network_prefix(text).inspect_err(|error| {
        log::debug!("Rejected IPv4 network '{text}': {error}");
    })
}

fn parse_ipv4_network_prefix(text: &str) -> Result<(Ipv4Address, Option<u8>), ParseError> {
    let (addr, prefix) = split_prefix(text);

    if addr.contains(':') {
        return Err(ParseError::InvalidIpv4);
    }
    let addr = parse_ipv4(addr)?;

    let prefix = match prefix {
        Some(prefix) => match parse_prefix_len(prefix.as_bytes())? {
            prefix if prefix > MAX_LEN => return Err(ParseError::PrefixOverflow(prefix)),
            prefix => Some(prefix),
        },
        None => None,
    };

    Ok((addr, prefix))
}
