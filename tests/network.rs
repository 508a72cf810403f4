use ip_hosts::{Ipv4Address, Ipv4AddressRangeIterator, Ipv4Network, ParseError, Prefix};

#[test]
fn should_default_to_unspecified() {
    let network = Ipv4Network::default();
    assert_eq!(network.address().to_u32(), 0);
    assert_eq!(network.prefix().length(), 0);
}

#[test]
fn should_keep_address_as_given() {
    let network = Ipv4Network::from_bits(0x01020304, 16);
    assert_eq!(network.address().to_u32(), 0x01020304);
    assert_eq!(network.prefix().length(), 16);

    let network = Ipv4Network::new(Ipv4Address::new(0x01020304), Prefix::new(16));
    assert_eq!(network.address().to_u32(), 0x01020304);
    assert_eq!(network.prefix().length(), 16);
    assert_eq!(network.network().to_u32(), 0x01020000);
    //stored address is not normalized
    assert_eq!(network.address().to_u32(), 0x01020304);
}

#[test]
fn should_compare_normalized_network() {
    let network1 = Ipv4Network::from_bits(0x01020304, 16);
    let network2 = Ipv4Network::from_bits(0x01020405, 16);
    let network3 = Ipv4Network::from_bits(0x01020304, 17);
    let network4 = Ipv4Network::from_bits(0x01030304, 16);
    assert_eq!(network1, network2);
    assert_ne!(network1, network3);
    assert_ne!(network1, network4);
    assert_ne!(network3, network4);
}

#[test]
fn should_compute_netmask() {
    let mut mask = 0u32;
    for len in 0..=32 {
        let network = Ipv4Network::from_bits(0x01020304, len);
        assert_eq!(network.netmask(), Ipv4Address::new(mask), "/{len}");
        mask |= 0x80000000u32.checked_shr(len as u32).unwrap_or(0);
    }
}

#[test]
fn should_compute_network_addr() {
    let addr = 0x01020304u32;
    let mut mask = 0u32;
    for len in 0..=32 {
        let network = Ipv4Network::from_bits(addr, len);
        assert_eq!(network.network(), Ipv4Address::new(addr & mask), "/{len}");
        assert_eq!(network.network(), network.address() & network.netmask());
        mask |= 0x80000000u32.checked_shr(len as u32).unwrap_or(0);
    }
}

#[test]
fn should_compute_broadcast_addr() {
    let addr = 0x01020304u32;
    let mut host_mask = u32::MAX;
    for len in 0..=32 {
        let network = Ipv4Network::from_bits(addr, len);
        assert_eq!(network.broadcast(), Ipv4Address::new(addr | host_mask), "/{len}");
        assert_eq!(network.broadcast(), network.network() | !network.netmask());
        host_mask >>= 1;
    }
}

#[test]
fn should_select_hosts_by_prefix() {
    let addr = Ipv4Address::new(0x01020304);
    for len in 0..=32 {
        let network = Ipv4Network::new(addr, Prefix::new(len));
        let (begin, end) = match len {
            31 => (network.network().to_u32() as u64, network.broadcast().to_u32() as u64 + 1),
            32 => (addr.to_u32() as u64, addr.to_u32() as u64 + 1),
            _ => (network.network().to_u32() as u64 + 1, network.broadcast().to_u32() as u64),
        };

        let hosts = network.hosts();
        assert_eq!(hosts.begin(), Ipv4AddressRangeIterator::new(begin), "/{len}");
        assert_eq!(hosts.end(), Ipv4AddressRangeIterator::new(end), "/{len}");
    }
}

#[test]
fn should_count_hosts() {
    for len in 0..=30u8 {
        let network = Ipv4Network::from_bits(0x01020304, len);
        let hosts = network.hosts();
        assert_eq!(hosts.len(), (1u64 << (32 - len)) - 2, "/{len}");
        assert!(!hosts.contains(network.network()), "/{len}");
        assert!(!hosts.contains(network.broadcast()), "/{len}");
    }

    let hosts = Ipv4Network::from_bits(0x01020304, 31).hosts();
    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts.iter().collect::<Vec<_>>(), [Ipv4Address::new(0x01020304), Ipv4Address::new(0x01020305)]);

    let hosts = Ipv4Network::from_bits(0x01020304, 32).hosts();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts.iter().collect::<Vec<_>>(), [Ipv4Address::new(0x01020304)]);
}

#[test]
fn should_enumerate_hosts_of_24() {
    let network = Ipv4Network::from_bits(0x01020304, 24);
    assert_eq!(network.network().to_string(), "1.2.3.0");
    assert_eq!(network.broadcast().to_string(), "1.2.3.255");

    let hosts = network.hosts();
    assert_eq!(hosts.begin().get().to_string(), "1.2.3.1");
    assert_eq!(hosts.end().get().to_string(), "1.2.3.255");

    let mut expected = Ipv4Address::new(0x01020301);
    let mut count = 0;
    for host in hosts {
        assert_eq!(host, expected.advance());
        count += 1;
    }
    assert_eq!(count, 254);
}

#[test]
fn should_not_special_case_long_prefix() {
    //Prefix longer than 32 falls into generic policy, yielding inverted range
    let network = Ipv4Network::from_bits(0x01020304, 40);
    assert_eq!(network.netmask(), Ipv4Address::BROADCAST);
    assert_eq!(network.network(), network.address());
    assert_eq!(network.broadcast(), network.address());

    let hosts = network.hosts();
    assert_eq!(hosts.first().to_u32(), 0x01020305);
    assert_eq!(hosts.last().to_u32(), 0x01020303);
    assert!(hosts.is_empty());
    assert_eq!(hosts.iter().next(), None);
}

#[test]
fn should_check_containment() {
    let network: Ipv4Network = "10.1.2.3/16".parse().expect("to parse");
    assert!(network.contains("10.1.0.0".parse().expect("to parse")));
    assert!(network.contains("10.1.255.255".parse().expect("to parse")));
    assert!(!network.contains("10.2.0.0".parse().expect("to parse")));
    assert!(!network.contains("10.0.255.255".parse().expect("to parse")));

    assert!(Ipv4Network::from_bits(0, 0).contains(Ipv4Address::BROADCAST));
}

#[test]
fn should_parse_network() {
    let network: Ipv4Network = "192.168.1.10/24".parse().expect("to parse");
    assert_eq!(network.address().to_string(), "192.168.1.10");
    assert_eq!(network.prefix().length(), 24);
    assert_eq!(network.to_string(), "192.168.1.10/24");

    let network: Ipv4Network = "192.168.1.10".parse().expect("to parse");
    assert_eq!(network.prefix().length(), 32);

    let inputs = [
        ("192.168.1.10/129", ParseError::PrefixOverflow(129)),
        ("192.168.1.10/255", ParseError::PrefixOverflow(255)),
        ("192.168.1.10/", ParseError::MissingPrefix),
        ("192.168.1.10/a", ParseError::InvalidPrefix),
        ("192.168.1.10/999", ParseError::InvalidPrefix),
        ("/24", ParseError::MissingIp),
        ("::1/64", ParseError::InvalidIpv4),
    ];
    for (text, expected_error) in inputs {
        println!("Parse '{text}'");
        let error = text.parse::<Ipv4Network>().expect_err("should fail");
        assert_eq!(error, expected_error);
    }
}

#[test]
fn should_parse_long_prefix_back() {
    let network = Ipv4Network::from_bits(0x01020304, 40);
    let text = network.to_string();
    assert_eq!(text, "1.2.3.4/40");

    let parsed: Ipv4Network = text.parse().expect("to parse");
    assert_eq!(parsed, network);
    assert_eq!(parsed.address(), network.address());
    assert_eq!(parsed.prefix().length(), 40);

    let parsed: Ipv4Network = "1.2.3.4/128".parse().expect("to parse");
    assert_eq!(parsed.prefix().length(), 128);
    let parsed: Ipv4Network = "1.2.3.4/33".parse().expect("to parse");
    assert_eq!(parsed, Ipv4Network::from_bits(0x01020304, 33));
}

#[test]
fn should_take_default() {
    let mut network = Ipv4Network::from_bits(0x01020304, 16);
    let taken = core::mem::take(&mut network);
    assert_eq!(taken.address().to_u32(), 0x01020304);
    assert_eq!(network.address().to_u32(), 0);
}
