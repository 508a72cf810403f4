use core::cmp::Ordering;

use proptest::prelude::*;

use ip_hosts::{Ipv4Address, Ipv4Network, NetworkAddress, Prefix};

fn dotted_decimal() -> impl Strategy<Value = String> {
    any::<[u8; 4]>().prop_map(|[a, b, c, d]| format!("{a}.{b}.{c}.{d}"))
}

proptest! {
    #[test]
    fn should_round_trip_u32(bits in any::<u32>()) {
        prop_assert_eq!(Ipv4Address::new(bits).to_u32(), bits);
    }

    #[test]
    fn should_round_trip_text(text in dotted_decimal()) {
        let addr: Ipv4Address = text.parse().expect("to parse");
        prop_assert_eq!(addr.to_string(), text);
    }

    #[test]
    fn should_order_totally(a in any::<u32>(), b in any::<u32>()) {
        let (a, b) = (Ipv4Address::new(a), Ipv4Address::new(b));
        prop_assert_eq!(a, a);

        let relations = [a < b, a == b, a > b];
        prop_assert_eq!(relations.iter().filter(|holds| **holds).count(), 1);
        prop_assert_eq!(a.compare(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn should_build_contiguous_mask(len in 0u8..=32) {
        let prefix = Prefix::new(len);
        let mask = prefix.to_u32();
        prop_assert_eq!(prefix.length(), len);
        prop_assert_eq!(mask.leading_ones(), len as u32);
        prop_assert_eq!(mask.count_ones(), len as u32);
    }

    #[test]
    fn should_clamp_mask(len in 32u8..=128) {
        prop_assert_eq!(Prefix::new(len).to_u32(), u32::MAX);
    }

    #[test]
    fn should_exclude_network_and_broadcast(addr in any::<u32>(), len in 0u8..=30) {
        let network = Ipv4Network::from_bits(addr, len);
        let hosts = network.hosts();
        prop_assert_eq!(hosts.len(), (1u64 << (32 - len)) - 2);
        prop_assert!(!hosts.contains(network.network()));
        prop_assert!(!hosts.contains(network.broadcast()));
        prop_assert_eq!(hosts.first(), network.network().next());
        prop_assert_eq!(hosts.last(), network.broadcast().prev());
    }

    #[test]
    fn should_keep_point_to_point_hosts(addr in any::<u32>()) {
        let network = Ipv4Network::from_bits(addr, 31);
        let hosts = network.hosts();
        prop_assert_eq!(hosts.len(), 2);
        prop_assert_eq!(hosts.first(), network.network());
        prop_assert_eq!(hosts.last(), network.broadcast());
    }

    #[test]
    fn should_keep_single_host(addr in any::<u32>()) {
        let hosts = Ipv4Network::from_bits(addr, 32).hosts();
        prop_assert_eq!(hosts.len(), 1);
        prop_assert_eq!(hosts.iter().collect::<Vec<_>>(), vec![Ipv4Address::new(addr)]);
    }

    #[test]
    fn should_normalize_network(addr in any::<u32>(), other in any::<u32>(), len in 0u8..=32) {
        let network = Ipv4Network::from_bits(addr, len);
        prop_assert_eq!(network.network(), network.address() & network.netmask());
        prop_assert!(network.contains(network.address()));

        let sibling = Ipv4Network::from_bits(other, len);
        prop_assert_eq!(network == sibling, network.contains(sibling.address()));
    }
}
