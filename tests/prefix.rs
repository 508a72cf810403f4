use ip_hosts::{Ipv4Address, Prefix, PrefixLenError, MAX_LEN};

#[test]
fn should_keep_length() {
    for len in 0..=MAX_LEN {
        assert_eq!(Prefix::new(len).length(), len);
    }

    assert_eq!(Prefix::default().length(), 0);
    assert_eq!(Prefix::from(10).length(), 10);
}

#[test]
fn should_saturate_length() {
    assert_eq!(Prefix::new(129).length(), 128);
    assert_eq!(Prefix::new(u8::MAX), Prefix::new(128));
}

#[test]
fn should_compare_by_length() {
    assert_eq!(Prefix::new(16), Prefix::new(16));
    assert_ne!(Prefix::new(16), Prefix::new(17));
    assert!(Prefix::new(16) < Prefix::new(17));
    assert!(Prefix::new(0) < Prefix::new(128));
}

#[test]
fn should_convert_to_mask() {
    let mut mask = 0u32;
    for len in 0..=MAX_LEN {
        let prefix = Prefix::new(len);
        if len > 31 {
            mask = u32::MAX;
        } else if len > 0 {
            mask |= 1 << (32 - len);
        }
        assert_eq!(prefix.to_u32(), mask, "/{len} has invalid mask");
        assert_eq!(prefix.ipv4_mask(), Ipv4Address::new(mask));
    }
}

#[test]
fn should_left_justify_mask() {
    for len in 0..=32u8 {
        let mask = Prefix::new(len).to_u32();
        assert_eq!(mask.leading_ones(), len as u32, "/{len}");
        assert_eq!(mask.count_ones(), len as u32, "/{len}");
    }
}

#[test]
fn should_format_ipv4_mask() {
    let inputs = [
        (0, "0.0.0.0"),
        (1, "128.0.0.0"),
        (8, "255.0.0.0"),
        (15, "255.254.0.0"),
        (16, "255.255.0.0"),
        (24, "255.255.255.0"),
        (31, "255.255.255.254"),
        (32, "255.255.255.255"),
        (64, "255.255.255.255"),
        (128, "255.255.255.255"),
    ];

    for (len, expected) in inputs {
        assert_eq!(Prefix::new(len).to_string_ipv4(), expected, "/{len}");
    }
}

#[test]
fn should_format_length() {
    assert_eq!(Prefix::new(24).to_string(), "24");
    assert_eq!(format!("{:?}", Prefix::new(24)), "/24");
}

#[test]
fn should_convert_from_ipv4_mask() {
    for len in 0..=32 {
        let prefix = Prefix::new(len);
        assert_eq!(Prefix::from_ipv4_mask(prefix.ipv4_mask()), Ok(prefix));
    }

    let invalid = [
        "255.0.255.0",
        "0.0.0.1",
        "255.255.255.253",
        "127.0.0.0",
    ];
    for text in invalid {
        let mask: Ipv4Address = text.parse().expect("to parse");
        assert_eq!(Prefix::from_ipv4_mask(mask), Err(PrefixLenError), "{text}");
    }
}
