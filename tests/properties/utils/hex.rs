use evm_chain_scanner::utils::hex::{hex_to_u64, parse_hex_u256, wei_hex_to_eth};
use proptest::{prelude::*, test_runner::Config};

const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Reference rendering of a wei amount using plain integer arithmetic
fn expected_eth(wei: u128) -> String {
	let whole = wei / WEI_PER_ETH;
	let fraction = wei % WEI_PER_ETH;
	if fraction == 0 {
		return whole.to_string();
	}
	let fraction = format!("{:018}", fraction);
	format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_wei_rendering_matches_integer_division(wei in any::<u128>()) {
		let rendered = wei_hex_to_eth(&format!("{:#x}", wei));
		prop_assert_eq!(rendered, expected_eth(wei));
	}

	#[test]
	fn test_wei_rendering_is_case_insensitive(wei in any::<u64>()) {
		let lower = wei_hex_to_eth(&format!("0x{:x}", wei));
		let upper = wei_hex_to_eth(&format!("0x{:X}", wei));
		prop_assert_eq!(lower, upper);
	}

	#[test]
	fn test_rendering_never_ends_with_zero_fraction(wei in any::<u128>()) {
		let rendered = wei_hex_to_eth(&format!("{:#x}", wei));
		if let Some((_, fraction)) = rendered.split_once('.') {
			prop_assert!(!fraction.is_empty());
			prop_assert!(fraction.len() <= 18);
			prop_assert!(!fraction.ends_with('0'));
		}
	}

	#[test]
	fn test_arbitrary_input_renders_a_number(input in ".{0,80}") {
		let rendered = wei_hex_to_eth(&input);
		prop_assert!(!rendered.is_empty());
		prop_assert!(rendered.chars().all(|c| c.is_ascii_digit() || c == '.'));
		prop_assert_eq!(&rendered, &wei_hex_to_eth(&input));
	}

	#[test]
	fn test_non_hex_payload_is_unparsable(
		prefix in "[0-9a-f]{0,8}",
		bad in "[g-z]",
		suffix in "[0-9a-f]{0,8}",
	) {
		let input = format!("0x{}{}{}", prefix, bad, suffix);
		prop_assert!(parse_hex_u256(&input).is_unparsable());
		prop_assert_eq!(wei_hex_to_eth(&input), "0");
		prop_assert_eq!(hex_to_u64(&input), 0);
	}

	#[test]
	fn test_hex_to_u64_decodes_quantities(value in any::<u64>()) {
		prop_assert_eq!(hex_to_u64(&format!("{:#x}", value)), value);
	}
}
