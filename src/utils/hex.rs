//! Hex and wei conversion helpers.
//!
//! JSON-RPC nodes encode quantities as `0x`-prefixed hex strings. The helpers here decode
//! them into native integers and render wei amounts as ETH-denominated decimals.
//!
//! Decoding never fails loudly: a payload that cannot be read is reported as
//! [`ParsedHex::Unparsable`], and the `*_or_zero` style callers collapse it to zero. A zero
//! produced this way means "unknown", not "confirmed zero".

use alloy::primitives::U256;

/// Number of wei in one whole native unit (10^18)
pub const WEI_PER_ETH: u64 = 1_000_000_000_000_000_000;

/// Number of fractional digits in an ETH amount
const ETH_DECIMALS: usize = 18;

/// Outcome of decoding a hex quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedHex<T> {
	/// The payload was valid hex and fit in the target type
	Value(T),
	/// The payload was empty, contained a non-hex character or overflowed
	Unparsable,
}

impl<T: Default> ParsedHex<T> {
	/// Returns the decoded value, substituting the zero value for unparsable input
	pub fn or_zero(self) -> T {
		match self {
			Self::Value(value) => value,
			Self::Unparsable => T::default(),
		}
	}

	/// Returns the decoded value if there was one
	pub fn value(self) -> Option<T> {
		match self {
			Self::Value(value) => Some(value),
			Self::Unparsable => None,
		}
	}

	pub fn is_unparsable(&self) -> bool {
		matches!(self, Self::Unparsable)
	}
}

/// Strips an optional `0x`/`0X` prefix
pub fn strip_hex_prefix(hex: &str) -> &str {
	hex.strip_prefix("0x")
		.or_else(|| hex.strip_prefix("0X"))
		.unwrap_or(hex)
}

/// Returns the hex digits of `hex` if every character after the prefix is a hex digit
fn hex_digits(hex: &str) -> Option<&str> {
	let digits = strip_hex_prefix(hex);
	if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
		return None;
	}
	Some(digits)
}

/// Decodes a hex quantity into a `u64`
pub fn parse_hex_u64(hex: &str) -> ParsedHex<u64> {
	hex_digits(hex)
		.and_then(|digits| u64::from_str_radix(digits, 16).ok())
		.map_or(ParsedHex::Unparsable, ParsedHex::Value)
}

/// Decodes a hex quantity into a 256-bit unsigned integer
pub fn parse_hex_u256(hex: &str) -> ParsedHex<U256> {
	hex_digits(hex)
		.and_then(|digits| U256::from_str_radix(digits, 16).ok())
		.map_or(ParsedHex::Unparsable, ParsedHex::Value)
}

/// Decodes a hex quantity into a `u64`, falling back to 0 when it cannot be read
pub fn hex_to_u64(hex: &str) -> u64 {
	parse_hex_u64(hex).or_zero()
}

/// Renders a wei amount encoded as hex into a decimal ETH string.
///
/// The fractional part carries at most 18 digits with trailing zeros removed, and is
/// omitted entirely for whole amounts:
///
/// - `""` and `"0x0"` become `"0"`
/// - `"0x1"` becomes `"0.000000000000000001"`
/// - `"0xde0b6b3a7640000"` (10^18) becomes `"1"`
///
/// Unparsable payloads render as `"0"`.
pub fn wei_hex_to_eth(wei_hex: &str) -> String {
	if wei_hex.is_empty() || wei_hex == "0x0" {
		return "0".to_string();
	}

	format_wei(parse_hex_u256(wei_hex).or_zero())
}

/// Renders a wei amount as a decimal ETH string
pub fn format_wei(wei: U256) -> String {
	let scale = U256::from(WEI_PER_ETH);
	let whole = wei / scale;
	let fraction = wei % scale;

	if fraction.is_zero() {
		return whole.to_string();
	}

	let fraction = format!("{:0>width$}", fraction.to_string(), width = ETH_DECIMALS);
	format!("{}.{}", whole, fraction.trim_end_matches('0'))
}
