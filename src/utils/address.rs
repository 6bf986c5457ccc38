//! EVM address helpers.
//!
//! Format validation and EIP-55 checksum handling for `0x`-prefixed, 20-byte account
//! addresses.

use alloy::primitives::Address;

use crate::utils::hex::strip_hex_prefix;

/// Number of bytes in an address
pub const ADDRESS_BYTES: usize = 20;

/// Number of hex digits in an address
pub const ADDRESS_HEX_LEN: usize = 40;

/// Length of an address string including the `0x` prefix
pub const ADDRESS_STR_LEN: usize = 42;

/// Returns true if `address` is `0x` followed by exactly 40 hex digits (any case)
pub fn is_valid(address: &str) -> bool {
	if address.len() != ADDRESS_STR_LEN {
		return false;
	}

	let digits = strip_hex_prefix(address);
	digits.len() == ADDRESS_HEX_LEN && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns true if `address` is a valid address made only of zeros
pub fn is_zero(address: &str) -> bool {
	is_valid(address) && address[2..].chars().all(|c| c == '0')
}

/// Lowercases the hex digits, normalizing the prefix to `0x`
pub fn to_lower(address: &str) -> String {
	format!("0x{}", strip_hex_prefix(address).to_ascii_lowercase())
}

/// Returns the EIP-55 checksummed form, or `None` for an invalid address
pub fn to_checksum(address: &str) -> Option<String> {
	if !is_valid(address) {
		return None;
	}

	let bytes = alloy::primitives::hex::decode(&address[2..]).ok()?;
	if bytes.len() != ADDRESS_BYTES {
		return None;
	}

	Some(Address::from_slice(&bytes).to_checksum(None))
}

/// Returns true if `address` is already in its exact EIP-55 checksummed form.
///
/// An all-lowercase address does not pass this check.
pub fn verify_checksum(address: &str) -> bool {
	to_checksum(address).is_some_and(|checksummed| checksummed == address)
}

/// Left-pads an address to a 32-byte log topic (`0x` + 64 hex digits)
pub fn to_topic(address: &str) -> String {
	format!("0x{:0>64}", strip_hex_prefix(address))
}
